// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above the current page. The lightbox overlay and the
//! toasts are stacked on top of everything, in that order.

use super::{Message, Screen};
use crate::app::i18n::fluent::I18n;
use crate::ui::admin;
use crate::ui::contact;
use crate::ui::info;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::portfolio;
use crate::ui::remote_image;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub window_width: f32,
    pub images: &'a remote_image::Cache,
    pub portfolio: &'a portfolio::State,
    pub info: &'a info::State,
    pub contact: &'a contact::State,
    pub admin: &'a admin::State,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        current: ctx.screen,
        signed_in: ctx.admin.session().is_some(),
    })
    .map(Message::Navbar);

    let portfolio_ctx = portfolio::ViewContext {
        i18n: ctx.i18n,
        images: ctx.images,
        window_width: ctx.window_width,
    };

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Portfolio => ctx.portfolio.view(&portfolio_ctx).map(Message::Portfolio),
        Screen::Info => ctx.info.view(ctx.i18n, ctx.images).map(Message::Info),
        Screen::Contact => ctx.contact.view(ctx.i18n).map(Message::Contact),
        Screen::Admin => ctx
            .admin
            .view(&admin::ViewContext {
                i18n: ctx.i18n,
                images: ctx.images,
            })
            .map(Message::Admin),
    };

    let page = Column::new()
        .push(navbar_view)
        .push(
            Container::new(current_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page);

    if ctx.screen == Screen::Portfolio {
        if let Some(overlay) = ctx.portfolio.view_overlay(&portfolio_ctx) {
            stack = stack.push(overlay.map(Message::Portfolio));
        }
    }

    if ctx.notifications.has_notifications() {
        let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);
        stack = stack.push(toasts);
    }

    stack.into()
}
