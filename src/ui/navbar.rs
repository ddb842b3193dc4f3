// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every page.
//!
//! Links to the public pages on the left and the admin panel on the right.
//! The link for the current page is highlighted.

use crate::app::i18n::fluent::I18n;
use crate::app::Screen;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
    /// Whether an admin session is active (changes the admin link label).
    pub signed_in: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Screen),
}

/// Process a navbar message and return the corresponding event.
#[must_use]
pub fn update(message: Message, current: Screen) -> Event {
    match message {
        Message::Navigate(screen) if screen == current => Event::None,
        Message::Navigate(screen) => Event::Navigate(screen),
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_SM);

    let admin_label = if ctx.signed_in {
        ctx.i18n.tr("nav-dashboard")
    } else {
        ctx.i18n.tr("nav-admin")
    };

    let row = Row::new()
        .spacing(spacing::SM)
        .padding(spacing::SM)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fixed(spacing::LG)))
        .push(link(ctx.i18n.tr("nav-portfolio"), Screen::Portfolio, ctx.current))
        .push(link(ctx.i18n.tr("nav-info"), Screen::Info, ctx.current))
        .push(link(ctx.i18n.tr("nav-contact"), Screen::Contact, ctx.current))
        .push(Space::new().width(Length::Fill))
        .push(link(admin_label, Screen::Admin, ctx.current));

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

fn link<'a>(label: String, target: Screen, current: Screen) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(Message::Navigate(target))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::link(target == current))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            current: Screen::Portfolio,
            signed_in: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_signed_in() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            current: Screen::Admin,
            signed_in: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navigating_elsewhere_emits_event() {
        let event = update(Message::Navigate(Screen::Contact), Screen::Portfolio);
        assert_eq!(event, Event::Navigate(Screen::Contact));
    }

    #[test]
    fn navigating_to_current_page_is_ignored() {
        let event = update(Message::Navigate(Screen::Info), Screen::Info);
        assert_eq!(event, Event::None);
    }
}
