// SPDX-License-Identifier: MPL-2.0
//! Rendering of the admin panel.

use super::{Message, State, Tab};
use crate::app::i18n::fluent::I18n;
use crate::domain::portfolio::Project;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::remote_image;
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Length};

/// Contextual data needed to render the admin panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a remote_image::Cache,
}

impl State {
    pub fn view<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let Some(session) = &self.session else {
            return self.login.view(ctx.i18n, self.busy).map(Message::Login);
        };

        let header = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(Text::new(ctx.i18n.tr("admin-title")).size(typography::TITLE_LG))
            .push(Space::new().width(Length::Fill))
            .push(Text::new(session.email.as_str()).size(typography::CAPTION))
            .push(
                button(Text::new(ctx.i18n.tr("admin-sign-out")))
                    .on_press(Message::SignOut)
                    .style(styles::button::link(false)),
            );

        let tabs = Row::new()
            .spacing(spacing::XS)
            .push(tab_button(ctx.i18n.tr("admin-tab-projects"), Tab::Projects, self.tab))
            .push(tab_button(ctx.i18n.tr("admin-tab-info"), Tab::InfoPage, self.tab));

        let body = match self.tab {
            Tab::Projects => match &self.form {
                Some(form) => form.view(ctx.i18n, ctx.images, self.busy).map(Message::Form),
                None => self.view_projects(ctx),
            },
            Tab::InfoPage => self.view_info(ctx),
        };

        let content = Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(tabs)
            .push(body);

        scrollable(
            Container::new(content)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .padding(spacing::LG),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    fn view_projects<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let new_project = button(Text::new(ctx.i18n.tr("admin-new-project")))
            .on_press_maybe((!self.busy).then_some(Message::NewProject))
            .style(styles::button::primary);

        let mut list = Column::new().spacing(spacing::XS).push(new_project);
        if self.projects.is_empty() {
            list = list.push(Text::new(ctx.i18n.tr("admin-no-projects")));
        }
        for project in &self.projects {
            list = list.push(self.project_row(project, ctx));
        }
        list.into()
    }

    fn project_row<'a>(&self, project: &'a Project, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let thumbnail: Element<'a, Message> = match &project.thumbnail_url {
            Some(url) => ctx.images.view(url, ContentFit::Cover),
            None => Container::new(Text::new(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::placeholder)
                .into(),
        };

        let details = Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(project.title.as_str()).size(typography::BODY_LG))
            .push(
                Text::new(format!(
                    "{} · {}",
                    project.category,
                    ctx.i18n.tr(project.status.i18n_key())
                ))
                .size(typography::CAPTION),
            );

        let edit = button(Text::new(ctx.i18n.tr("admin-edit")))
            .on_press_maybe((!self.busy).then_some(Message::EditProject(project.id)))
            .style(styles::button::link(false));
        let delete = button(Text::new(ctx.i18n.tr("admin-delete")))
            .on_press_maybe((!self.busy).then_some(Message::DeleteProject(project.id)))
            .style(styles::button::danger);

        let row = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Container::new(thumbnail)
                    .width(Length::Fixed(sizing::ADMIN_THUMBNAIL))
                    .height(Length::Fixed(sizing::ADMIN_THUMBNAIL)),
            )
            .push(details)
            .push(Space::new().width(Length::Fill))
            .push(edit)
            .push(delete);

        Container::new(row)
            .padding(spacing::XS)
            .width(Length::Fill)
            .style(styles::container::card)
            .into()
    }

    fn view_info<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let current: Element<'a, Message> = match &self.info_page {
            Some(page) => Container::new(ctx.images.view(&page.image_url, ContentFit::Contain))
                .width(Length::Fixed(sizing::FORM_MAX_WIDTH))
                .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
                .into(),
            None => Text::new(ctx.i18n.tr("info-empty")).into(),
        };

        let picked = match &self.info_file {
            Some(file) => Text::new(file.file_name.as_str()),
            None => Text::new(ctx.i18n.tr("admin-no-file")),
        }
        .size(typography::CAPTION);

        let pick = button(Text::new(ctx.i18n.tr("admin-pick-info-image")))
            .on_press_maybe((!self.busy).then_some(Message::PickInfoImage))
            .style(styles::button::link(false));
        let publish = button(Text::new(ctx.i18n.tr("admin-publish")))
            .on_press_maybe(
                (!self.busy && self.info_file.is_some()).then_some(Message::PublishInfo),
            )
            .style(styles::button::primary);
        let clear = button(Text::new(ctx.i18n.tr("admin-clear-info")))
            .on_press_maybe(
                (!self.busy && self.info_page.is_some()).then_some(Message::ClearInfo),
            )
            .style(styles::button::danger);

        let panel = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(ctx.i18n.tr("info-title")).size(typography::TITLE_MD))
            .push(current)
            .push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center)
                    .push(pick)
                    .push(picked),
            )
            .push(Row::new().spacing(spacing::SM).push(publish).push(clear));

        Container::new(panel)
            .padding(spacing::LG)
            .width(Length::Fill)
            .style(styles::container::panel)
            .into()
    }
}

fn tab_button<'a>(label: String, tab: Tab, selected: Tab) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(Message::SelectTab(tab))
        .style(styles::button::link(tab == selected))
        .into()
}
