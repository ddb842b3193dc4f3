// SPDX-License-Identifier: MPL-2.0
//! Info page: the single image the owner publishes about themselves.

use crate::app::i18n::fluent::I18n;
use crate::application::port::{InfoPageStore, ServiceError};
use crate::domain::portfolio::InfoPage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::remote_image;
use iced::alignment::Horizontal;
use iced::widget::{scrollable, Column, Container, Text};
use iced::{ContentFit, Element, Length, Task};

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Option<InfoPage>, ServiceError>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    RequestImages(Vec<String>),
    LoadFailed(ServiceError),
}

#[derive(Debug, Default)]
pub struct State {
    page: Option<InfoPage>,
    loading: bool,
}

/// Fetches the record on display.
pub fn load<S>(store: &S) -> Task<Message>
where
    S: InfoPageStore + Clone + 'static,
{
    let store = store.clone();
    Task::perform(
        async move { store.current_info_page().await },
        Message::Loaded,
    )
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: None,
            loading: true,
        }
    }

    #[must_use]
    pub fn page(&self) -> Option<&InfoPage> {
        self.page.as_ref()
    }

    /// Replaces the shown record after the admin published or cleared it.
    pub fn set_page(&mut self, page: Option<InfoPage>) -> Event {
        self.loading = false;
        self.page = page;
        self.request_image()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Loaded(Ok(page)) => self.set_page(page),
            Message::Loaded(Err(err)) => {
                self.loading = false;
                Event::LoadFailed(err)
            }
        }
    }

    fn request_image(&self) -> Event {
        match &self.page {
            Some(page) => Event::RequestImages(vec![page.image_url.clone()]),
            None => Event::None,
        }
    }

    pub fn view<'a>(
        &'a self,
        i18n: &'a I18n,
        images: &'a remote_image::Cache,
    ) -> Element<'a, Message> {
        let body: Element<'a, Message> = match &self.page {
            Some(page) => Container::new(images.view(&page.image_url, ContentFit::Contain))
                .max_width(sizing::INFO_IMAGE_MAX_WIDTH)
                .height(Length::Fixed(sizing::INFO_IMAGE_MAX_WIDTH))
                .into(),
            None if self.loading => Text::new(i18n.tr("info-loading")).into(),
            None => Text::new(i18n.tr("info-empty")).into(),
        };

        let content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .push(Text::new(i18n.tr("info-title")).size(typography::TITLE_LG))
            .push(body);

        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
