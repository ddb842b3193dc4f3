// SPDX-License-Identifier: MPL-2.0
//! Public portfolio pages: the project list and one project's page.
//!
//! The list only shows projects marked visible. Opening a project builds a
//! fresh gallery for its images; going back drops it, which releases the
//! lightbox scroll lock if it was still held.

use crate::app::i18n::fluent::I18n;
use crate::application::port::{ProjectCatalog, ServiceError};
use crate::domain::gallery::{GridColumns, SwipeThreshold};
use crate::domain::portfolio::{Project, ProjectId};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::gallery;
use crate::ui::remote_image;
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{ContentFit, Element, Length, Task};

/// Messages handled by the portfolio screen.
#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<Project>, ServiceError>),
    OpenProject(ProjectId),
    Back,
    Gallery(gallery::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// These image URLs are about to be shown.
    RequestImages(Vec<String>),
    LoadFailed(ServiceError),
}

/// Gallery settings applied to every project page.
#[derive(Debug, Clone, Copy, Default)]
pub struct GalleryOptions {
    pub columns: GridColumns,
    pub swipe_threshold: SwipeThreshold,
}

#[derive(Debug)]
struct ProjectPage {
    project: Project,
    gallery: gallery::State,
}

/// Portfolio screen state.
#[derive(Debug, Default)]
pub struct State {
    projects: Vec<Project>,
    loading: bool,
    page: Option<ProjectPage>,
    options: GalleryOptions,
}

/// Contextual data needed to render the portfolio.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a remote_image::Cache,
    pub window_width: f32,
}

/// Fetches the project list.
pub fn load<C>(catalog: &C) -> Task<Message>
where
    C: ProjectCatalog + Clone + 'static,
{
    let catalog = catalog.clone();
    Task::perform(
        async move { catalog.list_projects().await },
        Message::Loaded,
    )
}

impl State {
    #[must_use]
    pub fn new(options: GalleryOptions) -> Self {
        Self {
            loading: true,
            options,
            ..Self::default()
        }
    }

    /// Visible projects, in backend order (newest first).
    pub fn visible_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|project| project.is_visible())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn open_project(&self) -> Option<&Project> {
        self.page.as_ref().map(|page| &page.project)
    }

    #[must_use]
    pub fn is_lightbox_open(&self) -> bool {
        self.page
            .as_ref()
            .is_some_and(|page| page.gallery.is_open())
    }

    /// Marks the list as being fetched again.
    pub fn start_reload(&mut self) {
        self.loading = true;
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Loaded(Ok(projects)) => {
                self.loading = false;
                self.projects = projects;
                if let Some(page) = &self.page {
                    let still_listed = self
                        .visible_projects()
                        .any(|project| project.id == page.project.id);
                    if !still_listed {
                        self.page = None;
                    }
                }
                Event::RequestImages(
                    self.visible_projects()
                        .filter_map(|project| project.thumbnail_url.clone())
                        .collect(),
                )
            }
            Message::Loaded(Err(err)) => {
                self.loading = false;
                Event::LoadFailed(err)
            }
            Message::OpenProject(id) => {
                let Some(project) = self.visible_projects().find(|p| p.id == id).cloned() else {
                    tracing::debug!(%id, "project not listed");
                    return Event::None;
                };
                let gallery = gallery::State::new(
                    project.gallery_urls.clone(),
                    self.options.columns,
                    self.options.swipe_threshold,
                );
                let urls = project.gallery_urls.clone();
                self.page = Some(ProjectPage { project, gallery });
                Event::RequestImages(urls)
            }
            Message::Back => {
                self.page = None;
                Event::None
            }
            Message::Gallery(message) => {
                let Some(page) = self.page.as_mut() else {
                    return Event::None;
                };
                let urls = page.gallery.update(message);
                if urls.is_empty() {
                    Event::None
                } else {
                    Event::RequestImages(urls)
                }
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let content = match &self.page {
            Some(page) => view_project(page, ctx),
            None => self.view_list(ctx),
        };

        scrollable(
            Container::new(content)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .padding(spacing::LG),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    /// Lightbox overlay of the open project, if any.
    pub fn view_overlay<'a>(&'a self, ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
        let page = self.page.as_ref()?;
        let overlay = page.gallery.view_overlay(&gallery_context(ctx))?;
        Some(overlay.map(Message::Gallery))
    }

    fn view_list<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let title = Text::new(ctx.i18n.tr("portfolio-title")).size(typography::TITLE_LG);

        if self.loading {
            return Column::new()
                .spacing(spacing::LG)
                .push(title)
                .push(Text::new(ctx.i18n.tr("portfolio-loading")))
                .into();
        }

        let visible: Vec<&Project> = self.visible_projects().collect();
        if visible.is_empty() {
            return Column::new()
                .spacing(spacing::LG)
                .push(title)
                .push(Text::new(ctx.i18n.tr("portfolio-empty")))
                .into();
        }

        let columns = if ctx.window_width >= gallery::DESKTOP_BREAKPOINT {
            2
        } else {
            1
        };

        let mut list = Column::new().spacing(spacing::LG).push(title);
        for chunk in visible.chunks(columns) {
            let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
            for project in chunk {
                row = row.push(project_card(project, ctx));
            }
            for _ in chunk.len()..columns {
                row = row.push(Space::new().width(Length::Fill));
            }
            list = list.push(row);
        }
        list.into()
    }
}

fn gallery_context<'a>(ctx: &ViewContext<'a>) -> gallery::ViewContext<'a> {
    gallery::ViewContext {
        i18n: ctx.i18n,
        images: ctx.images,
        window_width: ctx.window_width,
    }
}

fn project_card<'a>(project: &'a Project, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let image: Element<'a, Message> = match &project.thumbnail_url {
        Some(url) => ctx.images.view(url, ContentFit::Cover),
        None => Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::placeholder)
            .into(),
    };

    let caption = Column::new()
        .spacing(spacing::XXS)
        .padding(spacing::SM)
        .push(Text::new(project.title.as_str()).size(typography::TITLE_SM))
        .push(Text::new(project.category.as_str()).size(typography::CAPTION));

    let card = Column::new()
        .push(
            Container::new(image)
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT)),
        )
        .push(caption);

    button(Container::new(card).style(styles::container::card))
        .on_press(Message::OpenProject(project.id))
        .padding(0)
        .width(Length::Fill)
        .style(styles::button::tile)
        .into()
}

fn view_project<'a>(page: &'a ProjectPage, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let project = &page.project;

    let back = button(Text::new(ctx.i18n.tr("portfolio-back")))
        .on_press(Message::Back)
        .style(styles::button::link(false));

    let mut details = Column::new()
        .spacing(spacing::SM)
        .push(back)
        .push(Text::new(project.title.as_str()).size(typography::TITLE_LG))
        .push(Text::new(project.category.as_str()).size(typography::BODY_SM));

    if !project.camera_gear.trim().is_empty() {
        details = details.push(
            Row::new()
                .spacing(spacing::XS)
                .push(Text::new(ctx.i18n.tr("project-camera-gear")).size(typography::BODY_SM))
                .push(Text::new(project.camera_gear.as_str()).size(typography::BODY_SM)),
        );
    }
    if !project.description.trim().is_empty() {
        details = details.push(Text::new(project.description.as_str()).size(typography::BODY));
    }

    let gallery: Element<'a, Message> = if page.gallery.images().is_empty() {
        Container::new(Text::new(ctx.i18n.tr("project-no-images")))
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    } else {
        page.gallery
            .view_grid(&gallery_context(ctx))
            .map(Message::Gallery)
    };

    Column::new()
        .spacing(spacing::XL)
        .push(details)
        .push(gallery)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::portfolio::ProjectStatus;

    fn project(id: i64, status: ProjectStatus, images: &[&str]) -> Project {
        Project {
            id: ProjectId(id),
            title: format!("Project {id}"),
            category: "Street".into(),
            status,
            camera_gear: String::new(),
            description: String::new(),
            thumbnail_url: Some(format!("https://cdn/thumb-{id}.jpg")),
            gallery_urls: images.iter().map(|s| s.to_string()).collect(),
            created_at: None,
        }
    }

    fn loaded() -> State {
        let mut state = State::new(GalleryOptions::default());
        state.update(Message::Loaded(Ok(vec![
            project(2, ProjectStatus::Visible, &["a", "b", "c"]),
            project(1, ProjectStatus::Hidden, &["x"]),
        ])));
        state
    }

    #[test]
    fn starts_loading() {
        assert!(State::new(GalleryOptions::default()).is_loading());
    }

    #[test]
    fn hidden_projects_are_not_listed() {
        let state = loaded();
        let ids: Vec<_> = state.visible_projects().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProjectId(2)]);
        assert!(!state.is_loading());
    }

    #[test]
    fn load_requests_visible_thumbnails() {
        let mut state = State::new(GalleryOptions::default());
        let event = state.update(Message::Loaded(Ok(vec![
            project(2, ProjectStatus::Visible, &[]),
            project(1, ProjectStatus::Hidden, &[]),
        ])));
        assert_eq!(
            event,
            Event::RequestImages(vec!["https://cdn/thumb-2.jpg".to_string()])
        );
    }

    #[test]
    fn load_failure_is_reported() {
        let mut state = State::new(GalleryOptions::default());
        let event = state.update(Message::Loaded(Err(ServiceError::NotConfigured)));
        assert_eq!(event, Event::LoadFailed(ServiceError::NotConfigured));
        assert!(!state.is_loading());
    }

    #[test]
    fn opening_project_requests_its_gallery() {
        let mut state = loaded();
        let event = state.update(Message::OpenProject(ProjectId(2)));
        assert_eq!(
            event,
            Event::RequestImages(vec!["a".into(), "b".into(), "c".into()])
        );
        assert_eq!(state.open_project().map(|p| p.id), Some(ProjectId(2)));
    }

    #[test]
    fn hidden_project_cannot_be_opened() {
        let mut state = loaded();
        assert_eq!(state.update(Message::OpenProject(ProjectId(1))), Event::None);
        assert!(state.open_project().is_none());
    }

    #[test]
    fn back_drops_open_lightbox() {
        let mut state = loaded();
        state.update(Message::OpenProject(ProjectId(2)));
        state.update(Message::Gallery(gallery::Message::Open(1)));
        assert!(state.is_lightbox_open());

        state.update(Message::Back);
        assert!(!state.is_lightbox_open());
        assert!(state.open_project().is_none());
    }

    #[test]
    fn reload_closes_page_of_project_that_disappeared() {
        let mut state = loaded();
        state.update(Message::OpenProject(ProjectId(2)));
        state.update(Message::Loaded(Ok(vec![project(
            2,
            ProjectStatus::Hidden,
            &[],
        )])));
        assert!(state.open_project().is_none());
    }

    #[test]
    fn gallery_messages_without_page_are_ignored() {
        let mut state = loaded();
        assert_eq!(
            state.update(Message::Gallery(gallery::Message::Next)),
            Event::None
        );
    }
}
