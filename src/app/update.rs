// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report what happened as events; the handlers here turn those
//! into toasts, image downloads and reloads of the other pages.

use super::{Message, Screen};
use crate::application::port::{ContactRelay, ServiceError};
use crate::ui::admin::{self, Backend, Event as AdminEvent};
use crate::ui::contact::{self, Event as ContactEvent};
use crate::ui::info::{self, Event as InfoEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, Notification};
use crate::ui::portfolio::{self, Event as PortfolioEvent};
use crate::ui::remote_image;
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a, B, R> {
    pub screen: &'a mut Screen,
    pub window_width: &'a mut f32,
    pub images: &'a mut remote_image::Cache,
    pub portfolio: &'a mut portfolio::State,
    pub info: &'a mut info::State,
    pub contact: &'a mut contact::State,
    pub admin: &'a mut admin::State,
    pub notifications: &'a mut notifications::Manager,
    pub backend: &'a B,
    pub relay: &'a R,
}

/// Routes one message to its handler.
pub fn update<B, R>(ctx: &mut UpdateContext<'_, B, R>, message: Message) -> Task<Message>
where
    B: Backend,
    R: ContactRelay + Clone + 'static,
{
    match message {
        Message::Navbar(message) => handle_navbar_message(ctx, message),
        Message::Portfolio(message) => handle_portfolio_message(ctx, message),
        Message::Info(message) => {
            let event = ctx.info.update(message);
            handle_info_event(ctx, event)
        }
        Message::Contact(message) => handle_contact_message(ctx, message),
        Message::Admin(message) => handle_admin_message(ctx, message),
        Message::Images(message) => {
            ctx.images.handle_message(message);
            Task::none()
        }
        Message::Notification(message) => {
            ctx.notifications.handle_message(&message);
            Task::none()
        }
        Message::WindowResized(width) => {
            *ctx.window_width = width;
            Task::none()
        }
        Message::Tick(_) => {
            ctx.notifications.tick();
            Task::none()
        }
    }
}

/// Starts downloads for URLs not cached yet.
fn request_images<B, R>(ctx: &mut UpdateContext<'_, B, R>, urls: &[String]) -> Task<Message> {
    ctx.images
        .request(urls.iter().map(String::as_str))
        .map(Message::Images)
}

fn push_service_error<B, R>(ctx: &mut UpdateContext<'_, B, R>, err: &ServiceError) {
    ctx.notifications.push(Notification::service_error(err));
}

pub fn handle_navbar_message<B, R>(
    ctx: &mut UpdateContext<'_, B, R>,
    message: navbar::Message,
) -> Task<Message>
where
    B: Backend,
{
    match navbar::update(message, *ctx.screen) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(target) => handle_screen_switch(ctx, target),
    }
}

/// Switches page. Leaving the portfolio drops the open project page, which
/// closes its lightbox and releases the scroll lock. Public pages are
/// fetched again on entry so they reflect recent admin changes.
pub fn handle_screen_switch<B, R>(
    ctx: &mut UpdateContext<'_, B, R>,
    target: Screen,
) -> Task<Message>
where
    B: Backend,
{
    if *ctx.screen == Screen::Portfolio && target != Screen::Portfolio {
        ctx.portfolio.update(portfolio::Message::Back);
    }
    *ctx.screen = target;

    match target {
        Screen::Portfolio => {
            ctx.portfolio.start_reload();
            portfolio::load(ctx.backend).map(Message::Portfolio)
        }
        Screen::Info => info::load(ctx.backend).map(Message::Info),
        Screen::Contact | Screen::Admin => Task::none(),
    }
}

pub fn handle_portfolio_message<B, R>(
    ctx: &mut UpdateContext<'_, B, R>,
    message: portfolio::Message,
) -> Task<Message> {
    match ctx.portfolio.update(message) {
        PortfolioEvent::None => Task::none(),
        PortfolioEvent::RequestImages(urls) => request_images(ctx, &urls),
        PortfolioEvent::LoadFailed(err) => {
            push_service_error(ctx, &err);
            Task::none()
        }
    }
}

fn handle_info_event<B, R>(ctx: &mut UpdateContext<'_, B, R>, event: InfoEvent) -> Task<Message> {
    match event {
        InfoEvent::None => Task::none(),
        InfoEvent::RequestImages(urls) => request_images(ctx, &urls),
        InfoEvent::LoadFailed(err) => {
            push_service_error(ctx, &err);
            Task::none()
        }
    }
}

pub fn handle_contact_message<B, R>(
    ctx: &mut UpdateContext<'_, B, R>,
    message: contact::Message,
) -> Task<Message>
where
    R: ContactRelay + Clone + 'static,
{
    match ctx.contact.update(message) {
        ContactEvent::None => Task::none(),
        ContactEvent::Submit(message) => contact::send(ctx.relay, message).map(Message::Contact),
        ContactEvent::Invalid(err) => {
            ctx.notifications.push(Notification::warning(err.i18n_key()));
            Task::none()
        }
        ContactEvent::Sent => {
            ctx.notifications
                .push(Notification::success("notification-contact-sent"));
            Task::none()
        }
        ContactEvent::Failed(err) => {
            push_service_error(ctx, &err);
            Task::none()
        }
    }
}

pub fn handle_admin_message<B, R>(
    ctx: &mut UpdateContext<'_, B, R>,
    message: admin::Message,
) -> Task<Message>
where
    B: Backend,
{
    let (event, task) = ctx.admin.update(message, ctx.backend);
    let task = task.map(Message::Admin);

    let follow_up = match event {
        AdminEvent::None => Task::none(),
        AdminEvent::SignedIn => {
            ctx.notifications
                .push(Notification::success("notification-signed-in"));
            Task::none()
        }
        AdminEvent::SignedOut => {
            ctx.notifications
                .push(Notification::info("notification-signed-out"));
            Task::none()
        }
        AdminEvent::ProjectSaved => {
            ctx.notifications
                .push(Notification::success("notification-project-saved"));
            reload_portfolio(ctx)
        }
        AdminEvent::ProjectDeleted => {
            ctx.notifications
                .push(Notification::success("notification-project-deleted"));
            reload_portfolio(ctx)
        }
        AdminEvent::InfoPublished(page) => {
            ctx.notifications
                .push(Notification::success("notification-info-published"));
            let event = ctx.info.set_page(Some(page));
            handle_info_event(ctx, event)
        }
        AdminEvent::InfoCleared => {
            ctx.notifications
                .push(Notification::success("notification-info-cleared"));
            let event = ctx.info.set_page(None);
            handle_info_event(ctx, event)
        }
        AdminEvent::Invalid(err) => {
            ctx.notifications.push(Notification::warning(err.i18n_key()));
            Task::none()
        }
        AdminEvent::UploadRejected(err) => {
            ctx.notifications.push(Notification::warning(err.i18n_key()));
            Task::none()
        }
        AdminEvent::Failed(err) => {
            push_service_error(ctx, &err);
            Task::none()
        }
        AdminEvent::RequestImages(urls) => request_images(ctx, &urls),
    };

    Task::batch([task, follow_up])
}

fn reload_portfolio<B, R>(ctx: &mut UpdateContext<'_, B, R>) -> Task<Message>
where
    B: Backend,
{
    ctx.portfolio.start_reload();
    portfolio::load(ctx.backend).map(Message::Portfolio)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::command::fakes::{self, MemoryBackend, MemoryRelay};
    use crate::domain::portfolio::{InfoPage, Project, ProjectId, ProjectStatus};
    use crate::ui::notifications::Severity;

    struct Harness {
        screen: Screen,
        window_width: f32,
        images: remote_image::Cache,
        portfolio: portfolio::State,
        info: info::State,
        contact: contact::State,
        admin: admin::State,
        notifications: notifications::Manager,
        backend: MemoryBackend,
        relay: MemoryRelay,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                screen: Screen::Portfolio,
                window_width: 1024.0,
                images: remote_image::Cache::new(reqwest::Client::new(), 16),
                portfolio: portfolio::State::new(portfolio::GalleryOptions::default()),
                info: info::State::new(),
                contact: contact::State::default(),
                admin: admin::State::default(),
                notifications: notifications::Manager::new(),
                backend: MemoryBackend::default(),
                relay: MemoryRelay::default(),
            }
        }

        fn send(&mut self, message: Message) {
            let mut ctx = UpdateContext {
                screen: &mut self.screen,
                window_width: &mut self.window_width,
                images: &mut self.images,
                portfolio: &mut self.portfolio,
                info: &mut self.info,
                contact: &mut self.contact,
                admin: &mut self.admin,
                notifications: &mut self.notifications,
                backend: &self.backend,
                relay: &self.relay,
            };
            let _task = update(&mut ctx, message);
        }

        fn toast_keys(&self) -> Vec<String> {
            self.notifications
                .visible()
                .map(|n| n.message_key().to_string())
                .collect()
        }
    }

    fn project(id: i64, images: &[&str]) -> Project {
        Project {
            id: ProjectId(id),
            title: format!("Project {id}"),
            category: String::new(),
            status: ProjectStatus::Visible,
            camera_gear: String::new(),
            description: String::new(),
            thumbnail_url: None,
            gallery_urls: images.iter().map(|s| (*s).to_string()).collect(),
            created_at: None,
        }
    }

    fn navigate(screen: Screen) -> Message {
        Message::Navbar(navbar::Message::Navigate(screen))
    }

    #[test]
    fn leaving_portfolio_releases_open_lightbox() {
        let mut app = Harness::new();
        app.send(Message::Portfolio(portfolio::Message::Loaded(Ok(vec![
            project(1, &["https://cdn/a.jpg", "https://cdn/b.jpg"]),
        ]))));
        app.send(Message::Portfolio(portfolio::Message::OpenProject(ProjectId(1))));
        app.send(Message::Portfolio(portfolio::Message::Gallery(
            crate::ui::gallery::Message::Open(1),
        )));
        assert!(app.portfolio.is_lightbox_open());

        app.send(navigate(Screen::Contact));
        assert_eq!(app.screen, Screen::Contact);
        assert!(!app.portfolio.is_lightbox_open());
        assert!(app.portfolio.open_project().is_none());
    }

    #[test]
    fn opening_project_starts_image_downloads() {
        let mut app = Harness::new();
        app.send(Message::Portfolio(portfolio::Message::Loaded(Ok(vec![
            project(1, &["https://cdn/a.jpg"]),
        ]))));
        app.send(Message::Portfolio(portfolio::Message::OpenProject(ProjectId(1))));
        assert!(matches!(
            app.images.entry("https://cdn/a.jpg"),
            Some(remote_image::Entry::Loading)
        ));
    }

    #[test]
    fn load_failure_shows_error_toast() {
        let mut app = Harness::new();
        app.send(Message::Portfolio(portfolio::Message::Loaded(Err(
            ServiceError::Network("offline".into()),
        ))));
        let toast = app.notifications.visible().next().map(|n| n.severity());
        assert_eq!(toast, Some(Severity::Error));
    }

    #[test]
    fn invalid_contact_form_warns() {
        let mut app = Harness::new();
        app.send(Message::Contact(contact::Message::Submit));
        assert_eq!(app.toast_keys(), vec!["validation-missing-name".to_string()]);
        assert!(!app.contact.is_sending());
    }

    #[test]
    fn sent_contact_message_confirms() {
        let mut app = Harness::new();
        app.send(Message::Contact(contact::Message::Sent(Ok(()))));
        assert_eq!(app.toast_keys(), vec!["notification-contact-sent".to_string()]);
    }

    #[test]
    fn published_info_page_updates_public_page() {
        let mut app = Harness::new();
        app.send(Message::Admin(admin::Message::SignedIn(Ok(fakes::session()))));
        let page = InfoPage {
            id: 4,
            image_url: "https://cdn/me.jpg".into(),
        };
        app.send(Message::Admin(admin::Message::InfoPublished(Ok(page.clone()))));
        assert_eq!(app.info.page(), Some(&page));

        app.send(Message::Admin(admin::Message::InfoCleared(Ok(()))));
        assert!(app.info.page().is_none());
    }

    #[test]
    fn saved_project_reloads_portfolio() {
        let mut app = Harness::new();
        app.send(Message::Portfolio(portfolio::Message::Loaded(Ok(Vec::new()))));
        assert!(!app.portfolio.is_loading());

        app.send(Message::Admin(admin::Message::SignedIn(Ok(fakes::session()))));
        app.send(Message::Admin(admin::Message::ProjectSaved(Ok(project(2, &[])))));
        assert!(app.portfolio.is_loading());
        assert!(app
            .toast_keys()
            .contains(&"notification-project-saved".to_string()));
    }

    #[test]
    fn resize_updates_width() {
        let mut app = Harness::new();
        app.send(Message::WindowResized(500.0));
        assert!((app.window_width - 500.0).abs() < f32::EPSILON);
    }
}
