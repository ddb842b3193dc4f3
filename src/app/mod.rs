// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the pages.
//!
//! The `App` struct wires together the public pages, the admin panel, the
//! shared image cache and the service adapters built from `settings.toml`.
//! Messages are routed in [`update`]; this file keeps startup policy
//! (window size, adapter construction, config warnings) in one place.

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::infrastructure::http;
use crate::infrastructure::supabase::SupabaseClient;
use crate::infrastructure::web3forms::Web3FormsRelay;
use crate::ui::admin;
use crate::ui::contact;
use crate::ui::info;
use crate::ui::notifications;
use crate::ui::portfolio::{self, GalleryOptions};
use crate::ui::remote_image;
use crate::ui::theming::ThemeMode;
use i18n::fluent::I18n;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    window_width: f32,
    backend: SupabaseClient,
    relay: Web3FormsRelay,
    images: remote_image::Cache,
    portfolio: portfolio::State,
    info: info::State,
    contact: contact::State,
    admin: admin::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("backend_configured", &self.backend.is_configured())
            .field("relay_configured", &self.relay.is_configured())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration, builds the service adapters and starts the
    /// first page load.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(&key));
        }

        let http = http::build_client().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default HTTP client");
            reqwest::Client::default()
        });

        let backend = SupabaseClient::new(http.clone(), config.backend.endpoint());
        if !backend.is_configured() {
            tracing::warn!("backend URL or key missing; pages will stay empty");
        }
        let relay = Web3FormsRelay::new(
            http.clone(),
            config
                .contact
                .endpoint
                .as_deref()
                .unwrap_or(config::DEFAULT_CONTACT_ENDPOINT),
            config.contact.access_key.as_deref(),
        );

        let options = GalleryOptions {
            columns: config.gallery.grid_columns(),
            swipe_threshold: config.gallery.swipe_threshold(),
        };

        let app = App {
            i18n,
            screen: Screen::default(),
            theme_mode: config.general.theme_mode,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            images: remote_image::Cache::new(http, config.gallery.image_cache_entries()),
            portfolio: portfolio::State::new(options),
            info: info::State::new(),
            contact: contact::State::default(),
            admin: admin::State::default(),
            notifications,
            backend,
            relay,
        };

        let task = Task::batch([
            portfolio::load(&app.backend).map(Message::Portfolio),
            info::load(&app.backend).map(Message::Info),
        ]);

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.portfolio.open_project() {
            Some(project) if self.screen == Screen::Portfolio => {
                format!("{} - {app_name}", project.title)
            }
            _ => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let window_sub = subscription::create_window_subscription();
        let lightbox_sub = subscription::create_lightbox_subscription(
            self.screen == Screen::Portfolio && self.portfolio.is_lightbox_open(),
        );
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notifications());

        Subscription::batch([window_sub, lightbox_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
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
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            window_width: self.window_width,
            images: &self.images,
            portfolio: &self.portfolio,
            info: &self.info,
            contact: &self.contact,
            admin: &self.admin,
            notifications: &self.notifications,
        })
    }
}
