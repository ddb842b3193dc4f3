// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::admin;
use crate::ui::contact;
use crate::ui::info;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::portfolio;
use crate::ui::remote_image;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Portfolio(portfolio::Message),
    Info(info::Message),
    Contact(contact::Message),
    Admin(admin::Message),
    Images(remote_image::Message),
    Notification(notifications::NotificationMessage),
    /// The window was resized to this width.
    WindowResized(f32),
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
