// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and touch input only reach the gallery while its lightbox is
//! open: the listener exists for exactly as long as the lightbox does, so
//! a closed gallery never sees a key press.

use super::Message;
use crate::ui::gallery;
use crate::ui::portfolio;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Window events needed on every screen.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size.width))
        }
        _ => None,
    })
}

/// Keyboard and touch routing for the open lightbox.
pub fn create_lightbox_subscription(lightbox_open: bool) -> Subscription<Message> {
    if !lightbox_open {
        return Subscription::none();
    }

    event::listen_with(|event, _status, _window| {
        let gallery_message = match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                gallery::Message::Key(gallery::lightbox_key(&key))
            }
            event::Event::Touch(touch_event) => gallery::Message::Touch(touch_event),
            _ => return None,
        };
        Some(Message::Portfolio(portfolio::Message::Gallery(
            gallery_message,
        )))
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
