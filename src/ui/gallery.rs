// SPDX-License-Identifier: MPL-2.0
//! Project gallery: thumbnail grid and full-screen lightbox.
//!
//! The interaction rules live in [`crate::domain::gallery`]; this component
//! maps Iced input onto them and renders the result. The overlay is
//! returned separately from the grid so the application can stack it above
//! the whole window and swallow every event underneath it while the scroll
//! lock is held.

use crate::app::i18n::fluent::I18n;
use crate::domain::gallery::{
    GridColumns, Lightbox, LightboxKey, ScrollFlag, ScrollLock, SwipeDirection, SwipeThreshold,
    SwipeTracker,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::remote_image;
use crate::ui::styles::{self, tooltip};
use iced::alignment::{Horizontal, Vertical};
use iced::keyboard::{key::Named, Key};
use iced::widget::{button, opaque, Column, Container, Row, Space, Stack, Text};
use iced::{touch, ContentFit, Element, Length};

/// Window width from which the previous/next buttons are shown. Narrower
/// windows navigate by swipe only.
pub const DESKTOP_BREAKPOINT: f32 = crate::app::config::DESKTOP_BREAKPOINT;

/// Messages handled by the gallery.
#[derive(Debug, Clone)]
pub enum Message {
    Open(usize),
    Close,
    Next,
    Previous,
    /// Key press, routed only while the lightbox is open.
    Key(LightboxKey),
    /// Touch input, routed only while the lightbox is open.
    Touch(touch::Event),
}

/// How the lightbox overlay treats input aimed at the page underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OverlayInput {
    /// Scroll lock held: wheel, click and drag stop at the overlay.
    Swallowed,
    PassedThrough,
}

/// Gallery state for one project page.
#[derive(Debug)]
pub struct State {
    lightbox: Lightbox<ScrollFlag>,
    swipe: SwipeTracker,
    /// Finger whose gesture is tracked; other fingers are ignored.
    finger: Option<touch::Finger>,
    columns: GridColumns,
}

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a remote_image::Cache,
    pub window_width: f32,
}

impl State {
    #[must_use]
    pub fn new(images: Vec<String>, columns: GridColumns, threshold: SwipeThreshold) -> Self {
        Self {
            lightbox: Lightbox::new(images, ScrollFlag::default()),
            swipe: SwipeTracker::new(threshold),
            finger: None,
            columns,
        }
    }

    #[must_use]
    pub fn images(&self) -> &[String] {
        self.lightbox.images()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.lightbox.is_open()
    }

    #[must_use]
    pub fn is_scroll_locked(&self) -> bool {
        self.lightbox.scroll_lock().is_locked()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.lightbox.current_index()
    }

    /// Applies a message. Returns the image URLs worth having in the cache
    /// afterwards: the displayed one and its two neighbours.
    pub fn update(&mut self, message: Message) -> Vec<String> {
        match message {
            Message::Open(index) => {
                if !self.lightbox.open(index) {
                    tracing::debug!(index, len = self.lightbox.len(), "ignored lightbox open");
                }
            }
            Message::Close => self.lightbox.close(),
            Message::Next => self.lightbox.next(),
            Message::Previous => self.lightbox.previous(),
            Message::Key(key) => {
                self.lightbox.handle_key(key);
            }
            Message::Touch(event) => self.handle_touch(event),
        }

        if !self.lightbox.is_open() {
            self.swipe.cancel();
            self.finger = None;
        }

        self.neighbourhood()
    }

    fn handle_touch(&mut self, event: touch::Event) {
        if !self.lightbox.is_open() {
            return;
        }

        match event {
            touch::Event::FingerPressed { id, position } => {
                if self.finger.is_none() {
                    self.finger = Some(id);
                    self.swipe.touch_start(position.x);
                }
            }
            touch::Event::FingerMoved { id, position } => {
                if self.finger == Some(id) {
                    self.swipe.touch_move(position.x);
                }
            }
            touch::Event::FingerLifted { id, .. } => {
                if self.finger == Some(id) {
                    self.finger = None;
                    match self.swipe.touch_end() {
                        Some(SwipeDirection::Next) => self.lightbox.next(),
                        Some(SwipeDirection::Previous) => self.lightbox.previous(),
                        None => {}
                    }
                }
            }
            touch::Event::FingerLost { id, .. } => {
                if self.finger == Some(id) {
                    self.finger = None;
                    self.swipe.cancel();
                }
            }
        }
    }

    fn neighbourhood(&self) -> Vec<String> {
        let images = self.lightbox.images();
        let Some(index) = self.lightbox.current_index() else {
            return Vec::new();
        };
        let len = images.len();
        let mut urls = vec![images[index].clone()];
        for neighbour in [(index + 1) % len, (index + len - 1) % len] {
            if !urls.contains(&images[neighbour]) {
                urls.push(images[neighbour].clone());
            }
        }
        urls
    }

    /// Renders the thumbnail grid.
    pub fn view_grid<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let columns = self.columns.value();
        let mut grid = Column::new().spacing(spacing::SM).width(Length::Fill);

        for (row_index, chunk) in self.lightbox.images().chunks(columns).enumerate() {
            let mut row = Row::new().spacing(spacing::SM).width(Length::Fill);
            for (column, url) in chunk.iter().enumerate() {
                let index = row_index * columns + column;
                let tile = button(ctx.images.view(url, ContentFit::Cover))
                    .on_press(Message::Open(index))
                    .padding(0)
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::THUMBNAIL_HEIGHT))
                    .style(styles::button::tile);
                row = row.push(tile);
            }
            for _ in chunk.len()..columns {
                row = row.push(Space::new().width(Length::Fill));
            }
            grid = grid.push(row);
        }

        grid.into()
    }

    /// Input policy of the overlay, or `None` while there is nothing to show.
    fn overlay_input(&self) -> Option<OverlayInput> {
        self.lightbox.current_image()?;
        Some(if self.is_scroll_locked() {
            OverlayInput::Swallowed
        } else {
            OverlayInput::PassedThrough
        })
    }

    /// Renders the lightbox, or `None` while it is closed.
    ///
    /// While the scroll lock is held the overlay is wrapped in [`opaque`] so
    /// nothing underneath receives wheel, click or drag events.
    pub fn view_overlay<'a>(&'a self, ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
        let input = self.overlay_input()?;
        let url = self.lightbox.current_image()?;
        let position = self.lightbox.position()?;

        let image = Container::new(ctx.images.view(url, ContentFit::Contain))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XXL);

        let close = tooltip::styled(
            control("✕", Message::Close),
            ctx.i18n.tr("lightbox-close"),
            tooltip::Position::Bottom,
        );
        let top_bar = Container::new(close)
            .width(Length::Fill)
            .align_x(Horizontal::Right)
            .padding(spacing::MD);

        let indicator = Container::new(Text::new(position.to_string()).size(typography::BODY_SM))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::overlay::indicator);
        let bottom_bar = Container::new(indicator)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(spacing::LG);

        let mut stack = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(image)
            .push(top_bar)
            .push(bottom_bar);

        if ctx.window_width >= DESKTOP_BREAKPOINT {
            let previous = Container::new(control("‹", Message::Previous))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Left)
                .align_y(Vertical::Center)
                .padding(spacing::MD);
            let next = Container::new(control("›", Message::Next))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Right)
                .align_y(Vertical::Center)
                .padding(spacing::MD);
            stack = stack.push(previous).push(next);
        }

        let backdrop = Container::new(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::overlay::backdrop);

        Some(match input {
            OverlayInput::Swallowed => opaque(backdrop),
            OverlayInput::PassedThrough => backdrop.into(),
        })
    }
}

fn control<'a>(glyph: &'static str, message: Message) -> Element<'a, Message> {
    button(
        Text::new(glyph)
            .size(typography::LIGHTBOX_GLYPH)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .on_press(message)
    .width(Length::Fixed(sizing::LIGHTBOX_CONTROL))
    .height(Length::Fixed(sizing::LIGHTBOX_CONTROL))
    .style(styles::button::lightbox_control)
    .into()
}

/// Maps a pressed key onto the keys the lightbox understands.
#[must_use]
pub fn lightbox_key(key: &Key) -> LightboxKey {
    match key {
        Key::Named(Named::Escape) => LightboxKey::Escape,
        Key::Named(Named::ArrowLeft) => LightboxKey::ArrowLeft,
        Key::Named(Named::ArrowRight) => LightboxKey::ArrowRight,
        _ => LightboxKey::Other,
    }
}
