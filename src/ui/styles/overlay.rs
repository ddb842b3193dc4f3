// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay styles: backdrop and position counter.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window backdrop behind the enlarged image.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Pill holding the "3 / 8" position text.
#[must_use]
pub fn indicator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_is_nearly_opaque() {
        let style = backdrop(&Theme::Light);
        match style.background {
            Some(Background::Color(color)) => assert!(color.a >= opacity::BACKDROP),
            other => panic!("unexpected background {other:?}"),
        }
    }
}
