// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn filled(fill: Color, hover: Color, status: button::Status, theme: &Theme) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let (background, text_color, shadow) = match status {
        button::Status::Active | button::Status::Pressed => (fill, WHITE, shadow::SM),
        button::Status::Hovered => (hover, WHITE, shadow::MD),
        button::Status::Disabled => (
            if is_light {
                palette::GRAY_200
            } else {
                palette::GRAY_700
            },
            palette::GRAY_400,
            shadow::NONE,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow,
        snap: true,
    }
}

/// Main call to action (save, send, sign in).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    filled(palette::ACCENT_500, palette::ACCENT_400, status, theme)
}

/// Destructive action (delete, clear).
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    filled(
        palette::ERROR_500,
        Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::ERROR_500
        },
        status,
        theme,
    )
}

/// Text-only button used for navbar links and tabs. The active entry is
/// drawn in the accent color.
pub fn link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.palette().text;
        let text_color = match status {
            _ if active => palette::ACCENT_500,
            button::Status::Hovered => palette::ACCENT_400,
            button::Status::Disabled => Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base
            },
            button::Status::Active | button::Status::Pressed => base,
        };
        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Clickable image (project card, gallery tile): no chrome, slight dim on
/// hover.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..BLACK
        })),
        _ => None,
    };
    button::Style {
        background,
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round translucent control drawn over the lightbox image.
pub fn lightbox_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_STRONG,
        button::Status::Pressed => opacity::OVERLAY_HOVER,
        _ => opacity::OVERLAY_MEDIUM,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
