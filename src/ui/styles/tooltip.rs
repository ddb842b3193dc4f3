// SPDX-License-Identifier: MPL-2.0
//! Tooltip styles.
//!
//! Tooltips invert the theme (dark bubble on light pages, light bubble on
//! dark ones) so they stay readable over photos.

use crate::ui::design_tokens::{border, palette, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

pub use iced::widget::tooltip::Position;

/// Bubble drawn around the tooltip text.
pub fn tooltip_container(theme: &Theme) -> container::Style {
    let page = theme.extended_palette().background.base.color;
    let page_is_dark = (page.r + page.g + page.b) / 3.0 < 0.5;

    let (background, text_color) = if page_is_dark {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_900, palette::GRAY_100)
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color {
                a: 0.3,
                ..palette::GRAY_400
            },
        },
        shadow: shadow::MD,
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Wraps `content` in a tooltip showing `tip`.
///
/// ```ignore
/// tooltip::styled(close_button, i18n.tr("lightbox-close"), tooltip::Position::Bottom)
/// ```
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let tip_container = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(tooltip_container);

    tooltip(content, tip_container, position).gap(spacing::XS)
}
