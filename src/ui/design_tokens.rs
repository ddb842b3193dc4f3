// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by every screen of the portfolio.

## Organization

- **Palette**: Base colors (neutral grays, one accent, semantic colors)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes (cards, thumbnails, lightbox controls)
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Lightbox backdrop
let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.55, 0.55);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.94, 0.94);

    // Accent (warm amber, used sparingly on links and focus)
    pub const ACCENT_400: Color = Color::from_rgb(0.96, 0.72, 0.36);
    pub const ACCENT_500: Color = Color::from_rgb(0.9, 0.6, 0.2);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Lightbox backdrop, dark enough to hide the page underneath.
    pub const BACKDROP: f32 = 0.95;

    /// Surface background for cards and panels.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Interactive element heights
    pub const INPUT_HEIGHT: f32 = 40.0;

    /// Lightbox close/prev/next hit area (WCAG 2.5.5 minimum is 44).
    pub const LIGHTBOX_CONTROL: f32 = 48.0;

    // Content sizes
    pub const CARD_IMAGE_HEIGHT: f32 = 260.0;
    pub const THUMBNAIL_HEIGHT: f32 = 220.0;
    pub const ADMIN_THUMBNAIL: f32 = 56.0;
    pub const INFO_IMAGE_MAX_WIDTH: f32 = 720.0;

    // Component widths
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const FORM_MAX_WIDTH: f32 = 560.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Titles: page and project headings
    //! - Body: primary content text
    //! - Caption: categories, gear, counters

    /// Large title - Page headings and project titles
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Site name in the navbar
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Card titles, section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, lightbox arrows
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Small body - Hints, secondary labels
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Categories, position indicator
    pub const CAPTION: f32 = 12.0;

    /// Glyph size of the lightbox controls.
    pub const LIGHTBOX_GLYPH: f32 = 28.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Subtle separators, input fields
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Emphasis borders, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > opacity::OVERLAY_STRONG && opacity::BACKDROP < 1.0);

    // Sizing validation
    assert!(sizing::LIGHTBOX_CONTROL >= 44.0);
    assert!(sizing::FORM_MAX_WIDTH < sizing::CONTENT_MAX_WIDTH);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
