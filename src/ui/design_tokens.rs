// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the alert widget.
//!
//! Colors, spacing and sizes used by the alert renderer. Animated values
//! (opacity, height, padding) come from the alert projection; these tokens
//! only cover what stays fixed.
//!
//! ```
//! use iced_alerts::ui::design_tokens::{palette, opacity};
//! use iced::Color;
//!
//! let hover = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::GRAY_400
//! };
//! assert!(hover.a < 1.0);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // Loading alerts use the brand blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

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
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Spinner track behind the rotating arc
    pub const SPINNER_TRACK: f32 = 0.25;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;

    /// Width of the alert column
    pub const ALERT_WIDTH: f32 = 320.0;

    /// Stroke width of the spinner arc
    pub const SPINNER_STROKE: f32 = 3.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Alert message text
    pub const BODY: f32 = 14.0;

    /// Kind glyph and dismiss cross
    pub const GLYPH: f32 = 16.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Accent border around an alert
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
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
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(sizing::ALERT_WIDTH > sizing::ICON_MD);
    assert!(radius::MD > radius::SM);
};
