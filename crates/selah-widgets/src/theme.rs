//! Shared theme constants for Selah UI components
//!
//! Color tables and blending used by the tone grid, the pad row, and the
//! playing bar. The pad color table is ordered to match
//! `PadStyle::ALL`, the same way the style row itself is laid out.

use iced::Color;

use selah_core::types::{PadStyle, NUM_PAD_STYLES};

/// Accent color per pad style, in `PadStyle::ALL` order
pub const PAD_COLORS: [Color; NUM_PAD_STYLES] = [
    Color::from_rgb(0.85, 0.65, 0.35), // Base - Amber
    Color::from_rgb(0.45, 0.70, 0.95), // Shimmer - Sky Blue
    Color::from_rgb(0.95, 0.85, 0.40), // Shiny - Gold
    Color::from_rgb(0.90, 0.45, 0.30), // Warm - Ember
    Color::from_rgb(0.65, 0.45, 0.90), // Reverse - Violet
    Color::from_rgb(0.30, 0.80, 0.70), // Vassal - Teal
];

/// Application background
pub const BACKGROUND: Color = Color::from_rgb(0.10, 0.10, 0.11);

/// Default fill for tone buttons
pub const TONE_BUTTON_BG: Color = Color::from_rgb(0.314, 0.314, 0.314);

/// Dimmed label color for unselected pad buttons
pub const PAD_LABEL_DIMMED: Color = Color::from_rgb(0.65, 0.65, 0.65);

/// Neutral resting color of the playing bar
pub const PLAYING_BAR_BASE: Color = Color::from_rgb(0.314, 0.314, 0.314);

/// Accent color for a pad style
pub fn pad_color(style: PadStyle) -> Color {
    PAD_COLORS[style.index()]
}

/// Blend `base` toward `target` by `fraction` (0.0 = base, 1.0 = target)
///
/// Plain per-channel interpolation; deterministic, so the playing bar
/// lands on the same color for the same style every time.
pub fn blend(base: Color, target: Color, fraction: f32) -> Color {
    let f = fraction.clamp(0.0, 1.0);
    Color::from_rgb(
        base.r + (target.r - base.r) * f,
        base.g + (target.g - base.g) * f,
        base.b + (target.b - base.b) * f,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_color_table_matches_style_order() {
        for style in PadStyle::ALL {
            // Every style resolves to a table entry without panicking
            let _ = pad_color(style);
        }
    }

    #[test]
    fn test_blend_endpoints() {
        let base = Color::from_rgb(0.0, 0.0, 0.0);
        let target = Color::from_rgb(1.0, 0.5, 0.25);

        assert_eq!(blend(base, target, 0.0), base);
        assert_eq!(blend(base, target, 1.0), target);
    }

    #[test]
    fn test_blend_fraction_is_clamped() {
        let base = Color::from_rgb(0.2, 0.2, 0.2);
        let target = Color::from_rgb(0.8, 0.8, 0.8);

        assert_eq!(blend(base, target, 2.0), target);
        assert_eq!(blend(base, target, -1.0), base);
    }

    #[test]
    fn test_full_blend_equals_style_color() {
        for style in PadStyle::ALL {
            let mixed = blend(PLAYING_BAR_BASE, pad_color(style), 1.0);
            assert_eq!(mixed, pad_color(style));
        }
    }
}
