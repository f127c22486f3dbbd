//! Button styling for the tone grid and pad row
//!
//! Two visual states per control, with different resting looks:
//! - Tone buttons rest on a neutral fill; highlighted they darken and
//!   pick up a shadow glow.
//! - Pad buttons rest fully transparent with a dimmed label; highlighted
//!   they darken and glow in the style's accent color.

use iced::widget::button::{Status, Style};
use iced::{Background, Border, Color, Shadow, Vector};

use super::theme::{PAD_LABEL_DIMMED, TONE_BUTTON_BG};

/// Fill of a highlighted button (dark overlay)
const HIGHLIGHT_BG: Color = Color::from_rgba(0.20, 0.20, 0.20, 0.85);

/// Shadow offset for the highlight glow
const GLOW_OFFSET: Vector = Vector::new(2.0, 2.0);

/// Shadow blur for the highlight glow
const GLOW_BLUR: f32 = 6.0;

/// Lighten a color by a factor (0.0-1.0)
fn lighten(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r + factor).min(1.0),
        (color.g + factor).min(1.0),
        (color.b + factor).min(1.0),
    )
}

/// Highlighted look shared by both control kinds
///
/// Darker overlay fill plus a soft shadow glow in `glow_color`.
fn highlighted_style(glow_color: Color) -> Style {
    Style {
        background: Some(Background::Color(HIGHLIGHT_BG)),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 8.0.into(),
        },
        shadow: Shadow {
            color: Color { a: 0.7, ..glow_color },
            offset: GLOW_OFFSET,
            blur_radius: GLOW_BLUR,
        },
        snap: false,
    }
}

/// Style function for tone buttons
///
/// Use with `.style(move |_theme, status| tone_button_style(status, highlighted))`
pub fn tone_button_style(status: Status, highlighted: bool) -> Style {
    if highlighted {
        return highlighted_style(Color::BLACK);
    }

    let bg = match status {
        Status::Hovered => lighten(TONE_BUTTON_BG, 0.06),
        _ => TONE_BUTTON_BG,
    };

    Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}

/// Style function for pad buttons
///
/// Resting pads are transparent with a dimmed label; highlighted pads
/// glow in the style's accent color.
pub fn pad_button_style(status: Status, highlighted: bool, accent: Color) -> Style {
    if highlighted {
        return highlighted_style(accent);
    }

    let text_color = match status {
        Status::Hovered => Color::WHITE,
        _ => PAD_LABEL_DIMMED,
    };

    Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
        snap: false,
    }
}
