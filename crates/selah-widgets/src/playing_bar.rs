//! The playing bar
//!
//! A thin strip across the top of the pad screen that takes on the
//! selected pad style's color while something is playing, with a soft
//! glow underneath. With nothing selected it sits at the neutral base
//! color with no glow.

use iced::widget::{container, Space};
use iced::{Background, Border, Color, Element, Length, Shadow, Vector};

/// Bar height in logical pixels
pub const BAR_HEIGHT: f32 = 14.0;

/// Render the playing bar in the given state
///
/// `color` is the already-blended bar color; `glow` adds the shadow in
/// the same color underneath the bar.
pub fn playing_bar<'a, Message: 'a>(color: Color, glow: bool) -> Element<'a, Message> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(BAR_HEIGHT))
        .style(move |_theme| bar_style(color, glow))
        .into()
}

fn bar_style(color: Color, glow: bool) -> container::Style {
    let shadow = if glow {
        Shadow {
            color: Color { a: 0.7, ..color },
            offset: Vector::new(0.0, 8.0),
            blur_radius: 8.0,
        }
    } else {
        Shadow::default()
    };

    container::Style {
        background: Some(Background::Color(color)),
        border: Border::default(),
        shadow,
        ..Default::default()
    }
}
