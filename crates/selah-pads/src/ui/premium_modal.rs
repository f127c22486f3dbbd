//! Premium upsell modal
//!
//! Shown when a locked pad style is tapped. Backdrop clicks and
//! "Not Now" dismiss it; "Unlock" completes the entitlement.

use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text, Space};
use iced::{Background, Color, Element, Length};

use super::message::Message;

/// Build a semi-transparent backdrop that closes the modal on click
fn build_backdrop(close_message: Message) -> Element<'static, Message> {
    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
                ..Default::default()
            }),
    )
    .on_press(close_message)
    .into()
}

/// Wrap content in a modal overlay with backdrop
pub fn with_modal_overlay<'a>(
    base: Element<'a, Message>,
    modal_content: Element<'a, Message>,
    close_message: Message,
) -> Element<'a, Message> {
    let backdrop = build_backdrop(close_message);

    let modal = center(opaque(modal_content))
        .width(Length::Fill)
        .height(Length::Fill);

    stack![base, backdrop, modal].into()
}

/// The upsell dialog itself
pub fn view() -> Element<'static, Message> {
    let actions = row![
        button(text("Not Now"))
            .on_press(Message::ClosePremiumModal)
            .style(button::secondary),
        Space::new().width(Length::Fill),
        button(text("Unlock"))
            .on_press(Message::UnlockPremium)
            .style(button::primary),
    ]
    .spacing(8);

    container(
        column![
            text("Go Premium").size(22),
            text("Shiny, Warm, Reverse and Vassal pads are part of the premium pack.").size(14),
            actions,
        ]
        .spacing(16),
    )
    .padding(24)
    .width(Length::Fixed(360.0))
    .style(|_theme| container::Style {
        background: Some(Background::Color(Color::from_rgb(0.14, 0.14, 0.16))),
        border: iced::Border {
            color: Color::from_rgb(0.35, 0.35, 0.40),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    })
    .into()
}
