//! The setlist screen
//!
//! Lists the saved presets. Choosing one publishes it on the preset bus;
//! the pad screen picks it up from there (immediately if visible,
//! deferred otherwise). This screen never touches the session directly.

use iced::widget::{button, column, row, scrollable, text, Space};
use iced::{Background, Color, Element, Length};

use selah_widgets::theme::PAD_LABEL_DIMMED;

use super::app::PadsApp;
use super::message::Message;

/// Render the setlist screen
pub fn view(app: &PadsApp) -> Element<'_, Message> {
    if app.setlist.is_empty() {
        return column![text("No saved presets").size(16).color(PAD_LABEL_DIMMED)]
            .padding(24)
            .into();
    }

    let items: Vec<Element<'_, Message>> = app
        .setlist
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let summary = format!(
                "{} · {} · {:.0}-{:.0} Hz",
                item.tone, item.pad_style, item.low_cut_hz, item.high_cut_hz
            );

            button(
                row![
                    column![
                        text(&item.name).size(16),
                        text(summary).size(12).color(PAD_LABEL_DIMMED),
                    ]
                    .spacing(4),
                    Space::new().width(Length::Fill),
                ],
            )
            .on_press(Message::SetlistEntryChosen(index))
            .width(Length::Fill)
            .padding([8, 12])
            .style(entry_style)
            .into()
        })
        .collect();

    scrollable(column(items).spacing(8)).into()
}

fn entry_style(_theme: &iced::Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: Some(Background::Color(Color::from_rgb(0.16, 0.16, 0.18))),
        text_color: Color::WHITE,
        border: iced::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}
