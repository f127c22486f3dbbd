//! The pad screen
//!
//! Playing bar on top, tone grid (four per row), horizontally scrolling
//! pad row, and the two cut sliders. All visual selection state comes
//! from the reconciled `SelectionVisuals`; this module only renders it.

use iced::widget::{button, column, container, row, scrollable, slider, text, Space};
use iced::{Alignment, Element, Length};

use selah_core::music::Tone;
use selah_core::types::{PadStyle, HIGH_CUT_HZ, LOW_CUT_HZ};
use selah_widgets::button_styles::{pad_button_style, tone_button_style};
use selah_widgets::playing_bar;
use selah_widgets::theme::{pad_color, PAD_LABEL_DIMMED};

use super::app::PadsApp;
use super::message::Message;
use super::state::ButtonVisual;

/// Tone buttons per grid row
const TONES_PER_ROW: usize = 4;

/// Tone button height
const TONE_BUTTON_HEIGHT: f32 = 92.0;

/// Pad button edge length
const PAD_BUTTON_SIZE: f32 = 108.0;

/// Render the pad screen
pub fn view(app: &PadsApp) -> Element<'_, Message> {
    let bar = app.visuals.playing_bar();

    column![
        playing_bar(bar.color, bar.glow),
        transport_row(),
        tone_grid(app),
        pad_row(app),
        cut_controls(app),
    ]
    .spacing(24)
    .into()
}

/// Stop control, right-aligned above the tone grid
fn transport_row() -> Element<'static, Message> {
    row![
        Space::new().width(Length::Fill),
        button(text("Stop"))
            .on_press(Message::StopTapped)
            .style(button::secondary),
    ]
    .into()
}

fn tone_grid(app: &PadsApp) -> Element<'_, Message> {
    let mut rows: Vec<Element<'_, Message>> = Vec::new();

    for chunk in Tone::ALL.chunks(TONES_PER_ROW) {
        let buttons: Vec<Element<'_, Message>> = chunk
            .iter()
            .map(|&tone| tone_button(app, tone))
            .collect();

        rows.push(row(buttons).spacing(8).into());
    }

    column(rows).spacing(8).into()
}

fn tone_button(app: &PadsApp, tone: Tone) -> Element<'_, Message> {
    let highlighted = app.visuals.tone_visual(tone.index()) == ButtonVisual::Highlighted;

    button(
        text(tone.display_name())
            .size(34)
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .on_press(Message::ToneSelected(tone))
    .width(Length::Fill)
    .height(Length::Fixed(TONE_BUTTON_HEIGHT))
    .style(move |_theme, status| tone_button_style(status, highlighted))
    .into()
}

fn pad_row(app: &PadsApp) -> Element<'_, Message> {
    let pads: Vec<Element<'_, Message>> = PadStyle::ALL
        .iter()
        .map(|&style| pad_button(app, style))
        .collect();

    scrollable(row(pads).spacing(16).padding([0, 8]))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ))
        .into()
}

fn pad_button(app: &PadsApp, style: PadStyle) -> Element<'_, Message> {
    let highlighted = app.visuals.pad_visual(style.index()) == ButtonVisual::Highlighted;
    let accent = pad_color(style);

    let swatch = container(Space::new())
        .width(Length::Fixed(48.0))
        .height(Length::Fixed(6.0))
        .style(move |_theme| container::Style {
            background: Some(accent.into()),
            border: iced::Border {
                radius: 3.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let mut label = column![swatch, text(style.display_name()).size(14)]
        .spacing(8)
        .align_x(Alignment::Center);

    if style.is_premium() && !app.entitlements.is_unlocked() {
        label = label.push(text("Premium").size(10).color(PAD_LABEL_DIMMED));
    }

    button(label)
        .on_press(Message::PadSelected(style))
        .width(Length::Fixed(PAD_BUTTON_SIZE))
        .height(Length::Fixed(PAD_BUTTON_SIZE))
        .style(move |_theme, status| pad_button_style(status, highlighted, accent))
        .into()
}

fn cut_controls(app: &PadsApp) -> Element<'_, Message> {
    let selection = app.session.selection();

    column![
        cut_slider(
            "High Cut",
            selection.high_cut_hz,
            slider(HIGH_CUT_HZ, selection.high_cut_hz, Message::HighCutChanged),
        ),
        cut_slider(
            "Low Cut",
            selection.low_cut_hz,
            slider(LOW_CUT_HZ, selection.low_cut_hz, Message::LowCutChanged),
        ),
    ]
    .spacing(24)
    .into()
}

fn cut_slider<'a>(
    label: &'a str,
    value: f32,
    control: iced::widget::Slider<'a, f32, Message>,
) -> Element<'a, Message> {
    column![
        row![
            text(label).size(16),
            Space::new().width(Length::Fill),
            text(format!("{:.0} Hz", value)).size(14).color(PAD_LABEL_DIMMED),
        ],
        control,
    ]
    .spacing(8)
    .into()
}
