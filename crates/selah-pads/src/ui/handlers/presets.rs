//! Preset application
//!
//! A preset is applied exactly as if the user had tapped the tone
//! button, tapped the pad button, and dragged both cut sliders, in that
//! order. The pad step runs through the same premium gate as a tap.
//! Presets arriving while the pad screen is not the active view are held
//! (last one wins) and applied once on the next switch to the pad view.

use iced::Task;

use selah_core::setlist::SetlistItem;

use crate::ui::app::PadsApp;
use crate::ui::message::Message;

use super::pads;

/// A preset arrived over the preset bus
///
/// Bus deliveries and direct calls share `apply_preset`; there is no
/// separate path for notification-delivered presets.
pub fn handle_preset_delivered(app: &mut PadsApp, preset: SetlistItem) -> Task<Message> {
    apply_preset(app, preset);
    Task::none()
}

/// A setlist entry was chosen on the setlist screen
///
/// Published on the preset bus rather than applied in place, so the
/// setlist screen stays decoupled from the pad screen.
pub fn handle_setlist_entry_chosen(app: &mut PadsApp, index: usize) -> Task<Message> {
    match app.setlist.get(index) {
        Some(item) => app.preset_publisher.publish(item.clone()),
        None => log::warn!("Setlist entry {} out of range, ignoring", index),
    }
    Task::none()
}

/// Apply a preset now if the pad screen is showing, otherwise hold it
///
/// Safe to call at any point in the app's lifecycle. Holding overwrites
/// any previously held preset; the superseded one is never applied.
pub fn apply_preset(app: &mut PadsApp, preset: SetlistItem) {
    if app.is_pad_view_active() {
        apply_and_play(app, preset);
    } else {
        log::info!("Pad screen not visible, holding preset '{}'", preset.name);
        app.pending_preset = Some(preset);
    }
}

/// Apply the held preset, if there is one
///
/// Called on every switch to the pad view; the take keeps application
/// exactly-once.
pub fn apply_pending_preset(app: &mut PadsApp) {
    if let Some(preset) = app.pending_preset.take() {
        apply_and_play(app, preset);
    }
}

/// Replay a preset through the regular control handlers
///
/// Order matters: tone before pad style (the gate must see the previous
/// pad selection), both before the sliders.
fn apply_and_play(app: &mut PadsApp, preset: SetlistItem) {
    log::info!(
        "Applying preset '{}': {} / {} ({:.0}-{:.0} Hz)",
        preset.name,
        preset.tone,
        preset.pad_style,
        preset.low_cut_hz,
        preset.high_cut_hz
    );
    let _ = pads::handle_tone_selected(app, preset.tone);
    let _ = pads::handle_pad_selected(app, preset.pad_style);
    let _ = pads::handle_low_cut_changed(app, preset.low_cut_hz);
    let _ = pads::handle_high_cut_changed(app, preset.high_cut_hz);
}
