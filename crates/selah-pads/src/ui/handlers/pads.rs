//! Pad screen control handlers
//!
//! Tone taps, pad taps (including the premium gate), cut sliders, stop,
//! and the upsell modal actions.

use iced::Task;

use selah_core::music::Tone;
use selah_core::types::PadStyle;

use crate::config;
use crate::ui::app::PadsApp;
use crate::ui::message::Message;

/// A tone button was tapped
pub fn handle_tone_selected(app: &mut PadsApp, tone: Tone) -> Task<Message> {
    app.session.select_tone(tone, &mut app.visuals);
    Task::none()
}

/// A pad style button was tapped
///
/// The premium gate runs first, on every attempt: a locked style opens
/// the upsell modal and leaves the session untouched, so the previous
/// selection (if any) survives.
pub fn handle_pad_selected(app: &mut PadsApp, style: PadStyle) -> Task<Message> {
    if !app.entitlements.allows(style) {
        log::info!("Pad style {} is locked, opening upsell", style);
        app.premium_modal_open = true;
        return Task::none();
    }
    app.session.select_pad_style(style, &mut app.visuals);
    Task::none()
}

/// Low-cut slider moved
pub fn handle_low_cut_changed(app: &mut PadsApp, hz: f32) -> Task<Message> {
    app.session.set_low_cut(hz);
    Task::none()
}

/// High-cut slider moved
pub fn handle_high_cut_changed(app: &mut PadsApp, hz: f32) -> Task<Message> {
    app.session.set_high_cut(hz);
    Task::none()
}

/// Stop button: clear both selections
pub fn handle_stop(app: &mut PadsApp) -> Task<Message> {
    app.session.clear_selection(&mut app.visuals);
    Task::none()
}

/// Dismiss the upsell modal without purchasing
pub fn handle_close_premium_modal(app: &mut PadsApp) -> Task<Message> {
    app.premium_modal_open = false;
    Task::none()
}

/// Complete the unlock from the upsell modal
///
/// Flips the entitlement for this session and persists it so the unlock
/// survives a restart. The next pad tap re-evaluates the gate and sees
/// the unlock immediately.
pub fn handle_unlock_premium(app: &mut PadsApp) -> Task<Message> {
    app.entitlements.unlock();
    app.config.premium_unlocked = true;
    if let Err(e) = config::save_config(&app.config, &app.config_path) {
        log::warn!("Could not persist premium unlock: {:#}", e);
    }
    app.premium_modal_open = false;
    Task::none()
}
