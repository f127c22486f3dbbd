//! Application messages
//!
//! All message types that can be dispatched in the selah-pads
//! application.

use selah_core::engine::EngineEvent;
use selah_core::music::Tone;
use selah_core::setlist::SetlistItem;
use selah_core::types::PadStyle;

use super::state::View;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    SwitchView(View),

    // Pad screen controls
    /// A tone button was tapped
    ToneSelected(Tone),
    /// A pad style button was tapped (runs the premium gate)
    PadSelected(PadStyle),
    /// Low-cut slider moved
    LowCutChanged(f32),
    /// High-cut slider moved
    HighCutChanged(f32),
    /// Stop button: clear both selections
    StopTapped,

    // Setlist screen
    /// A setlist entry was chosen; publishes the preset on the bus
    SetlistEntryChosen(usize),
    /// A preset arrived over the preset bus
    PresetDelivered(SetlistItem),

    // Premium upsell modal
    ClosePremiumModal,
    UnlockPremium,

    // Lifecycle
    /// The window regained focus (app returned to foreground)
    WindowFocused,
    /// Lifecycle event reported by the engine thread
    Engine(EngineEvent),
}
