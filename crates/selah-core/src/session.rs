//! Pad playback session
//!
//! `PadSession` is the model behind the pad screen: it owns the current
//! selection (tone, pad style, cut values), forwards every mutation to
//! the engine over the command queue, and notifies an observer
//! synchronously whenever a selection changes so the screen can
//! reconcile its visuals.
//!
//! The session is UI-free and single-threaded; all mutations happen on
//! the thread that owns it. It also runs without an engine attached
//! (UI-only mode), in which case commands are simply not sent.

use crate::engine::{EngineCommand, EngineEvent};
use crate::music::Tone;
use crate::types::{PadStyle, DEFAULT_HIGH_CUT_HZ, DEFAULT_LOW_CUT_HZ};

/// Observer contract for selection changes
///
/// Invoked synchronously, on the owning thread, after the session state
/// has been updated. The pad screen's reconciler implements this; tests
/// use a recording implementation.
pub trait SessionObserver {
    /// The selected tone changed (None = cleared)
    fn on_tone_changed(&mut self, tone: Option<Tone>);
    /// The selected pad style changed (None = cleared)
    fn on_pad_changed(&mut self, style: Option<PadStyle>);
}

/// Current selection owned by the session
///
/// At most one tone and one pad style are selected at any time. Cut
/// values are bounded by the slider controls, not re-checked here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionState {
    pub tone: Option<Tone>,
    pub pad_style: Option<PadStyle>,
    pub low_cut_hz: f32,
    pub high_cut_hz: f32,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            tone: None,
            pad_style: None,
            low_cut_hz: DEFAULT_LOW_CUT_HZ,
            high_cut_hz: DEFAULT_HIGH_CUT_HZ,
        }
    }
}

/// The pad screen's playback model
pub struct PadSession {
    selection: SelectionState,
    engine_tx: Option<rtrb::Producer<EngineCommand>>,
    needs_reactivation: bool,
}

impl PadSession {
    pub fn new() -> Self {
        Self {
            selection: SelectionState::default(),
            engine_tx: None,
            needs_reactivation: false,
        }
    }

    /// Attach the sending half of the engine command queue
    pub fn attach_engine(&mut self, tx: rtrb::Producer<EngineCommand>) {
        self.engine_tx = Some(tx);
    }

    /// Current selection state
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Select a tone and notify the observer
    ///
    /// Re-selecting the current tone still notifies: the screen runs the
    /// same full reconciliation pass either way, which keeps selection
    /// idempotent.
    pub fn select_tone(&mut self, tone: Tone, observer: &mut dyn SessionObserver) {
        log::debug!("Session: select tone {}", tone);
        self.selection.tone = Some(tone);
        self.send(EngineCommand::SelectTone { tone });
        observer.on_tone_changed(self.selection.tone);
    }

    /// Select a pad style and notify the observer
    ///
    /// The premium gate runs in the caller *before* this method, so a
    /// gated attempt never reaches the session and the previous selection
    /// survives untouched.
    pub fn select_pad_style(&mut self, style: PadStyle, observer: &mut dyn SessionObserver) {
        log::debug!("Session: select pad style {}", style);
        self.selection.pad_style = Some(style);
        self.send(EngineCommand::SelectPadStyle { style });
        observer.on_pad_changed(self.selection.pad_style);
    }

    /// Move the low-cut boundary
    ///
    /// Values arrive from the slider and are stored as-is.
    pub fn set_low_cut(&mut self, hz: f32) {
        self.selection.low_cut_hz = hz;
        self.send(EngineCommand::SetLowCut { hz });
    }

    /// Move the high-cut boundary
    pub fn set_high_cut(&mut self, hz: f32) {
        self.selection.high_cut_hz = hz;
        self.send(EngineCommand::SetHighCut { hz });
    }

    /// Stop playback, clearing both selections
    pub fn clear_selection(&mut self, observer: &mut dyn SessionObserver) {
        log::debug!("Session: clear selection");
        self.selection.tone = None;
        self.selection.pad_style = None;
        self.send(EngineCommand::Stop);
        observer.on_tone_changed(None);
        observer.on_pad_changed(None);
    }

    /// Record an engine lifecycle event
    pub fn handle_engine_event(&mut self, event: EngineEvent) {
        match event {
            EngineEvent::Interrupted => {
                log::info!("Session: audio interrupted");
                self.needs_reactivation = true;
            }
            EngineEvent::InterruptionEnded => {
                log::info!("Session: audio interruption ended");
                self.reactivate_audio_if_needed();
            }
        }
    }

    /// Resume the audio session if an interruption left it suspended
    ///
    /// Called on app foreground and when the engine reports an
    /// interruption has ended. A no-op when nothing is suspended.
    pub fn reactivate_audio_if_needed(&mut self) {
        if self.needs_reactivation {
            self.needs_reactivation = false;
            self.send(EngineCommand::Reactivate);
        }
    }

    fn send(&mut self, cmd: EngineCommand) {
        if let Some(tx) = &mut self.engine_tx {
            if tx.push(cmd).is_err() {
                // Engine stalled long enough to fill the queue; dropping a
                // stale selection command is preferable to blocking the UI.
                log::warn!("Session: engine command queue full, dropped {:?}", cmd);
            }
        }
    }
}

impl Default for PadSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::command_channel;

    /// Records every notification in arrival order
    #[derive(Default)]
    struct Recorder {
        tones: Vec<Option<Tone>>,
        pads: Vec<Option<PadStyle>>,
    }

    impl SessionObserver for Recorder {
        fn on_tone_changed(&mut self, tone: Option<Tone>) {
            self.tones.push(tone);
        }
        fn on_pad_changed(&mut self, style: Option<PadStyle>) {
            self.pads.push(style);
        }
    }

    #[test]
    fn test_select_tone_updates_state_and_notifies() {
        let mut session = PadSession::new();
        let mut obs = Recorder::default();

        session.select_tone(Tone::G, &mut obs);

        assert_eq!(session.selection().tone, Some(Tone::G));
        assert_eq!(obs.tones, vec![Some(Tone::G)]);
        assert!(obs.pads.is_empty());
    }

    #[test]
    fn test_reselecting_same_tone_notifies_again() {
        let mut session = PadSession::new();
        let mut obs = Recorder::default();

        session.select_tone(Tone::A, &mut obs);
        session.select_tone(Tone::A, &mut obs);

        // Same end state, one notification per attempt
        assert_eq!(session.selection().tone, Some(Tone::A));
        assert_eq!(obs.tones, vec![Some(Tone::A), Some(Tone::A)]);
    }

    #[test]
    fn test_clear_notifies_both_with_none() {
        let mut session = PadSession::new();
        let mut obs = Recorder::default();

        session.select_tone(Tone::C, &mut obs);
        session.select_pad_style(PadStyle::Base, &mut obs);
        session.clear_selection(&mut obs);

        assert_eq!(session.selection().tone, None);
        assert_eq!(session.selection().pad_style, None);
        assert_eq!(obs.tones.last(), Some(&None));
        assert_eq!(obs.pads.last(), Some(&None));
    }

    #[test]
    fn test_cut_values_pass_through_unmodified() {
        let mut session = PadSession::new();

        session.set_low_cut(42.5);
        session.set_high_cut(7999.0);

        assert_eq!(session.selection().low_cut_hz, 42.5);
        assert_eq!(session.selection().high_cut_hz, 7999.0);
    }

    #[test]
    fn test_commands_forwarded_in_call_order() {
        let (tx, mut rx) = command_channel();
        let mut session = PadSession::new();
        session.attach_engine(tx);
        let mut obs = Recorder::default();

        session.select_tone(Tone::D, &mut obs);
        session.select_pad_style(PadStyle::Shimmer, &mut obs);
        session.set_low_cut(310.0);
        session.set_high_cut(4500.0);

        assert_eq!(rx.pop().unwrap(), EngineCommand::SelectTone { tone: Tone::D });
        assert_eq!(
            rx.pop().unwrap(),
            EngineCommand::SelectPadStyle { style: PadStyle::Shimmer }
        );
        assert_eq!(rx.pop().unwrap(), EngineCommand::SetLowCut { hz: 310.0 });
        assert_eq!(rx.pop().unwrap(), EngineCommand::SetHighCut { hz: 4500.0 });
        assert!(rx.pop().is_err());
    }

    #[test]
    fn test_runs_without_engine_attached() {
        let mut session = PadSession::new();
        let mut obs = Recorder::default();

        // UI-only mode: no engine, everything else still works
        session.select_tone(Tone::F, &mut obs);
        session.set_low_cut(100.0);
        session.clear_selection(&mut obs);

        assert_eq!(session.selection().tone, None);
    }

    #[test]
    fn test_reactivation_fires_once_per_interruption() {
        let (tx, mut rx) = command_channel();
        let mut session = PadSession::new();
        session.attach_engine(tx);

        // Nothing suspended yet: no command
        session.reactivate_audio_if_needed();
        assert!(rx.pop().is_err());

        session.handle_engine_event(EngineEvent::Interrupted);
        session.handle_engine_event(EngineEvent::InterruptionEnded);
        assert_eq!(rx.pop().unwrap(), EngineCommand::Reactivate);

        // Already reactivated: app foreground is a no-op
        session.reactivate_audio_if_needed();
        assert!(rx.pop().is_err());
    }
}
