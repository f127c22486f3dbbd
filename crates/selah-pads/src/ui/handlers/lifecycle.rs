//! Lifecycle handlers
//!
//! View switching (which doubles as the pad screen's visibility
//! transition), window focus, and engine-reported events.

use iced::Task;

use selah_core::engine::EngineEvent;

use crate::ui::app::PadsApp;
use crate::ui::message::Message;
use crate::ui::state::View;

use super::presets;

/// Switch the active view
///
/// Entering the pad view is the "became visible" transition: any held
/// preset is applied here, exactly once.
pub fn handle_switch_view(app: &mut PadsApp, view: View) -> Task<Message> {
    if app.current_view != view {
        log::debug!("Switching view: {:?} -> {:?}", app.current_view, view);
    }
    app.current_view = view;

    if view == View::Pads {
        presets::apply_pending_preset(app);
    }
    Task::none()
}

/// The window regained focus (app back in the foreground)
pub fn handle_window_focused(app: &mut PadsApp) -> Task<Message> {
    app.session.reactivate_audio_if_needed();
    Task::none()
}

/// An event arrived from the engine thread
pub fn handle_engine_event(app: &mut PadsApp, event: EngineEvent) -> Task<Message> {
    app.session.handle_engine_event(event);
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use selah_core::engine::{command_channel, EngineCommand};
    use selah_core::music::Tone;
    use selah_core::session::PadSession;
    use selah_core::setlist::SetlistItem;
    use selah_core::types::PadStyle;

    #[test]
    fn test_switch_to_pads_applies_pending() {
        let mut app = PadsApp::for_tests();
        app.current_view = View::Setlist;
        app.pending_preset = Some(SetlistItem {
            name: "Opening".to_string(),
            tone: Tone::G,
            pad_style: PadStyle::Base,
            low_cut_hz: 310.0,
            high_cut_hz: 4500.0,
        });

        handle_switch_view(&mut app, View::Pads);

        assert!(app.pending_preset.is_none());
        assert_eq!(app.session.selection().tone, Some(Tone::G));
    }

    #[test]
    fn test_switch_away_does_not_apply_pending() {
        let mut app = PadsApp::for_tests();
        app.pending_preset = Some(SetlistItem {
            name: "Opening".to_string(),
            tone: Tone::G,
            pad_style: PadStyle::Base,
            low_cut_hz: 310.0,
            high_cut_hz: 4500.0,
        });

        handle_switch_view(&mut app, View::Setlist);

        assert!(app.pending_preset.is_some());
        assert_eq!(app.session.selection().tone, None);
    }

    #[test]
    fn test_interruption_then_focus_reactivates_once() {
        let (tx, mut rx) = command_channel();
        let mut session = PadSession::new();
        session.attach_engine(tx);
        let mut app = PadsApp::for_tests_with_session(session);

        handle_engine_event(&mut app, EngineEvent::Interrupted);
        handle_window_focused(&mut app);

        assert_eq!(rx.pop().unwrap(), EngineCommand::Reactivate);
        // Second focus is a no-op
        handle_window_focused(&mut app);
        assert!(rx.pop().is_err());
    }
}
