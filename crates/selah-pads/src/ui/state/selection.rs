//! Selection visual state
//!
//! Mirrors the session's selection into per-control visual state for the
//! tone grid, the pad row, and the playing bar. The session notifies
//! this reconciler synchronously after every selection change; each
//! notification resets the whole control collection to its default look
//! and then highlights the one selected control, so stale highlights can
//! never survive a missed diff.

use iced::Color;

use selah_core::music::Tone;
use selah_core::session::SessionObserver;
use selah_core::types::PadStyle;
use selah_widgets::theme::{blend, pad_color, PLAYING_BAR_BASE};

/// Visual state of a single tone or pad control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVisual {
    /// Resting look (neutral fill for tones, transparent for pads)
    #[default]
    Default,
    /// Selected look: darker overlay with a shadow glow
    Highlighted,
}

/// Playing bar visual state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayingBarState {
    /// Bar fill color (neutral base or blended style color)
    pub color: Color,
    /// Whether the glow shadow is showing
    pub glow: bool,
}

impl Default for PlayingBarState {
    fn default() -> Self {
        Self {
            color: PLAYING_BAR_BASE,
            glow: false,
        }
    }
}

/// Visual state for the whole pad screen
pub struct SelectionVisuals {
    tone_buttons: Vec<ButtonVisual>,
    pad_buttons: Vec<ButtonVisual>,
    /// Index of the highlighted tone control, tracked for cheap lookup
    highlighted_tone: Option<usize>,
    highlighted_pad: Option<usize>,
    playing_bar: PlayingBarState,
}

impl SelectionVisuals {
    pub fn new() -> Self {
        Self::with_control_counts(Tone::ALL.len(), PadStyle::ALL.len())
    }

    fn with_control_counts(tones: usize, pads: usize) -> Self {
        Self {
            tone_buttons: vec![ButtonVisual::Default; tones],
            pad_buttons: vec![ButtonVisual::Default; pads],
            highlighted_tone: None,
            highlighted_pad: None,
            playing_bar: PlayingBarState::default(),
        }
    }

    /// Visual state of the tone control at `idx`
    pub fn tone_visual(&self, idx: usize) -> ButtonVisual {
        self.tone_buttons.get(idx).copied().unwrap_or_default()
    }

    /// Visual state of the pad control at `idx`
    pub fn pad_visual(&self, idx: usize) -> ButtonVisual {
        self.pad_buttons.get(idx).copied().unwrap_or_default()
    }

    /// Index of the highlighted tone control, if any
    pub fn highlighted_tone(&self) -> Option<usize> {
        self.highlighted_tone
    }

    /// Index of the highlighted pad control, if any
    pub fn highlighted_pad(&self) -> Option<usize> {
        self.highlighted_pad
    }

    /// Current playing bar state
    pub fn playing_bar(&self) -> PlayingBarState {
        self.playing_bar
    }
}

impl Default for SelectionVisuals {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionObserver for SelectionVisuals {
    fn on_tone_changed(&mut self, tone: Option<Tone>) {
        // Full reset first; the highlight below re-marks the survivor
        for visual in &mut self.tone_buttons {
            *visual = ButtonVisual::Default;
        }
        self.highlighted_tone = None;

        if let Some(tone) = tone {
            let idx = tone.index();
            if let Some(visual) = self.tone_buttons.get_mut(idx) {
                *visual = ButtonVisual::Highlighted;
                self.highlighted_tone = Some(idx);
            } else {
                log::warn!("Tone {} resolves outside the rendered grid, skipping highlight", tone);
            }
        }
    }

    fn on_pad_changed(&mut self, style: Option<PadStyle>) {
        for visual in &mut self.pad_buttons {
            *visual = ButtonVisual::Default;
        }
        self.highlighted_pad = None;

        match style {
            Some(style) => {
                let idx = style.index();
                if let Some(visual) = self.pad_buttons.get_mut(idx) {
                    *visual = ButtonVisual::Highlighted;
                    self.highlighted_pad = Some(idx);
                } else {
                    log::warn!(
                        "Pad style {} resolves outside the rendered row, skipping highlight",
                        style
                    );
                }
                self.playing_bar = PlayingBarState {
                    color: blend(PLAYING_BAR_BASE, pad_color(style), 1.0),
                    glow: true,
                };
            }
            None => {
                self.playing_bar = PlayingBarState::default();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highlighted_tone_count(visuals: &SelectionVisuals) -> usize {
        (0..Tone::ALL.len())
            .filter(|&i| visuals.tone_visual(i) == ButtonVisual::Highlighted)
            .count()
    }

    fn highlighted_pad_count(visuals: &SelectionVisuals) -> usize {
        (0..PadStyle::ALL.len())
            .filter(|&i| visuals.pad_visual(i) == ButtonVisual::Highlighted)
            .count()
    }

    #[test]
    fn test_every_tone_highlights_exactly_one_control() {
        let mut visuals = SelectionVisuals::new();

        for tone in Tone::ALL {
            visuals.on_tone_changed(Some(tone));
            assert_eq!(highlighted_tone_count(&visuals), 1);
            assert_eq!(visuals.tone_visual(tone.index()), ButtonVisual::Highlighted);
            assert_eq!(visuals.highlighted_tone(), Some(tone.index()));
        }
    }

    #[test]
    fn test_clearing_tone_leaves_zero_highlighted() {
        let mut visuals = SelectionVisuals::new();

        visuals.on_tone_changed(Some(Tone::A));
        visuals.on_tone_changed(None);

        assert_eq!(highlighted_tone_count(&visuals), 0);
        assert_eq!(visuals.highlighted_tone(), None);
    }

    #[test]
    fn test_changing_tone_clears_previous_highlight() {
        let mut visuals = SelectionVisuals::new();

        visuals.on_tone_changed(Some(Tone::C));
        visuals.on_tone_changed(Some(Tone::G));

        assert_eq!(highlighted_tone_count(&visuals), 1);
        assert_eq!(visuals.tone_visual(Tone::C.index()), ButtonVisual::Default);
        assert_eq!(visuals.tone_visual(Tone::G.index()), ButtonVisual::Highlighted);
    }

    #[test]
    fn test_same_notification_twice_is_idempotent() {
        let mut visuals = SelectionVisuals::new();

        visuals.on_tone_changed(Some(Tone::Eb));
        let first = (
            highlighted_tone_count(&visuals),
            visuals.highlighted_tone(),
        );
        visuals.on_tone_changed(Some(Tone::Eb));
        let second = (
            highlighted_tone_count(&visuals),
            visuals.highlighted_tone(),
        );

        assert_eq!(first, second);
    }

    #[test]
    fn test_every_pad_selection_blends_playing_bar() {
        let mut visuals = SelectionVisuals::new();

        for style in PadStyle::ALL {
            visuals.on_pad_changed(Some(style));

            assert_eq!(highlighted_pad_count(&visuals), 1);
            assert_eq!(visuals.pad_visual(style.index()), ButtonVisual::Highlighted);
            let bar = visuals.playing_bar();
            assert!(bar.glow);
            assert_eq!(bar.color, blend(PLAYING_BAR_BASE, pad_color(style), 1.0));
        }
    }

    #[test]
    fn test_clearing_pad_reverts_bar_to_base() {
        let mut visuals = SelectionVisuals::new();

        visuals.on_pad_changed(Some(PadStyle::Warm));
        visuals.on_pad_changed(None);

        assert_eq!(highlighted_pad_count(&visuals), 0);
        let bar = visuals.playing_bar();
        assert_eq!(bar.color, PLAYING_BAR_BASE);
        assert!(!bar.glow);
    }

    #[test]
    fn test_out_of_range_index_no_ops_highlight() {
        // A grid rendered with fewer controls than the enum set must not
        // panic or highlight anything out of bounds
        let mut visuals = SelectionVisuals::with_control_counts(3, 2);

        visuals.on_tone_changed(Some(Tone::B)); // index 11, grid has 3
        assert_eq!(visuals.highlighted_tone(), None);

        visuals.on_pad_changed(Some(PadStyle::Vassal)); // index 5, row has 2
        assert_eq!(visuals.highlighted_pad(), None);
        // Bar still reflects the selection even when the control is absent
        assert!(visuals.playing_bar().glow);
    }

    #[test]
    fn test_notification_resets_entire_collection() {
        let mut visuals = SelectionVisuals::new();

        // Force a stale highlight that a diff against the previous
        // selection would miss
        visuals.tone_buttons[2] = ButtonVisual::Highlighted;
        visuals.tone_buttons[7] = ButtonVisual::Highlighted;

        visuals.on_tone_changed(Some(Tone::C));

        assert_eq!(highlighted_tone_count(&visuals), 1);
        assert_eq!(visuals.tone_visual(2), ButtonVisual::Default);
        assert_eq!(visuals.tone_visual(7), ButtonVisual::Default);
    }
}
