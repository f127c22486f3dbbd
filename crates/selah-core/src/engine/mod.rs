//! Playback engine state
//!
//! The engine side of the command queue: a small state machine tracking
//! what should be sounding right now (tone, pad style, filter bounds).
//! The synthesis backend reads this state each frame; this crate only
//! defines the contract and the state transitions.

mod command;

pub use command::{command_channel, EngineCommand, COMMAND_QUEUE_CAPACITY};

use crate::music::Tone;
use crate::types::{PadStyle, DEFAULT_HIGH_CUT_HZ, DEFAULT_LOW_CUT_HZ};

/// Events reported by the engine thread back to the UI
///
/// Delivered over a plain mpsc channel and bridged into the UI
/// subscription. `InterruptionEnded` drives audio reactivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// The audio session was interrupted (system suspend, device loss)
    Interrupted,
    /// The interruption is over; the session may be reactivated
    InterruptionEnded,
}

/// Engine-side playback state
///
/// Commands are drained at frame boundaries so state never changes
/// mid-frame. Cut values arrive pre-bounded by the slider controls and
/// are stored as-is.
#[derive(Debug)]
pub struct PadEngine {
    tone: Option<Tone>,
    style: Option<PadStyle>,
    low_cut_hz: f32,
    high_cut_hz: f32,
    suspended: bool,
}

impl Default for PadEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PadEngine {
    pub fn new() -> Self {
        Self {
            tone: None,
            style: None,
            low_cut_hz: DEFAULT_LOW_CUT_HZ,
            high_cut_hz: DEFAULT_HIGH_CUT_HZ,
            suspended: false,
        }
    }

    /// Currently sounding tone, if any
    pub fn tone(&self) -> Option<Tone> {
        self.tone
    }

    /// Currently sounding pad style, if any
    pub fn style(&self) -> Option<PadStyle> {
        self.style
    }

    /// Low-cut filter boundary in Hz
    pub fn low_cut_hz(&self) -> f32 {
        self.low_cut_hz
    }

    /// High-cut filter boundary in Hz
    pub fn high_cut_hz(&self) -> f32 {
        self.high_cut_hz
    }

    /// Whether a pad should be sounding (tone and style both chosen)
    pub fn is_playing(&self) -> bool {
        self.tone.is_some() && self.style.is_some() && !self.suspended
    }

    /// Mark the audio session as interrupted
    ///
    /// Playback stays configured but silent until `Reactivate` arrives.
    pub fn suspend(&mut self) {
        if !self.suspended {
            log::info!("Engine: audio session suspended");
            self.suspended = true;
        }
    }

    /// Apply a single command
    pub fn apply(&mut self, cmd: EngineCommand) {
        match cmd {
            EngineCommand::SelectTone { tone } => {
                log::debug!("Engine: tone -> {}", tone);
                self.tone = Some(tone);
            }
            EngineCommand::SelectPadStyle { style } => {
                log::debug!("Engine: style -> {}", style);
                self.style = Some(style);
            }
            EngineCommand::SetLowCut { hz } => {
                self.low_cut_hz = hz;
            }
            EngineCommand::SetHighCut { hz } => {
                self.high_cut_hz = hz;
            }
            EngineCommand::Stop => {
                log::debug!("Engine: stop");
                self.tone = None;
                self.style = None;
            }
            EngineCommand::Reactivate => {
                if self.suspended {
                    log::info!("Engine: audio session reactivated");
                    self.suspended = false;
                }
            }
        }
    }

    /// Drain all pending commands from the queue
    ///
    /// Called once per engine frame. Returns the number of commands
    /// applied.
    pub fn process_commands(&mut self, rx: &mut rtrb::Consumer<EngineCommand>) -> usize {
        let mut applied = 0;
        while let Ok(cmd) = rx.pop() {
            self.apply(cmd);
            applied += 1;
        }
        applied
    }
}
