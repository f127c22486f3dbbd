//! Lock-free command queue between the UI and the playback engine
//!
//! The UI thread never talks to the engine directly: it pushes commands
//! into an `rtrb` ringbuffer and the engine drains them at frame
//! boundaries. Push and pop are wait-free and allocation-free, so a busy
//! UI can never stall audio and a busy engine can never stall the UI.

use crate::music::Tone;
use crate::types::PadStyle;

/// Fixed capacity of the command queue
///
/// Selection changes are hand-paced; 64 slots is far more than a user can
/// produce between two engine frames.
pub const COMMAND_QUEUE_CAPACITY: usize = 64;

/// Commands sent from the UI thread to the engine thread
///
/// Each variant is one atomic operation on the engine. Commands are
/// applied in the order they were pushed, which the session relies on:
/// a preset pushes tone, then style, then cut values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineCommand {
    /// Switch the playing tone
    SelectTone { tone: Tone },
    /// Switch the pad style
    SelectPadStyle { style: PadStyle },
    /// Move the low-cut filter boundary
    SetLowCut { hz: f32 },
    /// Move the high-cut filter boundary
    SetHighCut { hz: f32 },
    /// Stop playback and clear both selections
    Stop,
    /// Resume the audio session after an interruption or app foreground
    Reactivate,
}

/// Create the UI→engine command queue
pub fn command_channel() -> (rtrb::Producer<EngineCommand>, rtrb::Consumer<EngineCommand>) {
    rtrb::RingBuffer::new(COMMAND_QUEUE_CAPACITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_channel_roundtrip() {
        let (mut tx, mut rx) = command_channel();

        tx.push(EngineCommand::SelectTone { tone: Tone::G }).unwrap();

        let cmd = rx.pop().unwrap();
        assert_eq!(cmd, EngineCommand::SelectTone { tone: Tone::G });
    }

    #[test]
    fn test_command_channel_empty() {
        let (_tx, mut rx) = command_channel();
        assert!(rx.pop().is_err());
    }

    #[test]
    fn test_commands_keep_push_order() {
        let (mut tx, mut rx) = command_channel();

        tx.push(EngineCommand::SelectTone { tone: Tone::D }).unwrap();
        tx.push(EngineCommand::SelectPadStyle { style: PadStyle::Shimmer }).unwrap();
        tx.push(EngineCommand::SetLowCut { hz: 250.0 }).unwrap();
        tx.push(EngineCommand::SetHighCut { hz: 5200.0 }).unwrap();

        assert_eq!(rx.pop().unwrap(), EngineCommand::SelectTone { tone: Tone::D });
        assert_eq!(
            rx.pop().unwrap(),
            EngineCommand::SelectPadStyle { style: PadStyle::Shimmer }
        );
        assert_eq!(rx.pop().unwrap(), EngineCommand::SetLowCut { hz: 250.0 });
        assert_eq!(rx.pop().unwrap(), EngineCommand::SetHighCut { hz: 5200.0 });
    }

    #[test]
    fn test_command_size() {
        // The queue moves commands by value; keep the enum well inside a
        // cache line.
        let size = std::mem::size_of::<EngineCommand>();
        assert!(size <= 16, "EngineCommand is {} bytes, expected <= 16", size);
    }
}
