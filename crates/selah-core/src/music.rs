//! Musical tone set for pad playback
//!
//! The twelve playable tones, in the fixed order they appear on the tone
//! grid. Selection state and the grid resolve tones through `Tone::ALL`
//! rather than numeric casts, so the enum can be reordered without
//! breaking either side.

use serde::{Deserialize, Serialize};

/// Number of playable tones (full chromatic set)
pub const NUM_TONES: usize = 12;

/// Musical tone identifiers
///
/// Named with flats to match the printed tone grid (Db rather than C#).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    C,
    Db,
    D,
    Eb,
    E,
    F,
    Gb,
    G,
    Ab,
    A,
    Bb,
    B,
}

impl Tone {
    /// All tones in grid order
    pub const ALL: [Tone; NUM_TONES] = [
        Tone::C,
        Tone::Db,
        Tone::D,
        Tone::Eb,
        Tone::E,
        Tone::F,
        Tone::Gb,
        Tone::G,
        Tone::Ab,
        Tone::A,
        Tone::Bb,
        Tone::B,
    ];

    /// Position of this tone in `ALL`
    ///
    /// Resolved by lookup so the grid and the enum can never drift apart.
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|t| t == self)
            .expect("tone present in ALL")
    }

    /// Convert from a grid index to a tone
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Display name as printed on the tone button
    pub fn display_name(&self) -> &'static str {
        match self {
            Tone::C => "C",
            Tone::Db => "Db",
            Tone::D => "D",
            Tone::Eb => "Eb",
            Tone::E => "E",
            Tone::F => "F",
            Tone::Gb => "Gb",
            Tone::G => "G",
            Tone::Ab => "Ab",
            Tone::A => "A",
            Tone::Bb => "Bb",
            Tone::B => "B",
        }
    }

    /// Semitone offset from C (0-11), used by the playback engine
    pub fn semitone(&self) -> u8 {
        self.index() as u8
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_tone() {
        assert_eq!(Tone::ALL.len(), NUM_TONES);
        for (i, tone) in Tone::ALL.iter().enumerate() {
            assert_eq!(tone.index(), i);
            assert_eq!(Tone::from_index(i), Some(*tone));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(Tone::from_index(NUM_TONES), None);
        assert_eq!(Tone::from_index(usize::MAX), None);
    }

    #[test]
    fn test_semitones_are_chromatic() {
        assert_eq!(Tone::C.semitone(), 0);
        assert_eq!(Tone::Gb.semitone(), 6);
        assert_eq!(Tone::B.semitone(), 11);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Tone::Db.display_name(), "Db");
        assert_eq!(Tone::A.to_string(), "A");
    }
}
