//! Common types for Selah
//!
//! Pad style identifiers and the slider ranges shared between the session
//! model, the engine, and the UI controls.

use serde::{Deserialize, Serialize};

/// Number of pad styles on the style row
pub const NUM_PAD_STYLES: usize = 6;

/// Low-cut slider range in Hz
pub const LOW_CUT_HZ: std::ops::RangeInclusive<f32> = 20.0..=600.0;

/// High-cut slider range in Hz
pub const HIGH_CUT_HZ: std::ops::RangeInclusive<f32> = 1000.0..=8000.0;

/// Default low-cut position in Hz
pub const DEFAULT_LOW_CUT_HZ: f32 = 310.0;

/// Default high-cut position in Hz
pub const DEFAULT_HIGH_CUT_HZ: f32 = 4500.0;

/// Ambient pad style identifiers
///
/// Ordered as laid out on the style row. The free/premium split is part
/// of the product definition, so it lives here rather than in config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PadStyle {
    Base,
    Shimmer,
    Shiny,
    Warm,
    Reverse,
    Vassal,
}

impl PadStyle {
    /// All pad styles in row order
    pub const ALL: [PadStyle; NUM_PAD_STYLES] = [
        PadStyle::Base,
        PadStyle::Shimmer,
        PadStyle::Shiny,
        PadStyle::Warm,
        PadStyle::Reverse,
        PadStyle::Vassal,
    ];

    /// Position of this style in `ALL`
    pub fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|s| s == self)
            .expect("style present in ALL")
    }

    /// Convert from a row index to a style
    pub fn from_index(idx: usize) -> Option<Self> {
        Self::ALL.get(idx).copied()
    }

    /// Display name as printed under the pad button
    pub fn display_name(&self) -> &'static str {
        match self {
            PadStyle::Base => "Base",
            PadStyle::Shimmer => "Shimmer",
            PadStyle::Shiny => "Shiny",
            PadStyle::Warm => "Warm",
            PadStyle::Reverse => "Reverse",
            PadStyle::Vassal => "Vassal",
        }
    }

    /// Whether this style is gated behind the premium entitlement
    pub fn is_premium(&self) -> bool {
        match self {
            PadStyle::Base | PadStyle::Shimmer => false,
            PadStyle::Shiny | PadStyle::Warm | PadStyle::Reverse | PadStyle::Vassal => true,
        }
    }
}

impl std::fmt::Display for PadStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_style() {
        assert_eq!(PadStyle::ALL.len(), NUM_PAD_STYLES);
        for (i, style) in PadStyle::ALL.iter().enumerate() {
            assert_eq!(style.index(), i);
            assert_eq!(PadStyle::from_index(i), Some(*style));
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert_eq!(PadStyle::from_index(NUM_PAD_STYLES), None);
    }

    #[test]
    fn test_premium_split() {
        assert!(!PadStyle::Base.is_premium());
        assert!(!PadStyle::Shimmer.is_premium());
        assert!(PadStyle::Shiny.is_premium());
        assert!(PadStyle::Vassal.is_premium());
    }

    #[test]
    fn test_slider_defaults_inside_ranges() {
        assert!(LOW_CUT_HZ.contains(&DEFAULT_LOW_CUT_HZ));
        assert!(HIGH_CUT_HZ.contains(&DEFAULT_HIGH_CUT_HZ));
    }
}
