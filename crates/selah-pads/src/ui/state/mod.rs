//! Application state modules

pub mod selection;

pub use selection::{ButtonVisual, PlayingBarState, SelectionVisuals};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The pad screen: tone grid, pad row, cut sliders
    #[default]
    Pads,
    /// The setlist screen: saved presets
    Setlist,
}
