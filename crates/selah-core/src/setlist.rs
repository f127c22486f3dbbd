//! Setlist presets
//!
//! A setlist entry captures a full pad setup (tone, style, cut values) so
//! it can be recalled in one tap during a set. Entries are stored as YAML
//! in the user's config directory and applied atomically by the pad
//! screen.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::music::Tone;
use crate::types::{PadStyle, DEFAULT_HIGH_CUT_HZ, DEFAULT_LOW_CUT_HZ};

/// A saved pad setup, applied as one unit
///
/// Produced by the setlist screen, consumed by the pad screen. Values are
/// passed by value and never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetlistItem {
    /// Display name ("Opening", "Communion", ...)
    pub name: String,
    /// Musical tone to select
    pub tone: Tone,
    /// Pad style to select
    pub pad_style: PadStyle,
    /// Low-cut slider position in Hz
    pub low_cut_hz: f32,
    /// High-cut slider position in Hz
    pub high_cut_hz: f32,
}

/// Errors reading or writing a setlist file
#[derive(Error, Debug)]
pub enum SetlistError {
    /// File could not be read or written
    #[error("Failed to access setlist file: {0}")]
    Io(#[from] std::io::Error),

    /// File exists but is not valid setlist YAML
    #[error("Failed to parse setlist file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Setlist shipped with a fresh install
///
/// Free-tier styles only, so the defaults apply without the entitlement.
pub fn default_setlist() -> Vec<SetlistItem> {
    vec![
        SetlistItem {
            name: "Opening".to_string(),
            tone: Tone::G,
            pad_style: PadStyle::Base,
            low_cut_hz: DEFAULT_LOW_CUT_HZ,
            high_cut_hz: DEFAULT_HIGH_CUT_HZ,
        },
        SetlistItem {
            name: "Worship".to_string(),
            tone: Tone::D,
            pad_style: PadStyle::Shimmer,
            low_cut_hz: 250.0,
            high_cut_hz: 5200.0,
        },
        SetlistItem {
            name: "Reflection".to_string(),
            tone: Tone::Bb,
            pad_style: PadStyle::Base,
            low_cut_hz: 340.0,
            high_cut_hz: 3800.0,
        },
    ]
}

/// Load a setlist from a YAML file
pub fn load_setlist(path: &Path) -> Result<Vec<SetlistItem>, SetlistError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&contents)?)
}

/// Load a setlist, falling back to the built-in defaults
///
/// A missing file is normal on first launch; an unreadable or malformed
/// file is logged and replaced by defaults rather than failing startup.
pub fn load_setlist_or_default(path: &Path) -> Vec<SetlistItem> {
    if !path.exists() {
        log::info!("No setlist at {:?}, using defaults", path);
        return default_setlist();
    }
    match load_setlist(path) {
        Ok(items) => {
            log::info!("Loaded {} setlist entries from {:?}", items.len(), path);
            items
        }
        Err(e) => {
            log::warn!("Could not load setlist from {:?}: {}, using defaults", path, e);
            default_setlist()
        }
    }
}

/// Save a setlist to a YAML file, creating parent directories as needed
pub fn save_setlist(items: &[SetlistItem], path: &Path) -> Result<(), SetlistError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let yaml = serde_yaml::to_string(items)?;
    std::fs::write(path, yaml)?;
    Ok(())
}
