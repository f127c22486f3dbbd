//! Player configuration for selah-pads
//!
//! Configuration is stored as YAML in the user's config directory.
//! Default location: ~/.config/selah/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use selah_core::types::{DEFAULT_HIGH_CUT_HZ, DEFAULT_LOW_CUT_HZ};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PadsConfig {
    /// Audio settings (cut slider positions restored between sessions)
    pub audio: AudioConfig,
    /// Whether the premium pad styles have been unlocked
    pub premium_unlocked: bool,
}

impl Default for PadsConfig {
    fn default() -> Self {
        Self {
            audio: AudioConfig::default(),
            premium_unlocked: false,
        }
    }
}

/// Audio configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Low-cut slider position in Hz (saved/restored between sessions)
    pub low_cut_hz: f32,
    /// High-cut slider position in Hz
    pub high_cut_hz: f32,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            low_cut_hz: DEFAULT_LOW_CUT_HZ,
            high_cut_hz: DEFAULT_HIGH_CUT_HZ,
        }
    }
}

/// Get the default config file path
///
/// Returns: ~/.config/selah/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("selah")
        .join("config.yaml")
}

/// Get the default setlist file path
///
/// Returns: ~/.config/selah/setlist.yaml
pub fn default_setlist_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join("selah")
        .join("setlist.yaml")
}

/// Load configuration from a YAML file
///
/// If the file doesn't exist, returns default config.
/// If the file exists but is invalid, logs a warning and returns default config.
pub fn load_config(path: &Path) -> PadsConfig {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return PadsConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<PadsConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded config - Low cut: {:.0} Hz, High cut: {:.0} Hz, Premium: {}",
                    config.audio.low_cut_hz,
                    config.audio.high_cut_hz,
                    config.premium_unlocked
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                PadsConfig::default()
            }
        },
        Err(e) => {
            log::warn!(
                "load_config: Failed to read config file: {}, using defaults",
                e
            );
            PadsConfig::default()
        }
    }
}

/// Save configuration to a YAML file
///
/// Creates parent directories if they don't exist.
pub fn save_config(config: &PadsConfig, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write config file: {:?}", path))?;

    Ok(())
}
