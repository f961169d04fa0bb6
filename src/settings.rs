//! Game settings
//!
//! Persisted as a small JSON file next to the board files. Geometry
//! tolerances live in `consts`, not here.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::DEFAULT_LIVES;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Foul strokes allowed before a board is lost
    pub lives: u32,
    /// Drop circles from the board once their whole rim has been cut
    pub remove_erased_circles: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            lives: DEFAULT_LIVES,
            remove_erased_circles: true,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {e}", path.display()),
            },
            Err(e) => log::info!("No settings at {} ({e})", path.display()),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
