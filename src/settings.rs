//! User preferences persisted between sessions.
//!
//! Only view preferences are stored; drawings are never persisted.

use crate::constants::DEFAULT_GRID_PITCH;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};

/// Storage key under which settings are kept by eframe.
pub const SETTINGS_KEY: &str = "settings";

/// Persisted view preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Grid pitch in world units
    pub grid_pitch: f32,
    /// Whether the grid is drawn
    pub grid_visible: bool,
    /// Whether the minimap overlay is shown
    pub show_minimap: bool,
    /// Whether nails are drawn on segments
    pub show_nails: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            grid_pitch: DEFAULT_GRID_PITCH,
            grid_visible: true,
            show_minimap: true,
            show_nails: true,
        }
    }
}

impl Settings {
    /// Serializes the settings to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes settings from JSON. Missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads settings from eframe storage, falling back to defaults when absent or unreadable.
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let Some(json) = storage.and_then(|s| s.get_string(SETTINGS_KEY)) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Failed to parse stored settings, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Writes the settings into eframe storage.
    pub fn store(&self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => storage.set_string(SETTINGS_KEY, json),
            Err(err) => log::warn!("Failed to serialize settings: {err}"),
        }
    }

    /// Grid built from the stored pitch and visibility.
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_pitch, self.grid_visible)
    }

    /// Copies the current grid configuration back into the settings.
    pub fn sync_grid(&mut self, grid: &Grid) {
        self.grid_pitch = grid.pitch();
        self.grid_visible = grid.is_visible();
    }
}
