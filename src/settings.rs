//! Game settings and preferences
//!
//! Persisted in LocalStorage. Physics is not configurable; only presentation
//! and the display profile override live here.

use serde::{Deserialize, Serialize};

use crate::sim::{Profile, Side};

/// Canvas colours (any CSS colour string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: String,
    pub paddle: String,
    pub divider: String,
    pub ball: String,
    pub score: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "black".to_string(),
            paddle: "red".to_string(),
            divider: "grey".to_string(),
            ball: "white".to_string(),
            score: "white".to_string(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Winner label for the bottom paddle
    pub player_label: String,
    /// Winner label for the top paddle
    pub opponent_label: String,
    /// Force a display profile instead of detecting it
    pub profile_override: Option<Profile>,
    pub colors: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            player_label: "Player 1".to_string(),
            opponent_label: "Computer".to_string(),
            profile_override: None,
            colors: Palette::default(),
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "canvas_pong_settings";

    pub fn label(&self, side: Side) -> &str {
        match side {
            Side::Player => &self.player_label,
            Side::Opponent => &self.opponent_label,
        }
    }

    /// Override if set, otherwise the detected profile
    pub fn resolve_profile(&self, detected: Profile) -> Profile {
        self.profile_override.unwrap_or(detected)
    }

    /// Parse settings JSON, falling back to defaults on error
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            match self.to_json() {
                Ok(json) => {
                    if storage.set_item(Self::STORAGE_KEY, &json).is_err() {
                        log::warn!("Could not write settings to LocalStorage");
                    } else {
                        log::info!("Settings saved");
                    }
                }
                Err(e) => log::warn!("Could not serialize settings: {e}"),
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
