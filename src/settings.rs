//! Game settings
//!
//! The tunables the control panel starts from. Stored as JSON: a file on
//! native, LocalStorage on the web.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a settings document was rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Obstacle speed (units/frame)
    pub speed: f32,
    /// Jump impulse (units/frame)
    pub jump_power: f32,
    /// Vertical acceleration (units/frame², negative)
    pub gravity: f32,
    /// Lives at the start of a run
    pub initial_life: u32,
    /// Obstacles in the pool
    pub obstacle_count: usize,
    /// Initial gap between consecutive obstacles
    pub obstacle_spacing: f32,
    /// Show the axes helper
    pub show_axes: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            jump_power: DEFAULT_JUMP_POWER,
            gravity: DEFAULT_GRAVITY,
            initial_life: DEFAULT_LIFE,
            obstacle_count: OBSTACLE_COUNT,
            obstacle_spacing: OBSTACLE_SPACING,
            show_axes: true,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make the game unplayable
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), SettingsError> {
            Err(SettingsError::Invalid { field, reason })
        }

        for (field, value) in [
            ("speed", self.speed),
            ("jump_power", self.jump_power),
            ("gravity", self.gravity),
            ("obstacle_spacing", self.obstacle_spacing),
        ] {
            if !value.is_finite() {
                return invalid(field, "must be a finite number");
            }
        }

        // Obstacles would never reach the player and never recycle
        if self.speed <= 0.0 {
            return invalid("speed", "must be positive");
        }
        if self.jump_power <= 0.0 {
            return invalid("jump_power", "must be positive");
        }
        // A jump would never come back down
        if self.gravity >= 0.0 {
            return invalid("gravity", "must be negative");
        }
        if self.initial_life == 0 {
            return invalid("initial_life", "must be at least 1");
        }
        if self.obstacle_count == 0 {
            return invalid("obstacle_count", "must be at least 1");
        }
        if self.obstacle_spacing <= 0.0 {
            return invalid("obstacle_spacing", "must be positive");
        }
        Ok(())
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "obstacle_dash_settings";

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
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
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.speed, 0.1);
        assert_eq!(settings.jump_power, 0.2);
        assert_eq!(settings.initial_life, 3);
        assert_eq!(settings.obstacle_count, 10);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "speed": 0.25, "show_axes": false }"#).unwrap();
        assert_eq!(settings.speed, 0.25);
        assert!(!settings.show_axes);
        assert_eq!(settings.gravity, DEFAULT_GRAVITY);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            initial_life: 5,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_pathological_values() {
        let cases = [
            (r#"{ "speed": 0.0 }"#, "speed"),
            (r#"{ "speed": -1.0 }"#, "speed"),
            (r#"{ "jump_power": 0.0 }"#, "jump_power"),
            (r#"{ "gravity": 0.01 }"#, "gravity"),
            (r#"{ "initial_life": 0 }"#, "initial_life"),
            (r#"{ "obstacle_count": 0 }"#, "obstacle_count"),
            (r#"{ "obstacle_spacing": -5.0 }"#, "obstacle_spacing"),
        ];
        for (json, expected) in cases {
            match Settings::from_json(json) {
                Err(SettingsError::Invalid { field, .. }) => assert_eq!(field, expected),
                other => panic!("{json}: expected invalid {expected}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_rejects_non_finite() {
        let settings = Settings {
            speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid { field: "speed", .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ speed: "),
            Err(SettingsError::Parse(_))
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from("/nonexistent/obstacle-dash.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io(_)));
        assert!(err.to_string().starts_with("failed to read settings"));
    }
}
