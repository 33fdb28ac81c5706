//! Sound preferences
//!
//! Persisted as JSON next to the binary. A missing or corrupt file falls
//! back to defaults; saving never propagates an error.

use serde::{Deserialize, Serialize};

/// Audio preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub sound_enabled: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Effect clip volume (0.0 - 1.0)
    pub effect_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            master_volume: 0.8,
            effect_volume: 0.7,
        }
    }
}

impl Settings {
    const FILE: &'static str = "gapwing-settings.json";

    /// Volume the sink should apply to effect clips
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled {
            (self.master_volume * self.effect_volume).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("settings loaded from {}", Self::FILE);
                    settings
                }
                Err(e) => {
                    log::warn!("ignoring corrupt {}: {}", Self::FILE, e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk; failures are logged, never propagated
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(Self::FILE, json) {
                    log::warn!("failed to save settings: {}", e);
                } else {
                    log::info!("settings saved");
                }
            }
            Err(e) => log::warn!("failed to serialize settings: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.sound_enabled);
        assert_eq!(settings.master_volume, 0.8);
        assert_eq!(settings.effect_volume, 0.7);
    }

    #[test]
    fn test_effective_volume_respects_mute() {
        let mut settings = Settings::default();
        assert!((settings.effective_volume() - 0.56).abs() < 1e-6);
        settings.sound_enabled = false;
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            sound_enabled: false,
            master_volume: 0.5,
            effect_volume: 0.25,
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
