//! Game settings and preferences
//!
//! Persisted as a JSON file in the working directory. A missing or
//! unreadable file falls back to defaults; persistence failures are
//! logged and never propagate.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Fixed session seed; `None` derives one from the clock at startup
    pub seed: Option<u64>,
    /// Log the measured frame rate once per second
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Settings file name
    const STORAGE_FILE: &'static str = "star_salvo_settings.json";

    pub fn load() -> Self {
        Self::load_from(Path::new(Self::STORAGE_FILE))
    }

    fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("settings loaded from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("settings file unreadable ({err}); using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file; using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self) {
        self.save_to(Path::new(Self::STORAGE_FILE));
    }

    fn save_to(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("could not save settings: {err}");
                } else {
                    log::info!("settings saved");
                }
            }
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("star_salvo_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/star_salvo.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json {").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings, Settings::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = temp_path("roundtrip");
        let settings = Settings {
            seed: Some(12345),
            show_fps: true,
        };
        settings.save_to(&path);
        let loaded = Settings::load_from(&path);
        assert_eq!(loaded, settings);
        let _ = fs::remove_file(&path);
    }
}
