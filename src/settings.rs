//! User settings stored as settings.json in the app data directory
//!
//! Only window geometry is kept. Model status, input text and results start
//! fresh every run.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join(SETTINGS_FILE);
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, path = %path.display(), "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn window_pos(&self) -> Option<egui::Pos2> {
        match (self.window_x, self.window_y) {
            (Some(x), Some(y)) => Some(egui::pos2(x, y)),
            _ => None,
        }
    }

    pub fn window_size(&self) -> Option<egui::Vec2> {
        match (self.window_w, self.window_h) {
            (Some(w), Some(h)) => Some(egui::vec2(w, h)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("governance-demo-tests")
            .join(format!("{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = scratch_dir("missing");
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = scratch_dir("malformed");
        std::fs::write(dir.join(SETTINGS_FILE), "{ not json").unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
    }

    #[test]
    fn partial_file_fills_missing_keys() {
        let dir = scratch_dir("partial");
        std::fs::write(dir.join(SETTINGS_FILE), r#"{"window_w": 900.0}"#).unwrap();
        let settings = Settings::load(&dir);
        assert_eq!(settings.window_w, Some(900.0));
        assert_eq!(settings.window_size(), None);
        assert_eq!(settings.window_pos(), None);
    }

    #[test]
    fn saved_geometry_is_restored() {
        let dir = scratch_dir("saved");
        let settings = Settings {
            window_x: Some(10.0),
            window_y: Some(20.0),
            window_w: Some(1000.0),
            window_h: Some(760.0),
        };
        settings.save(&dir);
        let loaded = Settings::load(&dir);
        assert_eq!(loaded.window_pos(), Some(egui::pos2(10.0, 20.0)));
        assert_eq!(loaded.window_size(), Some(egui::vec2(1000.0, 760.0)));
    }
}
