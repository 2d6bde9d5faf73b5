//! App configuration
//!
//! Preferences live in `roomcraft.ron` next to the executable's working
//! directory. Missing or unreadable config falls back to defaults so the
//! app always starts.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name
pub const CONFIG_FILE: &str = "roomcraft.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory that holds saved spaces
    pub spaces_dir: String,
    pub window_width: i32,
    pub window_height: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            spaces_dir: "spaces".to_string(),
            window_width: 1280,
            window_height: 800,
        }
    }
}

impl AppConfig {
    /// Load from the given path, falling back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Config parse error in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = AppConfig::load_or_default("definitely/not/here.ron");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_round_trip() {
        let config = AppConfig {
            spaces_dir: "elsewhere".to_string(),
            window_width: 640,
            window_height: 480,
        };
        let text = ron::to_string(&config).unwrap();
        let back: AppConfig = ron::from_str(&text).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "(this is not valid ron").unwrap();
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
    }
}
