//! UI configuration.
//!
//! In-memory defaults, optionally overridden from a JSON file named by
//! `TERMFOLIO_CONFIG`. A missing or unparsable file falls back to the
//! defaults; startup never fails on configuration.

use serde::Deserialize;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub sidebar_width: u16,
    pub show_sidebar: bool,
    /// Event-loop poll timeout; also the typewriter cadence.
    pub tick_ms: u64,
    pub min_width: u16,
    pub min_height: u16,
    pub scroll_lines: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_width: 28,
            show_sidebar: true,
            tick_ms: 100,
            min_width: 70,
            min_height: 18,
            scroll_lines: 1,
        }
    }
}

impl UiConfig {
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => config,
                Err(error) => {
                    tracing::warn!(path = %path.display(), %error, "bad config file, using defaults");
                    Self::default()
                }
            },
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "config file unreadable, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_env() -> Self {
        match std::env::var_os("TERMFOLIO_CONFIG") {
            Some(path) => Self::load(Path::new(&path)),
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert_eq!(config.sidebar_width, 28);
        assert!(config.show_sidebar);
        assert_eq!(config.tick_ms, 100);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, r#"{{ "sidebar_width": 40, "show_sidebar": false }}"#).unwrap();

        let config = UiConfig::load(&path);
        assert_eq!(config.sidebar_width, 40);
        assert!(!config.show_sidebar);
        // Unspecified fields keep their defaults.
        assert_eq!(config.tick_ms, 100);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = UiConfig::load(Path::new("/nonexistent/termfolio.json"));
        assert_eq!(config.sidebar_width, UiConfig::default().sidebar_width);
    }

    #[test]
    fn test_load_garbage_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        let config = UiConfig::load(&path);
        assert_eq!(config.min_width, UiConfig::default().min_width);
    }
}
