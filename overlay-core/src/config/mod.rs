mod button;
mod detection;
mod system;

pub use button::*;
pub use detection::*;
pub use system::*;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{paths, OverlayError, Result};

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub button: ButtonConfig,
    pub notes_window: NotesWindowConfig,
    pub animation: AnimationConfig,
    pub detection: DetectionConfig,
    pub system: SystemConfig,
    /// File the config was read from, `None` when running on defaults.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(dir) = paths::data_dir() {
        candidates.push(dir.join(paths::CONFIG_FILE_NAME));
    }
    candidates.push(PathBuf::from("config.toml"));
    candidates.push(PathBuf::from("src-tauri/config.toml"));
    candidates
}

pub fn get_config_path() -> Option<PathBuf> {
    config_candidates().into_iter().find(|path| path.exists())
}

pub fn parse_config(content: &str, path: &Path) -> Result<Config> {
    let mut config: Config = toml::from_str(content).map_err(|e| OverlayError::Config {
        path: path.to_path_buf(),
        source: e,
    })?;
    config.source = Some(path.to_path_buf());
    Ok(config)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| OverlayError::io(path, e))?;
    parse_config(&content, path)
}

/// Reads the first config file found, or returns defaults when there is none.
///
/// Runs before the logger exists, so failures are returned rather than logged.
pub fn load_config() -> Result<Config> {
    match get_config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_document_when_parsing_then_uses_defaults() {
        let config = parse_config("", Path::new("config.toml")).unwrap();
        assert_eq!(config.button, ButtonConfig::default());
        assert_eq!(config.detection.interval_ms, 500);
        assert_eq!(config.system.hotkey, DEFAULT_HOTKEY);
        assert_eq!(config.source, Some(PathBuf::from("config.toml")));
    }

    #[test]
    fn given_partial_section_when_parsing_then_fills_missing_fields() {
        let content = r#"
[button]
top_margin = 300

[detection]
enabled = false
"#;
        let config = parse_config(content, Path::new("config.toml")).unwrap();
        assert_eq!(config.button.top_margin, 300);
        assert_eq!(config.button.width, 30);
        assert!(!config.detection.enabled);
        assert_eq!(config.detection.tolerance, 10);
        assert_eq!(config.notes_window.height, 500);
    }

    #[test]
    fn given_wrong_type_when_parsing_then_reports_path() {
        let err = parse_config("[button]\nwidth = \"wide\"\n", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, OverlayError::Config { ref path, .. } if path == Path::new("bad.toml")));
    }

    #[test]
    fn notes_window_size_respects_minimum() {
        let notes = NotesWindowConfig {
            width: 200,
            height: 450,
            ..NotesWindowConfig::default()
        };
        assert_eq!(notes.effective_size(), (350, 450));
    }
}
