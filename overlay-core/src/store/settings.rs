use log::warn;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::json_file::{read_json, write_json};
use crate::overlay::EdgeSide;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub button_side: EdgeSide,
}

#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    settings: Settings,
}

impl SettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match read_json::<Settings>(&path) {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                warn!("[open] ignoring unreadable settings: {}", e);
                Settings::default()
            }
        };
        Self { path, settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Writes only when the side actually changed.
    pub fn set_button_side(&mut self, side: EdgeSide) -> Result<()> {
        if self.settings.button_side == side {
            return Ok(());
        }
        self.settings.button_side = side;
        write_json(&self.path, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn side_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");

        let mut store = SettingsStore::open(&path);
        assert_eq!(store.settings().button_side, EdgeSide::Right);
        store.set_button_side(EdgeSide::Left).unwrap();

        let reopened = SettingsStore::open(&path);
        assert_eq!(reopened.settings().button_side, EdgeSide::Left);
        assert!(std::fs::read_to_string(&path).unwrap().contains("\"left\""));
    }

    #[test]
    fn unknown_side_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"button_side": "top"}"#).unwrap();

        assert_eq!(SettingsStore::open(&path).settings().button_side, EdgeSide::Right);
    }
}
