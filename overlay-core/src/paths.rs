use std::fs;
use std::path::PathBuf;

use crate::{OverlayError, Result};

pub const DATA_DIR_NAME: &str = ".notes_overlay";
pub const NOTES_FILE_NAME: &str = "notes.json";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_DIR_NAME: &str = "logs";

/// `{home}/.notes_overlay`
pub fn data_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR_NAME))
        .ok_or(OverlayError::HomeDirNotFound)
}

pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = data_dir()?;
    fs::create_dir_all(&dir).map_err(|e| OverlayError::io(&dir, e))?;
    Ok(dir)
}

pub fn notes_file() -> Result<PathBuf> {
    data_dir().map(|dir| dir.join(NOTES_FILE_NAME))
}

pub fn settings_file() -> Result<PathBuf> {
    data_dir().map(|dir| dir.join(SETTINGS_FILE_NAME))
}

pub fn log_dir() -> Result<PathBuf> {
    data_dir().map(|dir| dir.join(LOG_DIR_NAME))
}
