use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{OverlayError, Result};

/// `Ok(None)` when the file does not exist.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(OverlayError::io(path, e)),
    };
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| OverlayError::Json {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Writes pretty JSON to a sibling temp file, then renames it over `path`.
/// A crash mid-write leaves the previous file intact.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| OverlayError::io(parent, e))?;
        }
    }
    let json = serde_json::to_string_pretty(value).map_err(|e| OverlayError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    let tmp = temp_path(path);
    fs::write(&tmp, json).map_err(|e| OverlayError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        OverlayError::io(path, e)
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
