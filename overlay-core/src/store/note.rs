use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::json_file::{read_json, write_json};
use crate::Result;

/// On-disk form of the note: `{"content": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDocument {
    #[serde(default)]
    pub content: String,
}

/// The single persisted note, cached in memory.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
    content: String,
}

impl NoteStore {
    /// Opens the store and loads whatever the file holds.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let content = Self::load(&path);
        Self { path, content }
    }

    /// Prior note text, or empty text when the file is missing or unreadable.
    pub fn load(path: &Path) -> String {
        match read_json::<NoteDocument>(path) {
            Ok(Some(document)) => {
                info!("[load] loaded note ({} chars) from {}", document.content.chars().count(), path.display());
                document.content
            }
            Ok(None) => {
                debug!("[load] no note file at {}", path.display());
                String::new()
            }
            Err(e) => {
                warn!("[load] ignoring unreadable note file: {}", e);
                String::new()
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Updates the cached text and overwrites the file.
    pub fn save(&mut self, content: &str) -> Result<()> {
        self.content = content.to_string();
        write_json(
            &self.path,
            &NoteDocument {
                content: self.content.clone(),
            },
        )
    }

    pub fn clear(&mut self) -> Result<()> {
        self.save("")
    }
}
