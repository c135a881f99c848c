use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("home directory could not be resolved")]
    HomeDirNotFound,
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid json in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("foreground window query failed: {0}")]
    Probe(String),
}

impl OverlayError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        OverlayError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, OverlayError>;
