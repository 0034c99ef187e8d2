//! Error types for loading level and settings files

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LanderError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid level: {0}")]
    InvalidLevel(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, LanderError>;
