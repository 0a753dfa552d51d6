use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the preferences store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Preferences I/O failed for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Preferences file '{path}' is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Preferences write task failed: {0}")]
    Task(String),

    #[error("Preferences backend unavailable: {message}")]
    Unavailable { message: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
