//! Error types for xcext-core

use std::path::PathBuf;

/// Result type for xcext-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scaffolding an extension
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown extension type: {requested}. Available: {available}")]
    UnknownExtensionType { requested: String, available: String },

    #[error(transparent)]
    Fs(#[from] xcext_fs::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
