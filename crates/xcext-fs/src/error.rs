//! Error types for xcext-fs

use std::path::PathBuf;

use crate::platform::Platform;

/// Result type for xcext-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in xcext-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not find tauri.conf.json under {root}")]
    ConfigNotFound { root: PathBuf },

    #[error("Could not find the {platform} project directory. {hint}")]
    AppleDirNotFound { platform: Platform, hint: String },

    #[error("project.yml not found in {dir}. Run 'tauri ios init' first.")]
    ManifestNotFound { dir: PathBuf },

    #[error("Templates directory not found: {path}")]
    TemplatesNotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
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
