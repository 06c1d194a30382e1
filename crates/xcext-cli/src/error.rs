//! Error types for xcext-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from xcext-core
    #[error(transparent)]
    Core(#[from] xcext_core::Error),

    /// Error from xcext-fs
    #[error(transparent)]
    Fs(#[from] xcext_fs::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
