//! Error types for switchyard-config.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration and dump error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The whole configuration file failed to parse.
    #[error("invalid configuration syntax: {0}")]
    Parse(#[from] toml_edit::TomlError),

    /// Atomic write failed.
    #[error(transparent)]
    Atomic(#[from] crate::atomic::AtomicWriteError),

    /// Configuration file absent on a strict (user-invoked) load.
    #[error("configuration file not found: {0}")]
    MissingFile(PathBuf),

    /// Could not determine the per-user root directory.
    #[error("could not determine a user documents or data directory")]
    UserDirNotFound,
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
