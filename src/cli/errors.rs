//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::storage::StorageError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file missing fields or out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// `init` target already exists
    #[error("Configuration file {0:?} already exists")]
    AlreadyInitialized(PathBuf),

    /// I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration JSON could not be read or written
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Seed data could not be loaded
    #[error("Seed error: {0}")]
    Seed(#[from] StorageError),

    /// Runtime or server failure
    #[error("Boot failed: {0}")]
    BootFailed(String),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::BootFailed(msg.into())
    }
}
