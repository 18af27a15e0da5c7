//! Storage errors
//!
//! Any of these surfacing from a request is a server fault (5xx).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::player::PlayerError;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    /// A writer panicked while holding the lock
    #[error("Player store lock poisoned")]
    LockPoisoned,

    /// Seed file could not be read
    #[error("Failed to read seed file {path:?}: {source}")]
    SeedIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Seed file is not a JSON array of players
    #[error("Invalid seed JSON: {0}")]
    SeedDecode(#[from] serde_json::Error),

    /// Seed entry failed create validation
    #[error("Invalid seed player at index {index}: {source}")]
    InvalidSeedPlayer {
        index: usize,
        #[source]
        source: PlayerError,
    },
}
