//! Seed loading
//!
//! A seed file is a JSON array in the same shape as a create body. Ids in
//! the file are ignored; records get ids in file order.

use std::fs;
use std::path::Path;

use crate::player::{NewPlayer, PlayerFields};

use super::errors::{StorageError, StorageResult};

/// Read and validate a seed file
pub fn load_seed(path: &Path) -> StorageResult<Vec<NewPlayer>> {
    let content = fs::read_to_string(path).map_err(|source| StorageError::SeedIo {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&content)
}

/// Validate seed JSON
pub fn parse_seed(content: &str) -> StorageResult<Vec<NewPlayer>> {
    let entries: Vec<PlayerFields> = serde_json::from_str(content)?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, fields)| {
            fields
                .into_new_player()
                .map_err(|source| StorageError::InvalidSeedPlayer { index, source })
        })
        .collect()
}
