//! Store trait

use crate::player::{NewPlayer, Player, PlayerFields, PlayerId};
use crate::query::{PageSpec, Predicate, SortSpec};

use super::errors::StorageResult;

/// Record collection able to execute player predicates.
///
/// `fetch_page` and `count` must evaluate a predicate identically; `count`
/// ignores ordering and paging. Writes receive already validated input.
pub trait PlayerStore: Send + Sync {
    /// Matching records, sorted, restricted to one page
    fn fetch_page(
        &self,
        predicate: &Predicate,
        sort: SortSpec,
        page: PageSpec,
    ) -> StorageResult<Vec<Player>>;

    /// Number of matching records
    fn count(&self, predicate: &Predicate) -> StorageResult<u64>;

    /// Store a new record under a fresh id
    fn insert(&self, player: NewPlayer) -> StorageResult<Player>;

    fn get(&self, id: PlayerId) -> StorageResult<Option<Player>>;

    /// Merge a patch into an existing record; `None` if the id is unknown
    fn update(&self, id: PlayerId, patch: &PlayerFields) -> StorageResult<Option<Player>>;

    /// Remove a record; `false` if it did not exist
    fn delete(&self, id: PlayerId) -> StorageResult<bool>;
}
