//! In-memory player store

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use crate::player::{NewPlayer, Player, PlayerFields, PlayerId};
use crate::query::{PageSpec, Predicate, SortSpec};

use super::errors::{StorageError, StorageResult};
use super::store::PlayerStore;

/// Player records held in a lock-protected map.
///
/// Ids come from an atomic counter starting at 1 and are never reused, so
/// concurrent inserts cannot collide.
pub struct InMemoryPlayerStore {
    players: RwLock<BTreeMap<PlayerId, Player>>,
    next_id: AtomicI64,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self {
            players: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Build a store holding `players`, numbered from 1 in order
    pub fn with_players(players: impl IntoIterator<Item = NewPlayer>) -> StorageResult<Self> {
        let store = Self::new();
        for player in players {
            store.insert(player)?;
        }
        Ok(store)
    }

    /// Total number of stored records
    pub fn len(&self) -> StorageResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }

    fn read(&self) -> StorageResult<std::sync::RwLockReadGuard<'_, BTreeMap<PlayerId, Player>>> {
        self.players.read().map_err(|_| StorageError::LockPoisoned)
    }

    fn write(&self) -> StorageResult<std::sync::RwLockWriteGuard<'_, BTreeMap<PlayerId, Player>>> {
        self.players.write().map_err(|_| StorageError::LockPoisoned)
    }
}

impl Default for InMemoryPlayerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStore for InMemoryPlayerStore {
    fn fetch_page(
        &self,
        predicate: &Predicate,
        sort: SortSpec,
        page: PageSpec,
    ) -> StorageResult<Vec<Player>> {
        let mut matching: Vec<Player> = self
            .read()?
            .values()
            .filter(|p| predicate.matches(p))
            .cloned()
            .collect();

        sort.sort(&mut matching);

        Ok(page.slice(matching))
    }

    fn count(&self, predicate: &Predicate) -> StorageResult<u64> {
        let count = self
            .read()?
            .values()
            .filter(|p| predicate.matches(p))
            .count();
        Ok(count as u64)
    }

    fn insert(&self, player: NewPlayer) -> StorageResult<Player> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let player = Player::from_new(id, player);

        self.write()?.insert(id, player.clone());

        Ok(player)
    }

    fn get(&self, id: PlayerId) -> StorageResult<Option<Player>> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn update(&self, id: PlayerId, patch: &PlayerFields) -> StorageResult<Option<Player>> {
        let mut players = self.write()?;

        Ok(players.get_mut(&id).map(|player| {
            player.apply(patch);
            player.clone()
        }))
    }

    fn delete(&self, id: PlayerId) -> StorageResult<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }
}
