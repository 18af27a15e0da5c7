//! # REST API Handler
//!
//! Translates player requests into store operations: parses and validates
//! everything the client sent, builds the predicate, and maps missing records
//! to [`RestError::NotFound`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::player::{Player, PlayerFields, PlayerId};
use crate::query::{Criteria, ListQuery, Predicate};
use crate::storage::PlayerStore;

use super::errors::{RestError, RestResult};

/// Player operations over a store
pub struct PlayerHandler<S: PlayerStore> {
    store: Arc<S>,
}

impl<S: PlayerStore> Clone for PlayerHandler<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: PlayerStore> PlayerHandler<S> {
    pub fn new(store: S) -> Self {
        Self::from_shared(Arc::new(store))
    }

    pub fn from_shared(store: Arc<S>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Filtered, ordered page of players
    pub fn list(&self, params: &HashMap<String, String>) -> RestResult<Vec<Player>> {
        let query = ListQuery::parse(params)?;
        let predicate = Predicate::from_criteria(&query.criteria);
        tracing::debug!(
            criteria = query.criteria.len(),
            order = %query.order,
            page = query.page.number,
            size = query.page.size,
            "listing players"
        );

        let players = self
            .store
            .fetch_page(&predicate, query.order.resolve(), query.page)?;
        Ok(players)
    }

    /// Number of players matching the filter parameters
    pub fn count(&self, params: &HashMap<String, String>) -> RestResult<u64> {
        let criteria = Criteria::parse(params)?;
        let predicate = Predicate::from_criteria(&criteria);
        tracing::debug!(criteria = criteria.len(), "counting players");

        Ok(self.store.count(&predicate)?)
    }

    pub fn create(&self, fields: PlayerFields) -> RestResult<Player> {
        let new_player = fields.into_new_player()?;
        let player = self.store.insert(new_player)?;
        tracing::info!(
            id = player.id,
            name = %player.name,
            born = ?player.birth_date(),
            "player created"
        );
        Ok(player)
    }

    pub fn get(&self, raw_id: &str) -> RestResult<Player> {
        let id = parse_id(raw_id)?;
        self.store.get(id)?.ok_or(RestError::NotFound)
    }

    /// Merge `fields` into an existing player.
    ///
    /// Bad ids and bad fields are rejected before the store is consulted.
    pub fn update(&self, raw_id: &str, fields: PlayerFields) -> RestResult<Player> {
        let id = parse_id(raw_id)?;
        fields.validate()?;

        let player = self.store.update(id, &fields)?.ok_or(RestError::NotFound)?;
        tracing::info!(id, "player updated");
        Ok(player)
    }

    /// Remove a player. Unknown and non-positive ids are a no-op.
    pub fn delete(&self, raw_id: &str) -> RestResult<()> {
        let id = parse_numeric_id(raw_id)?;
        if id <= 0 {
            return Ok(());
        }

        if self.store.delete(id)? {
            tracing::info!(id, "player deleted");
        }
        Ok(())
    }
}

/// Decode a player JSON body
pub fn decode_body(body: &[u8]) -> RestResult<PlayerFields> {
    serde_json::from_slice(body).map_err(|e| RestError::InvalidBody(e.to_string()))
}

fn parse_numeric_id(raw: &str) -> RestResult<PlayerId> {
    raw.trim()
        .parse::<PlayerId>()
        .map_err(|_| RestError::InvalidId(raw.to_string()))
}

/// Parse a path id, which must be a positive integer
fn parse_id(raw: &str) -> RestResult<PlayerId> {
    match parse_numeric_id(raw)? {
        id if id > 0 => Ok(id),
        _ => Err(RestError::InvalidId(raw.to_string())),
    }
}
