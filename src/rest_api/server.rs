//! # REST API HTTP Server
//!
//! Axum routes for `/rest/players`.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::player::Player;
use crate::storage::PlayerStore;

use super::errors::RestError;
use super::handler::{decode_body, PlayerHandler};

/// REST API server state
pub struct RestServer<S: PlayerStore> {
    handler: PlayerHandler<S>,
}

impl<S: PlayerStore + 'static> RestServer<S> {
    pub fn new(handler: PlayerHandler<S>) -> Self {
        Self { handler }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        Router::new()
            .route(
                "/rest/players",
                get(list_handler::<S>).post(create_handler::<S>),
            )
            .route("/rest/players/count", get(count_handler::<S>))
            .route(
                "/rest/players/:id",
                get(get_handler::<S>)
                    .post(update_handler::<S>)
                    .delete(delete_handler::<S>),
            )
            .with_state(self.handler)
    }
}

/// Shared state type
type ServerState<S> = PlayerHandler<S>;

/// List players handler
async fn list_handler<S: PlayerStore + 'static>(
    State(handler): State<ServerState<S>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Player>>, RestError> {
    let players = handler.list(&query)?;
    Ok(Json(players))
}

/// Count players handler
async fn count_handler<S: PlayerStore + 'static>(
    State(handler): State<ServerState<S>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<u64>, RestError> {
    let count = handler.count(&query)?;
    Ok(Json(count))
}

/// Create player handler
async fn create_handler<S: PlayerStore + 'static>(
    State(handler): State<ServerState<S>>,
    body: Bytes,
) -> Result<Json<Player>, RestError> {
    let fields = decode_body(&body)?;
    let player = handler.create(fields)?;
    Ok(Json(player))
}

/// Get single player handler
async fn get_handler<S: PlayerStore + 'static>(
    State(handler): State<ServerState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Player>, RestError> {
    let player = handler.get(&id)?;
    Ok(Json(player))
}

/// Update player handler
async fn update_handler<S: PlayerStore + 'static>(
    State(handler): State<ServerState<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Player>, RestError> {
    let fields = decode_body(&body)?;
    let player = handler.update(&id, fields)?;
    Ok(Json(player))
}

/// Delete player handler
async fn delete_handler<S: PlayerStore + 'static>(
    State(handler): State<ServerState<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, RestError> {
    handler.delete(&id)?;
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryPlayerStore;

    #[test]
    fn test_router_builds() {
        let server = RestServer::new(PlayerHandler::new(InMemoryPlayerStore::new()));
        let _router = server.router();
    }
}
