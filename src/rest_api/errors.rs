//! # REST API Errors
//!
//! Error types for the player REST API and their HTTP status mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::player::PlayerError;
use crate::query::QueryError;
use crate::storage::StorageError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Invalid query parameter or paging value
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(#[from] QueryError),

    /// Path id that is not a positive integer
    #[error("Invalid player id: {0}")]
    InvalidId(String),

    /// Body that is not a player JSON object
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Player outside its bounds
    #[error("Invalid player: {0}")]
    InvalidPlayer(#[from] PlayerError),

    /// Player not found
    #[error("Player not found")]
    NotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Store failure
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            RestError::InvalidQueryParam(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidId(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RestError::InvalidPlayer(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            RestError::NotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            RestError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<RestError> for ErrorResponse {
    fn from(err: RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}
