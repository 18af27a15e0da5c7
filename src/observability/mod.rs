//! Observability for the player registry
//!
//! Structured logging through `tracing`. Request spans come from the
//! `tower-http` trace layer installed by the HTTP server.

mod logging;

pub use logging::{init_logging, DEFAULT_LOG_FILTER};
