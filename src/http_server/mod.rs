//! # HTTP Server Module
//!
//! Binds the player REST API and the health check into one axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/rest/players/*` - Player records

pub mod config;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
