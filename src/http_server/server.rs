//! # HTTP Server
//!
//! Main HTTP server combining the health check and the player REST API.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::rest_api::{PlayerHandler, RestServer};
use crate::storage::PlayerStore;

use super::config::HttpServerConfig;
use super::health_routes::health_routes;

/// HTTP server for the player registry
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store`
    pub fn new<S: PlayerStore + 'static>(config: HttpServerConfig, store: S) -> Self {
        Self::with_handler(config, PlayerHandler::new(store))
    }

    /// Create a server over an existing handler
    pub fn with_handler<S: PlayerStore + 'static>(
        config: HttpServerConfig,
        handler: PlayerHandler<S>,
    ) -> Self {
        let router = Self::build_router(&config, handler);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router<S: PlayerStore + 'static>(
        config: &HttpServerConfig,
        handler: PlayerHandler<S>,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .merge(RestServer::new(handler).router())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Player registry listening on http://{}", listener.local_addr()?);
        tracing::info!("  - /rest/players   Player records");
        tracing::info!("  - /health         Health check");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryPlayerStore;

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(HttpServerConfig::default(), InMemoryPlayerStore::new());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_config() {
        let config = HttpServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            cors_origins: vec!["http://localhost:5173".to_string()],
        };
        let server = HttpServer::new(config, InMemoryPlayerStore::new());
        assert_eq!(server.socket_addr(), "127.0.0.1:9000");
        let _router = server.router();
    }
}
