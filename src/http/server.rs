//! # HTTP Server
//!
//! Combines the per-resource routers into the full application router and
//! serves it.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::{Json, Router};
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::articles_routes::articles_routes;
use super::comments_routes::comments_routes;
use super::endpoints_routes::endpoints_routes;
use super::health_routes::health_routes;
use super::topics_routes::topics_routes;
use super::users_routes::users_routes;
use super::AppContext;
use crate::config::ServerConfig;
use crate::error::ErrorBody;

/// HTTP server for the newsdesk API
pub struct ApiServer {
    config: ServerConfig,
    router: Router,
}

impl ApiServer {
    /// Create a new server from a configuration and a database pool
    pub fn new(config: ServerConfig, pool: PgPool) -> Self {
        let router = Self::build_router(&config, pool);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, pool: PgPool) -> Router {
        let ctx = AppContext::new(pool);

        // Permissive CORS when no origins are configured, origin list
        // otherwise.
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
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

        let api = Router::new()
            .merge(endpoints_routes())
            .merge(topics_routes())
            .merge(articles_routes())
            .merge(comments_routes())
            .merge(users_routes());

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // The whole public surface under /api
            .nest("/api", api)
            .fallback(not_found_handler)
            .layer(TraceLayer::new_for_http())
            .layer(cors)
            .with_state(ctx)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        tracing::info!(%addr, "starting newsdesk API server");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Unmatched routes answer 404 with the uniform error body shape
async fn not_found_handler() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: "Route not found".to_string(),
        }),
    )
}
