//! # HTTP Layer
//!
//! Per-resource route builders, the request handlers behind them, and the
//! server that assembles everything into one router.

mod articles_routes;
mod comments_routes;
mod endpoints_routes;
mod health_routes;
mod server;
mod topics_routes;
mod users_routes;

pub use server::ApiServer;

use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};

/// Shared request context.
///
/// Carries the database handle explicitly; there is no module-global
/// connection state anywhere in the crate.
#[derive(Clone)]
pub struct AppContext {
    pub db: PgPool,
}

impl AppContext {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Parse a path segment declared as an entity id.
///
/// Runs before any existence check, so a malformed id never reaches the
/// database layer. The rejection message is uniform across all id-bearing
/// routes.
pub(crate) fn parse_id(raw: &str) -> ApiResult<i32> {
    raw.parse::<i32>().map_err(|_| ApiError::BadRequest)
}
