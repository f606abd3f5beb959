//! User HTTP Routes

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::AppContext;
use crate::error::ApiError;
use crate::model::User;
use crate::store;

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

/// Create user routes
pub fn users_routes() -> Router<AppContext> {
    Router::new().route("/users", get(list_users_handler))
}

/// All users
async fn list_users_handler(
    State(ctx): State<AppContext>,
) -> Result<Json<UsersResponse>, ApiError> {
    let users = store::users::list_users(&ctx.db).await?;

    Ok(Json(UsersResponse { users }))
}
