//! Topic HTTP Routes

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::AppContext;
use crate::error::ApiError;
use crate::model::Topic;
use crate::store;

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

/// Create topic routes
pub fn topics_routes() -> Router<AppContext> {
    Router::new().route("/topics", get(list_topics_handler))
}

/// All topics
async fn list_topics_handler(
    State(ctx): State<AppContext>,
) -> Result<Json<TopicsResponse>, ApiError> {
    let topics = store::topics::list_topics(&ctx.db).await?;

    Ok(Json(TopicsResponse { topics }))
}
