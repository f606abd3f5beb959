//! API Descriptor Route
//!
//! `GET /api` answers with a static JSON object enumerating every endpoint
//! the service exposes and the queries each accepts.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use super::AppContext;

/// Create the descriptor route (mounted at the /api root)
pub fn endpoints_routes() -> Router<AppContext> {
    Router::new().route("/", get(endpoints_handler))
}

/// The endpoint descriptor payload
async fn endpoints_handler() -> Json<Value> {
    Json(descriptor())
}

fn descriptor() -> Value {
    json!({
        "GET /api": {
            "description": "serves up a json representation of all the available endpoints of the api",
            "queries": []
        },
        "GET /api/topics": {
            "description": "serves an array of all topics",
            "queries": []
        },
        "GET /api/articles": {
            "description": "serves an array of all articles",
            "queries": ["topic", "sort_by", "order"]
        },
        "GET /api/articles/:article_id": {
            "description": "serves the article with the given id",
            "queries": []
        },
        "PATCH /api/articles/:article_id": {
            "description": "applies the inc_votes increment to the article's votes and serves the updated article",
            "queries": []
        },
        "GET /api/articles/:article_id/comments": {
            "description": "serves an array of comments for the given article, newest first",
            "queries": []
        },
        "POST /api/articles/:article_id/comments": {
            "description": "adds a comment to the given article and serves the created comment",
            "queries": []
        },
        "DELETE /api/comments/:comment_id": {
            "description": "deletes the comment with the given id",
            "queries": []
        },
        "GET /api/users": {
            "description": "serves an array of all users",
            "queries": []
        }
    })
}
