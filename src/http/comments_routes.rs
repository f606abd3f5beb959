//! Comment HTTP Routes
//!
//! Endpoints for listing, posting, and deleting comments.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use super::{parse_id, AppContext};
use crate::error::ApiError;
use crate::model::Comment;
use crate::store;

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

/// The created comment, wrapped as a one-element sequence
#[derive(Debug, Serialize)]
pub struct CommentCreatedResponse {
    pub comment: Vec<Comment>,
}

// ==================
// Routes
// ==================

/// Create comment routes
pub fn comments_routes() -> Router<AppContext> {
    Router::new()
        .route("/articles/{article_id}/comments", get(list_comments_handler))
        .route("/articles/{article_id}/comments", post(post_comment_handler))
        .route("/comments/{comment_id}", delete(delete_comment_handler))
}

// ==================
// Handlers
// ==================

/// Comments for an article, newest first
async fn list_comments_handler(
    State(ctx): State<AppContext>,
    Path(article_id): Path<String>,
) -> Result<Json<CommentsResponse>, ApiError> {
    let id = parse_id(&article_id)?;
    let comments = store::comments::comments_for_article(&ctx.db, id).await?;

    Ok(Json(CommentsResponse { comments }))
}

/// Post a comment to an article.
///
/// The body must carry a string `username` and a non-empty string `body`;
/// every other field is ignored.
async fn post_comment_handler(
    State(ctx): State<AppContext>,
    Path(article_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<CommentCreatedResponse>), ApiError> {
    let id = parse_id(&article_id)?;

    let body = payload.get("body").and_then(Value::as_str).unwrap_or("");
    if body.is_empty() {
        return Err(ApiError::EmptyCommentBody);
    }

    let username = payload
        .get("username")
        .and_then(Value::as_str)
        .ok_or(ApiError::BadRequest)?;

    let comment = store::comments::add_comment(&ctx.db, id, username, body).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentCreatedResponse {
            comment: vec![comment],
        }),
    ))
}

/// Delete a comment by id
async fn delete_comment_handler(
    State(ctx): State<AppContext>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&comment_id)?;
    store::comments::remove_comment(&ctx.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
