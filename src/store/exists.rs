//! Existence validators
//!
//! Precondition gates run before dependent reads and writes. The article
//! check fails with the id-specific NotFound; the topic and user checks
//! return booleans because their callers map absence to different errors.

use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};

/// Confirm an article with the given id exists.
///
/// Resolves silently when found.
pub async fn article_exists(pool: &PgPool, article_id: i32) -> ApiResult<()> {
    let found: Option<i32> =
        sqlx::query_scalar("SELECT 1 FROM articles WHERE article_id = $1")
            .bind(article_id)
            .fetch_optional(pool)
            .await?;

    match found {
        Some(_) => Ok(()),
        None => Err(ApiError::ArticleIdNotFound(article_id)),
    }
}

/// Whether a topic with the given slug exists
pub async fn topic_exists(pool: &PgPool, slug: &str) -> ApiResult<bool> {
    let found: Option<i32> = sqlx::query_scalar("SELECT 1 FROM topics WHERE slug = $1")
        .bind(slug)
        .fetch_optional(pool)
        .await?;

    Ok(found.is_some())
}

/// Whether a user with the given username exists
pub async fn user_exists(pool: &PgPool, username: &str) -> ApiResult<bool> {
    let found: Option<i32> = sqlx::query_scalar("SELECT 1 FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    Ok(found.is_some())
}
