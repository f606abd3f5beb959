//! Comment accessors

use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};
use crate::model::Comment;
use crate::store::exists;

/// Comments for an article, newest first.
///
/// The article must exist; an article with no comments yields an empty vec.
pub async fn comments_for_article(pool: &PgPool, article_id: i32) -> ApiResult<Vec<Comment>> {
    exists::article_exists(pool, article_id).await?;

    let comments = sqlx::query_as::<_, Comment>(
        "SELECT comment_id, article_id, author, body, votes, created_at \
         FROM comments WHERE article_id = $1 \
         ORDER BY created_at DESC",
    )
    .bind(article_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Insert a comment and return the created row.
///
/// Gates, in order: non-empty body, existing article, existing user. The
/// existence checks and the insert form one logical unit; if a check fails
/// the insert never runs.
pub async fn add_comment(
    pool: &PgPool,
    article_id: i32,
    username: &str,
    body: &str,
) -> ApiResult<Comment> {
    if body.is_empty() {
        return Err(ApiError::EmptyCommentBody);
    }

    exists::article_exists(pool, article_id).await?;

    if !exists::user_exists(pool, username).await? {
        return Err(ApiError::UserNotFound);
    }

    let comment = sqlx::query_as::<_, Comment>(
        "INSERT INTO comments (article_id, author, body) \
         VALUES ($1, $2, $3) \
         RETURNING comment_id, article_id, author, body, votes, created_at",
    )
    .bind(article_id)
    .bind(username)
    .bind(body)
    .fetch_one(pool)
    .await?;

    Ok(comment)
}

/// Delete a comment by id; succeeds with no content.
pub async fn remove_comment(pool: &PgPool, comment_id: i32) -> ApiResult<()> {
    let deleted: Option<i32> = sqlx::query_scalar(
        "DELETE FROM comments WHERE comment_id = $1 RETURNING comment_id",
    )
    .bind(comment_id)
    .fetch_optional(pool)
    .await?;

    match deleted {
        Some(_) => Ok(()),
        None => Err(ApiError::CommentIdNotFound(comment_id)),
    }
}
