//! Article accessors

use sqlx::PgPool;

use crate::error::{ApiError, ApiResult};
use crate::model::{Article, ArticleSummary};
use crate::query::ArticlesQuery;
use crate::store::exists;

/// Fetch a single article by id.
///
/// The not-found message here is intentionally the generic one, not the
/// id-specific literal the other article operations use.
pub async fn fetch_article(pool: &PgPool, article_id: i32) -> ApiResult<Article> {
    let article = sqlx::query_as::<_, Article>(
        "SELECT article_id, title, topic, author, body, created_at, votes, \
         article_img_url \
         FROM articles WHERE article_id = $1",
    )
    .bind(article_id)
    .fetch_optional(pool)
    .await?;

    article.ok_or(ApiError::ArticleNotFound)
}

/// Run a validated articles listing query.
///
/// A topic filter naming an unknown slug is rejected; a known slug that
/// matches no articles yields an empty, successful result.
pub async fn list_articles(
    pool: &PgPool,
    query: &ArticlesQuery,
) -> ApiResult<Vec<ArticleSummary>> {
    if let Some(slug) = query.topic.as_deref() {
        if !exists::topic_exists(pool, slug).await? {
            return Err(ApiError::UnknownTopic);
        }
    }

    let sql = query.to_sql();
    let mut statement = sqlx::query_as::<_, ArticleSummary>(&sql);
    if let Some(slug) = query.topic.as_deref() {
        statement = statement.bind(slug);
    }

    Ok(statement.fetch_all(pool).await?)
}

/// Apply a signed vote increment and return the updated article.
///
/// The increment happens inside the UPDATE statement, so concurrent
/// patches both take effect; votes is never set absolutely.
pub async fn adjust_votes(pool: &PgPool, article_id: i32, inc_votes: i32) -> ApiResult<Article> {
    let article = sqlx::query_as::<_, Article>(
        "UPDATE articles SET votes = votes + $1 WHERE article_id = $2 \
         RETURNING article_id, title, topic, author, body, created_at, votes, \
         article_img_url",
    )
    .bind(inc_votes)
    .bind(article_id)
    .fetch_optional(pool)
    .await?;

    article.ok_or(ApiError::ArticleIdNotFound(article_id))
}
