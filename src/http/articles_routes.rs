//! Article HTTP Routes
//!
//! Endpoints for reading articles and patching their vote counts.

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use super::{parse_id, AppContext};
use crate::error::ApiError;
use crate::model::{Article, ArticleSummary};
use crate::query::{ArticlesQuery, ListArticlesParams};
use crate::store;

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    pub article: Article,
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleSummary>,
}

// ==================
// Routes
// ==================

/// Create article routes
pub fn articles_routes() -> Router<AppContext> {
    Router::new()
        .route("/articles", get(list_articles_handler))
        .route("/articles/{article_id}", get(get_article_handler))
        .route("/articles/{article_id}", patch(patch_votes_handler))
}

// ==================
// Handlers
// ==================

/// List articles, filtered and sorted per the query string
async fn list_articles_handler(
    State(ctx): State<AppContext>,
    Query(params): Query<ListArticlesParams>,
) -> Result<Json<ArticlesResponse>, ApiError> {
    let query = ArticlesQuery::parse(&params)?;
    let articles = store::articles::list_articles(&ctx.db, &query).await?;

    Ok(Json(ArticlesResponse { articles }))
}

/// Fetch a single article by id
async fn get_article_handler(
    State(ctx): State<AppContext>,
    Path(article_id): Path<String>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let id = parse_id(&article_id)?;
    let article = store::articles::fetch_article(&ctx.db, id).await?;

    Ok(Json(ArticleResponse { article }))
}

/// Apply a signed vote increment to an article.
///
/// The body must carry an integer-valued `inc_votes`; every other field is
/// ignored.
async fn patch_votes_handler(
    State(ctx): State<AppContext>,
    Path(article_id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<ArticleResponse>, ApiError> {
    let id = parse_id(&article_id)?;

    let inc_votes = body
        .get("inc_votes")
        .and_then(Value::as_i64)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(ApiError::BadRequest)?;

    let article = store::articles::adjust_votes(&ctx.db, id, inc_votes).await?;

    Ok(Json(ArticleResponse { article }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_articles_response_serialization() {
        let response = ArticlesResponse {
            articles: vec![ArticleSummary {
                article_id: 1,
                title: "Living in the shadow of a great man".to_string(),
                topic: "mitch".to_string(),
                author: "butter_bridge".to_string(),
                created_at: Utc.with_ymd_and_hms(2020, 7, 9, 20, 11, 0).unwrap(),
                votes: 100,
                article_img_url: "https://example.com/a.jpg".to_string(),
                comment_count: 11,
            }],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["articles"][0]["article_id"], 1);
        assert_eq!(json["articles"][0]["comment_count"], 11);
        // Listing rows never carry the article body.
        assert!(json["articles"][0].get("body").is_none());
    }
}
