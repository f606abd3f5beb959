//! Topic accessors

use sqlx::PgPool;

use crate::error::ApiResult;
use crate::model::Topic;

/// All topics
pub async fn list_topics(pool: &PgPool) -> ApiResult<Vec<Topic>> {
    let topics = sqlx::query_as::<_, Topic>("SELECT slug, description FROM topics")
        .fetch_all(pool)
        .await?;

    Ok(topics)
}
