//! Comment row type

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A stored comment on an article
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}
