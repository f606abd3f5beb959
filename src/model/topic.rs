//! Topic row type

use serde::Serialize;

/// A topic articles can be filed under; `slug` is the key
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}
