//! User row type

use serde::Serialize;

/// A registered user; `username` is the key
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}
