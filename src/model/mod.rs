//! Entity row types
//!
//! One type per table row shape the API serves. All of them derive
//! `sqlx::FromRow` for direct mapping from query results and `Serialize`
//! for the response bodies.

mod article;
mod comment;
mod topic;
mod user;

pub use article::{Article, ArticleSummary};
pub use comment::Comment;
pub use topic::Topic;
pub use user::User;
