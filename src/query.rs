//! # Articles Listing Query Builder
//!
//! Translates the optional `topic`, `sort_by`, and `order` query parameters
//! into a safe SQL statement with an aggregated comment count.
//!
//! `sort_by` and `order` select SQL syntax positions (column, direction), so
//! they are never interpolated as raw strings: the parameters are parsed
//! into the closed [`SortColumn`] and [`SortOrder`] enums first, and only
//! the enum's fixed fragment reaches the statement text. The topic value is
//! data and is always a bound parameter.

use serde::Deserialize;

use crate::error::{ApiError, ApiResult};

/// Raw listing parameters as they arrive on the query string.
///
/// Unknown keys are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListArticlesParams {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Whitelisted sort columns for the articles listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Title,
    Topic,
    Author,
    CreatedAt,
    Votes,
    CommentCount,
    ArticleId,
}

impl SortColumn {
    /// Parse a `sort_by` value against the whitelist
    pub fn parse(value: &str) -> ApiResult<Self> {
        match value {
            "title" => Ok(Self::Title),
            "topic" => Ok(Self::Topic),
            "author" => Ok(Self::Author),
            "created_at" => Ok(Self::CreatedAt),
            "votes" => Ok(Self::Votes),
            "comment_count" => Ok(Self::CommentCount),
            "article_id" => Ok(Self::ArticleId),
            _ => Err(ApiError::BadSortBy),
        }
    }

    /// The fixed SQL fragment this column sorts by.
    ///
    /// Stored columns are table-qualified; the comment count refers to the
    /// aggregate's output alias.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Title => "articles.title",
            Self::Topic => "articles.topic",
            Self::Author => "articles.author",
            Self::CreatedAt => "articles.created_at",
            Self::Votes => "articles.votes",
            Self::CommentCount => "comment_count",
            Self::ArticleId => "articles.article_id",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse an `order` value, case-insensitively
    pub fn parse(value: &str) -> ApiResult<Self> {
        match value.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ApiError::BadOrder),
        }
    }

    /// The fixed SQL fragment for this direction
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A validated articles listing query
#[derive(Debug, Clone)]
pub struct ArticlesQuery {
    /// Filter to this topic slug, bound as a statement parameter
    pub topic: Option<String>,
    pub sort_by: SortColumn,
    pub order: SortOrder,
}

impl ArticlesQuery {
    /// Validate raw listing parameters.
    ///
    /// Defaults: sort by `created_at`, descending. Whether a provided topic
    /// slug actually exists is checked against the database by the caller;
    /// here it is carried through as an opaque value.
    pub fn parse(params: &ListArticlesParams) -> ApiResult<Self> {
        let sort_by = match params.sort_by.as_deref() {
            Some(value) => SortColumn::parse(value)?,
            None => SortColumn::CreatedAt,
        };

        let order = match params.order.as_deref() {
            Some(value) => SortOrder::parse(value)?,
            None => SortOrder::Desc,
        };

        Ok(Self {
            topic: params.topic.clone(),
            sort_by,
            order,
        })
    }

    /// Assemble the listing statement.
    ///
    /// LEFT JOIN keeps zero-comment articles in the result with a count of
    /// zero. When a topic filter is present the statement carries a `$1`
    /// placeholder for it.
    pub fn to_sql(&self) -> String {
        let mut sql = String::from(
            "SELECT articles.article_id, articles.title, articles.topic, \
             articles.author, articles.created_at, articles.votes, \
             articles.article_img_url, \
             COUNT(comments.comment_id)::INT AS comment_count \
             FROM articles \
             LEFT JOIN comments ON comments.article_id = articles.article_id",
        );

        if self.topic.is_some() {
            sql.push_str(" WHERE articles.topic = $1");
        }

        sql.push_str(" GROUP BY articles.article_id");
        sql.push_str(" ORDER BY ");
        sql.push_str(self.sort_by.as_sql());
        sql.push(' ');
        sql.push_str(self.order.as_sql());

        sql
    }
}
