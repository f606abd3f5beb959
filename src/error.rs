//! # API Errors
//!
//! The full failure taxonomy for the API, with its HTTP mapping.
//!
//! Accessors and validators return these directly; handlers propagate them
//! with `?` and axum renders them through the [`IntoResponse`] impl. Every
//! error body is `{"message": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Malformed id, inc_votes, or other unusable input
    #[error("Bad request.")]
    BadRequest,

    /// Comment body missing or empty
    #[error("Your comment cannot be empty!")]
    EmptyCommentBody,

    /// sort_by value outside the whitelist
    #[error("Bad 'sort_by' query")]
    BadSortBy,

    /// order value other than asc/desc
    #[error("Bad 'order' query")]
    BadOrder,

    /// Topic filter names a slug that does not exist
    #[error("No articles has been found with selected topic")]
    UnknownTopic,

    /// Single-article fetch found nothing.
    ///
    /// Deliberately a different literal from [`ApiError::ArticleIdNotFound`];
    /// both wordings are part of the API contract.
    #[error("No articles has been found.")]
    ArticleNotFound,

    /// An operation referenced an article id that does not exist
    #[error("No articles has been found with id of {0}")]
    ArticleIdNotFound(i32),

    /// Comment deletion matched no row
    #[error("No comments has been found with id of {0}")]
    CommentIdNotFound(i32),

    /// Comment author does not reference a known user
    #[error("User with provided username is not found")]
    UserNotFound,

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Database or other unexpected failure
    #[error("Internal server error")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::BadRequest => StatusCode::BAD_REQUEST,
            ApiError::EmptyCommentBody => StatusCode::BAD_REQUEST,
            ApiError::BadSortBy => StatusCode::BAD_REQUEST,
            ApiError::BadOrder => StatusCode::BAD_REQUEST,
            ApiError::UnknownTopic => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::ArticleNotFound => StatusCode::NOT_FOUND,
            ApiError::ArticleIdNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::CommentIdNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UserNotFound => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref e) = self {
            tracing::error!(error = %e, "database failure");
        }

        let status = self.status_code();
        let body = Json(ErrorBody::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::BadSortBy.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::BadOrder.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::UnknownTopic.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::ArticleIdNotFound(7).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_literals() {
        assert_eq!(ApiError::BadRequest.to_string(), "Bad request.");
        assert_eq!(
            ApiError::EmptyCommentBody.to_string(),
            "Your comment cannot be empty!"
        );
        assert_eq!(ApiError::BadSortBy.to_string(), "Bad 'sort_by' query");
        assert_eq!(ApiError::BadOrder.to_string(), "Bad 'order' query");
        assert_eq!(
            ApiError::UnknownTopic.to_string(),
            "No articles has been found with selected topic"
        );
        assert_eq!(
            ApiError::ArticleNotFound.to_string(),
            "No articles has been found."
        );
        assert_eq!(
            ApiError::ArticleIdNotFound(998).to_string(),
            "No articles has been found with id of 998"
        );
        assert_eq!(
            ApiError::CommentIdNotFound(998).to_string(),
            "No comments has been found with id of 998"
        );
        assert_eq!(
            ApiError::UserNotFound.to_string(),
            "User with provided username is not found"
        );
    }

    #[test]
    fn test_the_two_article_not_found_literals_stay_distinct() {
        assert_ne!(
            ApiError::ArticleNotFound.to_string(),
            ApiError::ArticleIdNotFound(1).to_string()
        );
    }
}
