//! Blog Error Types
//!
//! Blog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::sqlx_error_kind, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Post does not exist, or is hidden from the requester
    ///
    /// Visibility violations surface as this variant too: a private post of
    /// another owner behaves as absent, so its existence is not disclosed.
    #[error("Post not found")]
    PostNotFound,

    /// No user with the requested id
    #[error("User not found")]
    UserNotFound,

    /// Requester is not allowed to perform the operation
    #[error("Operation not permitted")]
    Forbidden,

    /// Database error, classified through the shared sqlx mapping
    ///
    /// Integrity violations stay client errors and resource exhaustion or a
    /// lost connection surfaces as 503 rather than a blanket 500.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::PostNotFound | BlogError::UserNotFound => ErrorKind::NotFound,
            BlogError::Forbidden => ErrorKind::Forbidden,
            BlogError::Database(e) => sqlx_error_kind(e),
            BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// The database variant delegates to the kernel conversion so the
    /// response carries its classification and a generic message instead of
    /// the raw driver error text.
    pub fn to_app_error(self) -> AppError {
        match self {
            BlogError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
            }
            BlogError::Forbidden => {
                tracing::warn!("Rejected blog operation");
            }
            _ => {
                tracing::debug!(error = %self, "Blog error");
            }
        }
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BlogError::PostNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(BlogError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(BlogError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            BlogError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_hidden_post_shares_message_with_missing_post() {
        // A visibility rejection must read exactly like a missing post
        assert_eq!(BlogError::PostNotFound.to_string(), "Post not found");
    }

    #[test]
    fn test_database_errors_keep_sqlx_classification() {
        // An exhausted pool is a 503, not a 500
        let err = BlogError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_app_error().status_code(), 503);

        let err = BlogError::Database(sqlx::Error::WorkerCrashed);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
