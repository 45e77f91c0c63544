//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, conversions::sqlx_error_kind, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// User name already exists
    #[error("User name already exists")]
    UserNameTaken,

    /// Invalid credentials
    ///
    /// Deliberately covers both "no such user" and "wrong password" so the
    /// response never discloses whether a username is registered.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Session not found, expired, or token signature invalid
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Password validation error
    #[error("Password validation failed: {0}")]
    PasswordValidation(String),

    /// Username validation error
    #[error("Username validation failed: {0}")]
    UserNameValidation(String),

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

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNameTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::PasswordValidation(_) | AuthError::UserNameValidation(_) => {
                ErrorKind::BadRequest
            }
            AuthError::Database(e) => sqlx_error_kind(e),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// The database variant delegates to the kernel conversion so the
    /// response carries its classification and a generic message instead of
    /// the raw driver error text.
    pub fn to_app_error(self) -> AppError {
        match self {
            AuthError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::UserNameTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::SessionInvalid.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AuthError::PasswordValidation("empty".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        // The message must not reveal whether the username exists
        let msg = AuthError::InvalidCredentials.to_string();
        assert_eq!(msg, "Invalid username or password");
    }

    #[test]
    fn test_database_errors_keep_sqlx_classification() {
        // An exhausted pool is a 503, not a 500
        let err = AuthError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), ErrorKind::ServiceUnavailable);
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.to_app_error().status_code(), 503);

        let err = AuthError::Database(sqlx::Error::WorkerCrashed);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_response_message_is_generic() {
        // The driver error text stays out of the user-facing message
        let app = AuthError::Database(sqlx::Error::PoolTimedOut).to_app_error();
        assert_eq!(app.message(), "Database connection pool exhausted");
    }
}
