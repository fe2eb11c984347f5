//! Blog Error Types
//!
//! Blog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Blog-specific result type alias
pub type BlogResult<T> = Result<T, BlogError>;

/// Blog-specific error variants
#[derive(Debug, Error)]
pub enum BlogError {
    /// Comment targets a post that does not exist
    #[error("Post not found")]
    PostNotFound,

    /// Token names a user that no longer exists
    #[error("User no longer exists")]
    AuthorNotFound,

    /// Malformed body, blank field or non-integer path id
    #[error("{0}")]
    InvalidInput(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BlogError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BlogError::PostNotFound => ErrorKind::NotFound,
            BlogError::AuthorNotFound => ErrorKind::Unauthorized,
            BlogError::InvalidInput(_) => ErrorKind::BadRequest,
            BlogError::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)) => {
                ErrorKind::ServiceUnavailable
            }
            BlogError::Database(_) | BlogError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError; 5xx details are not sent to the client
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            AppError::new(kind, kind.as_str())
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    fn log(&self) {
        match self {
            BlogError::Database(e) => {
                tracing::error!(error = %e, "Blog database error");
            }
            BlogError::Internal(msg) => {
                tracing::error!(message = %msg, "Blog internal error");
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

impl From<AppError> for BlogError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest => BlogError::InvalidInput(err.message().to_string()),
            ErrorKind::NotFound => BlogError::PostNotFound,
            _ => BlogError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for BlogError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::from(rejection).into()
    }
}

impl From<PathRejection> for BlogError {
    fn from(rejection: PathRejection) -> Self {
        AppError::from(rejection).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(BlogError::PostNotFound.kind(), ErrorKind::NotFound);
        assert_eq!(BlogError::AuthorNotFound.kind(), ErrorKind::Unauthorized);
        assert_eq!(
            BlogError::InvalidInput("Title cannot be empty".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            BlogError::Database(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::ServiceUnavailable
        );
        assert_eq!(
            BlogError::Database(sqlx::Error::RowNotFound).kind(),
            ErrorKind::InternalServerError
        );
    }

    #[test]
    fn test_internal_details_hidden() {
        let err = BlogError::Internal("relation \"posts\" does not exist".into()).to_app_error();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "Internal Server Error");
    }
}
