//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Email already registered (unique constraint)
    #[error("Email is already registered")]
    EmailTaken,

    /// No `Authorization` header on a protected request
    #[error("Unauthorized")]
    MissingToken,

    /// Malformed header, bad signature or unparsable claims
    #[error("Invalid token")]
    InvalidToken,

    /// Token `exp` is in the past
    #[error("Token has expired")]
    TokenExpired,

    /// Request body could not be decoded or a required field is blank
    #[error("{0}")]
    InvalidInput(String),

    /// Password hashing failed
    #[error("Password hashing failed: {0}")]
    PasswordHashing(String),

    /// Token signing failed or no key configured
    #[error("Token signing failed: {0}")]
    TokenSigning(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::TokenExpired => ErrorKind::Unauthorized,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidInput(_) => ErrorKind::BadRequest,
            AuthError::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)) => {
                ErrorKind::ServiceUnavailable
            }
            AuthError::Database(_) => ErrorKind::InternalServerError,
            AuthError::PasswordHashing(_) | AuthError::TokenSigning(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side details stay in the logs; the client only sees the
    /// reason phrase.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            AppError::new(kind, kind.as_str())
        } else {
            AppError::new(kind, self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::PasswordHashing(msg) | AuthError::TokenSigning(msg) => {
                tracing::error!(message = %msg, "Auth crypto error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidToken | AuthError::TokenExpired => {
                tracing::warn!(error = %self, "Rejected bearer token");
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
        match err.kind() {
            ErrorKind::BadRequest => AuthError::InvalidInput(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::from(rejection).into()
    }
}

impl From<platform::token::TokenError> for AuthError {
    fn from(err: platform::token::TokenError) -> Self {
        use platform::token::TokenError;

        match err {
            TokenError::Expired => AuthError::TokenExpired,
            TokenError::Invalid(_) => AuthError::InvalidToken,
            TokenError::MissingKey | TokenError::Signing(_) => {
                AuthError::TokenSigning(err.to_string())
            }
        }
    }
}
