//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::application::token::TokenError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input (user-fixable)
    #[error("{0}")]
    Validation(String),

    /// Email already registered
    #[error("Email already exists")]
    EmailTaken,

    /// Login failure. Deliberately identical for unknown email and wrong
    /// password so responses cannot be used for account enumeration.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing, malformed, expired, or forged token
    #[error("Unauthorized")]
    Unauthorized,

    /// Token subject no longer exists
    #[error("User not found")]
    UserNotFound,

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
            // The original wire contract reports login failures as 400 with
            // an undifferentiated message, and we keep that here.
            AuthError::Validation(_) | AuthError::InvalidCredentials => ErrorKind::BadRequest,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::Unauthorized => ErrorKind::Unauthorized,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Convert to AppError
    ///
    /// Server-side detail never reaches the client: 5xx variants collapse to
    /// a generic message, everything else carries its user-actionable text.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AuthError::Database(_) | AuthError::Internal(_) => {
                AppError::internal("Internal server error")
            }
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
            AuthError::Unauthorized => {
                tracing::debug!("Rejected request with missing or invalid token");
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
            ErrorKind::BadRequest => AuthError::Validation(err.message().to_string()),
            _ => AuthError::Internal(err.to_string()),
        }
    }
}

impl From<TokenError> for AuthError {
    fn from(_: TokenError) -> Self {
        // Malformed, expired and forged tokens are all the same to the
        // caller: the request is unauthorized, never a server error.
        AuthError::Unauthorized
    }
}
