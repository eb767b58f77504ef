//! Account Error Types
//!
//! This module provides account-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Account-specific result type alias
pub type AccountResult<T> = Result<T, AccountError>;

/// Account-specific error variants
///
/// Every variant is terminal for the current request. The `Display`
/// strings double as the client-facing messages, so they never carry
/// internal detail.
#[derive(Debug, Error)]
pub enum AccountError {
    /// An account with this email already exists
    #[error("User already exists")]
    DuplicateAccount,

    /// Password does not meet the minimum length policy
    #[error("Password length is too short")]
    WeakPassword,

    /// Credential check failed
    ///
    /// Deliberately identical for an unknown email and a wrong password,
    /// so callers cannot enumerate registered accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Account id did not resolve
    #[error("User not found")]
    AccountNotFound,

    /// The store returned no usable record
    #[error("Invalid user data")]
    InvalidAccountData,

    /// Session token missing, tampered with, or expired
    #[error("Not authorized, invalid token")]
    InvalidSession,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccountError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AccountError::DuplicateAccount => StatusCode::BAD_REQUEST,
            AccountError::WeakPassword => StatusCode::FORBIDDEN,
            AccountError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AccountError::AccountNotFound => StatusCode::NOT_FOUND,
            AccountError::InvalidAccountData => StatusCode::BAD_REQUEST,
            AccountError::InvalidSession => StatusCode::UNAUTHORIZED,
            AccountError::Database(_) | AccountError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::DuplicateAccount => ErrorKind::BadRequest,
            AccountError::WeakPassword => ErrorKind::Forbidden,
            AccountError::InvalidCredentials | AccountError::InvalidSession => {
                ErrorKind::Unauthorized
            }
            AccountError::AccountNotFound => ErrorKind::NotFound,
            AccountError::InvalidAccountData => ErrorKind::BadRequest,
            AccountError::Database(_) | AccountError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Server-side variants swap their message for a generic one so
    /// database detail never reaches the client.
    pub fn to_app_error(&self) -> AppError {
        match self {
            AccountError::Database(_) | AccountError::Internal(_) => {
                AppError::new(self.kind(), "Internal server error")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AccountError::Database(e) => {
                tracing::error!(error = %e, "Account database error");
            }
            AccountError::Internal(msg) => {
                tracing::error!(message = %msg, "Account internal error");
            }
            AccountError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AccountError::InvalidSession => {
                tracing::warn!("Rejected request with invalid session token");
            }
            _ => {
                tracing::debug!(error = %self, "Account error");
            }
        }
    }
}

impl IntoResponse for AccountError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AccountError::DuplicateAccount.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AccountError::WeakPassword.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AccountError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AccountError::AccountNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AccountError::InvalidAccountData.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AccountError::InvalidSession.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_client_messages_do_not_leak_detail() {
        let err = AccountError::Internal("pool exhausted at 10.0.0.3".to_string());
        assert_eq!(err.to_app_error().message(), "Internal server error");
    }

    #[test]
    fn test_credential_message() {
        assert_eq!(
            AccountError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }
}
