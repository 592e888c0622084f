//! Identity Error Types
//!
//! This module provides identity-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_object::user_role::UserRole;

/// Identity-specific result type alias
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity-specific error variants
#[derive(Debug, Error)]
pub enum IdentityError {
    /// No token cookie on the request
    #[error("Authentication token is missing")]
    MissingToken,

    /// Token malformed, expired, or signature-invalid
    #[error("Authentication token is invalid or expired")]
    InvalidToken,

    /// User not found
    #[error("User not found")]
    UserNotFound,

    /// Authenticated, but the required role is absent
    #[error("{role} role required")]
    RoleRequired { role: UserRole },

    /// Caller-supplied email does not match the token's email claim
    #[error("Email does not match the authenticated user")]
    EmailMismatch,

    /// Unknown role name in a role-change request
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Input validation error (carries its own status)
    #[error("{0}")]
    Validation(AppError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IdentityError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::MissingToken | IdentityError::InvalidToken => ErrorKind::Unauthorized,
            IdentityError::UserNotFound => ErrorKind::NotFound,
            IdentityError::RoleRequired { .. } | IdentityError::EmailMismatch => {
                ErrorKind::Forbidden
            }
            IdentityError::UnknownRole(_) => ErrorKind::BadRequest,
            IdentityError::Validation(err) => err.kind(),
            IdentityError::Database(_) | IdentityError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            IdentityError::Database(e) => {
                tracing::error!(error = %e, "Identity database error");
            }
            IdentityError::Internal(msg) => {
                tracing::error!(message = %msg, "Identity internal error");
            }
            IdentityError::InvalidToken => {
                tracing::warn!("Rejected invalid identity token");
            }
            IdentityError::EmailMismatch => {
                tracing::warn!("Caller-supplied email rejected, token claim differs");
            }
            _ => {
                tracing::debug!(error = %self, "Identity error");
            }
        }
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for IdentityError {
    fn from(err: AppError) -> Self {
        IdentityError::Validation(err)
    }
}

impl From<jsonwebtoken::errors::Error> for IdentityError {
    fn from(_: jsonwebtoken::errors::Error) -> Self {
        IdentityError::InvalidToken
    }
}
