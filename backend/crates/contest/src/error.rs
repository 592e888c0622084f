//! Contest Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use identity::IdentityError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Contest-specific result type alias
pub type ContestResult<T> = Result<T, ContestError>;

/// Contest-specific error variants
#[derive(Debug, Error)]
pub enum ContestError {
    /// Draft not found
    #[error("Draft contest not found")]
    DraftNotFound,

    /// Draft was already confirmed
    #[error("Draft contest is already confirmed")]
    DraftAlreadyConfirmed,

    /// Caller is not the draft's creator
    #[error("Draft contest belongs to another creator")]
    NotDraftOwner,

    /// Published contest not found
    #[error("Contest not found")]
    ContestNotFound,

    /// Winner fields are write-once
    #[error("A winner has already been selected for this contest")]
    WinnerAlreadySelected,

    /// Winner selection requires at least one recorded payment
    #[error("No participants recorded for this contest")]
    NoParticipants,

    /// The nominated winner has no user record
    #[error("Winner user not found")]
    WinnerNotFound,

    /// Sort field outside the allow-list
    #[error("Unknown sort field: {0}")]
    InvalidSortField(String),

    /// Sort order other than asc/desc
    #[error("Unknown sort order: {0}")]
    InvalidSortOrder(String),

    /// The publish step of a confirmation failed; the confirmation was
    /// rolled back
    #[error("Contest publish step failed, confirmation rolled back")]
    PublishStep(#[source] sqlx::Error),

    /// Input validation error (carries its own status)
    #[error("{0}")]
    Validation(AppError),

    /// Errors raised by identity lookups (winner resolution, guards)
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ContestError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContestError::DraftNotFound
            | ContestError::ContestNotFound
            | ContestError::NoParticipants
            | ContestError::WinnerNotFound => ErrorKind::NotFound,
            ContestError::DraftAlreadyConfirmed | ContestError::WinnerAlreadySelected => {
                ErrorKind::Conflict
            }
            ContestError::NotDraftOwner => ErrorKind::Forbidden,
            ContestError::InvalidSortField(_) | ContestError::InvalidSortOrder(_) => {
                ErrorKind::BadRequest
            }
            ContestError::Validation(err) => err.kind(),
            ContestError::Identity(err) => err.kind(),
            ContestError::PublishStep(_) | ContestError::Database(_) => {
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
            ContestError::Database(e) => {
                tracing::error!(error = %e, "Contest database error");
            }
            ContestError::PublishStep(e) => {
                tracing::error!(error = %e, "Contest publish step failed, rolled back");
            }
            ContestError::NotDraftOwner => {
                tracing::warn!("Draft delete attempted by non-owner");
            }
            _ => {
                tracing::debug!(error = %self, "Contest error");
            }
        }
    }
}

impl IntoResponse for ContestError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ContestError {
    fn from(err: AppError) -> Self {
        ContestError::Validation(err)
    }
}
