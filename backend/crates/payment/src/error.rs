//! Payment Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use identity::IdentityError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Payment-specific result type alias
pub type PaymentResult<T> = Result<T, PaymentError>;

/// Payment-specific error variants
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Price missing or below one minor currency unit
    #[error("Price must amount to at least one minor currency unit")]
    InvalidAmount,

    /// The provider rejected or garbled an intent request
    #[error("Payment provider error: {0}")]
    Provider(String),

    /// Transport failure talking to the provider
    #[error("Payment provider unreachable: {0}")]
    ProviderTransport(#[from] reqwest::Error),

    /// Input validation error (carries its own status)
    #[error("{0}")]
    Validation(AppError),

    /// Errors raised by identity checks
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl PaymentError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            PaymentError::InvalidAmount => ErrorKind::BadRequest,
            PaymentError::Validation(err) => err.kind(),
            PaymentError::Identity(err) => err.kind(),
            PaymentError::Provider(_)
            | PaymentError::ProviderTransport(_)
            | PaymentError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            PaymentError::Database(e) => {
                tracing::error!(error = %e, "Payment database error");
            }
            PaymentError::Provider(e) => {
                tracing::error!(error = %e, "Payment provider error");
            }
            PaymentError::ProviderTransport(e) => {
                tracing::error!(error = %e, "Payment provider unreachable");
            }
            _ => {
                tracing::debug!(error = %self, "Payment error");
            }
        }
    }
}

impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for PaymentError {
    fn from(err: AppError) -> Self {
        PaymentError::Validation(err)
    }
}
