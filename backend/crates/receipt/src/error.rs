//! Receipt Error Types
//!
//! Receipt-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Receipt-specific result type alias
pub type ReceiptResult<T> = Result<T, ReceiptError>;

/// Receipt-specific error variants
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Receipt data violated a validation rule
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request body is not a receipt-shaped JSON object
    #[error("Invalid receipt data: {0}")]
    MalformedBody(String),

    #[error("No receipt found for that ID.")]
    ReceiptNotFound,

    /// Generated id collided with a stored receipt
    #[error("Receipt id already exists")]
    DuplicateId,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReceiptError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiptError::Validation(_) | ReceiptError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ReceiptError::ReceiptNotFound => StatusCode::NOT_FOUND,
            ReceiptError::DuplicateId | ReceiptError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReceiptError::Validation(_) | ReceiptError::MalformedBody(_) => ErrorKind::BadRequest,
            ReceiptError::ReceiptNotFound => ErrorKind::NotFound,
            ReceiptError::DuplicateId | ReceiptError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ReceiptError::Internal(msg) => {
                tracing::error!(message = %msg, "Receipt internal error");
            }
            ReceiptError::DuplicateId => {
                tracing::error!("Receipt id collision");
            }
            ReceiptError::Validation(e) => {
                tracing::debug!(field = e.field(), error = %e, "Receipt rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Receipt error");
            }
        }
    }
}

impl From<ReceiptError> for AppError {
    fn from(err: ReceiptError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message).with_source(err)
    }
}

impl From<JsonRejection> for ReceiptError {
    fn from(rejection: JsonRejection) -> Self {
        ReceiptError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_matches_kind() {
        let errors = [
            ReceiptError::Validation(ValidationError::NoItems),
            ReceiptError::MalformedBody("expected value".into()),
            ReceiptError::ReceiptNotFound,
            ReceiptError::DuplicateId,
            ReceiptError::Internal("poisoned".into()),
        ];
        for err in errors {
            assert_eq!(err.status_code().as_u16(), err.kind().status_code());
        }
    }

    #[test]
    fn test_validation_message_is_passed_through() {
        let err = ReceiptError::from(ValidationError::RetailerRequired);
        assert_eq!(err.to_string(), "Retailer name is required.");

        let app: AppError = err.into();
        assert_eq!(app.client_message(), "Retailer name is required.");
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let app: AppError = ReceiptError::Internal("store lock poisoned".into()).into();
        assert_eq!(app.status_code(), 500);
        assert!(!app.client_message().contains("poisoned"));
    }
}
