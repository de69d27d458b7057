//! Assist Error Types
//!
//! Third-party provider failures are reported to the caller as a generic
//! upstream error; the actual cause is only logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Assist-specific result type alias
pub type AssistResult<T> = Result<T, AssistError>;

/// Assist-specific error variants
#[derive(Debug, Error)]
pub enum AssistError {
    /// Field validation error
    #[error("{0}")]
    Validation(String),

    /// Third-party provider call failed; the string is internal detail
    /// and never reaches the client.
    #[error("Upstream service call failed")]
    Provider(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AssistError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AssistError::Validation(_) => StatusCode::BAD_REQUEST,
            AssistError::Provider(_) => StatusCode::BAD_GATEWAY,
            AssistError::Database(_) | AssistError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AssistError::Validation(_) => ErrorKind::BadRequest,
            AssistError::Provider(_) => ErrorKind::BadGateway,
            AssistError::Database(_) | AssistError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Uses `Display`, so provider detail stays out of the response body.
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AssistError::Provider(detail) => {
                tracing::error!(detail = %detail, "Third-party provider call failed");
            }
            AssistError::Database(e) => {
                tracing::error!(error = %e, "Assist database error");
            }
            AssistError::Internal(msg) => {
                tracing::error!(message = %msg, "Assist internal error");
            }
            AssistError::Validation(_) => {
                tracing::debug!(error = %self, "Assist validation error");
            }
        }
    }
}

impl IntoResponse for AssistError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<reqwest::Error> for AssistError {
    fn from(err: reqwest::Error) -> Self {
        AssistError::Provider(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_detail_not_in_client_message() {
        let err = AssistError::Provider("api key 12345 rejected".to_string());
        let app_err = err.to_app_error();
        assert!(!app_err.message().contains("12345"));
        assert_eq!(app_err.status_code(), 502);
    }

    #[test]
    fn test_validation_is_bad_request() {
        let err = AssistError::Validation("targetLang is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
