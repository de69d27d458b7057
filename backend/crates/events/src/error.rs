//! Event Error Types
//!
//! Event/comment-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.
//!
//! Authorization failures are never downgraded: `Forbidden` is always
//! distinguishable from `EventNotFound`/`CommentNotFound` and from plain
//! validation errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Event-specific result type alias
pub type EventResult<T> = Result<T, EventError>;

/// Event-specific error variants
#[derive(Debug, Error)]
pub enum EventError {
    /// Event not found
    #[error("Event not found")]
    EventNotFound,

    /// Comment not found
    #[error("Comment not found")]
    CommentNotFound,

    /// Request lacks an authenticated principal
    #[error("Authentication required")]
    Unauthorized,

    /// Requester is neither the owner nor an administrator
    #[error("{0}")]
    Forbidden(String),

    /// Field validation error
    #[error("{0}")]
    Validation(String),

    /// Image storage error
    #[error("Image storage failed: {0}")]
    Image(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EventError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            EventError::EventNotFound | EventError::CommentNotFound => StatusCode::NOT_FOUND,
            EventError::Unauthorized => StatusCode::UNAUTHORIZED,
            EventError::Forbidden(_) => StatusCode::FORBIDDEN,
            EventError::Validation(_) => StatusCode::BAD_REQUEST,
            EventError::Image(_) | EventError::Database(_) | EventError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EventError::EventNotFound | EventError::CommentNotFound => ErrorKind::NotFound,
            EventError::Unauthorized => ErrorKind::Unauthorized,
            EventError::Forbidden(_) => ErrorKind::Forbidden,
            EventError::Validation(_) => ErrorKind::BadRequest,
            EventError::Image(_) | EventError::Database(_) | EventError::Internal(_) => {
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
            EventError::Database(e) => {
                tracing::error!(error = %e, "Event database error");
            }
            EventError::Image(msg) => {
                tracing::error!(message = %msg, "Image storage error");
            }
            EventError::Internal(msg) => {
                tracing::error!(message = %msg, "Event internal error");
            }
            EventError::Forbidden(msg) => {
                tracing::warn!(message = %msg, "Ownership check rejected request");
            }
            _ => {
                tracing::debug!(error = %self, "Event error");
            }
        }
    }
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for EventError {
    fn from(err: AppError) -> Self {
        match err.kind() {
            ErrorKind::BadRequest | ErrorKind::UnprocessableEntity => {
                EventError::Validation(err.message().to_string())
            }
            _ => EventError::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            EventError::EventNotFound.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EventError::Forbidden("no".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            EventError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            EventError::Validation("bad".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_forbidden_distinct_from_not_found() {
        // The propagation policy: ownership violations never look like 404s
        assert_ne!(
            EventError::Forbidden("no".into()).status_code(),
            EventError::EventNotFound.status_code()
        );
    }
}
