use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::teapot::ValidationErrors;
use crate::services::TeapotError;

/// API error type with HTTP status code and message
///
/// Rendered as a plain-text body holding the message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

impl From<TeapotError> for ApiError {
    fn from(error: TeapotError) -> Self {
        match error {
            TeapotError::NotExists(_) | TeapotError::NotExistAll(_) => {
                Self::not_found(error.to_string())
            }
            TeapotError::AlreadyExists(_) | TeapotError::AlreadyExistAll(_) => {
                Self::conflict(error.to_string())
            }
            TeapotError::Storage(message) => {
                tracing::error!(error = %message, "Teapot storage failure");
                Self::internal_server_error("Internal storage error")
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::bad_request(errors.to_string())
    }
}
