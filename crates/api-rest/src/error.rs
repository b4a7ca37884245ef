//! HTTP error handling and conversion.
//!
//! Validation failures become 400 responses with a fixed, client-facing
//! message; the detailed reason is only logged. Anything unexpected becomes a
//! uniform 500 via [`crate::middleware::error_handler`].

use crate::middleware::error_handler::handle_error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use paper_registry_domain::{IdError, QueryError, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// `error` field of every 400 produced by a validator
pub const VALIDATION_ERROR: &str = "Validation Error";

/// `error` field of the generic 500
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// `message` field of the generic 500
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// API-specific error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// A query parameter failed validation
    #[error("Invalid query parameter format")]
    InvalidQuery(#[from] QueryError),

    /// A path identifier failed validation
    #[error("Invalid ID format")]
    InvalidId(#[from] IdError),

    /// A request body failed validation
    #[error("Invalid request body")]
    InvalidBody(ValidationErrors),

    /// The body could not be read as JSON
    #[error("Invalid JSON: {0}")]
    BadRequest(String),

    /// The body exceeded the configured size limit
    #[error("Request body is too large")]
    PayloadTooLarge,

    /// No route matched
    #[error("Resource not found")]
    NotFound,

    /// Internal server error; the detail is logged, never returned
    #[error("An unexpected error occurred")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidQuery(_) | Self::InvalidId(_) | Self::InvalidBody(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the `error` field for the response body
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidQuery(_) | Self::InvalidId(_) | Self::InvalidBody(_) => VALIDATION_ERROR,
            Self::BadRequest(_) => "Bad Request",
            Self::PayloadTooLarge => "Payload Too Large",
            Self::NotFound => "Not Found",
            Self::Internal(_) => INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(format!("{err:#}"))
    }
}

/// Standardized error response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Error category
    pub error: String,

    /// Human-readable message
    pub message: String,

    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        let body = match self {
            Self::Internal(details) => return handle_error(details),
            Self::InvalidQuery(err) => {
                debug!(field = err.field(), reason = %err, "Rejected query parameters");
                ErrorResponse::new(error_code, message)
            }
            Self::InvalidId(err) => {
                debug!(reason = %err, "Rejected resource id");
                ErrorResponse::new(error_code, message)
            }
            Self::InvalidBody(errors) => {
                debug!(errors = %errors, "Rejected request body");
                ErrorResponse::new(error_code, message)
                    .with_details(serde_json::json!(errors.into_messages()))
            }
            Self::BadRequest(_) | Self::PayloadTooLarge | Self::NotFound => {
                ErrorResponse::new(error_code, message)
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
