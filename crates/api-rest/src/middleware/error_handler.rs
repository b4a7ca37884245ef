//! Error handling middleware.
//!
//! Terminal stage for anything a handler did not anticipate. The response is
//! always the same 500 body; what went wrong is only written to the log.

use crate::error::{ErrorResponse, INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use std::fmt::Display;
use tracing::error;

/// Log an unexpected error and convert it to the generic 500 response
pub fn handle_error(error: impl Display) -> Response {
    error!(error = %error, "Unhandled error");

    internal_error_response()
}

/// Handle panics and convert to 500 errors.
///
/// Installed through `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic".to_string()
    };

    error!(details = %details, "Handler panicked");

    internal_error_response()
}

fn internal_error_response() -> Response {
    let body = ErrorResponse::new(INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR_MESSAGE);

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_handle_error_is_uniform() {
        let response = handle_error("connection reset");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({
                "error": "Internal Server Error",
                "message": "An unexpected error occurred"
            })
        );
    }

    #[tokio::test]
    async fn test_handle_panic_matches_handle_error() {
        let from_panic = handle_panic(Box::new("index out of bounds"));
        let from_error = handle_error(std::io::Error::other("disk full"));

        assert_eq!(from_panic.status(), from_error.status());
        assert_eq!(body_json(from_panic).await, body_json(from_error).await);
    }
}
