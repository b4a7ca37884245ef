//! Request ID middleware.

use axum::{
    body::Body,
    http::{HeaderValue, Request, Response},
    middleware::Next,
};
use uuid::Uuid;

/// Header carrying the request ID in both directions
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Middleware function to add request ID
///
/// Reuses a well-formed incoming `x-request-id`, otherwise generates a UUID,
/// and echoes it on the response.
pub async fn request_id_middleware(mut req: Request<Body>, next: Next) -> Response<Body> {
    let header_value = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .filter(|v| !v.is_empty() && v.to_str().is_ok())
        .cloned()
        .unwrap_or_else(generate_header_value);

    let request_id = header_value.to_str().unwrap_or_default().to_string();

    // Store in extensions
    req.extensions_mut().insert(RequestId(request_id));

    // Process request
    let mut response = next.run(req).await;

    // Add request ID to response headers
    response.headers_mut().insert(REQUEST_ID_HEADER, header_value);

    response
}

fn generate_header_value() -> HeaderValue {
    // A hyphenated UUID is always a valid header value
    HeaderValue::from_str(&Uuid::new_v4().to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
}
