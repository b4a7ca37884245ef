//! Request logging middleware.

use super::request_id::RequestId;
use axum::{
    body::Body,
    http::{Request, Response},
    middleware::Next,
};
use chrono::{SecondsFormat, Utc};
use tracing::info;

/// Log one line per incoming request, then hand the request on unchanged
pub async fn logging_middleware(req: Request<Body>, next: Next) -> Response<Body> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.as_str().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    info!(
        request_id = %request_id,
        timestamp = %timestamp,
        method = %method,
        path = %path,
        "{} - {} {}",
        timestamp,
        method,
        path
    );

    next.run(req).await
}
