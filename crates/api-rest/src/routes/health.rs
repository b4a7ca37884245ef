//! Health check endpoints.

use crate::{responses::ApiResponse, state::AppState};
use axum::{extract::State, routing::get, Router};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,

    /// Service uptime in seconds
    pub uptime: u64,
}

/// Readiness check response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    pub ready: bool,
}

/// Health check routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
}

/// Basic health check
async fn health(State(state): State<AppState>) -> ApiResponse<HealthResponse> {
    ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.uptime().as_secs(),
    })
}

/// Readiness check. The service has no external dependencies, so it is
/// ready as soon as it accepts connections.
async fn ready() -> ApiResponse<ReadinessResponse> {
    ApiResponse::success(ReadinessResponse { ready: true })
}
