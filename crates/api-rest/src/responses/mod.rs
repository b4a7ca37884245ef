//! Standardized API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use paper_registry_domain::ResourceId;
use serde::{Deserialize, Serialize};

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,

    /// Response data
    pub data: T,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// A record addressed by its path identifier
#[derive(Debug, Serialize, Deserialize)]
pub struct Identified<T> {
    pub id: ResourceId,

    #[serde(flatten)]
    pub record: T,
}

impl<T> Identified<T> {
    pub fn new(id: ResourceId, record: T) -> Self {
        Self { id, record }
    }
}

/// Bare reference to a resource
#[derive(Debug, Serialize, Deserialize)]
pub struct ResourceRef {
    pub id: ResourceId,
}

/// Created response (HTTP 201)
pub struct Created<T>(pub T);

impl<T> IntoResponse for Created<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(ApiResponse::success(self.0))).into_response()
    }
}

/// No content response (HTTP 204)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
