//! Path identifier extractor.

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts, Path},
    http::request::Parts,
};
use paper_registry_domain::{IdError, ResourceId};

/// The route's single path parameter, validated as a [`ResourceId`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidId(pub ResourceId);

#[async_trait]
impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(segment) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| match rejection {
                // A route without a path parameter is a wiring bug, not bad input
                PathRejection::MissingPathParams(e) => {
                    ApiError::Internal(format!("Failed to read path parameter: {}", e))
                }
                other => ApiError::InvalidId(IdError::Undecodable(other.body_text())),
            })?;

        Ok(Self(ResourceId::parse(&segment)?))
    }
}
