//! Validated JSON extractor.

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use paper_registry_domain::ValidateInput;
use serde_json::Value;

/// JSON body checked against a record's validation rules.
///
/// The body is read as untyped JSON first so that every rule can report,
/// rather than stopping at the first field serde fails to deserialize.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: ValidateInput + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        let record = T::from_input(&value).map_err(ApiError::InvalidBody)?;

        Ok(ValidatedJson(record))
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    // Raised by `DefaultBodyLimit` while the body is buffered
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::ops::DerefMut for ValidatedJson<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
