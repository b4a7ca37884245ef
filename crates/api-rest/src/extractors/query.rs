//! Listing query extractors.

use crate::error::ApiError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use paper_registry_domain::{AuthorQuery, PaperQuery, QueryParams};

fn query_params(parts: &Parts) -> QueryParams {
    QueryParams::parse(parts.uri.query().unwrap_or_default())
}

/// Validated paper listing parameters, with `limit` and `offset` defaulted
#[derive(Debug, Clone)]
pub struct PaperQueryParams(pub PaperQuery);

#[async_trait]
impl<S> FromRequestParts<S> for PaperQueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = PaperQuery::from_params(&query_params(parts))?;
        Ok(Self(query))
    }
}

/// Validated author listing parameters
#[derive(Debug, Clone)]
pub struct AuthorQueryParams(pub AuthorQuery);

#[async_trait]
impl<S> FromRequestParts<S> for AuthorQueryParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = AuthorQuery::from_params(&query_params(parts))?;
        Ok(Self(query))
    }
}

impl std::ops::Deref for PaperQueryParams {
    type Target = PaperQuery;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::Deref for AuthorQueryParams {
    type Target = AuthorQuery;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
