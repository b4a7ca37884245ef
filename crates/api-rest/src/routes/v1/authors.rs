//! Author endpoints.

use crate::{
    extractors::{AuthorQueryParams, ValidId, ValidatedJson},
    responses::{ApiResponse, Created, Identified, NoContent, ResourceRef},
    state::AppState,
};
use axum::{routing::get, Router};
use paper_registry_domain::{Author, AuthorQuery};

/// Author routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/authors", get(list_authors).post(create_author))
        .route(
            "/authors/:id",
            get(get_author).put(update_author).delete(delete_author),
        )
}

async fn list_authors(AuthorQueryParams(query): AuthorQueryParams) -> ApiResponse<AuthorQuery> {
    ApiResponse::success(query)
}

async fn create_author(ValidatedJson(author): ValidatedJson<Author>) -> Created<Author> {
    tracing::debug!(name = %author.name, "Author accepted");
    Created(author)
}

async fn get_author(ValidId(id): ValidId) -> ApiResponse<ResourceRef> {
    ApiResponse::success(ResourceRef { id })
}

async fn update_author(
    ValidId(id): ValidId,
    ValidatedJson(author): ValidatedJson<Author>,
) -> ApiResponse<Identified<Author>> {
    ApiResponse::success(Identified::new(id, author))
}

async fn delete_author(ValidId(id): ValidId) -> NoContent {
    tracing::debug!(%id, "Author delete accepted");
    NoContent
}
