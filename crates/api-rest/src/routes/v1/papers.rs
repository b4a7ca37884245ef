//! Paper endpoints.
//!
//! Handlers echo the validated input; nothing is persisted.

use crate::{
    extractors::{PaperQueryParams, ValidId, ValidatedJson},
    responses::{ApiResponse, Created, Identified, NoContent, ResourceRef},
    state::AppState,
};
use axum::{routing::get, Router};
use paper_registry_domain::{Paper, PaperQuery};

/// Paper routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/papers", get(list_papers).post(create_paper))
        .route(
            "/papers/:id",
            get(get_paper).put(update_paper).delete(delete_paper),
        )
}

async fn list_papers(PaperQueryParams(query): PaperQueryParams) -> ApiResponse<PaperQuery> {
    tracing::debug!(
        limit = query.limit,
        offset = query.offset,
        "Listing papers"
    );
    ApiResponse::success(query)
}

async fn create_paper(ValidatedJson(paper): ValidatedJson<Paper>) -> Created<Paper> {
    tracing::debug!(title = %paper.title, year = paper.year, "Paper accepted");
    Created(paper)
}

async fn get_paper(ValidId(id): ValidId) -> ApiResponse<ResourceRef> {
    ApiResponse::success(ResourceRef { id })
}

async fn update_paper(
    ValidId(id): ValidId,
    ValidatedJson(paper): ValidatedJson<Paper>,
) -> ApiResponse<Identified<Paper>> {
    ApiResponse::success(Identified::new(id, paper))
}

async fn delete_paper(ValidId(id): ValidId) -> NoContent {
    tracing::debug!(%id, "Paper delete accepted");
    NoContent
}
