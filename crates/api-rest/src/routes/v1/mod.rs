//! API v1 routes.

use crate::state::AppState;
use axum::Router;

pub mod authors;
pub mod papers;

/// Create all v1 API routes.
///
/// Paper and author resources live under the `/user` sub-router.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/user", user_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .merge(papers::routes())
        .merge(authors::routes())
}
