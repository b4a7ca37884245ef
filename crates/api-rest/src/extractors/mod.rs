//! Custom Axum extractors.
//!
//! Each validator runs as an extractor: a rejection ends the request with a
//! 400 before the handler is called. Axum runs a handler's extractors in
//! argument order, so the order of the arguments is the order of validation.

pub mod query;
pub mod resource_id;
pub mod validated_json;

pub use query::{AuthorQueryParams, PaperQueryParams};
pub use resource_id::ValidId;
pub use validated_json::ValidatedJson;
