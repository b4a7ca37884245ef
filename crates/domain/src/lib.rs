//! Paper Registry Domain Types
//!
//! This crate provides the request-shape rules of the Paper Registry API:
//! typed paper and author records, the validators that check untyped request
//! bodies against them, query-string parsing for the listings, and resource
//! identifiers taken from URL paths. Everything here is synchronous and free
//! of I/O.
//!
//! ## Architecture
//!
//! - **paper** / **author**: records and body validators
//! - **query**: query-string decoding and listing parameters
//! - **identifiers**: path identifiers
//! - **numeric**: lenient number parsing shared by the above
//! - **validation**: validation result type and JSON shape helpers
//! - **errors**: query and identifier errors
//!
//! ## Usage
//!
//! ```rust
//! use paper_registry_domain::{validate_paper_input, PaperQuery};
//! use serde_json::json;
//!
//! let errors = validate_paper_input(&json!({
//!     "title": "",
//!     "publishedIn": "X",
//!     "year": 2020,
//!     "authors": [{"name": "A"}]
//! }));
//! assert_eq!(errors.messages(), ["Title is required"]);
//!
//! let query = PaperQuery::parse("year=2005&limit=20").unwrap();
//! assert_eq!(query.limit, 20);
//! assert_eq!(query.offset, 0);
//! ```

#![warn(clippy::all)]

pub mod author;
pub mod errors;
pub mod identifiers;
pub mod numeric;
pub mod paper;
pub mod query;
pub mod validation;

// Re-export commonly used types
pub use author::{validate_author_input, Author};
pub use errors::{IdError, QueryError};
pub use identifiers::ResourceId;
pub use paper::{validate_paper_input, Paper, MIN_PUBLICATION_YEAR};
pub use query::{AuthorQuery, PaperQuery, QueryParams, QueryValue};
pub use validation::{ValidateInput, ValidationErrors};
