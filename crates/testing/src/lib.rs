//! Testing utilities for the paper registry
//!
//! - Fixtures producing valid records and request payloads with realistic data
//! - Builders for payloads that deliberately break individual rules
//!
//! # Examples
//!
//! ```
//! use paper_registry_testing::{builders::*, fixtures::*};
//! use serde_json::json;
//!
//! let paper = valid_paper_payload();
//! assert!(paper["authors"].is_array());
//!
//! // A paper whose year is sent as a string
//! let payload = PaperPayloadBuilder::new().with_year(json!("2020")).build();
//! assert_eq!(payload["year"], "2020");
//! ```

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;

pub use fake;
