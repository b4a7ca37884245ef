//! Error types for query-string and path validation.
//!
//! These carry enough detail for logging. The HTTP layer replaces them with a
//! fixed client-facing message.

/// Invalid query parameter
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// Parameter was repeated or used bracket syntax
    #[error("query parameter `{0}` must be a single value")]
    NotText(&'static str),

    /// Parameter is not an integer
    #[error("query parameter `{field}` is not an integer: {value:?}")]
    NotInteger {
        field: &'static str,
        value: String,
    },

    /// Parameter is an integer outside its allowed range
    #[error("query parameter `{field}` is out of range: {value:?}")]
    OutOfRange {
        field: &'static str,
        value: String,
    },
}

impl QueryError {
    /// Name of the offending parameter
    pub fn field(&self) -> &'static str {
        match self {
            Self::NotText(field) => field,
            Self::NotInteger { field, .. } | Self::OutOfRange { field, .. } => field,
        }
    }

    pub(crate) fn not_integer(field: &'static str, value: &str) -> Self {
        Self::NotInteger {
            field,
            value: value.to_string(),
        }
    }

    pub(crate) fn out_of_range(field: &'static str, value: &str) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
        }
    }
}

/// Invalid resource identifier
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("identifier is not valid text: {0}")]
    Undecodable(String),

    #[error("identifier is not a number: {0:?}")]
    NotNumeric(String),

    #[error("identifier is not a whole number: {0:?}")]
    NotInteger(String),

    #[error("identifier is negative: {0:?}")]
    Negative(String),

    #[error("identifier is too large: {0:?}")]
    TooLarge(String),
}
