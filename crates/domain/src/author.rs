//! Author records.

use crate::numeric::is_blank;
use crate::validation::{field, is_truthy, ValidateInput, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages reported by [`validate_author_input`]
pub mod messages {
    pub const NAME_REQUIRED: &str = "Name is required";
    pub const NAME_NOT_STRING: &str = "Name must be a string";
    pub const NAME_BLANK: &str = "Name must be non-empty";
    pub const EMAIL_NOT_STRING: &str = "Email must be a string";
    pub const AFFILIATION_NOT_STRING: &str = "Affiliation must be a string";
}

/// A paper author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: None,
            affiliation: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = Some(affiliation.into());
        self
    }
}

/// Check a candidate author record.
///
/// `name` is required; `email` and `affiliation` are optional but must be
/// strings when given. Only one of the three name messages is ever reported.
pub fn validate_author_input(author: &Value) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    match field(author, "name").filter(|name| is_truthy(name)) {
        None => errors.add(messages::NAME_REQUIRED),
        Some(name) => match name.as_str() {
            None => errors.add(messages::NAME_NOT_STRING),
            Some(text) if is_blank(text) => errors.add(messages::NAME_BLANK),
            Some(_) => {}
        },
    }

    if has_non_string(author, "email") {
        errors.add(messages::EMAIL_NOT_STRING);
    }

    if has_non_string(author, "affiliation") {
        errors.add(messages::AFFILIATION_NOT_STRING);
    }

    errors
}

/// Optional field that is set (truthy) but not a string
fn has_non_string(record: &Value, name: &str) -> bool {
    field(record, name).is_some_and(|value| is_truthy(value) && !value.is_string())
}

/// Truthy string field as an owned value
pub(crate) fn optional_text(record: &Value, name: &str) -> Option<String> {
    field(record, name)
        .filter(|value| is_truthy(value))
        .and_then(Value::as_str)
        .map(str::to_owned)
}

impl ValidateInput for Author {
    fn validate_input(input: &Value) -> ValidationErrors {
        validate_author_input(input)
    }

    fn from_input(input: &Value) -> Result<Self, ValidationErrors> {
        validate_author_input(input).into_result(|| Self {
            name: optional_text(input, "name").unwrap_or_default(),
            email: optional_text(input, "email"),
            affiliation: optional_text(input, "affiliation"),
        })
    }
}
