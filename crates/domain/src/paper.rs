//! Paper records and the paper body validator.

use crate::author::{optional_text, validate_author_input, Author};
use crate::numeric::is_blank;
use crate::validation::{as_integer, field, is_truthy, ValidateInput, ValidationErrors};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Papers must be published strictly after this year
pub const MIN_PUBLICATION_YEAR: i64 = 1900;

/// Messages reported by [`validate_paper_input`]
pub mod messages {
    pub const TITLE_REQUIRED: &str = "Title is required";
    pub const TITLE_NOT_STRING: &str = "Title should be string";
    pub const VENUE_REQUIRED: &str = "Published venue is required";
    pub const VENUE_NOT_STRING: &str = "Published venue should be string";
    pub const YEAR_REQUIRED: &str = "Published year is required";
    pub const YEAR_NOT_INTEGER: &str = "Year should be integer";
    pub const YEAR_TOO_EARLY: &str = "Valid year after 1900 is required";
    pub const AUTHORS_REQUIRED: &str = "At least one author is required";
}

/// A published paper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    pub title: String,
    pub published_in: String,
    pub year: i64,
    pub authors: Vec<Author>,
}

/// Check a candidate paper record.
///
/// Every rule runs; messages from the individual authors are appended once
/// each, no matter how many authors share the same problem.
pub fn validate_paper_input(paper: &Value) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    check_required_text(
        &mut errors,
        field(paper, "title"),
        messages::TITLE_REQUIRED,
        messages::TITLE_NOT_STRING,
    );
    check_required_text(
        &mut errors,
        field(paper, "publishedIn"),
        messages::VENUE_REQUIRED,
        messages::VENUE_NOT_STRING,
    );

    match field(paper, "year").filter(|year| is_truthy(year)) {
        None => errors.add(messages::YEAR_REQUIRED),
        Some(year) => match as_integer(year) {
            None => errors.add(messages::YEAR_NOT_INTEGER),
            Some(year) if year <= MIN_PUBLICATION_YEAR => errors.add(messages::YEAR_TOO_EARLY),
            Some(_) => {}
        },
    }

    match field(paper, "authors").and_then(Value::as_array) {
        Some(authors) if !authors.is_empty() => {
            for author in authors {
                errors.merge_unique(validate_author_input(author));
            }
        }
        _ => errors.add(messages::AUTHORS_REQUIRED),
    }

    errors
}

/// A falsy or blank value is missing; anything else must be a string.
fn check_required_text(
    errors: &mut ValidationErrors,
    value: Option<&Value>,
    required: &str,
    not_string: &str,
) {
    match value.filter(|v| is_truthy(v)) {
        None => errors.add(required),
        Some(Value::String(text)) if is_blank(text) => errors.add(required),
        Some(Value::String(_)) => {}
        Some(_) => errors.add(not_string),
    }
}

impl ValidateInput for Paper {
    fn validate_input(input: &Value) -> ValidationErrors {
        validate_paper_input(input)
    }

    fn from_input(input: &Value) -> Result<Self, ValidationErrors> {
        let errors = validate_paper_input(input);
        if errors.has_errors() {
            return Err(errors);
        }

        let mut authors = Vec::new();
        for author in field(input, "authors")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
        {
            authors.push(Author::from_input(author)?);
        }

        Ok(Self {
            title: optional_text(input, "title").unwrap_or_default(),
            published_in: optional_text(input, "publishedIn").unwrap_or_default(),
            year: field(input, "year").and_then(as_integer).unwrap_or_default(),
            authors,
        })
    }
}
