//! Validation result types and JSON shape helpers.
//!
//! Body validators report problems as plain, human-readable messages. The
//! messages are part of the public contract of the API, so they are kept as
//! strings rather than structured codes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered list of validation messages.
///
/// An empty list means the input passed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    messages: Vec<String>,
}

impl ValidationErrors {
    /// Create an empty (passing) result
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message
    pub fn add(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Append a message unless an identical one is already present
    pub fn add_unique(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.messages.contains(&message) {
            self.messages.push(message);
        }
    }

    /// Merge another result, keeping only messages not yet present.
    ///
    /// First-occurrence order is preserved.
    pub fn merge_unique(&mut self, other: ValidationErrors) {
        for message in other.messages {
            self.add_unique(message);
        }
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Check if validation passed
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Borrow the messages
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Check whether a message is present
    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|m| m == message)
    }

    /// Consume into the underlying messages
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// `Ok(value)` when no errors were collected
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationErrors> for Vec<String> {
    fn from(errors: ValidationErrors) -> Self {
        errors.messages
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages.join("; "))
    }
}

/// Records that are checked as untyped JSON and then built into a typed value.
pub trait ValidateInput: Sized {
    /// Collect every problem with `input` without building anything
    fn validate_input(input: &Value) -> ValidationErrors;

    /// Validate `input` and build the typed record
    fn from_input(input: &Value) -> Result<Self, ValidationErrors>;
}

/// JavaScript truthiness of a JSON value.
///
/// `null`, `false`, `0` and `""` are falsy; every array and object is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Look up a field, treating non-object values as having no fields.
pub fn field<'a>(record: &'a Value, name: &str) -> Option<&'a Value> {
    record.as_object().and_then(|map| map.get(name))
}

/// Whether a field is present and truthy
pub fn field_is_truthy(record: &Value, name: &str) -> bool {
    field(record, name).is_some_and(is_truthy)
}

/// Integer value of a JSON number, accepting floats with no fractional part.
pub fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(i) = number.as_i64() {
        return Some(i);
    }
    let f = number.as_f64()?;
    if f.is_finite() && f.fract() == 0.0 {
        // Saturates outside the i64 range.
        Some(f as i64)
    } else {
        None
    }
}
