//! Fluent builders for request payloads.
//!
//! Payloads are raw JSON so that any field can be set to a value of the
//! wrong type, or left out entirely.

use serde_json::{json, Map, Value};

/// Builder for paper request bodies
#[derive(Debug, Clone)]
pub struct PaperPayloadBuilder {
    fields: Map<String, Value>,
}

impl PaperPayloadBuilder {
    /// Start from a valid paper with a single author
    pub fn new() -> Self {
        let mut fields = Map::new();
        fields.insert("title".into(), json!("A Relational Model of Data"));
        fields.insert("publishedIn".into(), json!("Communications of the ACM"));
        fields.insert("year".into(), json!(1970));
        fields.insert(
            "authors".into(),
            json!([AuthorPayloadBuilder::new().build()]),
        );
        Self { fields }
    }

    pub fn with_title(self, title: impl Into<Value>) -> Self {
        self.with("title", title)
    }

    pub fn with_published_in(self, venue: impl Into<Value>) -> Self {
        self.with("publishedIn", venue)
    }

    pub fn with_year(self, year: impl Into<Value>) -> Self {
        self.with("year", year)
    }

    /// Replace the author list
    pub fn with_authors(self, authors: impl IntoIterator<Item = Value>) -> Self {
        let authors: Vec<Value> = authors.into_iter().collect();
        self.with("authors", authors)
    }

    /// Append one author
    pub fn with_author(mut self, author: Value) -> Self {
        match self.fields.get_mut("authors") {
            Some(Value::Array(authors)) => authors.push(author),
            _ => {
                self.fields.insert("authors".into(), json!([author]));
            }
        }
        self
    }

    /// Set any field to any value
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    /// Remove a field
    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Default for PaperPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for author request bodies
#[derive(Debug, Clone)]
pub struct AuthorPayloadBuilder {
    fields: Map<String, Value>,
}

impl AuthorPayloadBuilder {
    /// Start from a valid author with only a name
    pub fn new() -> Self {
        let mut fields = Map::new();
        fields.insert("name".into(), json!("E. F. Codd"));
        Self { fields }
    }

    pub fn with_name(self, name: impl Into<Value>) -> Self {
        self.with("name", name)
    }

    pub fn with_email(self, email: impl Into<Value>) -> Self {
        self.with("email", email)
    }

    pub fn with_affiliation(self, affiliation: impl Into<Value>) -> Self {
        self.with("affiliation", affiliation)
    }

    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(field.to_string(), value.into());
        self
    }

    pub fn without(mut self, field: &str) -> Self {
        self.fields.remove(field);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Default for AuthorPayloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}
