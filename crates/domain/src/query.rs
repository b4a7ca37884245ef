//! Query-string parsing for the paper and author listings.
//!
//! The two listings grew up separately and do not share rules: paper
//! pagination is strict (`limit` in `1..=100`, exact numeric text) and is
//! defaulted, author pagination is lenient (`limit` in `0..=100`, trailing
//! text ignored) and is not. Both behaviours are relied upon by clients.

use crate::errors::QueryError;
use crate::numeric::{coerce_number, js_integer_text, parse_leading_int};
use crate::paper::MIN_PUBLICATION_YEAR;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::btree_map::{BTreeMap, Entry};

/// Default page size for paper listings
pub const DEFAULT_PAPER_LIMIT: u32 = 10;

/// Default offset for paper listings
pub const DEFAULT_PAPER_OFFSET: u64 = 0;

/// Largest page size for any listing
pub const MAX_LIMIT: u32 = 100;

/// A raw query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Given exactly once
    Text(String),
    /// Repeated, or given with bracket syntax (`key[]=a`, `key[x]=a`)
    List(Vec<String>),
}

impl QueryValue {
    /// The value when given exactly once
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::List(_) => None,
        }
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Text(first) => *self = Self::List(vec![std::mem::take(first), value]),
            Self::List(values) => values.push(value),
        }
    }
}

/// Decoded query string, keyed by parameter name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    values: BTreeMap<String, QueryValue>,
}

impl QueryParams {
    /// Decode an `application/x-www-form-urlencoded` query string
    ///
    /// ```
    /// use paper_registry_domain::query::{QueryParams, QueryValue};
    ///
    /// let params = QueryParams::parse("year=2020&author=a&author=b");
    /// assert_eq!(params.get("year"), Some(&QueryValue::Text("2020".into())));
    /// assert!(matches!(params.get("author"), Some(QueryValue::List(_))));
    /// ```
    pub fn parse(query: &str) -> Self {
        Self::from_pairs(url::form_urlencoded::parse(query.as_bytes()).into_owned())
    }

    /// Build from already-decoded key/value pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut values: BTreeMap<String, QueryValue> = BTreeMap::new();

        for (key, value) in pairs {
            let key = key.into();
            let value = value.into();

            let base = bracket_base(&key).map(str::to_owned);
            let (key, bracketed) = match base {
                Some(base) => (base, true),
                None => (key, false),
            };

            match values.entry(key) {
                Entry::Occupied(mut entry) => entry.get_mut().push(value),
                Entry::Vacant(entry) => {
                    entry.insert(if bracketed {
                        QueryValue::List(vec![value])
                    } else {
                        QueryValue::Text(value)
                    });
                }
            }
        }

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.values.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Text of a parameter given once; `Err` if it was given as a list
    fn text(&self, key: &'static str) -> Result<Option<&str>, QueryError> {
        match self.get(key) {
            None => Ok(None),
            Some(QueryValue::Text(text)) => Ok(Some(text)),
            Some(QueryValue::List(_)) => Err(QueryError::NotText(key)),
        }
    }

    /// Text of a numeric parameter; a list is read as its values joined with `,`
    fn numeric_text(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            QueryValue::Text(text) => Some(Cow::Borrowed(text)),
            QueryValue::List(values) => Some(Cow::Owned(values.join(","))),
        }
    }
}

/// `name[...]` → `name`
fn bracket_base(key: &str) -> Option<&str> {
    let open = key.find('[')?;
    if open > 0 && key.ends_with(']') {
        Some(&key[..open])
    } else {
        None
    }
}

/// Validated filters and pagination for the paper listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_in: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub limit: u32,
    pub offset: u64,
}

impl Default for PaperQuery {
    fn default() -> Self {
        Self {
            year: None,
            published_in: None,
            author: None,
            limit: DEFAULT_PAPER_LIMIT,
            offset: DEFAULT_PAPER_OFFSET,
        }
    }
}

impl PaperQuery {
    /// Validate paper listing parameters. The first failing rule is reported,
    /// checked in the order `year`, `publishedIn`, `author`, `limit`, `offset`.
    pub fn from_params(params: &QueryParams) -> Result<Self, QueryError> {
        let year = params.text("year")?.map(parse_year).transpose()?;
        let published_in = params.text("publishedIn")?.map(str::to_owned);
        let author = params.text("author")?.map(str::to_owned);

        let limit = match params.numeric_text("limit") {
            Some(text) => parse_paper_limit(&text)?,
            None => DEFAULT_PAPER_LIMIT,
        };
        let offset = match params.numeric_text("offset") {
            Some(text) => parse_paper_offset(&text)?,
            None => DEFAULT_PAPER_OFFSET,
        };

        Ok(Self {
            year,
            published_in,
            author,
            limit,
            offset,
        })
    }

    /// Parse straight from a raw query string
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        Self::from_params(&QueryParams::parse(query))
    }
}

/// Year must be written exactly as the decimal form of its parsed value
fn parse_year(text: &str) -> Result<i64, QueryError> {
    let year = parse_leading_int(text)
        .filter(|year| js_integer_text(*year).as_deref() == Some(text))
        .ok_or_else(|| QueryError::not_integer("year", text))?;

    // Past i64::MAX a year cannot be represented, so it is out of range too
    if year <= MIN_PUBLICATION_YEAR as f64 || year >= i64::MAX as f64 {
        return Err(QueryError::out_of_range("year", text));
    }
    Ok(year as i64)
}

/// Leading integer that must also equal the numeric value of the whole text
fn parse_exact_int(field: &'static str, text: &str) -> Result<f64, QueryError> {
    let parsed = parse_leading_int(text).ok_or_else(|| QueryError::not_integer(field, text))?;
    if coerce_number(text) != Some(parsed) {
        return Err(QueryError::not_integer(field, text));
    }
    Ok(parsed)
}

fn parse_paper_limit(text: &str) -> Result<u32, QueryError> {
    let limit = parse_exact_int("limit", text)?;
    if limit <= 0.0 || limit > f64::from(MAX_LIMIT) {
        return Err(QueryError::out_of_range("limit", text));
    }
    Ok(limit as u32)
}

fn parse_paper_offset(text: &str) -> Result<u64, QueryError> {
    let offset = parse_exact_int("offset", text)?;
    if offset < 0.0 {
        return Err(QueryError::out_of_range("offset", text));
    }
    // Saturates past u64::MAX; `-0` becomes 0.
    Ok(offset as u64)
}

/// Validated filters and pagination for the author listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
}

impl AuthorQuery {
    /// Validate author listing parameters. Nothing is defaulted.
    pub fn from_params(params: &QueryParams) -> Result<Self, QueryError> {
        let name = params.text("name");
        let affiliation = params.text("affiliation");
        let (name, affiliation) = match (name, affiliation) {
            (Ok(name), Ok(affiliation)) => (name, affiliation),
            (Err(err), _) | (_, Err(err)) => return Err(err),
        };

        let limit = params
            .numeric_text("limit")
            .map(|text| parse_author_limit(&text))
            .transpose()?;
        let offset = params
            .numeric_text("offset")
            .map(|text| parse_author_offset(&text))
            .transpose()?;

        Ok(Self {
            name: name.map(str::to_owned),
            affiliation: affiliation.map(str::to_owned),
            limit,
            offset,
        })
    }

    /// Parse straight from a raw query string
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        Self::from_params(&QueryParams::parse(query))
    }
}

fn parse_author_limit(text: &str) -> Result<u32, QueryError> {
    let limit = parse_leading_int(text).ok_or_else(|| QueryError::not_integer("limit", text))?;
    if limit < 0.0 || limit > f64::from(MAX_LIMIT) {
        return Err(QueryError::out_of_range("limit", text));
    }
    Ok(limit as u32)
}

fn parse_author_offset(text: &str) -> Result<u64, QueryError> {
    let offset = parse_leading_int(text).ok_or_else(|| QueryError::not_integer("offset", text))?;
    if offset < 0.0 {
        return Err(QueryError::out_of_range("offset", text));
    }
    Ok(offset as u64)
}
