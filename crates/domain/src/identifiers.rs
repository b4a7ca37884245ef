//! Resource identifiers taken from URL path segments.

use crate::errors::IdError;
use crate::numeric::coerce_number;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Numeric identifier of a paper or an author
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(u64);

impl ResourceId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Parse a path segment.
    ///
    /// Any text that converts to a non-negative whole number is accepted, so
    /// `"42"`, `"42.0"`, `" 42 "` and `"0x2A"` all name the same resource.
    ///
    /// ```
    /// use paper_registry_domain::identifiers::ResourceId;
    ///
    /// assert_eq!(ResourceId::parse("42").unwrap().value(), 42);
    /// assert_eq!(ResourceId::parse("1e3").unwrap().value(), 1000);
    /// assert!(ResourceId::parse("-1").is_err());
    /// assert!(ResourceId::parse("3.5").is_err());
    /// ```
    pub fn parse(segment: &str) -> Result<Self, IdError> {
        let number =
            coerce_number(segment).ok_or_else(|| IdError::NotNumeric(segment.to_string()))?;

        if !number.is_finite() || number.fract() != 0.0 {
            return Err(IdError::NotInteger(segment.to_string()));
        }
        if number < 0.0 {
            return Err(IdError::Negative(segment.to_string()));
        }
        // 2^64 is the first float past u64::MAX
        if number >= U64_LIMIT {
            return Err(IdError::TooLarge(segment.to_string()));
        }

        Ok(Self(number as u64))
    }
}

impl FromStr for ResourceId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_non_negative_integers() {
        assert_eq!(ResourceId::parse("0").unwrap(), ResourceId::new(0));
        assert_eq!(ResourceId::parse("42").unwrap(), ResourceId::new(42));
        assert_eq!(ResourceId::parse("42.0").unwrap(), ResourceId::new(42));
        assert_eq!(ResourceId::parse(" 7 ").unwrap(), ResourceId::new(7));
        assert_eq!(ResourceId::parse("0x1A").unwrap(), ResourceId::new(26));
        assert_eq!(ResourceId::parse("-0").unwrap(), ResourceId::new(0));
    }

    #[test]
    fn test_rejects_invalid_segments() {
        assert!(matches!(ResourceId::parse("abc"), Err(IdError::NotNumeric(_))));
        assert!(matches!(ResourceId::parse("3.5"), Err(IdError::NotInteger(_))));
        assert!(matches!(ResourceId::parse("Infinity"), Err(IdError::NotInteger(_))));
        assert!(matches!(ResourceId::parse("-1"), Err(IdError::Negative(_))));
        assert!(matches!(
            ResourceId::parse("18446744073709551616"),
            Err(IdError::TooLarge(_))
        ));
        assert!(matches!(ResourceId::parse("1e20"), Err(IdError::TooLarge(_))));
    }

    #[test]
    fn test_accepts_ids_past_float_precision() {
        assert_eq!(
            ResourceId::parse("9007199254740992").unwrap().value(),
            9_007_199_254_740_992
        );
        assert_eq!(
            ResourceId::parse("9007199254740993").unwrap().value(),
            9_007_199_254_740_992
        );
        assert_eq!(ResourceId::parse("1e19").unwrap().value(), 10_000_000_000_000_000_000);
    }

    #[test]
    fn test_display_round_trip() {
        let id: ResourceId = "12".parse().unwrap();
        assert_eq!(id.to_string(), "12");
    }
}
