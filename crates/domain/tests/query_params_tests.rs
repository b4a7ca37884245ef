//! Tests for listing query parameters and path identifiers
//!
//! Exercises the boundaries of the paper and author listings, including the
//! places where the two deliberately disagree.

use paper_registry_domain::{AuthorQuery, PaperQuery, QueryError, QueryParams, ResourceId};
use proptest::prelude::*;

// ============================================================================
// Paper listing
// ============================================================================

#[test]
fn test_valid_paper_query_is_coerced() {
    let query = PaperQuery::parse("year=2005&limit=20&offset=5&author=Hinton").unwrap();

    assert_eq!(query.year, Some(2005));
    assert_eq!(query.limit, 20);
    assert_eq!(query.offset, 5);
    assert_eq!(query.author.as_deref(), Some("Hinton"));
    assert_eq!(query.published_in, None);
}

#[test]
fn test_paper_query_serializes_like_rewritten_query() {
    let query = PaperQuery::parse("year=2005&limit=20&offset=5").unwrap();
    let json = serde_json::to_value(&query).unwrap();

    assert_eq!(json, serde_json::json!({"year": 2005, "limit": 20, "offset": 5}));
}

#[test]
fn test_paper_year_boundary() {
    assert!(PaperQuery::parse("year=1900").is_err());
    assert_eq!(PaperQuery::parse("year=1901").unwrap().year, Some(1901));
}

#[test]
fn test_paper_limit_boundary() {
    assert_eq!(PaperQuery::parse("limit=100").unwrap().limit, 100);
    assert_eq!(PaperQuery::parse("limit=1").unwrap().limit, 1);
    assert!(PaperQuery::parse("limit=101").is_err());
    assert!(PaperQuery::parse("limit=0").is_err());
}

#[test]
fn test_malformed_numbers_rejected() {
    assert!(matches!(
        PaperQuery::parse("year=2020x"),
        Err(QueryError::NotInteger { field: "year", .. })
    ));
    assert!(matches!(
        PaperQuery::parse("limit=10.5"),
        Err(QueryError::NotInteger { field: "limit", .. })
    ));
}

#[test]
fn test_year_round_trips_through_double_precision() {
    assert_eq!(
        PaperQuery::parse("year=9007199254740992").unwrap().year,
        Some(9_007_199_254_740_992)
    );
    // Reads back as ...992 once parsed, so it is not its own canonical form
    assert!(matches!(
        PaperQuery::parse("year=9007199254740993"),
        Err(QueryError::NotInteger { field: "year", .. })
    ));
    assert!(PaperQuery::parse("year=-0").is_err());
}

#[test]
fn test_list_pagination_is_read_as_joined_text() {
    assert_eq!(PaperQuery::parse("limit[]=5").unwrap().limit, 5);
    assert_eq!(PaperQuery::parse("offset[]=7").unwrap().offset, 7);
    // "5,6" starts with 5 but is not the number 5
    assert!(PaperQuery::parse("limit=5&limit=6").is_err());
    assert!(matches!(
        PaperQuery::parse("year[]=2005"),
        Err(QueryError::NotText("year"))
    ));

    let query = AuthorQuery::parse("limit=5&limit=x&offset[]=3").unwrap();
    assert_eq!(query.limit, Some(5));
    assert_eq!(query.offset, Some(3));
}

#[test]
fn test_unknown_parameters_are_ignored() {
    let query = PaperQuery::parse("sort=desc&page=3").unwrap();
    assert_eq!(query, PaperQuery::default());
}

// ============================================================================
// Author listing
// ============================================================================

#[test]
fn test_author_limit_boundary_differs_from_papers() {
    assert_eq!(AuthorQuery::parse("limit=0").unwrap().limit, Some(0));
    assert!(PaperQuery::parse("limit=0").is_err());
    assert_eq!(AuthorQuery::parse("limit=100").unwrap().limit, Some(100));
    assert!(AuthorQuery::parse("limit=101").is_err());
}

#[test]
fn test_offset_boundary_for_both_listings() {
    assert!(PaperQuery::parse("offset=-1").is_err());
    assert!(AuthorQuery::parse("offset=-1").is_err());
    assert_eq!(PaperQuery::parse("offset=0").unwrap().offset, 0);
    assert_eq!(AuthorQuery::parse("offset=0").unwrap().offset, Some(0));
}

#[test]
fn test_author_query_from_pairs() {
    let params = QueryParams::from_pairs([("name", "Ada"), ("affiliation", "Analytical Society")]);
    let query = AuthorQuery::from_params(&params).unwrap();

    assert_eq!(query.name.as_deref(), Some("Ada"));
    assert_eq!(query.affiliation.as_deref(), Some("Analytical Society"));
    assert_eq!(query.limit, None);
    assert_eq!(query.offset, None);
}

// ============================================================================
// Resource identifiers
// ============================================================================

#[test]
fn test_resource_id_examples() {
    for bad in ["-1", "abc", "3.5"] {
        assert!(ResourceId::parse(bad).is_err(), "{bad} should be rejected");
    }
    assert_eq!(ResourceId::parse("0").unwrap().value(), 0);
    assert_eq!(ResourceId::parse("42").unwrap().value(), 42);
}

#[test]
fn test_large_resource_ids_are_kept() {
    assert_eq!(
        ResourceId::parse("9007199254740992").unwrap().value(),
        9_007_199_254_740_992
    );
    assert!(ResourceId::parse("18446744073709551616").is_err());
}

proptest! {
    #[test]
    fn prop_paper_limit_in_range_accepted(limit in 1u32..=100) {
        let query = PaperQuery::parse(&format!("limit={limit}")).unwrap();
        prop_assert_eq!(query.limit, limit);
    }

    #[test]
    fn prop_paper_limit_above_range_rejected(limit in 101u32..100_000) {
        let query = format!("limit={}", limit);
        prop_assert!(PaperQuery::parse(&query).is_err());
    }

    #[test]
    fn prop_paper_year_round_trips(year in 1901i64..1_000_000) {
        let query = PaperQuery::parse(&format!("year={year}")).unwrap();
        prop_assert_eq!(query.year, Some(year));
    }

    #[test]
    fn prop_paper_year_with_suffix_rejected(year in 1901i64..3000, suffix in "[a-z.]{1,4}") {
        let query = format!("year={}{}", year, suffix);
        prop_assert!(PaperQuery::parse(&query).is_err());
    }

    #[test]
    fn prop_offsets_accepted_by_both(offset in 0u64..1_000_000_000) {
        let paper = PaperQuery::parse(&format!("offset={offset}")).unwrap();
        let author = AuthorQuery::parse(&format!("offset={offset}")).unwrap();
        prop_assert_eq!(paper.offset, offset);
        prop_assert_eq!(author.offset, Some(offset));
    }

    #[test]
    fn prop_non_negative_ids_accepted(id in 0u64..=9_007_199_254_740_991) {
        prop_assert_eq!(ResourceId::parse(&id.to_string()).unwrap().value(), id);
    }

    #[test]
    fn prop_negative_ids_rejected(id in 1i64..i64::MAX) {
        let text = format!("-{id}");
        prop_assert!(ResourceId::parse(&text).is_err());
    }
}
