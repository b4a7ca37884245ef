//! Test fixtures with realistic data.

use fake::{
    faker::{company::en::CompanyName, internet::en::FreeEmail, lorem::en::Sentence, name::en::Name},
    Fake,
};
use paper_registry_domain::{Author, Paper, MIN_PUBLICATION_YEAR};
use serde_json::Value;

/// Create an author with a random name, email and affiliation
pub fn create_test_author() -> Author {
    Author::new(Name().fake::<String>())
        .with_email(FreeEmail().fake::<String>())
        .with_affiliation(format!("{} Research", CompanyName().fake::<String>()))
}

/// Create a paper with one to three random authors
pub fn create_test_paper() -> Paper {
    let author_count = (1..4).fake::<usize>();
    Paper {
        title: Sentence(3..8).fake(),
        published_in: format!("Journal of {}", CompanyName().fake::<String>()),
        year: (MIN_PUBLICATION_YEAR + 1..2030).fake(),
        authors: (0..author_count).map(|_| create_test_author()).collect(),
    }
}

/// Create a paper with an explicit title and year
pub fn create_test_paper_with(title: &str, year: i64) -> Paper {
    Paper {
        title: title.to_string(),
        year,
        ..create_test_paper()
    }
}

/// JSON body of a valid author
pub fn valid_author_payload() -> Value {
    to_payload(&create_test_author())
}

/// JSON body of a valid paper
pub fn valid_paper_payload() -> Value {
    to_payload(&create_test_paper())
}

fn to_payload<T: serde::Serialize>(record: &T) -> Value {
    serde_json::to_value(record).unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paper_registry_domain::{validate_author_input, validate_paper_input};

    #[test]
    fn test_fixture_payloads_are_valid() {
        for _ in 0..20 {
            assert!(validate_paper_input(&valid_paper_payload()).is_empty());
            assert!(validate_author_input(&valid_author_payload()).is_empty());
        }
    }

    #[test]
    fn test_paper_payload_uses_camel_case() {
        let payload = valid_paper_payload();
        assert!(payload.get("publishedIn").is_some());
        assert!(payload.get("published_in").is_none());
    }

    #[test]
    fn test_create_test_paper_with() {
        let paper = create_test_paper_with("Attention", 2017);
        assert_eq!(paper.title, "Attention");
        assert_eq!(paper.year, 2017);
        assert!(!paper.authors.is_empty());
    }
}
