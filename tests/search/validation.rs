//! Search input validation at the catalog boundary.

use meikan::{validate_search_input, MeikanError, SearchInputError};

use crate::common::FIXTURE_CATALOG;

#[test]
fn rejects_unbalanced_and_empty_quotes() {
    assert_eq!(validate_search_input("\"Juyo"), Err(SearchInputError::UnclosedQuote));
    assert_eq!(validate_search_input("katana \"\""), Err(SearchInputError::EmptyQuotes));
    assert_eq!(validate_search_input("\"Juyo 12\" soshu"), Ok(()));
    assert_eq!(validate_search_input(""), Ok(()));
}

#[test]
fn length_limit_counts_characters() {
    let at_limit = "刀".repeat(200);
    assert!(validate_search_input(&at_limit).is_ok());
    let over = "a".repeat(201);
    assert_eq!(
        validate_search_input(&over),
        Err(SearchInputError::TooLong { max: 200 })
    );
}

#[test]
fn catalog_wraps_validation_errors() {
    let err = FIXTURE_CATALOG.parse_tag("\"open").unwrap_err();
    assert!(matches!(
        err,
        MeikanError::InvalidSearchInput(SearchInputError::UnclosedQuote)
    ));
    assert!(err.to_string().contains("Unclosed quote"));
}
