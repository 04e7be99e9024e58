//! Free-text matching against whole records.

use meikan::{matches_search_terms, parse_search_input, FacetSelection, Field};

use crate::common::{fixture_filter, make_record, make_record_with, tags};

fn matches(value: &str, input: &str) -> bool {
    matches_search_terms(value, &parse_search_input(input))
}

#[test]
fn unquoted_search_finds_both_masamune_blades() {
    let records = vec![
        make_record("Masamune", "Soshu", "Katana"),
        make_record("Sadamune", "Soshu", "Tanto"),
        make_record("Masamune", "Soshu", "Tanto"),
    ];
    let out = meikan::filter_records(&records, &tags(&["Masamune"]), &FacetSelection::default(), &[]);
    assert_eq!(out.len(), 2);
    assert!(out.iter().all(|r| r.smith == "Masamune"));
}

#[test]
fn quoted_juyo_skips_tokubetsu_juyo() {
    assert!(!matches("Tokubetsu Juyo 12", "\"Juyo\""));
    assert!(matches("Juyo 12", "\"Juyo\""));
    assert!(matches("Juyo Bunkazai", "\"Juyo\""));
    assert_eq!(fixture_filter(&["\"Juyo\""], &FacetSelection::default(), &[]), vec!["2", "6", "8", "11"]);
}

#[test]
fn quoted_hozon_and_bunkazai_exclusions() {
    assert!(!matches("Tokubetsu Hozon", "\"Hozon\""));
    assert!(matches("Hozon", "\"Hozon\""));
    assert!(!matches("Juyo Bunkazai", "\"Bunkazai\""));
    assert!(matches("Bunkazai", "\"Bunkazai\""));
}

#[test]
fn quoted_session_number_is_bounded() {
    assert!(matches("Juyo 11.", "\"Juyo 11\""));
    assert!(matches("(Juyo 11)", "\"Juyo 11\""));
    assert!(!matches("Juyo 110", "\"Juyo 11\""));
}

#[test]
fn all_terms_of_one_tag_must_hit_the_same_field() {
    let record = make_record_with(&[(Field::Smith, "Sukesada"), (Field::Province, "Bizen")]);
    let records = vec![record];
    let selection = FacetSelection::default();
    let same_field = meikan::filter_records(&records, &tags(&["suke bizen"]), &selection, &[]);
    assert!(same_field.is_empty());
    let two_tags = meikan::filter_records(&records, &tags(&["suke", "bizen"]), &selection, &[]);
    assert_eq!(two_tags.len(), 1);
}

#[test]
fn meito_names_are_searchable() {
    // Only the enriched meitoName and the description carry "Kawanakajima".
    assert_eq!(fixture_filter(&["kawanakajima"], &FacetSelection::default(), &[]), vec!["8"]);
    assert_eq!(fixture_filter(&["\"Fudo Masamune\""], &FacetSelection::default(), &[]), vec!["1"]);
}

#[test]
fn search_is_case_insensitive() {
    let selection = FacetSelection::default();
    assert_eq!(fixture_filter(&["SOSHU"], &selection, &[]), vec!["1", "2", "3"]);
    assert_eq!(fixture_filter(&["soshu"], &selection, &[]), vec!["1", "2", "3"]);
}
