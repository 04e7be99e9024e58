//! Permalinks decoded and applied to the fixture catalog.

use meikan::{filters_to_url_params, has_active_filters, parse_url_filters};

use crate::common::{indices, FIXTURE_CATALOG};

fn visible(query: &str) -> Vec<&'static str> {
    let filters = parse_url_filters(query);
    let catalog: &'static meikan::Catalog = &FIXTURE_CATALOG;
    indices(&catalog.filter(&filters.search_tags, &filters.selection, &[]))
}

#[test]
fn school_and_period_permalink() {
    assert_eq!(visible("?school=Osafune&periods=kamakura"), vec!["11"]);
}

#[test]
fn length_bound_permalink() {
    assert_eq!(visible("nagasaMin=70"), vec!["1", "5", "6", "7", "8", "11"]);
    assert_eq!(visible("nagasaMin=70&nagasaMax=71"), vec!["1", "6"]);
}

#[test]
fn search_permalink_applies_tags() {
    assert_eq!(visible("search=kawanakajima"), vec!["8"]);
    assert_eq!(visible("search=%22Fudo+Masamune%22"), vec!["1"]);
    assert_eq!(visible("search=masamune&search=tanto"), vec!["3"]);
}

#[test]
fn garbage_parameters_filter_nothing() {
    let filters = parse_url_filters("hasMedia=sometimes&nagasaMin=long&utm_source=mail");
    assert!(!has_active_filters(&filters.selection, &filters.search_tags));
    assert_eq!(visible("hasMedia=sometimes&nagasaMin=long").len(), 12);
}

#[test]
fn encoded_state_reproduces_the_result() {
    let original = "province=Bizen&hasMedia=false&periods=muromachi&search=katana";
    let filters = parse_url_filters(original);
    let before = visible(original);
    assert_eq!(before, vec!["4", "5"]);

    let encoded = filters_to_url_params(&filters.selection, &filters.search_tags);
    assert_eq!(encoded, original);
    assert_eq!(visible(&encoded), before);
}
