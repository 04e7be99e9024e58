//! Facet options and counts over the fixture catalog.

use meikan::{AuthTier, Era, Facet, FacetSelection, MediaFilter};

use crate::common::{fixture_filter, FIXTURE_CATALOG};

fn counts(selection: &FacetSelection) -> std::sync::Arc<meikan::FacetCounts> {
    FIXTURE_CATALOG.facet_counts(selection, &[])
}

#[test]
fn school_options_skip_placeholders() {
    let counts = counts(&FacetSelection::default());
    assert_eq!(
        counts.options.schools,
        vec!["Edo", "Gassan", "Osafune", "Soshu", "Suishinshi", "Yotsuya"]
    );
    let schools = &counts.facets[&Facet::School];
    assert_eq!(schools["Osafune"], 4);
    assert_eq!(schools["Soshu"], 3);
    assert!(!schools.contains_key("XX"));
}

#[test]
fn type_and_province_counts() {
    let counts = counts(&FacetSelection::default());
    let types = &counts.facets[&Facet::Type];
    assert_eq!(types["Katana"], 7);
    assert_eq!(types["Tanto"], 2);
    assert_eq!(types["Tachi"], 2);
    assert_eq!(types["Wakizashi"], 1);

    let provinces = &counts.facets[&Facet::Province];
    assert_eq!(provinces["Bizen"], 4);
    assert_eq!(provinces["Sagami"], 3);
    assert_eq!(provinces["Musashi"], 3);
    assert_eq!(provinces["Osaka"], 1);
    assert!(!provinces.contains_key("NA"));
}

#[test]
fn authentication_counts_per_tier() {
    let counts = counts(&FacetSelection::default());
    let auth = &counts.authentication;
    assert_eq!(auth[AuthTier::Kokuho.label()], 1);
    assert_eq!(auth[AuthTier::JuyoBunkazai.label()], 1);
    assert_eq!(auth[AuthTier::TokubetsuJuyo.label()], 1);
    assert_eq!(auth[AuthTier::Juyo.label()], 4);
    assert_eq!(auth[AuthTier::TokubetsuHozon.label()], 3);
    assert_eq!(auth[AuthTier::Hozon.label()], 2);
}

#[test]
fn period_counts_per_era() {
    let counts = counts(&FacetSelection::default());
    let expected = [
        (Era::Kamakura, 3),
        (Era::Nanbokucho, 2),
        (Era::Muromachi, 2),
        (Era::Momoyama, 1),
        (Era::Shinto, 1),
        (Era::Shinshinto, 2),
        (Era::Shinsaku, 1),
    ];
    for (era, count) in expected {
        assert_eq!(counts.periods.get(era.id()), Some(&count), "{}", era.id());
    }
    assert!(!counts.periods.contains_key(Era::Heian.id()));
}

#[test]
fn media_counts_ignore_malformed_attachments() {
    let counts = counts(&FacetSelection::default());
    assert_eq!(counts.media["true"], 3);
    assert_eq!(counts.media["false"], 9);

    let mut with = FacetSelection::default();
    with.has_media = MediaFilter::With;
    assert_eq!(fixture_filter(&[], &with, &[]), vec!["1", "8", "10"]);
}

#[test]
fn school_selection_cascades_into_smiths() {
    let selection = FacetSelection::default().with(Facet::School, "Osafune");
    let counts = counts(&selection);
    assert_eq!(
        counts.options.smiths,
        vec!["Kanemitsu", "Nagamitsu", "Norimitsu", "Sukesada"]
    );
    assert_eq!(counts.options.schools.len(), 6);
    assert_eq!(counts.facets[&Facet::Province]["Bizen"], 4);
    assert!(!counts.facets[&Facet::Province].contains_key("Sagami"));
}

#[test]
fn search_tags_narrow_every_count() {
    let tags = crate::common::tags(&["soshu"]);
    let counts = FIXTURE_CATALOG.facet_counts(&FacetSelection::default(), &tags);
    assert_eq!(counts.options.schools, vec!["Soshu"]);
    assert_eq!(counts.options.smiths, vec!["Masamune", "Sadamune"]);
    assert_eq!(counts.facets[&Facet::Smith]["Masamune"], 2);
    assert_eq!(counts.media["true"] + counts.media["false"], 3);
}
