//! Catalog-level behaviour: group filtering, memoization, rebuilds.

use meikan::load::{EngineConfig, MemoCapacity};
use meikan::{Catalog, Facet, FacetSelection, FilterGroup};

use crate::common::{fixture_filter, sample_catalog, selection_group, tag_group, FIXTURE_CATALOG};

#[test]
fn group_narrows_simple_selection() {
    let selection = FacetSelection::default().with(Facet::School, "Osafune");
    assert_eq!(fixture_filter(&[], &selection, &[]), vec!["4", "5", "8", "11"]);

    let groups = vec![selection_group(FacetSelection::default().with(Facet::Smith, "Sukesada"))];
    assert_eq!(fixture_filter(&[], &selection, &groups), vec!["4"]);
}

#[test]
fn groups_combine_with_or() {
    let groups = vec![tag_group(&["kawanakajima"]), tag_group(&["\"Fudo Masamune\""])];
    assert_eq!(fixture_filter(&[], &FacetSelection::default(), &groups), vec!["1", "8"]);

    let with_blank = vec![FilterGroup::default(), tag_group(&["kotetsu"])];
    assert_eq!(fixture_filter(&[], &FacetSelection::default(), &with_blank), vec!["6"]);
}

#[test]
fn top_level_tags_and_groups_both_apply() {
    let groups = vec![selection_group(FacetSelection::default().with(Facet::Type, "Tanto"))];
    assert_eq!(fixture_filter(&["masamune"], &FacetSelection::default(), &groups), vec!["3"]);
}

#[test]
fn memo_reuses_snapshots() {
    let catalog = Catalog::new(FIXTURE_CATALOG.records().to_vec());
    let selection = FacetSelection::default().with(Facet::Province, "Sagami");

    let first = catalog.facet_counts(&selection, &[]);
    let second = catalog.facet_counts(&selection, &[]);
    assert!(std::sync::Arc::ptr_eq(&first, &second));
    assert_eq!(catalog.memo_len(), 1);

    let tags = crate::common::tags(&["tanto"]);
    let narrowed = catalog.facet_counts(&selection, &tags);
    assert_eq!(catalog.memo_len(), 2);
    assert_eq!(narrowed.facets[&Facet::Smith].values().sum::<usize>(), 2);
}

#[test]
fn memo_capacity_bounds_and_disables() {
    let config = EngineConfig {
        memo_capacity: MemoCapacity(2),
        ..EngineConfig::default()
    };
    let catalog = Catalog::with_config(sample_catalog(), config);
    for school in ["Soshu", "Osafune", "Edo"] {
        catalog.facet_counts(&FacetSelection::default().with(Facet::School, school), &[]);
    }
    assert!(catalog.memo_len() <= 2);

    let off = EngineConfig {
        memo_capacity: MemoCapacity(0),
        ..EngineConfig::default()
    };
    let catalog = Catalog::with_config(sample_catalog(), off);
    let a = catalog.facet_counts(&FacetSelection::default(), &[]);
    let b = catalog.facet_counts(&FacetSelection::default(), &[]);
    assert_eq!(a, b);
    assert!(!std::sync::Arc::ptr_eq(&a, &b));
    assert_eq!(catalog.memo_len(), 0);
}

#[test]
fn rebuild_refreshes_index_and_memo() {
    let mut catalog = Catalog::new(sample_catalog());
    catalog.facet_counts(&FacetSelection::default(), &[]);
    let before = catalog.fingerprint();
    assert!(catalog.suggest("kiyo").is_empty());

    catalog.rebuild(FIXTURE_CATALOG.records().to_vec());
    assert_ne!(catalog.fingerprint(), before);
    assert_eq!(catalog.memo_len(), 0);
    assert_eq!(catalog.len(), 12);
    assert!(!catalog.suggest("kiyo").is_empty());
}
