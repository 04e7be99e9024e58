//! Shared test utilities and fixtures.

#![allow(dead_code)]

use meikan::{load_catalog, Catalog, FacetSelection, FilterGroup, SearchTag, SwordRecord};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// Re-export canonical test utilities from meikan::testing
pub use meikan::testing::{make_record, make_record_with, sample_catalog, selection_group, tag_group};

// ============================================================================
// FIXTURE CATALOG
// ============================================================================

/// Directory containing the twelve-record fixture catalog.
pub const FIXTURES_DIR: &str = "data/fixtures/catalog";

/// Number of records across the fixture's record files.
pub const FIXTURE_RECORDS: usize = 12;

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(FIXTURES_DIR)
}

/// The fixture catalog, loaded once per test binary.
pub static FIXTURE_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    load_catalog(&fixtures_dir()).expect("fixture catalog should load")
});

// ============================================================================
// HELPERS
// ============================================================================

pub fn tags(texts: &[&str]) -> Vec<SearchTag> {
    texts.iter().map(|t| SearchTag::new(*t)).collect()
}

/// `Index` values of a result set, in result order.
pub fn indices<'a>(records: &[&'a SwordRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.index.as_str()).collect()
}

/// Filter the fixture catalog.
pub fn fixture_filter(
    tag_texts: &[&str],
    selection: &FacetSelection,
    groups: &[FilterGroup],
) -> Vec<&'static str> {
    let catalog: &'static Catalog = &FIXTURE_CATALOG;
    indices(&catalog.filter(&tags(tag_texts), selection, groups))
}
