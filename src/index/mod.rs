// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The facet index: every distinct value worth suggesting, with its count.
//!
//! One pass over the records fills seven categories. Each category is a list
//! of `{value, count}` sorted by count descending, ties in first-seen order.
//!
//! ```text
//! records ──► tally per category ──► sort by count ──► FacetIndex
//!               │
//!               ├─ Smith, School, Type, Province, Period: raw value
//!               ├─ Authentication: one entry per detected tier
//!               └─ meitoName: famous-sword names
//! ```
//!
//! Placeholder values (`""`, `NA`, `XX`) are never indexed. The index is
//! rebuilt in full whenever the record set changes; there is no incremental
//! update.

mod tally;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::tier::detect_tiers;
use crate::types::{is_placeholder, SwordRecord};
use tally::Tally;

/// Record count above which the parallel builder is used.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 8192;

/// Records per parallel work unit.
#[cfg(feature = "parallel")]
const CHUNK_SIZE: usize = 2048;

/// One distinct value and how many records carry it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FacetEntry {
    pub value: String,
    pub count: usize,
}

impl FacetEntry {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// A suggestion category. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Smiths,
    Schools,
    Types,
    Authentication,
    Provinces,
    Periods,
    Meito,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Smiths,
        Category::Schools,
        Category::Types,
        Category::Authentication,
        Category::Provinces,
        Category::Periods,
        Category::Meito,
    ];

    /// Heading shown above the category's suggestions.
    pub fn label(self) -> &'static str {
        match self {
            Category::Smiths => "SMITHS",
            Category::Schools => "SCHOOLS",
            Category::Types => "TYPES",
            Category::Authentication => "AUTHENTICATION",
            Category::Provinces => "PROVINCES",
            Category::Periods => "PERIODS",
            Category::Meito => "FAMOUS SWORDS",
        }
    }

    /// Display priority, 1 first.
    pub fn priority(self) -> u8 {
        self as u8 + 1
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Counted distinct values per [`Category`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetIndex {
    categories: [Vec<FacetEntry>; 7],
}

type Tallies = [Tally; 7];

fn tally_record(tallies: &mut Tallies, record: &SwordRecord) {
    let plain = [
        (Category::Smiths, &record.smith),
        (Category::Schools, &record.school),
        (Category::Types, &record.kind),
        (Category::Provinces, &record.province),
        (Category::Periods, &record.period),
    ];
    for (category, value) in plain {
        if !is_placeholder(value) {
            tallies[category.slot()].add(value, 1);
        }
    }
    for tier in detect_tiers(&record.authentication) {
        tallies[Category::Authentication.slot()].add(tier.label(), 1);
    }
    if let Some(name) = record.meito_name.as_deref().filter(|n| !is_placeholder(n)) {
        tallies[Category::Meito.slot()].add(name, 1);
    }
}

fn tally_all(records: &[SwordRecord]) -> Tallies {
    let mut tallies = Tallies::default();
    for record in records {
        tally_record(&mut tallies, record);
    }
    tallies
}

impl FacetIndex {
    /// Build the index with a single sequential pass.
    pub fn build(records: &[SwordRecord]) -> Self {
        Self::from_tallies(tally_all(records))
    }

    /// Build the index over record chunks in parallel.
    ///
    /// Chunk tallies are merged in chunk order, so the result is identical
    /// to [`build`](Self::build).
    #[cfg(feature = "parallel")]
    pub fn build_parallel(records: &[SwordRecord]) -> Self {
        use rayon::prelude::*;

        let partials: Vec<Tallies> = records.par_chunks(CHUNK_SIZE).map(tally_all).collect();
        let mut merged = Tallies::default();
        for partial in partials {
            for (into, from) in merged.iter_mut().zip(partial) {
                into.merge(from);
            }
        }
        Self::from_tallies(merged)
    }

    /// Build from explicit per-category entries. Entries are re-sorted by count.
    pub fn from_entries<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<FacetEntry>)>,
    {
        let mut index = Self::default();
        for (category, mut entries) in categories {
            entries.sort_by(|a, b| b.count.cmp(&a.count));
            index.categories[category.slot()] = entries;
        }
        index
    }

    fn from_tallies(tallies: Tallies) -> Self {
        Self {
            categories: tallies.map(Tally::into_sorted),
        }
    }

    /// Replace the contents with a fresh build over `records`.
    pub fn rebuild(&mut self, records: &[SwordRecord]) {
        *self = build_autocomplete_index(records);
    }

    pub fn entries(&self, category: Category) -> &[FacetEntry] {
        &self.categories[category.slot()]
    }

    /// Number of distinct values across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(Vec::is_empty)
    }

    /// All categories with their entries, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[FacetEntry])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.entries(category)))
    }
}

/// Build the facet index, going parallel for large record sets.
pub fn build_autocomplete_index(records: &[SwordRecord]) -> FacetIndex {
    #[cfg(feature = "parallel")]
    let index = if records.len() >= PARALLEL_THRESHOLD {
        FacetIndex::build_parallel(records)
    } else {
        FacetIndex::build(records)
    };
    #[cfg(not(feature = "parallel"))]
    let index = FacetIndex::build(records);

    debug!(
        records = records.len(),
        values = index.len(),
        "built facet index"
    );
    crate::contracts::check_index_well_formed(&index);
    index
}
