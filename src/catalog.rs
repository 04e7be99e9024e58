// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! An owned, rebuildable catalog: records, facet index, and memoized counts.
//!
//! The free functions in [`crate::filter`] and [`crate::suggest`] are pure
//! and take everything as arguments. `Catalog` bundles the record set with
//! what is derived from it so a caller doesn't recompute the index on every
//! keystroke.
//!
//! # Memoization
//!
//! Facet-count snapshots are cached under
//! `(dataset fingerprint, selection, tag texts)`. The fingerprint is a
//! CRC32 over every field of every record, so a new record set is a new key
//! and no explicit invalidation is needed. [`rebuild`](Catalog::rebuild)
//! still drops the cache to release memory. Results are identical with or
//! without the cache.

use crc32fast::Hasher as Crc32Hasher;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::error::Result;
use crate::filter::{compute_facet_counts, filter_records, FacetCounts};
use crate::index::{build_autocomplete_index, FacetIndex};
use crate::load::EngineConfig;
use crate::search::validate_search_input_with;
use crate::suggest::{generate_suggestions_with, SuggestionGroup};
use crate::types::{FacetSelection, Field, FilterGroup, SearchTag, SwordRecord};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MemoKey {
    fingerprint: u32,
    selection: FacetSelection,
    tags: Vec<String>,
}

/// CRC32 over all field values, with separators so field boundaries count.
pub fn dataset_fingerprint(records: &[SwordRecord]) -> u32 {
    let mut hasher = Crc32Hasher::new();
    for record in records {
        for field in Field::ALL {
            hasher.update(record.get(field).as_bytes());
            hasher.update(&[0x1f]);
        }
        hasher.update(&[0x1e]);
    }
    hasher.finalize()
}

/// A record set with its facet index and a facet-count memo.
#[derive(Debug)]
pub struct Catalog {
    records: Vec<SwordRecord>,
    index: FacetIndex,
    fingerprint: u32,
    config: EngineConfig,
    memo: Mutex<HashMap<MemoKey, Arc<FacetCounts>>>,
}

impl Catalog {
    pub fn new(records: Vec<SwordRecord>) -> Self {
        Self::with_config(records, EngineConfig::default())
    }

    pub fn with_config(records: Vec<SwordRecord>, config: EngineConfig) -> Self {
        let index = build_autocomplete_index(&records);
        let fingerprint = dataset_fingerprint(&records);
        debug!(records = records.len(), fingerprint, "catalog built");
        Self {
            records,
            index,
            fingerprint,
            config,
            memo: Mutex::new(HashMap::new()),
        }
    }

    /// Swap in a new record set. The index and fingerprint are recomputed and
    /// the memo is cleared.
    pub fn rebuild(&mut self, records: Vec<SwordRecord>) {
        self.index.rebuild(&records);
        self.fingerprint = dataset_fingerprint(&records);
        self.records = records;
        self.memo.get_mut().clear();
        debug!(
            records = self.records.len(),
            fingerprint = self.fingerprint,
            "catalog rebuilt"
        );
    }

    pub fn records(&self) -> &[SwordRecord] {
        &self.records
    }

    pub fn index(&self) -> &FacetIndex {
        &self.index
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate user input against the configured length cap and turn it into a tag.
    pub fn parse_tag(&self, input: &str) -> Result<SearchTag> {
        validate_search_input_with(input, self.config.search.max_input_length)?;
        Ok(SearchTag::new(input))
    }

    /// Autocomplete using the configured limits.
    pub fn suggest(&self, query: &str) -> Vec<SuggestionGroup> {
        let ac = self.config.autocomplete;
        generate_suggestions_with(query, &self.index, ac.max_suggestions, ac.min_chars)
    }

    /// The visible records for a query.
    pub fn filter(
        &self,
        tags: &[SearchTag],
        selection: &FacetSelection,
        groups: &[FilterGroup],
    ) -> Vec<&SwordRecord> {
        filter_records(&self.records, tags, selection, groups)
    }

    /// All facet options and counts for a selection, memoized.
    pub fn facet_counts(&self, selection: &FacetSelection, tags: &[SearchTag]) -> Arc<FacetCounts> {
        let capacity = self.config.memo_capacity.0;
        if capacity == 0 {
            return Arc::new(compute_facet_counts(&self.records, selection, tags));
        }

        let key = MemoKey {
            fingerprint: self.fingerprint,
            selection: selection.clone(),
            tags: tags.iter().map(|t| t.text().to_string()).collect(),
        };
        if let Some(hit) = self.memo.lock().get(&key) {
            trace!("facet count memo hit");
            return Arc::clone(hit);
        }

        debug!(tags = key.tags.len(), "facet count memo miss");
        let counts = Arc::new(compute_facet_counts(&self.records, selection, tags));
        let mut memo = self.memo.lock();
        if memo.len() >= capacity {
            memo.clear();
        }
        memo.insert(key, Arc::clone(&counts));
        counts
    }

    /// Number of memoized snapshots.
    pub fn memo_len(&self) -> usize {
        self.memo.lock().len()
    }
}
