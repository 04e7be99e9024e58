// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Counting values in first-seen order.

use std::collections::HashMap;

use super::FacetEntry;

/// An insertion-ordered value counter.
///
/// Entries keep the order in which values were first seen, so a stable sort
/// by count gives deterministic tie-breaking. Merging tallies built over
/// consecutive chunks gives the same result as one tally over the
/// concatenation.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    slots: HashMap<String, usize>,
    entries: Vec<FacetEntry>,
}

impl Tally {
    pub(crate) fn add(&mut self, value: &str, count: usize) {
        if let Some(&slot) = self.slots.get(value) {
            self.entries[slot].count += count;
        } else {
            self.slots.insert(value.to_string(), self.entries.len());
            self.entries.push(FacetEntry {
                value: value.to_string(),
                count,
            });
        }
    }

    /// Fold a later tally into this one.
    pub(crate) fn merge(&mut self, later: Tally) {
        for entry in later.entries {
            self.add(&entry.value, entry.count);
        }
    }

    /// Entries by count descending; ties keep first-seen order.
    pub(crate) fn into_sorted(self) -> Vec<FacetEntry> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}
