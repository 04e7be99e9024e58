// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the derived structures.
//!
//! These are `debug_assert!` checks: free in release builds, loud in tests
//! and debug builds. They run at the end of the operations that produce the
//! structure they check.
//!
//! | Contract                       | Checked after                      |
//! |--------------------------------|------------------------------------|
//! | `check_index_well_formed`      | `build_autocomplete_index`         |
//! | `check_suggestions_well_formed`| `generate_suggestions_with`        |
//! | `check_filter_output`          | `filter_records`                   |
//! | `check_era_table`              | unit tests                         |

use crate::index::{Category, FacetIndex};
use crate::period::Era;
use crate::scoring::{CONTAINS_SCORE, MAX_LENGTH_BONUS, PREFIX_SCORE, WORD_START_SCORE};
use crate::suggest::{count_total_suggestions, SuggestionGroup};
use crate::types::{is_placeholder, SwordRecord};

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Match quality dominates length: with equal counts, the best length bonus
/// on a weaker match cannot reach the next stronger base score.
const _: () = {
    assert!(PREFIX_SCORE > WORD_START_SCORE);
    assert!(WORD_START_SCORE > CONTAINS_SCORE);
    assert!(CONTAINS_SCORE > 0.0);
    assert!(MAX_LENGTH_BONUS < PREFIX_SCORE - WORD_START_SCORE);
    assert!(MAX_LENGTH_BONUS < WORD_START_SCORE - CONTAINS_SCORE);
};

// ============================================================================
// FACET INDEX CONTRACTS
// ============================================================================

/// Every category is sorted by count descending, has no placeholder values,
/// no duplicates, and no zero counts.
#[inline]
pub fn check_index_well_formed(index: &FacetIndex) {
    for category in Category::ALL {
        let entries = index.entries(category);
        for (i, pair) in entries.windows(2).enumerate() {
            debug_assert!(
                pair[0].count >= pair[1].count,
                "Contract violation: {} not sorted at {} ({} < {})",
                category,
                i,
                pair[0].count,
                pair[1].count
            );
        }
        for entry in entries {
            debug_assert!(
                !is_placeholder(&entry.value),
                "Contract violation: placeholder '{}' indexed under {}",
                entry.value,
                category
            );
            debug_assert!(
                entry.count > 0,
                "Contract violation: zero count for '{}' under {}",
                entry.value,
                category
            );
        }
        if cfg!(debug_assertions) {
            let mut seen = std::collections::HashSet::new();
            for entry in entries {
                debug_assert!(
                    seen.insert(entry.value.as_str()),
                    "Contract violation: duplicate '{}' under {}",
                    entry.value,
                    category
                );
            }
        }
    }
}

// ============================================================================
// SUGGESTION CONTRACTS
// ============================================================================

/// At most `max` suggestions, groups in priority order, one group per
/// category, no empty groups, highlights inside their text.
#[inline]
pub fn check_suggestions_well_formed(groups: &[SuggestionGroup], max: usize) {
    debug_assert!(
        count_total_suggestions(groups) <= max,
        "Contract violation: {} suggestions > max {}",
        count_total_suggestions(groups),
        max
    );
    for pair in groups.windows(2) {
        debug_assert!(
            pair[0].priority() < pair[1].priority(),
            "Contract violation: groups out of order ({} before {})",
            pair[0].label(),
            pair[1].label()
        );
    }
    for group in groups {
        debug_assert!(
            !group.suggestions.is_empty(),
            "Contract violation: empty group {}",
            group.label()
        );
        for suggestion in &group.suggestions {
            if let Some(range) = suggestion.highlight {
                debug_assert!(
                    range.start <= range.end,
                    "Contract violation: inverted highlight on '{}'",
                    suggestion.text
                );
            }
        }
    }
}

// ============================================================================
// FILTER CONTRACTS
// ============================================================================

/// The output is a subsequence of the input: no record invented, order kept.
#[inline]
pub fn check_filter_output(records: &[SwordRecord], output: &[&SwordRecord]) {
    debug_assert!(
        output.len() <= records.len(),
        "Contract violation: filter produced {} records from {}",
        output.len(),
        records.len()
    );
    if cfg!(debug_assertions) {
        let base = records.as_ptr_range();
        let mut last: Option<*const SwordRecord> = None;
        for record in output {
            let ptr: *const SwordRecord = *record;
            debug_assert!(
                base.contains(&ptr),
                "Contract violation: filter output does not borrow from input"
            );
            if let Some(prev) = last {
                debug_assert!(prev < ptr, "Contract violation: filter output reordered");
            }
            last = Some(ptr);
        }
    }
}

// ============================================================================
// PERIOD CONTRACTS
// ============================================================================

/// Era ranges are non-empty and start in chronological order. Overlaps are
/// allowed (Momoyama sits inside Muromachi).
pub fn check_era_table() {
    for era in Era::ALL {
        let years = era.years();
        debug_assert!(
            years.start() <= years.end(),
            "Contract violation: empty range for {}",
            era
        );
        debug_assert!(
            !era.keywords().is_empty(),
            "Contract violation: no keywords for {}",
            era
        );
    }
    for pair in Era::ALL.windows(2) {
        debug_assert!(
            pair[0].years().start() <= pair[1].years().start(),
            "Contract violation: {} starts after {}",
            pair[0],
            pair[1]
        );
    }
}
