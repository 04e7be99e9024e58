// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record filter pipeline: the visible result set for a complete query.
//!
//! A record is shown when all three hold:
//!
//! 1. it matches every search tag,
//! 2. it satisfies the simple selection,
//! 3. no filter group is active, or it satisfies at least one active group.
//!
//! A group is active when it has a tag or any non-blank selection. Blank
//! groups are skipped entirely, so a list made only of blank groups filters
//! nothing.

use super::predicates::{matches_selection, matches_tags};
use crate::types::{FacetSelection, FilterGroup, SearchTag, SwordRecord};

/// Does the record satisfy one group (its own tags AND its own selection)?
pub fn matches_group(record: &SwordRecord, group: &FilterGroup) -> bool {
    matches_tags(record, &group.search_tags) && matches_selection(record, &group.selection)
}

/// Groups that take part in matching.
pub fn active_groups(groups: &[FilterGroup]) -> Vec<&FilterGroup> {
    groups.iter().filter(|g| !g.is_empty()).collect()
}

fn record_passes(
    record: &SwordRecord,
    tags: &[SearchTag],
    selection: &FacetSelection,
    active: &[&FilterGroup],
) -> bool {
    matches_tags(record, tags)
        && matches_selection(record, selection)
        && (active.is_empty() || active.iter().any(|g| matches_group(record, g)))
}

/// Filter records down to those visible under the query. Order is preserved.
pub fn filter_records<'a>(
    records: &'a [SwordRecord],
    tags: &[SearchTag],
    selection: &FacetSelection,
    groups: &[FilterGroup],
) -> Vec<&'a SwordRecord> {
    let active = active_groups(groups);
    let visible: Vec<&SwordRecord> = records
        .iter()
        .filter(|r| record_passes(r, tags, selection, &active))
        .collect();
    crate::contracts::check_filter_output(records, &visible);
    visible
}
