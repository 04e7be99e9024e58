// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-record predicates shared by the pipeline and the cascade.

use crate::media::has_media;
use crate::period::matches_period_filter;
use crate::search::record_matches_tags;
use crate::tier::matches_authentication;
use crate::types::{Facet, FacetSelection, SearchTag, SwordRecord};

/// One independently removable part of a [`FacetSelection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    Facet(Facet),
    Media,
    Length,
    Periods,
}

/// Does the record satisfy a single facet value? Empty values always do.
///
/// Authentication goes through tier matching; the other facets compare
/// exactly.
pub fn matches_facet(record: &SwordRecord, facet: Facet, value: &str) -> bool {
    if value.is_empty() {
        return true;
    }
    match facet {
        Facet::Authentication => matches_authentication(&record.authentication, value),
        other => record.get(other.field()) == value,
    }
}

/// The five dropdown facets only, optionally leaving one out.
pub fn matches_facets_except(
    record: &SwordRecord,
    selection: &FacetSelection,
    skip: Option<Facet>,
) -> bool {
    Facet::ALL
        .into_iter()
        .filter(|facet| Some(*facet) != skip)
        .all(|facet| matches_facet(record, facet, selection.get(facet)))
}

/// Every part of the selection, optionally leaving one out.
pub fn matches_selection_except(
    record: &SwordRecord,
    selection: &FacetSelection,
    skip: Option<Constraint>,
) -> bool {
    let skip_facet = match skip {
        Some(Constraint::Facet(facet)) => Some(facet),
        _ => None,
    };
    matches_facets_except(record, selection, skip_facet)
        && (skip == Some(Constraint::Media)
            || selection.has_media.accepts(has_media(&record.media_attachments)))
        && (skip == Some(Constraint::Length) || selection.length.contains_raw(&record.nagasa))
        && (skip == Some(Constraint::Periods)
            || matches_period_filter(&record.period, &selection.periods))
}

/// Every part of the selection.
pub fn matches_selection(record: &SwordRecord, selection: &FacetSelection) -> bool {
    matches_selection_except(record, selection, None)
}

/// AND over search tags.
pub fn matches_tags(record: &SwordRecord, tags: &[SearchTag]) -> bool {
    record_matches_tags(record, tags.iter().map(SearchTag::terms))
}
