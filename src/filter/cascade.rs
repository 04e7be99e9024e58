// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cascading facets: what can still be picked, and how many results each pick gives.
//!
//! Every computation here follows the same exclude-self pattern:
//!
//! ```text
//! records ─► match all search tags ─► apply every constraint except F ─► read F
//! ```
//!
//! Leaving F's own selection out is what lets the user see, and change, the
//! value they already picked. All functions are pure; the same arguments
//! always give the same answer.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::predicates::{matches_facets_except, matches_selection_except, matches_tags, Constraint};
use crate::media::has_media;
use crate::period::get_sword_periods;
use crate::tier::{authentication_levels, detect_tiers};
use crate::types::{is_placeholder, Facet, FacetSelection, SearchTag, SwordRecord};

/// Value → number of matching records.
pub type CountMap = BTreeMap<String, usize>;

/// The option lists for every dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub schools: Vec<String>,
    pub smiths: Vec<String>,
    pub types: Vec<String>,
    pub provinces: Vec<String>,
    /// The fixed tier vocabulary; not derived from the records.
    pub authentication_levels: Vec<String>,
}

impl FilterOptions {
    pub fn for_facet(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::School => &self.schools,
            Facet::Smith => &self.smiths,
            Facet::Type => &self.types,
            Facet::Province => &self.provinces,
            Facet::Authentication => &self.authentication_levels,
        }
    }
}

/// Every count the filter panel shows, for one selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetCounts {
    pub options: FilterOptions,
    pub facets: BTreeMap<Facet, CountMap>,
    pub authentication: CountMap,
    pub periods: CountMap,
    pub media: CountMap,
}

fn search_restricted<'a>(records: &'a [SwordRecord], tags: &[SearchTag]) -> Vec<&'a SwordRecord> {
    records.iter().filter(|r| matches_tags(r, tags)).collect()
}

fn unique_values(records: &[&SwordRecord], facet: Facet, selection: &FacetSelection) -> Vec<String> {
    let field = facet.field();
    records
        .iter()
        .filter(|r| matches_facets_except(r, selection, Some(facet)))
        .map(|r| r.get(field))
        .filter(|v| !is_placeholder(v))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Option lists for school, smith, type, and province, plus the tier vocabulary.
///
/// Only the five dropdown facets cascade into each other here; length, media,
/// and periods don't narrow the lists. Values are unique, sorted, and never
/// placeholders.
pub fn get_available_filter_options(
    records: &[SwordRecord],
    selection: &FacetSelection,
    tags: &[SearchTag],
) -> FilterOptions {
    let base = search_restricted(records, tags);
    FilterOptions {
        schools: unique_values(&base, Facet::School, selection),
        smiths: unique_values(&base, Facet::Smith, selection),
        types: unique_values(&base, Facet::Type, selection),
        provinces: unique_values(&base, Facet::Province, selection),
        authentication_levels: authentication_levels(),
    }
}

fn count_where<'a, F, I>(
    records: &[&'a SwordRecord],
    selection: &FacetSelection,
    skip: Constraint,
    keys: F,
) -> CountMap
where
    F: Fn(&'a SwordRecord) -> I,
    I: IntoIterator<Item = String>,
{
    let mut counts = CountMap::new();
    for record in records
        .iter()
        .copied()
        .filter(|r| matches_selection_except(r, selection, Some(skip)))
    {
        for key in keys(record) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }
    counts
}

fn option_counts_in(records: &[&SwordRecord], selection: &FacetSelection, facet: Facet) -> CountMap {
    if facet == Facet::Authentication {
        return authentication_counts_in(records, selection);
    }
    let field = facet.field();
    count_where(records, selection, Constraint::Facet(facet), |r| {
        let value = r.get(field);
        (!is_placeholder(value)).then(|| value.to_string())
    })
}

fn authentication_counts_in(records: &[&SwordRecord], selection: &FacetSelection) -> CountMap {
    count_where(
        records,
        selection,
        Constraint::Facet(Facet::Authentication),
        |r| detect_tiers(&r.authentication).map(|t| t.label().to_string()),
    )
}

fn period_counts_in(records: &[&SwordRecord], selection: &FacetSelection) -> CountMap {
    count_where(records, selection, Constraint::Periods, |r| {
        get_sword_periods(&r.period)
            .into_iter()
            .map(|era| era.id().to_string())
    })
}

fn media_counts_in(records: &[&SwordRecord], selection: &FacetSelection) -> CountMap {
    let mut counts = count_where(records, selection, Constraint::Media, |r| {
        Some(has_media(&r.media_attachments).to_string())
    });
    counts.entry("true".to_string()).or_insert(0);
    counts.entry("false".to_string()).or_insert(0);
    counts
}

/// Result count per value of `facet`, with every other constraint applied.
///
/// Unlike the option lists, length, media, and periods do narrow these
/// counts. Authentication counts per detected tier.
pub fn get_option_counts(
    records: &[SwordRecord],
    selection: &FacetSelection,
    tags: &[SearchTag],
    facet: Facet,
) -> CountMap {
    option_counts_in(&search_restricted(records, tags), selection, facet)
}

/// Result count per authentication tier, with every other constraint applied.
///
/// A record counts toward every tier it is detected as.
pub fn get_authentication_counts(
    records: &[SwordRecord],
    selection: &FacetSelection,
    tags: &[SearchTag],
) -> CountMap {
    authentication_counts_in(&search_restricted(records, tags), selection)
}

/// Result count per era id, with every constraint but periods applied.
pub fn get_period_counts(
    records: &[SwordRecord],
    selection: &FacetSelection,
    tags: &[SearchTag],
) -> CountMap {
    period_counts_in(&search_restricted(records, tags), selection)
}

/// Result counts for `"true"` (has media) and `"false"`, with every
/// constraint but media applied. Both keys are always present.
pub fn get_media_counts(
    records: &[SwordRecord],
    selection: &FacetSelection,
    tags: &[SearchTag],
) -> CountMap {
    media_counts_in(&search_restricted(records, tags), selection)
}

/// Everything above in one pass over the search-restricted records.
pub fn compute_facet_counts(
    records: &[SwordRecord],
    selection: &FacetSelection,
    tags: &[SearchTag],
) -> FacetCounts {
    let base = search_restricted(records, tags);
    let options = FilterOptions {
        schools: unique_values(&base, Facet::School, selection),
        smiths: unique_values(&base, Facet::Smith, selection),
        types: unique_values(&base, Facet::Type, selection),
        provinces: unique_values(&base, Facet::Province, selection),
        authentication_levels: authentication_levels(),
    };
    let facets = Facet::ALL
        .into_iter()
        .filter(|f| *f != Facet::Authentication)
        .map(|f| (f, option_counts_in(&base, selection, f)))
        .collect();
    FacetCounts {
        options,
        facets,
        authentication: authentication_counts_in(&base, selection),
        periods: period_counts_in(&base, selection),
        media: media_counts_in(&base, selection),
    }
}
