// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filter state as a URL query string, for shareable links.
//!
//! ```text
//! school=Soshu&type=Katana&hasMedia=true&nagasaMin=60&periods=kamakura&periods=nanbokucho&search=masamune
//! ```
//!
//! Facets, `hasMedia`, and the length bounds appear at most once; `periods`
//! and `search` repeat. Empty values are never written, and on the way in
//! only the first occurrence of a single-valued parameter counts.

use tracing::warn;
use url::form_urlencoded;

use crate::types::{parse_length, Facet, FacetSelection, MediaFilter, SearchTag};

const HAS_MEDIA: &str = "hasMedia";
const NAGASA_MIN: &str = "nagasaMin";
const NAGASA_MAX: &str = "nagasaMax";
const PERIODS: &str = "periods";
const SEARCH: &str = "search";

/// Filter state decoded from a permalink.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlFilters {
    pub selection: FacetSelection,
    pub search_tags: Vec<SearchTag>,
}

fn parse_bound(key: &str, value: &str) -> Option<f64> {
    let bound = parse_length(value);
    if bound.is_none() {
        warn!("ignoring {}={:?}: not a number", key, value);
    }
    bound
}

/// Decode a query string (with or without the leading `?`).
///
/// Unknown parameters are ignored. A `hasMedia` value other than `true` or
/// `false`, or a length bound that isn't a number, is dropped with a warning.
pub fn parse_url_filters(query: &str) -> UrlFilters {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut filters = UrlFilters::default();
    let mut seen: Vec<String> = Vec::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            PERIODS => {
                if !value.is_empty() {
                    filters.selection.periods.push(value.into_owned());
                }
                continue;
            }
            SEARCH => {
                if !value.trim().is_empty() {
                    filters.search_tags.push(SearchTag::new(value.into_owned()));
                }
                continue;
            }
            _ => {}
        }

        if value.is_empty() || seen.iter().any(|k| k == key.as_ref()) {
            continue;
        }
        seen.push(key.to_string());

        let selection = &mut filters.selection;
        match key.as_ref() {
            HAS_MEDIA => match MediaFilter::from_param(&value) {
                Some(media) => selection.has_media = media,
                None => warn!("ignoring {}={:?}", HAS_MEDIA, value),
            },
            NAGASA_MIN => selection.length.min = parse_bound(NAGASA_MIN, &value),
            NAGASA_MAX => selection.length.max = parse_bound(NAGASA_MAX, &value),
            other => {
                if let Some(facet) = Facet::ALL.into_iter().find(|f| f.name() == other) {
                    selection.set(facet, value.into_owned());
                }
            }
        }
    }
    filters
}

/// Encode filter state as a query string without the leading `?`.
///
/// A blank selection with no tags encodes to `""`.
pub fn filters_to_url_params(selection: &FacetSelection, search_tags: &[SearchTag]) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());

    for facet in Facet::ALL {
        let value = selection.get(facet);
        if !value.is_empty() {
            params.append_pair(facet.name(), value);
        }
    }
    if !selection.has_media.is_any() {
        params.append_pair(HAS_MEDIA, selection.has_media.as_param());
    }
    if let Some(min) = selection.length.min {
        params.append_pair(NAGASA_MIN, &min.to_string());
    }
    if let Some(max) = selection.length.max {
        params.append_pair(NAGASA_MAX, &max.to_string());
    }
    for period in &selection.periods {
        params.append_pair(PERIODS, period);
    }
    for tag in search_tags {
        params.append_pair(SEARCH, tag.text());
    }
    params.finish()
}

/// Is any filter or search tag set?
pub fn has_active_filters(selection: &FacetSelection, search_tags: &[SearchTag]) -> bool {
    !selection.is_blank() || !search_tags.is_empty()
}
