// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Filtering: the visible result set, and the facet lists and counts around it.
//!
//! - [`pipeline`]: records that pass tags, selection, and groups.
//! - [`cascade`]: per-facet options and counts with the facet's own selection
//!   left out.
//! - [`predicates`]: the per-record checks both are built from.

pub mod cascade;
pub mod pipeline;
pub mod predicates;

pub use cascade::{
    compute_facet_counts, get_authentication_counts, get_available_filter_options,
    get_media_counts, get_option_counts, get_period_counts, CountMap, FacetCounts, FilterOptions,
};
pub use pipeline::{active_groups, filter_records, matches_group};
pub use predicates::{matches_facet, matches_selection, matches_tags, Constraint};
