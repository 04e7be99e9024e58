// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordering scored suggestion candidates.
//!
//! Candidates are collected category by category, entries in index order, and
//! then sorted with a stable sort on score alone. Ties therefore keep
//! collection order: higher-priority category first, then higher count.

use std::cmp::Ordering;

use crate::index::Category;

/// A facet value that matched the query, with its score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub category: Category,
    pub text: &'a str,
    pub count: usize,
    pub score: f64,
}

/// Compare two candidates for ranking: higher score first.
///
/// Equal scores compare equal, so a stable sort leaves them in collection
/// order. NaN never occurs (scores are sums of finite terms) but would
/// compare equal.
pub fn compare_candidates(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Sort candidates best-first, keeping collection order among ties.
pub fn rank_candidates(candidates: &mut [ScoredCandidate<'_>]) {
    candidates.sort_by(compare_candidates);
}
