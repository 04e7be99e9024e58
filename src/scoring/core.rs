// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind suggestion ranking.
//!
//! A candidate's score is the sum of three parts:
//!
//! ```text
//! score = base(match quality) + max(0, 20 - len/5) + 3 * ln(count + 1)
//! ```
//!
//! | Match quality | Base | Example (query `masa`)     |
//! |---------------|------|----------------------------|
//! | Prefix        | 100  | `Masamune`                 |
//! | Word start    | 75   | `Soshu Masahiro`           |
//! | Contains      | 50   | `Yamashiro Ohmasa`         |
//! | None          | 0    | excluded                   |
//!
//! The length bonus is capped below the gap between adjacent bases, so with
//! equal counts a better match quality always wins. Counts are unbounded, so a
//! heavily attested word-start match can still pass a rare prefix match.

use serde::{Deserialize, Serialize};

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Base score when the candidate starts with the query.
pub const PREFIX_SCORE: f64 = 100.0;

/// Base score when the query starts a later word (`" " + query`).
pub const WORD_START_SCORE: f64 = 75.0;

/// Base score for any other substring match.
pub const CONTAINS_SCORE: f64 = 50.0;

/// Length bonus for a zero-length candidate.
pub const MAX_LENGTH_BONUS: f64 = 20.0;

/// Characters per point of length bonus lost.
pub const LENGTH_BONUS_DIVISOR: f64 = 5.0;

/// Multiplier on `ln(count + 1)`.
pub const COUNT_BONUS_WEIGHT: f64 = 3.0;

/// How the query sits inside the candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchQuality {
    Prefix,
    WordStart,
    Contains,
}

impl MatchQuality {
    /// Classify `query` against `candidate`. Both must be lowercase.
    pub fn classify(candidate: &str, query: &str) -> Option<MatchQuality> {
        if candidate.starts_with(query) {
            Some(MatchQuality::Prefix)
        } else if candidate.contains(&format!(" {query}")) {
            Some(MatchQuality::WordStart)
        } else if candidate.contains(query) {
            Some(MatchQuality::Contains)
        } else {
            None
        }
    }

    pub fn base_score(self) -> f64 {
        match self {
            MatchQuality::Prefix => PREFIX_SCORE,
            MatchQuality::WordStart => WORD_START_SCORE,
            MatchQuality::Contains => CONTAINS_SCORE,
        }
    }
}

/// Bonus favouring shorter candidates. `len` counts characters.
#[inline]
pub fn length_bonus(len: usize) -> f64 {
    (MAX_LENGTH_BONUS - len as f64 / LENGTH_BONUS_DIVISOR).max(0.0)
}

/// Bonus favouring frequently attested values.
#[inline]
pub fn count_bonus(count: usize) -> f64 {
    ((count + 1) as f64).ln() * COUNT_BONUS_WEIGHT
}

/// Relevance of `candidate` for `query`, or `0.0` when it doesn't contain it.
///
/// Case-insensitive.
pub fn relevance_score(candidate: &str, query: &str, count: usize) -> f64 {
    let lower_candidate = candidate.to_lowercase();
    let lower_query = query.to_lowercase();
    match MatchQuality::classify(&lower_candidate, &lower_query) {
        Some(quality) => {
            quality.base_score() + length_bonus(candidate.chars().count()) + count_bonus(count)
        }
        None => 0.0,
    }
}
