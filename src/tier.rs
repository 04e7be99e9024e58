// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Authentication tiers: the certification vocabulary of the catalog.
//!
//! The `Authentication` column is free text (`"Tokubetsu Juyo 12, Juyo 5"`,
//! `"Hozon (NBTHK)"`), so the catalog never indexes it verbatim. Two views of
//! it exist, and they are intentionally not identical:
//!
//! - **Detection** ([`detect_tiers`]) decides which tiers a record counts
//!   toward in the facet index. A value may count toward several tiers:
//!   `"Tokubetsu Juyo 12"` satisfies both the Tokubetsu Juyo and the Juyo
//!   detector, because the Juyo detector only looks for `Juyo <session>`.
//! - **Filtering** ([`matches_authentication`]) decides whether a record
//!   passes a selected tier. Tokubetsu Juyo here requires a session number.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static JUYO_SESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Juyo\s+(\d{1,2}|XX)").unwrap_or_else(|e| unreachable!("juyo regex: {e}"))
});

static TOKUBETSU_JUYO_SESSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Tokubetsu Juyo\s+(\d{1,2}|XX)")
        .unwrap_or_else(|e| unreachable!("tokubetsu juyo regex: {e}"))
});

/// A certification level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AuthTier {
    Kokuho,
    JuyoBunkazai,
    TokubetsuJuyo,
    Juyo,
    JuyoBijutsuhin,
    TokubetsuHozon,
    Hozon,
}

impl AuthTier {
    /// The selectable vocabulary, highest designation first.
    pub const ALL: [AuthTier; 7] = [
        AuthTier::Kokuho,
        AuthTier::JuyoBunkazai,
        AuthTier::TokubetsuJuyo,
        AuthTier::Juyo,
        AuthTier::JuyoBijutsuhin,
        AuthTier::TokubetsuHozon,
        AuthTier::Hozon,
    ];

    /// Tiers the facet index detects. Juyo Bijutsuhin is selectable but never indexed.
    pub const DETECTED: [AuthTier; 6] = [
        AuthTier::Kokuho,
        AuthTier::JuyoBunkazai,
        AuthTier::TokubetsuJuyo,
        AuthTier::Juyo,
        AuthTier::TokubetsuHozon,
        AuthTier::Hozon,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AuthTier::Kokuho => "Kokuho",
            AuthTier::JuyoBunkazai => "Juyo Bunkazai",
            AuthTier::TokubetsuJuyo => "Tokubetsu Juyo",
            AuthTier::Juyo => "Juyo",
            AuthTier::JuyoBijutsuhin => "Juyo Bijutsuhin",
            AuthTier::TokubetsuHozon => "Tokubetsu Hozon",
            AuthTier::Hozon => "Hozon",
        }
    }

    pub fn from_label(label: &str) -> Option<AuthTier> {
        AuthTier::ALL.into_iter().find(|tier| tier.label() == label)
    }

    /// Does an authentication string count toward this tier in the index?
    pub fn detects(self, auth: &str) -> bool {
        match self {
            AuthTier::Juyo => JUYO_SESSION_RE.is_match(auth),
            AuthTier::Hozon => auth.contains("Hozon") && !auth.contains("Tokubetsu Hozon"),
            AuthTier::JuyoBijutsuhin => false,
            other => auth.contains(other.label()),
        }
    }
}

impl fmt::Display for AuthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Labels of the selectable vocabulary, in display order.
pub fn authentication_levels() -> Vec<String> {
    AuthTier::ALL.iter().map(|tier| tier.label().to_string()).collect()
}

/// Every tier an authentication string counts toward.
///
/// Empty and `"NA"` values count toward nothing.
pub fn detect_tiers(auth: &str) -> impl Iterator<Item = AuthTier> + '_ {
    let known = !auth.is_empty() && auth != "NA";
    AuthTier::DETECTED
        .into_iter()
        .filter(move |tier| known && tier.detects(auth))
}

/// Does a record's authentication string satisfy a selected tier label?
///
/// An empty selection accepts everything; an empty value fails any
/// selection. Labels outside the special cases match as substrings, so
/// `"Juyo Bijutsuhin"` or a custom label still work.
pub fn matches_authentication(auth: &str, selected: &str) -> bool {
    if selected.is_empty() {
        return true;
    }
    if auth.is_empty() {
        return false;
    }
    match selected {
        "Juyo" => JUYO_SESSION_RE.is_match(auth),
        "Tokubetsu Juyo" => TOKUBETSU_JUYO_SESSION_RE.is_match(auth),
        "Hozon" => auth.contains("Hozon") && !auth.contains("Tokubetsu Hozon"),
        other => auth.contains(other),
    }
}
