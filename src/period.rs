// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mapping free-text dates onto historical eras.
//!
//! Period values in the catalog are messy: `"1326"`, `"1299 - 1302"`, `"13XX"`,
//! `"Late Heian - Early Kamakura"`, `"Edo"`. Two independent passes resolve them:
//!
//! 1. **Year.** A leading four-digit year, or a `NNXX` century shorthand read
//!    as the middle of the century (`13XX` → 1350), maps to every era whose
//!    inclusive range contains it.
//! 2. **Keywords.** Case-insensitive substrings from a fixed table (`edo` →
//!    shinto, `meiji` → shinsaku, ...).
//!
//! The results are unioned, year eras first.
//!
//! Era ranges overlap on purpose: Momoyama (1573–1596) sits inside the tail
//! of Muromachi, so `"1580"` resolves to both. Keyword matching is plain
//! substring, so `"Shinshinto"` also resolves to shinto.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::MeikanError;

/// Values that mean "no period recorded".
const UNKNOWN_PERIODS: [&str; 2] = ["NA", "UNKNO"];

/// A canonical historical era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    Kofun,
    Nara,
    Heian,
    Kamakura,
    Nanbokucho,
    Muromachi,
    Momoyama,
    Shinto,
    Shinshinto,
    Shinsaku,
}

impl Era {
    /// All eras in chronological order.
    pub const ALL: [Era; 10] = [
        Era::Kofun,
        Era::Nara,
        Era::Heian,
        Era::Kamakura,
        Era::Nanbokucho,
        Era::Muromachi,
        Era::Momoyama,
        Era::Shinto,
        Era::Shinshinto,
        Era::Shinsaku,
    ];

    /// Stable identifier used in selections and permalinks.
    pub fn id(self) -> &'static str {
        match self {
            Era::Kofun => "kofun",
            Era::Nara => "nara",
            Era::Heian => "heian",
            Era::Kamakura => "kamakura",
            Era::Nanbokucho => "nanbokucho",
            Era::Muromachi => "muromachi",
            Era::Momoyama => "momoyama",
            Era::Shinto => "shinto",
            Era::Shinshinto => "shinshinto",
            Era::Shinsaku => "shinsaku",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Era::Kofun => "Kofun",
            Era::Nara => "Nara",
            Era::Heian => "Heian",
            Era::Kamakura => "Kamakura",
            Era::Nanbokucho => "Nanbokucho",
            Era::Muromachi => "Muromachi",
            Era::Momoyama => "Momoyama",
            Era::Shinto => "Shinto",
            Era::Shinshinto => "Shinshinto",
            Era::Shinsaku => "Shinsaku",
        }
    }

    /// Inclusive year range.
    pub fn years(self) -> RangeInclusive<u32> {
        match self {
            Era::Kofun => 0..=709,
            Era::Nara => 710..=793,
            Era::Heian => 794..=1184,
            Era::Kamakura => 1185..=1332,
            Era::Nanbokucho => 1333..=1391,
            Era::Muromachi => 1392..=1596,
            Era::Momoyama => 1573..=1596,
            Era::Shinto => 1597..=1780,
            Era::Shinshinto => 1781..=1876,
            Era::Shinsaku => 1877..=2100,
        }
    }

    /// Lowercase keywords that name this era in free text.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Era::Kofun => &[
                "kofun",
                "5th century",
                "6th century",
                "5-6th century",
                "late 6th century",
            ],
            Era::Nara => &["nara", "7th century", "late 7th century", "8th century"],
            Era::Heian => &["heian"],
            Era::Kamakura => &["kamakura"],
            Era::Nanbokucho => &["nanbokucho"],
            Era::Muromachi => &["muromachi"],
            Era::Momoyama => &["momoyama"],
            Era::Shinto => &["shinto", "edo"],
            Era::Shinshinto => &["shinshinto"],
            Era::Shinsaku => &["shinsaku", "meiji", "taisho", "showa", "heisei", "reiwa"],
        }
    }

    pub fn from_id(id: &str) -> Option<Era> {
        Era::ALL.into_iter().find(|era| era.id() == id)
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Era {
    type Err = MeikanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Era::from_id(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| MeikanError::UnknownPeriod(s.to_string()))
    }
}

/// Pull a year out of the start of a period string.
///
/// `"1326-1328"` → 1326, `"13XX"` → 1350. Anything else, and a literal year
/// zero, yields `None`.
pub fn extract_year(text: &str) -> Option<u32> {
    let bytes = text.as_bytes();
    let lead_digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let year = if lead_digits >= 4 {
        text[..4].parse::<u32>().ok()?
    } else if lead_digits == 2
        && bytes.len() >= 4
        && bytes[2..4].eq_ignore_ascii_case(b"XX")
    {
        text[..2].parse::<u32>().ok()? * 100 + 50
    } else {
        return None;
    };
    (year != 0).then_some(year)
}

/// Eras whose range contains `year`, in chronological order.
pub fn eras_for_year(year: u32) -> impl Iterator<Item = Era> {
    Era::ALL
        .into_iter()
        .filter(move |era| era.years().contains(&year))
}

/// Eras named by keywords anywhere in the text.
pub fn eras_for_name(text: &str) -> impl Iterator<Item = Era> {
    let lower = text.to_lowercase();
    Era::ALL
        .into_iter()
        .filter(move |era| era.keywords().iter().any(|kw| lower.contains(kw)))
}

/// Resolve a period string to every era it refers to.
///
/// Empty, `"NA"`, and `"UNKNO"` resolve to nothing. Year eras come first,
/// then keyword eras, each era at most once.
pub fn get_sword_periods(text: &str) -> Vec<Era> {
    if text.is_empty() || UNKNOWN_PERIODS.contains(&text) {
        return Vec::new();
    }
    let mut eras: Vec<Era> = Vec::new();
    let by_year = extract_year(text).into_iter().flat_map(eras_for_year);
    for era in by_year.chain(eras_for_name(text)) {
        if !eras.contains(&era) {
            eras.push(era);
        }
    }
    eras
}

/// Does a period string satisfy a selection of era ids?
///
/// An empty selection accepts everything. Otherwise the text must resolve to
/// at least one era and one of them must be selected.
pub fn matches_period_filter<S: AsRef<str>>(text: &str, selected: &[S]) -> bool {
    if selected.is_empty() {
        return true;
    }
    get_sword_periods(text)
        .into_iter()
        .any(|era| selected.iter().any(|id| id.as_ref() == era.id()))
}
