// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term matching against a single field value.
//!
//! Unquoted words are plain case-insensitive substrings. Quoted phrases must
//! sit between token boundaries, and the boundary sets are deliberately
//! asymmetric:
//!
//! ```text
//! leading:   start-of-text  whitespace  ,  :  ;  (  [  {
//! trailing:  end-of-text    whitespace  ,  :  ;  )  ]  }  .
//! ```
//!
//! So `"Juyo 11"` matches `"Juyo 11."` and `"(Juyo 11)"` but not `"Juyo 110"`.
//!
//! # Certification exclusions
//!
//! Papers nest: a Tokubetsu Juyo blade is not a Juyo blade, and a Juyo
//! Bunkazai is not a plain Bunkazai. A quoted phrase starting with `juyo` or
//! `hozon` fails if the value contains `tokubetsu <phrase>` on boundaries, and
//! one starting with `bunkazai` fails if the value contains `juyo <phrase>`.
//! The exclusion wins even when an unmodified occurrence also exists.

use super::parser::TermSet;
use crate::types::SwordRecord;

fn is_leading_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ':' | ';' | '(' | '[' | '{')
}

fn is_trailing_boundary(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ':' | ';' | ')' | ']' | '}' | '.')
}

/// Does `before` (the text preceding a match) end on a leading boundary?
fn ends_on_leading_boundary(before: &str) -> bool {
    before.chars().next_back().map_or(true, is_leading_boundary)
}

/// Find `term` in `haystack` with a trailing boundary after it and, before
/// it, either a leading boundary or `modifier` + one whitespace char + a
/// leading boundary. Both inputs must already be lowercase.
///
/// Overlapping occurrences are all considered.
fn find_bounded(haystack: &str, term: &str, modifier: Option<&str>) -> bool {
    if term.is_empty() {
        return false;
    }
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(term) {
        let start = from + offset;
        let end = start + term.len();
        let trailing_ok = haystack[end..].chars().next().map_or(true, is_trailing_boundary);
        if trailing_ok {
            let before = &haystack[..start];
            let leading_ok = match modifier {
                None => ends_on_leading_boundary(before),
                Some(modifier) => {
                    let mut chars = before.chars();
                    match chars.next_back() {
                        Some(c) if c.is_whitespace() => chars
                            .as_str()
                            .strip_suffix(modifier)
                            .is_some_and(ends_on_leading_boundary),
                        _ => false,
                    }
                }
            };
            if leading_ok {
                return true;
            }
        }
        // Step one character so overlapping occurrences are seen.
        let step = haystack[start..].chars().next().map_or(1, char::len_utf8);
        from = start + step;
    }
    false
}

/// The modifier that disqualifies a quoted phrase, if any.
fn exclusion_modifier(term: &str) -> Option<&'static str> {
    if term.starts_with("juyo") || term.starts_with("hozon") {
        Some("tokubetsu")
    } else if term.starts_with("bunkazai") {
        Some("juyo")
    } else {
        None
    }
}

fn matches_quoted(lower_value: &str, term: &str) -> bool {
    let term = term.to_lowercase();
    if let Some(modifier) = exclusion_modifier(&term) {
        if find_bounded(lower_value, &term, Some(modifier)) {
            return false;
        }
    }
    find_bounded(lower_value, &term, None)
}

/// Does one value satisfy every term in the set?
///
/// Empty values never match, even against an empty term set.
pub fn matches_search_terms(value: &str, terms: &TermSet) -> bool {
    if value.is_empty() {
        return false;
    }
    let lower_value = value.to_lowercase();
    terms.quoted.iter().all(|term| matches_quoted(&lower_value, term))
        && terms
            .unquoted
            .iter()
            .all(|term| lower_value.contains(&term.to_lowercase()))
}

/// Does some searchable field of the record satisfy the whole term set?
///
/// All terms have to land in the same field.
pub fn record_matches_terms(record: &SwordRecord, terms: &TermSet) -> bool {
    record
        .searchable_values()
        .any(|value| matches_search_terms(value, terms))
}

/// AND over tags: every tag must match some field of the record.
pub fn record_matches_tags<'a, I>(record: &SwordRecord, tags: I) -> bool
where
    I: IntoIterator<Item = &'a TermSet>,
{
    tags.into_iter()
        .all(|terms| record_matches_terms(record, terms))
}
