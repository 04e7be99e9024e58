// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning typed text into search terms.
//!
//! The grammar is small: a double-quoted run is a phrase, everything else
//! splits on whitespace.
//!
//! ```text
//! Masamune "Juyo 11" tanto
//! ^^^^^^^^ ^^^^^^^^^ ^^^^^
//! unquoted  quoted   unquoted
//! ```
//!
//! An unterminated quote is not an error at this layer. The regex falls back
//! to the whitespace-delimited token, quote character included. Validation
//! ([`validate_search_input`]) is a separate, stricter step the caller runs
//! before accepting user input.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

/// Longest search input accepted by [`validate_search_input`], in characters.
pub const MAX_SEARCH_INPUT_LENGTH: usize = 200;

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"]*)"|(\S+)"#).unwrap_or_else(|e| unreachable!("token regex: {e}"))
});

/// The parsed shape of one search string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TermSet {
    /// Phrases that must match on token boundaries.
    pub quoted: Vec<String>,
    /// Words that match as substrings.
    pub unquoted: Vec<String>,
}

impl TermSet {
    pub fn is_empty(&self) -> bool {
        self.quoted.is_empty() && self.unquoted.is_empty()
    }

    /// Total number of terms.
    pub fn len(&self) -> usize {
        self.quoted.len() + self.unquoted.len()
    }
}

/// Split a search string into quoted phrases and unquoted words.
///
/// Quoted phrases are trimmed; whitespace-only phrases are dropped. Order of
/// appearance is kept within each list.
pub fn parse_search_input(input: &str) -> TermSet {
    let mut terms = TermSet::default();
    for caps in TOKEN_RE.captures_iter(input) {
        if let Some(phrase) = caps.get(1) {
            let phrase = phrase.as_str().trim();
            if !phrase.is_empty() {
                terms.quoted.push(phrase.to_string());
            }
        } else if let Some(word) = caps.get(2) {
            terms.unquoted.push(word.as_str().to_string());
        }
    }
    terms
}

/// Why a search string was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchInputError {
    #[error("Unclosed quote - please add closing quote or remove the opening quote")]
    UnclosedQuote,

    #[error("Empty quotes are not allowed - please add text between quotes or remove them")]
    EmptyQuotes,

    #[error("Search input is too long (max {max} characters)")]
    TooLong { max: usize },
}

/// Check a search string before accepting it.
///
/// Empty input is valid. Checks run in order: quote balance, empty quotes,
/// then length.
pub fn validate_search_input(input: &str) -> Result<(), SearchInputError> {
    validate_search_input_with(input, MAX_SEARCH_INPUT_LENGTH)
}

/// [`validate_search_input`] with a configurable length cap.
pub fn validate_search_input_with(input: &str, max_len: usize) -> Result<(), SearchInputError> {
    if input.is_empty() {
        return Ok(());
    }
    if input.matches('"').count() % 2 != 0 {
        return Err(SearchInputError::UnclosedQuote);
    }
    if input.contains("\"\"") {
        return Err(SearchInputError::EmptyQuotes);
    }
    if input.chars().count() > max_len {
        return Err(SearchInputError::TooLong { max: max_len });
    }
    Ok(())
}

/// A term rendered back as a removable chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagToken {
    pub text: String,
    pub is_quoted: bool,
    pub display_text: String,
}

/// Render parsed terms as tag tokens, quoted ones first.
pub fn search_terms_to_tags(terms: &TermSet) -> Vec<TagToken> {
    let quoted = terms.quoted.iter().map(|term| TagToken {
        text: term.clone(),
        is_quoted: true,
        display_text: format!("\"{term}\""),
    });
    let unquoted = terms.unquoted.iter().map(|term| TagToken {
        text: term.clone(),
        is_quoted: false,
        display_text: term.clone(),
    });
    quoted.chain(unquoted).collect()
}

/// Character span of a highlighted match, end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
}

/// Locate the first case-insensitive occurrence of `query` in `text`.
///
/// Offsets count characters of `text` itself, not bytes and not characters
/// of its lowercase form, so they can slice display strings with macrons
/// (`Kōtetsu`) or case-expanding letters (`İ`) directly.
pub fn highlight_match(text: &str, query: &str) -> Option<HighlightRange> {
    if text.is_empty() || query.is_empty() {
        return None;
    }
    let needle = query.to_lowercase();
    let chars: Vec<char> = text.chars().collect();
    (0..chars.len()).find_map(|start| {
        let mut folded = String::new();
        for (offset, c) in chars[start..].iter().enumerate() {
            folded.extend(c.to_lowercase());
            if folded == needle {
                return Some(HighlightRange {
                    start,
                    end: start + offset + 1,
                });
            }
            if !needle.starts_with(&folded) {
                return None;
            }
        }
        None
    })
}
