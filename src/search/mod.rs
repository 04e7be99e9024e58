// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Free-text search: parse what the user typed, then test it against records.
//!
//! Parsing and matching are separate so a tag can be parsed once (see
//! [`SearchTag`](crate::types::SearchTag)) and matched against thousands of
//! records.

pub mod matcher;
pub mod parser;

pub use matcher::{matches_search_terms, record_matches_tags, record_matches_terms};
pub use parser::{
    highlight_match, parse_search_input, search_terms_to_tags, validate_search_input,
    validate_search_input_with, HighlightRange, SearchInputError, TagToken, TermSet,
    MAX_SEARCH_INPUT_LENGTH,
};
