// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete: ranked, grouped completions for a partial query.
//!
//! Every entry of every [`FacetIndex`] category is scored against the query
//! (see [`crate::scoring`]). The best `max` across all categories survive,
//! then they are grouped under their category heading and the groups are put
//! in display-priority order.
//!
//! ```text
//! "masa"  ──►  SMITHS          Masamune (50)   Masa (5)
//!              SCHOOLS         Masamune-den (3)
//!              FAMOUS SWORDS   Fudo Masamune (1)
//! ```
//!
//! [`SuggestionCursor`] is the keyboard-navigation state a dropdown keeps on
//! top of the groups.

use serde::Serialize;

use crate::index::{Category, FacetIndex};
use crate::scoring::ranking::{rank_candidates, ScoredCandidate};
use crate::scoring::relevance_score;
use crate::search::{highlight_match, HighlightRange};

/// Queries shorter than this (in characters) get no suggestions.
pub const MIN_QUERY_CHARS: usize = 2;

/// Default number of suggestions across all groups.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

/// One completion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub count: usize,
    /// Where the query occurs in `text`, in characters.
    pub highlight: Option<HighlightRange>,
}

impl Suggestion {
    /// Render `text` with the highlighted span wrapped in `open`/`close`.
    pub fn highlighted(&self, open: &str, close: &str) -> String {
        format_highlighted(&self.text, self.highlight, open, close)
    }
}

/// Completions under one category heading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionGroup {
    pub category: Category,
    pub suggestions: Vec<Suggestion>,
}

impl SuggestionGroup {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    pub fn priority(&self) -> u8 {
        self.category.priority()
    }
}

/// Suggestions for `query` with the default minimum query length.
pub fn generate_suggestions(query: &str, index: &FacetIndex, max: usize) -> Vec<SuggestionGroup> {
    generate_suggestions_with(query, index, max, MIN_QUERY_CHARS)
}

/// Suggestions for `query`, returning nothing below `min_chars` characters.
pub fn generate_suggestions_with(
    query: &str,
    index: &FacetIndex,
    max: usize,
    min_chars: usize,
) -> Vec<SuggestionGroup> {
    if query.chars().count() < min_chars {
        return Vec::new();
    }

    let mut candidates: Vec<ScoredCandidate<'_>> = index
        .iter()
        .flat_map(|(category, entries)| {
            entries.iter().filter_map(move |entry| {
                let score = relevance_score(&entry.value, query, entry.count);
                (score > 0.0).then_some(ScoredCandidate {
                    category,
                    text: &entry.value,
                    count: entry.count,
                    score,
                })
            })
        })
        .collect();

    rank_candidates(&mut candidates);
    candidates.truncate(max);

    let mut groups: Vec<SuggestionGroup> = Vec::new();
    for candidate in candidates {
        let suggestion = Suggestion {
            text: candidate.text.to_string(),
            count: candidate.count,
            highlight: highlight_match(candidate.text, query),
        };
        match groups.iter_mut().find(|g| g.category == candidate.category) {
            Some(group) => group.suggestions.push(suggestion),
            None => groups.push(SuggestionGroup {
                category: candidate.category,
                suggestions: vec![suggestion],
            }),
        }
    }
    groups.sort_by_key(SuggestionGroup::priority);
    crate::contracts::check_suggestions_well_formed(&groups, max);
    groups
}

/// Total suggestions across all groups.
pub fn count_total_suggestions(groups: &[SuggestionGroup]) -> usize {
    groups.iter().map(|g| g.suggestions.len()).sum()
}

/// The suggestion at a flat position (group by group, top to bottom).
pub fn suggestion_at(groups: &[SuggestionGroup], flat_index: usize) -> Option<(Category, &Suggestion)> {
    groups
        .iter()
        .flat_map(|g| g.suggestions.iter().map(move |s| (g.category, s)))
        .nth(flat_index)
}

/// Wrap the `[start, end)` character span of `text` in markers.
pub fn format_highlighted(
    text: &str,
    range: Option<HighlightRange>,
    open: &str,
    close: &str,
) -> String {
    let Some(HighlightRange { start, end }) = range else {
        return text.to_string();
    };
    let mut out = String::with_capacity(text.len() + open.len() + close.len());
    for (i, c) in text.chars().enumerate() {
        if i == start {
            out.push_str(open);
        }
        if i == end {
            out.push_str(close);
        }
        out.push(c);
    }
    let len = text.chars().count();
    if start >= len {
        out.push_str(open);
    }
    if end >= len {
        out.push_str(close);
    }
    out
}

/// Keyboard selection over a list of suggestion groups.
///
/// Nothing is selected initially. Moving down from nothing selects the first
/// suggestion, moving up selects the last; both wrap around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestionCursor {
    total: usize,
    selected: Option<usize>,
}

impl SuggestionCursor {
    pub fn new(groups: &[SuggestionGroup]) -> Self {
        Self {
            total: count_total_suggestions(groups),
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn next(&mut self) -> Option<usize> {
        if self.total == 0 {
            return None;
        }
        self.selected = Some(match self.selected {
            Some(i) if i + 1 < self.total => i + 1,
            _ => 0,
        });
        self.selected
    }

    pub fn previous(&mut self) -> Option<usize> {
        if self.total == 0 {
            return None;
        }
        self.selected = Some(match self.selected {
            Some(i) if i > 0 => i - 1,
            _ => self.total - 1,
        });
        self.selected
    }

    /// Clear the selection.
    pub fn reset(&mut self) {
        self.selected = None;
    }

    /// Text of the selected suggestion.
    pub fn selected_text<'a>(&self, groups: &'a [SuggestionGroup]) -> Option<&'a str> {
        let index = self.selected?;
        suggestion_at(groups, index).map(|(_, s)| s.text.as_str())
    }
}
