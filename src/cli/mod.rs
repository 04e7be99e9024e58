// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the meikan command-line interface.
//!
//! Five subcommands: `search` lists visible records, `suggest` runs
//! autocomplete, `facets` prints cascading option counts, `period` resolves a
//! period string, and `inspect` summarises a catalog's facet index.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use meikan::{Era, FacetSelection, LengthRange, MediaFilter};

#[derive(Parser)]
#[command(
    name = "meikan",
    about = "Search, cascading filters, and autocomplete over a sword catalog",
    version
)]
pub struct Cli {
    /// Log at debug level (RUST_LOG still wins when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List records visible under a query
    Search {
        /// Catalog directory containing manifest.json
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        query: QueryArgs,

        /// Maximum number of records to print
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Print matching records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Autocomplete suggestions for a partial query
    Suggest {
        /// Catalog directory containing manifest.json
        #[arg(short, long)]
        input: PathBuf,

        /// Text typed so far
        query: String,

        /// Maximum suggestions (defaults to the manifest setting)
        #[arg(short, long)]
        max: Option<usize>,

        /// Print suggestion groups as JSON
        #[arg(long)]
        json: bool,
    },

    /// Cascading option counts for every facet under a selection
    Facets {
        /// Catalog directory containing manifest.json
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        query: QueryArgs,

        /// Print counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a period string to eras
    Period {
        /// Period text, e.g. "1580", "13XX", "Late Kamakura"
        text: String,
    },

    /// Summarise a catalog's facet index
    Inspect {
        /// Catalog directory containing manifest.json
        #[arg(short, long)]
        input: PathBuf,

        /// Values shown per category
        #[arg(short, long, default_value = "5")]
        top: usize,
    },
}

/// Search tags and filter flags shared by `search` and `facets`.
///
/// A `--permalink` query string is applied first; explicit flags override it.
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
    /// Search tag (repeatable; all tags must match)
    #[arg(short = 'q', long = "query")]
    pub tags: Vec<String>,

    #[arg(long)]
    pub school: Option<String>,

    #[arg(long)]
    pub smith: Option<String>,

    #[arg(long = "type")]
    pub kind: Option<String>,

    #[arg(long)]
    pub authentication: Option<String>,

    #[arg(long)]
    pub province: Option<String>,

    /// Era id (repeatable), e.g. kamakura
    #[arg(long = "period")]
    pub periods: Vec<Era>,

    /// Minimum blade length in cm
    #[arg(long)]
    pub min_length: Option<f64>,

    /// Maximum blade length in cm
    #[arg(long)]
    pub max_length: Option<f64>,

    /// with, without, or any
    #[arg(long)]
    pub media: Option<MediaFilter>,

    /// Start from a permalink query string
    #[arg(long)]
    pub permalink: Option<String>,
}

impl QueryArgs {
    /// Layer the flags over a selection decoded from a permalink.
    pub fn apply(&self, selection: &mut FacetSelection) {
        let facets = [
            (meikan::Facet::School, &self.school),
            (meikan::Facet::Smith, &self.smith),
            (meikan::Facet::Type, &self.kind),
            (meikan::Facet::Authentication, &self.authentication),
            (meikan::Facet::Province, &self.province),
        ];
        for (facet, value) in facets {
            if let Some(value) = value {
                selection.set(facet, value.clone());
            }
        }
        if !self.periods.is_empty() {
            selection.periods = self.periods.iter().map(|era| era.id().to_string()).collect();
        }
        if self.min_length.is_some() || self.max_length.is_some() {
            selection.length = LengthRange::new(
                self.min_length.or(selection.length.min),
                self.max_length.or(selection.length.max),
            );
        }
        if let Some(media) = self.media {
            selection.has_media = media;
        }
    }
}
