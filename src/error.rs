// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the fallible edges of the crate.
//!
//! The search and facet functions themselves never fail: they take strings and
//! return values. Errors only come from the boundaries - reading catalog files,
//! parsing manifests, and turning user-typed flags into typed selections.

use std::path::PathBuf;
use thiserror::Error;

use crate::search::SearchInputError;

/// Result type alias using [`MeikanError`].
pub type Result<T> = std::result::Result<T, MeikanError>;

/// Main error type for meikan.
#[derive(Debug, Error)]
pub enum MeikanError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid manifest: {0}")]
    Manifest(String),

    #[error("unknown facet '{0}' (expected school, smith, type, authentication or province)")]
    UnknownFacet(String),

    #[error("unknown period '{0}'")]
    UnknownPeriod(String),

    #[error("invalid media filter '{0}' (expected any, with or without)")]
    InvalidMediaFilter(String),

    #[error("invalid search input: {0}")]
    InvalidSearchInput(#[from] SearchInputError),
}
