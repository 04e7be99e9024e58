// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `manifest.json`: which record files make up a catalog, and engine settings.
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": ["swords-1.json", "swords-2.json"],
//!   "engine": {
//!     "autocomplete": { "minChars": 2, "maxSuggestions": 8 },
//!     "search": { "maxInputLength": 200 },
//!     "memoCapacity": 256
//!   }
//! }
//! ```
//!
//! Everything under `engine` is optional.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MeikanError, Result};
use crate::search::MAX_SEARCH_INPUT_LENGTH;
use crate::suggest::{DEFAULT_MAX_SUGGESTIONS, MIN_QUERY_CHARS};

/// Manifest format this build understands.
pub const MANIFEST_VERSION: u32 = 1;

/// File name of the manifest inside a catalog directory.
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CatalogManifest {
    pub version: u32,
    /// Record files, relative to the catalog directory, in load order.
    pub records: Vec<String>,
    #[serde(default)]
    pub engine: EngineConfig,
}

impl CatalogManifest {
    /// Read and validate `<dir>/manifest.json`.
    pub fn read(dir: &Path) -> Result<Self> {
        let path = dir.join(MANIFEST_FILE);
        let content = fs::read_to_string(&path).map_err(|source| MeikanError::Io {
            path: path.clone(),
            source,
        })?;
        let manifest: CatalogManifest =
            serde_json::from_str(&content).map_err(|source| MeikanError::Json {
                path: path.clone(),
                source,
            })?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != MANIFEST_VERSION {
            return Err(MeikanError::Manifest(format!(
                "unsupported version {} (expected {})",
                self.version, MANIFEST_VERSION
            )));
        }
        if self.records.is_empty() {
            return Err(MeikanError::Manifest("no record files listed".to_string()));
        }
        self.engine.validate()
    }

    /// Absolute paths of the record files.
    pub fn record_paths(&self, dir: &Path) -> Vec<PathBuf> {
        self.records.iter().map(|file| dir.join(file)).collect()
    }
}

/// Tunables for search, autocomplete, and memoization.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub autocomplete: AutocompleteConfig,
    pub search: SearchConfig,
    pub memo_capacity: MemoCapacity,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        if self.autocomplete.max_suggestions == 0 {
            return Err(MeikanError::Manifest(
                "engine.autocomplete.maxSuggestions must be at least 1".to_string(),
            ));
        }
        if self.search.max_input_length == 0 {
            return Err(MeikanError::Manifest(
                "engine.search.maxInputLength must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AutocompleteConfig {
    pub min_chars: usize,
    pub max_suggestions: usize,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            min_chars: MIN_QUERY_CHARS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    pub max_input_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_input_length: MAX_SEARCH_INPUT_LENGTH,
        }
    }
}

/// Maximum memoized facet-count snapshots. Zero disables memoization.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct MemoCapacity(pub usize);

impl Default for MemoCapacity {
    fn default() -> Self {
        MemoCapacity(256)
    }
}
