// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading record files, in parallel when the `parallel` feature is on.
//!
//! Files are independent, so they're read and parsed with `par_iter()`.
//! Rayon's ordered `collect` keeps manifest order, so the record sequence is
//! the same whether or not the feature is enabled.

use serde::Deserialize;
use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use super::CatalogManifest;
use crate::error::{MeikanError, Result};
use crate::types::SwordRecord;

/// The two shapes a record file may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordFile {
    List(Vec<SwordRecord>),
    Envelope { swords: Vec<SwordRecord> },
}

impl RecordFile {
    fn into_records(self) -> Vec<SwordRecord> {
        match self {
            RecordFile::List(records) | RecordFile::Envelope { swords: records } => records,
        }
    }
}

/// Read one record file: a JSON array, or an object with a `swords` array.
pub fn read_record_file(path: &Path) -> Result<Vec<SwordRecord>> {
    let content = fs::read_to_string(path).map_err(|source| MeikanError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str::<RecordFile>(&content)
        .map(RecordFile::into_records)
        .map_err(|source| MeikanError::Json {
            path: path.to_path_buf(),
            source,
        })
}

/// Load every record file listed in the manifest, in manifest order.
#[cfg(feature = "parallel")]
pub fn load_records(dir: &Path, manifest: &CatalogManifest) -> Result<Vec<SwordRecord>> {
    let chunks = manifest
        .record_paths(dir)
        .par_iter()
        .map(|path| read_record_file(path))
        .collect::<Result<Vec<Vec<SwordRecord>>>>()?;
    Ok(chunks.into_iter().flatten().collect())
}

/// Load every record file listed in the manifest, in manifest order.
#[cfg(not(feature = "parallel"))]
pub fn load_records(dir: &Path, manifest: &CatalogManifest) -> Result<Vec<SwordRecord>> {
    let mut records = Vec::new();
    for path in manifest.record_paths(dir) {
        records.extend(read_record_file(&path)?);
    }
    Ok(records)
}

/// [`load_records`] with a progress bar advanced per file.
#[cfg(feature = "parallel")]
pub fn load_records_with_progress(
    dir: &Path,
    manifest: &CatalogManifest,
    progress: &ProgressBar,
) -> Result<Vec<SwordRecord>> {
    let counter = AtomicUsize::new(0);
    let total = manifest.records.len();

    let chunks = manifest
        .record_paths(dir)
        .par_iter()
        .map(|path| {
            let records = read_record_file(path)?;
            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            progress.set_message(format!("{}/{}", count, total));
            Ok(records)
        })
        .collect::<Result<Vec<Vec<SwordRecord>>>>()?;
    Ok(chunks.into_iter().flatten().collect())
}
