// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a catalog directory: manifest, record files, meito enrichment.

mod manifest;
mod parallel;

pub use manifest::*;
pub use parallel::*;

use std::path::Path;
use tracing::info;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::meito::enrich_with_meito;
use crate::types::SwordRecord;

fn finish(records: Vec<SwordRecord>, manifest: CatalogManifest) -> Catalog {
    let records = enrich_with_meito(records);
    let meito = records.iter().filter(|r| r.is_meito()).count();
    info!("loaded {} records ({} meito)", records.len(), meito);
    Catalog::with_config(records, manifest.engine)
}

/// Load `<dir>/manifest.json` and every record file it lists.
pub fn load_catalog(dir: &Path) -> Result<Catalog> {
    let manifest = CatalogManifest::read(dir)?;
    let records = load_records(dir, &manifest)?;
    Ok(finish(records, manifest))
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// [`load_catalog`] with a terminal progress bar over the record files.
#[cfg(feature = "parallel")]
pub fn load_catalog_with_progress(dir: &Path) -> Result<Catalog> {
    let manifest = CatalogManifest::read(dir)?;

    let progress = ProgressBar::new(manifest.records.len() as u64);
    progress.set_style(create_progress_style());
    progress.set_prefix("Loading");
    progress.set_message("records...");

    let records = load_records_with_progress(dir, &manifest, &progress)?;
    progress.finish_with_message(format!("loaded {} records", records.len()));
    Ok(finish(records, manifest))
}

/// [`load_catalog`]; progress bars need the `parallel` feature.
#[cfg(not(feature = "parallel"))]
pub fn load_catalog_with_progress(dir: &Path) -> Result<Catalog> {
    load_catalog(dir)
}
