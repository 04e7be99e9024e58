// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Meito: famous named swords.
//!
//! The catalog has no dedicated column for them. A blade is a meito when its
//! description carries a marker like `"Meito – Heshikiri Hasebe 圧切長谷部, ..."`
//! (en dash or hyphen). The name runs to the next comma.

use regex::Regex;
use std::sync::LazyLock;

use crate::types::{is_placeholder, SwordRecord};

static MEITO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Meito\s*[–-]\s*([^,]+)").unwrap_or_else(|e| unreachable!("meito regex: {e}"))
});

static ROMAJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z\s'-]+)").unwrap_or_else(|e| unreachable!("romaji regex: {e}"))
});

/// The meito name in a description, trimmed, if there is one.
///
/// Placeholder names (`NA`, `XX`) don't count.
pub fn extract_meito(description: &str) -> Option<String> {
    let caps = MEITO_RE.captures(description)?;
    let name = caps.get(1)?.as_str().trim();
    (!is_placeholder(name)).then(|| name.to_string())
}

pub fn is_meito(description: &str) -> bool {
    extract_meito(description).is_some()
}

/// The leading Latin-script part of the meito name.
///
/// `"Heshikiri Hasebe 圧切長谷部"` → `"Heshikiri Hasebe"`. Falls back to the full
/// name when it doesn't start with Latin letters.
pub fn meito_romaji_name(description: &str) -> Option<String> {
    let name = extract_meito(description)?;
    let romaji = ROMAJI_RE
        .captures(&name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|s| !s.is_empty());
    Some(romaji.unwrap_or(name))
}

/// Derive `meito_name` for every record from its description.
///
/// Any previous `meito_name` is replaced, so enrichment is idempotent.
pub fn enrich_with_meito(records: Vec<SwordRecord>) -> Vec<SwordRecord> {
    records
        .into_iter()
        .map(|mut record| {
            record.meito_name = extract_meito(&record.description);
            record
        })
        .collect()
}

/// Records that are meito.
pub fn filter_meito(records: &[SwordRecord]) -> Vec<&SwordRecord> {
    records.iter().filter(|r| r.is_meito()).collect()
}
