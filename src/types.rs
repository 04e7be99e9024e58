// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog query.
//!
//! A [`SwordRecord`] is one row of the catalog. Everything else here describes
//! what the user asked for: which facet values they picked ([`FacetSelection`]),
//! which free-text tags they submitted ([`SearchTag`]), and which advanced
//! OR-groups they assembled ([`FilterGroup`]).
//!
//! # Invariants
//!
//! - Records are read-only. No function in this crate mutates a record slice.
//! - An empty string in a [`FacetSelection`] means "unconstrained", never
//!   "match records whose field is empty".
//! - [`Field::SEARCHABLE`] is the complete list of searchable fields. Free-text
//!   search looks at exactly these and nothing else.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::MeikanError;
use crate::search::parser::{parse_search_input, TermSet};

// =============================================================================
// FIELDS
// =============================================================================

/// A named column of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Index,
    School,
    Smith,
    Mei,
    Type,
    Nagasa,
    Sori,
    Moto,
    Saki,
    Nakago,
    Ana,
    Length,
    Hori,
    Authentication,
    Province,
    Period,
    References,
    Description,
    Attachments,
    MediaAttachments,
    MeitoName,
}

impl Field {
    /// Every declared field, in column order.
    pub const ALL: [Field; 21] = [
        Field::Index,
        Field::School,
        Field::Smith,
        Field::Mei,
        Field::Type,
        Field::Nagasa,
        Field::Sori,
        Field::Moto,
        Field::Saki,
        Field::Nakago,
        Field::Ana,
        Field::Length,
        Field::Hori,
        Field::Authentication,
        Field::Province,
        Field::Period,
        Field::References,
        Field::Description,
        Field::Attachments,
        Field::MediaAttachments,
        Field::MeitoName,
    ];

    /// Fields free-text search looks at. Currently every declared field.
    pub const SEARCHABLE: [Field; 21] = Field::ALL;

    /// JSON key of the field.
    pub fn key(self) -> &'static str {
        match self {
            Field::Index => "Index",
            Field::School => "School",
            Field::Smith => "Smith",
            Field::Mei => "Mei",
            Field::Type => "Type",
            Field::Nagasa => "Nagasa",
            Field::Sori => "Sori",
            Field::Moto => "Moto",
            Field::Saki => "Saki",
            Field::Nakago => "Nakago",
            Field::Ana => "Ana",
            Field::Length => "Length",
            Field::Hori => "Hori",
            Field::Authentication => "Authentication",
            Field::Province => "Province",
            Field::Period => "Period",
            Field::References => "References",
            Field::Description => "Description",
            Field::Attachments => "Attachments",
            Field::MediaAttachments => "MediaAttachments",
            Field::MeitoName => "meitoName",
        }
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// One catalog item.
///
/// Values are kept as the strings the data source delivered. Numeric columns
/// (`Nagasa`, `Sori`, ...) stay decimal strings and are only parsed when a
/// range filter asks for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct SwordRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub index: String,
    #[serde(deserialize_with = "lenient_string")]
    pub school: String,
    #[serde(deserialize_with = "lenient_string")]
    pub smith: String,
    #[serde(deserialize_with = "lenient_string")]
    pub mei: String,
    #[serde(rename = "Type", deserialize_with = "lenient_string")]
    pub kind: String,
    #[serde(deserialize_with = "lenient_string")]
    pub nagasa: String,
    #[serde(deserialize_with = "lenient_string")]
    pub sori: String,
    #[serde(deserialize_with = "lenient_string")]
    pub moto: String,
    #[serde(deserialize_with = "lenient_string")]
    pub saki: String,
    #[serde(deserialize_with = "lenient_string")]
    pub nakago: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ana: String,
    #[serde(deserialize_with = "lenient_string")]
    pub length: String,
    #[serde(deserialize_with = "lenient_string")]
    pub hori: String,
    #[serde(deserialize_with = "lenient_string")]
    pub authentication: String,
    #[serde(deserialize_with = "lenient_string")]
    pub province: String,
    #[serde(deserialize_with = "lenient_string")]
    pub period: String,
    #[serde(deserialize_with = "lenient_string")]
    pub references: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub attachments: String,
    #[serde(deserialize_with = "lenient_string")]
    pub media_attachments: String,
    /// Name of the famous sword, when the description carries a Meito marker.
    #[serde(
        rename = "meitoName",
        deserialize_with = "lenient_opt_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub meito_name: Option<String>,
}

impl SwordRecord {
    /// Value of a field; absent values read as `""`.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Index => &self.index,
            Field::School => &self.school,
            Field::Smith => &self.smith,
            Field::Mei => &self.mei,
            Field::Type => &self.kind,
            Field::Nagasa => &self.nagasa,
            Field::Sori => &self.sori,
            Field::Moto => &self.moto,
            Field::Saki => &self.saki,
            Field::Nakago => &self.nakago,
            Field::Ana => &self.ana,
            Field::Length => &self.length,
            Field::Hori => &self.hori,
            Field::Authentication => &self.authentication,
            Field::Province => &self.province,
            Field::Period => &self.period,
            Field::References => &self.references,
            Field::Description => &self.description,
            Field::Attachments => &self.attachments,
            Field::MediaAttachments => &self.media_attachments,
            Field::MeitoName => self.meito_name.as_deref().unwrap_or(""),
        }
    }

    /// All searchable values, in [`Field::SEARCHABLE`] order.
    pub fn searchable_values(&self) -> impl Iterator<Item = &str> {
        Field::SEARCHABLE.iter().map(move |field| self.get(*field))
    }

    pub fn is_meito(&self) -> bool {
        self.meito_name.is_some()
    }
}

fn json_to_string(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Accept strings, numbers, booleans, null, and embedded JSON for a string column.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(json_to_string)
}

fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Value::deserialize(deserializer).map(json_to_string)?;
    Ok(if text.is_empty() { None } else { Some(text) })
}

/// Placeholder values the data source uses for "unknown".
pub const PLACEHOLDERS: [&str; 2] = ["NA", "XX"];

/// True for values that carry no information: empty, `NA`, or `XX`.
pub fn is_placeholder(value: &str) -> bool {
    value.is_empty() || PLACEHOLDERS.contains(&value)
}

// =============================================================================
// FACETS
// =============================================================================

/// A single-valued dropdown facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facet {
    School,
    Smith,
    Type,
    Authentication,
    Province,
}

impl Facet {
    pub const ALL: [Facet; 5] = [
        Facet::School,
        Facet::Smith,
        Facet::Type,
        Facet::Authentication,
        Facet::Province,
    ];

    /// The record column this facet reads.
    pub fn field(self) -> Field {
        match self {
            Facet::School => Field::School,
            Facet::Smith => Field::Smith,
            Facet::Type => Field::Type,
            Facet::Authentication => Field::Authentication,
            Facet::Province => Field::Province,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Facet::School => "school",
            Facet::Smith => "smith",
            Facet::Type => "type",
            Facet::Authentication => "authentication",
            Facet::Province => "province",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Facet {
    type Err = MeikanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Facet::ALL
            .into_iter()
            .find(|facet| facet.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MeikanError::UnknownFacet(s.to_string()))
    }
}

/// Tri-state filter on whether a record has media attachments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaFilter {
    #[default]
    #[serde(rename = "")]
    Any,
    #[serde(rename = "true")]
    With,
    #[serde(rename = "false")]
    Without,
}

impl MediaFilter {
    /// Wire value used in permalinks and JSON.
    pub fn as_param(self) -> &'static str {
        match self {
            MediaFilter::Any => "",
            MediaFilter::With => "true",
            MediaFilter::Without => "false",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "" => Some(MediaFilter::Any),
            "true" => Some(MediaFilter::With),
            "false" => Some(MediaFilter::Without),
            _ => None,
        }
    }

    pub fn is_any(self) -> bool {
        self == MediaFilter::Any
    }

    /// Does a record with (or without) media pass this filter?
    pub fn accepts(self, has_media: bool) -> bool {
        match self {
            MediaFilter::Any => true,
            MediaFilter::With => has_media,
            MediaFilter::Without => !has_media,
        }
    }
}

impl FromStr for MediaFilter {
    type Err = MeikanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "any" => Ok(MediaFilter::Any),
            "with" | "true" | "yes" => Ok(MediaFilter::With),
            "without" | "false" | "no" => Ok(MediaFilter::Without),
            _ => Err(MeikanError::InvalidMediaFilter(s.to_string())),
        }
    }
}

/// Inclusive blade-length range in centimetres. `None` leaves a side open.
///
/// Equality and hashing compare the bounds bit for bit, so a range is always
/// equal to itself and can key a map.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LengthRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl LengthRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Does a raw length value fall inside the range?
    ///
    /// An unbounded range accepts everything. A bounded range rejects values
    /// that don't parse as a number, including empty ones.
    pub fn contains_raw(&self, raw: &str) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(value) = parse_length(raw) else {
            return false;
        };
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

impl PartialEq for LengthRange {
    fn eq(&self, other: &Self) -> bool {
        self.min.map(f64::to_bits) == other.min.map(f64::to_bits)
            && self.max.map(f64::to_bits) == other.max.map(f64::to_bits)
    }
}

impl Eq for LengthRange {}

impl Hash for LengthRange {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.min.map(f64::to_bits).hash(state);
        self.max.map(f64::to_bits).hash(state);
    }
}

/// Parse the leading decimal number of a measurement string.
///
/// Accepts an optional sign, digits, an optional fraction and exponent, and
/// ignores trailing text (`"70.6 cm"` reads as `70.6`). Returns `None` when no
/// number is present.
pub fn parse_length(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    text[..end].parse::<f64>().ok()
}

/// The simple (non-grouped) filter state: one value per facet plus media,
/// length, and a set of periods.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacetSelection {
    pub school: String,
    pub smith: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub authentication: String,
    pub province: String,
    pub has_media: MediaFilter,
    pub length: LengthRange,
    /// Era ids; a record matches if it resolves to any of them.
    pub periods: Vec<String>,
}

impl FacetSelection {
    pub fn get(&self, facet: Facet) -> &str {
        match facet {
            Facet::School => &self.school,
            Facet::Smith => &self.smith,
            Facet::Type => &self.kind,
            Facet::Authentication => &self.authentication,
            Facet::Province => &self.province,
        }
    }

    pub fn set(&mut self, facet: Facet, value: impl Into<String>) {
        let slot = match facet {
            Facet::School => &mut self.school,
            Facet::Smith => &mut self.smith,
            Facet::Type => &mut self.kind,
            Facet::Authentication => &mut self.authentication,
            Facet::Province => &mut self.province,
        };
        *slot = value.into();
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, facet: Facet, value: impl Into<String>) -> Self {
        self.set(facet, value);
        self
    }

    /// True when nothing at all is selected.
    pub fn is_blank(&self) -> bool {
        Facet::ALL.iter().all(|facet| self.get(*facet).is_empty())
            && self.has_media.is_any()
            && self.length.is_unbounded()
            && self.periods.is_empty()
    }
}

impl Hash for FacetSelection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for facet in Facet::ALL {
            self.get(facet).hash(state);
        }
        self.has_media.hash(state);
        self.length.hash(state);
        self.periods.hash(state);
    }
}

// =============================================================================
// SEARCH TAGS AND GROUPS
// =============================================================================

/// One submitted search string, kept alongside its parsed terms.
///
/// The active query is the AND of all tags: a record must match every tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct SearchTag {
    text: String,
    terms: TermSet,
}

impl SearchTag {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let terms = parse_search_input(&text);
        Self { text, terms }
    }

    /// The raw text the user submitted.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn terms(&self) -> &TermSet {
        &self.terms
    }
}

impl From<String> for SearchTag {
    fn from(text: String) -> Self {
        SearchTag::new(text)
    }
}

impl From<&str> for SearchTag {
    fn from(text: &str) -> Self {
        SearchTag::new(text)
    }
}

impl From<SearchTag> for String {
    fn from(tag: SearchTag) -> Self {
        tag.text
    }
}

/// An advanced filter group: its own tags AND its own selection.
///
/// Groups are OR'ed with each other. A group with nothing in it is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterGroup {
    pub search_tags: Vec<SearchTag>,
    #[serde(flatten)]
    pub selection: FacetSelection,
}

impl FilterGroup {
    pub fn is_empty(&self) -> bool {
        self.search_tags.is_empty() && self.selection.is_blank()
    }
}
