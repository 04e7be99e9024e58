//! Record, selection, and tag generators over a small shared vocabulary.
//!
//! The vocabulary is small on purpose so generated selections actually hit
//! generated records.

use meikan::{Era, FacetSelection, FilterGroup, LengthRange, MediaFilter, SearchTag, SwordRecord};
use proptest::prelude::*;

pub const SMITHS: &[&str] = &["Masamune", "Sadamune", "Sukesada", "Kotetsu", "NA"];
pub const SCHOOLS: &[&str] = &["Soshu", "Osafune", "Edo", "XX"];
pub const TYPES: &[&str] = &["Katana", "Tanto", "Tachi", ""];
pub const AUTHS: &[&str] = &["Juyo 12", "Tokubetsu Juyo 3", "Hozon", "Tokubetsu Hozon", "Kokuho", "NA", ""];
pub const PROVINCES: &[&str] = &["Sagami", "Bizen", "Musashi", "NA"];
pub const PERIODS: &[&str] = &["1320", "13XX", "1580", "Edo", "Late Kamakura", "NA", ""];
pub const NAGASA: &[&str] = &["70.1", "28", "72.5 cm", "NA", ""];
pub const MEDIA: &[&str] = &["", "NA", "[]", "[\"https://img.example/a.jpg\"]", "{broken"];
pub const TAG_TEXTS: &[&str] = &["masa", "soshu", "\"Juyo\"", "katana", "kamakura", "1580", "bizen", "\"Tokubetsu Hozon\""];

fn pick(values: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop::sample::select(values).prop_map(str::to_string)
}

fn maybe(values: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), pick(values)]
}

pub fn record() -> impl Strategy<Value = SwordRecord> {
    (
        (pick(SMITHS), pick(SCHOOLS), pick(TYPES), pick(AUTHS)),
        (pick(PROVINCES), pick(PERIODS), pick(NAGASA), pick(MEDIA)),
    )
        .prop_map(
            |((smith, school, kind, authentication), (province, period, nagasa, media))| SwordRecord {
                smith,
                school,
                kind,
                authentication,
                province,
                period,
                nagasa,
                media_attachments: media,
                ..SwordRecord::default()
            },
        )
}

/// Records with unique `Index` values, so result sets can be compared by id.
pub fn records() -> impl Strategy<Value = Vec<SwordRecord>> {
    prop::collection::vec(record(), 0..40).prop_map(|mut records| {
        for (i, record) in records.iter_mut().enumerate() {
            record.index = format!("r{i}");
        }
        records
    })
}

fn media_filter() -> impl Strategy<Value = MediaFilter> {
    prop_oneof![
        Just(MediaFilter::Any),
        Just(MediaFilter::With),
        Just(MediaFilter::Without)
    ]
}

fn length_range() -> impl Strategy<Value = LengthRange> {
    let bound = prop::option::of(prop::sample::select(&[25.0, 60.0, 70.0, 72.5][..]));
    (bound.clone(), bound).prop_map(|(min, max)| LengthRange::new(min, max))
}

fn periods() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(Era::ALL.to_vec(), 0..3)
        .prop_map(|eras| eras.into_iter().map(|era| era.id().to_string()).collect())
}

pub fn selection() -> impl Strategy<Value = FacetSelection> {
    (
        (maybe(SCHOOLS), maybe(SMITHS), maybe(TYPES), maybe(&["Juyo", "Tokubetsu Juyo", "Hozon", "Kokuho"])),
        (maybe(PROVINCES), media_filter(), length_range(), periods()),
    )
        .prop_map(
            |((school, smith, kind, authentication), (province, has_media, length, periods))| FacetSelection {
                school,
                smith,
                kind,
                authentication,
                province,
                has_media,
                length,
                periods,
            },
        )
}

pub fn tag() -> impl Strategy<Value = SearchTag> {
    pick(TAG_TEXTS).prop_map(SearchTag::new)
}

pub fn tags() -> impl Strategy<Value = Vec<SearchTag>> {
    prop::collection::vec(tag(), 0..3)
}

pub fn group() -> impl Strategy<Value = FilterGroup> {
    (tags(), selection()).prop_map(|(search_tags, selection)| FilterGroup {
        search_tags,
        selection,
    })
}
