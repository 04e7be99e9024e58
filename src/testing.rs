// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::types::{FacetSelection, Field, FilterGroup, SearchTag, SwordRecord};

/// A record with smith, school, and type set; every other field empty.
pub fn make_record(smith: &str, school: &str, kind: &str) -> SwordRecord {
    SwordRecord {
        smith: smith.to_string(),
        school: school.to_string(),
        kind: kind.to_string(),
        ..SwordRecord::default()
    }
}

/// A record built from `(field, value)` pairs.
pub fn make_record_with(fields: &[(Field, &str)]) -> SwordRecord {
    let mut record = SwordRecord::default();
    for &(field, value) in fields {
        set_field(&mut record, field, value);
    }
    record
}

/// Overwrite one field of a record.
pub fn set_field(record: &mut SwordRecord, field: Field, value: &str) {
    let value = value.to_string();
    match field {
        Field::Index => record.index = value,
        Field::School => record.school = value,
        Field::Smith => record.smith = value,
        Field::Mei => record.mei = value,
        Field::Type => record.kind = value,
        Field::Nagasa => record.nagasa = value,
        Field::Sori => record.sori = value,
        Field::Moto => record.moto = value,
        Field::Saki => record.saki = value,
        Field::Nakago => record.nakago = value,
        Field::Ana => record.ana = value,
        Field::Length => record.length = value,
        Field::Hori => record.hori = value,
        Field::Authentication => record.authentication = value,
        Field::Province => record.province = value,
        Field::Period => record.period = value,
        Field::References => record.references = value,
        Field::Description => record.description = value,
        Field::Attachments => record.attachments = value,
        Field::MediaAttachments => record.media_attachments = value,
        Field::MeitoName => record.meito_name = Some(value).filter(|v| !v.is_empty()),
    }
}

/// A group holding only search tags.
pub fn tag_group(tags: &[&str]) -> FilterGroup {
    FilterGroup {
        search_tags: tags.iter().map(|t| SearchTag::new(*t)).collect(),
        selection: FacetSelection::default(),
    }
}

/// A group holding only a selection.
pub fn selection_group(selection: FacetSelection) -> FilterGroup {
    FilterGroup {
        search_tags: Vec::new(),
        selection,
    }
}

/// A small catalog that covers every facet, tiers, periods, meito, and media.
pub fn sample_catalog() -> Vec<SwordRecord> {
    vec![
        make_record_with(&[
            (Field::Index, "1"),
            (Field::Smith, "Masamune"),
            (Field::School, "Soshu"),
            (Field::Type, "Katana"),
            (Field::Nagasa, "70.6"),
            (Field::Authentication, "Tokubetsu Juyo 12"),
            (Field::Province, "Sagami"),
            (Field::Period, "1320"),
            (Field::Description, "Meito – Fudo Masamune, a celebrated blade"),
            (
                Field::MediaAttachments,
                r#"[{"url": "https://img/1.jpg", "thumbnailUrl": "https://img/1t.jpg", "mimeType": "image/jpeg", "isCoverImage": true}]"#,
            ),
        ]),
        make_record_with(&[
            (Field::Index, "2"),
            (Field::Smith, "Sadamune"),
            (Field::School, "Soshu"),
            (Field::Type, "Tanto"),
            (Field::Nagasa, "28.2"),
            (Field::Authentication, "Juyo 40"),
            (Field::Province, "Sagami"),
            (Field::Period, "Kamakura"),
        ]),
        make_record_with(&[
            (Field::Index, "3"),
            (Field::Smith, "Sukesada"),
            (Field::School, "Osafune"),
            (Field::Type, "Katana"),
            (Field::Nagasa, "69.0"),
            (Field::Authentication, "Tokubetsu Hozon"),
            (Field::Province, "Bizen"),
            (Field::Period, "1580"),
        ]),
        make_record_with(&[
            (Field::Index, "4"),
            (Field::Smith, "Kotetsu"),
            (Field::School, "Edo"),
            (Field::Type, "Wakizashi"),
            (Field::Nagasa, "NA"),
            (Field::Authentication, "Hozon"),
            (Field::Province, "Musashi"),
            (Field::Period, "Edo"),
            (Field::MediaAttachments, r#"["https://img/4.pdf"]"#),
        ]),
        make_record_with(&[
            (Field::Index, "5"),
            (Field::Smith, "NA"),
            (Field::School, "XX"),
            (Field::Type, "Katana"),
            (Field::Nagasa, "72.1"),
            (Field::Authentication, "NA"),
            (Field::Province, "NA"),
            (Field::Period, "NA"),
        ]),
    ]
}
