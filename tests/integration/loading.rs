//! Loading catalog directories: manifest handling, file formats, enrichment.

use std::fs;
use std::path::Path;

use meikan::{load_catalog, MeikanError};
use tempfile::TempDir;

use crate::common::{FIXTURE_CATALOG, FIXTURE_RECORDS};

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

const ONE_RECORD: &str = r#"[{"Index": "1", "Smith": "Masamune", "School": "Soshu", "Type": "Katana"}]"#;

#[test]
fn fixture_loads_in_manifest_order() {
    let catalog = &*FIXTURE_CATALOG;
    assert_eq!(catalog.len(), FIXTURE_RECORDS);
    let order: Vec<&str> = catalog.records().iter().map(|r| r.index.as_str()).collect();
    let expected: Vec<String> = (1..=FIXTURE_RECORDS).map(|i| i.to_string()).collect();
    assert_eq!(order, expected);
}

#[test]
fn fixture_meito_are_enriched() {
    let meito: Vec<(&str, &str)> = FIXTURE_CATALOG
        .records()
        .iter()
        .filter_map(|r| r.meito_name.as_deref().map(|name| (r.index.as_str(), name)))
        .collect();
    assert_eq!(meito, vec![("1", "Fudo Masamune"), ("8", "Kawanakajima")]);
}

#[test]
fn fixture_numeric_lengths_become_text() {
    let record = &FIXTURE_CATALOG.records()[2];
    assert_eq!(record.index, "3");
    assert_eq!(record.nagasa.parse::<f64>().unwrap(), 25.0);
}

#[test]
fn fixture_engine_settings_are_read() {
    let config = FIXTURE_CATALOG.config();
    assert_eq!(config.memo_capacity.0, 64);
    assert_eq!(config.autocomplete.min_chars, 2);
    assert_eq!(config.autocomplete.max_suggestions, 8);
}

#[test]
fn envelope_and_array_files_mix() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "manifest.json", r#"{"version": 1, "records": ["a.json", "b.json"]}"#);
    write(dir.path(), "a.json", ONE_RECORD);
    write(
        dir.path(),
        "b.json",
        r#"{"swords": [{"Index": "2", "Smith": "Sadamune", "Authentication": "Juyo 40"}], "total": 1}"#,
    );

    let catalog = load_catalog(dir.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.records()[1].smith, "Sadamune");
    assert_eq!(catalog.records()[1].authentication, "Juyo 40");
}

#[test]
fn unsupported_manifest_version_is_rejected() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "manifest.json", r#"{"version": 2, "records": ["a.json"]}"#);
    write(dir.path(), "a.json", ONE_RECORD);

    let err = load_catalog(dir.path()).unwrap_err();
    assert!(matches!(err, MeikanError::Manifest(_)), "got {err:?}");
    assert!(err.to_string().contains("unsupported version 2"));
}

#[test]
fn missing_files_are_io_errors() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(load_catalog(dir.path()), Err(MeikanError::Io { .. })));

    write(dir.path(), "manifest.json", r#"{"version": 1, "records": ["gone.json"]}"#);
    let err = load_catalog(dir.path()).unwrap_err();
    match err {
        MeikanError::Io { path, .. } => assert!(path.ends_with("gone.json")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn malformed_record_file_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "manifest.json", r#"{"version": 1, "records": ["a.json"]}"#);
    write(dir.path(), "a.json", "[{\"Index\": ");
    assert!(matches!(load_catalog(dir.path()), Err(MeikanError::Json { .. })));
}
