//! Tests for manifest output and destination resolution

use std::fs;

use capscan::{Analyzer, AnalyzerOptions};

fn analyzer_writing_to(destination: std::path::PathBuf) -> Analyzer {
    Analyzer::with_options(AnalyzerOptions {
        output_destination: Some(destination),
        base_dir: None,
    })
}

// ============================================================================
// Manifest contents
// ============================================================================

#[test]
fn test_manifest_bytes_match_recording_order() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("features.json");

    let report = analyzer_writing_to(destination.clone())
        .analyze_source("var seed = []; xs.flat();")
        .unwrap();

    assert_eq!(report.capabilities, vec!["Array", "Array.prototype.flat"]);
    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        "[\n    \"Array\",\n    \"Array.prototype.flat\"\n]"
    );
}

#[test]
fn test_source_without_capabilities_writes_an_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("features.json");

    let report = analyzer_writing_to(destination.clone())
        .analyze_source("var x = y;")
        .unwrap();

    assert!(report.capabilities.is_empty());
    assert_eq!(fs::read_to_string(&destination).unwrap(), "[]");
}

#[test]
fn test_reanalysis_overwrites_the_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let destination = dir.path().join("features.json");
    let analyzer = analyzer_writing_to(destination.clone());

    analyzer.analyze_source("new Promise(go);").unwrap();
    analyzer.analyze_source("var tags = [];").unwrap();

    assert_eq!(
        fs::read_to_string(&destination).unwrap(),
        "[\n    \"Array\"\n]"
    );
}

// ============================================================================
// Destination resolution
// ============================================================================

#[test]
fn test_relative_destination_joins_the_base_dir() {
    let dir = tempfile::tempdir().unwrap();

    let analyzer = Analyzer::with_options(AnalyzerOptions {
        output_destination: Some("caps.json".into()),
        base_dir: Some(dir.path().to_path_buf()),
    });
    let report = analyzer.analyze_source("new Proxy(target, traps);").unwrap();

    assert_eq!(report.manifest_path, dir.path().join("caps.json"));
    assert_eq!(
        fs::read_to_string(dir.path().join("caps.json")).unwrap(),
        "[\n    \"Proxy\"\n]"
    );
}

#[test]
fn test_unset_destination_uses_the_default_name() {
    let dir = tempfile::tempdir().unwrap();

    let analyzer = Analyzer::with_options(AnalyzerOptions {
        output_destination: None,
        base_dir: Some(dir.path().to_path_buf()),
    });
    let report = analyzer.analyze_source("new WeakSet(refs);").unwrap();

    assert_eq!(report.manifest_path, dir.path().join("features.json"));
    assert!(dir.path().join("features.json").exists());
}
