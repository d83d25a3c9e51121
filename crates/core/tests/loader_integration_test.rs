//! Integration tests for loading edge lists from disk and querying them
//!
//! Uses the fixture at `tests/test-fixtures/interactions.tsv`, which mixes
//! well-formed records with malformed lines that must be skipped.

use gir_core::loader::{self, LoadOptions};
use gir_core::{shortest_path, LoadError, PathError, RecordError};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

const FIXTURE: &str = "tests/test-fixtures/interactions.tsv";

fn s(v: &str) -> String {
    v.to_string()
}

#[test]
fn test_fixture_skips_malformed_lines() {
    let fixture_path = Path::new(FIXTURE);
    assert!(fixture_path.exists(), "Fixture file should exist");

    let report = loader::load_graph_from_file(fixture_path, &LoadOptions::default()).unwrap();

    assert_eq!(report.records, 6, "Should load exactly 6 edges");
    assert_eq!(report.skipped, 3, "Should skip 3 malformed lines");
    assert_eq!(report.graph.node_count(), 7);
    assert!(!report.graph.has_node("BAX"), "2-field line must not create nodes");
    assert!(!report.graph.has_node("BCL2"), "4-field line must not create nodes");
}

#[test]
fn test_fixture_queries() {
    let report = loader::load_graph_from_file(Path::new(FIXTURE), &LoadOptions::default()).unwrap();
    let graph = &report.graph;

    let found = shortest_path(graph, &s("TP53"), &s("CDK2")).unwrap();
    assert_eq!(found.nodes(), ["TP53", "MDM2", "CDKN1A", "CDK2"]);
    assert_eq!(found.total_weight(), 7);

    assert_eq!(
        shortest_path(graph, &s("TP53"), &s("BRCA1")),
        Err(PathError::NoPathExists {
            start: s("TP53"),
            end: s("BRCA1"),
        })
    );
    assert_eq!(
        shortest_path(graph, &s("TP53"), &s("BAX")),
        Err(PathError::NodeNotFound {
            start: s("TP53"),
            end: s("BAX"),
        })
    );
}

#[test]
fn test_fixture_strict_mode_fails_on_first_malformed_line() {
    let err = loader::load_graph_from_file(Path::new(FIXTURE), &LoadOptions::strict()).unwrap_err();

    let load_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<LoadError>())
        .expect("strict load should fail with a LoadError");
    assert_eq!(
        load_error,
        &LoadError::MalformedRecord {
            line: 6,
            reason: RecordError::FieldCount(1),
        }
    );
}

#[test]
fn test_load_from_temp_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("edges.lst");

    let mut file = File::create(&path).unwrap();
    file.write_all(b"A\tB\t5\nB\tC\t5\nA\tC\t1\n").unwrap();

    let report = loader::load_graph_from_file(&path, &LoadOptions::default()).unwrap();
    let found = shortest_path(&report.graph, &s("A"), &s("C")).unwrap();

    assert_eq!(found.nodes(), ["A", "C"]);
    assert_eq!(found.total_weight(), 1);
}

#[test]
fn test_empty_file_gives_empty_graph() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.txt");
    File::create(&path).unwrap();

    let report = loader::load_graph_from_file(&path, &LoadOptions::default()).unwrap();

    assert!(report.graph.is_empty());
    assert_eq!(report.records, 0);
    assert!(matches!(
        shortest_path(&report.graph, &s("A"), &s("B")),
        Err(PathError::NodeNotFound { .. })
    ));
}
