//! Tab-delimited edge-list loading
//!
//! Each line holds `node1<TAB>node2<TAB>weight`. Lines are trimmed before
//! splitting, so leading or trailing whitespace around the record is ignored.
//! By default lines that do not have exactly three fields are skipped without
//! comment, and lines with a non-integer weight are skipped with a warning.
//! [`LoadOptions::strict`] turns both into a [`LoadError`].
//!
//! # Example
//!
//! ```
//! use gir_core::loader::{self, LoadOptions};
//!
//! let input = "A\tB\t1\nB\tC\t2\nnot a record\n";
//! let report = loader::load_graph_from_reader(input.as_bytes(), &LoadOptions::default()).unwrap();
//!
//! assert_eq!(report.records, 2);
//! assert_eq!(report.skipped, 1);
//! assert!(report.graph.has_node("C"));
//! ```

use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{LoadError, RecordError};
use crate::graph::{Edge, Graph, Weight};

/// Loader settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject malformed lines instead of skipping them
    pub strict: bool,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// A loaded graph plus counters describing the input
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub graph: Graph,
    /// Lines turned into edges
    pub records: usize,
    /// Non-blank lines that were skipped as malformed
    pub skipped: usize,
}

/// Parse one edge-list line into an edge record
pub fn parse_record(line: &str) -> Result<Edge, RecordError> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    let [a, b, weight] = fields.as_slice() else {
        return Err(RecordError::FieldCount(fields.len()));
    };

    let weight: Weight = weight
        .trim()
        .parse()
        .map_err(|_| RecordError::InvalidWeight(weight.to_string()))?;

    Ok(Edge::new(*a, *b, weight))
}

/// Build a graph from any buffered reader of edge-list lines
pub fn load_graph_from_reader<R: BufRead>(
    reader: R,
    options: &LoadOptions,
) -> anyhow::Result<LoadReport> {
    let mut graph = Graph::new();
    let mut records = 0;
    let mut skipped = 0;

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_number))?;

        match parse_record(&line) {
            Ok(Edge { a, b, weight }) => {
                graph.insert_edge(a, b, weight);
                records += 1;
            }
            Err(reason) if options.strict && !line.trim().is_empty() => {
                return Err(LoadError::MalformedRecord {
                    line: line_number,
                    reason,
                }
                .into());
            }
            Err(RecordError::FieldCount(_)) => {
                if !line.trim().is_empty() {
                    skipped += 1;
                }
            }
            Err(reason @ RecordError::InvalidWeight(_)) => {
                warn!(line = line_number, %reason, "Skipping edge record");
                skipped += 1;
            }
        }
    }

    debug!(
        records,
        skipped,
        nodes = graph.node_count(),
        "Loaded edge list"
    );

    Ok(LoadReport {
        graph,
        records,
        skipped,
    })
}

/// Build a graph from a tab-delimited edge-list file
pub fn load_graph_from_file(path: &Path, options: &LoadOptions) -> anyhow::Result<LoadReport> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open edge list: {}", path.display()))?;

    load_graph_from_reader(BufReader::new(file), options)
        .with_context(|| format!("Failed to load edge list: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(input: &str) -> LoadReport {
        load_graph_from_reader(input.as_bytes(), &LoadOptions::default()).unwrap()
    }

    #[test]
    fn test_parse_record() {
        assert_eq!(parse_record("A\tB\t3"), Ok(Edge::new("A", "B", 3)));
        assert_eq!(parse_record("  A\tB\t3 \n"), Ok(Edge::new("A", "B", 3)));
        assert_eq!(parse_record("A\tB\t-4"), Ok(Edge::new("A", "B", -4)));
    }

    #[test]
    fn test_parse_record_field_count() {
        assert_eq!(parse_record("A\tB"), Err(RecordError::FieldCount(2)));
        assert_eq!(parse_record("A\tB\t1\t2"), Err(RecordError::FieldCount(4)));
        assert_eq!(parse_record(""), Err(RecordError::FieldCount(1)));
        assert_eq!(parse_record("A B 1"), Err(RecordError::FieldCount(1)));
    }

    #[test]
    fn test_parse_record_invalid_weight() {
        assert_eq!(
            parse_record("A\tB\t1.5"),
            Err(RecordError::InvalidWeight("1.5".to_string()))
        );
        assert!(parse_record("A\tB\theavy").is_err());
    }

    #[test]
    fn test_keeps_spaces_inside_node_names() {
        let report = load("protein kinase\tTP53\t4\n");

        assert!(report.graph.has_node("protein kinase"));
        assert!(report.graph.has_node("TP53"));
    }

    #[test]
    fn test_malformed_lines_do_not_touch_graph() {
        let report = load("A\tB\t1\nX\tY\nP\tQ\t2\t3\nB\tC\t2\n");

        assert_eq!(report.records, 2);
        assert_eq!(report.skipped, 2);
        for node in ["X", "Y", "P", "Q"] {
            assert!(!report.graph.has_node(node));
        }
        assert_eq!(report.graph.node_count(), 3);
        assert_eq!(report.graph.edge_count(), 2);
    }

    #[test]
    fn test_blank_lines_are_not_counted() {
        let report = load("\nA\tB\t1\n\n   \n");

        assert_eq!(report.records, 1);
        assert_eq!(report.skipped, 0);
    }

    #[test]
    fn test_invalid_weight_is_skipped_by_default() {
        let report = load("A\tB\tx\nB\tC\t2\n");

        assert_eq!(report.records, 1);
        assert_eq!(report.skipped, 1);
        assert!(!report.graph.has_node("A"));
    }

    #[test]
    fn test_strict_mode_rejects_malformed_line() {
        let err = load_graph_from_reader("A\tB\t1\nX\tY\n".as_bytes(), &LoadOptions::strict())
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<LoadError>(),
            Some(&LoadError::MalformedRecord {
                line: 2,
                reason: RecordError::FieldCount(2),
            })
        );
    }

    #[test]
    fn test_strict_mode_allows_blank_lines() {
        let report =
            load_graph_from_reader("A\tB\t1\n\n".as_bytes(), &LoadOptions::strict()).unwrap();

        assert_eq!(report.records, 1);
    }

    #[test]
    fn test_missing_file() {
        let err = load_graph_from_file(Path::new("does/not/exist.tsv"), &LoadOptions::default())
            .unwrap_err();

        assert!(err.to_string().contains("does/not/exist.tsv"));
    }
}
