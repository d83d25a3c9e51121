//! Error types for graph lookups, path queries and edge-list loading

use thiserror::Error;

/// Errors returned by [`Graph`](crate::Graph) lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<N> {
    /// The node was never an endpoint of an inserted edge
    #[error("Unknown node: {0}")]
    UnknownNode(N),

    /// No weight was recorded for the ordered pair
    #[error("No weight recorded for edge {from} -> {to}")]
    MissingWeight { from: N, to: N },
}

/// Outcome of a failed shortest-path query
///
/// `NodeNotFound` and `NoPathExists` are the two modeled failures callers are
/// expected to branch on. `Inconsistent` signals a broken adjacency/weight
/// invariant and cannot be produced by a store built through `insert_edge`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError<N> {
    /// One or both endpoints are absent (both are always named)
    #[error("One or both nodes not found: {start}, {end}")]
    NodeNotFound { start: N, end: N },

    /// Both endpoints exist but no sequence of edges connects them
    #[error("There is no path between {start} and {end}")]
    NoPathExists { start: N, end: N },

    /// Adjacency and weight data disagree
    #[error("Graph is inconsistent: {0}")]
    Inconsistent(GraphError<N>),
}

/// Why a single edge-list line could not be turned into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("expected 3 tab-separated fields, found {0}")]
    FieldCount(usize),

    #[error("weight '{0}' is not an integer")]
    InvalidWeight(String),
}

/// Errors raised while loading an edge list in strict mode
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord {
        line: usize,
        #[source]
        reason: RecordError,
    },
}
