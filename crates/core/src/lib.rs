//! Graph Interaction Resolver core library
//!
//! Builds an undirected weighted graph from tab-delimited edge records and
//! answers single-source single-target shortest-path queries over it.

pub mod error;
pub mod graph;
pub mod loader;
pub mod path;
pub mod view;

// Re-export commonly used types
pub use error::{GraphError, LoadError, PathError, RecordError};
pub use graph::{build_graph, Edge, Graph, Weight};
pub use loader::{LoadOptions, LoadReport};
pub use path::{shortest_path, ShortestPath};
pub use view::{GraphView, ViewEdge, ViewNode};
