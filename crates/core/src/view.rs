//! Presentation data for graph renderers
//!
//! Converts a [`Graph`] into a deduplicated `petgraph` undirected graph whose
//! nodes carry an `on_path` flag, so a visualizer can lay it out and highlight
//! a shortest path without touching the store's adjacency lists.

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::graph::{Graph, Weight};
use crate::path::ShortestPath;

/// A node as seen by a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewNode<N = String> {
    pub id: N,
    /// Highlight flag: the node lies on the query result
    pub on_path: bool,
}

/// An edge as seen by a renderer, with its hover label (`"A-B: 3"`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewEdge<N = String> {
    pub a: N,
    pub b: N,
    pub weight: Weight,
    pub label: String,
}

/// Renderable snapshot of a graph with an optional highlighted path
#[derive(Debug, Clone)]
pub struct GraphView<N = String> {
    inner: UnGraph<ViewNode<N>, Weight>,
}

impl<N> GraphView<N>
where
    N: Clone + Eq + Hash + Display,
{
    pub fn new(graph: &Graph<N>, path: Option<&ShortestPath<N>>) -> Self {
        let mut inner = UnGraph::new_undirected();
        let mut index: HashMap<&N, NodeIndex> = HashMap::with_capacity(graph.node_count());

        for id in graph.nodes() {
            let on_path = path.is_some_and(|p| p.contains(id));
            let idx = inner.add_node(ViewNode {
                id: id.clone(),
                on_path,
            });
            index.insert(id, idx);
        }

        for (a, b, weight) in graph.all_edges() {
            if let (Some(&ia), Some(&ib)) = (index.get(a), index.get(b)) {
                inner.add_edge(ia, ib, weight);
            }
        }

        Self { inner }
    }

    /// Nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &ViewNode<N>> {
        self.inner.node_weights()
    }

    /// Nodes flagged as lying on the path
    pub fn highlighted(&self) -> impl Iterator<Item = &N> {
        self.nodes().filter(|n| n.on_path).map(|n| &n.id)
    }

    pub fn edges(&self) -> Vec<ViewEdge<N>> {
        self.inner
            .edge_references()
            .map(|e| {
                let a = &self.inner[e.source()].id;
                let b = &self.inner[e.target()].id;
                ViewEdge {
                    a: a.clone(),
                    b: b.clone(),
                    weight: *e.weight(),
                    label: format!("{}-{}: {}", a, b, e.weight()),
                }
            })
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// The underlying petgraph graph, for layout algorithms
    pub fn as_petgraph(&self) -> &UnGraph<ViewNode<N>, Weight> {
        &self.inner
    }
}
