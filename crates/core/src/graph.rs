//! Undirected weighted graph store
//!
//! Adjacency is kept as an insertion-ordered map from node to its neighbor
//! sequence, and weights live in a separate map keyed by ordered node pair.
//! Both are filled symmetrically by [`Graph::insert_edge`]. Re-inserting an
//! edge overwrites the pair's weight but appends to the neighbor lists again,
//! so a neighbor can appear more than once.

use indexmap::{Equivalent, IndexMap};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use crate::error::GraphError;

/// Edge weight. Signed because input weights are not checked for negativity.
pub type Weight = i64;

/// An undirected edge between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N = String> {
    pub a: N,
    pub b: N,
    pub weight: Weight,
}

impl<N> Edge<N> {
    pub fn new(a: impl Into<N>, b: impl Into<N>, weight: Weight) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
            weight,
        }
    }
}

/// Borrowed lookup key for the weight map, hashed exactly like `(N, N)`
struct PairRef<'a, N>(&'a N, &'a N);

impl<N: Hash> Hash for PairRef<'_, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
        self.1.hash(state);
    }
}

impl<N: Eq> Equivalent<(N, N)> for PairRef<'_, N> {
    fn equivalent(&self, key: &(N, N)) -> bool {
        *self.0 == key.0 && *self.1 == key.1
    }
}

/// The graph store
///
/// Built once through [`Graph::insert_edge`] (or [`build_graph`]) and then
/// only read. Queries never mutate it, so a finished store can be shared
/// behind `&` across threads when `N: Sync`.
#[derive(Debug, Clone)]
pub struct Graph<N = String> {
    adjacency: IndexMap<N, Vec<N>>,
    weights: IndexMap<(N, N), Weight>,
}

impl<N> Graph<N>
where
    N: Clone + Eq + Hash,
{
    /// Create a new empty graph
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
            weights: IndexMap::new(),
        }
    }

    /// Add an undirected, weighted edge
    ///
    /// Appends each endpoint to the other's neighbor list and sets the weight
    /// for both orientations, replacing any earlier weight for the pair.
    pub fn insert_edge(&mut self, a: N, b: N, weight: Weight) {
        self.adjacency.entry(a.clone()).or_default().push(b.clone());
        self.adjacency.entry(b.clone()).or_default().push(a.clone());
        self.weights.insert((a.clone(), b.clone()), weight);
        self.weights.insert((b, a), weight);
    }

    /// True iff `node` was an endpoint of at least one inserted edge
    pub fn has_node<Q>(&self, node: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<N>,
    {
        self.adjacency.contains_key(node)
    }

    /// Neighbor sequence of `node` in insertion order, duplicates included
    pub fn neighbors(&self, node: &N) -> Result<&[N], GraphError<N>> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| GraphError::UnknownNode(node.clone()))
    }

    /// Weight last inserted for the ordered pair `(from, to)`
    pub fn weight_of(&self, from: &N, to: &N) -> Result<Weight, GraphError<N>> {
        self.weights
            .get(&PairRef(from, to))
            .copied()
            .ok_or_else(|| GraphError::MissingWeight {
                from: from.clone(),
                to: to.clone(),
            })
    }

    /// Iterate over all nodes in the order they were first seen
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get the number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.all_edges().count()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Every distinct unordered edge with its weight
    ///
    /// Each pair is reported once, in the orientation it was first inserted,
    /// no matter how many times it was inserted.
    pub fn all_edges(&self) -> impl Iterator<Item = (&N, &N, Weight)> {
        let mut seen: HashSet<(&N, &N)> = HashSet::new();
        self.weights.iter().filter_map(move |((a, b), &weight)| {
            if seen.contains(&(b, a)) || !seen.insert((a, b)) {
                return None;
            }
            Some((a, b, weight))
        })
    }
}

impl<N> Default for Graph<N>
where
    N: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Extend<Edge<N>> for Graph<N>
where
    N: Clone + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = Edge<N>>>(&mut self, records: I) {
        for Edge { a, b, weight } in records {
            self.insert_edge(a, b, weight);
        }
    }
}

impl<N> FromIterator<Edge<N>> for Graph<N>
where
    N: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = Edge<N>>>(records: I) -> Self {
        let mut graph = Self::new();
        graph.extend(records);
        graph
    }
}

/// Build a graph store from a sequence of edge records
pub fn build_graph<N, I>(records: I) -> Graph<N>
where
    N: Clone + Eq + Hash,
    I: IntoIterator<Item = Edge<N>>,
{
    records.into_iter().collect()
}
