//! Single-source single-target shortest paths (Dijkstra)
//!
//! The traversal is label-setting: each round finalizes the reached, not yet
//! visited node with the smallest recorded distance, relaxes its neighbors,
//! and stops once that node is the target. The minimum is taken from a binary
//! heap with lazy deletion of stale entries. Among equal-weight alternatives
//! the chosen path is unspecified; only the total weight is guaranteed.

use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

use crate::error::PathError;
use crate::graph::{Graph, Weight};

/// A minimum-weight path, start to end inclusive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath<N = String> {
    path: Vec<N>,
    total_weight: Weight,
}

impl<N: PartialEq> ShortestPath<N> {
    /// Nodes along the path; never empty
    pub fn nodes(&self) -> &[N] {
        &self.path
    }

    /// Sum of edge weights between consecutive nodes
    pub fn total_weight(&self) -> Weight {
        self.total_weight
    }

    /// Whether `node` lies on the path (used to highlight it when rendering)
    pub fn contains(&self, node: &N) -> bool {
        self.path.contains(node)
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len() - 1
    }

    pub fn start(&self) -> &N {
        &self.path[0]
    }

    pub fn end(&self) -> &N {
        &self.path[self.path.len() - 1]
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.path
    }
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest distance first
struct Candidate<N> {
    distance: Weight,
    node: N,
}

impl<N> PartialEq for Candidate<N> {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
    }
}

impl<N> Eq for Candidate<N> {}

impl<N> Ord for Candidate<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap
        other.distance.cmp(&self.distance)
    }
}

impl<N> PartialOrd for Candidate<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the minimum-total-weight path from `start` to `end`
///
/// Returns [`PathError::NodeNotFound`] when either endpoint is missing from
/// the graph and [`PathError::NoPathExists`] when the reachable frontier is
/// exhausted before `end` is finalized. `start == end` yields `[start]` with
/// weight 0.
///
/// Weights are assumed non-negative. Finalized nodes are never relabeled, so
/// negative weights cannot make the query loop, but the result is then not
/// guaranteed to be minimal.
///
/// # Example
/// ```
/// use gir_core::{build_graph, shortest_path, Edge};
///
/// let graph = build_graph(vec![
///     Edge::new("A", "B", 1),
///     Edge::new("B", "C", 2),
///     Edge::new("A", "C", 10),
/// ]);
/// let found = shortest_path(&graph, &"A".to_string(), &"C".to_string()).unwrap();
/// assert_eq!(found.nodes(), ["A", "B", "C"]);
/// assert_eq!(found.total_weight(), 3);
/// ```
pub fn shortest_path<N>(
    graph: &Graph<N>,
    start: &N,
    end: &N,
) -> Result<ShortestPath<N>, PathError<N>>
where
    N: Clone + Eq + Hash + Debug,
{
    debug!(?start, ?end, "Shortest path query");

    if !graph.has_node(start) || !graph.has_node(end) {
        return Err(PathError::NodeNotFound {
            start: start.clone(),
            end: end.clone(),
        });
    }

    // node -> (predecessor, best known distance)
    let mut labels: HashMap<N, (Option<N>, Weight)> = HashMap::new();
    labels.insert(start.clone(), (None, 0));
    let mut visited: HashSet<N> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    let mut current = start.clone();
    let mut current_distance: Weight = 0;

    while current != *end {
        visited.insert(current.clone());

        let neighbors = graph.neighbors(&current).map_err(PathError::Inconsistent)?;
        for next in neighbors {
            if visited.contains(next) {
                continue;
            }
            let weight = graph
                .weight_of(&current, next)
                .map_err(PathError::Inconsistent)?;
            let candidate = current_distance.saturating_add(weight);

            let improves = match labels.get(next) {
                None => true,
                Some(&(_, known)) => candidate < known,
            };
            if improves {
                labels.insert(next.clone(), (Some(current.clone()), candidate));
                frontier.push(Candidate {
                    distance: candidate,
                    node: next.clone(),
                });
            }
        }

        loop {
            let Some(Candidate { distance, node }) = frontier.pop() else {
                debug!(visited = visited.len(), "Frontier exhausted");
                return Err(PathError::NoPathExists {
                    start: start.clone(),
                    end: end.clone(),
                });
            };
            let stale = visited.contains(&node)
                || labels.get(&node).map(|&(_, known)| known) != Some(distance);
            if !stale {
                current = node;
                current_distance = distance;
                break;
            }
        }
    }

    let mut path = vec![end.clone()];
    let mut cursor = end;
    while let Some((Some(prev), _)) = labels.get(cursor) {
        path.push(prev.clone());
        cursor = prev;
    }
    path.reverse();

    debug!(
        total_weight = current_distance,
        hops = path.len() - 1,
        visited = visited.len(),
        "Shortest path found"
    );

    Ok(ShortestPath {
        path,
        total_weight: current_distance,
    })
}
