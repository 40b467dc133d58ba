//! Directed graph over an adjacency list, with breadth-first queries.
//!
//! Vertices are opaque `Eq + Hash + Clone` values. A vertex that never appeared
//! as an edge source simply has no neighbors; nothing is ever rejected.

mod traversal;

use std::collections::HashMap;
use std::hash::Hash;

/// Adjacency-list directed graph.
///
/// Neighbor sequences keep insertion order, and repeated edges and self-loops
/// are stored as given. The graph is only ever grown through [`Graph::add_edge`].
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: HashMap<V, Vec<V>>,
    /// Source vertices in first-insertion order, for deterministic listing.
    sources: Vec<V>,
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            sources: Vec::new(),
        }
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `v` to the neighbor sequence of `u`, creating it if absent.
    pub fn add_edge(&mut self, u: V, v: V) {
        match self.adjacency.get_mut(&u) {
            Some(neighbors) => neighbors.push(v),
            None => {
                self.sources.push(u.clone());
                self.adjacency.insert(u, vec![v]);
            }
        }
    }

    /// Neighbors of `vertex` in insertion order.
    ///
    /// A vertex without an entry yields an empty slice; the lookup never inserts.
    pub fn neighbors(&self, vertex: &V) -> &[V] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate `(source, neighbors)` pairs, sources in first-insertion order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.sources
            .iter()
            .map(move |source| (source, self.neighbors(source)))
    }

    /// Number of vertices that have an adjacency entry.
    pub fn vertex_count(&self) -> usize {
        self.sources.len()
    }

    /// Total number of stored edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<V: Eq + Hash + Clone> Extend<(V, V)> for Graph<V> {
    fn extend<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) {
        for (u, v) in edges {
            self.add_edge(u, v);
        }
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, V)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, V)>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}
