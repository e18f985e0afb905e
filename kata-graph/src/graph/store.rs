//! Graph Store
//!
//! The store owns the vertex set and the adjacency structure. All mutation
//! goes through `&mut Graph`; the algorithms in the sibling modules only ever
//! borrow it immutably.
//!
//! # Layout
//!
//! A single insertion-ordered map keyed by vertex holds each vertex's
//! outgoing neighbors and their weights. The keys of the outer map are the
//! vertex set. Undirected graphs store every edge twice, once per direction,
//! and every mutation keeps both copies in step.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::vertex::{is_valid_weight, Edge, Vertex};
use crate::error::{Error, Result};

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Construction-time settings for a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Whether edges are one-way.
    pub directed: bool,

    /// Weight used by [`Graph::add_edge`].
    pub default_weight: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

/// Outgoing neighbors of one vertex, mapped to edge weight.
pub(crate) type Neighbors<V> = IndexMap<V, f64>;

/// A weighted graph, directed or undirected.
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    /// Vertex set and adjacency in one: every vertex has an entry.
    adjacency: IndexMap<V, Neighbors<V>>,

    /// Fixed at construction.
    directed: bool,

    default_weight: f64,
}

impl<V: Vertex> Graph<V> {
    /// Create an empty graph with the default weight of 1.0.
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: IndexMap::new(),
            directed,
            default_weight: DEFAULT_WEIGHT,
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Create an empty graph from a config.
    ///
    /// Fails with [`Error::InvalidWeight`] if the default weight is not
    /// strictly positive.
    pub fn with_config(config: GraphConfig) -> Result<Self> {
        if !is_valid_weight(config.default_weight) {
            return Err(Error::InvalidWeight(config.default_weight));
        }
        Ok(Self {
            adjacency: IndexMap::new(),
            directed: config.directed,
            default_weight: config.default_weight,
        })
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Weight applied by [`add_edge`](Self::add_edge).
    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    /// Add a vertex with no edges.
    ///
    /// Returns `false` and leaves the graph untouched if the vertex is
    /// already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        debug!(?vertex, "add vertex");
        self.adjacency.insert(vertex, IndexMap::new());
        true
    }

    /// Check if a vertex exists.
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Remove a vertex and every edge touching it.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<()> {
        if !self.has_vertex(vertex) {
            return Err(Error::vertex_not_found(vertex));
        }

        // Incoming edges live in other vertices' maps, so scan them all.
        for (other, neighbors) in self.adjacency.iter_mut() {
            if other != vertex {
                neighbors.swap_remove(vertex);
            }
        }
        self.adjacency.shift_remove(vertex);

        debug!(?vertex, "remove vertex");
        Ok(())
    }

    /// Add an edge with the graph's default weight.
    pub fn add_edge(&mut self, from: &V, to: &V) -> Result<()> {
        self.add_weighted_edge(from, to, self.default_weight)
    }

    /// Add an edge, overwriting the weight of an existing one.
    ///
    /// Both vertices must exist and the weight must be strictly positive.
    /// In an undirected graph the mirrored edge is written too.
    pub fn add_weighted_edge(&mut self, from: &V, to: &V, weight: f64) -> Result<()> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;
        if !is_valid_weight(weight) {
            return Err(Error::InvalidWeight(weight));
        }

        self.neighbors_mut(from).insert(to.clone(), weight);
        if !self.directed {
            self.neighbors_mut(to).insert(from.clone(), weight);
        }

        debug!(?from, ?to, weight, "add edge");
        Ok(())
    }

    /// Remove an edge.
    ///
    /// In an undirected graph the mirrored edge is removed too.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> Result<()> {
        self.require_vertex(from)?;
        self.require_vertex(to)?;
        if !self.has_edge(from, to) {
            return Err(Error::edge_not_found(from, to));
        }

        self.neighbors_mut(from).swap_remove(to);
        if !self.directed {
            self.neighbors_mut(to).swap_remove(from);
        }

        debug!(?from, ?to, "remove edge");
        Ok(())
    }

    /// Check if an edge exists. Missing endpoints mean no edge.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.adjacency
            .get(from)
            .is_some_and(|neighbors| neighbors.contains_key(to))
    }

    /// Get the weight of an edge.
    pub fn edge_weight(&self, from: &V, to: &V) -> Result<f64> {
        let neighbors = self.require_vertex(from)?;
        self.require_vertex(to)?;
        neighbors
            .get(to)
            .copied()
            .ok_or_else(|| Error::edge_not_found(from, to))
    }

    /// Get the outgoing neighbors of a vertex, sorted.
    pub fn neighbors(&self, vertex: &V) -> Result<Vec<V>> {
        let mut neighbors: Vec<V> = self.require_vertex(vertex)?.keys().cloned().collect();
        neighbors.sort();
        Ok(neighbors)
    }

    /// Get all vertices in insertion order.
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Get all edges, sorted by `(from, to)`.
    ///
    /// Undirected edges are reported once, oriented so that `from <= to`.
    pub fn edges(&self) -> Vec<Edge<V>> {
        let mut edges: Vec<Edge<V>> = self
            .adjacency
            .iter()
            .flat_map(|(from, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |(to, _)| self.directed || from <= *to)
                    .map(move |(to, &weight)| Edge::new(from.clone(), to.clone(), weight))
            })
            .collect();
        edges.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        edges
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges. Undirected edges count once.
    pub fn edge_count(&self) -> usize {
        let stored: usize = self.adjacency.values().map(IndexMap::len).sum();
        if self.directed {
            return stored;
        }

        // Self-loops are stored once, every other undirected edge twice.
        let loops = self
            .adjacency
            .iter()
            .filter(|(vertex, neighbors)| neighbors.contains_key(*vertex))
            .count();
        (stored - loops) / 2 + loops
    }

    /// Sum the edge weights along a sequence of vertices.
    ///
    /// A sequence shorter than two vertices weighs nothing, provided its
    /// vertex exists.
    pub fn path_weight(&self, path: &[V]) -> Result<f64> {
        if let Some(first) = path.first() {
            self.require_vertex(first)?;
        }
        path.windows(2)
            .map(|step| self.edge_weight(&step[0], &step[1]))
            .sum()
    }

    /// Look up a vertex's neighbor map or fail with `VertexNotFound`.
    pub(crate) fn require_vertex(&self, vertex: &V) -> Result<&Neighbors<V>> {
        self.adjacency
            .get(vertex)
            .ok_or_else(|| Error::vertex_not_found(vertex))
    }

    /// Neighbor map of a vertex known to exist.
    ///
    /// Callers check existence first; an absent vertex yields an empty map.
    pub(crate) fn adjacent(&self, vertex: &V) -> impl Iterator<Item = (&V, f64)> {
        self.adjacency
            .get(vertex)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().map(|(to, &weight)| (to, weight)))
    }

    /// Iterate over vertices with their neighbor maps, in insertion order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&V, &Neighbors<V>)> {
        self.adjacency.iter()
    }

    fn neighbors_mut(&mut self, vertex: &V) -> &mut Neighbors<V> {
        self.adjacency.entry(vertex.clone()).or_default()
    }
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new(false)
    }
}
