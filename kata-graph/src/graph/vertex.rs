//! Graph Vertices and Edges
//!
//! This module defines the identifier bound for vertices and the edge value
//! reported by [`Graph::edges`](super::Graph::edges).

use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Bound for vertex identifiers.
///
/// Vertices are opaque labels. `Hash + Eq` key the adjacency maps and `Ord`
/// fixes the order neighbors are visited in, which keeps every traversal
/// reproducible. Any type meeting the bounds is a vertex, e.g. `&str`,
/// `String`, `u32` or `char`.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}

/// A weighted directed relation between two vertices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V> {
    /// Source vertex.
    pub from: V,

    /// Target vertex.
    pub to: V,

    /// Edge weight, always strictly positive.
    pub weight: f64,
}

impl<V> Edge<V> {
    /// Create a new edge.
    pub fn new(from: V, to: V, weight: f64) -> Self {
        Self { from, to, weight }
    }
}

/// Check that a weight can be stored on an edge.
pub(crate) fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}
