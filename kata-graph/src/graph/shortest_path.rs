//! Shortest Paths
//!
//! Dijkstra's algorithm over the [`IndexedMinHeap`].
//!
//! # Algorithm
//!
//! 1. Every vertex is queued up front: the start at distance 0, the rest at
//!    +inf.
//! 2. Pop the closest unresolved vertex, skipping any not reached yet. Its
//!    distance is now final, so if it is the target we stop.
//! 3. Relax each outgoing edge. A first or shorter tentative distance
//!    records the predecessor and lowers the neighbor's key in place.
//! 4. Walk the predecessors back from the target to rebuild the path.
//!
//! Correctness relies on every weight being positive, which the store
//! guarantees. Among several shortest paths, which one is returned is not
//! specified.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::queue::IndexedMinHeap;
use super::store::Graph;
use super::vertex::Vertex;
use crate::error::{Error, Result};

/// A shortest path together with its length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPath<V> {
    /// Vertices from start to end, both inclusive.
    pub vertices: Vec<V>,

    /// Sum of the edge weights along `vertices`.
    pub distance: f64,
}

impl<V: Vertex> Graph<V> {
    /// Find the minimum-weight path from `start` to `end`.
    ///
    /// Fails with [`Error::VertexNotFound`] if either endpoint is missing and
    /// [`Error::NoPathFound`] if `end` is unreachable. A path from a vertex to
    /// itself is just that vertex.
    pub fn shortest_path(&self, start: &V, end: &V) -> Result<Vec<V>> {
        self.shortest_path_with_distance(start, end)
            .map(|path| path.vertices)
    }

    /// Like [`shortest_path`](Self::shortest_path), also reporting the total weight.
    pub fn shortest_path_with_distance(&self, start: &V, end: &V) -> Result<ShortestPath<V>> {
        self.require_vertex(start)?;
        self.require_vertex(end)?;

        // Only reached vertices have a distance, so a sum that overflows to
        // +inf still records a predecessor.
        let mut distance: HashMap<&V, f64> = HashMap::with_capacity(self.vertex_count());
        let mut previous: HashMap<&V, &V> = HashMap::new();
        let mut queue = IndexedMinHeap::with_capacity(self.vertex_count());

        distance.insert(start, 0.0);
        for (vertex, _) in self.entries() {
            let initial = if vertex == start { 0.0 } else { f64::INFINITY };
            queue.push(vertex, initial);
        }

        while let Some((vertex, _)) = queue.pop() {
            let Some(&dist) = distance.get(vertex) else {
                continue;
            };
            if vertex == end {
                break;
            }

            for (neighbor, weight) in self.adjacent(vertex) {
                let candidate = dist + weight;
                let improves = distance
                    .get(neighbor)
                    .map_or(true, |&known| candidate < known);
                if improves {
                    trace!(?vertex, ?neighbor, candidate, "relax");
                    distance.insert(neighbor, candidate);
                    previous.insert(neighbor, vertex);
                    // A vertex popped before it was reached goes back in.
                    if !queue.decrease_key(&neighbor, candidate) {
                        queue.push(neighbor, candidate);
                    }
                }
            }
        }

        if start != end && !previous.contains_key(end) {
            debug!(?start, ?end, "no path");
            return Err(Error::no_path_found(start, end));
        }

        let mut vertices = vec![end.clone()];
        let mut current = end;
        while current != start {
            current = previous[current];
            vertices.push(current.clone());
        }
        vertices.reverse();

        let total = distance[end];
        debug!(?start, ?end, hops = vertices.len() - 1, distance = total, "shortest path");
        Ok(ShortestPath {
            vertices,
            distance: total,
        })
    }
}
