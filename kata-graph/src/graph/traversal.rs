//! Breadth-first and depth-first traversal.
//!
//! Both walks visit neighbors in sorted order, so the visiting order is a
//! pure function of the graph's contents.

use std::collections::{HashSet, VecDeque};

use smallvec::SmallVec;
use tracing::debug;

use super::store::Graph;
use super::vertex::Vertex;
use crate::error::Result;

/// Neighbor buffer for a single expansion step. Most vertices have few.
type NeighborBuf<'a, V> = SmallVec<[&'a V; 8]>;

impl<V: Vertex> Graph<V> {
    /// Breadth-first search from `start`.
    ///
    /// Returns every vertex reachable from `start` exactly once, in the order
    /// they were dequeued. Vertices are marked when enqueued, never twice.
    pub fn bfs(&self, start: &V) -> Result<Vec<V>> {
        self.require_vertex(start)?;

        let mut visited: HashSet<&V> = HashSet::new();
        let mut queue: VecDeque<&V> = VecDeque::new();
        let mut order = Vec::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            order.push(vertex.clone());

            for neighbor in self.sorted_neighbors(vertex) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        debug!(?start, visited = order.len(), "bfs");
        Ok(order)
    }

    /// Depth-first search from `start`, in pre-order.
    ///
    /// Uses an explicit stack of neighbor cursors so the visiting order is
    /// the same as the recursive formulation without its depth limit.
    pub fn dfs(&self, start: &V) -> Result<Vec<V>> {
        self.require_vertex(start)?;

        let mut visited: HashSet<&V> = HashSet::new();
        let mut order = Vec::new();
        let mut stack: Vec<(NeighborBuf<'_, V>, usize)> = Vec::new();

        visited.insert(start);
        order.push(start.clone());
        stack.push((self.sorted_neighbors(start), 0));

        while let Some((neighbors, cursor)) = stack.last_mut() {
            let Some(&next) = neighbors.get(*cursor) else {
                stack.pop();
                continue;
            };
            *cursor += 1;

            if visited.insert(next) {
                order.push(next.clone());
                stack.push((self.sorted_neighbors(next), 0));
            }
        }

        debug!(?start, visited = order.len(), "dfs");
        Ok(order)
    }

    /// Outgoing neighbors of an existing vertex, sorted.
    pub(crate) fn sorted_neighbors(&self, vertex: &V) -> NeighborBuf<'_, V> {
        let mut neighbors: NeighborBuf<'_, V> = self.adjacent(vertex).map(|(to, _)| to).collect();
        neighbors.sort();
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::graph::Graph;

    /// A - B, A - C, B - D, C - D, C - E, D - E
    fn sample() -> Graph<&'static str> {
        let mut graph = Graph::undirected();
        for v in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(v);
        }
        for (from, to) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("C", "E"), ("D", "E")] {
            graph.add_edge(&from, &to).unwrap();
        }
        graph
    }

    #[test]
    fn bfs_visits_level_by_level() {
        assert_eq!(sample().bfs(&"A").unwrap(), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn dfs_goes_deep_first() {
        assert_eq!(sample().dfs(&"A").unwrap(), vec!["A", "B", "D", "C", "E"]);
    }

    #[test]
    fn traversal_only_reaches_connected_vertices() {
        let mut graph = sample();
        graph.add_vertex("F");

        assert_eq!(graph.bfs(&"F").unwrap(), vec!["F"]);
        assert_eq!(graph.dfs(&"A").unwrap().len(), 5);
    }

    #[test]
    fn directed_traversal_follows_edge_direction() {
        let mut graph = Graph::directed();
        for v in [1, 2, 3] {
            graph.add_vertex(v);
        }
        graph.add_edge(&2, &1).unwrap();
        graph.add_edge(&2, &3).unwrap();

        assert_eq!(graph.bfs(&1).unwrap(), vec![1]);
        assert_eq!(graph.dfs(&2).unwrap(), vec![2, 1, 3]);
    }

    #[test]
    fn missing_start_vertex() {
        let graph = sample();
        assert_eq!(graph.bfs(&"Z"), Err(Error::VertexNotFound("\"Z\"".into())));
        assert!(matches!(graph.dfs(&"Z"), Err(Error::VertexNotFound(_))));
    }
}
