//! Connectivity and cycle detection.

use std::collections::HashSet;

use tracing::debug;

use super::store::Graph;
use super::vertex::Vertex;

impl<V: Vertex> Graph<V> {
    /// Check whether every vertex is reachable from the first one added.
    ///
    /// An empty graph is connected. Only outgoing edges are followed, so for
    /// a directed graph this answers "does the first vertex reach everything",
    /// not weak or strong connectivity.
    pub fn is_connected(&self) -> bool {
        let Some((first, _)) = self.entries().next() else {
            return true;
        };
        self.bfs(first)
            .map(|reached| reached.len() == self.vertex_count())
            .unwrap_or(false)
    }

    /// Check whether the graph contains a cycle.
    ///
    /// Directed graphs look for a back-edge to a vertex on the current DFS
    /// path. Undirected graphs look for a visited neighbor other than the one
    /// we just came from. Every vertex is tried as a root so cycles in any
    /// component are found. A self-loop counts as a cycle.
    pub fn has_cycle(&self) -> bool {
        let found = if self.is_directed() {
            self.has_directed_cycle()
        } else {
            self.has_undirected_cycle()
        };
        debug!(directed = self.is_directed(), found, "cycle check");
        found
    }

    fn has_directed_cycle(&self) -> bool {
        let mut visited: HashSet<&V> = HashSet::new();
        // Vertices on the active DFS path.
        let mut on_path: HashSet<&V> = HashSet::new();

        for (root, _) in self.entries() {
            if visited.contains(root) {
                continue;
            }

            visited.insert(root);
            on_path.insert(root);
            let mut stack = vec![(root, self.sorted_neighbors(root), 0usize)];

            while let Some((vertex, neighbors, cursor)) = stack.last_mut() {
                let Some(&next) = neighbors.get(*cursor) else {
                    on_path.remove(*vertex);
                    stack.pop();
                    continue;
                };
                *cursor += 1;

                if on_path.contains(next) {
                    return true;
                }
                if visited.insert(next) {
                    on_path.insert(next);
                    stack.push((next, self.sorted_neighbors(next), 0));
                }
            }
        }

        false
    }

    fn has_undirected_cycle(&self) -> bool {
        let mut visited: HashSet<&V> = HashSet::new();

        for (root, _) in self.entries() {
            if visited.contains(root) {
                continue;
            }

            visited.insert(root);
            let mut stack = vec![(root, None::<&V>, self.sorted_neighbors(root), 0usize)];

            while let Some((vertex, parent, neighbors, cursor)) = stack.last_mut() {
                let Some(&next) = neighbors.get(*cursor) else {
                    stack.pop();
                    continue;
                };
                *cursor += 1;

                if visited.insert(next) {
                    let from = *vertex;
                    stack.push((next, Some(from), self.sorted_neighbors(next), 0));
                } else if *parent != Some(next) {
                    return true;
                }
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    fn chain(directed: bool, len: u32) -> Graph<u32> {
        let mut graph = Graph::new(directed);
        for v in 0..len {
            graph.add_vertex(v);
        }
        for v in 1..len {
            graph.add_edge(&(v - 1), &v).unwrap();
        }
        graph
    }

    #[test]
    fn empty_graph_is_connected_and_acyclic() {
        let graph: Graph<u32> = Graph::undirected();
        assert!(graph.is_connected());
        assert!(!graph.has_cycle());
    }

    #[test]
    fn isolated_vertex_breaks_connectivity() {
        let mut graph = chain(false, 4);
        assert!(graph.is_connected());

        graph.add_vertex(99);
        assert!(!graph.is_connected());
    }

    #[test]
    fn directed_connectivity_is_reachability_from_first_vertex() {
        // 0 -> 1 -> 2 reaches everything from 0.
        assert!(chain(true, 3).is_connected());

        // 0 <- 1: the first vertex reaches nothing.
        let mut graph = Graph::directed();
        graph.add_vertex(0);
        graph.add_vertex(1);
        graph.add_edge(&1, &0).unwrap();
        assert!(!graph.is_connected());
    }

    #[test]
    fn undirected_tree_has_no_cycle_until_closed() {
        let mut graph = chain(false, 5);
        assert!(!graph.has_cycle());

        graph.add_edge(&0, &4).unwrap();
        assert!(graph.has_cycle());
    }

    #[test]
    fn directed_back_edge_is_a_cycle() {
        let mut graph = Graph::directed();
        for v in ["A", "B", "C", "D"] {
            graph.add_vertex(v);
        }
        graph.add_edge(&"A", &"B").unwrap();
        graph.add_edge(&"B", &"C").unwrap();
        graph.add_edge(&"C", &"D").unwrap();
        graph.add_edge(&"D", &"B").unwrap();
        assert!(graph.has_cycle());

        graph.remove_edge(&"D", &"B").unwrap();
        assert!(!graph.has_cycle());
    }

    #[test]
    fn directed_diamond_is_acyclic() {
        // Two paths into the same vertex are not a cycle in a digraph.
        let mut graph = Graph::directed();
        for v in 0..4 {
            graph.add_vertex(v);
        }
        graph.add_edge(&0, &1).unwrap();
        graph.add_edge(&0, &2).unwrap();
        graph.add_edge(&1, &3).unwrap();
        graph.add_edge(&2, &3).unwrap();
        assert!(!graph.has_cycle());
    }

    #[test]
    fn cycle_in_later_component_is_found() {
        let mut graph = chain(true, 3);
        for v in [10, 11] {
            graph.add_vertex(v);
        }
        graph.add_edge(&10, &11).unwrap();
        graph.add_edge(&11, &10).unwrap();
        assert!(graph.has_cycle());
    }

    #[test]
    fn self_loop_is_a_cycle() {
        for directed in [true, false] {
            let mut graph = chain(directed, 2);
            graph.add_edge(&1, &1).unwrap();
            assert!(graph.has_cycle(), "directed = {directed}");
        }
    }
}
