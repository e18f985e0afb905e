//! Human-readable adjacency listing.

use std::fmt;

use super::store::Graph;
use super::vertex::Vertex;

impl<V: Vertex + fmt::Display> fmt::Display for Graph<V> {
    /// Renders the header, the counts, then one line per vertex in insertion
    /// order with its neighbors sorted, e.g. `Vertex A: B(1.0), C(2.5)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_directed() { "Directed" } else { "Undirected" };
        writeln!(f, "{kind} Graph:")?;
        writeln!(f, "Vertices: {}, Edges: {}", self.vertex_count(), self.edge_count())?;

        for (vertex, neighbors) in self.entries() {
            let mut sorted: Vec<(&V, f64)> = neighbors.iter().map(|(to, &w)| (to, w)).collect();
            sorted.sort_by(|a, b| a.0.cmp(b.0));

            write!(f, "Vertex {vertex}: ")?;
            for (i, (to, weight)) in sorted.into_iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{to}({weight:.1})")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
