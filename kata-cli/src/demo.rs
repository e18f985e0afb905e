//! Scripted walkthrough of the graph problem.

use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};
use kata_graph::Graph;

use crate::social;

const VERTICES: [&str; 5] = ["A", "B", "C", "D", "E"];

/// Render items as `[A, B, C]`.
pub fn bracketed<T: Display>(items: &[T]) -> String {
    let joined: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", joined.join(", "))
}

/// Run the full graph demonstration.
pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Graph Example:")?;
    writeln!(out, "--------------")?;

    let undirected = undirected_section(out)?;
    traversal_section(&undirected, out)?;
    directed_section(out)?;
    social_section(out)?;
    Ok(())
}

fn undirected_section(out: &mut dyn Write) -> Result<Graph<&'static str>> {
    writeln!(out, "\n1. Creating an undirected graph")?;
    let mut graph = Graph::undirected();
    for v in VERTICES {
        graph.add_vertex(v);
    }

    graph.add_edge(&"A", &"B")?;
    graph.add_weighted_edge(&"A", &"C", 2.5)?;
    graph.add_weighted_edge(&"B", &"D", 1.8)?;
    graph.add_edge(&"C", &"D")?;
    graph.add_edge(&"C", &"E")?;
    graph.add_weighted_edge(&"D", &"E", 3.2)?;

    writeln!(out, "{graph}")?;
    writeln!(out, "Has vertex 'A': {}", graph.has_vertex(&"A"))?;
    writeln!(out, "Has vertex 'F': {}", graph.has_vertex(&"F"))?;
    writeln!(out, "Has edge A-B: {}", graph.has_edge(&"A", &"B"))?;
    writeln!(out, "Has edge A-E: {}", graph.has_edge(&"A", &"E"))?;
    writeln!(out, "Neighbors of C: {}", bracketed(&graph.neighbors(&"C")?))?;
    writeln!(out, "Is graph connected: {}", graph.is_connected())?;
    writeln!(out, "Has cycle: {}", graph.has_cycle())?;
    Ok(graph)
}

fn traversal_section(graph: &Graph<&'static str>, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n2. Graph Traversal")?;
    writeln!(out, "BFS from A: {}", bracketed(&graph.bfs(&"A")?))?;
    writeln!(out, "DFS from A: {}", bracketed(&graph.dfs(&"A")?))?;

    writeln!(out, "\n3. Finding Shortest Paths")?;
    let path = graph
        .shortest_path_with_distance(&"A", &"E")
        .context("shortest path from A to E")?;
    writeln!(
        out,
        "Shortest path from A to E: {} (total weight {:.1})",
        bracketed(&path.vertices),
        path.distance
    )?;
    Ok(())
}

fn directed_section(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n4. Creating a directed graph")?;
    let mut graph = Graph::directed();
    for v in VERTICES {
        graph.add_vertex(v);
    }
    graph.add_edge(&"A", &"B")?;
    graph.add_edge(&"B", &"C")?;
    graph.add_edge(&"C", &"D")?;
    graph.add_edge(&"D", &"B")?;
    graph.add_edge(&"B", &"E")?;

    writeln!(out, "{graph}")?;
    writeln!(out, "Has cycle: {}", graph.has_cycle())?;

    writeln!(out, "\n5. Removing an edge")?;
    graph.remove_edge(&"D", &"B")?;
    writeln!(out, "Has cycle after removal: {}", graph.has_cycle())?;

    writeln!(out, "\n6. Removing a vertex")?;
    graph.remove_vertex(&"C")?;
    writeln!(out, "{graph}")?;
    Ok(())
}

fn social_section(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n7. Practical Application: Social Network")?;
    let network = social::sample_network()?;
    writeln!(out, "{network}")?;

    let (first, second) = ("Alice", "Dave");
    let mutual = social::mutual_friends(&network, &first, &second)?;
    writeln!(
        out,
        "Mutual friends between {first} and {second}: {}",
        bracketed(&mutual)
    )?;

    let recommended: Vec<String> = social::recommend_friends(&network, &first)?
        .into_iter()
        .map(|(person, mutual)| format!("{person} ({mutual} mutual)"))
        .collect();
    writeln!(
        out,
        "Friend recommendations for {first}: {}",
        bracketed(&recommended)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transcript() -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bracketed_joins_items() {
        assert_eq!(bracketed(&["A", "B"]), "[A, B]");
        assert_eq!(bracketed::<u8>(&[]), "[]");
    }

    #[test]
    fn walkthrough_reports_expected_results() {
        let text = transcript();
        assert!(text.contains("Vertices: 5, Edges: 6"));
        assert!(text.contains("Neighbors of C: [A, D, E]"));
        assert!(text.contains("Is graph connected: true"));
        assert!(text.contains("BFS from A: [A, B, C, D, E]"));
        assert!(text.contains("DFS from A: [A, B, D, C, E]"));
        assert!(text.contains("Shortest path from A to E: [A, C, E] (total weight 3.5)"));
        assert!(text.contains("Has cycle after removal: false"));
        assert!(text.contains("Vertices: 4, Edges: 2"));
        assert!(text.contains("Mutual friends between Alice and Dave: [Charlie]"));
        assert!(text.contains("Friend recommendations for Alice: [Eve (1 mutual)]"));
    }
}
