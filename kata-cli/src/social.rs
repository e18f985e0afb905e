//! Social-network helpers built on the graph API.
//!
//! People are vertices and friendships are undirected edges.

use std::collections::{BTreeSet, HashMap};

use kata_graph::{Graph, Result, Vertex};

/// Build the sample network used by the demo.
pub fn sample_network() -> Result<Graph<&'static str>> {
    let mut graph = Graph::undirected();
    for person in ["Alice", "Bob", "Charlie", "Dave", "Eve", "Frank"] {
        graph.add_vertex(person);
    }
    for (a, b) in [
        ("Alice", "Bob"),
        ("Alice", "Charlie"),
        ("Alice", "Dave"),
        ("Bob", "Charlie"),
        ("Charlie", "Dave"),
        ("Eve", "Frank"),
        ("Dave", "Eve"),
    ] {
        graph.add_edge(&a, &b)?;
    }
    Ok(graph)
}

/// Friends shared by two people, sorted.
pub fn mutual_friends<V: Vertex>(graph: &Graph<V>, a: &V, b: &V) -> Result<Vec<V>> {
    let theirs: BTreeSet<V> = graph.neighbors(b)?.into_iter().collect();
    Ok(graph
        .neighbors(a)?
        .into_iter()
        .filter(|friend| theirs.contains(friend))
        .collect())
}

/// Friends-of-friends who are not yet friends, with their mutual-friend count.
///
/// Ordered by count, highest first, then by vertex order.
pub fn recommend_friends<V: Vertex>(graph: &Graph<V>, person: &V) -> Result<Vec<(V, usize)>> {
    let friends = graph.neighbors(person)?;
    let mut counts: HashMap<V, usize> = HashMap::new();

    for friend in &friends {
        for candidate in graph.neighbors(friend)? {
            if &candidate != person && !friends.contains(&candidate) {
                *counts.entry(candidate).or_default() += 1;
            }
        }
    }

    let mut ranked: Vec<(V, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    Ok(ranked)
}
