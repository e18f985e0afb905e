//! Ad-hoc graph analysis from command-line edge lists.

use std::io::Write;

use anyhow::{Context, Result};
use kata_graph::{Edge, Error as GraphError, Graph, ShortestPath};
use serde::Serialize;

use crate::cli::InspectArgs;
use crate::demo::bracketed;

/// An edge given on the command line as `FROM-TO` or `FROM-TO:WEIGHT`.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub weight: Option<f64>,
}

/// Parse an edge argument.
pub fn parse_edge(s: &str) -> Result<EdgeSpec, String> {
    let (endpoints, weight) = match s.split_once(':') {
        Some((endpoints, weight)) => {
            let weight: f64 = weight
                .trim()
                .parse()
                .map_err(|_| format!("invalid weight '{weight}' in edge '{s}'"))?;
            (endpoints, Some(weight))
        }
        None => (s, None),
    };

    let (from, to) = endpoints
        .split_once('-')
        .ok_or_else(|| format!("edge '{s}' must look like FROM-TO or FROM-TO:WEIGHT"))?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return Err(format!("edge '{s}' has an empty endpoint"));
    }

    Ok(EdgeSpec {
        from: from.to_string(),
        to: to.to_string(),
        weight,
    })
}

/// Everything `inspect` reports about a graph.
#[derive(Debug, Serialize)]
pub struct Report {
    pub directed: bool,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<String>,
    pub edges: Vec<Edge<String>>,
    pub connected: bool,
    pub has_cycle: bool,
    pub start: Option<String>,
    pub bfs: Vec<String>,
    pub dfs: Vec<String>,
    pub target: Option<String>,
    /// `None` when there is no target or it is unreachable.
    pub path: Option<ShortestPath<String>>,
}

/// Build the graph described by the arguments.
pub fn build_graph(args: &InspectArgs) -> Result<Graph<String>> {
    let mut graph = Graph::new(args.directed);
    for vertex in &args.vertices {
        graph.add_vertex(vertex.clone());
    }
    for spec in &args.edges {
        graph.add_vertex(spec.from.clone());
        graph.add_vertex(spec.to.clone());
        let added = match spec.weight {
            Some(weight) => graph.add_weighted_edge(&spec.from, &spec.to, weight),
            None => graph.add_edge(&spec.from, &spec.to),
        };
        added.with_context(|| format!("adding edge {}-{}", spec.from, spec.to))?;
    }
    Ok(graph)
}

/// Analyze a graph from a start vertex and optional target.
pub fn analyze(
    graph: &Graph<String>,
    start: Option<&String>,
    target: Option<&String>,
) -> Result<Report> {
    let start = start.cloned().or_else(|| graph.vertices().into_iter().next());

    let (bfs, dfs) = match &start {
        Some(start) => (
            graph.bfs(start).context("breadth-first search")?,
            graph.dfs(start).context("depth-first search")?,
        ),
        None => (Vec::new(), Vec::new()),
    };

    let path = match (&start, target) {
        (Some(start), Some(target)) => match graph.shortest_path_with_distance(start, target) {
            Ok(path) => Some(path),
            Err(GraphError::NoPathFound { .. }) => None,
            Err(err) => return Err(err).context("shortest path"),
        },
        _ => None,
    };

    Ok(Report {
        directed: graph.is_directed(),
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        vertices: graph.vertices(),
        edges: graph.edges(),
        connected: graph.is_connected(),
        has_cycle: graph.has_cycle(),
        start,
        bfs,
        dfs,
        target: target.cloned(),
        path,
    })
}

/// Execute the `inspect` command.
pub fn run(args: &InspectArgs, out: &mut dyn Write) -> Result<()> {
    let graph = build_graph(args)?;
    let report = analyze(&graph, args.start.as_ref(), args.to.as_ref())?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    write!(out, "{graph}")?;
    writeln!(out, "Connected: {}", report.connected)?;
    writeln!(out, "Has cycle: {}", report.has_cycle)?;
    if let Some(start) = &report.start {
        writeln!(out, "BFS from {start}: {}", bracketed(&report.bfs))?;
        writeln!(out, "DFS from {start}: {}", bracketed(&report.dfs))?;
    }
    if let (Some(start), Some(target)) = (&report.start, &report.target) {
        match &report.path {
            Some(path) => writeln!(
                out,
                "Shortest path from {start} to {target}: {} (total weight {:.1})",
                bracketed(&path.vertices),
                path.distance
            )?,
            None => writeln!(out, "No path from {start} to {target}")?,
        }
    }
    Ok(())
}
