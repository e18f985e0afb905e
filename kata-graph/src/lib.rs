//! Kata Graph
//!
//! This crate provides the weighted graph used by the interview kata
//! catalog. It implements:
//!
//! - Vertex and edge management for directed and undirected graphs
//! - Breadth-first and depth-first traversal
//! - Dijkstra shortest paths
//! - Connectivity and cycle detection
//!
//! # Example
//!
//! ```rust
//! use kata_graph::Graph;
//!
//! let mut graph = Graph::undirected();
//! for v in ["A", "B", "C", "D", "E"] {
//!     graph.add_vertex(v);
//! }
//! graph.add_weighted_edge(&"A", &"B", 1.0)?;
//! graph.add_weighted_edge(&"A", &"C", 2.0)?;
//! graph.add_weighted_edge(&"B", &"D", 3.0)?;
//! graph.add_weighted_edge(&"C", &"E", 1.0)?;
//! graph.add_weighted_edge(&"D", &"E", 2.0)?;
//!
//! assert_eq!(graph.shortest_path(&"A", &"E")?, vec!["A", "C", "E"]);
//! assert!(graph.is_connected());
//! assert!(graph.has_cycle());
//! # Ok::<(), kata_graph::Error>(())
//! ```

pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{Edge, Graph, GraphConfig, ShortestPath, Vertex};
