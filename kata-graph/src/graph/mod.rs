//! Weighted Graph
//!
//! This module implements a general-purpose weighted graph and the classic
//! algorithms that run over it.
//!
//! # Overview
//!
//! - Vertices are opaque labels of any type implementing [`Vertex`].
//! - Edges carry a strictly positive `f64` weight.
//! - Directedness is fixed when the graph is created. An undirected graph
//!   stores every edge in both directions and keeps the two copies in step.
//!
//! # Design Decisions
//!
//! 1. A single owner mutates the graph through `&mut Graph`. Every algorithm
//!    (BFS, DFS, Dijkstra, cycle detection) takes `&self`, so the borrow
//!    checker rules out mutation during a walk.
//!
//! 2. Neighbors are always visited in sorted order. Traversal output is then
//!    reproducible regardless of insertion history.
//!
//! 3. The vertex set is insertion-ordered, which fixes the vertex
//!    [`Graph::is_connected`] starts from and the order of
//!    [`Graph::vertices`].
//!
//! 4. Dijkstra uses a heap with a reverse index so a shorter distance updates
//!    the queued entry in place.

mod analysis;
mod display;
mod queue;
mod shortest_path;
mod store;
mod traversal;
mod vertex;

pub use shortest_path::ShortestPath;
pub use store::{Graph, GraphConfig, DEFAULT_WEIGHT};
pub use vertex::{Edge, Vertex};
