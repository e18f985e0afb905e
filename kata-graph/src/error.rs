//! Error types for graph operations.
//!
//! Every fallible operation checks its preconditions before touching the
//! store, so an `Err` always means nothing was mutated.

use thiserror::Error;

/// The error type for graph operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A referenced vertex is not in the graph.
    #[error("vertex {0} does not exist")]
    VertexNotFound(String),

    /// A referenced edge is not in the graph.
    #[error("edge from {from} to {to} does not exist")]
    EdgeNotFound { from: String, to: String },

    /// Edge weights must be strictly positive and finite.
    #[error("weight must be positive, got {0}")]
    InvalidWeight(f64),

    /// The end vertex is unreachable from the start vertex.
    #[error("no path from {from} to {to}")]
    NoPathFound { from: String, to: String },
}

impl Error {
    pub(crate) fn vertex_not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }

    pub(crate) fn edge_not_found<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Self::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn no_path_found<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Self::NoPathFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

/// A specialized Result type for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
