//! Error types for the satlink core library.
//!
//! Defines the error enum exposed by the public API and a convenient result
//! alias.

use std::fmt;

use thiserror::Error;

/// Stable codes describing [`GraphError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GraphErrorCode {
    /// An edge endpoint referenced a vertex that was never added.
    UnknownVertex,
    /// Both edge endpoints were the same vertex.
    SelfLoop,
    /// An edge was inserted twice for the same unordered vertex pair.
    DuplicateEdge,
    /// Directed edge entries did not pair up symmetrically.
    AsymmetryDetected,
    /// The requested worker count was zero.
    InvalidParallelism,
}

impl GraphErrorCode {
    /// Return the stable machine-readable representation of this error code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownVertex => "GRAPH_UNKNOWN_VERTEX",
            Self::SelfLoop => "GRAPH_SELF_LOOP",
            Self::DuplicateEdge => "GRAPH_DUPLICATE_EDGE",
            Self::AsymmetryDetected => "GRAPH_ASYMMETRY_DETECTED",
            Self::InvalidParallelism => "GRAPH_INVALID_PARALLELISM",
        }
    }
}

impl fmt::Display for GraphErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error produced by [`ComponentGraph`](crate::ComponentGraph) operations
/// or by MST construction setup.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint referenced a vertex that was never added.
    #[error("edge references vertex {vertex}, but the graph has {vertex_count} vertices")]
    UnknownVertex {
        /// The out-of-range vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// Both edge endpoints were the same vertex.
    #[error("edge ({vertex}, {vertex}) is a self-loop")]
    SelfLoop {
        /// The repeated endpoint.
        vertex: usize,
    },
    /// An edge was inserted twice for the same unordered vertex pair.
    #[error("an edge between {lo} and {target} already exists")]
    DuplicateEdge {
        /// The smaller endpoint of the canonical pair.
        lo: usize,
        /// The larger endpoint of the canonical pair.
        target: usize,
    },
    /// Directed edge entries did not pair up symmetrically.
    #[error("adjacency maps hold {directed_count} directed entries, which is not an even number")]
    AsymmetryDetected {
        /// The summed adjacency sizes across all components.
        directed_count: usize,
    },
    /// The requested worker count was zero.
    #[error("parallelism must be at least 1 (got {got})")]
    InvalidParallelism {
        /// The rejected worker count.
        got: usize,
    },
}

impl GraphError {
    /// Retrieve the stable [`GraphErrorCode`] for this error.
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::UnknownVertex { .. } => GraphErrorCode::UnknownVertex,
            Self::SelfLoop { .. } => GraphErrorCode::SelfLoop,
            Self::DuplicateEdge { .. } => GraphErrorCode::DuplicateEdge,
            Self::AsymmetryDetected { .. } => GraphErrorCode::AsymmetryDetected,
            Self::InvalidParallelism { .. } => GraphErrorCode::InvalidParallelism,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;
