//! Errors raised while building or querying a graph.

use thiserror::Error;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for graph construction and lookup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex with this label already exists
    #[error("vertex '{label}' already exists")]
    DuplicateVertex {
        /// The duplicated label
        label: String,
    },
    /// The label does not name a vertex in the graph
    #[error("unknown vertex '{label}'")]
    UnknownVertex {
        /// The missing label
        label: String,
    },
    /// Vertex labels must be non-empty
    #[error("vertex label must not be empty")]
    InvalidLabel,
    /// A graph description could not be parsed
    #[error("invalid graph description: {0}")]
    Parse(String),
}

impl GraphError {
    pub(crate) fn unknown(label: &str) -> Self {
        GraphError::UnknownVertex {
            label: label.to_string(),
        }
    }
}
