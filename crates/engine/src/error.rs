//! Search errors.
//!
//! A missing path is not an error: it is reported as
//! [`Outcome::NotFound`](crate::Outcome::NotFound). These variants cover
//! frontier misuse, arithmetic limits and cooperative stops.

use pathwise_core::GraphError;
use thiserror::Error;

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Error type for the search engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `select_and_resolve` was called with no unresolved nodes left
    #[error("frontier has no unresolved nodes")]
    EmptyFrontier,
    /// A node with this label was already discovered in this search
    #[error("vertex '{label}' already discovered")]
    AlreadyDiscovered {
        /// The label
        label: String,
    },
    /// Relaxation targeted a label that is absent or already resolved
    #[error("vertex '{label}' cannot be relaxed: not an unresolved node")]
    NotRelaxable {
        /// The label
        label: String,
    },
    /// Accumulated path cost no longer fits in a `Cost`
    #[error("path cost to '{label}' overflows")]
    CostOverflow {
        /// Vertex whose cost overflowed
        label: String,
    },
    /// The expansion budget ran out before the goal was resolved
    #[error("expansion budget exhausted after {expanded} expansions")]
    BudgetExhausted {
        /// Nodes resolved before stopping
        expanded: usize,
    },
    /// The caller raised the cancel flag
    #[error("search cancelled after {expanded} expansions")]
    Cancelled {
        /// Nodes resolved before stopping
        expanded: usize,
    },
    /// Search options could not be parsed
    #[error("invalid search options: {0}")]
    Config(String),
    /// Graph lookup failed
    #[error(transparent)]
    Graph(#[from] GraphError),
}
