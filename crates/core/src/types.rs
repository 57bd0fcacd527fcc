//! Core graph types.

use serde::{Deserialize, Serialize};

/// Edge weights, heuristic estimates and accumulated path costs.
///
/// Unsigned, so every cost is non-negative by construction.
pub type Cost = u64;

/// A vertex and its static heuristic estimate of remaining cost to the goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique label.
    pub label: String,
    /// Heuristic estimate `h`, fixed when the vertex is added.
    pub heuristic: Cost,
}

/// Full edge representation including endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex label.
    pub from: String,
    /// Target vertex label.
    pub to: String,
    /// Edge weight.
    pub weight: Cost,
}

/// An outgoing adjacency entry: target label and edge weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    /// The neighbor vertex label.
    pub label: String,
    /// Weight of the edge leading to it.
    pub weight: Cost,
}
