//! Public types for the pathwise API.
//!
//! This module re-exports types from the workspace crates with a single
//! import path.

// ============================================================================
// Graph model
// ============================================================================

pub use pathwise_core::{Cost, Edge, EdgeDef, Graph, GraphDef, GraphError, Neighbor, Vertex, VertexDef};

// ============================================================================
// Search
// ============================================================================

pub use pathwise_engine::{
    search, search_with, CancelFlag, Frontier, Outcome, Route, SearchError, SearchNode,
    SearchOptions,
};
