//! Graph model for pathwise.
//!
//! This crate contains:
//! - `types`: Cost and label types, vertices, edges and neighbor entries
//! - `graph`: The graph model (vertex table plus ordered adjacency)
//! - `def`: Serde description of a graph, for building graphs from JSON
//! - `error`: Construction and lookup errors

pub mod def;
pub mod error;
pub mod graph;
pub mod types;

pub use def::{EdgeDef, GraphDef, VertexDef};
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use types::{Cost, Edge, Neighbor, Vertex};
