//! Serde description of a graph.
//!
//! A `GraphDef` is plain data: it can be written by hand as JSON and turned
//! into a validated [`Graph`] through the same checks as `add_vertex` and
//! `add_edge`.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::types::Cost;

/// A vertex entry in a graph description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexDef {
    /// Unique label.
    pub label: String,
    /// Heuristic estimate (default 0).
    #[serde(default)]
    pub heuristic: Cost,
}

/// An edge entry in a graph description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDef {
    /// Source vertex label.
    pub from: String,
    /// Target vertex label.
    pub to: String,
    /// Edge weight.
    pub weight: Cost,
}

/// A whole graph as plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDef {
    /// Vertices, added in order.
    #[serde(default)]
    pub vertices: Vec<VertexDef>,
    /// Edges, added in order after all vertices.
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
}

impl GraphDef {
    /// Parse a description from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GraphError::Parse(e.to_string()))
    }

    /// Serialize the description to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| GraphError::Parse(e.to_string()))
    }
}

impl Graph {
    /// Build a graph from a description.
    ///
    /// Fails on the first duplicate vertex, empty label or dangling edge.
    pub fn from_def(def: &GraphDef) -> Result<Self> {
        let mut graph = Graph::new();
        for v in &def.vertices {
            graph.add_vertex(&v.label, v.heuristic)?;
        }
        for e in &def.edges {
            graph.add_edge(e.weight, &e.from, &e.to)?;
        }
        Ok(graph)
    }

    /// Describe this graph as plain data.
    pub fn to_def(&self) -> GraphDef {
        GraphDef {
            vertices: self
                .vertices()
                .map(|v| VertexDef {
                    label: v.label.clone(),
                    heuristic: v.heuristic,
                })
                .collect(),
            edges: self
                .edges()
                .map(|e| EdgeDef {
                    from: e.from,
                    to: e.to,
                    weight: e.weight,
                })
                .collect(),
        }
    }
}

impl TryFrom<&GraphDef> for Graph {
    type Error = GraphError;

    fn try_from(def: &GraphDef) -> Result<Self> {
        Graph::from_def(def)
    }
}
