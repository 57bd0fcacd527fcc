//! The graph model: vertices carrying heuristics plus ordered outgoing adjacency.
//!
//! Vertices are added once and never change. Edges are directed and appended
//! to the source vertex's adjacency list in call order; parallel edges between
//! the same ordered pair are kept as separate entries.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::types::{Cost, Edge, Neighbor, Vertex};

/// A weighted directed graph whose vertices carry heuristic estimates.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Vertices in insertion order.
    vertices: Vec<Vertex>,
    /// label → position in `vertices`
    index: HashMap<String, usize>,
    /// Forward adjacency: src → [(dst, weight)]
    outgoing: HashMap<String, Vec<Neighbor>>,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Add a vertex with its heuristic estimate.
    ///
    /// Fails with `DuplicateVertex` if the label is already present and with
    /// `InvalidLabel` if it is empty.
    pub fn add_vertex(&mut self, label: &str, heuristic: Cost) -> Result<()> {
        validate_label(label)?;
        if self.index.contains_key(label) {
            return Err(GraphError::DuplicateVertex {
                label: label.to_string(),
            });
        }

        self.index.insert(label.to_string(), self.vertices.len());
        self.vertices.push(Vertex {
            label: label.to_string(),
            heuristic,
        });
        tracing::trace!(target: "pathwise::graph", label, heuristic, "vertex added");
        Ok(())
    }

    /// Append a directed edge `from → to`.
    ///
    /// Both endpoints must already exist; otherwise `UnknownVertex` is
    /// returned and the graph is left unchanged.
    pub fn add_edge(&mut self, weight: Cost, from: &str, to: &str) -> Result<()> {
        if !self.contains(from) {
            return Err(GraphError::unknown(from));
        }
        if !self.contains(to) {
            return Err(GraphError::unknown(to));
        }

        self.outgoing
            .entry(from.to_string())
            .or_default()
            .push(Neighbor {
                label: to.to_string(),
                weight,
            });
        self.edge_count += 1;
        tracing::trace!(target: "pathwise::graph", from, to, weight, "edge added");
        Ok(())
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// Outgoing `(neighbor, weight)` entries of a vertex, in insertion order.
    ///
    /// A vertex without outgoing edges yields an empty slice.
    pub fn adjacency_of(&self, label: &str) -> Result<&[Neighbor]> {
        if !self.contains(label) {
            return Err(GraphError::unknown(label));
        }
        Ok(self
            .outgoing
            .get(label)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// Heuristic estimate attached to a vertex.
    pub fn heuristic_of(&self, label: &str) -> Result<Cost> {
        self.vertex(label)
            .map(|v| v.heuristic)
            .ok_or_else(|| GraphError::unknown(label))
    }

    /// Look up a vertex by label.
    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.index.get(label).map(|&i| &self.vertices[i])
    }

    /// Whether a vertex with this label exists.
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// All edges, grouped by source in vertex insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices.iter().flat_map(move |v| {
            self.outgoing
                .get(&v.label)
                .into_iter()
                .flatten()
                .map(move |n| Edge {
                    from: v.label.clone(),
                    to: n.label.clone(),
                    weight: n.weight,
                })
        })
    }
}

/// Validate a vertex label.
fn validate_label(label: &str) -> Result<()> {
    if label.is_empty() {
        return Err(GraphError::InvalidLabel);
    }
    Ok(())
}
