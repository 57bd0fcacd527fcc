//! Per-search vertex state.

use pathwise_core::Cost;

/// State of one vertex during one search.
///
/// Created when the vertex is first discovered, relaxed while unresolved,
/// then frozen once the frontier resolves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode {
    /// Vertex label.
    pub label: String,
    /// Accumulated cost `g` from the start.
    pub cost: Cost,
    /// Heuristic `h`, copied from the graph at discovery.
    pub heuristic: Cost,
    /// Labels from the start up to and including this vertex.
    pub path: Vec<String>,
    /// Resolution order index, set only by the frontier when resolved.
    pub(crate) order: Option<usize>,
}

impl SearchNode {
    /// Create an unresolved node.
    pub fn new(label: impl Into<String>, cost: Cost, heuristic: Cost, path: Vec<String>) -> Self {
        Self {
            label: label.into(),
            cost,
            heuristic,
            path,
            order: None,
        }
    }

    /// Start node: zero cost, path containing only itself.
    pub fn start(label: &str, heuristic: Cost) -> Self {
        Self::new(label, 0, heuristic, vec![label.to_string()])
    }

    /// Node reached from `self` over an edge, with path `self.path + [label]`.
    pub fn successor(&self, label: &str, cost: Cost, heuristic: Cost) -> Self {
        Self::new(label, cost, heuristic, self.extend_path(label))
    }

    /// This node's path with `label` appended.
    pub fn extend_path(&self, label: &str) -> Vec<String> {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(label.to_string());
        path
    }

    /// Estimated total cost `f = g + h`.
    ///
    /// Widened so the sum of two `Cost` values cannot overflow.
    #[inline]
    pub fn estimate(&self) -> u128 {
        u128::from(self.cost) + u128::from(self.heuristic)
    }

    /// Resolution order index, if resolved.
    #[inline]
    pub fn order(&self) -> Option<usize> {
        self.order
    }

    /// Whether the node has been resolved.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.order.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_node() {
        let n = SearchNode::start("A", 7);
        assert_eq!(n.cost, 0);
        assert_eq!(n.heuristic, 7);
        assert_eq!(n.path, vec!["A".to_string()]);
        assert!(!n.is_resolved());
    }

    #[test]
    fn successor_extends_path() {
        let a = SearchNode::start("A", 0);
        let b = a.successor("B", 5, 4);
        let c = b.successor("C", 9, 0);
        assert_eq!(c.path, vec!["A", "B", "C"]);
        // Predecessors are untouched
        assert_eq!(b.path, vec!["A", "B"]);
    }

    #[test]
    fn estimate_does_not_overflow() {
        let n = SearchNode::new("X", Cost::MAX, Cost::MAX, vec![]);
        assert_eq!(n.estimate(), 2 * u128::from(Cost::MAX));
    }
}
