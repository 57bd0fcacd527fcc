//! Registry of the nodes discovered during one search.
//!
//! Nodes live in a `Vec` indexed by discovery order, with a label index on
//! the side. Unresolved nodes are ranked in a min-heap keyed by
//! `(f, discovery order)`; the heap may hold stale entries left behind by
//! relaxation, which are skipped when popped.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use pathwise_core::Cost;

use super::node::SearchNode;
use crate::error::{Result, SearchError};

/// Heap entry for an unresolved node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    estimate: u128,
    /// Discovery order, which is also the node's slot.
    slot: usize,
}

// Min-heap by (estimate, slot): BinaryHeap is a max-heap, so compare reversed.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Discovered nodes of a single search, split into unresolved and resolved.
///
/// Among unresolved nodes with the same minimal `f`, the one discovered first
/// is selected. A resolved node is never modified again.
#[derive(Debug, Default)]
pub struct Frontier {
    /// All discovered nodes, in discovery order.
    nodes: Vec<SearchNode>,
    /// label → slot in `nodes`
    index: HashMap<String, usize>,
    heap: BinaryHeap<Candidate>,
    unresolved: usize,
    /// Next resolution order index.
    next_order: usize,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a newly discovered, unresolved node.
    ///
    /// Any resolution order carried by `node` is cleared; only
    /// `select_and_resolve` assigns one.
    pub fn add(&mut self, mut node: SearchNode) -> Result<()> {
        if self.index.contains_key(&node.label) {
            return Err(SearchError::AlreadyDiscovered { label: node.label });
        }
        node.order = None;
        let slot = self.nodes.len();
        self.heap.push(Candidate {
            estimate: node.estimate(),
            slot,
        });
        self.index.insert(node.label.clone(), slot);
        self.nodes.push(node);
        self.unresolved += 1;
        Ok(())
    }

    /// The unresolved node with this label, if any.
    pub fn lookup_unresolved(&self, label: &str) -> Option<&SearchNode> {
        self.get(label).filter(|n| !n.is_resolved())
    }

    /// The resolved node with this label and its resolution order, if any.
    pub fn lookup_resolved(&self, label: &str) -> Option<(usize, &SearchNode)> {
        self.get(label).and_then(|n| n.order.map(|order| (order, n)))
    }

    /// Lower the cost of an unresolved node and replace its path.
    ///
    /// The caller decides whether the new cost is an improvement.
    pub fn decrease_cost(&mut self, label: &str, cost: Cost, path: Vec<String>) -> Result<()> {
        let slot = match self.index.get(label) {
            Some(&slot) if !self.nodes[slot].is_resolved() => slot,
            _ => {
                return Err(SearchError::NotRelaxable {
                    label: label.to_string(),
                })
            }
        };

        let node = &mut self.nodes[slot];
        node.cost = cost;
        node.path = path;
        self.heap.push(Candidate {
            estimate: node.estimate(),
            slot,
        });
        Ok(())
    }

    /// Resolve and return the unresolved node with the lowest `f`.
    ///
    /// Ties go to the earliest discovered node. The node receives the next
    /// resolution order index (0, 1, 2, ...).
    pub fn select_and_resolve(&mut self) -> Result<&SearchNode> {
        while let Some(candidate) = self.heap.pop() {
            let node = &self.nodes[candidate.slot];
            // Stale: superseded by a cheaper entry, or already resolved
            if node.is_resolved() || node.estimate() != candidate.estimate {
                continue;
            }

            let order = self.next_order;
            self.next_order += 1;
            self.unresolved -= 1;

            let node = &mut self.nodes[candidate.slot];
            node.order = Some(order);
            return Ok(node);
        }
        Err(SearchError::EmptyFrontier)
    }

    /// Whether any node is still open for expansion.
    pub fn has_unresolved(&self) -> bool {
        self.unresolved > 0
    }

    /// Number of unresolved nodes.
    pub fn unresolved_len(&self) -> usize {
        self.unresolved
    }

    /// Number of resolved nodes.
    pub fn resolved_len(&self) -> usize {
        self.nodes.len() - self.unresolved
    }

    /// Number of nodes discovered so far.
    pub fn discovered_len(&self) -> usize {
        self.nodes.len()
    }

    fn get(&self, label: &str) -> Option<&SearchNode> {
        self.index.get(label).map(|&slot| &self.nodes[slot])
    }
}
