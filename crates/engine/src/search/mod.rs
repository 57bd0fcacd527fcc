//! Search module for heuristic-guided shortest paths
//!
//! This module contains:
//! - `node`: Per-search vertex state (`SearchNode`)
//! - `frontier`: Registry of discovered nodes with best-candidate selection
//! - `astar`: The expand/relax/terminate driver loop
//! - `types`: Outcomes and search options

mod astar;
mod frontier;
mod node;
mod types;

pub use astar::{search, search_with};
pub use frontier::Frontier;
pub use node::SearchNode;
pub use types::{CancelFlag, Outcome, Route, SearchOptions};
