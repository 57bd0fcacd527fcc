//! A* search over a pathwise [`Graph`](pathwise_core::Graph).
//!
//! The engine owns everything that lives for the duration of one search: the
//! per-vertex [`SearchNode`] state, the [`Frontier`] that picks the next vertex
//! to expand, and the driver loop in [`search`] / [`search_with`].

pub mod error;
pub mod search;

pub use error::{Result, SearchError};
pub use search::{
    search, search_with, CancelFlag, Frontier, Outcome, Route, SearchNode, SearchOptions,
};
