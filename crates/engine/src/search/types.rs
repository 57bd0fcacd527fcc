//! Search outcomes and options.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use pathwise_core::Cost;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

/// The cheapest path found to the goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Goal vertex label.
    pub label: String,
    /// Position of the goal in the resolution sequence.
    pub order: usize,
    /// Total path cost.
    pub cost: Cost,
    /// Labels from start to goal, inclusive.
    pub path: Vec<String>,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vertex: {}, order: {}, cost: {}, path: {}",
            self.label,
            self.order,
            self.cost,
            self.path.join(" -> ")
        )
    }
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The goal was resolved.
    Found(Route),
    /// Start or goal is not in the graph, or the goal is unreachable.
    NotFound,
}

impl Outcome {
    /// The route, if one was found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Outcome::Found(route) => Some(route),
            Outcome::NotFound => None,
        }
    }

    /// Whether a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Outcome::Found(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Found(route) => fmt::Display::fmt(route, f),
            Outcome::NotFound => f.write_str("not found"),
        }
    }
}

/// Shared flag a caller can raise to stop a running search.
///
/// Checked once per loop iteration, before the next node is selected.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Options for a single search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Maximum number of nodes to resolve before giving up (None = unbounded).
    pub max_expansions: Option<usize>,
    /// Cooperative cancellation.
    #[serde(skip)]
    pub cancel: Option<CancelFlag>,
}

impl SearchOptions {
    /// Parse options from a TOML fragment such as `max_expansions = 100`.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| SearchError::Config(e.to_string()))
    }

    /// Set the expansion budget.
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Attach a cancel flag.
    pub fn with_cancel(mut self, flag: CancelFlag) -> Self {
        self.cancel = Some(flag);
        self
    }
}
