//! Pathwise: lowest-cost paths over weighted directed graphs with A*.
//!
//! Build a [`Graph`] whose vertices carry heuristic estimates, then call
//! [`search`]. A missing path is an ordinary [`Outcome::NotFound`], not an
//! error.
//!
//! ```
//! use pathwise::{search, Graph, Outcome};
//!
//! let mut g = Graph::new();
//! g.add_vertex("A", 0).unwrap();
//! g.add_vertex("B", 0).unwrap();
//! g.add_edge(3, "A", "B").unwrap();
//!
//! assert!(search(&g, "A", "B").unwrap().is_found());
//! assert_eq!(search(&g, "B", "A").unwrap(), Outcome::NotFound);
//! ```

pub mod types;

pub use types::*;
