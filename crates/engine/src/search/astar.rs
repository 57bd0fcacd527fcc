//! A* driver: select the best candidate, stop at the goal, relax neighbors.

use pathwise_core::{Cost, Graph};

use super::frontier::Frontier;
use super::node::SearchNode;
use super::types::{Outcome, Route, SearchOptions};
use crate::error::{Result, SearchError};

/// Find the cheapest path from `start` to `goal` with default options.
///
/// Returns `Outcome::NotFound` when either label is absent from the graph or
/// the goal is unreachable. Errors are reserved for arithmetic overflow of
/// path costs.
///
/// # Heuristic precondition
///
/// Resolved vertices are never reopened. The returned cost is optimal when
/// the heuristic is consistent: `h(v) <= w(v, u) + h(u)` for every edge
/// `v → u`, and `h(goal) == 0`. Heuristics are not checked.
///
/// # Example
///
/// ```
/// use pathwise_core::Graph;
/// use pathwise_engine::{search, Outcome};
///
/// let mut g = Graph::new();
/// g.add_vertex("A", 2).unwrap();
/// g.add_vertex("B", 1).unwrap();
/// g.add_vertex("C", 0).unwrap();
/// g.add_edge(1, "A", "B").unwrap();
/// g.add_edge(1, "B", "C").unwrap();
/// g.add_edge(5, "A", "C").unwrap();
///
/// let route = match search(&g, "A", "C").unwrap() {
///     Outcome::Found(route) => route,
///     Outcome::NotFound => unreachable!(),
/// };
/// assert_eq!(route.cost, 2);
/// assert_eq!(route.path, vec!["A", "B", "C"]);
/// ```
pub fn search(graph: &Graph, start: &str, goal: &str) -> Result<Outcome> {
    search_with(graph, start, goal, &SearchOptions::default())
}

/// Like [`search`], with an expansion budget and a cancel flag.
///
/// Both are checked at the top of every iteration that still has a candidate
/// to resolve. A drained frontier always yields `Outcome::NotFound`, even when
/// the budget is spent or the flag is raised.
pub fn search_with(
    graph: &Graph,
    start: &str,
    goal: &str,
    opts: &SearchOptions,
) -> Result<Outcome> {
    if !graph.contains(start) || !graph.contains(goal) {
        tracing::debug!(target: "pathwise::search", start, goal, "start or goal not in graph");
        return Ok(Outcome::NotFound);
    }

    tracing::debug!(target: "pathwise::search", start, goal, "search started");

    // Scoped to this call; nothing survives between searches.
    let mut frontier = Frontier::new();
    frontier.add(SearchNode::start(start, graph.heuristic_of(start)?))?;

    loop {
        // An exhausted frontier proves the goal unreachable, budget or not.
        if !frontier.has_unresolved() {
            break;
        }

        check_interrupt(opts, frontier.resolved_len())?;

        let current = frontier.select_and_resolve()?.clone();
        tracing::trace!(
            target: "pathwise::search",
            label = %current.label,
            order = ?current.order(),
            cost = current.cost,
            heuristic = current.heuristic,
            "resolved"
        );

        if current.label == goal {
            break;
        }

        expand(graph, &mut frontier, &current)?;
    }

    let outcome = match frontier.lookup_resolved(goal) {
        Some((order, node)) => Outcome::Found(Route {
            label: node.label.clone(),
            order,
            cost: node.cost,
            path: node.path.clone(),
        }),
        None => Outcome::NotFound,
    };

    tracing::debug!(
        target: "pathwise::search",
        start,
        goal,
        expanded = frontier.resolved_len(),
        discovered = frontier.discovered_len(),
        cost = outcome.route().map(|r| r.cost),
        "search finished"
    );
    Ok(outcome)
}

/// Relax every outgoing edge of a freshly resolved node.
fn expand(graph: &Graph, frontier: &mut Frontier, current: &SearchNode) -> Result<()> {
    for neighbor in graph.adjacency_of(&current.label)? {
        if frontier.lookup_resolved(&neighbor.label).is_some() {
            continue;
        }

        let cost = path_cost(current, neighbor.weight, &neighbor.label)?;
        let known = frontier.lookup_unresolved(&neighbor.label).map(|n| n.cost);

        match known {
            Some(old) if cost < old => {
                frontier.decrease_cost(&neighbor.label, cost, current.extend_path(&neighbor.label))?;
            }
            Some(_) => {}
            None => {
                let heuristic = graph.heuristic_of(&neighbor.label)?;
                frontier.add(current.successor(&neighbor.label, cost, heuristic))?;
            }
        }
    }
    Ok(())
}

fn path_cost(current: &SearchNode, weight: Cost, label: &str) -> Result<Cost> {
    current
        .cost
        .checked_add(weight)
        .ok_or_else(|| SearchError::CostOverflow {
            label: label.to_string(),
        })
}

fn check_interrupt(opts: &SearchOptions, expanded: usize) -> Result<()> {
    if opts.cancel.as_ref().is_some_and(|flag| flag.is_cancelled()) {
        tracing::warn!(target: "pathwise::search", expanded, "search cancelled");
        return Err(SearchError::Cancelled { expanded });
    }
    if let Some(max) = opts.max_expansions {
        if expanded >= max {
            tracing::warn!(target: "pathwise::search", expanded, max, "expansion budget exhausted");
            return Err(SearchError::BudgetExhausted { expanded });
        }
    }
    Ok(())
}
