//! Property tests for the search engine.
//!
//! Random small graphs are checked against a reference Dijkstra:
//! - optimal cost under a zero heuristic and under an exact-distance heuristic
//! - returned paths follow real edges and add up to the reported cost
//! - repeated searches agree
//! - the frontier hands out resolution orders 0, 1, 2, ... in `f` order

use pathwise::{search, Cost, Frontier, Graph, Outcome, SearchNode};
use proptest::prelude::*;

// =============================================================================
// Test Utilities
// =============================================================================

/// Vertex count plus `(from, to, weight)` edges over indices.
#[derive(Debug, Clone)]
struct Topology {
    n: usize,
    edges: Vec<(usize, usize, Cost)>,
}

fn topology() -> impl Strategy<Value = Topology> {
    (1usize..10).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0u64..20), 0..30)
            .prop_map(move |edges| Topology { n, edges })
    })
}

fn label(i: usize) -> String {
    format!("v{}", i)
}

/// Reference single-source shortest distances, O(n^2).
fn dijkstra(n: usize, edges: &[(usize, usize, Cost)], source: usize) -> Vec<Option<Cost>> {
    let mut dist: Vec<Option<Cost>> = vec![None; n];
    let mut done = vec![false; n];
    dist[source] = Some(0);

    loop {
        let next = (0..n)
            .filter(|&v| !done[v])
            .filter_map(|v| dist[v].map(|d| (d, v)))
            .min();
        let Some((d, v)) = next else { break };
        done[v] = true;
        for &(from, to, w) in edges {
            if from == v && dist[to].map_or(true, |old| d + w < old) {
                dist[to] = Some(d + w);
            }
        }
    }
    dist
}

fn build(topo: &Topology, heuristic: impl Fn(usize) -> Cost) -> Graph {
    let mut g = Graph::new();
    for v in 0..topo.n {
        g.add_vertex(&label(v), heuristic(v)).unwrap();
    }
    for &(from, to, w) in &topo.edges {
        g.add_edge(w, &label(from), &label(to)).unwrap();
    }
    g
}

/// Exact remaining distance to `goal`; vertices that cannot reach it get a
/// large constant, which keeps the heuristic consistent.
fn exact_heuristic(topo: &Topology, goal: usize) -> Vec<Cost> {
    let reversed: Vec<(usize, usize, Cost)> =
        topo.edges.iter().map(|&(f, t, w)| (t, f, w)).collect();
    dijkstra(topo.n, &reversed, goal)
        .into_iter()
        .map(|d| d.unwrap_or(10_000))
        .collect()
}

fn assert_matches_reference(
    topo: &Topology,
    g: &Graph,
    start: usize,
    goal: usize,
) -> Result<(), TestCaseError> {
    let expected = dijkstra(topo.n, &topo.edges, start)[goal];
    let outcome = search(g, &label(start), &label(goal)).unwrap();

    match (expected, outcome) {
        (None, Outcome::NotFound) => {}
        (Some(cost), Outcome::Found(route)) => {
            prop_assert_eq!(route.cost, cost);
            prop_assert_eq!(route.label, label(goal));
            prop_assert_eq!(route.path.first(), Some(&label(start)));
            prop_assert_eq!(route.path.last(), Some(&label(goal)));

            // Every hop is an edge; cheapest parallel edges sum to the cost
            let mut total = 0;
            for hop in route.path.windows(2) {
                let w = g
                    .adjacency_of(&hop[0])
                    .unwrap()
                    .iter()
                    .filter(|n| n.label == hop[1])
                    .map(|n| n.weight)
                    .min();
                prop_assert!(w.is_some(), "no edge {} -> {}", hop[0], hop[1]);
                total += w.unwrap_or_default();
            }
            prop_assert_eq!(total, cost);
        }
        (expected, outcome) => {
            prop_assert!(false, "expected {:?}, got {:?}", expected, outcome);
        }
    }
    Ok(())
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn zero_heuristic_is_optimal(topo in topology(), s in 0usize..10, t in 0usize..10) {
        let (start, goal) = (s % topo.n, t % topo.n);
        let g = build(&topo, |_| 0);
        assert_matches_reference(&topo, &g, start, goal)?;
    }

    #[test]
    fn exact_heuristic_is_optimal(topo in topology(), s in 0usize..10, t in 0usize..10) {
        let (start, goal) = (s % topo.n, t % topo.n);
        let h = exact_heuristic(&topo, goal);
        let g = build(&topo, |v| h[v]);
        assert_matches_reference(&topo, &g, start, goal)?;
    }

    #[test]
    fn repeated_search_is_identical(topo in topology(), s in 0usize..10, t in 0usize..10) {
        let (start, goal) = (label(s % topo.n), label(t % topo.n));
        let g = build(&topo, |v| (v as Cost) % 3);
        let first = search(&g, &start, &goal).unwrap();
        let second = search(&g, &start, &goal).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn start_is_goal(topo in topology(), s in 0usize..10) {
        let start = label(s % topo.n);
        let g = build(&topo, |v| v as Cost);
        let route = search(&g, &start, &start).unwrap().route().cloned().unwrap();
        prop_assert_eq!(route.cost, 0);
        prop_assert_eq!(route.order, 0);
        prop_assert_eq!(route.path, vec![start]);
    }

    #[test]
    fn absent_endpoints_not_found(topo in topology()) {
        let g = build(&topo, |_| 0);
        prop_assert_eq!(search(&g, "missing", &label(0)).unwrap(), Outcome::NotFound);
        prop_assert_eq!(search(&g, &label(0), "missing").unwrap(), Outcome::NotFound);
        prop_assert_eq!(g.vertex_count(), topo.n);
        prop_assert_eq!(g.edge_count(), topo.edges.len());
    }

    #[test]
    fn frontier_orders_follow_estimates(nodes in prop::collection::vec((0u64..50, 0u64..50), 1..40)) {
        let mut frontier = Frontier::new();
        for (i, &(g, h)) in nodes.iter().enumerate() {
            frontier.add(SearchNode::new(label(i), g, h, vec![label(i)])).unwrap();
        }

        let mut previous: Option<(u128, usize)> = None;
        for expected_order in 0..nodes.len() {
            let node = frontier.select_and_resolve().unwrap();
            prop_assert_eq!(node.order(), Some(expected_order));

            let slot: usize = node.label[1..].parse().unwrap();
            let key = (node.estimate(), slot);
            if let Some(prev) = previous {
                // Non-decreasing f, ties broken by discovery order
                prop_assert!(prev < key, "{:?} selected before {:?}", prev, key);
            }
            previous = Some(key);
        }
        prop_assert!(!frontier.has_unresolved());
    }
}
