//! Property Tests for the Shortest-Path Engine
//!
//! Random small graphs are checked against a Floyd-Warshall brute force and
//! against the structural guarantees of the trace.

use proptest::prelude::*;

use linkstate_core::routing::{reconstruct_path, ForwardingTable};
use linkstate_core::spf::{compute_shortest_paths_from, Cost};
use linkstate_core::{Graph, NodeId};

/// Up to seven nodes, always declared in index order, with random edges.
/// Self-loops and repeated pairs are dropped.
fn arb_graph() -> impl Strategy<Value = Graph> {
    (1usize..=7)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0..n, 0..n, 0i64..20), 0..16),
            )
        })
        .prop_map(|(n, edges)| {
            let mut graph = Graph::new();
            for i in 0..n {
                graph.add_node(&format!("n{i}"));
            }
            for (a, b, weight) in edges {
                let _ = graph.add_edge(&format!("n{a}"), &format!("n{b}"), weight);
            }
            graph
        })
}

fn arb_graph_and_origin() -> impl Strategy<Value = (Graph, NodeId)> {
    arb_graph().prop_flat_map(|graph| {
        let n = graph.node_count();
        (Just(graph), (0..n).prop_map(NodeId::from))
    })
}

/// All-pairs shortest paths by Floyd-Warshall.
fn brute_force(graph: &Graph) -> Vec<Vec<Option<u128>>> {
    let n = graph.node_count();
    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for edge in graph.edges() {
        dist[edge.a.index()][edge.b.index()] = Some(u128::from(edge.weight));
        dist[edge.b.index()][edge.a.index()] = Some(u128::from(edge.weight));
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(ik), Some(kj)) = (dist[i][k], dist[k][j]) {
                    if dist[i][j].map_or(true, |ij| ik + kj < ij) {
                        dist[i][j] = Some(ik + kj);
                    }
                }
            }
        }
    }
    dist
}

proptest! {
    #[test]
    fn final_distances_match_brute_force((graph, origin) in arb_graph_and_origin()) {
        let trace = compute_shortest_paths_from(&graph, origin).unwrap();
        let expected = brute_force(&graph);

        for node in graph.nodes() {
            let want = Cost::from(expected[origin.index()][node.index()]);
            prop_assert_eq!(trace.distance(node), Some(want));
        }
    }

    #[test]
    fn one_snapshot_per_node((graph, origin) in arb_graph_and_origin()) {
        let trace = compute_shortest_paths_from(&graph, origin).unwrap();

        prop_assert_eq!(trace.len(), graph.node_count());
        prop_assert_eq!(trace.processed().len(), graph.node_count());
        prop_assert_eq!(trace.processed()[0], origin);

        let mut seen = trace.processed().to_vec();
        seen.sort();
        seen.dedup();
        prop_assert_eq!(seen.len(), graph.node_count());
    }

    #[test]
    fn distances_never_increase((graph, origin) in arb_graph_and_origin()) {
        let trace = compute_shortest_paths_from(&graph, origin).unwrap();

        for pair in trace.snapshots().windows(2) {
            for (node, cost) in pair[1].distances() {
                prop_assert!(*cost <= pair[0].distance(*node).unwrap());
            }
        }
    }

    #[test]
    fn origin_is_never_in_the_maps((graph, origin) in arb_graph_and_origin()) {
        let trace = compute_shortest_paths_from(&graph, origin).unwrap();

        for snapshot in trace.snapshots() {
            prop_assert!(snapshot.distance(origin).is_none());
            prop_assert!(snapshot.predecessor(origin).is_none());
        }
        let path = reconstruct_path(trace.final_predecessors(), origin, origin).unwrap();
        prop_assert!(path.is_empty());
    }

    #[test]
    fn paths_cost_their_distance((graph, origin) in arb_graph_and_origin()) {
        let trace = compute_shortest_paths_from(&graph, origin).unwrap();

        for node in graph.nodes().filter(|&n| n != origin) {
            let Some(Cost::Finite(distance)) = trace.distance(node) else { continue };
            let path = reconstruct_path(trace.final_predecessors(), origin, node).unwrap();
            prop_assert_eq!(path.destination(), node);
            prop_assert_eq!(path.cost(&graph), Some(distance));
        }
    }

    #[test]
    fn forwarding_covers_exactly_reachable_nodes((graph, origin) in arb_graph_and_origin()) {
        let trace = compute_shortest_paths_from(&graph, origin).unwrap();
        let table = ForwardingTable::from_trace(&trace, &graph).unwrap();

        for node in graph.nodes().filter(|&n| n != origin) {
            let reachable = trace.distance(node).is_some_and(|c| c.is_finite());
            prop_assert_eq!(table.contains(node), reachable);
            if let Some(hop) = table.next_hop(node) {
                prop_assert!(graph.weight(origin, hop).is_some());
            }
        }
    }

    #[test]
    fn reruns_are_identical((graph, origin) in arb_graph_and_origin()) {
        let first = compute_shortest_paths_from(&graph, origin).unwrap();
        let second = compute_shortest_paths_from(&graph, origin).unwrap();
        prop_assert_eq!(first, second);
    }
}
