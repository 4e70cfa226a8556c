use super::*;
use crate::error::ShortpathError;
use std::collections::HashMap;

fn sample_graph() -> Graph<&'static str> {
    let mut graph = Graph::new();
    for (a, b, w) in [
        ("R", "E", 2),
        ("R", "C", 4),
        ("E", "G", 7),
        ("E", "F", 3),
        ("C", "F", 1),
        ("C", "D", 5),
        ("G", "D", 2),
        ("F", "B", 8),
        ("D", "B", 6),
    ] {
        graph.add_edge(a, b, w);
    }
    graph
}

/// Assert `path` starts at the source, ends at `node`, only uses arcs of the
/// graph, and sums to the reported distance.
fn assert_valid_shortest_path<N>(graph: &Graph<N>, result: &ShortestPaths<N>, node: &N)
where
    N: Clone + Eq + Hash + Display + std::fmt::Debug,
{
    let path = result.path(node).expect("reachable node has a path");
    assert_eq!(path.first(), Some(result.source()));
    assert_eq!(path.last(), Some(node));
    let cost = result
        .path_cost(graph, node)
        .expect("path only uses existing arcs");
    assert_eq!(Some(cost), result.distance(node), "path cost for {node}");
}

/// Small deterministic generator for synthetic graphs
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

fn random_graph(seed: u64, nodes: usize) -> Graph<usize> {
    let mut rng = Lcg(seed);
    let mut graph = Graph::new();
    for n in 0..nodes {
        graph.add_node(n);
    }
    for a in 0..nodes {
        for b in (a + 1)..nodes {
            if rng.next() % 100 < 45 {
                graph.add_edge(a, b, (rng.next() % 10) as i32);
            }
        }
    }
    graph
}

/// Minimal path cost to every reachable node by enumerating simple paths
fn brute_force(graph: &Graph<usize>, source: usize) -> HashMap<usize, f64> {
    fn walk(
        graph: &Graph<usize>,
        node: usize,
        cost: f64,
        on_path: &mut [bool],
        best: &mut HashMap<usize, f64>,
    ) {
        let entry = best.entry(node).or_insert(f64::INFINITY);
        if cost < *entry {
            *entry = cost;
        }
        for &(next, weight) in graph.neighbors(&node) {
            if !on_path[next] {
                on_path[next] = true;
                walk(graph, next, cost + weight.value(), on_path, best);
                on_path[next] = false;
            }
        }
    }

    let mut best = HashMap::new();
    let mut on_path = vec![false; graph.node_count()];
    on_path[source] = true;
    walk(graph, source, 0.0, &mut on_path, &mut best);
    best
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        position: 0,
        distance: Weight::from(1),
        seq: 0,
    };
    let entry2 = HeapEntry {
        position: 1,
        distance: Weight::from(2),
        seq: 1,
    };
    let entry3 = HeapEntry {
        position: 2,
        distance: Weight::from(1),
        seq: 2,
    };

    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

    // Equal distances fall back to insertion order
    assert_eq!(entry1.cmp(&entry3), Ordering::Less);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(entry2));
    heap.push(Reverse(entry3));
    heap.push(Reverse(entry1));
    let order: Vec<usize> =
        std::iter::from_fn(|| heap.pop().map(|Reverse(e)| e.position)).collect();
    assert_eq!(order, vec![0, 2, 1]);
}

#[test]
fn test_sample_graph_distances() {
    let graph = sample_graph();
    let result = compute(&graph, &"R").unwrap();

    let expected = [
        ("R", 0),
        ("E", 2),
        ("C", 4),
        ("F", 5),
        ("G", 9),
        ("D", 9),
        ("B", 13),
    ];
    for (node, distance) in expected {
        assert_eq!(result.distance(&node), Some(Weight::from(distance)), "{node}");
    }
}

#[test]
fn test_sample_graph_paths_are_minimal() {
    let graph = sample_graph();
    let result = compute(&graph, &"R").unwrap();

    assert_eq!(result.path(&"R"), Some(&["R"][..]));
    assert_eq!(result.path(&"E"), Some(&["R", "E"][..]));
    assert_eq!(result.path(&"C"), Some(&["R", "C"][..]));
    assert_eq!(result.path(&"G"), Some(&["R", "E", "G"][..]));
    for node in graph.nodes() {
        assert_valid_shortest_path(&graph, &result, node);
    }
    assert_eq!(result.reachable_count(), 7);
}

#[test]
fn test_sample_graph_trace_order() {
    let graph = sample_graph();
    let (_, events) = compute_traced(&graph, &"R").unwrap();

    assert_eq!(
        events[0],
        TraceEvent::Processing {
            node: "R",
            distance: Weight::ZERO
        }
    );
    assert_eq!(
        events[1],
        TraceEvent::Updated {
            node: "E",
            previous_distance: Weight::INFINITY,
            new_distance: Weight::from(2),
        }
    );
    assert_eq!(
        events[2],
        TraceEvent::Updated {
            node: "C",
            previous_distance: Weight::INFINITY,
            new_distance: Weight::from(4),
        }
    );
    assert_eq!(
        events[3],
        TraceEvent::Processing {
            node: "E",
            distance: Weight::from(2)
        }
    );

    let processing = events.iter().filter(|e| e.is_processing()).count();
    let updated = events.len() - processing;
    assert_eq!(processing, 7);
    assert_eq!(updated, 6);
}

#[test]
fn test_processing_distances_never_decrease() {
    let graph = sample_graph();
    let (_, events) = compute_traced(&graph, &"R").unwrap();

    let popped: Vec<Weight> = events
        .iter()
        .filter_map(|e| match e {
            TraceEvent::Processing { distance, .. } => Some(*distance),
            TraceEvent::Updated { .. } => None,
        })
        .collect();
    assert!(popped.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_updates_are_strict_improvements() {
    let graph = sample_graph();
    let (_, events) = compute_traced(&graph, &"R").unwrap();

    let mut last_seen: HashMap<&str, Weight> = HashMap::new();
    for event in &events {
        if let TraceEvent::Updated {
            node,
            previous_distance,
            new_distance,
        } = event
        {
            let expected_previous = last_seen.get(node).copied().unwrap_or(Weight::INFINITY);
            assert_eq!(*previous_distance, expected_previous);
            assert!(new_distance < previous_distance);
            last_seen.insert(*node, *new_distance);
        }
    }
}

#[test]
fn test_source_trivial_case() {
    let graph = sample_graph();
    let result = compute(&graph, &"D").unwrap();
    assert_eq!(result.source(), &"D");
    assert_eq!(result.distance(&"D"), Some(Weight::ZERO));
    assert_eq!(result.path(&"D"), Some(&["D"][..]));
}

#[test]
fn test_single_node_graph() {
    let mut graph = Graph::new();
    graph.add_node("S");

    let mut run = Dijkstra::new(&graph, &"S").unwrap();
    let events: Vec<_> = run.by_ref().collect();
    assert_eq!(
        events,
        vec![TraceEvent::Processing {
            node: "S",
            distance: Weight::ZERO
        }]
    );
    assert_eq!(run.stats().pops, 1);

    let (distances, paths) = run.finish().into_maps();
    assert_eq!(distances, HashMap::from([("S", Weight::ZERO)]));
    assert_eq!(paths, HashMap::from([("S", vec!["S"])]));
}

#[test]
fn test_unreachable_nodes_stay_infinite() {
    let mut graph = sample_graph();
    graph.add_edge("X", "Y", 1);
    graph.add_node("Z");

    let result = compute(&graph, &"R").unwrap();
    for node in ["X", "Y", "Z"] {
        assert_eq!(result.distance(&node), Some(Weight::INFINITY));
        assert!(!result.is_reachable(&node));
        assert!(result.path_edges(&node).is_empty());
        assert_eq!(result.path_cost(&graph, &node), None);
    }
    let unreachable: Vec<_> = result.unreachable().copied().collect();
    assert_eq!(unreachable, vec!["X", "Y", "Z"]);

    let (distances, paths) = result.into_maps();
    assert_eq!(distances.len(), 10);
    assert_eq!(paths.len(), 7);
    assert!(!paths.contains_key("X"));
}

#[test]
fn test_stale_entries_are_tolerated() {
    // B is queued at 10 via A, then improved to 2 via C
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 10);
    graph.add_edge("A", "C", 1);
    graph.add_edge("C", "B", 1);

    let mut run = Dijkstra::new(&graph, &"A").unwrap();
    let events: Vec<_> = run.by_ref().collect();
    let stats = run.stats();
    let result = run.finish();

    assert_eq!(result.distance(&"B"), Some(Weight::from(2)));
    assert_eq!(result.path(&"B"), Some(&["A", "C", "B"][..]));
    assert_eq!(stats.stale_pops, 1);
    assert_eq!(stats.pops, 4);
    assert_eq!(stats.relaxations, 3);

    // The stale pop is reported but relaxes nothing
    let last = events.last().unwrap();
    assert_eq!(
        last,
        &TraceEvent::Processing {
            node: "B",
            distance: Weight::from(10)
        }
    );
}

#[test]
fn test_missing_source_rejected() {
    let graph = sample_graph();
    let err = compute(&graph, &"Q").unwrap_err();
    assert!(matches!(err, ShortpathError::InvalidInput { .. }));
    assert!(Dijkstra::new(&graph, &"Q").is_err());
}

#[test]
fn test_negative_weight_rejected() {
    let mut graph = sample_graph();
    graph.add_edge("B", "R", -1);
    let err = compute(&graph, &"R").unwrap_err();
    match err {
        ShortpathError::InvalidInput { reason } => assert!(reason.contains("negative weight")),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn test_dangling_neighbor_rejected() {
    let mut graph = sample_graph();
    graph.add_arc("R", "Nowhere", 1);
    assert!(matches!(
        compute(&graph, &"R"),
        Err(ShortpathError::InvalidInput { .. })
    ));
}

#[test]
fn test_input_graph_not_mutated() {
    let graph = sample_graph();
    let before = graph.clone();
    let _ = compute_traced(&graph, &"R").unwrap();
    assert_eq!(graph, before);
}

#[test]
fn test_deterministic_results() {
    let graph = sample_graph();
    let first = compute_traced(&graph, &"R").unwrap();
    let second = compute_traced(&graph, &"R").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_directed_arcs_respected() {
    let mut graph = Graph::new();
    graph.add_node("B");
    graph.add_arc("A", "B", 1);

    let from_a = compute(&graph, &"A").unwrap();
    assert_eq!(from_a.distance(&"B"), Some(Weight::from(1)));

    let from_b = compute(&graph, &"B").unwrap();
    assert_eq!(from_b.distance(&"A"), Some(Weight::INFINITY));
}

#[test]
fn test_zero_and_fractional_weights() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 0);
    graph.add_edge("B", "C", Weight::new(0.5));
    graph.add_edge("A", "C", Weight::new(0.75));

    let result = compute(&graph, &"A").unwrap();
    assert_eq!(result.distance(&"B"), Some(Weight::ZERO));
    assert_eq!(result.distance(&"C"), Some(Weight::new(0.5)));
    assert_eq!(result.path(&"C"), Some(&["A", "B", "C"][..]));
}

#[test]
fn test_matches_brute_force_on_synthetic_graphs() {
    for seed in 1..=25 {
        let graph = random_graph(seed, 7);
        for source in 0..graph.node_count() {
            let result = compute(&graph, &source).unwrap();
            let expected = brute_force(&graph, source);

            for (node, distance) in result.distances() {
                match expected.get(node) {
                    Some(best) => {
                        assert_eq!(
                            distance.value(),
                            *best,
                            "seed {seed} source {source} node {node}"
                        );
                        assert_valid_shortest_path(&graph, &result, node);
                    }
                    None => {
                        assert_eq!(distance, Weight::INFINITY);
                        assert!(!result.is_reachable(node));
                    }
                }
            }
        }
    }
}

#[test]
fn test_concurrent_calls_share_graph() {
    let graph = sample_graph();
    let results: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = graph
            .nodes()
            .iter()
            .map(|source| {
                let graph = &graph;
                scope.spawn(move || compute(graph, source))
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });

    for (source, result) in graph.nodes().iter().zip(&results) {
        assert_eq!(result.distance(source), Some(Weight::ZERO));
        assert_eq!(result.reachable_count(), graph.node_count());
    }
    // Undirected: d(R, B) == d(B, R)
    assert_eq!(results[0].distance(&"B"), results[6].distance(&"R"));
}
