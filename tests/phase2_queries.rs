//! Phase 2 tests: the query engine.

use std::collections::{HashMap, HashSet};

use graph_queries::engine::GraphQueries;
use graph_queries::graph::{AirportGraph, GraphBuilder, VertexGraph};
use graph_queries::types::VertexId;

// ==================== Helper ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Run `print_short_words` and return what it wrote.
fn printed_short_words(graph: &VertexGraph<String>, start: Option<VertexId>, k: i64) -> String {
    let mut buf = Vec::new();
    GraphQueries::new()
        .print_short_words(graph, start, k, &mut buf)
        .unwrap();
    String::from_utf8(buf).unwrap()
}

/// Word graph used by several tests:
///
/// ```text
/// sun -> [moonlight, at]
/// moonlight -> [sun, starry]
/// at -> [starry]
/// starry -> []
/// ```
fn word_graph() -> (VertexGraph<String>, Vec<VertexId>) {
    let mut builder = GraphBuilder::new();
    let sun = builder.vertex("sun".to_string());
    let moon = builder.vertex("moonlight".to_string());
    let at = builder.vertex("at".to_string());
    let starry = builder.vertex("starry".to_string());
    builder
        .link_all(sun, &[moon, at])
        .link_all(moon, &[sun, starry])
        .link(at, starry);
    (builder.build().unwrap(), vec![sun, moon, at, starry])
}

// ==================== Short Words Tests ====================

#[test]
fn test_short_words_absent_start_prints_nothing() {
    let (graph, _) = word_graph();
    assert_eq!(printed_short_words(&graph, None, 10), "");
}

#[test]
fn test_short_words_non_positive_k_prints_nothing() {
    let (graph, ids) = word_graph();
    assert_eq!(printed_short_words(&graph, Some(ids[0]), 0), "");
    assert_eq!(printed_short_words(&graph, Some(ids[0]), -3), "");
}

#[test]
fn test_short_words_bfs_order_and_strict_limit() {
    init_logger();
    let (graph, ids) = word_graph();

    // BFS: sun, moonlight, at, starry. "starry" has 6 chars, not < 6.
    assert_eq!(printed_short_words(&graph, Some(ids[0]), 6), "sun\nat\n");
    assert_eq!(
        GraphQueries::new().short_words(&graph, Some(ids[0]), 7),
        vec!["sun", "at", "starry"]
    );
}

#[test]
fn test_short_words_only_reachable() {
    let (graph, ids) = word_graph();
    // From "at" only at and starry are reachable.
    assert_eq!(printed_short_words(&graph, Some(ids[2]), 100), "at\nstarry\n");
}

#[test]
fn test_short_words_none_qualify() {
    let (graph, ids) = word_graph();
    assert_eq!(printed_short_words(&graph, Some(ids[0]), 2), "");
}

#[test]
fn test_short_words_counts_characters() {
    let mut graph = VertexGraph::new();
    let id = graph.add_vertex("héé".to_string());
    assert_eq!(printed_short_words(&graph, Some(id), 4), "héé\n");
}

#[test]
fn test_short_words_counts_scalar_values_not_utf16_units() {
    let mut graph = VertexGraph::new();
    let emoji = graph.add_vertex("😀".to_string());
    let engine = GraphQueries::new();

    assert_eq!(engine.short_words(&graph, Some(emoji), 2), vec!["😀"]);
    assert!(engine.short_words(&graph, Some(emoji), 1).is_empty());
}

#[test]
fn test_short_words_foreign_start_is_absent() {
    let (big, ids) = word_graph();
    let mut small = VertexGraph::new();
    small.add_vertex("x".to_string());

    assert!(GraphQueries::new().short_words(&small, Some(ids[3]), 5).is_empty());
    assert_eq!(big.vertex_count(), 4);
}

// ==================== Longest Word Tests ====================

#[test]
fn test_longest_word_absent() {
    let graph: VertexGraph<String> = VertexGraph::new();
    assert_eq!(GraphQueries::new().longest_word(&graph, None), "");
}

#[test]
fn test_longest_word_isolated_vertex() {
    let mut graph = VertexGraph::new();
    let cat = graph.add_vertex("cat");
    assert_eq!(GraphQueries::new().longest_word(&graph, Some(cat)), "cat");
}

#[test]
fn test_longest_word_chain() {
    let mut builder = GraphBuilder::new();
    let ids = builder.chain(["a", "bb", "ccc"]);
    let graph = builder.build().unwrap();

    let engine = GraphQueries::new();
    assert_eq!(engine.longest_word(&graph, Some(ids[0])), "ccc");
    // Only downstream vertices count.
    assert_eq!(engine.longest_word(&graph, Some(ids[2])), "ccc");
    assert_eq!(engine.longest_word(&graph, Some(ids[1])), "ccc");
}

#[test]
fn test_longest_word_borrows_from_graph() {
    let mut builder = GraphBuilder::new();
    let ids = builder.chain(["a".to_string(), "😀😀".to_string(), "xyz".to_string()]);
    let graph = builder.build().unwrap();

    let longest = GraphQueries::new().longest_word(&graph, Some(ids[0]));
    // "😀😀" is 2 chars, "xyz" is 3.
    assert_eq!(longest, "xyz");
    let stored = graph.value(ids[2]).unwrap().as_str();
    assert!(std::ptr::eq(longest, stored));
}

#[test]
fn test_longest_word_includes_start_and_cycles() {
    let (graph, ids) = word_graph();
    let engine = GraphQueries::new();
    assert_eq!(engine.longest_word(&graph, Some(ids[0])), "moonlight");
    assert_eq!(engine.longest_word(&graph, Some(ids[1])), "moonlight");
    assert_eq!(engine.longest_word(&graph, Some(ids[2])), "starry");
}

#[test]
fn test_longest_word_tie_keeps_first_in_depth_first_order() {
    // root -> [left, right]; left -> [deep]
    // "deep" is entered before "right", both 4 chars.
    let mut builder = GraphBuilder::new();
    let root = builder.vertex("r");
    let left = builder.vertex("le");
    let right = builder.vertex("wxyz");
    let deep = builder.vertex("abcd");
    builder.link_all(root, &[left, right]).link(left, deep);
    let graph = builder.build().unwrap();

    assert_eq!(GraphQueries::new().longest_word(&graph, Some(root)), "abcd");
}

#[test]
fn test_longest_word_deep_chain() {
    let mut builder = GraphBuilder::new();
    let mut words: Vec<String> = (0..100_000).map(|_| "w".to_string()).collect();
    words[99_999] = "tail".to_string();
    let ids = builder.chain(words);
    let graph = builder.build().unwrap();

    assert_eq!(GraphQueries::new().longest_word(&graph, Some(ids[0])), "tail");
}

// ==================== Self Looper Tests ====================

#[test]
fn test_self_loopers_absent() {
    let graph: VertexGraph<u32> = VertexGraph::new();
    let mut buf = Vec::new();
    GraphQueries::new()
        .print_self_loopers(&graph, None, &mut buf)
        .unwrap();
    assert!(buf.is_empty());
}

#[test]
fn test_self_loopers_single() {
    let mut builder = GraphBuilder::new();
    let me = builder.vertex(7u32);
    builder.self_loop(me);
    let graph = builder.build().unwrap();

    let mut buf = Vec::new();
    GraphQueries::new()
        .print_self_loopers(&graph, Some(me), &mut buf)
        .unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "7\n");
}

#[test]
fn test_self_loopers_none_reachable() {
    let (graph, ids) = word_graph();
    assert!(GraphQueries::new().self_loopers(&graph, Some(ids[0])).is_empty());
}

#[test]
fn test_self_loopers_bfs_order_and_identity() {
    // Two vertices hold "dup"; only the second loops on itself.
    let mut builder = GraphBuilder::new();
    let start = builder.vertex("start");
    let first = builder.vertex("dup");
    let second = builder.vertex("dup");
    let far = builder.vertex("far");
    let unreached = builder.vertex("island");
    builder
        .link_all(start, &[first, second])
        .link(first, far)
        .self_loop(far)
        .self_loop(second)
        .self_loop(unreached);
    let graph = builder.build().unwrap();

    let loopers = GraphQueries::new().self_loopers(&graph, Some(start));
    assert_eq!(loopers, vec![&"dup", &"far"]);
}

// ==================== Can Reach Tests ====================

#[test]
fn test_can_reach_absent_inputs() {
    let mut network = AirportGraph::new();
    let a = network.add_airport("A").unwrap();
    let engine = GraphQueries::new();

    assert!(!engine.can_reach(&network, None, Some(a)));
    assert!(!engine.can_reach(&network, Some(a), None));
    assert!(!engine.can_reach(&network, None, None));
}

#[test]
fn test_can_reach_self_without_flights() {
    let mut network = AirportGraph::new();
    let x = network.add_airport("X").unwrap();
    assert!(GraphQueries::new().can_reach(&network, Some(x), Some(x)));
}

#[test]
fn test_can_reach_chain_and_isolated() {
    init_logger();
    let mut network = AirportGraph::new();
    let a = network.add_airport("A").unwrap();
    let b = network.add_airport("B").unwrap();
    let c = network.add_airport("C").unwrap();
    network.add_flight(a, c).unwrap();

    let engine = GraphQueries::new();
    assert!(!engine.can_reach(&network, Some(a), Some(b)));

    network.add_flight(c, b).unwrap();
    assert!(engine.can_reach(&network, Some(a), Some(b)));
    // Flights are directed.
    assert!(!engine.can_reach(&network, Some(b), Some(a)));
}

#[test]
fn test_can_reach_with_cycles() {
    let mut network: HashMap<u32, Vec<u32>> = HashMap::new();
    network.insert(1, vec![2]);
    network.insert(2, vec![3, 1]);
    network.insert(3, vec![2]);

    let engine = GraphQueries::new();
    assert!(engine.can_reach(&network, Some(1), Some(3)));
    assert!(!engine.can_reach(&network, Some(1), Some(4)));
}

// ==================== Unreachable Tests ====================

#[test]
fn test_unreachable_basic() {
    let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
    graph.insert("A", vec!["B"]);
    graph.insert("B", vec![]);
    graph.insert("C", vec![]);

    let result = GraphQueries::new().unreachable(&graph, &"A");
    assert_eq!(result, HashSet::from(["C"]));
}

#[test]
fn test_unreachable_start_not_a_key() {
    let mut graph: HashMap<&str, Vec<&str>> = HashMap::new();
    graph.insert("A", vec!["B"]);
    graph.insert("B", vec!["A"]);

    let result = GraphQueries::new().unreachable(&graph, &"Z");
    assert_eq!(result, HashSet::from(["A", "B"]));
}

#[test]
fn test_unreachable_dangling_neighbors_are_leaves() {
    let mut graph: HashMap<String, Vec<String>> = HashMap::new();
    graph.insert("A".into(), vec!["ghost".into(), "B".into()]);
    graph.insert("B".into(), vec!["C".into()]);
    graph.insert("C".into(), vec![]);
    graph.insert("D".into(), vec!["A".into()]);

    let result = GraphQueries::new().unreachable(&graph, &"A".to_string());
    assert_eq!(result, HashSet::from(["D".to_string()]));
}

#[test]
fn test_unreachable_empty_graph() {
    let graph: HashMap<u8, Vec<u8>> = HashMap::new();
    assert!(GraphQueries::new().unreachable(&graph, &0).is_empty());
}

// ==================== Idempotence ====================

#[test]
fn test_queries_are_idempotent() {
    let (graph, ids) = word_graph();
    let snapshot = graph.clone();
    let engine = GraphQueries::new();

    for _ in 0..3 {
        assert_eq!(printed_short_words(&graph, Some(ids[0]), 6), "sun\nat\n");
        assert_eq!(engine.longest_word(&graph, Some(ids[0])), "moonlight");
        assert!(engine.self_loopers(&graph, Some(ids[0])).is_empty());
    }
    assert_eq!(graph, snapshot);

    let mut adjacency: HashMap<u8, Vec<u8>> = HashMap::new();
    adjacency.insert(1, vec![2]);
    adjacency.insert(2, vec![]);
    adjacency.insert(3, vec![1]);
    let before = adjacency.clone();
    let first = engine.unreachable(&adjacency, &1);
    let second = engine.unreachable(&adjacency, &1);
    assert_eq!(first, second);
    assert_eq!(adjacency, before);
}
