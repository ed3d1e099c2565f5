//! Graph traversal algorithms (BFS, DFS preorder, adjacency reachability).
//!
//! Every traversal keeps its own frontier on the heap, so reachable sets of
//! any size are safe to walk.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

use crate::types::VertexId;

use super::VertexGraph;

/// Breadth-first visitation order from `start`, each vertex at most once.
///
/// Returns an empty order if `start` is not part of `graph`.
pub fn bfs_order<T>(graph: &VertexGraph<T>, start: VertexId) -> Vec<VertexId> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut order: Vec<VertexId> = Vec::new();
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for &neighbor in graph.neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    order
}

/// Depth-first preorder from `start`, identical to the order a recursive DFS
/// would enter vertices in.
///
/// Each stack frame remembers the next neighbor index to try, so a vertex's
/// later neighbors are only considered after its earlier neighbors' whole
/// subtrees have been entered.
pub fn dfs_preorder<T>(graph: &VertexGraph<T>, start: VertexId) -> Vec<VertexId> {
    if !graph.contains(start) {
        return Vec::new();
    }

    let mut visited: HashSet<VertexId> = HashSet::new();
    let mut order: Vec<VertexId> = Vec::new();
    let mut stack: Vec<(VertexId, usize)> = Vec::new();

    visited.insert(start);
    order.push(start);
    stack.push((start, 0));

    while let Some(frame) = stack.last_mut() {
        let (current, next) = *frame;
        let neighbors = graph.neighbors(current);
        if next >= neighbors.len() {
            stack.pop();
            continue;
        }
        frame.1 += 1;

        let neighbor = neighbors[next];
        if visited.insert(neighbor) {
            order.push(neighbor);
            stack.push((neighbor, 0));
        }
    }

    order
}

/// Keys of `adjacency` reachable from `start` by following listed neighbors.
///
/// Values that are not keys are leaves: they are neither expanded nor
/// reported. A `start` that is not a key reaches nothing.
pub fn reachable_keys<'a, T, S>(
    adjacency: &'a HashMap<T, Vec<T>, S>,
    start: &'a T,
) -> HashSet<&'a T>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    let mut reachable: HashSet<&'a T> = HashSet::new();
    let mut stack: Vec<&'a T> = vec![start];

    while let Some(current) = stack.pop() {
        let Some((key, neighbors)) = adjacency.get_key_value(current) else {
            continue;
        };
        if !reachable.insert(key) {
            continue;
        }
        // Reverse so the first listed neighbor is expanded first.
        stack.extend(neighbors.iter().rev());
    }

    reachable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn preorder_matches_recursive_order() {
        // a -> [b, c], b -> [d], d -> [c]
        let mut builder = GraphBuilder::new();
        let a = builder.vertex("a");
        let b = builder.vertex("b");
        let c = builder.vertex("c");
        let d = builder.vertex("d");
        builder.link_all(a, &[b, c]).link(b, d).link(d, c);
        let graph = builder.build().unwrap();

        assert_eq!(dfs_preorder(&graph, a), vec![a, b, d, c]);
        assert_eq!(bfs_order(&graph, a), vec![a, b, c, d]);
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let mut builder = GraphBuilder::new();
        let ids = builder.chain(0..200_000u32);
        let graph = builder.build().unwrap();

        assert_eq!(dfs_preorder(&graph, ids[0]).len(), 200_000);
    }

    #[test]
    fn reachable_keys_ignores_dangling() {
        let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
        adjacency.insert("a", vec!["ghost", "b"]);
        adjacency.insert("b", vec!["a"]);

        let reached = reachable_keys(&adjacency, &"a");
        assert_eq!(reached.len(), 2);
        assert!(!reached.contains(&"ghost"));
    }
}
