//! Query executor: the five traversal queries.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Display;
use std::hash::{BuildHasher, Hash};
use std::io::Write;

use log::debug;

use crate::graph::traversal::{bfs_order, dfs_preorder, reachable_keys};
use crate::graph::VertexGraph;
use crate::types::{FlightNetwork, GraphResult, VertexId};

/// Stateless executor for reachability queries.
///
/// Every query is total: an absent start (`None`, or an id that does not
/// belong to the graph) yields an empty or trivial result, never an error.
/// No query mutates its input.
pub struct GraphQueries;

impl GraphQueries {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Words reachable from `vertex` that are strictly shorter than `k`
    /// characters, in BFS order.
    ///
    /// Length is counted in Unicode scalar values (`chars().count()`), so
    /// `"😀"` has length 1 even though it is two UTF-16 code units.
    pub fn short_words<'g, S: AsRef<str>>(
        &self,
        graph: &'g VertexGraph<S>,
        vertex: Option<VertexId>,
        k: i64,
    ) -> Vec<&'g str> {
        let Some(start) = vertex else {
            return Vec::new();
        };
        if k <= 0 {
            return Vec::new();
        }
        let limit = usize::try_from(k).unwrap_or(usize::MAX);

        let order = bfs_order(graph, start);
        debug!("short_words: visited {} vertices from {}", order.len(), start);

        order
            .into_iter()
            .filter_map(|id| graph.value(id))
            .map(<S as AsRef<str>>::as_ref)
            .filter(|word| word.chars().count() < limit)
            .collect()
    }

    /// Write each of [`short_words`](Self::short_words) on its own line.
    pub fn print_short_words<S: AsRef<str>, W: Write + ?Sized>(
        &self,
        graph: &VertexGraph<S>,
        vertex: Option<VertexId>,
        k: i64,
        out: &mut W,
    ) -> GraphResult<()> {
        for word in self.short_words(graph, vertex, k) {
            writeln!(out, "{}", word)?;
        }
        Ok(())
    }

    /// The longest word reachable from `vertex`, including its own.
    ///
    /// Among equally long words the first one entered by a depth-first walk
    /// wins. Length is counted in Unicode scalar values, as in
    /// [`short_words`](Self::short_words). The result borrows from `graph`;
    /// `""` is returned when `vertex` is absent.
    pub fn longest_word<'g, S: AsRef<str>>(
        &self,
        graph: &'g VertexGraph<S>,
        vertex: Option<VertexId>,
    ) -> &'g str {
        let Some(start) = vertex else {
            return "";
        };

        let mut longest = "";
        let mut longest_len = 0;
        for id in dfs_preorder(graph, start) {
            let Some(word) = graph.value(id).map(<S as AsRef<str>>::as_ref) else {
                continue;
            };
            let len = word.chars().count();
            if len > longest_len {
                longest = word;
                longest_len = len;
            }
        }

        debug!("longest_word: {:?} from {}", longest, start);
        longest
    }

    /// Values of vertices reachable from `vertex` that list themselves as a
    /// neighbor, in BFS order.
    pub fn self_loopers<'g, T>(
        &self,
        graph: &'g VertexGraph<T>,
        vertex: Option<VertexId>,
    ) -> Vec<&'g T> {
        let Some(start) = vertex else {
            return Vec::new();
        };

        let order = bfs_order(graph, start);
        debug!("self_loopers: visited {} vertices from {}", order.len(), start);

        order
            .into_iter()
            .filter_map(|id| graph.get(id).filter(|v| v.has_neighbor(id)))
            .map(|v| &v.value)
            .collect()
    }

    /// Write each of [`self_loopers`](Self::self_loopers) on its own line.
    pub fn print_self_loopers<T: Display, W: Write + ?Sized>(
        &self,
        graph: &VertexGraph<T>,
        vertex: Option<VertexId>,
        out: &mut W,
    ) -> GraphResult<()> {
        for value in self.self_loopers(graph, vertex) {
            writeln!(out, "{}", value)?;
        }
        Ok(())
    }

    /// Whether `destination` can be reached from `start` through a series of
    /// flights. An airport always reaches itself.
    pub fn can_reach<N: FlightNetwork>(
        &self,
        network: &N,
        start: Option<N::Airport>,
        destination: Option<N::Airport>,
    ) -> bool {
        let (Some(start), Some(destination)) = (start, destination) else {
            return false;
        };
        if start == destination {
            return true;
        }

        let mut visited: HashSet<N::Airport> = HashSet::new();
        let mut queue: VecDeque<N::Airport> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            // Checked on dequeue, not on discovery.
            if current == destination {
                debug!("can_reach: found after visiting {} airports", visited.len());
                return true;
            }
            for next in network.outbound_flights(current) {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        debug!("can_reach: exhausted {} airports", visited.len());
        false
    }

    /// Keys of `graph` that cannot be reached from `starting`.
    ///
    /// Returns every key when `starting` is not itself a key.
    pub fn unreachable<T, S>(&self, graph: &HashMap<T, Vec<T>, S>, starting: &T) -> HashSet<T>
    where
        T: Eq + Hash + Clone,
        S: BuildHasher,
    {
        let reachable = reachable_keys(graph, starting);
        let result: HashSet<T> = graph
            .keys()
            .filter(|key| !reachable.contains(key))
            .cloned()
            .collect();

        debug!(
            "unreachable: {} of {} keys reachable, {} unreachable",
            reachable.len(),
            graph.len(),
            result.len()
        );
        result
    }
}

impl Default for GraphQueries {
    fn default() -> Self {
        Self::new()
    }
}
