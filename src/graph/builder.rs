//! Fluent API for building VertexGraph instances.

use crate::types::{GraphResult, VertexId};

use super::VertexGraph;

/// Fluent builder for constructing a [`VertexGraph`].
///
/// Links are recorded as given and validated once in [`GraphBuilder::build`].
pub struct GraphBuilder<T> {
    values: Vec<T>,
    links: Vec<(usize, usize)>,
}

impl<T> GraphBuilder<T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a vertex, returns the ID it will have in the built graph.
    pub fn vertex(&mut self, value: T) -> VertexId {
        let id = VertexId(self.values.len());
        self.values.push(value);
        id
    }

    /// Add a directed link between two vertices.
    pub fn link(&mut self, from: VertexId, to: VertexId) -> &mut Self {
        self.links.push((from.0, to.0));
        self
    }

    /// Link `from` to each of `targets`, in order.
    pub fn link_all(&mut self, from: VertexId, targets: &[VertexId]) -> &mut Self {
        for &to in targets {
            self.link(from, to);
        }
        self
    }

    /// Link `id` to itself.
    pub fn self_loop(&mut self, id: VertexId) -> &mut Self {
        self.link(id, id)
    }

    /// Add `values` as a chain `v0 -> v1 -> ... -> vn`; returns their IDs.
    pub fn chain<I>(&mut self, values: I) -> Vec<VertexId>
    where
        I: IntoIterator<Item = T>,
    {
        let ids: Vec<VertexId> = values.into_iter().map(|v| self.vertex(v)).collect();
        for pair in ids.windows(2) {
            self.link(pair[0], pair[1]);
        }
        ids
    }

    /// Build the final VertexGraph.
    pub fn build(self) -> GraphResult<VertexGraph<T>> {
        let mut graph = VertexGraph::with_capacity(self.values.len());
        for value in self.values {
            graph.add_vertex(value);
        }
        for (from, to) in self.links {
            graph.link(VertexId(from), VertexId(to))?;
        }
        Ok(graph)
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
