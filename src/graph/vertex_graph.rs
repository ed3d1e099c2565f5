//! Core graph structure: an arena of vertices linked by id.

use crate::types::{GraphError, GraphResult, Vertex, VertexId};

/// Owns every vertex of a graph. Vertices reference each other by [`VertexId`].
#[derive(Debug, Clone, PartialEq)]
pub struct VertexGraph<T> {
    /// All vertices, indexed by id.
    vertices: Vec<Vertex<T>>,
}

impl<T> VertexGraph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Create an empty graph with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of neighbor references across all vertices.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Add a vertex, returns the assigned ID.
    pub fn add_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(Vertex::new(value));
        id
    }

    /// Append `to` to the neighbor list of `from`.
    ///
    /// Self-links and repeated links are kept as given.
    pub fn link(&mut self, from: VertexId, to: VertexId) -> GraphResult<()> {
        if !self.contains(to) {
            return Err(GraphError::VertexNotFound(to.0));
        }
        let vertex = self
            .vertices
            .get_mut(from.0)
            .ok_or(GraphError::VertexNotFound(from.0))?;
        vertex.neighbors.push(to);
        Ok(())
    }

    /// Whether `id` names a vertex of this graph.
    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    /// Get a vertex by ID.
    pub fn get(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.0)
    }

    /// The value held by `id`.
    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.get(id).map(|v| &v.value)
    }

    /// Neighbors of `id` in insertion order; empty for unknown ids.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        self.get(id).map(|v| v.neighbors.as_slice()).unwrap_or(&[])
    }

    /// Iterate over `(id, vertex)` pairs in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<T>)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId(i), v))
    }

    /// Id for the vertex at `index` in insertion order.
    pub fn id_at(&self, index: usize) -> Option<VertexId> {
        (index < self.vertices.len()).then_some(VertexId(index))
    }
}

impl<T: PartialEq> VertexGraph<T> {
    /// First vertex (in insertion order) holding `value`.
    pub fn find(&self, value: &T) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| &v.value == value)
            .map(VertexId)
    }
}

impl<T> Default for VertexGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}
