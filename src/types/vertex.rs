//! Vertex handle and the vertex struct.

use std::fmt;

/// Identity of a vertex inside its [`VertexGraph`](crate::graph::VertexGraph).
///
/// Two vertices holding equal values are still distinct: identity is the
/// handle, never the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Position of this vertex in its graph's insertion order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A graph node: a value plus an ordered list of neighbor references.
///
/// The vertex does not own its neighbors; the enclosing graph owns every
/// vertex and `neighbors` only names them.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<T> {
    /// The value held by this vertex.
    pub value: T,
    /// Outgoing neighbors, in insertion order. May contain this vertex's own id.
    pub neighbors: Vec<VertexId>,
}

impl<T> Vertex<T> {
    /// Create a vertex with no neighbors.
    pub fn new(value: T) -> Self {
        Self {
            value,
            neighbors: Vec::new(),
        }
    }

    /// Whether `id` appears among this vertex's neighbors.
    pub fn has_neighbor(&self, id: VertexId) -> bool {
        self.neighbors.contains(&id)
    }
}
