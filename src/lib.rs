//! graph-queries: BFS/DFS query primitives over small graphs.
//!
//! Three graph shapes are supported: vertex graphs (values linked by vertex
//! identity), flight networks (any [`FlightNetwork`]), and adjacency lists
//! (`HashMap<T, Vec<T>>`, linked by value). All queries live on
//! [`GraphQueries`] and never mutate their input.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::GraphQueries;
pub use format::{
    AdjacencyDocument, FlightNetworkDocument, GraphReader, VertexEntry, VertexGraphDocument,
};
pub use graph::{
    bfs_order, dfs_preorder, reachable_keys, AirportGraph, AirportId, GraphBuilder, VertexGraph,
};
pub use types::{FlightNetwork, GraphError, GraphResult, Vertex, VertexId};
