//! In-memory graph structures and traversal primitives.

pub mod airport_graph;
pub mod builder;
pub mod traversal;
pub mod vertex_graph;

pub use airport_graph::{AirportGraph, AirportId};
pub use builder::GraphBuilder;
pub use traversal::{bfs_order, dfs_preorder, reachable_keys};
pub use vertex_graph::VertexGraph;
