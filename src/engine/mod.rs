//! High-level operations: the query engine.

pub mod queries;

pub use queries::GraphQueries;
