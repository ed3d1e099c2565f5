//! All data types for the graph-queries library.

pub mod error;
pub mod flight;
pub mod vertex;

pub use error::{GraphError, GraphResult};
pub use flight::FlightNetwork;
pub use vertex::{Vertex, VertexId};
