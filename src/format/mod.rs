//! JSON graph documents.

pub mod document;
pub mod reader;

pub use document::{
    AdjacencyDocument, AirportEntry, FlightNetworkDocument, VertexEntry, VertexGraphDocument,
};
pub use reader::GraphReader;
