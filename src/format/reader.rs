//! Reads JSON graph documents into in-memory graphs.

use std::collections::HashMap;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::graph::{AirportGraph, VertexGraph};
use crate::types::{GraphError, GraphResult};

use super::document::{AdjacencyDocument, FlightNetworkDocument, VertexGraphDocument};

/// Reader for JSON graph documents.
pub struct GraphReader;

impl GraphReader {
    /// Read a vertex graph document from a file.
    pub fn read_vertex_graph(path: &Path) -> GraphResult<VertexGraph<String>> {
        let graph = Self::parse_file::<VertexGraphDocument>(path)?.into_graph()?;
        debug!(
            "loaded {} vertices, {} edges from {}",
            graph.vertex_count(),
            graph.edge_count(),
            path.display()
        );
        Ok(graph)
    }

    /// Read a flight network document from a file.
    pub fn read_flight_network(path: &Path) -> GraphResult<AirportGraph> {
        let network = Self::parse_file::<FlightNetworkDocument>(path)?.into_network()?;
        debug!(
            "loaded {} airports, {} flights from {}",
            network.airport_count(),
            network.flight_count(),
            path.display()
        );
        Ok(network)
    }

    /// Read an adjacency-list document from a file.
    pub fn read_adjacency(path: &Path) -> GraphResult<HashMap<String, Vec<String>>> {
        let map = Self::parse_file::<AdjacencyDocument>(path)?.into_map();
        debug!("loaded {} adjacency keys from {}", map.len(), path.display());
        Ok(map)
    }

    /// Parse a vertex graph document from a JSON string.
    pub fn vertex_graph_from_str(json: &str) -> GraphResult<VertexGraph<String>> {
        serde_json::from_str::<VertexGraphDocument>(json)?.into_graph()
    }

    /// Parse a flight network document from a JSON string.
    pub fn flight_network_from_str(json: &str) -> GraphResult<AirportGraph> {
        serde_json::from_str::<FlightNetworkDocument>(json)?.into_network()
    }

    /// Parse an adjacency-list document from a JSON string.
    pub fn adjacency_from_str(json: &str) -> GraphResult<HashMap<String, Vec<String>>> {
        Ok(serde_json::from_str::<AdjacencyDocument>(json)?.into_map())
    }

    /// Read any document from a reader.
    ///
    /// Bytes that are not valid UTF-8 are a malformed document
    /// ([`GraphError::Json`]); only failures of the reader itself are
    /// [`GraphError::Io`].
    pub fn read_from<D: DeserializeOwned>(reader: &mut impl Read) -> GraphResult<D> {
        serde_json::from_reader(BufReader::new(reader)).map_err(|e| {
            if e.is_io() {
                GraphError::Io(e.into())
            } else {
                GraphError::Json(e)
            }
        })
    }

    fn parse_file<D: DeserializeOwned>(path: &Path) -> GraphResult<D> {
        let mut file = std::fs::File::open(path)?;
        Self::read_from(&mut file)
    }
}
