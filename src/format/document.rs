//! JSON document shapes for the three graph representations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::graph::{AirportGraph, VertexGraph};
use crate::types::{GraphError, GraphResult};

/// One vertex entry: its value and the indices of its neighbors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexEntry {
    pub value: String,
    #[serde(default)]
    pub neighbors: Vec<usize>,
}

/// `{"vertices": [{"value": "cat", "neighbors": [1]}, ...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VertexGraphDocument {
    pub vertices: Vec<VertexEntry>,
}

impl VertexGraphDocument {
    /// Build the graph, rejecting neighbor indices outside `vertices`.
    pub fn into_graph(self) -> GraphResult<VertexGraph<String>> {
        let count = self.vertices.len();
        for (index, entry) in self.vertices.iter().enumerate() {
            if let Some(&bad) = entry.neighbors.iter().find(|&&n| n >= count) {
                return Err(GraphError::InvalidNeighbor {
                    vertex: index,
                    neighbor: bad,
                });
            }
        }

        let mut graph = VertexGraph::with_capacity(count);
        let mut links = Vec::with_capacity(count);
        for entry in self.vertices {
            let id = graph.add_vertex(entry.value);
            links.push((id, entry.neighbors));
        }
        for (id, neighbors) in links {
            for n in neighbors {
                let to = graph.id_at(n).ok_or(GraphError::VertexNotFound(n))?;
                graph.link(id, to)?;
            }
        }
        Ok(graph)
    }

    /// Snapshot an existing graph.
    pub fn from_graph<S: AsRef<str>>(graph: &VertexGraph<S>) -> Self {
        let vertices = graph
            .vertices()
            .map(|(_, v)| VertexEntry {
                value: v.value.as_ref().to_string(),
                neighbors: v.neighbors.iter().map(|n| n.index()).collect(),
            })
            .collect();
        Self { vertices }
    }
}

/// One airport and the codes it flies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportEntry {
    pub code: String,
    #[serde(default)]
    pub flights: Vec<String>,
}

/// `{"airports": [{"code": "SEA", "flights": ["PDX"]}, ...]}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightNetworkDocument {
    pub airports: Vec<AirportEntry>,
}

impl FlightNetworkDocument {
    /// Build the network. Codes must be unique and every flight must land on
    /// a declared code.
    pub fn into_network(self) -> GraphResult<AirportGraph> {
        let mut network = AirportGraph::new();
        for entry in &self.airports {
            network.add_airport(entry.code.as_str())?;
        }
        for entry in &self.airports {
            for to in &entry.flights {
                network.add_flight_by_code(&entry.code, to)?;
            }
        }
        Ok(network)
    }
}

/// `{"adjacency": {"A": ["B"], "B": []}}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjacencyDocument {
    pub adjacency: HashMap<String, Vec<String>>,
}

impl AdjacencyDocument {
    /// The adjacency map. Neighbors need not be keys.
    pub fn into_map(self) -> HashMap<String, Vec<String>> {
        self.adjacency
    }
}
