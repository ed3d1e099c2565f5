//! Concrete flight network keyed by airport code.

use std::collections::HashMap;

use crate::types::{FlightNetwork, GraphError, GraphResult};

/// Handle for an airport inside an [`AirportGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AirportId(usize);

#[derive(Debug, Clone)]
struct AirportRecord {
    code: String,
    flights: Vec<AirportId>,
}

/// Directed graph of airports and the flights between them.
#[derive(Debug, Clone, Default)]
pub struct AirportGraph {
    airports: Vec<AirportRecord>,
    by_code: HashMap<String, AirportId>,
}

impl AirportGraph {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an airport. Codes are unique within a network.
    pub fn add_airport(&mut self, code: impl Into<String>) -> GraphResult<AirportId> {
        let code = code.into();
        if self.by_code.contains_key(&code) {
            return Err(GraphError::DuplicateAirport(code));
        }
        let id = AirportId(self.airports.len());
        self.by_code.insert(code.clone(), id);
        self.airports.push(AirportRecord {
            code,
            flights: Vec::new(),
        });
        Ok(id)
    }

    /// Add a direct flight from `from` to `to`.
    pub fn add_flight(&mut self, from: AirportId, to: AirportId) -> GraphResult<()> {
        if to.0 >= self.airports.len() {
            return Err(GraphError::VertexNotFound(to.0));
        }
        let record = self
            .airports
            .get_mut(from.0)
            .ok_or(GraphError::VertexNotFound(from.0))?;
        record.flights.push(to);
        Ok(())
    }

    /// Add a direct flight between two registered codes.
    pub fn add_flight_by_code(&mut self, from: &str, to: &str) -> GraphResult<()> {
        let from_id = self
            .lookup(from)
            .ok_or_else(|| GraphError::UnknownAirport(from.to_string()))?;
        let to_id = self
            .lookup(to)
            .ok_or_else(|| GraphError::UnknownAirport(to.to_string()))?;
        self.add_flight(from_id, to_id)
    }

    /// Find an airport by code.
    pub fn lookup(&self, code: &str) -> Option<AirportId> {
        self.by_code.get(code).copied()
    }

    /// The code of an airport.
    pub fn code(&self, id: AirportId) -> Option<&str> {
        self.airports.get(id.0).map(|a| a.code.as_str())
    }

    /// Number of airports.
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Number of direct flights.
    pub fn flight_count(&self) -> usize {
        self.airports.iter().map(|a| a.flights.len()).sum()
    }
}

impl FlightNetwork for AirportGraph {
    type Airport = AirportId;

    fn outbound_flights(&self, airport: AirportId) -> Vec<AirportId> {
        self.airports
            .get(airport.0)
            .map(|a| a.flights.clone())
            .unwrap_or_default()
    }
}
