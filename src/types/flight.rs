//! The flight-network capability used by reachability queries.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// A directed network of airports connected by outbound flights.
///
/// `Airport` is a handle: handle equality is airport identity. Queries only
/// ever read from the network.
pub trait FlightNetwork {
    /// Handle naming one airport of this network.
    type Airport: Copy + Eq + Hash;

    /// Airports reachable with a single flight from `airport`, in order.
    fn outbound_flights(&self, airport: Self::Airport) -> Vec<Self::Airport>;
}

/// Any `airport -> destinations` map is a network. Airports that are not keys
/// have no outbound flights.
impl<A, S> FlightNetwork for HashMap<A, Vec<A>, S>
where
    A: Copy + Eq + Hash,
    S: BuildHasher,
{
    type Airport = A;

    fn outbound_flights(&self, airport: A) -> Vec<A> {
        self.get(&airport).cloned().unwrap_or_default()
    }
}
