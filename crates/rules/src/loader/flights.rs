//! Flight list loading and lookup.

use std::path::Path;

use tracing::info;

use paxmsg_core::Flight;

use super::error::{LoadError, Result};
use super::format::read_records;

/// Load every flight from a JSON or YAML file.
pub fn load_flights(path: &Path) -> Result<Vec<Flight>> {
    let flights: Vec<Flight> = read_records(path)?;
    info!(path = %path.display(), count = flights.len(), "loaded flights");
    Ok(flights)
}

/// Resolve a flight by id; the engine is only ever handed a resolved flight.
pub fn find_flight<'a>(flights: &'a [Flight], id: &str) -> Result<&'a Flight> {
    flights
        .iter()
        .find(|f| f.id == id)
        .ok_or_else(|| LoadError::FlightNotFound(id.to_string()))
}
