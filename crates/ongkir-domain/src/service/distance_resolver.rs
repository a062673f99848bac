//! City-pair distance lookup

use ongkir_types::City;

use crate::constants::{DEFAULT_DISTANCE_KM, DISTANCE_TABLE};

/// Distance in km between two cities, independent of direction.
///
/// Pairs outside the curated table, same-city pairs included, fall back to
/// [`DEFAULT_DISTANCE_KM`].
pub fn resolve_distance(origin: City, destination: City) -> u32 {
    DISTANCE_TABLE
        .get(&(origin, destination))
        .or_else(|| DISTANCE_TABLE.get(&(destination, origin)))
        .copied()
        .unwrap_or(DEFAULT_DISTANCE_KM)
}

/// Whether the pair has an explicit table entry in either direction
pub fn is_curated_route(origin: City, destination: City) -> bool {
    DISTANCE_TABLE.contains_key(&(origin, destination))
        || DISTANCE_TABLE.contains_key(&(destination, origin))
}
