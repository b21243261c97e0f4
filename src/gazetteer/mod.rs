//! Static world-city gazetteer.
//!
//! Provides forward search, structured geocoding, nearest-neighbour
//! reverse lookup, and straight-line directions over a built-in table.

pub mod lookup;
pub mod table;
pub mod types;

pub use lookup::{normalize, parse_coordinate, planar_distance, Gazetteer};
pub use types::{
    Directions, GeocodeOutcome, LocationRecord, PopularLocations, QueryError, ReverseOutcome,
    SearchOutcome,
};
