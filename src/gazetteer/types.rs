//! Core types for the gazetteer.

use serde::Serialize;
use thiserror::Error;

/// A named place in the gazetteer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationRecord {
    /// Lowercase, trimmed canonical name used for matching.
    #[serde(skip)]
    pub key: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
}

/// Result of a forward search.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchOutcome {
    Exact(LocationRecord),
    Partial {
        results: Vec<LocationRecord>,
        total: usize,
    },
    NotFound {
        name: String,
        lat: f64,
        lng: f64,
        message: String,
        suggestions: Vec<LocationRecord>,
    },
}

/// Result of a structured address lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeocodeOutcome {
    Found {
        address: String,
        lat: f64,
        lng: f64,
    },
    NotFound {
        address: String,
        lat: f64,
        lng: f64,
        message: String,
    },
}

/// Result of a nearest-neighbour lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReverseOutcome {
    Nearest {
        name: String,
        lat: f64,
        lng: f64,
        distance: f64,
    },
    NoMatch {
        lat: f64,
        lng: f64,
        message: String,
    },
}

/// Straight-line route between two resolved places.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Directions {
    pub start: String,
    pub end: String,
    pub distance_km: f64,
    pub estimated_time_hours: f64,
    pub steps: Vec<String>,
}

/// Full table listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopularLocations {
    pub locations: Vec<LocationRecord>,
    pub count: usize,
}

/// Query errors. Everything else is a successful "no match" payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("Could not find both start and end locations: from '{from}', to '{to}'")]
    NotFound { from: String, to: String },
}

impl QueryError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokyo() -> LocationRecord {
        LocationRecord {
            key: "tokyo".into(),
            display_name: "Tokyo, Japan".into(),
            latitude: 35.6895,
            longitude: 139.6917,
        }
    }

    #[test]
    fn test_record_wire_shape() {
        let json = serde_json::to_value(tokyo()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Tokyo, Japan", "lat": 35.6895, "lng": 139.6917})
        );
    }

    #[test]
    fn test_partial_outcome_is_flat() {
        let outcome = SearchOutcome::Partial { results: vec![tokyo()], total: 1 };
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["total"], 1);
        assert_eq!(json["results"][0]["name"], "Tokyo, Japan");
    }

    #[test]
    fn test_directions_camel_case() {
        let d = Directions {
            start: "A".into(),
            end: "B".into(),
            distance_km: 1.0,
            estimated_time_hours: 0.01,
            steps: vec![],
        };
        let json = serde_json::to_value(d).unwrap();
        assert!(json.get("distanceKm").is_some());
        assert!(json.get("estimatedTimeHours").is_some());
    }

    #[test]
    fn test_not_found_names_both_inputs() {
        let err = QueryError::NotFound { from: "atlantis".into(), to: "paris".into() };
        let msg = err.to_string();
        assert!(msg.contains("atlantis"));
        assert!(msg.contains("paris"));
    }
}
