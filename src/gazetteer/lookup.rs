//! Query operations over the gazetteer.
//!
//! Search:     exact key → bidirectional substring → not-found with suggestions
//! Geocode:    first key containing the address, table order
//! Reverse:    planar nearest neighbour within `NEAREST_THRESHOLD` degrees
//! Directions: geocode both ends, straight line at `AVERAGE_SPEED_KMH`

use super::table;
use super::types::{
    Directions, GeocodeOutcome, LocationRecord, PopularLocations, QueryError, ReverseOutcome,
    SearchOutcome,
};

/// Nearest match must be strictly closer than this (degrees).
pub const NEAREST_THRESHOLD: f64 = 5.0;
/// Mock degrees → km conversion.
pub const KM_PER_DEGREE: f64 = 100.0;
pub const AVERAGE_SPEED_KMH: f64 = 80.0;
pub const MAX_SUGGESTIONS: usize = 5;

/// The immutable location table. Built once, shared read-only.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    records: Vec<LocationRecord>,
}

impl Gazetteer {
    /// Gazetteer over the built-in world city dataset.
    pub fn builtin() -> Self {
        Self::new(table::builtin_records())
    }

    /// Create a gazetteer over specific records (for testing).
    pub fn new(records: Vec<LocationRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the table.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[LocationRecord] {
        &self.records
    }

    pub fn search(&self, query: &str) -> Result<SearchOutcome, QueryError> {
        let q = normalize(query);
        if q.is_empty() {
            return Err(QueryError::invalid("Query parameter 'q' is required"));
        }

        if let Some(exact) = self.records.iter().find(|r| r.key == q) {
            return Ok(SearchOutcome::Exact(exact.clone()));
        }

        let results: Vec<LocationRecord> = self
            .records
            .iter()
            .filter(|r| r.key.contains(&q) || q.contains(&r.key))
            .cloned()
            .collect();
        if !results.is_empty() {
            let total = results.len();
            return Ok(SearchOutcome::Partial { results, total });
        }

        let suggestions = self
            .records
            .iter()
            .filter(|r| r.key.contains(&q))
            .take(MAX_SUGGESTIONS)
            .cloned()
            .collect();

        Ok(SearchOutcome::NotFound {
            name: q,
            lat: 0.0,
            lng: 0.0,
            message: "Location not found in sample data.".into(),
            suggestions,
        })
    }

    pub fn geocode(&self, address: &str) -> Result<GeocodeOutcome, QueryError> {
        let a = normalize(address);
        if a.is_empty() {
            return Err(QueryError::invalid("Address is required"));
        }

        match self.first_containing(&a) {
            Some(r) => Ok(GeocodeOutcome::Found {
                address: r.display_name.clone(),
                lat: r.latitude,
                lng: r.longitude,
            }),
            None => Ok(GeocodeOutcome::NotFound {
                address: a,
                lat: 0.0,
                lng: 0.0,
                message: "Address not found in sample data.".into(),
            }),
        }
    }

    pub fn reverse_geocode(&self, lat: f64, lng: f64) -> ReverseOutcome {
        let mut closest: Option<(&LocationRecord, f64)> = None;
        for r in &self.records {
            let d = planar_distance(r.latitude, r.longitude, lat, lng);
            // Strict comparison keeps the first record on ties.
            if closest.map_or(true, |(_, best)| d < best) {
                closest = Some((r, d));
            }
        }

        match closest {
            Some((r, distance)) if distance < NEAREST_THRESHOLD => ReverseOutcome::Nearest {
                name: r.display_name.clone(),
                lat: r.latitude,
                lng: r.longitude,
                distance,
            },
            _ => ReverseOutcome::NoMatch {
                lat,
                lng,
                message: "No location found near these coordinates in sample data.".into(),
            },
        }
    }

    pub fn directions(&self, from: &str, to: &str) -> Result<Directions, QueryError> {
        let (from, to) = (normalize(from), normalize(to));
        if from.is_empty() || to.is_empty() {
            return Err(QueryError::invalid(
                "Both 'from' and 'to' parameters are required",
            ));
        }

        let (start, end) = match (self.first_containing(&from), self.first_containing(&to)) {
            (Some(s), Some(e)) => (s, e),
            _ => return Err(QueryError::NotFound { from, to }),
        };

        let degrees = planar_distance(start.latitude, start.longitude, end.latitude, end.longitude);
        let distance_km = round2(degrees * KM_PER_DEGREE);
        let estimated_time_hours = round2(distance_km / AVERAGE_SPEED_KMH);

        Ok(Directions {
            start: start.display_name.clone(),
            end: end.display_name.clone(),
            distance_km,
            estimated_time_hours,
            steps: vec![
                format!("Start at {}", start.display_name),
                "Travel in a straight line toward destination".to_string(),
                format!("Arrive at {}", end.display_name),
            ],
        })
    }

    pub fn popular(&self) -> PopularLocations {
        PopularLocations {
            locations: self.records.clone(),
            count: self.records.len(),
        }
    }

    fn first_containing(&self, needle: &str) -> Option<&LocationRecord> {
        self.records.iter().find(|r| r.key.contains(needle))
    }
}

/// Lowercase and trim a free-text name.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Euclidean distance on raw degrees, ignoring Earth curvature.
pub fn planar_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    ((lat1 - lat2).powi(2) + (lng1 - lng2).powi(2)).sqrt()
}

/// Parse an optional coordinate parameter. Absent means 0.
pub fn parse_coordinate(raw: Option<&str>) -> Result<f64, QueryError> {
    let Some(raw) = raw else {
        return Ok(0.0);
    };
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(QueryError::invalid("Invalid latitude or longitude")),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
