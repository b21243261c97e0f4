//! Built-in location dataset.

use super::types::LocationRecord;

struct SeedLocation {
    key: &'static str,
    name: &'static str,
    lat: f64,
    lng: f64,
}

// Order matters: lookups return the first match in table order.
const SEED_LOCATIONS: &[SeedLocation] = &[
    SeedLocation { key: "new york", name: "New York, USA", lat: 40.7128, lng: -74.0060 },
    SeedLocation { key: "london", name: "London, UK", lat: 51.5074, lng: -0.1278 },
    SeedLocation { key: "tokyo", name: "Tokyo, Japan", lat: 35.6895, lng: 139.6917 },
    SeedLocation { key: "paris", name: "Paris, France", lat: 48.8566, lng: 2.3522 },
    SeedLocation { key: "sydney", name: "Sydney, Australia", lat: -33.8688, lng: 151.2093 },
    SeedLocation { key: "beijing", name: "Beijing, China", lat: 39.9042, lng: 116.4074 },
    SeedLocation { key: "moscow", name: "Moscow, Russia", lat: 55.7558, lng: 37.6173 },
    SeedLocation { key: "cairo", name: "Cairo, Egypt", lat: 30.0444, lng: 31.2357 },
    SeedLocation { key: "rio", name: "Rio de Janeiro, Brazil", lat: -22.9068, lng: -43.1729 },
    SeedLocation { key: "cape town", name: "Cape Town, South Africa", lat: -33.9249, lng: 18.4241 },
    SeedLocation { key: "seoul", name: "Seoul, South Korea", lat: 37.5665, lng: 126.9780 },
    SeedLocation { key: "toronto", name: "Toronto, Canada", lat: 43.6532, lng: -79.3832 },
    SeedLocation { key: "los angeles", name: "Los Angeles, USA", lat: 34.0522, lng: -118.2437 },
    SeedLocation { key: "mexico city", name: "Mexico City, Mexico", lat: 19.4326, lng: -99.1332 },
    SeedLocation { key: "buenos aires", name: "Buenos Aires, Argentina", lat: -34.6037, lng: -58.3816 },
    SeedLocation { key: "mumbai", name: "Mumbai, India", lat: 19.0760, lng: 72.8777 },
    SeedLocation { key: "singapore", name: "Singapore", lat: 1.3521, lng: 103.8198 },
    SeedLocation { key: "dubai", name: "Dubai, UAE", lat: 25.2048, lng: 55.2708 },
    SeedLocation { key: "istanbul", name: "Istanbul, Turkey", lat: 41.0082, lng: 28.9784 },
    SeedLocation { key: "berlin", name: "Berlin, Germany", lat: 52.5200, lng: 13.4050 },
    SeedLocation { key: "rome", name: "Rome, Italy", lat: 41.9028, lng: 12.4964 },
    SeedLocation { key: "madrid", name: "Madrid, Spain", lat: 40.4168, lng: -3.7038 },
    SeedLocation { key: "bangkok", name: "Bangkok, Thailand", lat: 13.7563, lng: 100.5018 },
    SeedLocation { key: "nairobi", name: "Nairobi, Kenya", lat: -1.2921, lng: 36.8219 },
    SeedLocation { key: "lagos", name: "Lagos, Nigeria", lat: 6.5244, lng: 3.3792 },
];

/// Materialize the built-in dataset in table order.
pub fn builtin_records() -> Vec<LocationRecord> {
    SEED_LOCATIONS
        .iter()
        .map(|s| LocationRecord {
            key: s.key.to_string(),
            display_name: s.name.to_string(),
            latitude: s.lat,
            longitude: s.lng,
        })
        .collect()
}
