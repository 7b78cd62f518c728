//! Place-name to coordinate resolution
//!
//! The ranking functions only ever see a valid [`Coordinate`]. Turning a
//! typed place name into one is the resolver's job; `None` means the place
//! is unknown and the caller decides what to do next.

use crate::core::types::Coordinate;
use ahash::AHashMap;

/// Resolves free-text place names to coordinates
pub trait CoordinateResolver {
    fn resolve(&self, place: &str) -> Option<Coordinate>;
}

/// Lookup table of well-known cities
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    places: AHashMap<String, Coordinate>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver preloaded with major world cities
    pub fn builtin() -> Self {
        let cities: [(&str, f64, f64); 10] = [
            ("new york", 40.7128, -74.006),
            ("london", 51.5074, -0.1278),
            ("tokyo", 35.6762, 139.6503),
            ("paris", 48.8566, 2.3522),
            ("sydney", -33.8688, 151.2093),
            ("los angeles", 34.0522, -118.2437),
            ("chicago", 41.8781, -87.6298),
            ("berlin", 52.52, 13.405),
            ("moscow", 55.7558, 37.6176),
            ("beijing", 39.9042, 116.4074),
        ];

        let mut resolver = Self::new();
        for (name, lat, lng) in cities {
            if let Ok(coordinate) = Coordinate::new(lat, lng) {
                resolver.insert(name, coordinate);
            }
        }
        resolver
    }

    /// Add or replace a place; the name is normalized like lookups are
    pub fn insert(&mut self, place: &str, coordinate: Coordinate) {
        self.places.insert(normalize(place), coordinate);
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Known place names, sorted
    pub fn place_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.places.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl CoordinateResolver for StaticResolver {
    fn resolve(&self, place: &str) -> Option<Coordinate> {
        let found = self.places.get(&normalize(place)).copied();
        if found.is_none() {
            tracing::debug!("No coordinate for place {:?}", place);
        }
        found
    }
}

fn normalize(place: &str) -> String {
    place.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_ten_cities() {
        let resolver = StaticResolver::builtin();
        assert_eq!(resolver.len(), 10);
        assert!(resolver.place_names().contains(&"los angeles"));
    }

    #[test]
    fn test_resolve_ignores_case_and_whitespace() {
        let resolver = StaticResolver::builtin();
        let nyc = resolver.resolve("  New York ").unwrap();
        assert_eq!(nyc.lat(), 40.7128);
        assert_eq!(nyc.lng(), -74.006);
        assert_eq!(resolver.resolve("TOKYO"), resolver.resolve("tokyo"));
    }

    #[test]
    fn test_unknown_place_is_none() {
        let resolver = StaticResolver::builtin();
        assert!(resolver.resolve("Atlantis").is_none());
        assert!(resolver.resolve("").is_none());
    }

    #[test]
    fn test_insert_custom_place() {
        let mut resolver = StaticResolver::new();
        assert!(resolver.is_empty());
        resolver.insert("Bozeman", Coordinate::new(45.677, -111.0429).unwrap());
        assert!(resolver.resolve("bozeman").is_some());
    }
}
