//! Rank fossil sites by distance from a query point
//!
//! Every query computes the distance to each site and sorts with a stable
//! sort, so sites at equal distance keep their catalog order and repeated
//! queries return identical results.

use crate::catalog::FossilSite;
use crate::core::config::AtlasConfig;
use crate::core::types::Coordinate;
use crate::geo::distance::haversine_km;
use ordered_float::OrderedFloat;
use serde::Serialize;

/// A site paired with its distance from a query point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedSite<'a> {
    pub site: &'a FossilSite,
    pub distance_km: f64,
}

impl RankedSite<'_> {
    /// Distance rounded to whole kilometres, as shown to users
    pub fn rounded_km(&self) -> u64 {
        self.distance_km.round() as u64
    }
}

fn ranked<'a>(query: Coordinate, sites: &'a [FossilSite]) -> Vec<RankedSite<'a>> {
    let mut ranked: Vec<RankedSite<'a>> = sites
        .iter()
        .map(|site| RankedSite {
            site,
            distance_km: haversine_km(query, site.location),
        })
        .collect();
    // sort_by_key is stable
    ranked.sort_by_key(|r| OrderedFloat(r.distance_km));
    ranked
}

/// Sites within `radius_km` of `query`, nearest first
///
/// A radius that is zero, negative or NaN matches nothing.
pub fn find_within_radius<'a>(
    query: Coordinate,
    sites: &'a [FossilSite],
    radius_km: f64,
) -> Vec<RankedSite<'a>> {
    if radius_km.is_nan() || radius_km <= 0.0 {
        return Vec::new();
    }

    let mut result = ranked(query, sites);
    result.retain(|r| r.distance_km <= radius_km);

    tracing::debug!(
        "{} of {} sites within {:.0}km of {}",
        result.len(),
        sites.len(),
        radius_km,
        query
    );
    result
}

/// The `n` sites closest to `query`, nearest first
///
/// Returns fewer than `n` when the catalog is smaller.
pub fn find_closest<'a>(query: Coordinate, sites: &'a [FossilSite], n: usize) -> Vec<RankedSite<'a>> {
    if n == 0 {
        return Vec::new();
    }

    let mut result = ranked(query, sites);
    result.truncate(n);
    result
}

/// Sites inside the search radius plus the closest alternatives
#[derive(Debug, Clone, Serialize)]
pub struct NearbyReport<'a> {
    pub query: Coordinate,
    pub radius_km: f64,
    pub within_radius: Vec<RankedSite<'a>>,
    pub closest: Vec<RankedSite<'a>>,
}

impl NearbyReport<'_> {
    /// True when nothing lies inside the radius and only alternatives remain
    pub fn needs_fallback(&self) -> bool {
        self.within_radius.is_empty()
    }
}

/// Run the radius query and the closest-N fallback with configured limits
pub fn nearby<'a>(query: Coordinate, sites: &'a [FossilSite], config: &AtlasConfig) -> NearbyReport<'a> {
    NearbyReport {
        query,
        radius_km: config.search_radius_km,
        within_radius: find_within_radius(query, sites, config.search_radius_km),
        closest: find_closest(query, sites, config.fallback_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn sites() -> Vec<FossilSite> {
        vec![
            FossilSite::at("far", "Far", at(0.0, 90.0)),
            FossilSite::at("near", "Near", at(0.0, 1.0)),
            FossilSite::at("mid", "Mid", at(0.0, 10.0)),
        ]
    }

    fn ids(ranked: &[RankedSite]) -> Vec<String> {
        ranked.iter().map(|r| r.site.id.to_string()).collect()
    }

    #[test]
    fn test_within_radius_sorted_and_filtered() {
        let sites = sites();
        let result = find_within_radius(at(0.0, 0.0), &sites, 2000.0);
        assert_eq!(ids(&result), vec!["near", "mid"]);
        assert!(result[0].distance_km < result[1].distance_km);
    }

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let sites = sites();
        let exact = haversine_km(at(0.0, 0.0), sites[1].location);
        let result = find_within_radius(at(0.0, 0.0), &sites, exact);
        assert_eq!(ids(&result), vec!["near"]);
    }

    #[test]
    fn test_nonpositive_radius_is_empty() {
        let sites = sites();
        let query = sites[1].location;
        assert!(find_within_radius(query, &sites, 0.0).is_empty());
        assert!(find_within_radius(query, &sites, -5.0).is_empty());
        assert!(find_within_radius(query, &sites, f64::NAN).is_empty());
    }

    #[test]
    fn test_closest_truncates() {
        let sites = sites();
        let result = find_closest(at(0.0, 0.0), &sites, 2);
        assert_eq!(ids(&result), vec!["near", "mid"]);
        assert!(find_closest(at(0.0, 0.0), &sites, 0).is_empty());
        assert_eq!(find_closest(at(0.0, 0.0), &sites, 10).len(), 3);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(find_within_radius(at(0.0, 0.0), &[], 1000.0).is_empty());
        assert!(find_closest(at(0.0, 0.0), &[], 5).is_empty());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let sites = vec![
            FossilSite::at("east", "East", at(0.0, 5.0)),
            FossilSite::at("west", "West", at(0.0, -5.0)),
            FossilSite::at("north", "North", at(5.0, 0.0)),
        ];
        let result = find_closest(at(0.0, 0.0), &sites, 3);
        // all three sit exactly 5 degrees from the origin
        assert_eq!(result[0].site.id.as_str(), "east");
        assert_eq!(result[0].distance_km, result[1].distance_km);
        assert_eq!(result[1].site.id.as_str(), "west");
        assert_eq!(result[2].site.id.as_str(), "north");
    }

    #[test]
    fn test_rounded_km() {
        let site = FossilSite::at("s", "S", at(0.0, 0.0));
        let ranked = RankedSite { site: &site, distance_km: 2913.6 };
        assert_eq!(ranked.rounded_km(), 2914);
    }

    #[test]
    fn test_nearby_uses_config_limits() {
        let sites = sites();
        let config = AtlasConfig {
            search_radius_km: 500.0,
            fallback_count: 2,
            ..AtlasConfig::default()
        };
        let report = nearby(at(0.0, 0.0), &sites, &config);
        assert_eq!(ids(&report.within_radius), vec!["near"]);
        assert_eq!(ids(&report.closest), vec!["near", "mid"]);
        assert!(!report.needs_fallback());

        let remote = nearby(at(-80.0, 0.0), &sites, &config);
        assert!(remote.needs_fallback());
        assert_eq!(remote.closest.len(), 2);
    }
}
