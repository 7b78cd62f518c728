//! Great-circle distance on a spherical Earth

use crate::core::types::Coordinate;

/// Mean Earth radius used for all distances (kilometres)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometres
///
/// Symmetric bit-for-bit: the deltas are taken as absolute values and the
/// cosine product is commutative, so argument order never changes the
/// result. Identical points give exactly 0.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat() - a.lat()).abs().to_radians();
    let d_lng = (b.lng() - a.lng()).abs().to_radians();
    let lat_a = a.lat().to_radians();
    let lat_b = b.lat().to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair past 1 for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn test_same_point_is_exactly_zero() {
        let p = at(44.9778, -93.265);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_new_york_to_hell_creek() {
        let dist = haversine_km(at(40.7128, -74.006), at(47.0527, -109.6333));
        assert!((dist - 2914.0).abs() < 5.0, "expected ~2914km, got {dist}");
    }

    #[test]
    fn test_new_york_to_maastricht() {
        let dist = haversine_km(at(40.7128, -74.006), at(50.8503, 5.691));
        assert!((dist - 5976.0).abs() < 5.0, "expected ~5976km, got {dist}");
    }

    #[test]
    fn test_order_independent() {
        let a = at(-42.7692, -65.0438);
        let b = at(35.6762, 139.6503);
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[test]
    fn test_antipodal_is_half_circumference() {
        let dist = haversine_km(at(0.0, 0.0), at(0.0, 180.0));
        let half = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((dist - half).abs() < 1e-6, "expected {half}, got {dist}");
    }

    #[test]
    fn test_pole_to_pole() {
        let dist = haversine_km(at(90.0, 0.0), at(-90.0, 0.0));
        assert!((dist - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }
}
