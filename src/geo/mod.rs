//! Fossil-site proximity: distances, ranking and place resolution

pub mod distance;
pub mod ranking;
pub mod resolver;

pub use distance::{haversine_km, EARTH_RADIUS_KM};
pub use ranking::{find_closest, find_within_radius, nearby, NearbyReport, RankedSite};
pub use resolver::{CoordinateResolver, StaticResolver};
