pub mod config;
pub mod error;
pub mod types;

pub use config::AtlasConfig;
pub use error::{AtlasError, Result};
pub use types::{Coordinate, SiteId, SpeciesId};
