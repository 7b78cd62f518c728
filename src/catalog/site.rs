//! Fossil discovery sites

use crate::core::types::{Coordinate, SiteId, SpeciesId};
use serde::{Deserialize, Serialize};

/// Practical information for visitors
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VisitingInfo {
    /// Museum that exhibits finds from this site
    pub museum: String,
    #[serde(default)]
    pub tours: String,
    #[serde(default)]
    pub accessibility: String,
}

/// A named fossil discovery location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FossilSite {
    pub id: SiteId,
    pub name: String,
    pub location: Coordinate,
    #[serde(default)]
    pub country: String,
    /// State, province or other sub-national region
    #[serde(default)]
    pub region: String,
    /// Species whose fossils were found here
    #[serde(default)]
    pub species: Vec<SpeciesId>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub significance: String,
    #[serde(default)]
    pub age_range: String,
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub discovery_history: String,
    #[serde(default)]
    pub visiting_info: VisitingInfo,
}

impl FossilSite {
    /// Bare site at a location, with no species or descriptive text
    pub fn at(id: &str, name: &str, location: Coordinate) -> Self {
        Self {
            id: SiteId::new(id),
            name: name.to_string(),
            location,
            country: String::new(),
            region: String::new(),
            species: Vec::new(),
            description: String::new(),
            significance: String::new(),
            age_range: String::new(),
            environment: String::new(),
            discovery_history: String::new(),
            visiting_info: VisitingInfo::default(),
        }
    }

    pub fn has_species(&self, id: &SpeciesId) -> bool {
        self.species.contains(id)
    }
}
