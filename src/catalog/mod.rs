//! Static reference data: species and fossil sites
//!
//! The catalog is built once, validated, and then only read. Lookups by id
//! go through hash indices; iteration keeps file order, which the ranking
//! and explore code rely on for stable output.

pub mod loader;
pub mod site;
pub mod species;

pub use site::{FossilSite, VisitingInfo};
pub use species::{Attribute, Diet, DiscoveryLocation, Period, Species, Stats, MAX_STAT};

use crate::core::error::{AtlasError, Result};
use crate::core::types::{SiteId, SpeciesId};
use ahash::AHashMap;
use serde::Serialize;
use std::path::Path;
use std::sync::OnceLock;

const BUILTIN_SPECIES: &str = include_str!("../../data/species.toml");
const BUILTIN_SITES: &str = include_str!("../../data/sites.toml");

/// Immutable, indexed species and site tables
#[derive(Debug, Clone)]
pub struct Catalog {
    species: Vec<Species>,
    sites: Vec<FossilSite>,
    species_index: AHashMap<SpeciesId, usize>,
    site_index: AHashMap<SiteId, usize>,
}

impl Catalog {
    /// Build a catalog, checking that every site's species exist
    pub fn new(species: Vec<Species>, sites: Vec<FossilSite>) -> Result<Self> {
        let mut species_index = AHashMap::with_capacity(species.len());
        for (idx, s) in species.iter().enumerate() {
            if species_index.insert(s.id.clone(), idx).is_some() {
                return Err(AtlasError::DuplicateId(s.id.to_string()));
            }
        }

        let mut site_index = AHashMap::with_capacity(sites.len());
        for (idx, site) in sites.iter().enumerate() {
            if site_index.insert(site.id.clone(), idx).is_some() {
                return Err(AtlasError::DuplicateId(site.id.to_string()));
            }
            if let Some(missing) = site
                .species
                .iter()
                .find(|id| !species_index.contains_key(*id))
            {
                return Err(AtlasError::UnknownSpecies(missing.to_string()));
            }
        }

        Ok(Self {
            species,
            sites,
            species_index,
            site_index,
        })
    }

    /// Catalog from the data files compiled into the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_strs(BUILTIN_SPECIES, BUILTIN_SITES)
    }

    pub fn from_toml_strs(species: &str, sites: &str) -> Result<Self> {
        let species = loader::parse_species(species)?;
        let sites = loader::parse_sites(sites)?;
        Self::new(species, sites)
    }

    /// Load `species.toml` and `sites.toml` from a directory
    pub fn from_dir(data_dir: &Path) -> Result<Self> {
        let (species, sites) = loader::load_dir(data_dir)?;
        Self::new(species, sites)
    }

    pub fn species(&self, id: &SpeciesId) -> Option<&Species> {
        self.species_index.get(id).map(|&idx| &self.species[idx])
    }

    /// Like [`Catalog::species`], but a missing id is an error
    pub fn require_species(&self, id: &str) -> Result<&Species> {
        self.species(&SpeciesId::new(id))
            .ok_or_else(|| AtlasError::UnknownSpecies(id.to_string()))
    }

    pub fn site(&self, id: &SiteId) -> Option<&FossilSite> {
        self.site_index.get(id).map(|&idx| &self.sites[idx])
    }

    pub fn require_site(&self, id: &str) -> Result<&FossilSite> {
        self.site(&SiteId::new(id))
            .ok_or_else(|| AtlasError::UnknownSite(id.to_string()))
    }

    /// All species in file order
    pub fn species_list(&self) -> &[Species] {
        &self.species
    }

    /// All sites in file order
    pub fn sites(&self) -> &[FossilSite] {
        &self.sites
    }

    /// Species found at a site, in the site's listed order
    pub fn species_at<'a>(&'a self, site: &'a FossilSite) -> impl Iterator<Item = &'a Species> + 'a {
        site.species.iter().filter_map(move |id| self.species(id))
    }

    /// Sites where a species has been found
    pub fn sites_with<'a>(&'a self, id: &'a SpeciesId) -> impl Iterator<Item = &'a FossilSite> + 'a {
        self.sites.iter().filter(move |site| site.has_species(id))
    }

    /// Full record of one species with the sites it was found at
    pub fn profile(&self, id: &str) -> Result<SpeciesProfile<'_>> {
        let species = self.require_species(id)?;
        Ok(SpeciesProfile {
            species,
            sites: self.sites_with(&species.id).collect(),
        })
    }
}

/// A species plus the fossil sites that list it
#[derive(Debug, Clone, Serialize)]
pub struct SpeciesProfile<'a> {
    #[serde(flatten)]
    pub species: &'a Species,
    pub sites: Vec<&'a FossilSite>,
}

// === SHARED CATALOG ===

static CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Process-wide catalog built from the embedded data on first use
pub fn shared() -> Result<&'static Catalog> {
    if let Some(catalog) = CATALOG.get() {
        return Ok(catalog);
    }
    let built = Catalog::builtin()?;
    tracing::debug!(
        "Built shared catalog: {} species, {} sites",
        built.species.len(),
        built.sites.len()
    );
    Ok(CATALOG.get_or_init(|| built))
}
