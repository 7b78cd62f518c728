//! Load species and site tables from TOML files

use crate::catalog::site::FossilSite;
use crate::catalog::species::Species;
use crate::core::error::{AtlasError, Result};
use ahash::AHashSet;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const SPECIES_FILE: &str = "species.toml";
pub const SITES_FILE: &str = "sites.toml";

#[derive(Deserialize)]
struct SpeciesFile {
    #[serde(default)]
    species: Vec<Species>,
}

#[derive(Deserialize)]
struct SitesFile {
    #[serde(default)]
    sites: Vec<FossilSite>,
}

/// Parse a `[[species]]` table list, checking ids and stat ranges
pub fn parse_species(content: &str) -> Result<Vec<Species>> {
    let file: SpeciesFile = toml::from_str(content)?;

    let mut seen = AHashSet::new();
    for species in &file.species {
        if !seen.insert(species.id.clone()) {
            return Err(AtlasError::DuplicateId(species.id.to_string()));
        }
        if let Some((attribute, value)) = species.stats.out_of_range() {
            return Err(AtlasError::InvalidAttribute {
                species: species.id.to_string(),
                attribute: attribute.name(),
                value,
            });
        }
    }

    Ok(file.species)
}

/// Parse a `[[sites]]` table list, checking ids
///
/// Species references are checked later, against the species table.
pub fn parse_sites(content: &str) -> Result<Vec<FossilSite>> {
    let file: SitesFile = toml::from_str(content)?;

    let mut seen = AHashSet::new();
    for site in &file.sites {
        if !seen.insert(site.id.clone()) {
            return Err(AtlasError::DuplicateId(site.id.to_string()));
        }
    }

    Ok(file.sites)
}

/// Read both tables from a data directory
pub fn load_dir(data_dir: &Path) -> Result<(Vec<Species>, Vec<FossilSite>)> {
    let species_content = fs::read_to_string(data_dir.join(SPECIES_FILE))?;
    let sites_content = fs::read_to_string(data_dir.join(SITES_FILE))?;

    let species = parse_species(&species_content)?;
    let sites = parse_sites(&sites_content)?;

    tracing::debug!(
        "Loaded {} species and {} sites from {}",
        species.len(),
        sites.len(),
        data_dir.display()
    );

    Ok((species, sites))
}
