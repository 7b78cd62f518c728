//! Atlas configuration with documented constants
//!
//! Every tunable the locator and the battle arena use lives here. Values
//! can be overridden from a TOML file; missing keys keep their defaults.

use crate::battle::constants::{DRAW_MARGIN, MAX_SCORE};
use crate::core::error::{AtlasError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for the locator and the battle arena
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    // === LOCATOR ===
    /// Radius of the "fossils near you" search (kilometres)
    ///
    /// 3000 km covers most of a continent, so a query from any large city
    /// in North America or Europe usually finds at least one site.
    pub search_radius_km: f64,

    /// How many closest sites to offer as alternatives
    ///
    /// Shown alongside the radius results, and on their own when nothing
    /// is inside the radius.
    pub fallback_count: usize,

    // === BATTLE ===
    /// Score difference below which a battle is a draw
    pub draw_margin: u16,

    /// Artificial delay before a battle result is shown (milliseconds)
    ///
    /// Purely presentational. The comparator itself never waits.
    pub battle_suspense_ms: u64,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            search_radius_km: 3000.0,
            fallback_count: 5,
            draw_margin: DRAW_MARGIN,
            battle_suspense_ms: 0,
        }
    }
}

impl AtlasConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AtlasConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !self.search_radius_km.is_finite() || self.search_radius_km <= 0.0 {
            return Err(AtlasError::InvalidConfig(format!(
                "search_radius_km ({}) must be a positive number",
                self.search_radius_km
            )));
        }

        // Half the planet's circumference is the largest possible distance
        if self.search_radius_km > 20_100.0 {
            return Err(AtlasError::InvalidConfig(format!(
                "search_radius_km ({}) exceeds half the Earth's circumference",
                self.search_radius_km
            )));
        }

        if self.fallback_count == 0 {
            return Err(AtlasError::InvalidConfig(
                "fallback_count must be at least 1".into(),
            ));
        }

        // Equal totals must stay a draw, and past 400 every battle would be one
        if self.draw_margin == 0 || self.draw_margin > MAX_SCORE {
            return Err(AtlasError::InvalidConfig(format!(
                "draw_margin ({}) must be between 1 and {}",
                self.draw_margin, MAX_SCORE
            )));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<AtlasConfig> = OnceLock::new();

/// Get the global atlas config (initializes with defaults if not set)
pub fn config() -> &'static AtlasConfig {
    CONFIG.get_or_init(AtlasConfig::default)
}

/// Set the global atlas config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: AtlasConfig) -> std::result::Result<(), AtlasConfig> {
    CONFIG.set(config)
}
