//! Species records and their comparative stats

use crate::core::types::{Coordinate, SpeciesId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest value any single stat may take
pub const MAX_STAT: u8 = 100;

/// One of the four comparative stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Speed,
    Strength,
    Intelligence,
    BiteForce,
}

impl Attribute {
    /// All attributes, in display order
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Speed,
            Attribute::Strength,
            Attribute::Intelligence,
            Attribute::BiteForce,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Speed => "speed",
            Attribute::Strength => "strength",
            Attribute::Intelligence => "intelligence",
            Attribute::BiteForce => "bite_force",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Comparative stats, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub speed: u8,
    pub strength: u8,
    pub intelligence: u8,
    pub bite_force: u8,
}

impl Stats {
    pub fn new(speed: u8, strength: u8, intelligence: u8, bite_force: u8) -> Self {
        Self {
            speed,
            strength,
            intelligence,
            bite_force,
        }
    }

    pub fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Speed => self.speed,
            Attribute::Strength => self.strength,
            Attribute::Intelligence => self.intelligence,
            Attribute::BiteForce => self.bite_force,
        }
    }

    /// Sum of all four stats (0-400)
    pub fn total(&self) -> u16 {
        self.speed as u16 + self.strength as u16 + self.intelligence as u16 + self.bite_force as u16
    }

    /// First attribute that exceeds [`MAX_STAT`], if any
    pub fn out_of_range(&self) -> Option<(Attribute, u8)> {
        Attribute::all()
            .iter()
            .map(|&attr| (attr, self.get(attr)))
            .find(|&(_, value)| value > MAX_STAT)
    }
}

/// Geological period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// 252-201 million years ago
    Triassic,
    /// 201-145 million years ago
    Jurassic,
    /// 145-66 million years ago
    Cretaceous,
}

impl Period {
    pub fn all() -> &'static [Period] {
        &[Period::Triassic, Period::Jurassic, Period::Cretaceous]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Period::Triassic => "Triassic",
            Period::Jurassic => "Jurassic",
            Period::Cretaceous => "Cretaceous",
        }
    }

    /// Span of the period in millions of years ago (start, end)
    pub fn span_mya(&self) -> (u16, u16) {
        match self {
            Period::Triassic => (252, 201),
            Period::Jurassic => (201, 145),
            Period::Cretaceous => (145, 66),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Diet {
    Carnivore,
    Herbivore,
    Piscivore,
    Omnivore,
}

impl Diet {
    pub fn name(&self) -> &'static str {
        match self {
            Diet::Carnivore => "Carnivore",
            Diet::Herbivore => "Herbivore",
            Diet::Piscivore => "Piscivore",
            Diet::Omnivore => "Omnivore",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Where the first specimen was found
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryLocation {
    pub name: String,
    pub coordinate: Coordinate,
}

/// A species in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: SpeciesId,
    pub name: String,
    pub scientific_name: String,
    pub period: Period,
    pub diet: Diet,
    /// Standing height (metres)
    pub height_m: f32,
    /// Nose-to-tail length (metres)
    pub length_m: f32,
    pub stats: Stats,
    #[serde(default)]
    pub brain_size: String,
    /// Year the species was first described
    pub first_discovered: i32,
    #[serde(default)]
    pub fossils_found: String,
    pub discovery_location: DiscoveryLocation,
    #[serde(default)]
    pub fun_fact: String,
    #[serde(default)]
    pub trivia: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub habitat: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub discovery_story: String,
    #[serde(default)]
    pub museum_locations: Vec<String>,
}

impl Species {
    /// Minimal species with only the fields the comparator and explore
    /// list need; descriptive text is left empty
    pub fn with_stats(id: &str, name: &str, stats: Stats) -> Self {
        Self {
            id: SpeciesId::new(id),
            name: name.to_string(),
            scientific_name: name.to_string(),
            period: Period::Cretaceous,
            diet: Diet::Carnivore,
            height_m: 1.0,
            length_m: 1.0,
            stats,
            brain_size: String::new(),
            first_discovered: 1900,
            fossils_found: String::new(),
            discovery_location: DiscoveryLocation {
                name: String::new(),
                coordinate: Coordinate::default(),
            },
            fun_fact: String::new(),
            trivia: String::new(),
            overview: String::new(),
            habitat: String::new(),
            timeline: String::new(),
            discovery_story: String::new(),
            museum_locations: Vec::new(),
        }
    }
}
