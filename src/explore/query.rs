//! Search, filter and sort the species list

use crate::catalog::{Diet, Period, Species};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Size bucket by body length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    /// Under 10 m
    Small,
    /// 10 m up to 20 m
    Medium,
    /// 20 m and longer
    Large,
}

impl SizeClass {
    pub fn of_length(length_m: f32) -> Self {
        if length_m < 10.0 {
            SizeClass::Small
        } else if length_m < 20.0 {
            SizeClass::Medium
        } else {
            SizeClass::Large
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Name, A to Z
    #[default]
    Name,
    /// Period name, A to Z
    Period,
    /// Longest first
    Size,
    /// Fastest first
    Speed,
    /// Strongest first
    Strength,
    /// Earliest discovery first
    Discovered,
}

/// Explore-list filters; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExploreQuery {
    pub search: Option<String>,
    pub period: Option<Period>,
    pub diet: Option<Diet>,
    pub size: Option<SizeClass>,
    pub sort: SortKey,
}

impl ExploreQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_period(mut self, period: Period) -> Self {
        self.period = Some(period);
        self
    }

    pub fn with_diet(mut self, diet: Diet) -> Self {
        self.diet = Some(diet);
        self
    }

    pub fn with_size(mut self, size: SizeClass) -> Self {
        self.size = Some(size);
        self
    }

    pub fn sorted_by(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Does a species pass every filter?
    pub fn matches(&self, species: &Species) -> bool {
        let search_ok = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                species.name.to_lowercase().contains(&term)
                    || species.scientific_name.to_lowercase().contains(&term)
            }
        };

        search_ok
            && self.period.map_or(true, |p| species.period == p)
            && self.diet.map_or(true, |d| species.diet == d)
            && self.size.map_or(true, |s| SizeClass::of_length(species.length_m) == s)
    }
}

fn compare_by(key: SortKey, a: &Species, b: &Species) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Period => a.period.name().cmp(b.period.name()),
        SortKey::Size => b.length_m.total_cmp(&a.length_m),
        SortKey::Speed => b.stats.speed.cmp(&a.stats.speed),
        SortKey::Strength => b.stats.strength.cmp(&a.stats.strength),
        SortKey::Discovered => a.first_discovered.cmp(&b.first_discovered),
    }
}

/// Species passing the query's filters, in the query's order
///
/// The sort is stable: species with equal keys keep catalog order.
pub fn explore<'a>(species: &'a [Species], query: &ExploreQuery) -> Vec<&'a Species> {
    let mut found: Vec<&Species> = species.iter().filter(|s| query.matches(s)).collect();
    found.sort_by(|a, b| compare_by(query.sort, a, b));
    found
}

/// Number of species per period, in chronological order
pub fn period_counts(species: &[Species]) -> Vec<(Period, usize)> {
    Period::all()
        .iter()
        .map(|&period| (period, species.iter().filter(|s| s.period == period).count()))
        .collect()
}
