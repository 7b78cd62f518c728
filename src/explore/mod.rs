//! Explore list - searchable, filterable view of the species catalog

pub mod query;

pub use query::{explore, period_counts, ExploreQuery, SizeClass, SortKey};
