//! Battle arena - head-to-head stat comparison between two species
//!
//! Purely deterministic: totals of speed, strength, intelligence and bite
//! force decide the winner, with a draw margin for close matchups.

pub mod comparator;
pub mod constants;

pub use comparator::{
    compare, compare_with_margin, deciding_attribute, matchup, BattleOutcome, Outcome,
};
