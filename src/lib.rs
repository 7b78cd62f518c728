//! Dino Atlas - dinosaur catalog, fossil-site locator and battle arena

pub mod battle;
pub mod catalog;
pub mod core;
pub mod explore;
pub mod geo;
