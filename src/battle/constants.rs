//! Battle comparator constants

/// Score difference below which a battle is a draw
pub const DRAW_MARGIN: u16 = 20;

/// Highest possible aggregate score (four stats of 100)
pub const MAX_SCORE: u16 = 400;

/// Suspense delay the arena shows before revealing a result (milliseconds)
pub const ARENA_SUSPENSE_MS: u64 = 2000;
