//! Stat-based battle comparator
//!
//! A battle is the sum of four stats per side. Close totals are a draw;
//! otherwise the higher total wins. No randomness, so the same pairing
//! always produces the same result.

use crate::battle::constants::DRAW_MARGIN;
use crate::catalog::{Attribute, Species};
use crate::core::error::{AtlasError, Result};
use crate::core::types::SpeciesId;
use serde::{Deserialize, Serialize};

/// Result from the first fighter's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same result seen from the other side
    pub fn mirrored(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

/// Full result of one comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub outcome: Outcome,
    /// Absent on a draw
    pub winner: Option<SpeciesId>,
    pub first_score: u16,
    pub second_score: u16,
    /// Stat the description credits for the win; absent on a draw
    pub deciding: Option<Attribute>,
    pub description: String,
}

impl BattleOutcome {
    pub fn score_diff(&self) -> u16 {
        self.first_score.abs_diff(self.second_score)
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Outcome::Draw
    }
}

/// Compare two species with the standard draw margin
pub fn compare(first: &Species, second: &Species) -> BattleOutcome {
    compare_with_margin(first, second, DRAW_MARGIN)
}

/// Compare two species; totals closer than `margin` are a draw
pub fn compare_with_margin(first: &Species, second: &Species, margin: u16) -> BattleOutcome {
    let first_score = first.stats.total();
    let second_score = second.stats.total();
    let diff = first_score.abs_diff(second_score);

    let result = if diff < margin {
        BattleOutcome {
            outcome: Outcome::Draw,
            winner: None,
            first_score,
            second_score,
            deciding: None,
            description: "An epic clash that ended in a stalemate! Both dinosaurs proved equally matched."
                .to_string(),
        }
    } else if first_score > second_score {
        let deciding = deciding_attribute(first, second);
        BattleOutcome {
            outcome: Outcome::Win,
            winner: Some(first.id.clone()),
            first_score,
            second_score,
            deciding: Some(deciding),
            description: format!(
                "{} emerges victorious! Using superior {}, it dominated the battlefield.",
                first.name,
                challenger_phrase(deciding)
            ),
        }
    } else {
        let deciding = deciding_attribute(second, first);
        BattleOutcome {
            outcome: Outcome::Lose,
            winner: Some(second.id.clone()),
            first_score,
            second_score,
            deciding: Some(deciding),
            description: format!(
                "{} claims victory! Its {} proved decisive.",
                second.name,
                defender_phrase(deciding)
            ),
        }
    };

    tracing::debug!(
        "{} ({}) vs {} ({}): {:?}",
        first.id,
        first_score,
        second.id,
        second_score,
        result.outcome
    );
    result
}

/// Compare two different species; pitting one against itself is rejected
pub fn matchup(first: &Species, second: &Species, margin: u16) -> Result<BattleOutcome> {
    if first.id == second.id {
        return Err(AtlasError::SameFighter(first.id.to_string()));
    }
    Ok(compare_with_margin(first, second, margin))
}

/// Stat credited for a win: speed if the winner is faster, else strength
/// if stronger, else intelligence. Bite force is never credited, and
/// intelligence is the fallback even when the winner is not smarter.
pub fn deciding_attribute(winner: &Species, loser: &Species) -> Attribute {
    if winner.stats.speed > loser.stats.speed {
        Attribute::Speed
    } else if winner.stats.strength > loser.stats.strength {
        Attribute::Strength
    } else {
        Attribute::Intelligence
    }
}

fn challenger_phrase(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::Speed => "speed",
        Attribute::Strength => "strength",
        Attribute::Intelligence | Attribute::BiteForce => "intelligence",
    }
}

fn defender_phrase(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::Speed => "lightning-fast reflexes",
        Attribute::Strength => "overwhelming power",
        Attribute::Intelligence | Attribute::BiteForce => "tactical brilliance",
    }
}
