//! Battle comparator integration tests
//!
//! Pits catalog species against each other and checks the outcome rules:
//! summed stats, the draw margin, and the stat credited for a win.

use dino_atlas::battle::constants::DRAW_MARGIN;
use dino_atlas::battle::{compare, compare_with_margin, matchup, Outcome};
use dino_atlas::catalog::{Attribute, Catalog, Species, Stats};
use dino_atlas::core::AtlasError;

fn catalog() -> Catalog {
    Catalog::builtin().expect("built-in catalog should load")
}

#[test]
fn test_higher_total_wins_by_95() {
    let a = Species::with_stats("a", "Challenger", Stats::new(85, 95, 75, 95));
    let b = Species::with_stats("b", "Defender", Stats::new(45, 85, 55, 70));

    let result = compare(&a, &b);

    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!(result.first_score, 350);
    assert_eq!(result.second_score, 255);
    assert_eq!(result.score_diff(), 95);
    assert_eq!(result.winner.as_ref().map(|id| id.as_str()), Some("a"));
}

#[test]
fn test_rex_beats_velociraptor_with_strength() {
    let catalog = catalog();
    let rex = catalog.require_species("tyrannosaurus-rex").unwrap();
    let raptor = catalog.require_species("velociraptor").unwrap();

    let result = compare(rex, raptor);

    assert_eq!(result.outcome, Outcome::Win);
    assert_eq!((result.first_score, result.second_score), (350, 300));
    // The raptor is faster, so strength gets the credit
    assert_eq!(result.deciding, Some(Attribute::Strength));
    assert_eq!(
        result.description,
        "Tyrannosaurus Rex emerges victorious! Using superior strength, it dominated the battlefield."
    );
}

#[test]
fn test_defender_win_uses_defender_text() {
    let catalog = catalog();
    let raptor = catalog.require_species("velociraptor").unwrap();
    let rex = catalog.require_species("tyrannosaurus-rex").unwrap();

    let result = compare(raptor, rex);

    assert_eq!(result.outcome, Outcome::Lose);
    assert_eq!(
        result.winner.as_ref().map(|id| id.as_str()),
        Some("tyrannosaurus-rex")
    );
    assert_eq!(
        result.description,
        "Tyrannosaurus Rex claims victory! Its overwhelming power proved decisive."
    );
}

#[test]
fn test_equal_totals_are_a_draw() {
    let catalog = catalog();
    let allosaurus = catalog.require_species("allosaurus").unwrap();
    let spinosaurus = catalog.require_species("spinosaurus").unwrap();

    let result = compare(allosaurus, spinosaurus);

    assert!(result.is_draw());
    assert_eq!(result.winner, None);
    assert_eq!(result.deciding, None);
    assert_eq!(result.first_score, 295);
    assert_eq!(result.second_score, 295);
}

#[test]
fn test_species_against_itself_is_a_draw() {
    let catalog = catalog();
    for species in catalog.species_list() {
        let result = compare(species, species);
        assert!(result.is_draw(), "{} vs itself", species.id);
    }
}

#[test]
fn test_every_pairing_is_symmetric() {
    let catalog = catalog();
    let list = catalog.species_list();

    for a in list {
        for b in list {
            let forward = compare(a, b);
            let backward = compare(b, a);

            assert_eq!(forward.outcome, backward.outcome.mirrored(), "{} vs {}", a.id, b.id);
            assert_eq!(forward.winner, backward.winner);
            assert_eq!(forward.deciding, backward.deciding);
            assert_eq!(
                (forward.first_score, forward.second_score),
                (backward.second_score, backward.first_score)
            );
        }
    }
}

#[test]
fn test_outcome_matches_score_difference() {
    let catalog = catalog();
    let list = catalog.species_list();

    for a in list {
        for b in list {
            let result = compare(a, b);
            let diff = result.score_diff();
            match result.outcome {
                Outcome::Draw => assert!(diff < DRAW_MARGIN),
                Outcome::Win => assert!(diff >= DRAW_MARGIN && result.first_score > result.second_score),
                Outcome::Lose => assert!(diff >= DRAW_MARGIN && result.first_score < result.second_score),
            }
        }
    }
}

#[test]
fn test_bite_force_is_never_credited() {
    let catalog = catalog();
    let list = catalog.species_list();

    for a in list {
        for b in list {
            assert_ne!(compare(a, b).deciding, Some(Attribute::BiteForce));
        }
    }
}

#[test]
fn test_wider_margin_turns_win_into_draw() {
    let catalog = catalog();
    let rex = catalog.require_species("tyrannosaurus-rex").unwrap();
    let carnotaurus = catalog.require_species("carnotaurus").unwrap();

    // 350 vs 305
    assert_eq!(compare(rex, carnotaurus).outcome, Outcome::Win);
    assert!(compare_with_margin(rex, carnotaurus, 50).is_draw());
    assert_eq!(compare_with_margin(rex, carnotaurus, 45).outcome, Outcome::Win);
}

#[test]
fn test_result_serializes_to_json() {
    let catalog = catalog();
    let rex = catalog.require_species("tyrannosaurus-rex").unwrap();
    let trike = catalog.require_species("triceratops").unwrap();

    let json = serde_json::to_value(compare(rex, trike)).unwrap();

    assert_eq!(json["outcome"], "win");
    assert_eq!(json["winner"], "tyrannosaurus-rex");
    assert_eq!(json["deciding"], "speed");
    assert_eq!(json["first_score"], 350);
}

#[test]
fn test_species_cannot_fight_itself() {
    let catalog = catalog();
    let rex = catalog.require_species("tyrannosaurus-rex").unwrap();
    let trike = catalog.require_species("triceratops").unwrap();

    match matchup(rex, rex, DRAW_MARGIN) {
        Err(AtlasError::SameFighter(id)) => assert_eq!(id, "tyrannosaurus-rex"),
        other => panic!("expected SameFighter, got {:?}", other),
    }
    assert_eq!(matchup(rex, trike, DRAW_MARGIN).unwrap().outcome, Outcome::Win);
}
