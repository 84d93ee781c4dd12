//! Enemy catalog integration tests.
//!
//! Instances built from the same definition must never share state, and
//! every catalog entry must be constructible and well-formed.

use trio_engine::cards::Card;
use trio_engine::core::{CardId, GameRng};
use trio_engine::enemies::{create_enemy, EnemyPhase, EnemyRegistry};
use trio_engine::round::RoundStats;

fn board() -> Vec<Card> {
    (0..12u32)
        .map(|i| Card::from_indices(CardId(i), [(i % 3) as u8, ((i / 3) % 3) as u8, 0, 0, 0]))
        .collect()
}

#[test]
fn test_instances_are_independent() {
    let board = board();
    let mut rng = GameRng::new(4);
    let mut first = create_enemy("Pickpocket Rat").unwrap();
    let mut second = create_enemy("Pickpocket Rat").unwrap();
    first.on_round_start(&board, &mut rng);
    second.on_round_start(&board, &mut rng);

    // Advance only the first instance most of the way through its period.
    assert_eq!(first.on_tick(9_000, &board, &mut rng).score_delta, 0);

    assert_eq!(first.on_tick(1_000, &board, &mut rng).score_delta, -1);
    assert_eq!(second.on_tick(1_000, &board, &mut rng).score_delta, 0);

    // Ending one leaves the other running.
    assert!(first.on_round_end());
    assert_eq!(first.phase(), EnemyPhase::Ended);
    assert_eq!(second.phase(), EnemyPhase::Active);

    let mut stats = RoundStats::new(10, 1, 1);
    stats.time_remaining_ms = 45_000;
    assert!(first.is_defeated(&stats));
    assert!(second.is_defeated(&stats));
}

#[test]
fn test_every_enemy_constructs() {
    let registry = EnemyRegistry::builtin();
    for definition in registry.iter() {
        let enemy = registry.create_enemy(definition.name).unwrap();
        assert_eq!(enemy.name, definition.name);
        assert_eq!(enemy.tier, definition.tier);
        assert!(!enemy.behavior_names().is_empty(), "{} has no behaviors", definition.name);
        assert!(!definition.effect_text.is_empty());
        assert!(!definition.defeat_text.is_empty());
        assert!((1..=4).contains(&definition.tier));
    }
}

#[test]
fn test_every_tier_offers_options() {
    let registry = EnemyRegistry::builtin();
    for tier in 1..=4 {
        let count = registry.iter().filter(|d| d.tier == tier).count();
        assert!(count >= 3, "tier {tier} only has {count} enemies");
    }
}

#[test]
fn test_hooks_inert_after_end() {
    let board = board();
    let mut rng = GameRng::new(9);
    let mut enemy = create_enemy("Leech Bat").unwrap();
    enemy.on_round_start(&board, &mut rng);
    enemy.on_round_end();

    assert!(enemy.on_tick(60_000, &board, &mut rng).is_empty());
    assert!(!enemy.on_round_end());
}
