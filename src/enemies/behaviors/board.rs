//! Opening-board seeders, opening resource seals and match reactions.

use crate::cards::Card;
use crate::core::GameRng;
use crate::enemies::behavior::{
    EnemyBehavior, InvalidMatchEffect, RoundStartEffect, ValidMatchEffect,
};

use super::{pick_cards, pick_ids};

/// Replace up to `count` random eligible cards with `rewrite(card)`.
fn seed(
    board: &[Card],
    count: usize,
    rng: &mut GameRng,
    eligible: impl Fn(&Card) -> bool,
    rewrite: impl Fn(Card) -> Card,
) -> RoundStartEffect {
    RoundStartEffect {
        card_modifications: pick_cards(board, count, rng, eligible)
            .into_iter()
            .map(|c| rewrite(c.clone()))
            .collect(),
        ..Default::default()
    }
}

/// Opening board starts with duds.
#[derive(Clone, Debug)]
pub struct DudSeeder {
    count: usize,
}

impl DudSeeder {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl EnemyBehavior for DudSeeder {
    fn name(&self) -> &'static str {
        "dud_seeder"
    }

    fn on_round_start(&mut self, board: &[Card], rng: &mut GameRng) -> RoundStartEffect {
        seed(board, self.count, rng, |c| !c.modifiers.dud, Card::dud)
    }
}

/// Opening board starts with face-down cards.
#[derive(Clone, Debug)]
pub struct ShroudSeeder {
    count: usize,
}

impl ShroudSeeder {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl EnemyBehavior for ShroudSeeder {
    fn name(&self) -> &'static str {
        "shroud_seeder"
    }

    fn on_round_start(&mut self, board: &[Card], rng: &mut GameRng) -> RoundStartEffect {
        RoundStartEffect {
            cards_to_flip: pick_ids(board, self.count, rng, |c| !c.modifiers.face_down),
            ..Default::default()
        }
    }
}

/// Opening board starts with armored cards.
#[derive(Clone, Debug)]
pub struct ArmorSeeder {
    count: usize,
    health: u8,
}

impl ArmorSeeder {
    pub fn new(count: usize, health: u8) -> Self {
        Self { count, health }
    }
}

impl EnemyBehavior for ArmorSeeder {
    fn name(&self) -> &'static str {
        "armor_seeder"
    }

    fn on_round_start(&mut self, board: &[Card], rng: &mut GameRng) -> RoundStartEffect {
        let health = self.health;
        seed(
            board,
            self.count,
            rng,
            |c| c.modifiers.health < health,
            |c| c.with_health(health),
        )
    }
}

/// Opening board starts with lit bombs.
#[derive(Clone, Debug)]
pub struct BombSeeder {
    count: usize,
    fuse_ms: u64,
}

impl BombSeeder {
    pub fn new(count: usize, fuse_ms: u64) -> Self {
        Self { count, fuse_ms }
    }
}

impl EnemyBehavior for BombSeeder {
    fn name(&self) -> &'static str {
        "bomb_seeder"
    }

    fn on_round_start(&mut self, board: &[Card], rng: &mut GameRng) -> RoundStartEffect {
        let fuse = self.fuse_ms;
        seed(
            board,
            self.count,
            rng,
            |c| c.modifiers.bomb_ms.is_none(),
            |c| c.with_bomb(fuse),
        )
    }
}

/// Opening board starts with countdown cards.
#[derive(Clone, Debug)]
pub struct CountdownSeeder {
    count: usize,
    countdown_ms: u64,
}

impl CountdownSeeder {
    pub fn new(count: usize, countdown_ms: u64) -> Self {
        Self {
            count,
            countdown_ms,
        }
    }
}

impl EnemyBehavior for CountdownSeeder {
    fn name(&self) -> &'static str {
        "countdown_seeder"
    }

    fn on_round_start(&mut self, board: &[Card], rng: &mut GameRng) -> RoundStartEffect {
        let ms = self.countdown_ms;
        seed(
            board,
            self.count,
            rng,
            |c| c.modifiers.countdown_ms.is_none(),
            |c| c.with_countdown(ms),
        )
    }
}

fn not_in(matched: &[Card]) -> impl Fn(&Card) -> bool + '_ {
    move |c: &Card| !matched.iter().any(|m| m.id == c.id)
}

/// Every valid match turns cards face down.
#[derive(Clone, Debug)]
pub struct MatchShroud {
    count: usize,
}

impl MatchShroud {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl EnemyBehavior for MatchShroud {
    fn name(&self) -> &'static str {
        "match_shroud"
    }

    fn on_valid_match(
        &mut self,
        matched: &[Card],
        board: &[Card],
        rng: &mut GameRng,
    ) -> ValidMatchEffect {
        let outside = not_in(matched);
        ValidMatchEffect {
            cards_to_flip: pick_ids(board, self.count, rng, |c| {
                outside(c) && !c.modifiers.face_down
            }),
            ..Default::default()
        }
    }
}

/// Every valid match eats extra cards, with no reward.
#[derive(Clone, Debug)]
pub struct MatchDevourer {
    count: usize,
}

impl MatchDevourer {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl EnemyBehavior for MatchDevourer {
    fn name(&self) -> &'static str {
        "match_devourer"
    }

    fn on_valid_match(
        &mut self,
        matched: &[Card],
        board: &[Card],
        rng: &mut GameRng,
    ) -> ValidMatchEffect {
        ValidMatchEffect {
            cards_to_remove: pick_ids(board, self.count, rng, not_in(matched)),
            ..Default::default()
        }
    }
}

/// Invalid matches destroy random cards.
#[derive(Clone, Debug)]
pub struct Backlash {
    count: usize,
}

impl Backlash {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl EnemyBehavior for Backlash {
    fn name(&self) -> &'static str {
        "backlash"
    }

    fn on_invalid_match(
        &mut self,
        _selected: &[Card],
        board: &[Card],
        rng: &mut GameRng,
    ) -> InvalidMatchEffect {
        InvalidMatchEffect {
            cards_to_remove: pick_ids(board, self.count, rng, |_| true),
            ..Default::default()
        }
    }
}

/// Every valid match rots cards outside the match into duds.
#[derive(Clone, Debug)]
pub struct MatchDudder {
    count: usize,
}

impl MatchDudder {
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl EnemyBehavior for MatchDudder {
    fn name(&self) -> &'static str {
        "match_dudder"
    }

    fn on_valid_match(
        &mut self,
        matched: &[Card],
        board: &[Card],
        rng: &mut GameRng,
    ) -> ValidMatchEffect {
        let outside = not_in(matched);
        ValidMatchEffect {
            card_modifications: pick_cards(board, self.count, rng, |c| {
                outside(c) && !c.modifiers.dud
            })
            .into_iter()
            .map(|c| c.clone().dud())
            .collect(),
            ..Default::default()
        }
    }
}

/// Invalid matches cost points. Score never drops below zero.
#[derive(Clone, Debug)]
pub struct InvalidPenalty {
    points: i64,
}

impl InvalidPenalty {
    pub fn new(points: i64) -> Self {
        Self { points }
    }
}

impl EnemyBehavior for InvalidPenalty {
    fn name(&self) -> &'static str {
        "invalid_penalty"
    }

    fn on_invalid_match(&mut self, _: &[Card], _: &[Card], _: &mut GameRng) -> InvalidMatchEffect {
        InvalidMatchEffect {
            score_delta: -self.points,
            ..Default::default()
        }
    }
}

/// Invalid matches cost clock time.
#[derive(Clone, Debug)]
pub struct InvalidTimeTax {
    cost_ms: i64,
}

impl InvalidTimeTax {
    pub fn new(cost_ms: i64) -> Self {
        Self { cost_ms }
    }
}

impl EnemyBehavior for InvalidTimeTax {
    fn name(&self) -> &'static str {
        "invalid_time_tax"
    }

    fn on_invalid_match(&mut self, _: &[Card], _: &[Card], _: &mut GameRng) -> InvalidMatchEffect {
        InvalidMatchEffect {
            time_delta_ms: -self.cost_ms,
            ..Default::default()
        }
    }
}

/// Seals hints before the round starts.
#[derive(Clone, Debug)]
pub struct HintSeal {
    count: i32,
}

impl HintSeal {
    pub fn new(count: i32) -> Self {
        Self { count }
    }
}

impl EnemyBehavior for HintSeal {
    fn name(&self) -> &'static str {
        "hint_seal"
    }

    fn on_round_start(&mut self, _: &[Card], _: &mut GameRng) -> RoundStartEffect {
        RoundStartEffect {
            hints_delta: -self.count,
            ..Default::default()
        }
    }
}

/// Seals graces before the round starts.
#[derive(Clone, Debug)]
pub struct GraceSeal {
    count: i32,
}

impl GraceSeal {
    pub fn new(count: i32) -> Self {
        Self { count }
    }
}

impl EnemyBehavior for GraceSeal {
    fn name(&self) -> &'static str {
        "grace_seal"
    }

    fn on_round_start(&mut self, _: &[Card], _: &mut GameRng) -> RoundStartEffect {
        RoundStartEffect {
            graces_delta: -self.count,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardId;
    use crate::enemies::behaviors::testing::board;

    #[test]
    fn test_seeders_respect_count() {
        let cards = board(12);
        let mut rng = GameRng::new(4);

        let duds = DudSeeder::new(2).on_round_start(&cards, &mut rng);
        assert_eq!(duds.card_modifications.len(), 2);
        assert!(duds.card_modifications.iter().all(|c| c.modifiers.dud));

        let armor = ArmorSeeder::new(3, 3).on_round_start(&cards, &mut rng);
        assert!(armor.card_modifications.iter().all(|c| c.modifiers.health == 3));

        let shroud = ShroudSeeder::new(20).on_round_start(&cards, &mut rng);
        assert_eq!(shroud.cards_to_flip.len(), 12);
    }

    #[test]
    fn test_match_reactions_skip_matched() {
        let cards = board(5);
        let matched = cards[..3].to_vec();
        let mut rng = GameRng::new(4);

        let shroud = MatchShroud::new(5).on_valid_match(&matched, &cards, &mut rng);
        assert_eq!(shroud.cards_to_flip.len(), 2);
        assert!(shroud.cards_to_flip.iter().all(|id| id.0 >= 3));

        let devour = MatchDevourer::new(1).on_valid_match(&matched, &cards, &mut rng);
        assert_eq!(devour.cards_to_remove.len(), 1);
        assert!(devour.cards_to_remove[0].0 >= 3);
    }

    #[test]
    fn test_backlash() {
        let cards = board(6);
        let mut rng = GameRng::new(4);
        let effect = Backlash::new(2).on_invalid_match(&cards[..3], &cards, &mut rng);
        assert_eq!(effect.cards_to_remove.len(), 2);
    }

    #[test]
    fn test_match_dudder_skips_matched_and_duds() {
        let mut cards = board(5);
        cards[3] = cards[3].clone().dud();
        let matched = cards[..3].to_vec();
        let mut rng = GameRng::new(4);

        let effect = MatchDudder::new(3).on_valid_match(&matched, &cards, &mut rng);
        assert_eq!(effect.card_modifications.len(), 1);
        assert_eq!(effect.card_modifications[0].id, CardId(4));
        assert!(effect.card_modifications[0].modifiers.dud);
    }

    #[test]
    fn test_invalid_penalties() {
        let cards = board(3);
        let mut rng = GameRng::new(4);
        let points = InvalidPenalty::new(2).on_invalid_match(&cards, &cards, &mut rng);
        assert_eq!(points.score_delta, -2);
        assert!(points.cards_to_remove.is_empty());
        let time = InvalidTimeTax::new(3_000).on_invalid_match(&cards, &cards, &mut rng);
        assert_eq!(time.time_delta_ms, -3_000);
    }

    #[test]
    fn test_seals_only_touch_resources() {
        let cards = board(6);
        let mut rng = GameRng::new(4);
        let hints = HintSeal::new(1).on_round_start(&cards, &mut rng);
        assert_eq!(hints.hints_delta, -1);
        assert!(hints.card_modifications.is_empty());
        let graces = GraceSeal::new(2).on_round_start(&cards, &mut rng);
        assert_eq!(graces.graces_delta, -2);
    }
}
