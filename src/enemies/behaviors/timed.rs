//! Periodic behaviors.
//!
//! Each module owns an [`Interval`] and acts once per completed period.
//! Drains ([`TimeDrain`], [`HintThief`], [`GraceThief`]) return plain
//! deltas; the round clamps resources at zero.
//! Fuse behaviors ([`BombFuse`], [`CountdownCurse`]) instead burn down the
//! remaining time on every modifier card, every tick.

use rustc_hash::FxHashSet;

use crate::cards::{Attribute, Card, Grid};
use crate::core::{CardId, GameRng};
use crate::enemies::behavior::{EnemyBehavior, TickEffect};

use super::{pick_cards, pick_ids, Interval};

/// Drains score every period.
#[derive(Clone, Debug)]
pub struct ScoreLeech {
    interval: Interval,
    amount: i64,
}

impl ScoreLeech {
    pub fn new(period_ms: u64, amount: i64) -> Self {
        Self {
            interval: Interval::new(period_ms),
            amount,
        }
    }
}

impl EnemyBehavior for ScoreLeech {
    fn name(&self) -> &'static str {
        "score_leech"
    }

    fn on_tick(&mut self, delta_ms: u64, _: &[Card], _: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms);
        TickEffect {
            score_delta: -self.amount * i64::from(fired),
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
    }
}

/// Drains health every period.
#[derive(Clone, Debug)]
pub struct HealthLeech {
    interval: Interval,
    amount: i32,
}

impl HealthLeech {
    pub fn new(period_ms: u64, amount: i32) -> Self {
        Self {
            interval: Interval::new(period_ms),
            amount,
        }
    }
}

impl EnemyBehavior for HealthLeech {
    fn name(&self) -> &'static str {
        "health_leech"
    }

    fn on_tick(&mut self, delta_ms: u64, _: &[Card], _: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms) as i32;
        TickEffect {
            health_delta: -self.amount * fired,
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
    }
}

/// Eats a random card every period.
#[derive(Clone, Debug)]
pub struct CardDevourer {
    interval: Interval,
}

impl CardDevourer {
    pub fn new(period_ms: u64) -> Self {
        Self {
            interval: Interval::new(period_ms),
        }
    }
}

impl EnemyBehavior for CardDevourer {
    fn name(&self) -> &'static str {
        "card_devourer"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], rng: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms) as usize;
        if fired == 0 {
            return TickEffect::default();
        }
        TickEffect {
            cards_to_remove: pick_ids(board, fired, rng, |_| true),
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
    }
}

/// Turns face-up cards face down every period.
#[derive(Clone, Debug)]
pub struct Flipper {
    interval: Interval,
    count: usize,
}

impl Flipper {
    pub fn new(period_ms: u64, count: usize) -> Self {
        Self {
            interval: Interval::new(period_ms),
            count,
        }
    }
}

impl EnemyBehavior for Flipper {
    fn name(&self) -> &'static str {
        "flipper"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], rng: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms) as usize;
        if fired == 0 {
            return TickEffect::default();
        }
        TickEffect {
            cards_to_flip: pick_ids(board, self.count * fired, rng, |c| !c.modifiers.face_down),
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
    }
}

/// Toggles random cards every period, both directions.
#[derive(Clone, Debug)]
pub struct Blinker {
    interval: Interval,
    count: usize,
}

impl Blinker {
    pub fn new(period_ms: u64, count: usize) -> Self {
        Self {
            interval: Interval::new(period_ms),
            count,
        }
    }
}

impl EnemyBehavior for Blinker {
    fn name(&self) -> &'static str {
        "blinker"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], rng: &mut GameRng) -> TickEffect {
        if self.interval.advance(delta_ms) == 0 {
            return TickEffect::default();
        }
        TickEffect {
            cards_to_flip: pick_ids(board, self.count, rng, |_| true),
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
    }
}

/// Rewrites one attribute of a random card every period. A card is only
/// ever shifted once.
#[derive(Clone, Debug)]
pub struct AttributeShifter {
    interval: Interval,
    attributes: Vec<Attribute>,
    shifted: FxHashSet<CardId>,
}

impl AttributeShifter {
    pub fn new(period_ms: u64) -> Self {
        Self::with_attributes(
            period_ms,
            vec![
                Attribute::Shape,
                Attribute::Color,
                Attribute::Number,
                Attribute::Shading,
            ],
        )
    }

    pub fn with_attributes(period_ms: u64, attributes: Vec<Attribute>) -> Self {
        Self {
            interval: Interval::new(period_ms),
            attributes,
            shifted: FxHashSet::default(),
        }
    }
}

impl EnemyBehavior for AttributeShifter {
    fn name(&self) -> &'static str {
        "attribute_shifter"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], rng: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms) as usize;
        if fired == 0 || self.attributes.is_empty() {
            return TickEffect::default();
        }
        let targets = pick_cards(board, fired, rng, |c| !self.shifted.contains(&c.id));
        let mut effect = TickEffect::default();
        for card in targets {
            let Some(&attribute) = rng.choose(&self.attributes) else {
                break;
            };
            // Offset 1 or 2 guarantees a different value.
            let offset = 1 + rng.gen_range_usize(0..2) as u8;
            let shifted = card.with_value(attribute, (card.value(attribute) + offset) % 3);
            self.shifted.insert(card.id);
            effect.card_modifications.push(shifted);
        }
        effect
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
        self.shifted.clear();
    }
}

/// Arms a bomb on a random card every period.
#[derive(Clone, Debug)]
pub struct BombPlanter {
    interval: Interval,
    fuse_ms: u64,
}

impl BombPlanter {
    pub fn new(period_ms: u64, fuse_ms: u64) -> Self {
        Self {
            interval: Interval::new(period_ms),
            fuse_ms,
        }
    }
}

impl EnemyBehavior for BombPlanter {
    fn name(&self) -> &'static str {
        "bomb_planter"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], rng: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms) as usize;
        if fired == 0 {
            return TickEffect::default();
        }
        let card_modifications = pick_cards(board, fired, rng, |c| c.modifiers.bomb_ms.is_none())
            .into_iter()
            .map(|c| c.clone().with_bomb(self.fuse_ms))
            .collect();
        TickEffect {
            card_modifications,
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
    }
}

/// Sets a random card on fire every period.
#[derive(Clone, Debug)]
pub struct Arsonist {
    interval: Interval,
    clock_ms: u64,
}

impl Arsonist {
    pub fn new(period_ms: u64) -> Self {
        Self {
            interval: Interval::new(period_ms),
            clock_ms: 0,
        }
    }
}

impl EnemyBehavior for Arsonist {
    fn name(&self) -> &'static str {
        "arsonist"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], rng: &mut GameRng) -> TickEffect {
        self.clock_ms += delta_ms;
        let fired = self.interval.advance(delta_ms) as usize;
        if fired == 0 {
            return TickEffect::default();
        }
        let now = self.clock_ms;
        let card_modifications = pick_cards(board, fired, rng, |c| !c.is_on_fire())
            .into_iter()
            .map(|c| c.clone().ignited_at(now))
            .collect();
        TickEffect {
            card_modifications,
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
        self.clock_ms = 0;
    }
}

/// Turns a random card into a dud every period.
#[derive(Clone, Debug)]
pub struct DudRot {
    interval: Interval,
}

impl DudRot {
    pub fn new(period_ms: u64) -> Self {
        Self {
            interval: Interval::new(period_ms),
        }
    }
}

impl EnemyBehavior for DudRot {
    fn name(&self) -> &'static str {
        "dud_rot"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], rng: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms) as usize;
        if fired == 0 {
            return TickEffect::default();
        }
        let card_modifications = pick_cards(board, fired, rng, |c| !c.modifiers.dud)
            .into_iter()
            .map(|c| c.clone().dud())
            .collect();
        TickEffect {
            card_modifications,
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
    }
}

/// Adds a point of health to a random card every period, up to a limit.
#[derive(Clone, Debug)]
pub struct ArmorGrowth {
    interval: Interval,
    max_health: u8,
}

impl ArmorGrowth {
    pub fn new(period_ms: u64, max_health: u8) -> Self {
        Self {
            interval: Interval::new(period_ms),
            max_health,
        }
    }
}

impl EnemyBehavior for ArmorGrowth {
    fn name(&self) -> &'static str {
        "armor_growth"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], rng: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms) as usize;
        if fired == 0 {
            return TickEffect::default();
        }
        let limit = self.max_health;
        let card_modifications = pick_cards(board, fired, rng, |c| c.modifiers.health < limit)
            .into_iter()
            .map(|c| {
                let mut card = c.clone();
                card.modifiers.health += 1;
                card.modifiers.max_health = card.modifiers.max_health.max(card.modifiers.health);
                card
            })
            .collect();
        TickEffect {
            card_modifications,
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
    }
}

/// Burns down bomb fuses. A bomb that reaches zero leaves the board and
/// costs health.
#[derive(Clone, Debug)]
pub struct BombFuse {
    damage: i32,
}

impl BombFuse {
    pub fn new(damage: i32) -> Self {
        Self { damage }
    }
}

impl EnemyBehavior for BombFuse {
    fn name(&self) -> &'static str {
        "bomb_fuse"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], _: &mut GameRng) -> TickEffect {
        let mut effect = TickEffect::default();
        for card in board {
            let Some(fuse) = card.modifiers.bomb_ms else {
                continue;
            };
            let left = fuse.saturating_sub(delta_ms);
            if left == 0 {
                effect.cards_to_remove.push(card.id);
                effect.health_delta -= self.damage;
            } else {
                effect.card_modifications.push(card.clone().with_bomb(left));
            }
        }
        effect
    }
}

/// Burns down countdown cards. Any countdown reaching zero ends the round.
#[derive(Clone, Debug, Default)]
pub struct CountdownCurse;

impl EnemyBehavior for CountdownCurse {
    fn name(&self) -> &'static str {
        "countdown_curse"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], _: &mut GameRng) -> TickEffect {
        let mut effect = TickEffect::default();
        for card in board {
            let Some(remaining) = card.modifiers.countdown_ms else {
                continue;
            };
            let left = remaining.saturating_sub(delta_ms);
            if left == 0 {
                effect.instant_death = true;
            } else {
                effect.card_modifications.push(card.clone().with_countdown(left));
            }
        }
        effect
    }
}

/// Burns extra clock time every period.
#[derive(Clone, Debug)]
pub struct TimeDrain {
    interval: Interval,
    amount_ms: u64,
}

impl TimeDrain {
    pub fn new(period_ms: u64, amount_ms: u64) -> Self {
        Self {
            interval: Interval::new(period_ms),
            amount_ms,
        }
    }
}

impl EnemyBehavior for TimeDrain {
    fn name(&self) -> &'static str {
        "time_drain"
    }

    fn on_tick(&mut self, delta_ms: u64, _board: &[Card], _rng: &mut GameRng) -> TickEffect {
        let fired = u64::from(self.interval.advance(delta_ms));
        TickEffect {
            time_delta_ms: -((self.amount_ms * fired) as i64),
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
    }
}

/// Takes hints every period. The round never lets hints go below zero.
#[derive(Clone, Debug)]
pub struct HintThief {
    interval: Interval,
    amount: i32,
}

impl HintThief {
    pub fn new(period_ms: u64, amount: i32) -> Self {
        Self {
            interval: Interval::new(period_ms),
            amount,
        }
    }
}

impl EnemyBehavior for HintThief {
    fn name(&self) -> &'static str {
        "hint_thief"
    }

    fn on_tick(&mut self, delta_ms: u64, _board: &[Card], _rng: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms) as i32;
        TickEffect {
            hints_delta: -self.amount * fired,
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
    }
}

/// Takes graces every period.
#[derive(Clone, Debug)]
pub struct GraceThief {
    interval: Interval,
    amount: i32,
}

impl GraceThief {
    pub fn new(period_ms: u64, amount: i32) -> Self {
        Self {
            interval: Interval::new(period_ms),
            amount,
        }
    }
}

impl EnemyBehavior for GraceThief {
    fn name(&self) -> &'static str {
        "grace_thief"
    }

    fn on_tick(&mut self, delta_ms: u64, _board: &[Card], _rng: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms) as i32;
        TickEffect {
            graces_delta: -self.amount * fired,
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
    }
}

/// Swaps pairs of cards every period. A card is moved at most once per
/// round.
#[derive(Clone, Debug)]
pub struct Shuffler {
    interval: Interval,
    pairs: usize,
    moved: FxHashSet<CardId>,
}

impl Shuffler {
    pub fn new(period_ms: u64, pairs: usize) -> Self {
        Self {
            interval: Interval::new(period_ms),
            pairs,
            moved: FxHashSet::default(),
        }
    }
}

impl EnemyBehavior for Shuffler {
    fn name(&self) -> &'static str {
        "shuffler"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], rng: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms) as usize;
        if fired == 0 {
            return TickEffect::default();
        }
        let ids = pick_ids(board, fired * self.pairs * 2, rng, |c| !self.moved.contains(&c.id));
        let mut effect = TickEffect::default();
        for pair in ids.chunks_exact(2) {
            self.moved.insert(pair[0]);
            self.moved.insert(pair[1]);
            effect.swaps.push((pair[0], pair[1]));
        }
        effect
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
        self.moved.clear();
    }
}

/// Every period, each burning card ignites one neighbor that is not yet
/// burning.
#[derive(Clone, Debug)]
pub struct FireSpreader {
    interval: Interval,
    clock_ms: u64,
}

impl FireSpreader {
    pub fn new(period_ms: u64) -> Self {
        Self {
            interval: Interval::new(period_ms),
            clock_ms: 0,
        }
    }
}

impl EnemyBehavior for FireSpreader {
    fn name(&self) -> &'static str {
        "fire_spreader"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], rng: &mut GameRng) -> TickEffect {
        self.clock_ms += delta_ms;
        // Catch-up periods spread one step, not several.
        if self.interval.advance(delta_ms) == 0 {
            return TickEffect::default();
        }
        let grid = Grid::for_len(board.len());
        let mut caught: FxHashSet<CardId> = FxHashSet::default();
        let mut effect = TickEffect::default();
        for (pos, _) in board.iter().enumerate().filter(|(_, c)| c.is_on_fire()) {
            let open: Vec<usize> = grid
                .neighbors(pos)
                .into_iter()
                .filter(|&n| !board[n].is_on_fire() && !caught.contains(&board[n].id))
                .collect();
            if let Some(&n) = rng.choose(&open) {
                caught.insert(board[n].id);
                effect
                    .card_modifications
                    .push(board[n].clone().ignited_at(self.clock_ms));
            }
        }
        effect
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
        self.clock_ms = 0;
    }
}

/// Attaches a countdown to a random card every period.
#[derive(Clone, Debug)]
pub struct CountdownPlanter {
    interval: Interval,
    countdown_ms: u64,
}

impl CountdownPlanter {
    pub fn new(period_ms: u64, countdown_ms: u64) -> Self {
        Self {
            interval: Interval::new(period_ms),
            countdown_ms,
        }
    }
}

impl EnemyBehavior for CountdownPlanter {
    fn name(&self) -> &'static str {
        "countdown_planter"
    }

    fn on_tick(&mut self, delta_ms: u64, board: &[Card], rng: &mut GameRng) -> TickEffect {
        let fired = self.interval.advance(delta_ms) as usize;
        if fired == 0 {
            return TickEffect::default();
        }
        let ms = self.countdown_ms;
        TickEffect {
            card_modifications: pick_cards(board, fired, rng, |c| c.modifiers.countdown_ms.is_none())
                .into_iter()
                .map(|c| c.clone().with_countdown(ms))
                .collect(),
            ..Default::default()
        }
    }

    fn on_round_end(&mut self) {
        self.interval.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemies::behaviors::testing::board;

    #[test]
    fn test_score_leech_period() {
        let mut rng = GameRng::new(1);
        let mut leech = ScoreLeech::new(10_000, 2);
        assert_eq!(leech.on_tick(9_999, &[], &mut rng).score_delta, 0);
        assert_eq!(leech.on_tick(1, &[], &mut rng).score_delta, -2);
        assert_eq!(leech.on_tick(20_000, &[], &mut rng).score_delta, -4);
    }

    #[test]
    fn test_attribute_shifter_changes_once_per_card() {
        let cards = board(3);
        let mut rng = GameRng::new(9);
        let mut shifter = AttributeShifter::new(1_000);

        let mut seen = FxHashSet::default();
        for _ in 0..3 {
            let effect = shifter.on_tick(1_000, &cards, &mut rng);
            assert_eq!(effect.card_modifications.len(), 1);
            let changed = &effect.card_modifications[0];
            let original = cards.iter().find(|c| c.id == changed.id).unwrap();
            assert_ne!(changed, original);
            assert!(seen.insert(changed.id));
        }
        // Every card already shifted.
        assert!(shifter.on_tick(1_000, &cards, &mut rng).is_empty());

        shifter.on_round_end();
        assert_eq!(shifter.on_tick(1_000, &cards, &mut rng).card_modifications.len(), 1);
    }

    #[test]
    fn test_bomb_fuse_detonates() {
        let mut cards = board(3);
        cards[0] = cards[0].clone().with_bomb(500);
        cards[1] = cards[1].clone().with_bomb(5_000);
        let mut rng = GameRng::new(1);

        let effect = BombFuse::new(1).on_tick(1_000, &cards, &mut rng);
        assert_eq!(effect.cards_to_remove, vec![CardId(0)]);
        assert_eq!(effect.health_delta, -1);
        assert_eq!(effect.card_modifications.len(), 1);
        assert_eq!(effect.card_modifications[0].modifiers.bomb_ms, Some(4_000));
    }

    #[test]
    fn test_countdown_curse_kills() {
        let mut cards = board(2);
        cards[1] = cards[1].clone().with_countdown(2_000);
        let mut rng = GameRng::new(1);
        let mut curse = CountdownCurse;

        let effect = curse.on_tick(1_500, &cards, &mut rng);
        assert!(!effect.instant_death);
        assert_eq!(effect.card_modifications[0].modifiers.countdown_ms, Some(500));

        cards[1] = effect.card_modifications[0].clone();
        assert!(curse.on_tick(500, &cards, &mut rng).instant_death);
    }

    #[test]
    fn test_arsonist_stamps_clock() {
        let cards = board(4);
        let mut rng = GameRng::new(1);
        let mut arsonist = Arsonist::new(5_000);
        assert!(arsonist.on_tick(3_000, &cards, &mut rng).is_empty());
        let effect = arsonist.on_tick(3_000, &cards, &mut rng);
        assert_eq!(effect.card_modifications.len(), 1);
        assert_eq!(effect.card_modifications[0].modifiers.on_fire_since_ms, Some(6_000));
    }

    #[test]
    fn test_flipper_only_face_up() {
        let mut cards = board(3);
        cards[0] = cards[0].clone().face_down();
        cards[1] = cards[1].clone().face_down();
        let mut rng = GameRng::new(1);
        let effect = Flipper::new(1_000, 3).on_tick(1_000, &cards, &mut rng);
        assert_eq!(effect.cards_to_flip, vec![CardId(2)]);
    }

    #[test]
    fn test_bomb_planter_arms_unbombed_card() {
        let mut cards = board(2);
        cards[0] = cards[0].clone().with_bomb(1_000);
        let mut rng = GameRng::new(3);
        let mut planter = BombPlanter::new(5_000, 20_000);

        assert!(planter.on_tick(4_999, &cards, &mut rng).is_empty());
        let effect = planter.on_tick(1, &cards, &mut rng);
        assert_eq!(effect.card_modifications.len(), 1);
        let armed = &effect.card_modifications[0];
        assert_eq!(armed.id, CardId(1));
        assert_eq!(armed.modifiers.bomb_ms, Some(20_000));

        cards[1] = armed.clone();
        assert!(planter.on_tick(5_000, &cards, &mut rng).is_empty());
    }

    #[test]
    fn test_resource_drains_scale_with_periods() {
        let mut rng = GameRng::new(1);
        let mut drain = TimeDrain::new(10_000, 1_500);
        assert!(drain.on_tick(9_000, &[], &mut rng).is_empty());
        assert_eq!(drain.on_tick(21_000, &[], &mut rng).time_delta_ms, -4_500);

        let mut hints = HintThief::new(20_000, 1);
        assert_eq!(hints.on_tick(40_000, &[], &mut rng).hints_delta, -2);
        let mut graces = GraceThief::new(20_000, 1);
        assert_eq!(graces.on_tick(19_999, &[], &mut rng).graces_delta, 0);
        assert_eq!(graces.on_tick(1, &[], &mut rng).graces_delta, -1);
    }

    #[test]
    fn test_shuffler_moves_each_card_once() {
        let cards = board(4);
        let mut rng = GameRng::new(6);
        let mut shuffler = Shuffler::new(1_000, 1);

        let first = shuffler.on_tick(1_000, &cards, &mut rng).swaps;
        let second = shuffler.on_tick(1_000, &cards, &mut rng).swaps;
        assert_eq!((first.len(), second.len()), (1, 1));
        let mut moved: Vec<CardId> = first
            .iter()
            .chain(&second)
            .flat_map(|&(a, b)| [a, b])
            .collect();
        moved.sort();
        assert_eq!(moved, vec![CardId(0), CardId(1), CardId(2), CardId(3)]);
        assert!(shuffler.on_tick(1_000, &cards, &mut rng).swaps.is_empty());

        shuffler.on_round_end();
        assert_eq!(shuffler.on_tick(1_000, &cards, &mut rng).swaps.len(), 1);
    }

    #[test]
    fn test_fire_spreads_to_one_neighbor() {
        // 3x3 board with the center burning.
        let mut cards = board(9);
        cards[4] = cards[4].clone().ignited_at(0);
        let mut rng = GameRng::new(2);
        let mut spreader = FireSpreader::new(4_000);

        assert!(spreader.on_tick(3_000, &cards, &mut rng).is_empty());
        let effect = spreader.on_tick(1_000, &cards, &mut rng);
        assert_eq!(effect.card_modifications.len(), 1);
        let caught = &effect.card_modifications[0];
        assert!([1, 3, 5, 7].contains(&caught.id.0));
        assert_eq!(caught.modifiers.on_fire_since_ms, Some(4_000));
    }

    #[test]
    fn test_countdown_planter_skips_ticking_cards() {
        let mut cards = board(2);
        cards[1] = cards[1].clone().with_countdown(3_000);
        let mut rng = GameRng::new(1);
        let effect = CountdownPlanter::new(1_000, 30_000).on_tick(2_000, &cards, &mut rng);
        assert_eq!(effect.card_modifications.len(), 1);
        assert_eq!(effect.card_modifications[0].id, CardId(0));
        assert_eq!(effect.card_modifications[0].modifiers.countdown_ms, Some(30_000));
    }
}
