//! Round state machine.
//!
//! ```text
//! NotStarted --start--> Active --+--> CompletedSuccess
//!                                +--> CompletedFailure
//!                                +--> Cancelled
//! ```
//!
//! The round owns the authoritative board, deck, clock and player
//! resources. Events resolve to completion one at a time:
//!
//! - `tick`: advance the clock, run the enemy's tick hook
//! - `attempt_match`: validate, resolve weapons, fire bridges, run the
//!   enemy's match hook
//! - `use_hint` / `burn_card`: player resource and fire callbacks
//! - `end_early` / `cancel`: explicit exits
//!
//! On completion the enemy's `on_round_end` runs exactly once and its
//! defeat condition is read against the final stats.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::cards::{Card, Deck};
use crate::core::{CardId, CardIdGen, EngineConfig, EngineError, EngineResult, GameRng};
use crate::effects::{resolve_match, BoardView, WeaponEffectResult, EXPLOSION_REWARD, LASER_REWARD};
use crate::enemies::behaviors::pick_ids;
use crate::enemies::{EnemyInstance, TickEffect, ValidMatchEffect};
use crate::rules::{find_valid_set, validate, MatchTraits, Validation};
use crate::triggers::{BridgeEffectKind, BridgeEffectResult, BridgeIndex, BridgeTrigger};
use crate::weapons::{BaseStats, PlayerStats, SpecialEffect, Weapon};

use super::outcome::{
    BurnOutcome, HintOutcome, MatchOutcome, RoundPhase, RoundSummary, StartOutcome, TickOutcome,
};
use super::stats::RoundStats;

/// What the player brings into a round.
#[derive(Clone, Debug, PartialEq)]
pub struct Loadout {
    pub stats: PlayerStats,
    pub weapons: Vec<Weapon>,
    pub health: u32,
}

impl Loadout {
    /// Aggregate stats from base plus equipment; start at full health.
    #[must_use]
    pub fn new(base: &BaseStats, weapons: Vec<Weapon>) -> Self {
        let stats = PlayerStats::aggregate(base, &weapons);
        let health = stats.max_health();
        Self {
            stats,
            weapons,
            health,
        }
    }

    /// Carry over health from a previous round (builder pattern).
    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health.clamp(1, self.stats.max_health());
        self
    }
}

/// One round of play.
pub struct Round {
    config: EngineConfig,
    phase: RoundPhase,
    rng: GameRng,
    ids: CardIdGen,
    deck: Deck,
    board: Vec<Card>,
    board_target: usize,

    enemy: EnemyInstance,
    player_stats: PlayerStats,
    weapons: Vec<Weapon>,
    bridges: BridgeIndex,

    target_score: i64,
    score: i64,
    health: u32,
    max_health: u32,
    hints: u32,
    graces: u32,
    money: i64,
    xp: u32,
    coins: u32,

    elapsed_ms: u64,
    time_remaining_ms: u64,
    /// Sub-millisecond clock time not yet charged, in [0, 1).
    clock_carry: f64,
    stats: RoundStats,
    summary: Option<RoundSummary>,
}

impl Round {
    pub fn new(
        config: EngineConfig,
        enemy: EnemyInstance,
        loadout: Loadout,
        target_score: i64,
        seed: u64,
    ) -> Self {
        let Loadout {
            stats: player_stats,
            weapons,
            health,
        } = loadout;
        let bridges = BridgeIndex::build(&weapons);
        let hints = player_stats.starting_hints();
        let graces = player_stats.starting_graces();
        Self {
            board_target: config.initial_board_size.min(config.max_board_size),
            config,
            phase: RoundPhase::NotStarted,
            rng: GameRng::new(seed),
            ids: CardIdGen::new(),
            deck: Deck::default(),
            board: Vec::new(),
            enemy,
            max_health: player_stats.max_health(),
            player_stats,
            weapons,
            bridges,
            target_score,
            score: 0,
            health,
            hints,
            graces,
            money: 0,
            xp: 0,
            coins: 0,
            elapsed_ms: 0,
            time_remaining_ms: 0,
            clock_carry: 0.0,
            stats: RoundStats::new(target_score, hints, graces),
            summary: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn board(&self) -> &[Card] {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub fn target_score(&self) -> i64 {
        self.target_score
    }

    #[must_use]
    pub fn health(&self) -> u32 {
        self.health
    }

    #[must_use]
    pub fn hints(&self) -> u32 {
        self.hints
    }

    #[must_use]
    pub fn graces(&self) -> u32 {
        self.graces
    }

    #[must_use]
    pub fn money(&self) -> i64 {
        self.money
    }

    #[must_use]
    pub fn time_remaining_ms(&self) -> u64 {
        self.time_remaining_ms
    }

    #[must_use]
    pub fn stats(&self) -> &RoundStats {
        &self.stats
    }

    #[must_use]
    pub fn enemy(&self) -> &EnemyInstance {
        &self.enemy
    }

    #[must_use]
    pub fn summary(&self) -> Option<&RoundSummary> {
        self.summary.as_ref()
    }

    /// Live defeat-condition check, for progress display.
    #[must_use]
    pub fn enemy_defeated_so_far(&self) -> bool {
        self.enemy.is_defeated(&self.stats)
    }

    /// Swap in an explicit draw pile before `start` (top of deck last).
    #[must_use]
    pub fn with_deck(mut self, deck: Deck) -> Self {
        self.deck = deck;
        self
    }

    /// Start card IDs at `next` (builder pattern).
    #[must_use]
    pub fn with_ids(mut self, ids: CardIdGen) -> Self {
        self.ids = ids;
        self
    }

    // === Transitions ===

    /// Deal the board, reset stats and activate the enemy.
    pub fn start(&mut self) -> EngineResult<StartOutcome> {
        if self.phase != RoundPhase::NotStarted {
            return Err(EngineError::RoundNotActive(self.phase));
        }
        if self.deck.is_empty() {
            self.deck = Deck::generate(&self.config.active_attributes, &mut self.ids, &mut self.rng);
        }
        while self.board.len() < self.board_target {
            let Some(card) = self.draw_card() else {
                break;
            };
            self.board.push(card);
        }

        self.stats.reset(self.target_score, self.hints, self.graces);
        self.time_remaining_ms = self.config.round_duration_ms + self.player_stats.bonus_time_ms();
        self.clock_carry = 0.0;

        let enemy_effect = self.enemy.on_round_start(&self.board, &mut self.rng);
        self.apply_enemy_effect(&enemy_effect);
        self.phase = RoundPhase::Active;
        self.refresh_snapshot();

        info!(
            enemy = %self.enemy.name,
            target = self.target_score,
            board = self.board.len(),
            time_ms = self.time_remaining_ms,
            "round started"
        );
        Ok(StartOutcome {
            board: self.board.iter().map(|c| c.id).collect(),
            enemy_effect,
            time_remaining_ms: self.time_remaining_ms,
        })
    }

    /// Advance by `delta_ms` of real time.
    pub fn tick(&mut self, delta_ms: u64) -> EngineResult<TickOutcome> {
        self.require_active()?;

        let speed = self.enemy.ui_modifiers().timer_speed.max(0.0);
        let scaled_ms = delta_ms as f64 * speed + self.clock_carry;
        let clock_ms = scaled_ms.floor();
        self.clock_carry = scaled_ms - clock_ms;
        self.time_remaining_ms = self.time_remaining_ms.saturating_sub(clock_ms as u64);
        self.elapsed_ms += delta_ms;

        let enemy_effect = self.enemy.on_tick(delta_ms, &self.board, &mut self.rng);
        let health_lost = self.apply_enemy_effect(&enemy_effect);

        let mut bridges = Vec::new();
        if health_lost > 0 {
            self.fire_bridges(BridgeTrigger::HealthLost, false, &mut bridges);
        }

        let completion = if enemy_effect.instant_death {
            debug!(enemy = %self.enemy.name, "instant death");
            Some(self.complete(RoundPhase::CompletedFailure))
        } else {
            self.check_completion()
        };

        Ok(TickOutcome {
            enemy_effect,
            health_lost,
            bridges,
            completion,
        })
    }

    /// Try three cards as a match.
    pub fn attempt_match(&mut self, selected: [CardId; 3]) -> EngineResult<MatchOutcome> {
        self.require_active()?;
        for (i, id) in selected.iter().enumerate() {
            if selected[..i].contains(id) {
                return Err(EngineError::DuplicateSelection(*id));
            }
            if self.position(*id).is_none() {
                return Err(EngineError::CardNotOnBoard(*id));
            }
        }

        let cards: Vec<Card> = selected
            .iter()
            .filter_map(|id| self.position(*id).map(|pos| self.board[pos].clone()))
            .collect();
        let mut validation = validate([&cards[0], &cards[1], &cards[2]], &self.config.active_attributes);
        if cards.iter().any(|c| c.modifiers.dud) {
            validation.is_valid = false;
        }

        if validation.is_valid {
            Ok(self.resolve_valid(selected, &cards, validation))
        } else {
            Ok(self.resolve_invalid(&cards, validation))
        }
    }

    /// Spend a hint to reveal a valid triple.
    pub fn use_hint(&mut self) -> EngineResult<HintOutcome> {
        self.require_active()?;
        if self.hints == 0 {
            return Err(EngineError::NoHintsRemaining);
        }
        let Some(set) = find_valid_set(&self.board, &self.config.active_attributes, &FxHashSet::default())
        else {
            return Ok(HintOutcome::default());
        };

        self.hints -= 1;
        self.stats.record_hint_used();
        let mut bridges = Vec::new();
        self.fire_bridges(BridgeTrigger::HintUsed, false, &mut bridges);
        self.refresh_snapshot();

        Ok(HintOutcome {
            set: Some(set),
            bridges,
        })
    }

    /// A burning card has finished burning.
    pub fn burn_card(&mut self, id: CardId) -> EngineResult<BurnOutcome> {
        self.require_active()?;
        let pos = self.position(id).ok_or(EngineError::CardNotOnBoard(id))?;
        if !self.board[pos].is_on_fire() {
            return Err(EngineError::CardNotBurning(id));
        }

        let points = self.config.burn_points;
        self.score += points;
        self.clear_cards(&[id]);

        let mut bridges = Vec::new();
        self.fire_bridges(BridgeTrigger::AnyDestruction, false, &mut bridges);
        self.refresh_snapshot();

        Ok(BurnOutcome {
            points_awarded: points,
            bridges,
        })
    }

    /// End the round now. Only allowed once the target is reached.
    pub fn end_early(&mut self) -> EngineResult<RoundSummary> {
        self.require_active()?;
        if self.score < self.target_score {
            return Err(EngineError::EarlyEndNotAllowed {
                score: self.score,
                target: self.target_score,
            });
        }
        Ok(self.complete(RoundPhase::CompletedSuccess))
    }

    /// Abandon the round. Releases enemy state without a result.
    ///
    /// Returns false if the round had already finished.
    pub fn cancel(&mut self) -> bool {
        if self.phase.is_finished() {
            return false;
        }
        self.enemy.on_round_end();
        self.phase = RoundPhase::Cancelled;
        info!(enemy = %self.enemy.name, score = self.score, "round cancelled");
        true
    }

    // === Match resolution ===

    fn resolve_valid(
        &mut self,
        selected: [CardId; 3],
        cards: &[Card],
        validation: Validation,
    ) -> MatchOutcome {
        let active = &self.config.active_attributes;
        let traits = MatchTraits::of([&cards[0], &cards[1], &cards[2]], active);
        self.stats.record_valid_match(traits, self.elapsed_ms);

        let effects = resolve_match(
            &self.board,
            selected,
            &self.player_stats,
            &self.weapons,
            active,
            false,
            &mut self.rng,
        );
        self.apply_weapon_effects(cards, &effects);

        let mut bridges = Vec::new();
        for trigger in effects.triggered_events() {
            self.fire_bridges(trigger, false, &mut bridges);
        }

        let enemy_effect = self.enemy.on_valid_match(cards, &self.board, &mut self.rng);
        let multiplier = enemy_effect.points_multiplier;
        let holographic = if cards.iter().any(|c| c.modifiers.holographic) {
            2.0
        } else {
            1.0
        };
        let base = scaled(self.config.match_points, multiplier * holographic);
        let echoes = scaled(self.config.match_points, multiplier)
            * effects.auto_matched_sets.len() as i64;
        let points = base + echoes + effects.bonus_points;
        self.score += points;

        self.shift_time(enemy_effect.time_delta_ms);
        for card in &enemy_effect.card_modifications {
            self.replace_card(card.clone());
        }
        self.flip_cards(&enemy_effect.cards_to_flip);
        let enemy_removed = self.discard_cards(&enemy_effect.cards_to_remove);

        let auto_hint = if self
            .weapons
            .iter()
            .any(|w| w.special == Some(SpecialEffect::AutoHint))
        {
            find_valid_set(&self.board, &self.config.active_attributes, &FxHashSet::default())
        } else {
            None
        };

        debug!(
            points,
            destroyed = effects.destroyed_count(),
            echoes = effects.auto_matched_sets.len(),
            bridges = bridges.len(),
            "valid match"
        );
        let completion = self.check_completion();
        MatchOutcome {
            validation,
            points_awarded: points,
            weapon_effects: effects,
            enemy_effect,
            enemy_removed,
            bridges,
            grace_used: false,
            health_lost: 0,
            auto_hint,
            completion,
        }
    }

    fn resolve_invalid(&mut self, cards: &[Card], validation: Validation) -> MatchOutcome {
        self.stats.record_invalid_match();
        let enemy_effect = self.enemy.on_invalid_match(cards, &self.board, &mut self.rng);

        let mut bridges = Vec::new();
        let mut grace_used = false;
        let mut health_lost = 0;
        if self.graces > 0 {
            self.graces -= 1;
            self.stats.record_grace_used();
            grace_used = true;
            self.fire_bridges(BridgeTrigger::GraceUsed, false, &mut bridges);
        } else {
            let multiplier = self.enemy.stat_modifiers().damage_multiplier;
            let damage = (f64::from(self.config.invalid_match_damage) * multiplier).ceil() as u32;
            health_lost = self.lose_health(damage);
            if health_lost > 0 {
                self.fire_bridges(BridgeTrigger::HealthLost, false, &mut bridges);
            }
        }
        self.score = (self.score + enemy_effect.score_delta).max(0);
        self.shift_time(enemy_effect.time_delta_ms);
        let enemy_removed = self.discard_cards(&enemy_effect.cards_to_remove);

        debug!(
            invalid = ?validation.invalid_attributes,
            grace_used,
            health_lost,
            "invalid match"
        );
        let completion = self.check_completion();
        MatchOutcome {
            validation,
            points_awarded: 0,
            weapon_effects: WeaponEffectResult::default(),
            enemy_effect: ValidMatchEffect::default(),
            enemy_removed,
            bridges,
            grace_used,
            health_lost,
            auto_hint: None,
            completion,
        }
    }

    /// Apply everything in a weapon result except points, which the caller
    /// combines with the enemy multiplier.
    fn apply_weapon_effects(&mut self, matched: &[Card], effects: &WeaponEffectResult) {
        self.money += effects.bonus_money;
        self.heal(effects.healing);
        self.hints += effects.hints_gained;
        self.graces += effects.graces_gained;
        self.xp += effects.xp_gained;
        self.coins += effects.coins_gained;
        self.time_remaining_ms += u64::from(effects.time_gained_secs) * 1_000;

        // Armored cards absorb the hit and stay.
        let mut cleared: Vec<CardId> = Vec::new();
        for card in matched {
            if card.modifiers.health > 1 {
                let mut hit = card.clone();
                hit.modifiers.health -= 1;
                self.replace_card(hit);
            } else {
                cleared.push(card.id);
            }
        }
        cleared.extend(effects.echoed());
        cleared.extend(effects.destroyed());
        self.clear_cards(&cleared);

        let now = self.elapsed_ms;
        for &id in &effects.ignited {
            if let Some(pos) = self.position(id) {
                self.board[pos] = self.board[pos].clone().ignited_at(now);
            }
        }
        self.grow_board(effects.board_growth);
    }

    // === Bridges ===

    /// Roll bridges for `trigger` and apply each one that fires. Anything a
    /// bridge causes is resolved as a cascade, which never fires further.
    fn fire_bridges(
        &mut self,
        trigger: BridgeTrigger,
        is_cascade: bool,
        fired: &mut Vec<BridgeEffectResult>,
    ) {
        let results = self
            .bridges
            .resolve(trigger, &self.weapons, is_cascade, &mut self.rng);
        for result in results {
            let follow_ups = self.apply_bridge(&result);
            fired.push(result);
            for follow_up in follow_ups {
                self.fire_bridges(follow_up, true, fired);
            }
        }
    }

    /// Apply one bridge result; returns the triggers it would raise.
    fn apply_bridge(&mut self, result: &BridgeEffectResult) -> SmallVec<[BridgeTrigger; 2]> {
        let amount = result.magnitude;
        let count = amount as usize;
        let mut raised = SmallVec::new();
        match result.effect {
            BridgeEffectKind::MakeHolographic => {
                let ids = pick_ids(&self.board, count, &mut self.rng, |c| !c.modifiers.holographic);
                for id in ids {
                    if let Some(pos) = self.position(id) {
                        self.board[pos] = self.board[pos].clone().holographic();
                    }
                }
            }
            BridgeEffectKind::GainGrace => self.graces += amount,
            BridgeEffectKind::GainHint => self.hints += amount,
            BridgeEffectKind::GainCoin => {
                self.coins += amount;
                raised.push(BridgeTrigger::CoinGained);
            }
            BridgeEffectKind::Heal => {
                if self.heal(amount) > 0 {
                    raised.push(BridgeTrigger::Heal);
                }
            }
            BridgeEffectKind::IgniteCard => {
                let now = self.elapsed_ms;
                let ids = pick_ids(&self.board, count, &mut self.rng, |c| !c.is_on_fire());
                for id in ids {
                    if let Some(pos) = self.position(id) {
                        self.board[pos] = self.board[pos].clone().ignited_at(now);
                    }
                }
            }
            BridgeEffectKind::TriggerEcho => {
                let active = &self.config.active_attributes;
                if let Some(set) = find_valid_set(&self.board, active, &FxHashSet::default()) {
                    self.score += self.config.match_points;
                    self.clear_cards(&set);
                    raised.push(BridgeTrigger::Echo);
                }
            }
            BridgeEffectKind::FireLaser => {
                for _ in 0..count {
                    if self.board.is_empty() {
                        break;
                    }
                    let anchor = self.rng.gen_range_usize(0..self.board.len());
                    let targets = BoardView::new(&self.board).laser_line(anchor, &mut self.rng);
                    self.award_destruction(&targets, LASER_REWARD);
                }
                raised.push(BridgeTrigger::AnyDestruction);
            }
            BridgeEffectKind::TriggerExplosion => {
                let anchors: Vec<usize> = pick_ids(&self.board, count, &mut self.rng, |_| true)
                    .into_iter()
                    .filter_map(|id| self.position(id))
                    .collect();
                let view = BoardView::new(&self.board);
                let targets: Vec<CardId> = view
                    .adjacent_to(&anchors)
                    .into_iter()
                    .map(|pos| view.id_at(pos))
                    .collect();
                if !targets.is_empty() {
                    self.award_destruction(&targets, EXPLOSION_REWARD);
                    raised.push(BridgeTrigger::Explosion);
                    raised.push(BridgeTrigger::AnyDestruction);
                }
            }
        }
        raised
    }

    fn award_destruction(&mut self, ids: &[CardId], reward: (i64, i64)) {
        let n = ids.len() as i64;
        self.score += reward.0 * n;
        self.money += reward.1 * n;
        self.clear_cards(ids);
    }

    // === Enemy deltas ===

    /// Apply a tick-shaped enemy delta; returns health actually lost.
    fn apply_enemy_effect(&mut self, effect: &TickEffect) -> u32 {
        self.score = (self.score + effect.score_delta).max(0);
        let mut lost = 0;
        if effect.health_delta < 0 {
            lost = self.lose_health(effect.health_delta.unsigned_abs());
        } else if effect.health_delta > 0 {
            self.heal(effect.health_delta as u32);
        }
        self.shift_time(effect.time_delta_ms);
        self.hints = self.hints.saturating_add_signed(effect.hints_delta);
        self.graces = self.graces.saturating_add_signed(effect.graces_delta);
        for card in &effect.card_modifications {
            self.replace_card(card.clone());
        }
        for &(a, b) in &effect.swaps {
            if let (Some(i), Some(j)) = (self.position(a), self.position(b)) {
                self.board.swap(i, j);
            }
        }
        self.flip_cards(&effect.cards_to_flip);
        self.discard_cards(&effect.cards_to_remove);
        lost
    }

    fn shift_time(&mut self, delta_ms: i64) {
        self.time_remaining_ms = if delta_ms < 0 {
            self.time_remaining_ms.saturating_sub(delta_ms.unsigned_abs())
        } else {
            self.time_remaining_ms.saturating_add(delta_ms as u64)
        };
    }

    // === Board plumbing ===

    fn position(&self, id: CardId) -> Option<usize> {
        self.board.iter().position(|c| c.id == id)
    }

    /// Draw through the enemy's draw hook, regenerating an empty deck.
    fn draw_card(&mut self) -> Option<Card> {
        if self.deck.is_empty() {
            self.deck = Deck::generate(&self.config.active_attributes, &mut self.ids, &mut self.rng);
            debug!(cards = self.deck.len(), "deck exhausted, generated a fresh one");
        }
        let card = self.deck.draw()?;
        Some(self.enemy.on_card_draw(card, &mut self.rng))
    }

    /// Remove cards the player (or their equipment) cleared, tally them and
    /// refill each slot in place.
    fn clear_cards(&mut self, ids: &[CardId]) {
        let mut cleared = Vec::with_capacity(ids.len());
        for &id in ids {
            let Some(pos) = self.position(id) else {
                continue;
            };
            cleared.push(self.board[pos].clone());
            match self.draw_card() {
                Some(card) => self.board[pos] = card,
                None => {
                    self.board.remove(pos);
                }
            }
        }
        self.stats.record_cards_cleared(&cleared);
    }

    /// Remove cards the enemy took. No refill and no tally.
    fn discard_cards(&mut self, ids: &[CardId]) -> Vec<CardId> {
        let mut removed = Vec::new();
        self.board.retain(|c| {
            let gone = ids.contains(&c.id);
            if gone {
                removed.push(c.id);
            }
            !gone
        });
        removed
    }

    fn flip_cards(&mut self, ids: &[CardId]) {
        for &id in ids {
            if let Some(pos) = self.position(id) {
                let card = &mut self.board[pos];
                card.modifiers.face_down = !card.modifiers.face_down;
            }
        }
    }

    fn replace_card(&mut self, card: Card) {
        if let Some(pos) = self.position(card.id) {
            self.board[pos] = card;
        }
    }

    fn grow_board(&mut self, growth: u32) {
        if growth == 0 {
            return;
        }
        self.board_target = (self.board_target + growth as usize).min(self.config.max_board_size);
        while self.board.len() < self.board_target {
            let Some(card) = self.draw_card() else {
                break;
            };
            self.board.push(card);
        }
    }

    // === Player resources ===

    fn heal(&mut self, amount: u32) -> u32 {
        let before = self.health;
        self.health = (self.health + amount).min(self.max_health);
        self.health - before
    }

    fn lose_health(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.health);
        self.health -= lost;
        lost
    }

    // === Completion ===

    fn require_active(&self) -> EngineResult<()> {
        if self.phase == RoundPhase::Active {
            Ok(())
        } else {
            Err(EngineError::RoundNotActive(self.phase))
        }
    }

    fn refresh_snapshot(&mut self) {
        self.stats.update_snapshot(
            self.score,
            self.time_remaining_ms,
            self.board.len(),
            self.hints,
            self.graces,
        );
    }

    fn check_completion(&mut self) -> Option<RoundSummary> {
        if self.health == 0 {
            return Some(self.complete(RoundPhase::CompletedFailure));
        }
        if self.time_remaining_ms == 0 {
            let phase = if self.score >= self.target_score {
                RoundPhase::CompletedSuccess
            } else {
                RoundPhase::CompletedFailure
            };
            return Some(self.complete(phase));
        }
        self.refresh_snapshot();
        None
    }

    fn complete(&mut self, phase: RoundPhase) -> RoundSummary {
        self.refresh_snapshot();
        self.enemy.on_round_end();
        self.phase = phase;

        let enemy_defeated = self.enemy.is_defeated(&self.stats);
        let summary = RoundSummary {
            phase,
            enemy_defeated,
            bonus_reward: phase == RoundPhase::CompletedSuccess && enemy_defeated,
            score: self.score,
            target_score: self.target_score,
            health: self.health,
            money: self.money,
            xp: self.xp,
            coins: self.coins,
            stats: self.stats.clone(),
        };
        info!(
            enemy = %self.enemy.name,
            ?phase,
            score = self.score,
            target = self.target_score,
            enemy_defeated,
            "round complete"
        );
        self.summary = Some(summary.clone());
        summary
    }
}

fn scaled(points: i64, multiplier: f64) -> i64 {
    (points as f64 * multiplier).round() as i64
}
