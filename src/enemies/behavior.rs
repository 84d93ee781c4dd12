//! Enemy behavior contract.
//!
//! A behavior module is one small, self-contained rule ("drain a point
//! every ten seconds", "draw cards face down"). Every hook has a no-op
//! default, so a module implements only what it needs. An enemy composes
//! several modules and folds their outputs together.
//!
//! ## Folding
//!
//! - Numeric deltas add (`score_delta`, `health_delta`, `time_delta_ms`,
//!   `hints_delta`, `graces_delta`).
//! - Multipliers multiply (`points_multiplier`, `damage_multiplier`,
//!   `timer_speed`), so two 2x modules give 4x.
//! - Flags OR (`instant_death`).
//! - Card lists and swap lists concatenate. The round deduplicates when
//!   applying.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{CardId, GameRng};

/// Delta from a tick (and from round start).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickEffect {
    pub score_delta: i64,
    pub health_delta: i32,
    pub time_delta_ms: i64,
    pub hints_delta: i32,
    pub graces_delta: i32,
    pub instant_death: bool,
    pub cards_to_remove: Vec<CardId>,
    pub cards_to_flip: Vec<CardId>,
    /// Replacement cards, matched to the board by ID.
    pub card_modifications: Vec<Card>,
    /// Board positions to exchange, by the IDs occupying them.
    pub swaps: Vec<(CardId, CardId)>,
}

/// Round start produces the same shape of delta as a tick.
pub type RoundStartEffect = TickEffect;

impl TickEffect {
    /// Fold another module's output into this one.
    pub fn merge(&mut self, other: TickEffect) {
        self.score_delta += other.score_delta;
        self.health_delta += other.health_delta;
        self.time_delta_ms += other.time_delta_ms;
        self.hints_delta += other.hints_delta;
        self.graces_delta += other.graces_delta;
        self.instant_death |= other.instant_death;
        self.cards_to_remove.extend(other.cards_to_remove);
        self.cards_to_flip.extend(other.cards_to_flip);
        self.card_modifications.extend(other.card_modifications);
        self.swaps.extend(other.swaps);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Delta from a valid match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidMatchEffect {
    pub time_delta_ms: i64,
    pub points_multiplier: f64,
    pub cards_to_remove: Vec<CardId>,
    pub cards_to_flip: Vec<CardId>,
    /// Replacement cards for survivors of the match, matched by ID.
    pub card_modifications: Vec<Card>,
}

impl Default for ValidMatchEffect {
    fn default() -> Self {
        Self {
            time_delta_ms: 0,
            points_multiplier: 1.0,
            cards_to_remove: Vec::new(),
            cards_to_flip: Vec::new(),
            card_modifications: Vec::new(),
        }
    }
}

impl ValidMatchEffect {
    pub fn merge(&mut self, other: ValidMatchEffect) {
        self.time_delta_ms += other.time_delta_ms;
        self.points_multiplier *= other.points_multiplier;
        self.cards_to_remove.extend(other.cards_to_remove);
        self.cards_to_flip.extend(other.cards_to_flip);
        self.card_modifications.extend(other.card_modifications);
    }
}

/// Delta from an invalid match, on top of the grace or health cost.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidMatchEffect {
    pub score_delta: i64,
    pub time_delta_ms: i64,
    pub cards_to_remove: Vec<CardId>,
}

impl InvalidMatchEffect {
    pub fn merge(&mut self, other: InvalidMatchEffect) {
        self.score_delta += other.score_delta;
        self.time_delta_ms += other.time_delta_ms;
        self.cards_to_remove.extend(other.cards_to_remove);
    }
}

/// Static modifiers on player stats.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatModifiers {
    pub damage_multiplier: f64,
}

impl Default for StatModifiers {
    fn default() -> Self {
        Self {
            damage_multiplier: 1.0,
        }
    }
}

impl StatModifiers {
    pub fn merge(&mut self, other: StatModifiers) {
        self.damage_multiplier *= other.damage_multiplier;
    }
}

/// Modifiers on presentation-facing values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiModifiers {
    /// Round clock runs this many times faster than real time.
    pub timer_speed: f64,
}

impl Default for UiModifiers {
    fn default() -> Self {
        Self { timer_speed: 1.0 }
    }
}

impl UiModifiers {
    pub fn merge(&mut self, other: UiModifiers) {
        self.timer_speed *= other.timer_speed;
    }
}

/// One composable enemy rule.
///
/// Implementations own their private state (timers, remembered cards).
/// The composer never inspects it.
pub trait EnemyBehavior: Send {
    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    fn on_round_start(&mut self, _board: &[Card], _rng: &mut GameRng) -> RoundStartEffect {
        RoundStartEffect::default()
    }

    /// `delta_ms` is real time since the previous tick.
    fn on_tick(&mut self, _delta_ms: u64, _board: &[Card], _rng: &mut GameRng) -> TickEffect {
        TickEffect::default()
    }

    fn on_valid_match(
        &mut self,
        _matched: &[Card],
        _board: &[Card],
        _rng: &mut GameRng,
    ) -> ValidMatchEffect {
        ValidMatchEffect::default()
    }

    fn on_invalid_match(
        &mut self,
        _selected: &[Card],
        _board: &[Card],
        _rng: &mut GameRng,
    ) -> InvalidMatchEffect {
        InvalidMatchEffect::default()
    }

    /// Transform a freshly drawn card before it reaches the board.
    fn on_card_draw(&mut self, card: Card, _rng: &mut GameRng) -> Card {
        card
    }

    fn stat_modifiers(&self) -> StatModifiers {
        StatModifiers::default()
    }

    fn ui_modifiers(&self) -> UiModifiers {
        UiModifiers::default()
    }

    /// Release any per-round state. Called exactly once.
    fn on_round_end(&mut self) {}
}
