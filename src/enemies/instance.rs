//! Composed enemy instances.
//!
//! An `EnemyInstance` owns its behavior modules and its defeat condition
//! for exactly one round. Every hook call is forwarded to each module in
//! order and the outputs are folded into one delta.

use std::fmt;

use tracing::debug;

use crate::cards::Card;
use crate::core::GameRng;
use crate::round::RoundStats;

use super::behavior::{
    EnemyBehavior, InvalidMatchEffect, RoundStartEffect, StatModifiers, TickEffect, UiModifiers,
    ValidMatchEffect,
};

/// Pure predicate over final round stats.
pub type DefeatCondition = Box<dyn Fn(&RoundStats) -> bool + Send>;

/// Lifecycle of an enemy instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyPhase {
    Constructed,
    Active,
    Ended,
}

/// An enemy assembled for one round.
pub struct EnemyInstance {
    pub name: String,
    pub tier: u8,
    pub effect_text: String,
    pub defeat_text: String,
    pub icon: String,
    behaviors: Vec<Box<dyn EnemyBehavior>>,
    defeat_condition: DefeatCondition,
    phase: EnemyPhase,
}

impl fmt::Debug for EnemyInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnemyInstance")
            .field("name", &self.name)
            .field("tier", &self.tier)
            .field("behaviors", &self.behavior_names())
            .field("phase", &self.phase)
            .finish()
    }
}

impl EnemyInstance {
    pub fn new(
        name: impl Into<String>,
        tier: u8,
        behaviors: Vec<Box<dyn EnemyBehavior>>,
        defeat_condition: DefeatCondition,
    ) -> Self {
        Self {
            name: name.into(),
            tier,
            effect_text: String::new(),
            defeat_text: String::new(),
            icon: String::new(),
            behaviors,
            defeat_condition,
            phase: EnemyPhase::Constructed,
        }
    }

    /// Set display text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, effect: impl Into<String>, defeat: impl Into<String>) -> Self {
        self.effect_text = effect.into();
        self.defeat_text = defeat.into();
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn phase(&self) -> EnemyPhase {
        self.phase
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == EnemyPhase::Active
    }

    pub fn behavior_names(&self) -> Vec<&'static str> {
        self.behaviors.iter().map(|b| b.name()).collect()
    }

    /// Activate and collect opening-board changes. Only the first call
    /// does anything.
    pub fn on_round_start(&mut self, board: &[Card], rng: &mut GameRng) -> RoundStartEffect {
        let mut total = RoundStartEffect::default();
        if self.phase != EnemyPhase::Constructed {
            return total;
        }
        self.phase = EnemyPhase::Active;
        for behavior in &mut self.behaviors {
            total.merge(behavior.on_round_start(board, rng));
        }
        debug!(enemy = %self.name, "enemy activated");
        total
    }

    pub fn on_tick(&mut self, delta_ms: u64, board: &[Card], rng: &mut GameRng) -> TickEffect {
        let mut total = TickEffect::default();
        if !self.is_active() {
            return total;
        }
        for behavior in &mut self.behaviors {
            total.merge(behavior.on_tick(delta_ms, board, rng));
        }
        total
    }

    pub fn on_valid_match(
        &mut self,
        matched: &[Card],
        board: &[Card],
        rng: &mut GameRng,
    ) -> ValidMatchEffect {
        let mut total = ValidMatchEffect::default();
        if !self.is_active() {
            return total;
        }
        for behavior in &mut self.behaviors {
            total.merge(behavior.on_valid_match(matched, board, rng));
        }
        total
    }

    pub fn on_invalid_match(
        &mut self,
        selected: &[Card],
        board: &[Card],
        rng: &mut GameRng,
    ) -> InvalidMatchEffect {
        let mut total = InvalidMatchEffect::default();
        if !self.is_active() {
            return total;
        }
        for behavior in &mut self.behaviors {
            total.merge(behavior.on_invalid_match(selected, board, rng));
        }
        total
    }

    /// Pass a drawn card through every module in order.
    pub fn on_card_draw(&mut self, card: Card, rng: &mut GameRng) -> Card {
        if self.phase == EnemyPhase::Ended {
            return card;
        }
        let mut card = card;
        for behavior in &mut self.behaviors {
            card = behavior.on_card_draw(card, rng);
        }
        card
    }

    #[must_use]
    pub fn stat_modifiers(&self) -> StatModifiers {
        let mut total = StatModifiers::default();
        for behavior in &self.behaviors {
            total.merge(behavior.stat_modifiers());
        }
        total
    }

    #[must_use]
    pub fn ui_modifiers(&self) -> UiModifiers {
        let mut total = UiModifiers::default();
        for behavior in &self.behaviors {
            total.merge(behavior.ui_modifiers());
        }
        total
    }

    /// Terminal transition. Returns false if the instance already ended.
    pub fn on_round_end(&mut self) -> bool {
        if self.phase == EnemyPhase::Ended {
            return false;
        }
        for behavior in &mut self.behaviors {
            behavior.on_round_end();
        }
        self.phase = EnemyPhase::Ended;
        debug!(enemy = %self.name, "enemy ended");
        true
    }

    /// Evaluate the defeat condition.
    #[must_use]
    pub fn is_defeated(&self, stats: &RoundStats) -> bool {
        (self.defeat_condition)(stats)
    }
}
