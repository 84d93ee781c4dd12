//! Records returned by round operations.
//!
//! Every call into [`Round`](super::Round) returns a full account of what
//! happened so a caller can animate it without diffing the board.

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::effects::WeaponEffectResult;
use crate::enemies::{TickEffect, ValidMatchEffect};
use crate::rules::Validation;
use crate::triggers::BridgeEffectResult;

use super::stats::RoundStats;

/// Round lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    NotStarted,
    Active,
    CompletedSuccess,
    CompletedFailure,
    /// Abandoned before completion. Neither success nor failure.
    Cancelled,
}

impl RoundPhase {
    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, RoundPhase::NotStarted | RoundPhase::Active)
    }
}

/// Final account of a completed round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub phase: RoundPhase,
    /// The enemy's defeat condition held on the final stats.
    pub enemy_defeated: bool,
    /// Round won and defeat condition met.
    pub bonus_reward: bool,
    pub score: i64,
    pub target_score: i64,
    pub health: u32,
    pub money: i64,
    pub xp: u32,
    pub coins: u32,
    pub stats: RoundStats,
}

/// What a round start did.
#[derive(Clone, Debug, PartialEq)]
pub struct StartOutcome {
    pub board: Vec<CardId>,
    pub enemy_effect: TickEffect,
    pub time_remaining_ms: u64,
}

/// What a tick did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickOutcome {
    pub enemy_effect: TickEffect,
    pub health_lost: u32,
    pub bridges: Vec<BridgeEffectResult>,
    pub completion: Option<RoundSummary>,
}

/// What a match attempt did.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchOutcome {
    pub validation: Validation,
    /// Base match points (after enemy multipliers) plus weapon bonus points.
    pub points_awarded: i64,
    /// Empty for invalid matches.
    pub weapon_effects: WeaponEffectResult,
    /// Default for invalid matches.
    pub enemy_effect: ValidMatchEffect,
    /// Cards the enemy removed in response.
    pub enemy_removed: Vec<CardId>,
    pub bridges: Vec<BridgeEffectResult>,
    pub grace_used: bool,
    pub health_lost: u32,
    /// Free hint from auto-hint equipment.
    pub auto_hint: Option<[CardId; 3]>,
    pub completion: Option<RoundSummary>,
}

/// What spending a hint did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HintOutcome {
    /// `None` when the board has no valid triple; no hint is spent.
    pub set: Option<[CardId; 3]>,
    pub bridges: Vec<BridgeEffectResult>,
}

/// What a burned-out card did.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BurnOutcome {
    pub points_awarded: i64,
    pub bridges: Vec<BridgeEffectResult>,
}
