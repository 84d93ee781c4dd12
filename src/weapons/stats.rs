//! Aggregate player stats.
//!
//! `PlayerStats` is derived, never stored: base stats plus every owned
//! weapon's additive contributions, with cap-increase weapons folded into
//! the per-kind caps. Recompute it whenever equipment changes.

use serde::{Deserialize, Serialize};

use super::caps::{EffectCaps, EffectKind};
use super::weapon::{SpecialEffect, StatKind, Weapon};

/// Baseline stats before equipment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseStats {
    pub max_health: u32,
    pub hints: u32,
    pub graces: u32,
    pub caps: EffectCaps,
    /// Seconds granted by a time-gain roll when no weapon specifies more.
    pub time_gain_secs: u32,
    /// Cards added by a board-growth roll when no weapon specifies more.
    pub board_growth: u32,
}

impl Default for BaseStats {
    fn default() -> Self {
        Self {
            max_health: 3,
            hints: 1,
            graces: 1,
            caps: EffectCaps::default(),
            time_gain_secs: 5,
            board_growth: 1,
        }
    }
}

/// Base stats plus every equipped weapon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    values: [f64; StatKind::COUNT],
    pub caps: EffectCaps,
    pub time_gain_secs: u32,
    pub board_growth: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::aggregate(&BaseStats::default(), &[])
    }
}

impl PlayerStats {
    /// Sum base stats and equipment.
    #[must_use]
    pub fn aggregate(base: &BaseStats, weapons: &[Weapon]) -> Self {
        let mut stats = Self {
            values: [0.0; StatKind::COUNT],
            caps: base.caps.clone(),
            time_gain_secs: base.time_gain_secs,
            board_growth: base.board_growth,
        };
        stats.values[StatKind::MaxHealth.slot()] = f64::from(base.max_health);
        stats.values[StatKind::StartingHints.slot()] = f64::from(base.hints);
        stats.values[StatKind::StartingGraces.slot()] = f64::from(base.graces);

        for weapon in weapons {
            for effect in &weapon.effects {
                stats.values[effect.stat.slot()] += effect.value;
            }
            if let Some(cap) = weapon.cap_increase {
                stats.caps.raise(cap.kind, cap.amount);
            }
            match (weapon.special, weapon.amount) {
                (Some(SpecialEffect::TimeGain), Some(secs)) => {
                    stats.time_gain_secs = stats.time_gain_secs.max(secs);
                }
                (Some(SpecialEffect::BoardGrowth), Some(cards)) => {
                    stats.board_growth = stats.board_growth.max(cards);
                }
                _ => {}
            }
        }
        stats
    }

    /// Accumulated (unclamped) value of a stat.
    #[must_use]
    pub fn get(&self, stat: StatKind) -> f64 {
        self.values[stat.slot()]
    }

    /// Probability to roll for a capped effect kind.
    #[must_use]
    pub fn effective(&self, kind: EffectKind) -> f64 {
        self.caps.clamp(kind, self.get(StatKind::chance_for(kind)))
    }

    /// Override a stat (builder pattern). Handy for harnesses and tests.
    #[must_use]
    pub fn with_stat(mut self, stat: StatKind, value: f64) -> Self {
        self.values[stat.slot()] = value;
        self
    }

    /// Override every cap (builder pattern).
    #[must_use]
    pub fn with_caps(mut self, caps: EffectCaps) -> Self {
        self.caps = caps;
        self
    }

    #[must_use]
    pub fn max_health(&self) -> u32 {
        self.get(StatKind::MaxHealth).max(1.0) as u32
    }

    #[must_use]
    pub fn starting_hints(&self) -> u32 {
        self.get(StatKind::StartingHints).max(0.0) as u32
    }

    #[must_use]
    pub fn starting_graces(&self) -> u32 {
        self.get(StatKind::StartingGraces).max(0.0) as u32
    }

    #[must_use]
    pub fn bonus_time_ms(&self) -> u64 {
        (self.get(StatKind::BonusTimeSecs).max(0.0) * 1000.0) as u64
    }
}
