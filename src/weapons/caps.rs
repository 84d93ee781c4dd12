//! Effect caps.
//!
//! Every probabilistic effect kind has a ceiling. The probability actually
//! rolled is `min(accumulated, cap)`: stacking raw chance past the cap is
//! wasted until a cap-increase weapon raises the ceiling. Cap increases
//! touch only the ceiling, never the accumulated value.

use serde::{Deserialize, Serialize};

/// Probabilistic effect kinds that carry a cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    Explosion,
    Fire,
    Laser,
    Ricochet,
    Echo,
    Heal,
    HintGain,
    TimeGain,
    GraceGain,
    BoardGrowth,
    CoinGain,
    XpGain,
}

impl EffectKind {
    pub const COUNT: usize = 12;

    pub const ALL: [EffectKind; Self::COUNT] = [
        EffectKind::Explosion,
        EffectKind::Fire,
        EffectKind::Laser,
        EffectKind::Ricochet,
        EffectKind::Echo,
        EffectKind::Heal,
        EffectKind::HintGain,
        EffectKind::TimeGain,
        EffectKind::GraceGain,
        EffectKind::BoardGrowth,
        EffectKind::CoinGain,
        EffectKind::XpGain,
    ];

    const fn slot(self) -> usize {
        self as usize
    }
}

/// Effective probability for a roll: the accumulated value clamped to the cap.
#[must_use]
pub fn effective_probability(accumulated: f64, cap: f64) -> f64 {
    if accumulated >= cap {
        cap
    } else {
        accumulated
    }
}

/// Per-kind ceilings, in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectCaps {
    caps: [f64; EffectKind::COUNT],
}

impl Default for EffectCaps {
    /// Standard ceilings. Coin and XP gain sit far above 100 because their
    /// integer part is granted outright.
    fn default() -> Self {
        let mut caps = Self {
            caps: [0.0; EffectKind::COUNT],
        };
        caps.set(EffectKind::Explosion, 30.0);
        caps.set(EffectKind::Fire, 30.0);
        caps.set(EffectKind::Laser, 25.0);
        caps.set(EffectKind::Ricochet, 30.0);
        caps.set(EffectKind::Echo, 25.0);
        caps.set(EffectKind::Heal, 20.0);
        caps.set(EffectKind::HintGain, 20.0);
        caps.set(EffectKind::TimeGain, 25.0);
        caps.set(EffectKind::GraceGain, 15.0);
        caps.set(EffectKind::BoardGrowth, 20.0);
        caps.set(EffectKind::CoinGain, 500.0);
        caps.set(EffectKind::XpGain, 500.0);
        caps
    }
}

impl EffectCaps {
    /// Every cap at the same value.
    #[must_use]
    pub fn uniform(cap: f64) -> Self {
        Self {
            caps: [cap; EffectKind::COUNT],
        }
    }

    #[must_use]
    pub fn get(&self, kind: EffectKind) -> f64 {
        self.caps[kind.slot()]
    }

    pub fn set(&mut self, kind: EffectKind, cap: f64) {
        self.caps[kind.slot()] = cap;
    }

    /// Raise a ceiling additively.
    pub fn raise(&mut self, kind: EffectKind, amount: f64) {
        self.caps[kind.slot()] += amount;
    }

    /// Clamp an accumulated value against this kind's cap.
    #[must_use]
    pub fn clamp(&self, kind: EffectKind, accumulated: f64) -> f64 {
        effective_probability(accumulated, self.get(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_probability_clamps() {
        assert_eq!(effective_probability(45.0, 30.0), 30.0);
        assert_eq!(effective_probability(30.0, 30.0), 30.0);
        assert_eq!(effective_probability(12.5, 30.0), 12.5);
    }

    #[test]
    fn test_raise_is_additive() {
        let mut caps = EffectCaps::default();
        let before = caps.get(EffectKind::Explosion);
        caps.raise(EffectKind::Explosion, 10.0);
        caps.raise(EffectKind::Explosion, 5.0);
        assert_eq!(caps.get(EffectKind::Explosion), before + 15.0);
        assert_eq!(caps.get(EffectKind::Fire), EffectCaps::default().get(EffectKind::Fire));
    }

    #[test]
    fn test_clamp_uses_kind_cap() {
        let caps = EffectCaps::default();
        assert_eq!(caps.clamp(EffectKind::GraceGain, 50.0), 15.0);
        assert_eq!(caps.clamp(EffectKind::XpGain, 250.0), 250.0);
    }

    #[test]
    fn test_every_kind_has_distinct_slot() {
        let mut caps = EffectCaps::uniform(0.0);
        for (i, kind) in EffectKind::ALL.iter().enumerate() {
            caps.set(*kind, i as f64);
        }
        for (i, kind) in EffectKind::ALL.iter().enumerate() {
            assert_eq!(caps.get(*kind), i as f64);
        }
    }
}
