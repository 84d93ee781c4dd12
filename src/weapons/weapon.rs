//! Weapon definitions.
//!
//! A weapon is an immutable bag of additive stat effects plus an optional
//! special-effect tag. Owning N copies means N entries in the equipment
//! list; each copy contributes to aggregate stats and rolls its own
//! per-instance checks (lasers, bridges) independently.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::triggers::BridgePayload;

use super::caps::EffectKind;

/// Weapon rarity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Reward rarity for an enemy tier (1-4). Out-of-range tiers clamp.
    #[must_use]
    pub fn for_tier(tier: u8) -> Self {
        match tier {
            0 | 1 => Rarity::Common,
            2 => Rarity::Rare,
            3 => Rarity::Epic,
            _ => Rarity::Legendary,
        }
    }
}

/// Additive stats a weapon can contribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    ExplosionChance,
    FireChance,
    LaserChance,
    RicochetChance,
    /// Uncapped chance that a ricochet keeps bouncing.
    RicochetChainChance,
    EchoChance,
    /// Uncapped chance of a second echo.
    ChainReactionChance,
    HealChance,
    HintGainChance,
    TimeGainChance,
    GraceGainChance,
    BoardGrowthChance,
    CoinGainChance,
    XpGainChance,
    MaxHealth,
    StartingHints,
    StartingGraces,
    /// Extra seconds on the round clock.
    BonusTimeSecs,
}

impl StatKind {
    pub const COUNT: usize = 18;

    pub(crate) const fn slot(self) -> usize {
        self as usize
    }

    /// Accumulated chance stat feeding a capped effect kind.
    #[must_use]
    pub const fn chance_for(kind: EffectKind) -> StatKind {
        match kind {
            EffectKind::Explosion => StatKind::ExplosionChance,
            EffectKind::Fire => StatKind::FireChance,
            EffectKind::Laser => StatKind::LaserChance,
            EffectKind::Ricochet => StatKind::RicochetChance,
            EffectKind::Echo => StatKind::EchoChance,
            EffectKind::Heal => StatKind::HealChance,
            EffectKind::HintGain => StatKind::HintGainChance,
            EffectKind::TimeGain => StatKind::TimeGainChance,
            EffectKind::GraceGain => StatKind::GraceGainChance,
            EffectKind::BoardGrowth => StatKind::BoardGrowthChance,
            EffectKind::CoinGain => StatKind::CoinGainChance,
            EffectKind::XpGain => StatKind::XpGainChance,
        }
    }
}

/// One additive stat contribution.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatEffect {
    pub stat: StatKind,
    pub value: f64,
}

/// Special-effect tag. At most one per weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialEffect {
    Explosive,
    Fire,
    Laser,
    Ricochet,
    Echo,
    ChainReaction,
    AutoHint,
    Heal,
    GraceGain,
    HintGain,
    XpGain,
    CoinGain,
    TimeGain,
    BoardGrowth,
    CapIncrease,
    Bridge,
}

/// Raises one effect kind's ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapIncrease {
    pub kind: EffectKind,
    pub amount: f64,
}

/// A piece of equipment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    /// Stable identifier; doubles as the reward ID.
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub effects: SmallVec<[StatEffect; 2]>,
    pub special: Option<SpecialEffect>,
    pub cap_increase: Option<CapIncrease>,
    pub bridge: Option<BridgePayload>,
    /// Ownership ceiling. `None` = unlimited copies.
    pub max_owned: Option<u32>,
    /// Magnitude for time-gain (seconds) and board-growth (cards) weapons.
    pub amount: Option<u32>,
}

impl Weapon {
    pub fn new(id: impl Into<String>, name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rarity,
            effects: SmallVec::new(),
            special: None,
            cap_increase: None,
            bridge: None,
            max_owned: None,
            amount: None,
        }
    }

    /// Add a stat contribution (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, stat: StatKind, value: f64) -> Self {
        self.effects.push(StatEffect { stat, value });
        self
    }

    #[must_use]
    pub fn with_special(mut self, special: SpecialEffect) -> Self {
        self.special = Some(special);
        self
    }

    /// Attach a cap increase; also tags the weapon as `CapIncrease`.
    #[must_use]
    pub fn with_cap_increase(mut self, kind: EffectKind, amount: f64) -> Self {
        self.cap_increase = Some(CapIncrease { kind, amount });
        self.special = Some(SpecialEffect::CapIncrease);
        self
    }

    /// Attach a bridge payload; also tags the weapon as `Bridge`.
    #[must_use]
    pub fn with_bridge(mut self, payload: BridgePayload) -> Self {
        self.bridge = Some(payload);
        self.special = Some(SpecialEffect::Bridge);
        self
    }

    #[must_use]
    pub fn with_max_owned(mut self, max: u32) -> Self {
        self.max_owned = Some(max);
        self
    }

    #[must_use]
    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sum of this weapon's contributions to one stat.
    #[must_use]
    pub fn stat(&self, stat: StatKind) -> f64 {
        self.effects
            .iter()
            .filter(|e| e.stat == stat)
            .map(|e| e.value)
            .sum()
    }

    #[must_use]
    pub fn is_laser(&self) -> bool {
        self.special == Some(SpecialEffect::Laser)
    }

    /// How many copies of `id` are in an equipment list.
    #[must_use]
    pub fn count_owned(id: &str, owned: &[Weapon]) -> u32 {
        owned.iter().filter(|w| w.id == id).count() as u32
    }

    /// Whether another copy may be acquired given current equipment.
    #[must_use]
    pub fn under_ceiling(&self, owned: &[Weapon]) -> bool {
        self.max_owned
            .is_none_or(|max| Self::count_owned(&self.id, owned) < max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triggers::{BridgeEffectKind, BridgeTrigger};

    #[test]
    fn test_builder_and_stat_sum() {
        let weapon = Weapon::new("twin_fuse", "Twin Fuse", Rarity::Rare)
            .with_stat(StatKind::ExplosionChance, 10.0)
            .with_stat(StatKind::ExplosionChance, 5.0)
            .with_stat(StatKind::FireChance, 3.0)
            .with_special(SpecialEffect::Explosive);

        assert_eq!(weapon.stat(StatKind::ExplosionChance), 15.0);
        assert_eq!(weapon.stat(StatKind::FireChance), 3.0);
        assert_eq!(weapon.stat(StatKind::LaserChance), 0.0);
        assert_eq!(weapon.special, Some(SpecialEffect::Explosive));
    }

    #[test]
    fn test_cap_and_bridge_builders_tag_special() {
        let cap = Weapon::new("c", "C", Rarity::Epic).with_cap_increase(EffectKind::Fire, 10.0);
        assert_eq!(cap.special, Some(SpecialEffect::CapIncrease));

        let bridge = Weapon::new("b", "B", Rarity::Epic).with_bridge(BridgePayload::new(
            BridgeTrigger::Heal,
            50.0,
            BridgeEffectKind::GainCoin,
            2,
        ));
        assert_eq!(bridge.special, Some(SpecialEffect::Bridge));
    }

    #[test]
    fn test_ownership_ceiling() {
        let weapon = Weapon::new("one_off", "One Off", Rarity::Common).with_max_owned(2);
        let mut owned = vec![];
        assert!(weapon.under_ceiling(&owned));
        owned.push(weapon.clone());
        assert!(weapon.under_ceiling(&owned));
        owned.push(weapon.clone());
        assert!(!weapon.under_ceiling(&owned));

        let unlimited = Weapon::new("many", "Many", Rarity::Common);
        let owned = vec![unlimited.clone(); 10];
        assert!(unlimited.under_ceiling(&owned));
    }

    #[test]
    fn test_rarity_for_tier() {
        assert_eq!(Rarity::for_tier(1), Rarity::Common);
        assert_eq!(Rarity::for_tier(2), Rarity::Rare);
        assert_eq!(Rarity::for_tier(3), Rarity::Epic);
        assert_eq!(Rarity::for_tier(4), Rarity::Legendary);
        assert_eq!(Rarity::for_tier(9), Rarity::Legendary);
    }
}
