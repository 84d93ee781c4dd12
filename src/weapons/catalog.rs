//! Weapon catalog and reward selection.
//!
//! The catalog holds every weapon a run can offer. Reward selection never
//! fails: when the requested rarity has nothing eligible it relaxes the
//! filter step by step and finally hands out a fixed default.

use rustc_hash::FxHashMap;
use tracing::warn;

use crate::core::GameRng;
use crate::triggers::{BridgeEffectKind, BridgePayload, BridgeTrigger};

use super::caps::EffectKind;
use super::weapon::{Rarity, SpecialEffect, StatKind, Weapon};

/// ID of the weapon handed out when every pool is exhausted.
pub const DEFAULT_REWARD_ID: &str = "rusty_dagger";

/// Registry of offerable weapons.
#[derive(Clone, Debug, Default)]
pub struct WeaponCatalog {
    weapons: Vec<Weapon>,
    by_id: FxHashMap<String, usize>,
}

impl WeaponCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a weapon.
    ///
    /// Panics if a weapon with the same ID already exists.
    pub fn register(&mut self, weapon: Weapon) {
        if self.by_id.contains_key(&weapon.id) {
            panic!("Weapon {:?} already registered", weapon.id);
        }
        self.by_id.insert(weapon.id.clone(), self.weapons.len());
        self.weapons.push(weapon);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Weapon> {
        self.by_id.get(id).map(|&i| &self.weapons[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Iterate in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Weapon> {
        self.weapons.iter()
    }

    /// Pick a reward of the given rarity.
    ///
    /// Filter chain: rarity under ownership ceiling, then rarity ignoring
    /// the ceiling, then the common pool, then [`default_reward`]. IDs in
    /// `excluded` are skipped at every step.
    pub fn pick_reward(
        &self,
        rarity: Rarity,
        owned: &[Weapon],
        excluded: &[String],
        rng: &mut GameRng,
    ) -> Weapon {
        let allowed = |w: &&Weapon| !excluded.iter().any(|id| *id == w.id);

        let strict: Vec<&Weapon> = self
            .weapons
            .iter()
            .filter(allowed)
            .filter(|w| w.rarity == rarity && w.under_ceiling(owned))
            .collect();
        if let Some(weapon) = rng.choose(&strict) {
            return (*weapon).clone();
        }

        let relaxed: Vec<&Weapon> = self
            .weapons
            .iter()
            .filter(allowed)
            .filter(|w| w.rarity == rarity)
            .collect();
        if let Some(weapon) = rng.choose(&relaxed) {
            warn!(?rarity, id = %weapon.id, "reward pool exhausted by ownership ceilings");
            return (*weapon).clone();
        }

        let common: Vec<&Weapon> = self
            .weapons
            .iter()
            .filter(allowed)
            .filter(|w| w.rarity == Rarity::Common)
            .collect();
        if let Some(weapon) = rng.choose(&common) {
            warn!(?rarity, id = %weapon.id, "no reward of requested rarity, using common pool");
            return (*weapon).clone();
        }

        warn!(?rarity, "every reward pool empty, using default reward");
        default_reward()
    }

    /// The standard weapon set.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for weapon in builtin_weapons() {
            catalog.register(weapon);
        }
        catalog
    }
}

/// Fallback reward when every pool is empty.
#[must_use]
pub fn default_reward() -> Weapon {
    Weapon::new(DEFAULT_REWARD_ID, "Rusty Dagger", Rarity::Common)
}

fn builtin_weapons() -> Vec<Weapon> {
    use Rarity::*;
    use StatKind::*;

    vec![
        // Common
        Weapon::new("spark_charm", "Spark Charm", Common)
            .with_stat(ExplosionChance, 8.0)
            .with_special(SpecialEffect::Explosive),
        Weapon::new("ember_ring", "Ember Ring", Common)
            .with_stat(FireChance, 8.0)
            .with_special(SpecialEffect::Fire),
        Weapon::new("bouncing_pebble", "Bouncing Pebble", Common)
            .with_stat(RicochetChance, 10.0)
            .with_stat(RicochetChainChance, 20.0)
            .with_special(SpecialEffect::Ricochet),
        Weapon::new("healing_herb", "Healing Herb", Common)
            .with_stat(HealChance, 8.0)
            .with_special(SpecialEffect::Heal),
        Weapon::new("lucky_coin", "Lucky Coin", Common)
            .with_stat(CoinGainChance, 40.0)
            .with_special(SpecialEffect::CoinGain),
        Weapon::new("study_notes", "Study Notes", Common)
            .with_stat(XpGainChance, 50.0)
            .with_special(SpecialEffect::XpGain),
        Weapon::new("pocket_watch", "Pocket Watch", Common)
            .with_stat(TimeGainChance, 8.0)
            .with_special(SpecialEffect::TimeGain)
            .with_amount(3),
        Weapon::new("leather_vest", "Leather Vest", Common)
            .with_stat(MaxHealth, 1.0)
            .with_max_owned(3),
        // Rare
        Weapon::new("focusing_lens", "Focusing Lens", Rare)
            .with_stat(LaserChance, 10.0)
            .with_special(SpecialEffect::Laser)
            .with_max_owned(4),
        Weapon::new("echo_bell", "Echo Bell", Rare)
            .with_stat(EchoChance, 10.0)
            .with_special(SpecialEffect::Echo),
        Weapon::new("hint_scroll", "Hint Scroll", Rare)
            .with_stat(HintGainChance, 10.0)
            .with_special(SpecialEffect::HintGain),
        Weapon::new("guardian_feather", "Guardian Feather", Rare)
            .with_stat(GraceGainChance, 8.0)
            .with_special(SpecialEffect::GraceGain),
        Weapon::new("seed_pouch", "Seed Pouch", Rare)
            .with_stat(BoardGrowthChance, 10.0)
            .with_special(SpecialEffect::BoardGrowth)
            .with_amount(1),
        Weapon::new("oracle_eye", "Oracle Eye", Rare)
            .with_special(SpecialEffect::AutoHint)
            .with_max_owned(1),
        Weapon::new("blast_manual", "Blast Manual", Rare)
            .with_cap_increase(EffectKind::Explosion, 15.0),
        // Epic
        Weapon::new("resonance_fork", "Resonance Fork", Epic)
            .with_stat(EchoChance, 5.0)
            .with_stat(ChainReactionChance, 25.0)
            .with_special(SpecialEffect::ChainReaction),
        Weapon::new("prism_cannon", "Prism Cannon", Epic)
            .with_stat(LaserChance, 18.0)
            .with_special(SpecialEffect::Laser)
            .with_max_owned(3),
        Weapon::new("inferno_core", "Inferno Core", Epic)
            .with_stat(FireChance, 15.0)
            .with_special(SpecialEffect::Fire),
        Weapon::new("chrono_gear", "Chrono Gear", Epic)
            .with_stat(TimeGainChance, 15.0)
            .with_special(SpecialEffect::TimeGain)
            .with_amount(8),
        Weapon::new("golden_ledger", "Golden Ledger", Epic)
            .with_stat(CoinGainChance, 120.0)
            .with_special(SpecialEffect::CoinGain),
        Weapon::new("mending_link", "Mending Link", Epic).with_bridge(BridgePayload::new(
            BridgeTrigger::Heal,
            50.0,
            BridgeEffectKind::MakeHolographic,
            2,
        )),
        Weapon::new("grace_conduit", "Grace Conduit", Epic).with_bridge(BridgePayload::new(
            BridgeTrigger::GraceUsed,
            60.0,
            BridgeEffectKind::FireLaser,
            1,
        )),
        // Legendary
        Weapon::new("cataclysm_engine", "Cataclysm Engine", Legendary)
            .with_stat(ExplosionChance, 15.0)
            .with_cap_increase(EffectKind::Explosion, 30.0),
        Weapon::new("scholar_crown", "Scholar's Crown", Legendary)
            .with_stat(XpGainChance, 250.0)
            .with_special(SpecialEffect::XpGain),
        Weapon::new("infinite_echo", "Infinite Echo", Legendary).with_bridge(BridgePayload::new(
            BridgeTrigger::Echo,
            50.0,
            BridgeEffectKind::TriggerExplosion,
            1,
        )),
        Weapon::new("phoenix_plume", "Phoenix Plume", Legendary)
            .with_bridge(BridgePayload::new(
                BridgeTrigger::HealthLost,
                75.0,
                BridgeEffectKind::Heal,
                1,
            ))
            .with_max_owned(1),
        Weapon::new("midas_bridge", "Midas Bridge", Legendary).with_bridge(BridgePayload::new(
            BridgeTrigger::CoinGained,
            25.0,
            BridgeEffectKind::GainHint,
            1,
        )),
        Weapon::new("stormcaller", "Stormcaller", Legendary).with_bridge(BridgePayload::new(
            BridgeTrigger::AnyDestruction,
            30.0,
            BridgeEffectKind::IgniteCard,
            1,
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_special() {
        let catalog = WeaponCatalog::builtin();
        let specials = [
            SpecialEffect::Explosive,
            SpecialEffect::Fire,
            SpecialEffect::Laser,
            SpecialEffect::Ricochet,
            SpecialEffect::Echo,
            SpecialEffect::ChainReaction,
            SpecialEffect::AutoHint,
            SpecialEffect::Heal,
            SpecialEffect::GraceGain,
            SpecialEffect::HintGain,
            SpecialEffect::XpGain,
            SpecialEffect::CoinGain,
            SpecialEffect::TimeGain,
            SpecialEffect::BoardGrowth,
            SpecialEffect::CapIncrease,
            SpecialEffect::Bridge,
        ];
        for special in specials {
            assert!(
                catalog.iter().any(|w| w.special == Some(special)),
                "no builtin weapon for {:?}",
                special
            );
        }
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_id_panics() {
        let mut catalog = WeaponCatalog::new();
        catalog.register(Weapon::new("a", "A", Rarity::Common));
        catalog.register(Weapon::new("a", "A again", Rarity::Rare));
    }

    #[test]
    fn test_pick_respects_rarity_and_ceiling() {
        let mut catalog = WeaponCatalog::new();
        let capped = Weapon::new("capped", "Capped", Rarity::Rare).with_max_owned(1);
        catalog.register(capped.clone());
        catalog.register(Weapon::new("open", "Open", Rarity::Rare));
        catalog.register(Weapon::new("common", "Common", Rarity::Common));

        let mut rng = GameRng::new(5);
        for _ in 0..20 {
            let pick = catalog.pick_reward(Rarity::Rare, &[capped.clone()], &[], &mut rng);
            assert_eq!(pick.id, "open");
        }
    }

    #[test]
    fn test_pick_ignores_ceiling_when_rarity_exhausted() {
        let mut catalog = WeaponCatalog::new();
        let capped = Weapon::new("capped", "Capped", Rarity::Epic).with_max_owned(1);
        catalog.register(capped.clone());
        catalog.register(Weapon::new("common", "Common", Rarity::Common));

        let mut rng = GameRng::new(5);
        let pick = catalog.pick_reward(Rarity::Epic, &[capped], &[], &mut rng);
        assert_eq!(pick.id, "capped");
    }

    #[test]
    fn test_pick_falls_back_to_common_then_default() {
        let mut catalog = WeaponCatalog::new();
        catalog.register(Weapon::new("common", "Common", Rarity::Common));

        let mut rng = GameRng::new(5);
        let pick = catalog.pick_reward(Rarity::Legendary, &[], &[], &mut rng);
        assert_eq!(pick.id, "common");

        let pick = catalog.pick_reward(Rarity::Legendary, &[], &["common".to_string()], &mut rng);
        assert_eq!(pick.id, DEFAULT_REWARD_ID);

        let empty = WeaponCatalog::new();
        assert_eq!(empty.pick_reward(Rarity::Rare, &[], &[], &mut rng).id, DEFAULT_REWARD_ID);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = WeaponCatalog::builtin();
        assert_eq!(catalog.get("prism_cannon").map(|w| w.rarity), Some(Rarity::Epic));
        assert!(catalog.get("nonexistent").is_none());
    }
}
