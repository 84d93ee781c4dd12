//! Bridge trigger and effect kinds.
//!
//! Bridge weapons do not react to the match itself. They react to the
//! *result* of something else: a heal landing, an explosion going off, a
//! grace being spent. Each bridge weapon names one trigger kind and one
//! secondary effect it produces.

use serde::{Deserialize, Serialize};

/// An event a bridge weapon can listen for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeTrigger {
    Heal,
    Explosion,
    GraceUsed,
    HintUsed,
    HealthLost,
    CoinGained,
    XpGained,
    TimeGained,
    Echo,
    /// Any card destroyed by a weapon effect.
    AnyDestruction,
}

impl BridgeTrigger {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            BridgeTrigger::Heal => "heal",
            BridgeTrigger::Explosion => "explosion",
            BridgeTrigger::GraceUsed => "grace used",
            BridgeTrigger::HintUsed => "hint used",
            BridgeTrigger::HealthLost => "health lost",
            BridgeTrigger::CoinGained => "coin gained",
            BridgeTrigger::XpGained => "xp gained",
            BridgeTrigger::TimeGained => "time gained",
            BridgeTrigger::Echo => "echo",
            BridgeTrigger::AnyDestruction => "destruction",
        }
    }
}

/// Secondary effect a bridge weapon produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeEffectKind {
    /// Make `magnitude` random cards holographic.
    MakeHolographic,
    GainGrace,
    /// Auto-match another valid triple.
    TriggerEcho,
    Heal,
    /// Set `magnitude` random cards on fire.
    IgniteCard,
    GainHint,
    GainCoin,
    /// Fire one laser across a random row or column.
    FireLaser,
    /// Detonate around `magnitude` random cards.
    TriggerExplosion,
}

/// Bridge configuration carried by a weapon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BridgePayload {
    pub trigger: BridgeTrigger,
    /// Percent chance this weapon reacts.
    pub chance: f64,
    pub effect: BridgeEffectKind,
    pub magnitude: u32,
}

impl BridgePayload {
    #[must_use]
    pub fn new(trigger: BridgeTrigger, chance: f64, effect: BridgeEffectKind, magnitude: u32) -> Self {
        Self {
            trigger,
            chance,
            effect,
            magnitude,
        }
    }
}

/// One bridge weapon that fired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeEffectResult {
    pub weapon_id: String,
    pub trigger: BridgeTrigger,
    pub effect: BridgeEffectKind,
    pub magnitude: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serialization() {
        let payload = BridgePayload::new(BridgeTrigger::GraceUsed, 40.0, BridgeEffectKind::FireLaser, 1);
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains("\"grace_used\""));
        assert!(json.contains("\"fire_laser\""));
        let parsed: BridgePayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }
}
