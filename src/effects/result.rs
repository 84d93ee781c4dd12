//! Weapon effect delta.
//!
//! The resolver never touches the board. It returns one
//! `WeaponEffectResult` describing everything equipment did in response to
//! a match, and the caller applies it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;
use crate::triggers::BridgeTrigger;

/// Everything equipment did in response to one match.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponEffectResult {
    /// Extra valid triples reserved by echo (at most two).
    pub auto_matched_sets: SmallVec<[[CardId; 3]; 2]>,
    pub explosive_destroyed: Vec<CardId>,
    pub laser_destroyed: Vec<CardId>,
    /// Laser successes, counted even when a beam hits nothing new.
    pub lasers_fired: u32,
    pub ricochet_destroyed: Vec<CardId>,
    /// Cards set on fire. The caller stamps the start time.
    pub ignited: Vec<CardId>,

    pub bonus_points: i64,
    pub bonus_money: i64,
    pub healing: u32,
    pub hints_gained: u32,
    pub time_gained_secs: u32,
    pub graces_gained: u32,
    pub xp_gained: u32,
    pub coins_gained: u32,
    pub board_growth: u32,

    pub notifications: Vec<String>,
}

impl WeaponEffectResult {
    /// Cards removed by destructive effects (echo sets excluded).
    pub fn destroyed(&self) -> impl Iterator<Item = CardId> + '_ {
        self.explosive_destroyed
            .iter()
            .chain(&self.laser_destroyed)
            .chain(&self.ricochet_destroyed)
            .copied()
    }

    /// Cards in echoed triples.
    pub fn echoed(&self) -> impl Iterator<Item = CardId> + '_ {
        self.auto_matched_sets.iter().flatten().copied()
    }

    #[must_use]
    pub fn destroyed_count(&self) -> usize {
        self.explosive_destroyed.len() + self.laser_destroyed.len() + self.ricochet_destroyed.len()
    }

    /// Bridge trigger kinds this result fires, in a fixed order.
    #[must_use]
    pub fn triggered_events(&self) -> SmallVec<[BridgeTrigger; 8]> {
        let mut events = SmallVec::new();
        if self.healing > 0 {
            events.push(BridgeTrigger::Heal);
        }
        if !self.explosive_destroyed.is_empty() {
            events.push(BridgeTrigger::Explosion);
        }
        if self.coins_gained > 0 {
            events.push(BridgeTrigger::CoinGained);
        }
        if self.xp_gained > 0 {
            events.push(BridgeTrigger::XpGained);
        }
        if self.time_gained_secs > 0 {
            events.push(BridgeTrigger::TimeGained);
        }
        if !self.auto_matched_sets.is_empty() {
            events.push(BridgeTrigger::Echo);
        }
        if self.destroyed_count() > 0 {
            events.push(BridgeTrigger::AnyDestruction);
        }
        events
    }

    /// Nothing happened.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
