//! Bridge resolution.
//!
//! When a primary effect happens (a heal, an explosion, a grace spent),
//! every owned bridge weapon listening for that trigger rolls its own
//! chance. Results from bridges are never fed back in as new triggers:
//! the caller passes `is_cascade = true` for anything a bridge produced,
//! which short-circuits resolution.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::GameRng;
use crate::weapons::{SpecialEffect, Weapon};

use super::event::{BridgeEffectResult, BridgeTrigger};

/// Bridge weapons indexed by the trigger they listen for.
///
/// Indices point into the equipment slice the index was built from, so
/// duplicate copies appear once each and resolve in equipment order.
#[derive(Clone, Debug, Default)]
pub struct BridgeIndex {
    by_trigger: FxHashMap<BridgeTrigger, Vec<usize>>,
}

impl BridgeIndex {
    /// Index every bridge weapon in `weapons`. A payload only counts on a
    /// weapon whose special is [`SpecialEffect::Bridge`].
    #[must_use]
    pub fn build(weapons: &[Weapon]) -> Self {
        let mut by_trigger: FxHashMap<BridgeTrigger, Vec<usize>> = FxHashMap::default();
        for (index, weapon) in weapons.iter().enumerate() {
            if weapon.special != Some(SpecialEffect::Bridge) {
                continue;
            }
            if let Some(payload) = &weapon.bridge {
                by_trigger.entry(payload.trigger).or_default().push(index);
            }
        }
        Self { by_trigger }
    }

    /// Whether any weapon listens for `trigger`.
    #[must_use]
    pub fn listens_for(&self, trigger: BridgeTrigger) -> bool {
        self.by_trigger.contains_key(&trigger)
    }

    /// Roll every listener for `trigger`.
    ///
    /// `weapons` must be the slice this index was built from.
    pub fn resolve(
        &self,
        trigger: BridgeTrigger,
        weapons: &[Weapon],
        is_cascade: bool,
        rng: &mut GameRng,
    ) -> Vec<BridgeEffectResult> {
        if is_cascade {
            return Vec::new();
        }
        let Some(listeners) = self.by_trigger.get(&trigger) else {
            return Vec::new();
        };

        let mut fired = Vec::new();
        for &index in listeners {
            let Some(weapon) = weapons.get(index) else {
                continue;
            };
            let Some(payload) = &weapon.bridge else {
                continue;
            };
            if rng.roll(payload.chance) {
                debug!(
                    weapon = %weapon.id,
                    trigger = trigger.name(),
                    effect = ?payload.effect,
                    "bridge fired"
                );
                fired.push(BridgeEffectResult {
                    weapon_id: weapon.id.clone(),
                    trigger,
                    effect: payload.effect,
                    magnitude: payload.magnitude.max(1),
                });
            }
        }
        fired
    }
}

/// One-shot bridge resolution without a prebuilt index.
pub fn resolve_bridge(
    trigger: BridgeTrigger,
    weapons: &[Weapon],
    is_cascade: bool,
    rng: &mut GameRng,
) -> Vec<BridgeEffectResult> {
    BridgeIndex::build(weapons).resolve(trigger, weapons, is_cascade, rng)
}
