//! Equipment: weapons, effect caps, aggregate stats, reward catalog.
//!
//! ## Key Types
//!
//! - `Weapon`: immutable equipment entry with additive stat effects
//! - `EffectCaps`: per-kind probability ceilings
//! - `PlayerStats`: base stats plus every owned weapon
//! - `WeaponCatalog`: offerable weapons and reward selection

pub mod caps;
pub mod catalog;
pub mod stats;
pub mod weapon;

pub use caps::{effective_probability, EffectCaps, EffectKind};
pub use catalog::{default_reward, WeaponCatalog, DEFAULT_REWARD_ID};
pub use stats::{BaseStats, PlayerStats};
pub use weapon::{CapIncrease, Rarity, SpecialEffect, StatEffect, StatKind, Weapon};
