//! # trio-engine
//!
//! Rules engine for a round-based card-matching roguelike.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every random decision draws from one seeded
//!    [`GameRng`] owned by the round. Same seed, same inputs, same outcome.
//!
//! 2. **Composition Over Inheritance**: Enemies are lists of small behavior
//!    modules. Weapons are data: additive stats plus an optional special or
//!    bridge payload.
//!
//! 3. **Deltas, Not Mutation**: Weapon and enemy hooks read the board and
//!    return deltas. The round is the only place state changes.
//!
//! ## Modules
//!
//! - `core`: Card IDs, RNG, configuration, errors
//! - `cards`: Attributes, cards, deck generation, board grid
//! - `rules`: Triple validation and set search
//! - `weapons`: Equipment, effect caps, aggregate stats, reward catalog
//! - `effects`: Per-match weapon effect pipeline
//! - `triggers`: Bridge weapons reacting to other effects
//! - `enemies`: Behavior modules, enemy catalog and registry
//! - `round`: Round state machine and stats

pub mod core;
pub mod cards;
pub mod rules;
pub mod weapons;
pub mod effects;
pub mod triggers;
pub mod enemies;
pub mod round;

// Re-export commonly used types
pub use crate::core::{CardId, CardIdGen, EngineConfig, EngineError, EngineResult, GameRng, GameRngState};

pub use crate::cards::{Attribute, Card, CardModifiers, Deck, Grid};

pub use crate::rules::{find_valid_set, is_valid_set, validate, Validation};

pub use crate::weapons::{
    BaseStats, EffectCaps, EffectKind, PlayerStats, Rarity, SpecialEffect, StatKind, Weapon,
    WeaponCatalog,
};

pub use crate::effects::{resolve_match, WeaponEffectResult};

pub use crate::triggers::{resolve_bridge, BridgeEffectKind, BridgeEffectResult, BridgeTrigger};

pub use crate::enemies::{create_enemy, EnemyBehavior, EnemyInstance, EnemyOption, EnemyRegistry};

pub use crate::round::{Loadout, Round, RoundPhase, RoundStats, RoundSummary};
