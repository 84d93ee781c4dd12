//! Bridge triggers: weapons that react to other effects.
//!
//! ## Key Components
//!
//! - [`BridgeTrigger`]: the primary effect a bridge listens for
//! - [`BridgeEffectKind`]: the secondary effect it produces
//! - [`BridgePayload`]: per-weapon configuration (trigger, chance, effect)
//! - [`BridgeIndex`]: equipment indexed by trigger for fast lookup
//!
//! ## Cascade Guard
//!
//! Bridge output is never a trigger source. Callers resolve secondary
//! effects with `is_cascade = true`, which always yields nothing, so one
//! bridge can never start a chain of further bridges.

mod bridge;
mod event;

pub use bridge::{resolve_bridge, BridgeIndex};
pub use event::{BridgeEffectKind, BridgeEffectResult, BridgePayload, BridgeTrigger};
