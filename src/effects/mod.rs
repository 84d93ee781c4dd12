//! Weapon effects triggered by a match.
//!
//! - `WeaponEffectResolver`: runs the fixed-order effect pipeline
//! - `WeaponEffectResult`: the delta it returns
//!
//! ## Design Philosophy
//!
//! Resolution is pure with respect to the board. The resolver reads cards
//! and equipment, consumes randomness from the round's [`GameRng`], and
//! reports what should happen. The round applies the delta, which keeps
//! resolution replayable from a seed.
//!
//! [`GameRng`]: crate::core::GameRng

mod resolver;
mod result;

pub use resolver::{
    resolve_match, stacked_roll, MatchContext, WeaponEffectResolver, EXPLOSION_REWARD,
    LASER_REWARD, RICOCHET_REWARD,
};
pub(crate) use resolver::BoardView;
pub use result::WeaponEffectResult;
