//! Core engine types: card IDs, RNG, configuration, errors.
//!
//! Everything else in the crate builds on these. None of them know about
//! weapons or enemies.

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
pub use ids::{CardId, CardIdGen};
pub use rng::{GameRng, GameRngState};
