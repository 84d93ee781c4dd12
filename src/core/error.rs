//! Engine error types.
//!
//! Most failure modes in the rules pipeline are policy fallbacks (an empty
//! echo, a default reward) and never surface here. `EngineError` covers
//! caller mistakes: asking for an enemy that was never registered, acting
//! on a round that is no longer active, or selecting cards that are not on
//! the board.

use super::CardId;
use crate::round::RoundPhase;

/// Errors returned by fallible engine operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// No factory is registered under this enemy name.
    #[error("unknown enemy: {0}")]
    UnknownEnemy(String),

    /// The operation needs an active round.
    #[error("round is not active (phase: {0:?})")]
    RoundNotActive(RoundPhase),

    /// Ending early is only allowed once the target score is reached.
    #[error("cannot end round early: score {score} is below target {target}")]
    EarlyEndNotAllowed { score: i64, target: i64 },

    /// A selected card is not on the board.
    #[error("{0} is not on the board")]
    CardNotOnBoard(CardId),

    /// The same card was selected more than once.
    #[error("{0} was selected more than once")]
    DuplicateSelection(CardId),

    /// The player has no hints left to spend.
    #[error("no hints remaining")]
    NoHintsRemaining,

    /// `burn_card` was called for a card that is not burning.
    #[error("{0} is not on fire")]
    CardNotBurning(CardId),
}

/// Convenience alias used across the crate.
pub type EngineResult<T> = Result<T, EngineError>;
