//! Round lifecycle.
//!
//! ## Key Types
//!
//! - `Round`: authoritative board, clock and resources for one fight
//! - `Loadout`: stats, equipment and health carried into a round
//! - `RoundStats`: counters the enemy's defeat condition reads
//! - `RoundSummary`: final result, including the bonus-reward flag

mod machine;
mod outcome;
mod stats;

pub use machine::{Loadout, Round};
pub use outcome::{
    BurnOutcome, HintOutcome, MatchOutcome, RoundPhase, RoundSummary, StartOutcome, TickOutcome,
};
pub use stats::RoundStats;
