//! Behavior modules.
//!
//! Grouped by the hook they mostly use:
//!
//! - [`modifiers`]: static multipliers and per-match taxes
//! - [`timed`]: periodic effects driven by `on_tick`
//! - [`draw`]: rewrite cards as they are drawn
//! - [`board`]: seed the opening board and resources, or react to matches

pub mod board;
pub mod draw;
pub mod modifiers;
pub mod timed;

pub use board::{
    ArmorSeeder, Backlash, BombSeeder, CountdownSeeder, DudSeeder, GraceSeal, HintSeal,
    InvalidPenalty, InvalidTimeTax, MatchDevourer, MatchDudder, MatchShroud, ShroudSeeder,
};
pub use draw::{ArmoredDraw, CountdownDraw, DudDraw, ShroudedDraw, VolatileDraw};
pub use modifiers::{
    ComboTax, DamageAmplifier, DamageRamp, DiminishingReturns, LateRush, MatchTimeTax,
    PointsMultiplier, TimerAccelerator, TimerSurge,
};
pub use timed::{
    ArmorGrowth, Arsonist, AttributeShifter, Blinker, BombFuse, BombPlanter, CardDevourer,
    CountdownCurse, CountdownPlanter, DudRot, FireSpreader, Flipper, GraceThief, HealthLeech,
    HintThief, ScoreLeech, Shuffler, TimeDrain,
};

use crate::cards::Card;
use crate::core::{CardId, GameRng};

/// Fixed-period timer fed by tick deltas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Interval {
    period_ms: u64,
    elapsed_ms: u64,
}

impl Interval {
    pub(crate) fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
        }
    }

    /// Advance by `delta_ms`; returns how many periods completed.
    pub(crate) fn advance(&mut self, delta_ms: u64) -> u32 {
        self.elapsed_ms += delta_ms;
        let fired = self.elapsed_ms / self.period_ms;
        self.elapsed_ms %= self.period_ms;
        fired as u32
    }

    pub(crate) fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}

/// Up to `count` distinct random cards satisfying `eligible`.
pub(crate) fn pick_cards<'a>(
    board: &'a [Card],
    count: usize,
    rng: &mut GameRng,
    eligible: impl Fn(&Card) -> bool,
) -> Vec<&'a Card> {
    let mut candidates: Vec<&Card> = board.iter().filter(|c| eligible(c)).collect();
    rng.shuffle(&mut candidates);
    candidates.truncate(count);
    candidates
}

/// IDs of up to `count` random cards satisfying `eligible`.
pub(crate) fn pick_ids(
    board: &[Card],
    count: usize,
    rng: &mut GameRng,
    eligible: impl Fn(&Card) -> bool,
) -> Vec<CardId> {
    pick_cards(board, count, rng, eligible)
        .into_iter()
        .map(|c| c.id)
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::cards::Card;
    use crate::core::CardId;

    /// A plain board of `len` distinct cards.
    pub(crate) fn board(len: u32) -> Vec<Card> {
        (0..len)
            .map(|i| {
                Card::from_indices(
                    CardId(i),
                    [(i % 3) as u8, ((i / 3) % 3) as u8, ((i / 9) % 3) as u8, 0, 0],
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_carries_remainder() {
        let mut interval = Interval::new(1_000);
        assert_eq!(interval.advance(600), 0);
        assert_eq!(interval.advance(600), 1);
        assert_eq!(interval.advance(2_500), 2);
        assert_eq!(interval.advance(300), 1);
        interval.reset();
        assert_eq!(interval.advance(999), 0);
    }

    #[test]
    fn test_pick_respects_filter_and_count() {
        let board = testing::board(9);
        let mut rng = GameRng::new(5);
        let picked = pick_ids(&board, 2, &mut rng, |c| c.id.0 % 2 == 0);
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|id| id.0 % 2 == 0));
        assert_ne!(picked[0], picked[1]);

        let none = pick_ids(&board, 3, &mut rng, |_| false);
        assert!(none.is_empty());
    }
}
