//! Round statistics.
//!
//! `RoundStats` is a write sink. The round records events into it and
//! refreshes the live snapshot each tick; defeat conditions and progress
//! displays only read it. It never triggers anything on its own.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::rules::MatchTraits;

/// Counters and snapshot values for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub target_score: i64,

    // Match counters.
    pub total_matches: u32,
    pub invalid_matches: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Milliseconds between each valid match and the one before it (or the
    /// round start, for the first).
    pub match_intervals_ms: Vec<u64>,
    pub last_match_at_ms: u64,

    // Match shapes.
    pub all_different_matches: u32,
    pub same_color_matches: u32,
    pub squiggle_matches: u32,

    // Modifier cards cleared by matches or effects.
    pub face_down_cleared: u32,
    pub countdown_cleared: u32,
    pub bombs_cleared: u32,
    pub triple_health_cleared: u32,

    // Resources.
    pub starting_hints: u32,
    pub starting_graces: u32,
    pub hints_used: u32,
    pub graces_used: u32,

    // Live snapshot.
    pub score: i64,
    pub time_remaining_ms: u64,
    pub cards_remaining: usize,
    pub hints_remaining: u32,
    pub graces_remaining: u32,
}

impl RoundStats {
    /// Fresh stats for a round.
    #[must_use]
    pub fn new(target_score: i64, hints: u32, graces: u32) -> Self {
        let mut stats = Self::default();
        stats.reset(target_score, hints, graces);
        stats
    }

    /// Clear everything and set the round baseline.
    pub fn reset(&mut self, target_score: i64, hints: u32, graces: u32) {
        *self = Self {
            target_score,
            starting_hints: hints,
            starting_graces: graces,
            hints_remaining: hints,
            graces_remaining: graces,
            ..Self::default()
        };
    }

    /// Record a valid match at round clock `now_ms`.
    pub fn record_valid_match(&mut self, traits: MatchTraits, now_ms: u64) {
        self.total_matches += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);

        self.match_intervals_ms
            .push(now_ms.saturating_sub(self.last_match_at_ms));
        self.last_match_at_ms = now_ms;

        if traits.all_different {
            self.all_different_matches += 1;
        }
        if traits.all_same_color {
            self.same_color_matches += 1;
        }
        if traits.contains_squiggle {
            self.squiggle_matches += 1;
        }
    }

    /// Record an invalid match; breaks the streak.
    pub fn record_invalid_match(&mut self) {
        self.invalid_matches += 1;
        self.current_streak = 0;
    }

    pub fn record_grace_used(&mut self) {
        self.graces_used += 1;
        self.graces_remaining = self.graces_remaining.saturating_sub(1);
    }

    pub fn record_hint_used(&mut self) {
        self.hints_used += 1;
        self.hints_remaining = self.hints_remaining.saturating_sub(1);
    }

    /// Tally modifier cards that left the board.
    pub fn record_cards_cleared<'a>(&mut self, cards: impl IntoIterator<Item = &'a Card>) {
        for card in cards {
            let m = &card.modifiers;
            if m.face_down {
                self.face_down_cleared += 1;
            }
            if m.countdown_ms.is_some() {
                self.countdown_cleared += 1;
            }
            if m.bomb_ms.is_some() {
                self.bombs_cleared += 1;
            }
            if m.max_health >= 3 {
                self.triple_health_cleared += 1;
            }
        }
    }

    /// Refresh the live values predicates read at evaluation time.
    pub fn update_snapshot(
        &mut self,
        score: i64,
        time_remaining_ms: u64,
        cards_remaining: usize,
        hints_remaining: u32,
        graces_remaining: u32,
    ) {
        self.score = score;
        self.time_remaining_ms = time_remaining_ms;
        self.cards_remaining = cards_remaining;
        self.hints_remaining = hints_remaining;
        self.graces_remaining = graces_remaining;
    }

    #[must_use]
    pub fn target_reached(&self) -> bool {
        self.score >= self.target_score
    }

    /// Whether any `count` consecutive valid matches landed within
    /// `window_ms` of each other (first to last).
    #[must_use]
    pub fn has_quick_matches(&self, count: usize, window_ms: u64) -> bool {
        if count == 0 {
            return true;
        }
        if self.match_intervals_ms.len() < count {
            return false;
        }
        if count == 1 {
            return true;
        }
        // Span of matches j..j+count-1 is the sum of the intervals after j.
        self.match_intervals_ms
            .windows(count)
            .any(|w| w[1..].iter().sum::<u64>() <= window_ms)
    }

    /// Compact binary snapshot for analytics.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
