//! Engine configuration.
//!
//! Board dimensions, round timing, and base scoring live here rather than
//! as constants scattered through the round state machine. Everything has
//! a sensible default; callers override with the `with_*` builders or by
//! deserializing a config file.

use serde::{Deserialize, Serialize};

use crate::cards::Attribute;

/// Round-level configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cards dealt at round start.
    pub initial_board_size: usize,

    /// Hard ceiling on board size; board growth never exceeds it.
    pub max_board_size: usize,

    /// Round length in milliseconds of game clock.
    pub round_duration_ms: u64,

    /// Base points for a valid match (before enemy multipliers).
    pub match_points: i64,

    /// Points for a card that finishes burning.
    pub burn_points: i64,

    /// Health lost on an invalid match when no grace is available
    /// (before the enemy damage multiplier).
    pub invalid_match_damage: u32,

    /// Attributes the validator checks. Three to five entries.
    pub active_attributes: Vec<Attribute>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_board_size: 12,
            max_board_size: 21,
            round_duration_ms: 90_000,
            match_points: 3,
            burn_points: 1,
            invalid_match_damage: 1,
            active_attributes: vec![
                Attribute::Shape,
                Attribute::Color,
                Attribute::Number,
                Attribute::Shading,
            ],
        }
    }
}

impl EngineConfig {
    /// Set the number of cards dealt at round start.
    #[must_use]
    pub fn with_initial_board_size(mut self, size: usize) -> Self {
        self.initial_board_size = size;
        self
    }

    /// Set the maximum board size.
    #[must_use]
    pub fn with_max_board_size(mut self, size: usize) -> Self {
        self.max_board_size = size;
        self
    }

    /// Set the round length.
    #[must_use]
    pub fn with_round_duration_ms(mut self, ms: u64) -> Self {
        self.round_duration_ms = ms;
        self
    }

    /// Set base match points.
    #[must_use]
    pub fn with_match_points(mut self, points: i64) -> Self {
        self.match_points = points;
        self
    }

    /// Set the active attribute list.
    #[must_use]
    pub fn with_active_attributes(mut self, attributes: impl IntoIterator<Item = Attribute>) -> Self {
        self.active_attributes = attributes.into_iter().collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.initial_board_size, 12);
        assert_eq!(config.max_board_size, 21);
        assert_eq!(config.active_attributes.len(), 4);
        assert!(!config.active_attributes.contains(&Attribute::Background));
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::default()
            .with_initial_board_size(9)
            .with_round_duration_ms(30_000)
            .with_active_attributes(Attribute::ALL);

        assert_eq!(config.initial_board_size, 9);
        assert_eq!(config.round_duration_ms, 30_000);
        assert_eq!(config.active_attributes.len(), 5);
    }

    #[test]
    fn test_partial_config_file() {
        let json = r#"{ "max_board_size": 15, "match_points": 5 }"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.max_board_size, 15);
        assert_eq!(config.match_points, 5);
        assert_eq!(config.initial_board_size, 12);
    }
}
