//! Card values.
//!
//! A [`Card`] is immutable for the duration of a tick. Anything that
//! changes a card (an enemy flipping it, a bomb being armed, a weapon
//! igniting it) produces a new `Card` with the same ID which the round
//! swaps into the board.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

use super::attributes::{Attribute, Background, Color, Number, Shading, Shape};

/// Modifier flags layered over a card's core attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardModifiers {
    /// Hits left before the card leaves the board.
    pub health: u8,
    /// Health the card was drawn with.
    pub max_health: u8,
    /// Duds can never be part of a valid match.
    pub dud: bool,
    pub face_down: bool,
    /// Remaining fuse on an armed bomb.
    pub bomb_ms: Option<u64>,
    /// Remaining time on a countdown card.
    pub countdown_ms: Option<u64>,
    /// Round clock time at which the card caught fire.
    pub on_fire_since_ms: Option<u64>,
    /// Holographic cards double base match points.
    pub holographic: bool,
}

impl Default for CardModifiers {
    fn default() -> Self {
        Self {
            health: 1,
            max_health: 1,
            dud: false,
            face_down: false,
            bomb_ms: None,
            countdown_ms: None,
            on_fire_since_ms: None,
            holographic: false,
        }
    }
}

/// A card on the board or in the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub shape: Shape,
    pub color: Color,
    pub number: Number,
    pub shading: Shading,
    pub background: Background,
    pub modifiers: CardModifiers,
}

impl Card {
    /// Create a plain card with no modifiers.
    #[must_use]
    pub fn new(
        id: CardId,
        shape: Shape,
        color: Color,
        number: Number,
        shading: Shading,
        background: Background,
    ) -> Self {
        Self {
            id,
            shape,
            color,
            number,
            shading,
            background,
            modifiers: CardModifiers::default(),
        }
    }

    /// Build a card from attribute indices in canonical order.
    #[must_use]
    pub fn from_indices(id: CardId, values: [u8; 5]) -> Self {
        Self::new(
            id,
            Shape::from_index(values[0]),
            Color::from_index(values[1]),
            Number::from_index(values[2]),
            Shading::from_index(values[3]),
            Background::from_index(values[4]),
        )
    }

    /// Index of this card's value for an attribute.
    #[must_use]
    pub fn value(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Shape => self.shape.index(),
            Attribute::Color => self.color.index(),
            Attribute::Number => self.number.index(),
            Attribute::Shading => self.shading.index(),
            Attribute::Background => self.background.index(),
        }
    }

    /// Copy of this card with one attribute replaced.
    #[must_use]
    pub fn with_value(&self, attribute: Attribute, index: u8) -> Self {
        let mut card = self.clone();
        match attribute {
            Attribute::Shape => card.shape = Shape::from_index(index),
            Attribute::Color => card.color = Color::from_index(index),
            Attribute::Number => card.number = Number::from_index(index),
            Attribute::Shading => card.shading = Shading::from_index(index),
            Attribute::Background => card.background = Background::from_index(index),
        }
        card
    }

    #[must_use]
    pub fn face_down(mut self) -> Self {
        self.modifiers.face_down = true;
        self
    }

    #[must_use]
    pub fn dud(mut self) -> Self {
        self.modifiers.dud = true;
        self
    }

    /// Copy with multi-hit health.
    #[must_use]
    pub fn with_health(mut self, health: u8) -> Self {
        let health = health.max(1);
        self.modifiers.health = health;
        self.modifiers.max_health = health;
        self
    }

    #[must_use]
    pub fn with_bomb(mut self, fuse_ms: u64) -> Self {
        self.modifiers.bomb_ms = Some(fuse_ms);
        self
    }

    #[must_use]
    pub fn with_countdown(mut self, ms: u64) -> Self {
        self.modifiers.countdown_ms = Some(ms);
        self
    }

    #[must_use]
    pub fn ignited_at(mut self, now_ms: u64) -> Self {
        self.modifiers.on_fire_since_ms = Some(now_ms);
        self
    }

    #[must_use]
    pub fn holographic(mut self) -> Self {
        self.modifiers.holographic = true;
        self
    }

    #[must_use]
    pub fn is_on_fire(&self) -> bool {
        self.modifiers.on_fire_since_ms.is_some()
    }
}
