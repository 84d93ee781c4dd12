//! Deck generation.
//!
//! A deck is the full product of values over the active attributes
//! (27 cards for three, 81 for four, 243 for five). Inactive attributes are
//! never checked by the validator, so they are filled with random values.

use serde::{Deserialize, Serialize};

use crate::core::{CardIdGen, GameRng};

use super::attributes::Attribute;
use super::card::Card;

/// Shuffled draw pile.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Generate and shuffle a deck for the given active attributes.
    pub fn generate(active: &[Attribute], ids: &mut CardIdGen, rng: &mut GameRng) -> Self {
        let active: Vec<Attribute> = Attribute::ALL
            .into_iter()
            .filter(|a| active.contains(a))
            .collect();
        let total = 3usize.pow(active.len() as u32);

        let mut cards = Vec::with_capacity(total);
        for combo in 0..total {
            let mut values = [0u8; 5];
            for (slot, attribute) in Attribute::ALL.iter().enumerate() {
                values[slot] = match active.iter().position(|a| a == attribute) {
                    Some(pos) => ((combo / 3usize.pow(pos as u32)) % 3) as u8,
                    None => rng.gen_range(0..3) as u8,
                };
            }
            cards.push(Card::from_indices(ids.next_id(), values));
        }

        rng.shuffle(&mut cards);
        Self { cards }
    }

    /// Wrap an explicit card order (top of deck last).
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Take the top card.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
