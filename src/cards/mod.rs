//! Card system: attributes, card values, deck generation, board geometry.
//!
//! ## Key Types
//!
//! - `Attribute`: one of the five checkable card attributes
//! - `Card`: immutable card value with modifier flags
//! - `Deck`: shuffled draw pile over the active attributes
//! - `Grid`: row-major adjacency for a board of a given length

pub mod attributes;
pub mod card;
pub mod deck;
pub mod grid;

pub use attributes::{Attribute, Background, Color, Number, Shading, Shape};
pub use card::{Card, CardModifiers};
pub use deck::Deck;
pub use grid::Grid;
