//! Set validation.
//!
//! Three cards form a valid combination when, for every active attribute,
//! their values are either all identical or pairwise distinct. Inactive
//! attributes are never looked at.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Attribute, Card, Color, Shape};
use crate::core::CardId;

/// Outcome of validating a triple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub is_valid: bool,
    /// Active attributes with exactly two distinct values, in the order
    /// they appear in the active list.
    pub invalid_attributes: SmallVec<[Attribute; 5]>,
}

/// Validate three cards against the active attributes.
#[must_use]
pub fn validate(cards: [&Card; 3], active: &[Attribute]) -> Validation {
    let mut invalid_attributes: SmallVec<[Attribute; 5]> = SmallVec::new();
    for &attribute in active {
        if invalid_attributes.contains(&attribute) {
            continue;
        }
        if !attribute_ok(cards, attribute) {
            invalid_attributes.push(attribute);
        }
    }
    Validation {
        is_valid: invalid_attributes.is_empty(),
        invalid_attributes,
    }
}

/// Shorthand for `validate(..).is_valid`.
#[must_use]
pub fn is_valid_set(cards: [&Card; 3], active: &[Attribute]) -> bool {
    active.iter().all(|&a| attribute_ok(cards, a))
}

fn attribute_ok(cards: [&Card; 3], attribute: Attribute) -> bool {
    let a = cards[0].value(attribute);
    let b = cards[1].value(attribute);
    let c = cards[2].value(attribute);
    let all_same = a == b && b == c;
    let all_distinct = a != b && b != c && a != c;
    all_same || all_distinct
}

/// Every valid triple on the board that avoids `excluded`, in board order.
///
/// Duds never participate.
#[must_use]
pub fn find_valid_sets(
    board: &[Card],
    active: &[Attribute],
    excluded: &FxHashSet<CardId>,
) -> Vec<[CardId; 3]> {
    let eligible: Vec<&Card> = board
        .iter()
        .filter(|c| !excluded.contains(&c.id) && !c.modifiers.dud)
        .collect();

    let mut sets = Vec::new();
    if eligible.len() < 3 {
        return sets;
    }
    for i in 0..eligible.len() {
        for j in (i + 1)..eligible.len() {
            for k in (j + 1)..eligible.len() {
                let triple = [eligible[i], eligible[j], eligible[k]];
                if is_valid_set(triple, active) {
                    sets.push([triple[0].id, triple[1].id, triple[2].id]);
                }
            }
        }
    }
    sets
}

/// First valid triple on the board that avoids `excluded`.
#[must_use]
pub fn find_valid_set(
    board: &[Card],
    active: &[Attribute],
    excluded: &FxHashSet<CardId>,
) -> Option<[CardId; 3]> {
    find_valid_sets(board, active, excluded).into_iter().next()
}

/// Shape of a match, for the stat tallies defeat conditions read.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTraits {
    /// Every active attribute is pairwise distinct.
    pub all_different: bool,
    pub all_same_color: bool,
    pub contains_squiggle: bool,
}

impl MatchTraits {
    #[must_use]
    pub fn of(cards: [&Card; 3], active: &[Attribute]) -> Self {
        let distinct = |attribute: Attribute| {
            let a = cards[0].value(attribute);
            let b = cards[1].value(attribute);
            let c = cards[2].value(attribute);
            a != b && b != c && a != c
        };
        let first_color: Color = cards[0].color;
        Self {
            all_different: !active.is_empty() && active.iter().all(|&a| distinct(a)),
            all_same_color: cards.iter().all(|c| c.color == first_color),
            contains_squiggle: cards.iter().any(|c| c.shape == Shape::Squiggle),
        }
    }
}
