//! Set validation.
//!
//! The validator is a pure predicate over three cards and the active
//! attribute list. It is used to check a player's selection and, from the
//! weapon resolver's echo step, to search the rest of the board for
//! another valid triple.

pub mod validator;

pub use validator::{find_valid_set, find_valid_sets, is_valid_set, validate, MatchTraits, Validation};
