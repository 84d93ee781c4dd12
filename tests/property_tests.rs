//! Property tests for validation, caps and stacked rolls.

use proptest::prelude::*;

use trio_engine::cards::{Attribute, Card};
use trio_engine::core::{CardId, GameRng};
use trio_engine::effects::stacked_roll;
use trio_engine::rules::{is_valid_set, validate};
use trio_engine::weapons::{effective_probability, EffectCaps, EffectKind};

fn card(id: u32) -> impl Strategy<Value = Card> {
    prop::array::uniform5(0u8..3).prop_map(move |values| Card::from_indices(CardId(id), values))
}

fn active() -> impl Strategy<Value = Vec<Attribute>> {
    prop::sample::subsequence(Attribute::ALL.to_vec(), 1..=5)
}

proptest! {
    #[test]
    fn prop_validity_ignores_order(a in card(0), b in card(1), c in card(2), active in active()) {
        let expected = is_valid_set([&a, &b, &c], &active);
        prop_assert_eq!(is_valid_set([&b, &a, &c], &active), expected);
        prop_assert_eq!(is_valid_set([&c, &b, &a], &active), expected);
        prop_assert_eq!(is_valid_set([&a, &c, &b], &active), expected);
    }

    #[test]
    fn prop_invalid_attributes_explain_result(a in card(0), b in card(1), c in card(2), active in active()) {
        let validation = validate([&a, &b, &c], &active);
        prop_assert_eq!(validation.is_valid, validation.invalid_attributes.is_empty());
        for attribute in &validation.invalid_attributes {
            prop_assert!(active.contains(attribute));
        }
    }

    #[test]
    fn prop_two_cards_determine_the_third(a in card(0), b in card(1)) {
        let values: Vec<u8> = Attribute::ALL
            .iter()
            .map(|&attr| (6 - a.value(attr) - b.value(attr)) % 3)
            .collect();
        let c = Card::from_indices(CardId(2), [values[0], values[1], values[2], values[3], values[4]]);
        prop_assert!(is_valid_set([&a, &b, &c], &Attribute::ALL));
    }

    #[test]
    fn prop_cap_bounds_probability(accumulated in 0.0f64..1_000.0, cap in 0.0f64..100.0) {
        let p = effective_probability(accumulated, cap);
        prop_assert!(p <= cap);
        prop_assert!(p <= accumulated);
        prop_assert!(p >= 0.0);
    }

    #[test]
    fn prop_caps_clamp_per_kind(accumulated in 0.0f64..500.0, cap in 0.0f64..100.0) {
        let mut caps = EffectCaps::default();
        caps.set(EffectKind::Laser, cap);
        prop_assert!(caps.clamp(EffectKind::Laser, accumulated) <= cap);
    }

    #[test]
    fn prop_stacked_roll_brackets_percent(percent in 0.0f64..500.0, seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let rolled = stacked_roll(percent, &mut rng);
        let floor = (percent / 100.0).floor() as u32;
        prop_assert!(rolled == floor || rolled == floor + 1);
    }
}
