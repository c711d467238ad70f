//! Property-based tests for Envido hand scoring.

use proptest::prelude::*;

use crate::domain::cards_logic::envido_value;
use crate::domain::envido::calculate_envido_points;
use crate::domain::test_gens;

proptest! {
    /// The score never depends on the order the cards were dealt in.
    #[test]
    fn prop_score_is_order_invariant(hand in test_gens::distinct_cards(3)) {
        let reference = calculate_envido_points(&hand).unwrap();
        let rotations = [
            vec![hand[1], hand[2], hand[0]],
            vec![hand[2], hand[0], hand[1]],
            vec![hand[2], hand[1], hand[0]],
        ];
        for permuted in rotations {
            prop_assert_eq!(calculate_envido_points(&permuted).unwrap(), reference);
        }
    }

    /// Scores live in 0..=33 and never drop below the best single card.
    #[test]
    fn prop_score_bounds(hand in test_gens::distinct_cards(3)) {
        let score = calculate_envido_points(&hand).unwrap();
        prop_assert!(score <= 33);
        let best_single = hand.iter().map(|c| envido_value(*c)).max().unwrap();
        prop_assert!(score >= best_single);
    }

    /// A suited pair always lifts the score to at least 20.
    #[test]
    fn prop_suited_pair_reaches_twenty(hand in test_gens::distinct_cards(3)) {
        let suited = hand
            .iter()
            .any(|a| hand.iter().filter(|b| b.suit == a.suit).count() >= 2);
        let score = calculate_envido_points(&hand).unwrap();
        if suited {
            prop_assert!(score >= 20);
        } else {
            prop_assert!(score <= 7);
        }
    }
}
