//! Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::deck::full_deck;
use crate::domain::state::{Seat, TrickOutcome};

pub fn suit() -> impl Strategy<Value = Suit> {
    proptest::sample::select(Suit::ALL.to_vec())
}

pub fn rank() -> impl Strategy<Value = Rank> {
    proptest::sample::select(Rank::ALL.to_vec())
}

pub fn card() -> impl Strategy<Value = Card> {
    (rank(), suit()).prop_map(|(rank, suit)| Card { rank, suit })
}

/// `n` distinct cards drawn from the full deck.
pub fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(full_deck(), n)
}

pub fn seat() -> impl Strategy<Value = Seat> {
    proptest::sample::select(vec![Seat::P1, Seat::P2])
}

pub fn outcome() -> impl Strategy<Value = TrickOutcome> {
    prop_oneof![
        seat().prop_map(TrickOutcome::Winner),
        Just(TrickOutcome::Parda),
    ]
}
