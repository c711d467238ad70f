//! The 40-card deck: reset/shuffle and dealing

use super::cards_types::{Card, Rank, Suit};
use super::rng::MatchRng;
use crate::errors::domain::{DomainError, InvariantKind};

/// All 40 distinct cards in a stable order (suit-major).
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(40);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { rank, suit });
        }
    }
    deck
}

/// Shuffled draw pile. The only mutations are [`Deck::reset`] and
/// [`Deck::deal`]; a hand must start from a freshly reset deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full, shuffled deck.
    pub fn new(rng: &mut MatchRng) -> Self {
        let mut deck = Self { cards: Vec::new() };
        deck.reset(rng);
        deck
    }

    /// Repopulate with all 40 cards and shuffle.
    pub fn reset(&mut self, rng: &mut MatchRng) {
        self.cards = full_deck();
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the first `n` cards.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        if self.cards.len() < n {
            return Err(DomainError::invariant(
                InvariantKind::InsufficientCards,
                format!("Asked for {n} cards with {} remaining", self.cards.len()),
            ));
        }
        Ok(self.cards.drain(..n).collect())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
