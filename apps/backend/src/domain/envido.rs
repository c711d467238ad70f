//! Envido: hand scoring, the bid-escalation ladder, and point payouts

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cards_logic::envido_value;
use super::cards_types::{Card, Suit};
use crate::errors::domain::{DomainError, InvariantKind};

/// Commitment level of the Envido negotiation. The level is the *label of the
/// last call*, not an accumulator; payouts read off the tables below.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvidoLevel {
    NotCalled,
    Envido,
    EnvidoEnvido,
    RealEnvido,
    EnvidoRealEnvido,
    EnvidoEnvidoRealEnvido,
    FaltaEnvido,
}

impl fmt::Display for EnvidoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EnvidoLevel::NotCalled => "no Envido",
            EnvidoLevel::Envido => "Envido",
            EnvidoLevel::EnvidoEnvido => "Envido Envido",
            EnvidoLevel::RealEnvido => "Real Envido",
            EnvidoLevel::EnvidoRealEnvido => "Envido Real Envido",
            EnvidoLevel::EnvidoEnvidoRealEnvido => "Envido Envido Real Envido",
            EnvidoLevel::FaltaEnvido => "Falta Envido",
        };
        write!(f, "{label}")
    }
}

/// Levels reachable by a further call from `level`.
///
/// `EnvidoEnvidoRealEnvido` appears in the payout tables but no transition
/// targets it; the table is kept as the source rules define it.
pub fn escalations(level: EnvidoLevel) -> &'static [EnvidoLevel] {
    match level {
        EnvidoLevel::NotCalled => &[
            EnvidoLevel::Envido,
            EnvidoLevel::RealEnvido,
            EnvidoLevel::FaltaEnvido,
        ],
        EnvidoLevel::Envido => &[
            EnvidoLevel::EnvidoEnvido,
            EnvidoLevel::RealEnvido,
            EnvidoLevel::FaltaEnvido,
        ],
        EnvidoLevel::EnvidoEnvido => {
            &[EnvidoLevel::EnvidoRealEnvido, EnvidoLevel::FaltaEnvido]
        }
        EnvidoLevel::RealEnvido
        | EnvidoLevel::EnvidoRealEnvido
        | EnvidoLevel::EnvidoEnvidoRealEnvido => &[EnvidoLevel::FaltaEnvido],
        EnvidoLevel::FaltaEnvido => &[],
    }
}

/// Whether accept/reject responses are available at `level`.
pub fn can_respond(level: EnvidoLevel) -> bool {
    level != EnvidoLevel::NotCalled
}

/// Points the winner collects when the bid is accepted ("quiero").
///
/// Falta Envido pays whatever the current score leader still needs to win.
pub fn quiero_points(level: EnvidoLevel, leader_score: u8, target_score: u8) -> u8 {
    match level {
        EnvidoLevel::NotCalled => 0,
        EnvidoLevel::Envido => 2,
        EnvidoLevel::EnvidoEnvido => 4,
        EnvidoLevel::RealEnvido => 3,
        EnvidoLevel::EnvidoRealEnvido => 5,
        EnvidoLevel::EnvidoEnvidoRealEnvido => 7,
        EnvidoLevel::FaltaEnvido => target_score.saturating_sub(leader_score),
    }
}

/// Points the caller collects when the bid is rejected ("no quiero").
///
/// Falta Envido rejection pays a flat 1 regardless of preceding calls.
pub fn no_quiero_points(level: EnvidoLevel) -> u8 {
    match level {
        EnvidoLevel::NotCalled => 0,
        EnvidoLevel::Envido => 1,
        EnvidoLevel::EnvidoEnvido => 2,
        EnvidoLevel::RealEnvido => 1,
        EnvidoLevel::EnvidoRealEnvido => 2,
        EnvidoLevel::EnvidoEnvidoRealEnvido => 4,
        EnvidoLevel::FaltaEnvido => 1,
    }
}

/// Envido score of a 3-card hand.
///
/// With two or more cards of one suit: 20 plus the two highest Envido values
/// of that suit. Otherwise the single highest Envido value. Computed once per
/// hand, before play, on the full dealt hand.
pub fn calculate_envido_points(cards: &[Card]) -> Result<u8, DomainError> {
    if cards.len() != 3 {
        return Err(DomainError::invariant(
            InvariantKind::InvalidHandSize,
            format!("Envido requires exactly 3 cards, got {}", cards.len()),
        ));
    }

    let mut best = 0u8;
    for suit in Suit::ALL {
        let mut values: Vec<u8> = cards
            .iter()
            .filter(|c| c.suit == suit)
            .map(|c| envido_value(*c))
            .collect();
        if values.len() >= 2 {
            values.sort_unstable_by(|a, b| b.cmp(a));
            best = best.max(20 + values[0] + values[1]);
        }
    }
    for card in cards {
        best = best.max(envido_value(*card));
    }
    Ok(best)
}
