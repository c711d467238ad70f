//! Card strength: the Truco hierarchy and Envido values

use super::cards_types::{Card, Rank, Suit};

/// Truco combat value, 1 (weakest) to 14 (strongest).
///
/// The hierarchy is fixed and unrelated to face-number order:
/// 1E > 1B > 7E > 7O > 3s > 2s > 1O/1C > 12s > 11s > 10s > 7B/7C > 6s > 5s > 4s.
pub fn truco_value(card: Card) -> u8 {
    match (card.rank, card.suit) {
        (Rank::Ancho, Suit::Espada) => 14,
        (Rank::Ancho, Suit::Basto) => 13,
        (Rank::Siete, Suit::Espada) => 12,
        (Rank::Siete, Suit::Oro) => 11,
        (Rank::Tres, _) => 10,
        (Rank::Dos, _) => 9,
        (Rank::Ancho, _) => 8,
        (Rank::Rey, _) => 7,
        (Rank::Caballo, _) => 6,
        (Rank::Sota, _) => 5,
        (Rank::Siete, _) => 4,
        (Rank::Seis, _) => 3,
        (Rank::Cinco, _) => 2,
        (Rank::Cuatro, _) => 1,
    }
}

/// Envido value: the face number for 1..=7, zero for the figures (10/11/12).
pub fn envido_value(card: Card) -> u8 {
    match card.rank {
        Rank::Sota | Rank::Caballo | Rank::Rey => 0,
        rank => rank.number(),
    }
}
