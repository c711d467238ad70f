//! Card parsing from compact token representations (e.g., "1E", "12C")

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || {
            DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
        };

        if !s.is_ascii() || !(2..=3).contains(&s.len()) {
            return Err(parse_err());
        }
        let (number_str, suit_str) = s.split_at(s.len() - 1);

        let rank = match number_str {
            "1" => Rank::Ancho,
            "2" => Rank::Dos,
            "3" => Rank::Tres,
            "4" => Rank::Cuatro,
            "5" => Rank::Cinco,
            "6" => Rank::Seis,
            "7" => Rank::Siete,
            "10" => Rank::Sota,
            "11" => Rank::Caballo,
            "12" => Rank::Rey,
            _ => return Err(parse_err()),
        };
        let suit = match suit_str {
            "E" => Suit::Espada,
            "B" => Suit::Basto,
            "O" => Suit::Oro,
            "C" => Suit::Copa,
            _ => return Err(parse_err()),
        };
        Ok(Card { rank, suit })
    }
}

/// Non-panicking helper to parse card tokens (e.g., "1E", "12C") into Card
/// instances. Fails if any token is invalid.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

#[cfg(test)]
pub fn parse_cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("valid card tokens")
}
