//! Core card types for the Spanish 40-card deck: Card, Rank, Suit

use std::fmt;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Suit {
    Espada,
    Basto,
    Oro,
    Copa,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Espada, Suit::Basto, Suit::Oro, Suit::Copa];

    /// One-letter token used in the compact card encoding ("1E", "12C").
    pub const fn letter(self) -> char {
        match self {
            Suit::Espada => 'E',
            Suit::Basto => 'B',
            Suit::Oro => 'O',
            Suit::Copa => 'C',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Espada => "Espada",
            Suit::Basto => "Basto",
            Suit::Oro => "Oro",
            Suit::Copa => "Copa",
        };
        write!(f, "{name}")
    }
}

/// Ranks of the Spanish deck. Eights and nines are not part of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Rank {
    Ancho,
    Dos,
    Tres,
    Cuatro,
    Cinco,
    Seis,
    Siete,
    Sota,
    Caballo,
    Rey,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Ancho,
        Rank::Dos,
        Rank::Tres,
        Rank::Cuatro,
        Rank::Cinco,
        Rank::Seis,
        Rank::Siete,
        Rank::Sota,
        Rank::Caballo,
        Rank::Rey,
    ];

    /// Face number as printed on the card (1..=7, 10..=12).
    pub const fn number(self) -> u8 {
        match self {
            Rank::Ancho => 1,
            Rank::Dos => 2,
            Rank::Tres => 3,
            Rank::Cuatro => 4,
            Rank::Cinco => 5,
            Rank::Seis => 6,
            Rank::Siete => 7,
            Rank::Sota => 10,
            Rank::Caballo => 11,
            Rank::Rey => 12,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Compact token, e.g. "1E" or "12C".
    pub fn token(&self) -> String {
        format!("{}{}", self.rank.number(), self.suit.letter())
    }
}

// Display uses the traditional Spanish reading ("7 de Espada"); keep it in
// sync with the snapshot display strings the frontend renders.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} de {}", self.rank.number(), self.suit)
    }
}
