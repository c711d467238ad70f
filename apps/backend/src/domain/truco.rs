//! Truco: the bid-escalation ladder and point values

use std::fmt;

use serde::{Deserialize, Serialize};

/// Commitment level of the hand. Set optimistically at call time; acceptance
/// only confirms it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrucoLevel {
    NotCalled,
    Truco,
    Retruco,
    #[serde(rename = "vale_4")]
    ValeCuatro,
}

impl fmt::Display for TrucoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrucoLevel::NotCalled => "no Truco",
            TrucoLevel::Truco => "Truco",
            TrucoLevel::Retruco => "Retruco",
            TrucoLevel::ValeCuatro => "Vale Cuatro",
        };
        write!(f, "{label}")
    }
}

/// The next rung of the ladder; `None` once Vale Cuatro is reached.
pub fn next_level(level: TrucoLevel) -> Option<TrucoLevel> {
    match level {
        TrucoLevel::NotCalled => Some(TrucoLevel::Truco),
        TrucoLevel::Truco => Some(TrucoLevel::Retruco),
        TrucoLevel::Retruco => Some(TrucoLevel::ValeCuatro),
        TrucoLevel::ValeCuatro => None,
    }
}

/// Points the hand is worth when won over the tricks at this level.
pub fn accepted_points(level: TrucoLevel) -> u8 {
    match level {
        TrucoLevel::NotCalled => 1,
        TrucoLevel::Truco => 2,
        TrucoLevel::Retruco => 3,
        TrucoLevel::ValeCuatro => 4,
    }
}

/// Points conceded by rejecting a call at this level: the previously
/// confirmed value, one less than the level's own.
pub fn rejected_points(level: TrucoLevel) -> u8 {
    match level {
        TrucoLevel::NotCalled => 0,
        TrucoLevel::Truco => 1,
        TrucoLevel::Retruco => 2,
        TrucoLevel::ValeCuatro => 3,
    }
}
