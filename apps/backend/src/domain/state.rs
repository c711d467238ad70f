//! Match and round state containers

use std::fmt;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::Card;
use super::envido::EnvidoLevel;
use super::truco::TrucoLevel;

pub const PLAYERS: usize = 2;

/// The two seats of a match. Seat `P1` is the externally driven player,
/// seat `P2` the automated opponent.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    P1,
    P2,
}

impl Seat {
    pub const fn opponent(self) -> Seat {
        match self {
            Seat::P1 => Seat::P2,
            Seat::P2 => Seat::P1,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Seat::P1 => 0,
            Seat::P2 => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::P1 => write!(f, "p1"),
            Seat::P2 => write!(f, "p2"),
        }
    }
}

/// Overall match progression phases.
///
/// `Dealing` and `RoundEnd` are transient: the engine advances through them
/// eagerly inside the action that triggered them, so observers only ever see
/// `Playing` or `GameOver`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Cards are being dealt for the next hand.
    Dealing,
    /// Tricks and negotiations are in progress; `apply_action` is accepted.
    Playing,
    /// The hand just resolved; scores are being settled.
    RoundEnd,
    /// A side reached the target score. No action mutates the match anymore.
    GameOver,
}

/// Result of one completed trick.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TrickOutcome {
    Winner(Seat),
    Parda,
}

impl Serialize for TrickOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let label = match self {
            TrickOutcome::Winner(Seat::P1) => "p1",
            TrickOutcome::Winner(Seat::P2) => "p2",
            TrickOutcome::Parda => "parda",
        };
        serializer.serialize_str(label)
    }
}

impl<'de> Deserialize<'de> for TrickOutcome {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "p1" => Ok(TrickOutcome::Winner(Seat::P1)),
            "p2" => Ok(TrickOutcome::Winner(Seat::P2)),
            "parda" => Ok(TrickOutcome::Parda),
            other => Err(D::Error::custom(format!("unknown trick outcome: {other}"))),
        }
    }
}

/// Which negotiation, if any, is awaiting a response. While one is pending,
/// the only legal actions are its responses and further escalations.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingBid {
    Envido,
    Truco,
}

/// Envido negotiation sub-state. At most one negotiation per hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvidoState {
    /// Label of the last call.
    pub level: EnvidoLevel,
    /// Calls in order, for display and post-mortems.
    pub history: Vec<EnvidoLevel>,
    /// One-shot flag: set once the negotiation resolves either way.
    pub played: bool,
    /// Hand scores, computed at deal time and never recomputed.
    pub points: [u8; PLAYERS],
    pub winner: Option<Seat>,
}

impl EnvidoState {
    pub fn new(points: [u8; PLAYERS]) -> Self {
        Self {
            level: EnvidoLevel::NotCalled,
            history: Vec::new(),
            played: false,
            points,
            winner: None,
        }
    }
}

/// Truco negotiation sub-state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrucoState {
    /// Commitment level, set at call time (not at acceptance).
    pub level: TrucoLevel,
    /// Who made the last call; the owner cannot respond to their own call.
    pub owner: Option<Seat>,
    /// Who may escalate next once the current level is accepted.
    pub raise_turn: Option<Seat>,
}

impl TrucoState {
    pub fn empty() -> Self {
        Self {
            level: TrucoLevel::NotCalled,
            owner: None,
            raise_turn: None,
        }
    }
}

/// One hand of play: hands, the current trick, trick history, and the two
/// nested negotiations. Replaced wholesale when the next hand is dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Hands in deal order; playing removes the card at its index.
    pub hands: [Vec<Card>; PLAYERS],
    /// Cards each seat has played this hand, in play order.
    pub played: [Vec<Card>; PLAYERS],
    /// Cards on the table for the current trick (0..=2).
    pub table: Vec<(Seat, Card)>,
    /// Completed trick outcomes, in order.
    pub outcomes: Vec<TrickOutcome>,
    /// Hand's first player; alternates by hand number and breaks ties.
    pub mano: Seat,
    /// Whose action is expected next.
    pub turn: Seat,
    pub envido: EnvidoState,
    pub truco: TrucoState,
    /// Pending negotiation; card play is suppressed while `Some`.
    pub waiting_for: Option<PendingBid>,
}

/// Entire match container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    pub phase: Phase,
    /// 1-based hand counter.
    pub hand_no: u32,
    pub target_score: u8,
    pub scores: [u8; PLAYERS],
    /// Display names, seat-indexed; used for the narrative log.
    pub names: [String; PLAYERS],
    /// The single live hand.
    pub round: RoundState,
    /// Narrative log lines, oldest first.
    pub log: Vec<String>,
}

impl MatchState {
    pub fn score(&self, seat: Seat) -> u8 {
        self.scores[seat.index()]
    }

    pub fn name(&self, seat: Seat) -> &str {
        &self.names[seat.index()]
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        self.log.push(line.into());
    }
}

/// Mano for a 1-based hand number: P1 deals first and it alternates by
/// hand-number parity.
pub const fn mano_for_hand(hand_no: u32) -> Seat {
    if hand_no % 2 == 1 {
        Seat::P1
    } else {
        Seat::P2
    }
}
