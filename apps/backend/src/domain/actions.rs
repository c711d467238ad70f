//! The action grammar: tokens, legality, and the dispatch entry point

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::bidding;
use super::envido;
use super::rng::MatchRng;
use super::state::{MatchState, PendingBid, Phase, Seat};
use super::tricks;
use super::truco::{self, TrucoLevel};
use crate::errors::domain::{DomainError, ValidationKind};

/// Everything a player can ask the engine to do.
///
/// The wire form is the token (`play_card_2`, `envido_quiero`, ...); the two
/// directions are [`FromStr`] and [`fmt::Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    PlayCard(usize),
    CallEnvido,
    CallRealEnvido,
    CallFaltaEnvido,
    EnvidoQuiero,
    EnvidoNoQuiero,
    CallTruco,
    CallRetruco,
    CallValeCuatro,
    TrucoQuiero,
    TrucoNoQuiero,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::PlayCard(index) => write!(f, "play_card_{index}"),
            Action::CallEnvido => write!(f, "call_envido"),
            Action::CallRealEnvido => write!(f, "call_real_envido"),
            Action::CallFaltaEnvido => write!(f, "call_falta_envido"),
            Action::EnvidoQuiero => write!(f, "envido_quiero"),
            Action::EnvidoNoQuiero => write!(f, "envido_no_quiero"),
            Action::CallTruco => write!(f, "call_truco"),
            Action::CallRetruco => write!(f, "call_retruco"),
            Action::CallValeCuatro => write!(f, "call_vale_4"),
            Action::TrucoQuiero => write!(f, "truco_quiero"),
            Action::TrucoNoQuiero => write!(f, "truco_no_quiero"),
        }
    }
}

impl FromStr for Action {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(index) = s.strip_prefix("play_card_") {
            let index: usize = index.parse().map_err(|_| {
                DomainError::validation(
                    ValidationKind::ParseAction,
                    format!("Bad card index in action: {s}"),
                )
            })?;
            return Ok(Action::PlayCard(index));
        }
        match s {
            "call_envido" => Ok(Action::CallEnvido),
            "call_real_envido" => Ok(Action::CallRealEnvido),
            "call_falta_envido" => Ok(Action::CallFaltaEnvido),
            "envido_quiero" => Ok(Action::EnvidoQuiero),
            "envido_no_quiero" => Ok(Action::EnvidoNoQuiero),
            "call_truco" => Ok(Action::CallTruco),
            "call_retruco" => Ok(Action::CallRetruco),
            "call_vale_4" => Ok(Action::CallValeCuatro),
            "truco_quiero" => Ok(Action::TrucoQuiero),
            "truco_no_quiero" => Ok(Action::TrucoNoQuiero),
            _ => Err(DomainError::validation(
                ValidationKind::ParseAction,
                format!("Unknown action: {s}"),
            )),
        }
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Action>().map_err(|e| D::Error::custom(e.to_string()))
    }
}

/// What an accepted action did, for the caller and the adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Narrative of everything this action triggered, newest events last.
    pub message: String,
    /// The hand was settled (by tricks or by a declined Truco).
    pub hand_finished: bool,
    /// The match reached its target score.
    pub game_over: bool,
}

/// Actions `seat` may take right now. Empty when it is not their turn or no
/// hand is in progress.
pub fn legal_actions(state: &MatchState, seat: Seat) -> Vec<Action> {
    if state.phase != Phase::Playing || state.round.turn != seat {
        return Vec::new();
    }

    let round = &state.round;
    let mut actions = Vec::new();

    match round.waiting_for {
        Some(PendingBid::Envido) => {
            for target in envido::escalations(round.envido.level) {
                actions.push(match target {
                    envido::EnvidoLevel::Envido | envido::EnvidoLevel::EnvidoEnvido => {
                        Action::CallEnvido
                    }
                    envido::EnvidoLevel::FaltaEnvido => Action::CallFaltaEnvido,
                    _ => Action::CallRealEnvido,
                });
            }
            actions.push(Action::EnvidoQuiero);
            actions.push(Action::EnvidoNoQuiero);
        }
        Some(PendingBid::Truco) => {
            // The responder may counter-raise instead of answering.
            match round.truco.level {
                TrucoLevel::Truco => actions.push(Action::CallRetruco),
                TrucoLevel::Retruco => actions.push(Action::CallValeCuatro),
                _ => {}
            }
            actions.push(Action::TrucoQuiero);
            actions.push(Action::TrucoNoQuiero);
        }
        None => {
            for index in 0..round.hands[seat.index()].len() {
                actions.push(Action::PlayCard(index));
            }

            // Envido opens only before any card hits the table and before
            // any Truco call, once per hand.
            let no_card_played = round.played.iter().all(|p| p.is_empty());
            if !round.envido.played
                && no_card_played
                && round.truco.level == TrucoLevel::NotCalled
            {
                actions.push(Action::CallEnvido);
                actions.push(Action::CallRealEnvido);
                actions.push(Action::CallFaltaEnvido);
            }

            match round.truco.level {
                TrucoLevel::NotCalled => actions.push(Action::CallTruco),
                level if round.truco.raise_turn == Some(seat) => {
                    match truco::next_level(level) {
                        Some(TrucoLevel::Retruco) => actions.push(Action::CallRetruco),
                        Some(TrucoLevel::ValeCuatro) => actions.push(Action::CallValeCuatro),
                        _ => {}
                    }
                }
                _ => {}
            }
        }
    }
    actions
}

/// Validate and apply one action for `seat`.
///
/// On `Err` the state is untouched; rule violations never panic. A successful
/// play may cascade (trick resolution, hand settlement, redeal, game over) —
/// everything happens before this returns.
pub fn apply_action(
    state: &mut MatchState,
    rng: &mut MatchRng,
    seat: Seat,
    action: Action,
) -> Result<ActionOutcome, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "No hand in progress",
        ));
    }
    if state.round.turn != seat {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Not your turn",
        ));
    }
    if !legal_actions(state, seat).contains(&action) {
        return Err(DomainError::validation(
            ValidationKind::InvalidAction,
            format!("Action {action} is not available"),
        ));
    }

    let log_mark = state.log.len();
    let hand_before = state.hand_no;

    match action {
        Action::PlayCard(index) => {
            tricks::play_card(state, rng, seat, index)?;
        }
        Action::CallEnvido | Action::CallRealEnvido | Action::CallFaltaEnvido => {
            bidding::call_envido(state, seat, action)?;
        }
        Action::EnvidoQuiero => bidding::respond_envido(state, seat, true)?,
        Action::EnvidoNoQuiero => bidding::respond_envido(state, seat, false)?,
        Action::CallTruco | Action::CallRetruco | Action::CallValeCuatro => {
            bidding::call_truco(state, seat)?;
        }
        Action::TrucoQuiero => bidding::respond_truco(state, rng, seat, true)?,
        Action::TrucoNoQuiero => bidding::respond_truco(state, rng, seat, false)?,
    }

    let game_over = state.phase == Phase::GameOver;
    Ok(ActionOutcome {
        message: state.log[log_mark..].join(". "),
        hand_finished: state.hand_no != hand_before,
        game_over,
    })
}
