//! Public per-seat snapshot API for observing match state.
//!
//! The snapshot only contains what its seat is allowed to see: the opponent's
//! hand stays hidden, their precomputed Envido score too. Both the HTTP
//! adapter and the automated players consume this view.

use serde::{Deserialize, Serialize};

use super::actions::{legal_actions, Action};
use super::cards_types::Card;
use super::envido::EnvidoLevel;
use super::state::{MatchState, PendingBid, Phase, Seat, TrickOutcome};
use super::truco::TrucoLevel;

/// A card still in the viewer's hand, addressable by play index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCard {
    pub index: usize,
    pub card: Card,
    pub display: String,
}

/// A card on the table for the current trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCard {
    pub seat: Seat,
    pub card: Card,
    pub display: String,
}

/// Everything one seat may know about the match right now.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub phase: Phase,
    pub hand_number: u32,
    pub my_score: u8,
    pub opponent_score: u8,
    pub target_score: u8,
    /// Own hand in deal order; indices feed `play_card_<index>`.
    pub hand: Vec<HandCard>,
    pub my_played: Vec<Card>,
    pub opponent_played: Vec<Card>,
    pub table: Vec<TableCard>,
    pub is_my_turn: bool,
    pub valid_actions: Vec<Action>,
    pub envido_state: EnvidoLevel,
    pub truco_state: TrucoLevel,
    /// Set while a negotiation awaits a response.
    pub waiting_for_response: Option<PendingBid>,
    pub my_envido_points: u8,
    pub trick_history: Vec<TrickOutcome>,
    pub mano: Seat,
    pub log: Vec<String>,
}

/// Build the snapshot for one seat. Read-only: calling this any number of
/// times changes nothing.
pub fn snapshot_for(state: &MatchState, seat: Seat) -> PlayerSnapshot {
    let round = &state.round;
    let opponent = seat.opponent();

    let hand = round.hands[seat.index()]
        .iter()
        .enumerate()
        .map(|(index, card)| HandCard {
            index,
            card: *card,
            display: card.to_string(),
        })
        .collect();
    let table = round
        .table
        .iter()
        .map(|(seat, card)| TableCard {
            seat: *seat,
            card: *card,
            display: card.to_string(),
        })
        .collect();

    PlayerSnapshot {
        phase: state.phase,
        hand_number: state.hand_no,
        my_score: state.score(seat),
        opponent_score: state.score(opponent),
        target_score: state.target_score,
        hand,
        my_played: round.played[seat.index()].clone(),
        opponent_played: round.played[opponent.index()].clone(),
        table,
        is_my_turn: state.phase == Phase::Playing && round.turn == seat,
        valid_actions: legal_actions(state, seat),
        envido_state: round.envido.level,
        truco_state: round.truco.level,
        waiting_for_response: round.waiting_for,
        my_envido_points: round.envido.points[seat.index()],
        trick_history: round.outcomes.clone(),
        mano: round.mano,
        log: state.log.clone(),
    }
}
