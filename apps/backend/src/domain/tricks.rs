//! Card play, trick resolution, and hand-winner determination

use super::cards_logic::truco_value;
use super::cards_types::Card;
use super::rng::MatchRng;
use super::scoring::finish_hand;
use super::state::{MatchState, Seat, TrickOutcome};
use super::truco::{accepted_points, TrucoLevel};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Whether this play completed a trick (second card on the table).
    pub trick_completed: bool,
    /// Outcome of the completed trick, if one was completed.
    pub outcome: Option<TrickOutcome>,
    /// Winner of the hand, if this play resolved it.
    pub hand_winner: Option<Seat>,
}

/// Play the card at `index` of `seat`'s hand into the current trick.
///
/// Turn ownership, phase, and negotiation gating are enforced by the action
/// dispatcher; this function still validates the index against the hand.
pub fn play_card(
    state: &mut MatchState,
    rng: &mut MatchRng,
    seat: Seat,
    index: usize,
) -> Result<PlayCardResult, DomainError> {
    if index >= state.round.hands[seat.index()].len() {
        return Err(DomainError::validation(
            ValidationKind::InvalidAction,
            format!("No card at index {index}"),
        ));
    }

    let card = state.round.hands[seat.index()].remove(index);
    state.round.played[seat.index()].push(card);
    state.round.table.push((seat, card));
    let name = state.name(seat).to_string();
    state.push_log(format!("{name} plays {card}"));
    state.round.turn = seat.opponent();

    let mut result = PlayCardResult {
        trick_completed: false,
        outcome: None,
        hand_winner: None,
    };
    if state.round.table.len() < 2 {
        return Ok(result);
    }

    // Second card is down: resolve the trick.
    let outcome = resolve_table(&state.round.table);
    state.round.table.clear();
    state.round.outcomes.push(outcome);
    result.trick_completed = true;
    result.outcome = Some(outcome);

    match outcome {
        TrickOutcome::Winner(winner) => {
            // Winner of the trick leads the next one.
            state.round.turn = winner;
            let name = state.name(winner).to_string();
            state.push_log(format!("{name} wins trick {}", state.round.outcomes.len()));
        }
        TrickOutcome::Parda => {
            // After a parda the hand's mano leads.
            state.round.turn = state.round.mano;
            state.push_log(format!("Trick {} is parda", state.round.outcomes.len()));
        }
    }

    if let Some(winner) = hand_winner(&state.round.outcomes, state.round.mano) {
        result.hand_winner = Some(winner);
        let level = state.round.truco.level;
        let points = accepted_points(level);
        let reason = if level == TrucoLevel::NotCalled {
            "hand".to_string()
        } else {
            level.to_string()
        };
        finish_hand(state, rng, winner, points, &reason)?;
    }
    Ok(result)
}

/// Compare the two cards on the table by Truco value.
fn resolve_table(table: &[(Seat, Card)]) -> TrickOutcome {
    let (seat_a, card_a) = table[0];
    let (seat_b, card_b) = table[1];
    let (va, vb) = (truco_value(card_a), truco_value(card_b));
    if va > vb {
        TrickOutcome::Winner(seat_a)
    } else if vb > va {
        TrickOutcome::Winner(seat_b)
    } else {
        TrickOutcome::Parda
    }
}

/// Winner of the hand given the tricks so far, or `None` while undecided.
///
/// Checked after every trick: two trick-wins settle it outright. From the
/// second trick on, a single parda hands the win to whoever took the one
/// decided trick, and two pardas hand it to mano. A full three tricks with
/// none of the above falls back to most wins, mano on equality.
pub fn hand_winner(outcomes: &[TrickOutcome], mano: Seat) -> Option<Seat> {
    let wins = |seat: Seat| {
        outcomes
            .iter()
            .filter(|o| **o == TrickOutcome::Winner(seat))
            .count()
    };
    let p1 = wins(Seat::P1);
    let p2 = wins(Seat::P2);
    let pardas = outcomes.iter().filter(|o| **o == TrickOutcome::Parda).count();

    if p1 >= 2 {
        return Some(Seat::P1);
    }
    if p2 >= 2 {
        return Some(Seat::P2);
    }
    if outcomes.len() >= 2 {
        if pardas == 1 && p1 + p2 == 1 {
            return Some(if p1 == 1 { Seat::P1 } else { Seat::P2 });
        }
        if pardas >= 2 {
            return Some(mano);
        }
    }
    if outcomes.len() == 3 {
        return Some(match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => Seat::P1,
            std::cmp::Ordering::Less => Seat::P2,
            std::cmp::Ordering::Equal => mano,
        });
    }
    None
}
