//! Envido and Truco negotiations: calls, acceptances, rejections
//!
//! Legality (turn ownership, phase, which calls are open) is checked by the
//! action dispatcher before any of these run; each function only applies the
//! transition and its bookkeeping.

use super::actions::Action;
use super::envido::{self, EnvidoLevel};
use super::rng::MatchRng;
use super::scoring::{award_points, check_game_over, finish_hand};
use super::state::{MatchState, PendingBid, Seat};
use super::truco::{self, TrucoLevel};
use crate::errors::domain::{DomainError, ValidationKind};

/// Target Envido level for an escalation call made at the current level.
pub fn envido_target(level: EnvidoLevel, action: Action) -> Option<EnvidoLevel> {
    let target = match (action, level) {
        (Action::CallEnvido, EnvidoLevel::NotCalled) => EnvidoLevel::Envido,
        (Action::CallEnvido, EnvidoLevel::Envido) => EnvidoLevel::EnvidoEnvido,
        (Action::CallRealEnvido, EnvidoLevel::NotCalled | EnvidoLevel::Envido) => {
            EnvidoLevel::RealEnvido
        }
        (Action::CallRealEnvido, EnvidoLevel::EnvidoEnvido) => EnvidoLevel::EnvidoRealEnvido,
        (Action::CallFaltaEnvido, _) => EnvidoLevel::FaltaEnvido,
        _ => return None,
    };
    envido::escalations(level).contains(&target).then_some(target)
}

/// Raise (or open) the Envido bid.
pub fn call_envido(state: &mut MatchState, seat: Seat, action: Action) -> Result<(), DomainError> {
    let level = state.round.envido.level;
    let target = envido_target(level, action).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidAction,
            format!("Cannot raise {level} with {action}"),
        )
    })?;

    state.round.envido.level = target;
    state.round.envido.history.push(target);
    state.round.waiting_for = Some(PendingBid::Envido);
    state.round.turn = seat.opponent();
    let name = state.name(seat).to_string();
    state.push_log(format!("{name} calls {target}"));
    Ok(())
}

/// Accept or reject the pending Envido bid. Either way the negotiation is
/// spent for the rest of the hand.
pub fn respond_envido(state: &mut MatchState, seat: Seat, accept: bool) -> Result<(), DomainError> {
    let level = state.round.envido.level;
    state.round.envido.played = true;
    state.round.waiting_for = None;
    state.round.turn = seat.opponent();

    if accept {
        let name = state.name(seat).to_string();
        state.push_log(format!("{name} accepts {level}"));

        let [p1, p2] = state.round.envido.points;
        let winner = match p1.cmp(&p2) {
            std::cmp::Ordering::Greater => Seat::P1,
            std::cmp::Ordering::Less => Seat::P2,
            std::cmp::Ordering::Equal => state.round.mano,
        };
        let leader_score = state.score(Seat::P1).max(state.score(Seat::P2));
        let points = envido::quiero_points(level, leader_score, state.target_score);

        state.round.envido.winner = Some(winner);
        let (n1, n2) = (
            state.name(Seat::P1).to_string(),
            state.name(Seat::P2).to_string(),
        );
        state.push_log(format!("Envido: {n1} {p1} - {n2} {p2}"));
        award_points(state, winner, points, &level.to_string());
    } else {
        let winner = seat.opponent();
        let points = envido::no_quiero_points(level);
        state.round.envido.winner = Some(winner);
        let name = state.name(seat).to_string();
        state.push_log(format!("{name} declines {level}"));
        award_points(state, winner, points, &format!("{level} declined"));
    }

    check_game_over(state);
    Ok(())
}

/// Raise (or open) the Truco bid. The level is committed immediately and the
/// caller becomes the owner, awaiting the opponent's response.
pub fn call_truco(state: &mut MatchState, seat: Seat) -> Result<(), DomainError> {
    let level = state.round.truco.level;
    let target = truco::next_level(level).ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidAction,
            format!("Cannot raise beyond {level}"),
        )
    })?;

    state.round.truco.level = target;
    state.round.truco.owner = Some(seat);
    state.round.truco.raise_turn = None;
    state.round.waiting_for = Some(PendingBid::Truco);
    state.round.turn = seat.opponent();
    let name = state.name(seat).to_string();
    state.push_log(format!("{name} calls {target}"));
    Ok(())
}

/// Accept or reject the pending Truco bid.
///
/// Acceptance hands the raise privilege to the accepter (spent once Vale
/// Cuatro stands). Rejection ends the hand immediately, conceding one point
/// less than the rejected level is worth.
pub fn respond_truco(
    state: &mut MatchState,
    rng: &mut MatchRng,
    seat: Seat,
    accept: bool,
) -> Result<(), DomainError> {
    let level = state.round.truco.level;
    state.round.waiting_for = None;

    if accept {
        state.round.truco.raise_turn = if level == TrucoLevel::ValeCuatro {
            None
        } else {
            Some(seat)
        };
        state.round.turn = seat.opponent();
        let name = state.name(seat).to_string();
        state.push_log(format!("{name} accepts {level}"));
        return Ok(());
    }

    let winner = seat.opponent();
    let points = truco::rejected_points(level);
    let name = state.name(seat).to_string();
    state.push_log(format!("{name} declines {level}"));
    finish_hand(state, rng, winner, points, &format!("{level} declined"))
}
