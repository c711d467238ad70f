//! Score accounting: the single place match points are awarded

use super::dealing::start_next_hand;
use super::rng::MatchRng;
use super::state::{MatchState, Phase, Seat};
use crate::errors::domain::DomainError;

/// Add points to a seat's score and log the award.
pub fn award_points(state: &mut MatchState, seat: Seat, points: u8, reason: &str) {
    state.scores[seat.index()] = state.scores[seat.index()].saturating_add(points);
    let name = state.name(seat).to_string();
    state.push_log(format!("{name} wins {points} point(s) ({reason})"));
}

/// Move to `GameOver` if either side reached the target score.
/// Returns true when the match just ended.
pub fn check_game_over(state: &mut MatchState) -> bool {
    if state.phase == Phase::GameOver {
        return true;
    }
    let winner = [Seat::P1, Seat::P2]
        .into_iter()
        .find(|s| state.score(*s) >= state.target_score);
    if let Some(seat) = winner {
        state.phase = Phase::GameOver;
        let name = state.name(seat).to_string();
        let (p1, p2) = (state.score(Seat::P1), state.score(Seat::P2));
        state.push_log(format!("Game over: {name} wins {p1}-{p2}"));
        return true;
    }
    false
}

/// Settle a finished hand: award the points, advance the hand counter, and
/// either end the match or deal the next hand.
pub fn finish_hand(
    state: &mut MatchState,
    rng: &mut MatchRng,
    winner: Seat,
    points: u8,
    reason: &str,
) -> Result<(), DomainError> {
    state.phase = Phase::RoundEnd;
    award_points(state, winner, points, reason);
    state.hand_no += 1;
    if check_game_over(state) {
        return Ok(());
    }
    start_next_hand(state, rng)
}
