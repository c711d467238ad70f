//! Hand setup: fresh deck, dealing, Envido precomputation

use super::deck::Deck;
use super::envido::calculate_envido_points;
use super::rng::MatchRng;
use super::state::{
    mano_for_hand, EnvidoState, MatchState, Phase, RoundState, Seat, TrucoState, PLAYERS,
};
use crate::errors::domain::DomainError;

/// Cards dealt to each seat.
pub const HAND_SIZE: usize = 3;

/// Deal one hand from a freshly shuffled deck. Both Envido scores are
/// computed here, before any card is played, and never recomputed.
pub fn deal_round(rng: &mut MatchRng, mano: Seat) -> Result<RoundState, DomainError> {
    let mut deck = Deck::new(rng);
    let hands = [deck.deal(HAND_SIZE)?, deck.deal(HAND_SIZE)?];
    let points = [
        calculate_envido_points(&hands[0])?,
        calculate_envido_points(&hands[1])?,
    ];

    Ok(RoundState {
        hands,
        played: [Vec::with_capacity(HAND_SIZE), Vec::with_capacity(HAND_SIZE)],
        table: Vec::with_capacity(PLAYERS),
        outcomes: Vec::with_capacity(HAND_SIZE),
        mano,
        turn: mano,
        envido: EnvidoState::new(points),
        truco: TrucoState::empty(),
        waiting_for: None,
    })
}

/// Create a match and deal its first hand.
pub fn start_match(
    names: [String; PLAYERS],
    target_score: u8,
    rng: &mut MatchRng,
) -> Result<MatchState, DomainError> {
    let hand_no = 1;
    let mano = mano_for_hand(hand_no);
    let round = deal_round(rng, mano)?;

    let mut state = MatchState {
        phase: Phase::Playing,
        hand_no,
        target_score,
        scores: [0; PLAYERS],
        names,
        round,
        log: Vec::new(),
    };
    state.push_log(format!(
        "Hand {} dealt. {} is mano",
        state.hand_no,
        state.name(mano)
    ));
    Ok(state)
}

/// Replace the finished hand with the next one. `hand_no` must already have
/// been advanced by the caller.
pub fn start_next_hand(state: &mut MatchState, rng: &mut MatchRng) -> Result<(), DomainError> {
    state.phase = Phase::Dealing;
    let mano = mano_for_hand(state.hand_no);
    state.round = deal_round(rng, mano)?;
    state.phase = Phase::Playing;
    state.push_log(format!(
        "Hand {} dealt. {} is mano",
        state.hand_no,
        state.name(mano)
    ));
    Ok(())
}
