//! Trick play and hand resolution, driven through `apply_action` with
//! forced hands.

use crate::domain::actions::{apply_action, legal_actions, Action};
use crate::domain::rng::MatchRng;
use crate::domain::state::{Phase, Seat, TrickOutcome};
use crate::domain::test_state_helpers::{hand_index, init_match};
use crate::errors::domain::{DomainError, ValidationKind};

fn play(state: &mut crate::domain::MatchState, rng: &mut MatchRng, seat: Seat, token: &str) {
    let index = hand_index(state, seat, token);
    apply_action(state, rng, seat, Action::PlayCard(index)).expect("legal play");
}

#[test]
fn two_straight_tricks_win_the_hand_for_one_point() {
    let mut state = init_match(&["1E", "1B", "3E"], &["4C", "5C", "6C"], 30);
    let mut rng = MatchRng::seeded(1);

    play(&mut state, &mut rng, Seat::P1, "1E");
    assert_eq!(state.round.turn, Seat::P2);
    play(&mut state, &mut rng, Seat::P2, "4C");
    // P1 took the trick and leads the next one.
    assert_eq!(state.round.outcomes, vec![TrickOutcome::Winner(Seat::P1)]);
    assert_eq!(state.round.turn, Seat::P1);

    play(&mut state, &mut rng, Seat::P1, "1B");
    play(&mut state, &mut rng, Seat::P2, "5C");

    // Hand settled at the base value and the next hand was dealt.
    assert_eq!(state.scores, [1, 0]);
    assert_eq!(state.hand_no, 2);
    assert_eq!(state.phase, Phase::Playing);
    assert_eq!(state.round.mano, Seat::P2);
    assert_eq!(state.round.turn, Seat::P2);
    assert_eq!(state.round.hands[0].len(), 3);
    assert!(state.round.outcomes.is_empty());
}

#[test]
fn parda_then_loss_goes_to_the_other_side() {
    // Trick 1 is parda (3 vs 3); mano leads again; P2 takes trick 2.
    let mut state = init_match(&["3E", "5E", "4E"], &["3B", "7C", "6B"], 30);
    let mut rng = MatchRng::seeded(2);

    play(&mut state, &mut rng, Seat::P1, "3E");
    play(&mut state, &mut rng, Seat::P2, "3B");
    assert_eq!(state.round.outcomes, vec![TrickOutcome::Parda]);
    // After a parda the hand's mano leads, not the last winner.
    assert_eq!(state.round.turn, Seat::P1);

    play(&mut state, &mut rng, Seat::P1, "5E");
    play(&mut state, &mut rng, Seat::P2, "7C");

    // Outcomes [parda, p2] resolve immediately in favor of P2.
    assert_eq!(state.scores, [0, 1]);
    assert_eq!(state.hand_no, 2);
}

#[test]
fn win_then_parda_ends_the_hand_immediately() {
    let mut state = init_match(&["1E", "3E", "4E"], &["4C", "3B", "5B"], 30);
    let mut rng = MatchRng::seeded(3);

    play(&mut state, &mut rng, Seat::P1, "1E");
    play(&mut state, &mut rng, Seat::P2, "4C");
    play(&mut state, &mut rng, Seat::P1, "3E");
    play(&mut state, &mut rng, Seat::P2, "3B");

    // [p1, parda] needs no third trick.
    assert_eq!(state.scores, [1, 0]);
    assert_eq!(state.hand_no, 2);
}

#[test]
fn double_parda_goes_to_mano() {
    let mut state = init_match(&["3E", "2E", "7B"], &["3B", "2B", "7C"], 30);
    let mut rng = MatchRng::seeded(4);

    play(&mut state, &mut rng, Seat::P1, "3E");
    play(&mut state, &mut rng, Seat::P2, "3B");
    play(&mut state, &mut rng, Seat::P1, "2E");
    play(&mut state, &mut rng, Seat::P2, "2B");

    // Two pardas: the hand's mano (P1) takes it.
    assert_eq!(state.scores, [1, 0]);
    assert_eq!(state.hand_no, 2);
}

#[test]
fn split_tricks_resolve_on_the_third() {
    let mut state = init_match(&["1E", "4E", "1B"], &["4C", "1O", "5B"], 30);
    let mut rng = MatchRng::seeded(5);

    play(&mut state, &mut rng, Seat::P1, "1E");
    play(&mut state, &mut rng, Seat::P2, "4C");
    assert_eq!(state.round.turn, Seat::P1);

    play(&mut state, &mut rng, Seat::P1, "4E");
    play(&mut state, &mut rng, Seat::P2, "1O");
    // P2 took trick 2 and leads trick 3.
    assert_eq!(state.round.turn, Seat::P2);

    play(&mut state, &mut rng, Seat::P2, "5B");
    play(&mut state, &mut rng, Seat::P1, "1B");

    assert_eq!(state.scores, [1, 0]);
    assert_eq!(state.hand_no, 2);
}

#[test]
fn playing_moves_the_card_from_hand_to_history() {
    let mut state = init_match(&["1E", "1B", "3E"], &["4C", "5C", "6C"], 30);
    let mut rng = MatchRng::seeded(6);

    apply_action(&mut state, &mut rng, Seat::P1, Action::PlayCard(1)).unwrap();
    assert_eq!(state.round.hands[0].len(), 2);
    assert_eq!(state.round.played[0].len(), 1);
    assert_eq!(state.round.played[0][0], "1B".parse().unwrap());
    assert_eq!(state.round.table.len(), 1);
}

#[test]
fn out_of_turn_and_bad_index_are_rejected_without_side_effects() {
    let mut state = init_match(&["1E", "1B", "3E"], &["4C", "5C", "6C"], 30);
    let mut rng = MatchRng::seeded(7);
    let before = state.clone();

    let err = apply_action(&mut state, &mut rng, Seat::P2, Action::PlayCard(0)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::OutOfTurn, _)
    ));
    assert_eq!(state, before);

    let err = apply_action(&mut state, &mut rng, Seat::P1, Action::PlayCard(3)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidAction, _)
    ));
    assert_eq!(state, before);
}

#[test]
fn only_the_turn_holder_has_legal_actions() {
    let state = init_match(&["1E", "1B", "3E"], &["4C", "5C", "6C"], 30);
    assert!(!legal_actions(&state, Seat::P1).is_empty());
    assert!(legal_actions(&state, Seat::P2).is_empty());
}
