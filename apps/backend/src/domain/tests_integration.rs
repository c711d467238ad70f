//! End-to-end matches driven through the public engine surface.

use std::collections::HashSet;

use crate::domain::actions::{apply_action, legal_actions, Action};
use crate::domain::cards_types::Card;
use crate::domain::dealing::start_match;
use crate::domain::rng::MatchRng;
use crate::domain::snapshot::snapshot_for;
use crate::domain::state::{MatchState, Phase, Seat};
use crate::domain::test_state_helpers::init_match;

#[test]
fn plain_hand_win_scores_one_point_and_advances_the_hand() {
    let mut state = init_match(&["1E", "1B", "3E"], &["4C", "5C", "6C"], 15);
    let mut rng = MatchRng::seeded(1);

    for action in [
        (Seat::P1, Action::PlayCard(0)),
        (Seat::P2, Action::PlayCard(0)),
        (Seat::P1, Action::PlayCard(0)),
        (Seat::P2, Action::PlayCard(0)),
    ] {
        apply_action(&mut state, &mut rng, action.0, action.1).unwrap();
    }

    assert_eq!(state.scores, [1, 0]);
    assert_eq!(state.hand_no, 2);
    assert_eq!(state.phase, Phase::Playing);
}

/// Drive a whole match with a fixed policy: always play the first card,
/// never bid. Checks the engine's bookkeeping at every step.
#[test]
fn full_match_conserves_cards_and_terminates() {
    let mut rng = MatchRng::seeded(42);
    let mut state = start_match(["Player".into(), "Bot".into()], 3, &mut rng).unwrap();

    let mut steps = 0;
    while state.phase == Phase::Playing {
        steps += 1;
        assert!(steps < 500, "match did not terminate");

        let seat = state.round.turn;
        let legal = legal_actions(&state, seat);
        assert!(!legal.is_empty(), "turn holder must have options");
        assert!(legal_actions(&state, seat.opponent()).is_empty());

        // Cards are conserved within the hand.
        let held: usize = state.round.hands.iter().map(Vec::len).sum();
        let played: usize = state.round.played.iter().map(Vec::len).sum();
        assert_eq!(held + played, 6);
        let distinct: HashSet<Card> = state
            .round
            .hands
            .iter()
            .chain(state.round.played.iter())
            .flat_map(|cards| cards.iter().copied())
            .collect();
        assert_eq!(distinct.len(), 6);

        let play = legal
            .iter()
            .find(|a| matches!(a, Action::PlayCard(_)))
            .copied()
            .expect("no negotiation was opened");
        apply_action(&mut state, &mut rng, seat, play).unwrap();
    }

    assert_eq!(state.phase, Phase::GameOver);
    let winner_score = state.scores.iter().max().copied().unwrap();
    assert!(winner_score >= 3);
    // One point per hand: hand counter trails the total points by one.
    let total: u8 = state.scores.iter().sum();
    assert_eq!(u32::from(total), state.hand_no - 1);
}

#[test]
fn scores_never_move_after_game_over() {
    let mut state = init_match(&["1E", "1B", "3E"], &["4C", "5C", "6C"], 1);
    let mut rng = MatchRng::seeded(9);

    for action in [
        (Seat::P1, Action::PlayCard(0)),
        (Seat::P2, Action::PlayCard(0)),
        (Seat::P1, Action::PlayCard(0)),
        (Seat::P2, Action::PlayCard(0)),
    ] {
        apply_action(&mut state, &mut rng, action.0, action.1).unwrap();
    }
    assert_eq!(state.phase, Phase::GameOver);
    let frozen = state.scores;

    for seat in [Seat::P1, Seat::P2] {
        assert!(legal_actions(&state, seat).is_empty());
        for action in [Action::PlayCard(0), Action::CallTruco, Action::CallEnvido] {
            let _ = apply_action(&mut state, &mut rng, seat, action).unwrap_err();
        }
    }
    assert_eq!(state.scores, frozen);
}

#[test]
fn snapshots_track_both_seats_through_a_trick() {
    let mut state = init_match(&["1E", "1B", "3E"], &["4C", "5C", "6C"], 30);
    let mut rng = MatchRng::seeded(3);

    apply_action(&mut state, &mut rng, Seat::P1, Action::PlayCard(0)).unwrap();
    let p1 = snapshot_for(&state, Seat::P1);
    let p2 = snapshot_for(&state, Seat::P2);

    assert!(!p1.is_my_turn);
    assert!(p2.is_my_turn);
    assert_eq!(p1.hand.len(), 2);
    assert_eq!(p2.opponent_played.len(), 1);
    assert_eq!(p1.table.len(), 1);
    assert_eq!(p1.table[0].seat, Seat::P1);
    assert_eq!(p1.table[0].display, "1 de Espada");
    // The narrative log is shared verbatim.
    assert_eq!(p1.log, p2.log);
    assert!(p1.log.iter().any(|l| l.contains("plays 1 de Espada")));
}

fn outcome_message_of(state: &mut MatchState, rng: &mut MatchRng) -> String {
    let seat = state.round.turn;
    let legal = legal_actions(state, seat);
    let play = legal
        .iter()
        .find(|a| matches!(a, Action::PlayCard(_)))
        .copied()
        .unwrap();
    apply_action(state, rng, seat, play).unwrap().message
}

#[test]
fn outcomes_report_what_the_action_triggered() {
    let mut state = init_match(&["1E", "1B", "3E"], &["4C", "5C", "6C"], 30);
    let mut rng = MatchRng::seeded(4);

    let first = outcome_message_of(&mut state, &mut rng);
    assert!(first.contains("Player plays"));
    assert!(!first.contains("wins trick"));

    let second = outcome_message_of(&mut state, &mut rng);
    assert!(second.contains("Bot plays"));
    assert!(second.contains("Player wins trick 1"));

    let _third = outcome_message_of(&mut state, &mut rng);
    let fourth_state_hand = state.hand_no;
    let fourth = outcome_message_of(&mut state, &mut rng);
    assert!(fourth.contains("wins 1 point"));
    assert!(fourth.contains("Hand 2 dealt"));
    assert_eq!(state.hand_no, fourth_state_hand + 1);
}
