//! HeuristicBot — the default automated opponent.
//!
//! Decision policy, in priority order:
//! 1. Answer a pending Envido from the precomputed hand score.
//! 2. Open the Envido when the hand score is strong and the call is legal.
//! 3. Answer a pending Truco: accept on a top-tier card, occasionally bluff
//!    an accept, otherwise decline.
//! 4. Occasionally escalate Retruco / Vale Cuatro when allowed.
//! 5. Play a card: usually the strongest in hand, sometimes a random one.
//! 6. Fall back to a uniform choice among whatever is legal.
//!
//! All randomness is drawn from the injected [`MatchRng`]; under a fixed seed
//! the bot is fully deterministic.

use crate::ai::PlayerController;
use crate::domain::cards_logic::truco_value;
use crate::domain::rng::MatchRng;
use crate::domain::snapshot::PlayerSnapshot;
use crate::domain::{Action, PendingBid};

/// Accept a pending Envido at or above this hand score.
const ACCEPT_ENVIDO_AT: u8 = 26;
/// Open the Envido at or above this hand score.
const CALL_ENVIDO_AT: u8 = 28;
/// Accept a pending Truco when holding a card at least this strong.
const STRONG_CARD: u8 = 10;
/// Chance to accept a Truco on a weak hand anyway.
const BLUFF_ACCEPT: f64 = 0.2;
/// Chance to raise Retruco when allowed.
const RAISE_RETRUCO: f64 = 0.1;
/// Chance to raise Vale Cuatro when allowed.
const RAISE_VALE_CUATRO: f64 = 0.05;
/// Chance to play a random card instead of the strongest.
const WILD_PLAY: f64 = 0.15;

#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicBot;

impl HeuristicBot {
    pub fn new() -> Self {
        Self
    }

    /// Index of the strongest card in hand.
    fn strongest_index(view: &PlayerSnapshot) -> Option<usize> {
        view.hand
            .iter()
            .max_by_key(|hc| truco_value(hc.card))
            .map(|hc| hc.index)
    }

    fn holds_strong_card(view: &PlayerSnapshot) -> bool {
        view.hand.iter().any(|hc| truco_value(hc.card) >= STRONG_CARD)
    }
}

impl PlayerController for HeuristicBot {
    fn next_action(&self, view: &PlayerSnapshot, rng: &mut MatchRng) -> Option<Action> {
        let legal = &view.valid_actions;
        if legal.is_empty() {
            return None;
        }

        // 1. Pending Envido: answer from the precomputed score.
        if view.waiting_for_response == Some(PendingBid::Envido) {
            return Some(if view.my_envido_points >= ACCEPT_ENVIDO_AT {
                Action::EnvidoQuiero
            } else {
                Action::EnvidoNoQuiero
            });
        }

        // 2. Open the Envido on a strong score.
        if view.my_envido_points >= CALL_ENVIDO_AT && legal.contains(&Action::CallEnvido) {
            return Some(Action::CallEnvido);
        }

        // 3. Pending Truco: card strength first, bluff second.
        if view.waiting_for_response == Some(PendingBid::Truco) {
            return Some(if Self::holds_strong_card(view) || rng.chance(BLUFF_ACCEPT) {
                Action::TrucoQuiero
            } else {
                Action::TrucoNoQuiero
            });
        }

        // 4. Occasional escalation.
        if legal.contains(&Action::CallRetruco) && rng.chance(RAISE_RETRUCO) {
            return Some(Action::CallRetruco);
        }
        if legal.contains(&Action::CallValeCuatro) && rng.chance(RAISE_VALE_CUATRO) {
            return Some(Action::CallValeCuatro);
        }

        // 5. Card play: strongest card, with a wild streak.
        let plays: Vec<Action> = legal
            .iter()
            .filter(|a| matches!(a, Action::PlayCard(_)))
            .copied()
            .collect();
        if !plays.is_empty() {
            if rng.chance(WILD_PLAY) {
                return rng.choose(&plays).copied();
            }
            if let Some(index) = Self::strongest_index(view) {
                return Some(Action::PlayCard(index));
            }
        }

        // 6. Uniform fallback.
        rng.choose(legal).copied()
    }
}
