//! RandomBot - makes uniformly random legal moves.
//!
//! A baseline participant for tests and simulations: it picks any action the
//! engine currently allows, nothing more. Because it only ever reads
//! `view.valid_actions`, it stays legal by construction.

use crate::ai::PlayerController;
use crate::domain::rng::MatchRng;
use crate::domain::snapshot::PlayerSnapshot;
use crate::domain::Action;

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomBot;

impl RandomBot {
    pub fn new() -> Self {
        Self
    }
}

impl PlayerController for RandomBot {
    fn next_action(&self, view: &PlayerSnapshot, rng: &mut MatchRng) -> Option<Action> {
        rng.choose(&view.valid_actions).copied()
    }
}
