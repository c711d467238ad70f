//! Player controller trait definition.

use crate::domain::rng::MatchRng;
use crate::domain::snapshot::PlayerSnapshot;
use crate::domain::Action;

/// A participant in the match.
///
/// The engine calls `next_action` whenever it is this player's turn. The view
/// is the same per-seat snapshot the HTTP adapter serves; implementations
/// must pick from `view.valid_actions` (or return `None` to wait). All
/// randomness goes through the supplied [`MatchRng`] so matches replay
/// deterministically under a fixed seed.
pub trait PlayerController: Send {
    /// Choose the next action, or `None` if this player has nothing to
    /// volunteer (an externally driven player waits to be fed).
    fn next_action(&self, view: &PlayerSnapshot, rng: &mut MatchRng) -> Option<Action>;
}

/// A player whose moves arrive only via `apply_action` from the outside.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExternalPlayer;

impl PlayerController for ExternalPlayer {
    fn next_action(&self, _view: &PlayerSnapshot, _rng: &mut MatchRng) -> Option<Action> {
        None
    }
}
