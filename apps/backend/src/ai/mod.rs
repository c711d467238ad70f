//! Player module - the participants that feed actions into the engine.
//!
//! This module provides:
//! - The [`PlayerController`] trait: one capability, "provide the next action
//!   given what you can see"
//! - [`ExternalPlayer`]: driven from outside, never volunteers a move
//! - [`HeuristicBot`]: the automated opponent
//! - [`RandomBot`]: uniform legal play, a baseline for tests and simulations

mod heuristic;
mod random;
mod trait_def;

pub use heuristic::HeuristicBot;
pub use random::RandomBot;
pub use trait_def::{ExternalPlayer, PlayerController};
