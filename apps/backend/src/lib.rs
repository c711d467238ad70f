#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod domain;
pub mod error;
pub mod errors;
pub mod middleware;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use ai::{ExternalPlayer, HeuristicBot, PlayerController, RandomBot};
pub use domain::{
    Action, ActionOutcome, Card, MatchRng, MatchState, PendingBid, Phase, PlayerSnapshot, Rank,
    Seat, Suit, TrickOutcome,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::game_flow::GameFlow;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
