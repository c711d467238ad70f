//! Domain layer: the Truco rules engine, pure of I/O.

pub mod actions;
pub mod bidding;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod deck;
pub mod envido;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tricks;
pub mod truco;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_props_envido;
#[cfg(test)]
mod tests_tricks;

// Re-exports for ergonomics
pub use actions::{apply_action, legal_actions, Action, ActionOutcome};
pub use cards_logic::{envido_value, truco_value};
pub use cards_types::{Card, Rank, Suit};
pub use envido::{calculate_envido_points, EnvidoLevel};
pub use rng::MatchRng;
pub use snapshot::{snapshot_for, PlayerSnapshot};
pub use state::{MatchState, PendingBid, Phase, Seat, TrickOutcome};
pub use truco::TrucoLevel;
