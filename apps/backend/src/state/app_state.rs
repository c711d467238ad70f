//! Application state containing shared resources

use parking_lot::Mutex;

use crate::services::game_flow::GameFlow;

/// Shared state for the HTTP layer: at most one live match.
///
/// The engine performs no internal locking; this mutex is the request-level
/// serialization for everything that touches the match.
#[derive(Default)]
pub struct AppState {
    pub game: Mutex<Option<GameFlow>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
