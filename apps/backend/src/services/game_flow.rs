//! GameFlow: one live match, its RNG, and its two participants.
//!
//! This is the surface the adapter talks to. It owns the `MatchState`,
//! applies externally submitted actions, and after every accepted action
//! keeps invoking the seat-on-turn's controller until someone has nothing to
//! volunteer (the externally driven seat) or the match ends. Everything runs
//! to completion synchronously; the caller serializes access.

use tracing::{debug, info, warn};

use crate::ai::{ExternalPlayer, HeuristicBot, PlayerController};
use crate::domain::actions::{apply_action, ActionOutcome};
use crate::domain::dealing::start_match;
use crate::domain::snapshot::{snapshot_for, PlayerSnapshot};
use crate::domain::state::{MatchState, Phase, Seat, PLAYERS};
use crate::domain::{Action, MatchRng};
use crate::errors::domain::DomainError;

pub const DEFAULT_TARGET_SCORE: u8 = 30;

pub struct GameFlow {
    state: MatchState,
    rng: MatchRng,
    controllers: [Box<dyn PlayerController>; PLAYERS],
}

impl GameFlow {
    /// Standard two-party setup: an externally driven "Player" seat and the
    /// heuristic "Bot". `seed` fixes the whole match for replays.
    pub fn new(target_score: u8, seed: Option<u64>) -> Result<Self, DomainError> {
        Self::with_controllers(
            ["Player".to_string(), "Bot".to_string()],
            target_score,
            seed,
            [Box::new(ExternalPlayer), Box::new(HeuristicBot::new())],
        )
    }

    /// Custom participants, e.g. two bots for a simulated match. Automated
    /// seats start acting immediately, so a bot-vs-bot match runs to
    /// completion right here.
    pub fn with_controllers(
        names: [String; PLAYERS],
        target_score: u8,
        seed: Option<u64>,
        controllers: [Box<dyn PlayerController>; PLAYERS],
    ) -> Result<Self, DomainError> {
        let mut rng = match seed {
            Some(seed) => MatchRng::seeded(seed),
            None => MatchRng::from_entropy(),
        };
        let state = start_match(names, target_score, &mut rng)?;
        info!(target_score, seeded = seed.is_some(), "match started");

        let mut flow = Self {
            state,
            rng,
            controllers,
        };
        flow.run_automated();
        Ok(flow)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Read-only view for one seat; safe to call any number of times.
    pub fn snapshot(&self, seat: Seat) -> PlayerSnapshot {
        snapshot_for(&self.state, seat)
    }

    /// Apply one externally submitted action, then let automated seats play
    /// until the match waits on external input again (or ends).
    pub fn apply_action(
        &mut self,
        seat: Seat,
        action: Action,
    ) -> Result<ActionOutcome, DomainError> {
        let outcome = apply_action(&mut self.state, &mut self.rng, seat, action)?;
        debug!(%seat, %action, "external action applied");
        self.run_automated();
        Ok(outcome)
    }

    /// Pump the controller of whoever is on turn. The loop ends when a
    /// controller declines to act (the external seat) or the match leaves
    /// the playing phase; both are guaranteed to happen because every hand
    /// and negotiation is finite and scores only go up.
    fn run_automated(&mut self) {
        while self.state.phase == Phase::Playing {
            let seat = self.state.round.turn;
            let view = snapshot_for(&self.state, seat);
            let Some(action) = self.controllers[seat.index()].next_action(&view, &mut self.rng)
            else {
                break;
            };
            debug!(%seat, %action, "automated action");
            if let Err(err) = apply_action(&mut self.state, &mut self.rng, seat, action) {
                warn!(%seat, %action, %err, "controller chose an illegal action; ignoring");
                break;
            }
        }
    }
}
