//! Tick callback that feeds the board broadcast state.
//!
//! After each tick, this callback broadcasts a [`TickUpdate`] to all
//! connected consumers and refreshes the in-memory [`BoardSnapshot`].
//! When the favorite takes the lead, it builds a celebration burst
//! schedule and spawns a playback task.

use liveboard_core::celebration;
use liveboard_core::runner::TickCallback;
use liveboard_core::tick::{SimulationState, TickSummary};
use liveboard_types::CelebrationId;
use tracing::{debug, info};

use crate::board::{BoardBroadcast, BoardState, TickUpdate};
use crate::celebrate;

/// Callback that bridges the tick cycle to board consumers.
pub struct BoardCallback {
    board: BoardState,
}

impl BoardCallback {
    /// Create a new board callback backed by the given board state.
    pub const fn new(board: BoardState) -> Self {
        Self { board }
    }
}

impl TickCallback for BoardCallback {
    fn on_tick(&mut self, summary: &TickSummary, _state: &SimulationState) {
        let update = TickUpdate::from_summary(summary);
        let receivers = self.board.broadcast(&BoardBroadcast::Tick(update));
        debug!(tick = summary.tick, receivers, "Tick update sent");

        // Refresh the snapshot. Use try_write to avoid blocking the tick
        // loop -- if a consumer holds the read lock, skip this update;
        // the next tick will catch up.
        if let Ok(mut snap) = self.board.snapshot.try_write() {
            snap.current_tick = summary.tick;
            snap.time_label = summary.time_label.clone();
            snap.standings = summary.standings.clone();
            if let Some(ref change) = summary.leader_change {
                snap.last_leader_change = Some(change.clone());
            }
        }

        // A fresh leader change launches a celebration. Playback runs on
        // its own task so long effects never delay the next tick.
        if let Some(ref change) = summary.leader_change {
            info!(
                tick = change.tick,
                leader = %change.name,
                "Favorite took the lead, starting celebration"
            );
            let mut rng = rand::rng();
            let bursts = celebration::burst_schedule(
                CelebrationId::new(),
                celebration::DEFAULT_DURATION_MS,
                celebration::DEFAULT_INTERVAL_MS,
                &mut rng,
            );
            let board = self.board.clone();
            tokio::spawn(celebrate::play(board, bursts));
        }
    }
}
