//! Shared broadcast state for board consumers.
//!
//! [`BoardState`] holds the broadcast channel for tick updates and
//! celebration bursts, plus an in-memory snapshot of the latest board
//! view. Consumers subscribe to the channel for live updates and read
//! the snapshot for catch-up on connect.

use std::sync::Arc;

use liveboard_core::tick::TickSummary;
use liveboard_types::{CelebrationBurst, LeaderChange, Standing};
use tokio::sync::{RwLock, broadcast};

/// Capacity of the broadcast channel for board messages.
///
/// If a subscriber falls behind by more than this many messages it will
/// receive a [`broadcast::error::RecvError::Lagged`] and skip to the
/// newest message.
const BROADCAST_CAPACITY: usize = 256;

/// JSON-serializable tick update pushed to board consumers.
///
/// A lightweight projection of the core [`TickSummary`] carrying only
/// what a rendering surface needs per tick.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TickUpdate {
    /// The tick number.
    pub tick: u64,
    /// The simulated time label in `m:ss` form.
    pub time_label: String,
    /// Full ranked standings.
    pub standings: Vec<Standing>,
    /// Top rows for the leaderboard panel.
    pub leaderboard: Vec<Standing>,
    /// Top rows for the chart legend.
    pub chart_lines: Vec<Standing>,
    /// Set when the favorite took the lead on this tick.
    pub leader_change: Option<LeaderChange>,
}

impl TickUpdate {
    /// Build an update from a completed tick summary.
    pub fn from_summary(summary: &TickSummary) -> Self {
        Self {
            tick: summary.tick,
            time_label: summary.time_label.clone(),
            standings: summary.standings.clone(),
            leaderboard: summary.leaderboard.clone(),
            chart_lines: summary.chart_lines.clone(),
            leader_change: summary.leader_change.clone(),
        }
    }
}

/// A message pushed over the board broadcast channel.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum BoardBroadcast {
    /// A tick completed.
    Tick(TickUpdate),
    /// A celebration burst should fire now.
    Celebration(CelebrationBurst),
}

/// In-memory snapshot of the latest board view.
///
/// Updated each tick by the engine. Reads are served from this snapshot
/// so consumers joining mid-run never block the tick loop.
#[derive(Debug, Clone, Default)]
pub struct BoardSnapshot {
    /// The last completed tick number.
    pub current_tick: u64,
    /// The latest simulated time label.
    pub time_label: String,
    /// The latest full standings.
    pub standings: Vec<Standing>,
    /// The most recent leader change, if any has occurred.
    pub last_leader_change: Option<LeaderChange>,
}

/// Shared state connecting the tick loop to board consumers.
///
/// Wrapped in [`Arc`] and shared between the engine callback and any
/// consumer surface. The broadcast sender pushes live messages; the
/// snapshot is a read-write lock holding the latest board view.
#[derive(Clone)]
pub struct BoardState {
    /// Broadcast sender for board messages.
    pub tx: broadcast::Sender<BoardBroadcast>,
    /// The current board snapshot (updated each tick).
    pub snapshot: Arc<RwLock<BoardSnapshot>>,
}

impl BoardState {
    /// Create a new board state with an empty snapshot.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self {
            tx,
            snapshot: Arc::new(RwLock::new(BoardSnapshot::default())),
        }
    }

    /// Subscribe to the board broadcast channel.
    ///
    /// Returns a receiver that will yield a [`BoardBroadcast`] for
    /// every tick and celebration burst the engine publishes.
    pub fn subscribe(&self) -> broadcast::Receiver<BoardBroadcast> {
        self.tx.subscribe()
    }

    /// Publish a message to all connected consumers.
    ///
    /// Returns the number of receivers that received the message.
    /// Returns 0 if no consumers are connected (this is not an error).
    pub fn broadcast(&self, message: &BoardBroadcast) -> usize {
        // send returns Err only when there are zero receivers,
        // which is normal when no consumers are connected.
        self.tx.send(message.clone()).unwrap_or(0)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
