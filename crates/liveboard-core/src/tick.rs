//! Tick cycle: one step of the bounded random-walk simulation.
//!
//! Each tick runs through these phases:
//!
//! 1. **Advance** -- move the clock forward one tick (+2 simulated seconds).
//! 2. **Walk** -- sample a delta for every participant in roster order,
//!    using the favorite selection fixed at the start of the tick, and
//!    apply it (saturate, clamp to `[0, 100]`, round to one decimal).
//! 3. **Record** -- append a labeled snapshot to the series, evicting the
//!    oldest entries beyond the window.
//! 4. **Rank** -- compute full standings from the new snapshot; the
//!    leaderboard and the chart selection are prefixes of the same sort.
//! 5. **Detect** -- feed the new top standing to the leader tracker and
//!    surface an edge-triggered [`LeaderChange`] when the favorite takes
//!    the lead.
//!
//! Ticks are synchronous and purely in-memory: there are no fallible
//! inputs beyond the clock counters.

use std::collections::BTreeMap;

use liveboard_types::{LeaderChange, Participant, ParticipantId, ScoreSnapshot, Standing};
use rand::Rng;
use tracing::{debug, info};

use crate::clock::SimClock;
use crate::leader::LeaderTracker;
use crate::rank;
use crate::series::ScoreSeries;
use crate::walk;

/// Errors that can occur during tick execution.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    /// A clock operation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: crate::clock::ClockError,
    },
}

/// The mutable simulation state passed through the tick cycle.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// The simulated clock.
    pub clock: SimClock,
    /// Participants in roster order (order determines tie-breaking).
    pub participants: Vec<Participant>,
    /// The bounded snapshot series.
    pub series: ScoreSeries,
    /// Leader state carried across ticks.
    pub leader_tracker: LeaderTracker,
    /// Number of standings surfaced as the leaderboard.
    pub leaderboard_size: usize,
    /// Number of standings surfaced as chart lines.
    pub chart_size: usize,
}

/// Summary of a single tick's execution.
#[derive(Debug, Clone)]
pub struct TickSummary {
    /// The tick number that was executed.
    pub tick: u64,
    /// Elapsed simulated time label for the new snapshot.
    pub time_label: String,
    /// Full standings, descending by score.
    pub standings: Vec<Standing>,
    /// Top standings for the leaderboard display.
    pub leaderboard: Vec<Standing>,
    /// Top standings selected as chart lines.
    pub chart_lines: Vec<Standing>,
    /// Edge-triggered leader-change signal, if the favorite just took
    /// the lead.
    pub leader_change: Option<LeaderChange>,
}

/// Execute one complete tick of the simulation.
///
/// `favorite` is read once by the caller before the tick starts and stays
/// fixed for the whole tick (snapshot-consistent bias).
///
/// # Errors
///
/// Returns [`TickError::Clock`] if the clock counters overflow.
pub fn run_tick(
    state: &mut SimulationState,
    favorite: Option<ParticipantId>,
    rng: &mut impl Rng,
) -> Result<TickSummary, TickError> {
    // --- Phase 1: Advance ---
    let tick = state.clock.advance()?;

    // --- Phase 2: Walk ---
    let mut scores: BTreeMap<ParticipantId, _> = BTreeMap::new();
    for participant in &mut state.participants {
        let is_favorite = favorite == Some(participant.id);
        let delta = walk::sample_delta(rng, is_favorite);
        participant.score = walk::apply_delta(participant.score, delta);
        scores.insert(participant.id, participant.score);
    }

    // --- Phase 3: Record ---
    let time_label = state.clock.label();
    let snapshot = ScoreSnapshot {
        time_label: time_label.clone(),
        scores,
    };
    state.series.push(snapshot);

    // --- Phase 4: Rank ---
    let standings = state.series.latest().map_or_else(Vec::new, |latest| {
        rank::standings(&state.participants, latest)
    });
    let leaderboard = rank::top(&standings, state.leaderboard_size).to_vec();
    let chart_lines = rank::top(&standings, state.chart_size).to_vec();

    // --- Phase 5: Detect ---
    let top = standings.first();
    let transition = state
        .leader_tracker
        .observe(top.map(|s| s.participant_id), favorite);
    let leader_change = transition.map(|t| LeaderChange {
        tick,
        new_leader: t.new_leader,
        name: top.map_or_else(String::new, |s| s.name.clone()),
        previous_leader: t.previous_leader,
    });

    if let Some(ref change) = leader_change {
        info!(tick, leader = %change.name, "Favorite took the lead");
    } else {
        debug!(
            tick,
            time_label,
            leader = top.map(|s| s.name.as_str()).unwrap_or_default(),
            "Tick completed"
        );
    }

    Ok(TickSummary {
        tick,
        time_label,
        standings,
        leaderboard,
        chart_lines,
        leader_change,
    })
}
