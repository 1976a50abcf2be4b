//! Board loop runner with observer controls.
//!
//! This module provides [`run_simulation`], the top-level async function
//! that drives the tick loop with support for:
//!
//! - **Bounded runs**: stop after `max_ticks` or `max_real_time_seconds`
//! - **Pause/resume**: the observer can halt and continue the tick loop
//! - **Variable tick speed**: tick interval adjustable at runtime
//! - **Favorite selection**: read once per tick for snapshot consistency
//! - **Clean shutdown**: final summary, end reason, graceful stop
//!
//! The runner wraps the single-tick [`run_tick`] function and adds the
//! control plane around it.
//!
//! [`run_tick`]: crate::tick::run_tick

use std::sync::Arc;

use rand::Rng;
use tracing::{info, warn};

use crate::operator::{EndReason, OperatorState};
use crate::tick::{self, SimulationState, TickError, TickSummary};

/// Errors that can occur during the board run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A tick execution failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying tick error.
        #[from]
        source: TickError,
    },
}

/// Result of the board run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The reason the run ended.
    pub end_reason: EndReason,
    /// The last tick summary, if any tick completed.
    pub final_summary: Option<TickSummary>,
    /// Total number of ticks executed.
    pub total_ticks: u64,
}

/// Callback invoked after each tick completes.
///
/// Implementations can use this to update the observer snapshot,
/// broadcast tick summaries, launch celebration effects, etc. The
/// callback receives the tick summary and the current board state.
pub trait TickCallback: Send {
    /// Called after a tick completes successfully.
    fn on_tick(&mut self, summary: &TickSummary, state: &SimulationState);
}

/// A no-op tick callback for testing.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_tick(&mut self, _summary: &TickSummary, _state: &SimulationState) {}
}

/// Run the board loop until a termination condition is met.
///
/// This is the main entry point for a bounded run. It integrates the
/// tick cycle with observer controls (pause, resume, speed, favorite,
/// stop) and run boundaries (max ticks, max time).
///
/// An empty roster ends the run immediately with
/// [`EndReason::EmptyRoster`] and zero ticks, before any timer is
/// started.
///
/// # Arguments
///
/// * `state` - Mutable board state (roster, clock, series, tracker)
/// * `operator` - Shared observer control state
/// * `callback` - Called after each tick for observer updates
/// * `rng` - Randomness for score deltas
///
/// # Returns
///
/// Returns a [`SimulationResult`] describing why the run ended and the
/// final tick summary.
///
/// # Errors
///
/// Returns [`RunnerError`] if a tick execution fails unrecoverably.
pub async fn run_simulation(
    state: &mut SimulationState,
    operator: &Arc<OperatorState>,
    callback: &mut dyn TickCallback,
    rng: &mut (impl Rng + Send),
) -> Result<SimulationResult, RunnerError> {
    let mut last_summary: Option<TickSummary> = None;
    let mut total_ticks: u64 = 0;

    if state.participants.is_empty() {
        warn!("Roster is empty, nothing to run");
        let reason = EndReason::EmptyRoster;
        operator.set_end_reason(reason.clone()).await;
        return Ok(SimulationResult {
            end_reason: reason,
            final_summary: None,
            total_ticks: 0,
        });
    }

    info!(
        participants = state.participants.len(),
        max_ticks = operator.max_ticks(),
        max_real_time_seconds = operator.max_real_time_seconds(),
        tick_interval_ms = operator.tick_interval_ms(),
        "Board starting"
    );

    loop {
        // --- Check pause ---
        if operator.is_paused() {
            info!("Board paused, waiting for resume...");
            operator.wait_if_paused().await;
            info!("Board resumed");
        }

        // --- Check stop request (before tick) ---
        if operator.is_stop_requested() {
            info!("Observer stop requested");
            let reason = EndReason::OperatorStop;
            operator.set_end_reason(reason.clone()).await;
            return Ok(SimulationResult {
                end_reason: reason,
                final_summary: last_summary,
                total_ticks,
            });
        }

        // --- Check time limit (before tick) ---
        if operator.time_limit_reached() {
            info!(
                max_seconds = operator.max_real_time_seconds(),
                elapsed = operator.elapsed_seconds(),
                "Real-time limit reached"
            );
            let reason = EndReason::MaxRealTimeReached;
            operator.set_end_reason(reason.clone()).await;
            return Ok(SimulationResult {
                end_reason: reason,
                final_summary: last_summary,
                total_ticks,
            });
        }

        // --- Read favorite once, then execute tick ---
        let favorite = operator.favorite().await;
        let summary = tick::run_tick(state, favorite, rng)?;

        total_ticks = total_ticks.saturating_add(1);

        // --- Notify callback ---
        callback.on_tick(&summary, state);

        // --- Check tick limit (after tick) ---
        // run_tick advances the clock internally, so summary.tick is the
        // tick number that just ran. If max_ticks is 5, we stop after
        // tick 5 has completed (total_ticks == 5).
        if operator.tick_limit_reached(summary.tick) {
            info!(
                tick = summary.tick,
                max_ticks = operator.max_ticks(),
                "Tick limit reached"
            );
            let reason = EndReason::MaxTicksReached;
            operator.set_end_reason(reason.clone()).await;
            return Ok(SimulationResult {
                end_reason: reason,
                final_summary: Some(summary),
                total_ticks,
            });
        }

        last_summary = Some(summary);

        // --- Sleep for tick interval ---
        let interval_ms = operator.tick_interval_ms();
        if interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)).await;
        }
    }
}

/// Log the board end sequence.
///
/// This should be called after [`run_simulation`] returns to perform
/// the final logging.
pub fn log_simulation_end(result: &SimulationResult) {
    info!(
        reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        final_tick = result.final_summary.as_ref().map(|s| s.tick),
        "Board run ended"
    );

    if let Some(ref summary) = result.final_summary {
        info!(
            tick = summary.tick,
            time_label = %summary.time_label,
            leader = summary.standings.first().map(|s| s.name.as_str()),
            "Final tick summary"
        );
    } else {
        warn!("Board run ended with no ticks executed");
    }
}
