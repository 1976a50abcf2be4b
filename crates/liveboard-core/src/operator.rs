//! Observer control state for runtime board management.
//!
//! This module provides shared state used by the run loop and whatever
//! surface lets the observer steer the board: pause/resume, change tick
//! speed, select or clear the favorite participant, and trigger a clean
//! stop -- all without stopping the process.
//!
//! # Architecture
//!
//! Mutable control fields use [`std::sync::atomic`] types wrapped in
//! [`Arc`](std::sync::Arc) so they can be shared between the tick loop
//! task and control tasks without locks on the hot path. The favorite
//! selection is behind an async mutex and is read exactly once at the
//! start of each tick.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use liveboard_types::ParticipantId;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, Notify};

use crate::config::SimulationBoundsConfig;

/// Reason why the run loop ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    /// Reached the configured `max_ticks` limit.
    MaxTicksReached,
    /// Reached the configured `max_real_time_seconds` limit.
    MaxRealTimeReached,
    /// The observer issued a stop command.
    OperatorStop,
    /// The roster was empty, so no timer was started.
    EmptyRoster,
}

/// Shared observer control state.
///
/// Wrapped in [`Arc`](std::sync::Arc) and shared between the tick loop
/// and control surfaces. Atomic fields are used for lock-free reads on
/// the tick loop hot path.
#[derive(Debug)]
pub struct OperatorState {
    /// Whether the board is currently paused.
    paused: AtomicBool,

    /// Notification used to wake the tick loop when resumed.
    resume_notify: Notify,

    /// Whether a stop has been requested.
    stop_requested: AtomicBool,

    /// Current tick interval in milliseconds (runtime-adjustable).
    tick_interval_ms: AtomicU64,

    /// Wall-clock time when the run started.
    started_at: DateTime<Utc>,

    /// Maximum number of ticks (0 = unlimited).
    max_ticks: u64,

    /// Maximum wall-clock seconds (0 = unlimited).
    max_real_time_seconds: u64,

    /// The favorite participant selected by the observer, if any.
    favorite: Mutex<Option<ParticipantId>>,

    /// Reason the run ended, if it has.
    end_reason: Mutex<Option<EndReason>>,
}

impl OperatorState {
    /// Create a new operator state from configuration.
    pub fn new(tick_interval_ms: u64, bounds: &SimulationBoundsConfig) -> Self {
        Self {
            paused: AtomicBool::new(false),
            resume_notify: Notify::new(),
            stop_requested: AtomicBool::new(false),
            tick_interval_ms: AtomicU64::new(tick_interval_ms),
            started_at: Utc::now(),
            max_ticks: bounds.max_ticks,
            max_real_time_seconds: bounds.max_real_time_seconds,
            favorite: Mutex::new(None),
            end_reason: Mutex::new(None),
        }
    }

    // -----------------------------------------------------------------------
    // Pause / Resume
    // -----------------------------------------------------------------------

    /// Check whether the board is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Pause the board. The tick loop will sleep until resumed.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Release);
    }

    /// Resume the board and wake the tick loop.
    pub fn resume(&self) {
        self.paused.store(false, Ordering::Release);
        self.resume_notify.notify_one();
    }

    /// Wait until the board is no longer paused.
    ///
    /// Returns immediately if not paused. Otherwise blocks until
    /// [`resume`](Self::resume) is called.
    pub async fn wait_if_paused(&self) {
        while self.paused.load(Ordering::Acquire) {
            self.resume_notify.notified().await;
        }
    }

    // -----------------------------------------------------------------------
    // Stop
    // -----------------------------------------------------------------------

    /// Request a clean stop.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
    }

    /// Check whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    /// Record the reason the run ended.
    pub async fn set_end_reason(&self, reason: EndReason) {
        let mut guard = self.end_reason.lock().await;
        *guard = Some(reason);
    }

    /// Get the reason the run ended, if it has.
    pub async fn end_reason(&self) -> Option<EndReason> {
        self.end_reason.lock().await.clone()
    }

    // -----------------------------------------------------------------------
    // Favorite Selection
    // -----------------------------------------------------------------------

    /// Select the favorite participant (at most one is active).
    pub async fn set_favorite(&self, id: ParticipantId) {
        let mut guard = self.favorite.lock().await;
        *guard = Some(id);
    }

    /// Clear the favorite selection.
    pub async fn clear_favorite(&self) {
        let mut guard = self.favorite.lock().await;
        *guard = None;
    }

    /// Read the current favorite selection.
    ///
    /// The tick loop calls this once per tick, before the tick runs, so
    /// bias computation within a tick is snapshot-consistent.
    pub async fn favorite(&self) -> Option<ParticipantId> {
        *self.favorite.lock().await
    }

    // -----------------------------------------------------------------------
    // Tick Speed
    // -----------------------------------------------------------------------

    /// Get the current tick interval in milliseconds.
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms.load(Ordering::Acquire)
    }

    /// Set the tick interval in milliseconds. Must be at least 100ms.
    ///
    /// Returns the previous interval on success, or `None` if the
    /// value was rejected (below 100ms).
    pub fn set_tick_interval_ms(&self, ms: u64) -> Option<u64> {
        if ms < 100 {
            return None;
        }
        let prev = self.tick_interval_ms.swap(ms, Ordering::AcqRel);
        Some(prev)
    }

    // -----------------------------------------------------------------------
    // Boundaries
    // -----------------------------------------------------------------------

    /// Check whether the tick limit has been reached.
    ///
    /// Returns `true` if `max_ticks > 0` and `current_tick >= max_ticks`.
    pub const fn tick_limit_reached(&self, current_tick: u64) -> bool {
        self.max_ticks > 0 && current_tick >= self.max_ticks
    }

    /// Check whether the wall-clock time limit has been reached.
    ///
    /// Returns `true` if `max_real_time_seconds > 0` and the elapsed
    /// seconds since start exceed the limit.
    pub fn time_limit_reached(&self) -> bool {
        if self.max_real_time_seconds == 0 {
            return false;
        }
        elapsed_u64(self.started_at) >= self.max_real_time_seconds
    }

    /// Return the wall-clock start time.
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Return elapsed wall-clock seconds since the run started.
    pub fn elapsed_seconds(&self) -> u64 {
        elapsed_u64(self.started_at)
    }

    /// Get the configured max ticks.
    pub const fn max_ticks(&self) -> u64 {
        self.max_ticks
    }

    /// Get the configured max real-time seconds.
    pub const fn max_real_time_seconds(&self) -> u64 {
        self.max_real_time_seconds
    }
}

/// Elapsed whole seconds since `since`, clamped at 0.
///
/// `num_seconds` can be negative if clocks are weird; treat as 0.
fn elapsed_u64(since: DateTime<Utc>) -> u64 {
    let elapsed = Utc::now().signed_duration_since(since).num_seconds();
    u64::try_from(elapsed.max(0)).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn default_bounds() -> SimulationBoundsConfig {
        SimulationBoundsConfig {
            max_ticks: 0,
            max_real_time_seconds: 0,
        }
    }

    #[test]
    fn initial_state_is_not_paused() {
        let state = OperatorState::new(1000, &default_bounds());
        assert!(!state.is_paused());
        assert!(!state.is_stop_requested());
    }

    #[test]
    fn pause_and_resume() {
        let state = OperatorState::new(1000, &default_bounds());
        state.pause();
        assert!(state.is_paused());
        state.resume();
        assert!(!state.is_paused());
    }

    #[test]
    fn stop_request() {
        let state = OperatorState::new(1000, &default_bounds());
        assert!(!state.is_stop_requested());
        state.request_stop();
        assert!(state.is_stop_requested());
    }

    #[test]
    fn set_tick_interval() {
        let state = OperatorState::new(1000, &default_bounds());
        assert_eq!(state.tick_interval_ms(), 1000);
        let prev = state.set_tick_interval_ms(2000);
        assert_eq!(prev, Some(1000));
        assert_eq!(state.tick_interval_ms(), 2000);
    }

    #[test]
    fn reject_sub_100ms_interval() {
        let state = OperatorState::new(1000, &default_bounds());
        let result = state.set_tick_interval_ms(50);
        assert!(result.is_none());
        assert_eq!(state.tick_interval_ms(), 1000);
    }

    #[test]
    fn tick_limit_zero_means_unlimited() {
        let state = OperatorState::new(1000, &default_bounds());
        assert!(!state.tick_limit_reached(999_999));
    }

    #[test]
    fn tick_limit_reached() {
        let bounds = SimulationBoundsConfig {
            max_ticks: 100,
            max_real_time_seconds: 0,
        };
        let state = OperatorState::new(1000, &bounds);
        assert!(!state.tick_limit_reached(99));
        assert!(state.tick_limit_reached(100));
        assert!(state.tick_limit_reached(101));
    }

    #[test]
    fn time_limit_zero_means_unlimited() {
        let state = OperatorState::new(1000, &default_bounds());
        assert!(!state.time_limit_reached());
    }

    #[tokio::test]
    async fn favorite_selection_set_and_clear() {
        let state = OperatorState::new(1000, &default_bounds());
        assert!(state.favorite().await.is_none());

        let id = ParticipantId::new();
        state.set_favorite(id).await;
        assert_eq!(state.favorite().await, Some(id));

        // Changing the selection replaces it: at most one is active.
        let other = ParticipantId::new();
        state.set_favorite(other).await;
        assert_eq!(state.favorite().await, Some(other));

        state.clear_favorite().await;
        assert!(state.favorite().await.is_none());
    }

    #[tokio::test]
    async fn end_reason_round_trip() {
        let state = OperatorState::new(1000, &default_bounds());
        assert!(state.end_reason().await.is_none());
        state.set_end_reason(EndReason::OperatorStop).await;
        assert_eq!(state.end_reason().await, Some(EndReason::OperatorStop));
    }
}
