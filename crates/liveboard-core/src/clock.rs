//! Simulated clock for the progress board.
//!
//! The clock is the single source of truth for temporal state: it tracks
//! the tick counter and the elapsed simulated seconds, which advance by a
//! fixed step on every tick. The time label shown on snapshots is derived
//! from the elapsed counter -- never stored independently.
//!
//! Simulated time is decoupled from the real tick interval: the board may
//! tick every 10 real seconds while advancing simulated time by 2 seconds.

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Tick counter or elapsed-seconds counter would overflow.
    #[error("clock counter overflow: cannot advance beyond u64::MAX")]
    TickOverflow,

    /// Invalid clock configuration (e.g. zero step seconds).
    #[error("invalid clock configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

/// Simulated clock tracking tick count and elapsed simulated seconds.
///
/// The clock advances once per tick, adding `step_seconds` to the elapsed
/// counter. All arithmetic is checked; overflow is an error rather than a
/// wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimClock {
    /// Current tick number (0 before the first tick).
    tick: u64,

    /// Elapsed simulated seconds (tick * `step_seconds`).
    elapsed_seconds: u64,

    /// Simulated seconds added per tick (from configuration).
    step_seconds: u64,
}

impl SimClock {
    /// Create a new clock at tick 0.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if `step_seconds` is 0.
    pub fn new(step_seconds: u64) -> Result<Self, ClockError> {
        if step_seconds == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "step_seconds must be at least 1".to_owned(),
            });
        }
        Ok(Self {
            tick: 0,
            elapsed_seconds: 0,
            step_seconds,
        })
    }

    /// Create a clock from explicit parameters (useful for testing and
    /// state restoration).
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if `step_seconds` is 0.
    pub fn from_parts(tick: u64, elapsed_seconds: u64, step_seconds: u64) -> Result<Self, ClockError> {
        if step_seconds == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "step_seconds must be at least 1".to_owned(),
            });
        }
        Ok(Self {
            tick,
            elapsed_seconds,
            step_seconds,
        })
    }

    /// Advance the clock by one tick. Returns the new tick number.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::TickOverflow`] if either counter would exceed
    /// `u64::MAX`.
    pub fn advance(&mut self) -> Result<u64, ClockError> {
        let next_tick = self.tick.checked_add(1).ok_or(ClockError::TickOverflow)?;
        let next_elapsed = self
            .elapsed_seconds
            .checked_add(self.step_seconds)
            .ok_or(ClockError::TickOverflow)?;
        self.tick = next_tick;
        self.elapsed_seconds = next_elapsed;
        Ok(self.tick)
    }

    /// Return the current tick number.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Return the elapsed simulated seconds.
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Return the configured simulated seconds per tick.
    pub const fn step_seconds(&self) -> u64 {
        self.step_seconds
    }

    /// Format the current elapsed time as a snapshot label.
    pub fn label(&self) -> String {
        format_label(self.elapsed_seconds)
    }
}

/// Format elapsed seconds as `minutes:seconds` with the seconds part
/// zero-padded to two digits: 0 -> `"0:00"`, 62 -> `"1:02"`.
pub fn format_label(seconds: u64) -> String {
    // Division is safe: the divisor is a nonzero constant.
    let minutes = seconds.checked_div(60).unwrap_or(0);
    let secs = seconds.checked_rem(60).unwrap_or(0);
    format!("{minutes}:{secs:02}")
}
