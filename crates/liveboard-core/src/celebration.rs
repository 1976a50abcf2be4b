//! Celebration burst schedule for leader-change signals.
//!
//! When the favorite takes the lead, the board plays a fixed-duration
//! confetti celebration: one burst per interval while time remains, with
//! particle counts decaying linearly to zero over the duration. Each burst
//! fires from two randomized origins near the left and right viewport
//! edges.
//!
//! This module only builds the schedule; playback is a timed task owned by
//! the engine and runs on wall time, independent of simulation ticking.

use liveboard_types::{BurstOrigin, CelebrationBurst, CelebrationId};
use rand::Rng;
use rust_decimal::Decimal;

/// Total celebration duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 3_000;

/// Interval between bursts in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 250;

/// Particles per burst origin at full strength.
const BASE_PARTICLE_COUNT: u64 = 50;

/// Left origin x range in hundredths: 0.10 to 0.30.
const LEFT_X_HUNDREDTHS: core::ops::RangeInclusive<i64> = 10..=30;

/// Right origin x range in hundredths: 0.70 to 0.90.
const RIGHT_X_HUNDREDTHS: core::ops::RangeInclusive<i64> = 70..=90;

/// Origin y range in hundredths: -0.20 to 0.80 (bursts may start above
/// the visible area).
const Y_HUNDREDTHS: core::ops::Range<i64> = -20..80;

/// Build the burst schedule for one celebration.
///
/// Bursts fire at `interval_ms, 2*interval_ms, ...` while time remains
/// (strictly before `duration_ms`); the particle count of each burst is
/// `BASE * time_left / duration` in integer arithmetic. With the defaults
/// (3000 ms / 250 ms) this yields 11 bursts. A zero interval or duration
/// yields an empty schedule.
pub fn burst_schedule(
    celebration_id: CelebrationId,
    duration_ms: u64,
    interval_ms: u64,
    rng: &mut impl Rng,
) -> Vec<CelebrationBurst> {
    if duration_ms == 0 || interval_ms == 0 {
        return Vec::new();
    }

    let mut bursts = Vec::new();
    let mut at_ms = interval_ms;
    while at_ms < duration_ms {
        let time_left = duration_ms.saturating_sub(at_ms);
        let scaled = BASE_PARTICLE_COUNT
            .checked_mul(time_left)
            .and_then(|n| n.checked_div(duration_ms))
            .unwrap_or(0);
        let particle_count = u32::try_from(scaled).unwrap_or(u32::MAX);

        bursts.push(CelebrationBurst {
            celebration_id,
            at_ms,
            particle_count,
            left: BurstOrigin {
                x: Decimal::new(rng.random_range(LEFT_X_HUNDREDTHS), 2),
                y: Decimal::new(rng.random_range(Y_HUNDREDTHS), 2),
            },
            right: BurstOrigin {
                x: Decimal::new(rng.random_range(RIGHT_X_HUNDREDTHS), 2),
                y: Decimal::new(rng.random_range(Y_HUNDREDTHS), 2),
            },
        });

        at_ms = match at_ms.checked_add(interval_ms) {
            Some(next) => next,
            None => break,
        };
    }
    bursts
}
