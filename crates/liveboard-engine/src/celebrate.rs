//! Celebration playback.
//!
//! Plays a precomputed burst schedule in real time: each burst is
//! broadcast to board consumers at its scheduled offset from the start
//! of the celebration. Playback runs on its own task so the tick loop
//! is never delayed by an effect in flight.

use liveboard_types::CelebrationBurst;
use tokio::time::{Duration, sleep};
use tracing::debug;

use crate::board::{BoardBroadcast, BoardState};

/// Play a burst schedule against the board broadcast channel.
///
/// Bursts are emitted in order at their `at_ms` offsets. The schedule
/// is assumed sorted by offset, which [`burst_schedule`] guarantees.
///
/// [`burst_schedule`]: liveboard_core::celebration::burst_schedule
pub async fn play(board: BoardState, bursts: Vec<CelebrationBurst>) {
    let mut elapsed_ms: u64 = 0;
    for burst in bursts {
        let wait_ms = burst.at_ms.saturating_sub(elapsed_ms);
        if wait_ms > 0 {
            sleep(Duration::from_millis(wait_ms)).await;
        }
        elapsed_ms = burst.at_ms;

        let receivers = board.broadcast(&BoardBroadcast::Celebration(burst.clone()));
        debug!(
            celebration_id = %burst.celebration_id,
            at_ms = burst.at_ms,
            particle_count = burst.particle_count,
            receivers,
            "Celebration burst fired"
        );
    }
}
