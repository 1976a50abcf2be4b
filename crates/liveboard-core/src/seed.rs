//! Roster seeding for the board.
//!
//! Participants are created once from an externally supplied roster of
//! display names. Each gets a cyclic palette color by roster index and an
//! initial score drawn uniformly from `[5.0, 65.0)`, and the series starts
//! with a single snapshot labeled `"0:00"`. An empty roster seeds an empty
//! board; the run loop will then refuse to start ticking.

use std::collections::BTreeMap;

use liveboard_types::{Participant, ParticipantId, ScoreSnapshot, color_for_index};
use rand::Rng;
use tracing::info;

use crate::clock::{ClockError, SimClock};
use crate::leader::LeaderTracker;
use crate::series::ScoreSeries;
use crate::tick::SimulationState;
use crate::walk;

/// Build participants from roster names: cyclic colors, random initial
/// scores, fresh identifiers.
pub fn seed_participants(names: &[String], rng: &mut impl Rng) -> Vec<Participant> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| Participant {
            id: ParticipantId::new(),
            name: name.clone(),
            color: color_for_index(index).to_owned(),
            score: walk::initial_score(rng),
        })
        .collect()
}

/// Build the initial snapshot from freshly seeded participants.
fn initial_snapshot(clock: &SimClock, participants: &[Participant]) -> ScoreSnapshot {
    let mut scores = BTreeMap::new();
    for p in participants {
        scores.insert(p.id, p.score);
    }
    ScoreSnapshot {
        time_label: clock.label(),
        scores,
    }
}

/// Seed a complete simulation state from a roster.
///
/// The series contains exactly one snapshot (the initial placement at
/// `"0:00"`), and the leader tracker has observed it, so the first-ever
/// leader never raises a change signal. An empty roster yields an empty
/// series and no observation.
///
/// # Errors
///
/// Returns [`ClockError::InvalidConfig`] if `step_seconds` is 0.
pub fn seed_state(
    names: &[String],
    step_seconds: u64,
    window: usize,
    leaderboard_size: usize,
    chart_size: usize,
    rng: &mut impl Rng,
) -> Result<SimulationState, ClockError> {
    let clock = SimClock::new(step_seconds)?;
    let participants = seed_participants(names, rng);
    let mut series = ScoreSeries::new(window);
    let mut leader_tracker = LeaderTracker::new();

    if participants.is_empty() {
        info!("Empty roster seeded, board will not tick");
    } else {
        let snapshot = initial_snapshot(&clock, &participants);
        let first_leader = crate::rank::standings(&participants, &snapshot)
            .first()
            .map(|s| s.participant_id);
        series.push(snapshot);
        // Prime the tracker: the initial placement is not a transition.
        let _ = leader_tracker.observe(first_leader, None);
        info!(
            participant_count = participants.len(),
            window, "Roster seeded"
        );
    }

    Ok(SimulationState {
        clock,
        participants,
        series,
        leader_tracker,
        leaderboard_size,
        chart_size,
    })
}

/// Replace the roster in place, resetting series, clock, and leader
/// tracking.
///
/// Called when the roster reference changes; the old series is discarded
/// entirely (pure sliding window, no persistence).
///
/// # Errors
///
/// Returns [`ClockError::InvalidConfig`] if the clock cannot be rebuilt
/// (the step is taken from the existing clock, so this does not happen in
/// practice).
pub fn reseed(
    state: &mut SimulationState,
    names: &[String],
    rng: &mut impl Rng,
) -> Result<(), ClockError> {
    let fresh = seed_state(
        names,
        state.clock.step_seconds(),
        state.series.window(),
        state.leaderboard_size,
        state.chart_size,
        rng,
    )?;
    *state = fresh;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use liveboard_types::PALETTE;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rust_decimal::Decimal;

    use super::*;
    use crate::series::DEFAULT_WINDOW;

    fn names(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("Team {i}")).collect()
    }

    #[test]
    fn colors_cycle_through_the_palette() {
        let mut rng = SmallRng::seed_from_u64(42);
        let participants = seed_participants(&names(17), &mut rng);
        assert_eq!(participants.first().unwrap().color, PALETTE[0]);
        assert_eq!(participants.get(14).unwrap().color, PALETTE[14]);
        assert_eq!(participants.get(15).unwrap().color, PALETTE[0]);
        assert_eq!(participants.get(16).unwrap().color, PALETTE[1]);
    }

    #[test]
    fn initial_scores_are_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        for p in seed_participants(&names(100), &mut rng) {
            assert!(p.score >= Decimal::from(5));
            assert!(p.score < Decimal::new(650, 1));
        }
    }

    #[test]
    fn seeded_state_has_one_snapshot_at_zero() {
        let mut rng = SmallRng::seed_from_u64(42);
        let state = seed_state(&names(4), 2, DEFAULT_WINDOW, 3, 10, &mut rng).unwrap();
        assert_eq!(state.series.len(), 1);
        assert_eq!(state.series.latest().unwrap().time_label, "0:00");
        assert_eq!(state.clock.tick(), 0);
        // The tracker observed the initial placement.
        assert!(state.leader_tracker.previous_leader().is_some());
    }

    #[test]
    fn empty_roster_seeds_empty_state() {
        let mut rng = SmallRng::seed_from_u64(42);
        let state = seed_state(&[], 2, DEFAULT_WINDOW, 3, 10, &mut rng).unwrap();
        assert!(state.participants.is_empty());
        assert!(state.series.is_empty());
        assert!(state.leader_tracker.previous_leader().is_none());
    }

    #[test]
    fn reseed_resets_series_and_clock() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut state = seed_state(&names(3), 2, DEFAULT_WINDOW, 3, 10, &mut rng).unwrap();

        for _ in 0..5 {
            let _ = crate::tick::run_tick(&mut state, None, &mut rng).unwrap();
        }
        assert_eq!(state.clock.tick(), 5);
        assert_eq!(state.series.len(), 6);

        reseed(&mut state, &names(2), &mut rng).unwrap();
        assert_eq!(state.participants.len(), 2);
        assert_eq!(state.series.len(), 1);
        assert_eq!(state.clock.tick(), 0);
    }
}
