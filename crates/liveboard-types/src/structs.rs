//! Core entity structs for the Liveboard progress simulator.
//!
//! Scores are [`Decimal`] values clamped to `[0, 100]` and rounded to one
//! decimal place after every update. Snapshot maps are keyed by
//! [`ParticipantId`] in [`BTreeMap`]s for deterministic iteration order.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{CelebrationId, ParticipantId};

/// A participant (team) on the board.
///
/// Identity and color are fixed at seeding time; the score is the only
/// mutable field and mirrors the participant's entry in the latest
/// [`ScoreSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Participant {
    /// Unique identifier, generated at seeding time.
    pub id: ParticipantId,
    /// Display name from the roster source.
    pub name: String,
    /// Palette color assigned by roster index (cyclic).
    pub color: String,
    /// Current score in `[0, 100]`, one decimal place.
    #[ts(as = "String")]
    pub score: Decimal,
}

/// One point of the score series: all participant scores at a moment of
/// simulated time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ScoreSnapshot {
    /// Elapsed simulated time formatted as `minutes:seconds` (seconds
    /// zero-padded to two digits), e.g. `"1:02"`.
    pub time_label: String,
    /// Score per participant at this point.
    #[ts(as = "BTreeMap<ParticipantId, String>")]
    pub scores: BTreeMap<ParticipantId, Decimal>,
}

/// A ranked entry derived from the latest snapshot.
///
/// Standings are sorted descending by score; equal scores keep roster
/// order (stable sort), so the earlier roster entry wins ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Standing {
    /// 1-based rank within the full standings.
    pub rank: u32,
    /// The ranked participant.
    pub participant_id: ParticipantId,
    /// Display name (denormalized for the presentation layer).
    pub name: String,
    /// Palette color (denormalized for the presentation layer).
    pub color: String,
    /// Score at the latest snapshot.
    #[ts(as = "String")]
    pub score: Decimal,
}

/// Edge-triggered signal raised when the selected favorite takes the top
/// rank from a different previous leader.
///
/// Fired at most once per transition; never fired on the first-ever
/// placement (there is no previous leader to compare against).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LeaderChange {
    /// The tick on which the transition was observed.
    pub tick: u64,
    /// The participant that just became leader (always the favorite).
    pub new_leader: ParticipantId,
    /// Display name of the new leader.
    pub name: String,
    /// The leader observed on the previous tick, if any.
    pub previous_leader: Option<ParticipantId>,
}

/// Normalized screen origin for a confetti burst.
///
/// Coordinates are fractions of the viewport; `y` may be slightly negative
/// so bursts can start above the visible area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BurstOrigin {
    /// Horizontal origin as a fraction of viewport width.
    #[ts(as = "String")]
    pub x: Decimal,
    /// Vertical origin as a fraction of viewport height.
    #[ts(as = "String")]
    pub y: Decimal,
}

/// One timed confetti burst within a celebration playback.
///
/// A celebration is a fixed-duration sequence of bursts emitted on a fixed
/// interval, with particle counts decaying linearly toward the end. The
/// playback clock is wall time, independent of simulation ticking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CelebrationBurst {
    /// The celebration this burst belongs to.
    pub celebration_id: CelebrationId,
    /// Offset from celebration start, in milliseconds.
    pub at_ms: u64,
    /// Particles to emit from each origin at this burst.
    pub particle_count: u32,
    /// Left-side origin (x in `[0.1, 0.3]`).
    pub left: BurstOrigin,
    /// Right-side origin (x in `[0.7, 0.9]`).
    pub right: BurstOrigin,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_roundtrip_serde() {
        let id = ParticipantId::new();
        let mut scores = BTreeMap::new();
        scores.insert(id, Decimal::new(425, 1));

        let snapshot = ScoreSnapshot {
            time_label: String::from("0:04"),
            scores,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: ScoreSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
        assert_eq!(restored.scores.get(&id), Some(&Decimal::new(425, 1)));
    }

    #[test]
    fn leader_change_carries_previous_leader() {
        let new_leader = ParticipantId::new();
        let previous = ParticipantId::new();
        let change = LeaderChange {
            tick: 5,
            new_leader,
            name: String::from("Team Nova"),
            previous_leader: Some(previous),
        };
        assert_ne!(change.new_leader, previous);
        assert_eq!(change.tick, 5);
    }
}
