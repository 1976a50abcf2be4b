//! Edge-triggered leader-change detection.
//!
//! The tracker remembers the top-ranked participant observed on the
//! previous tick and compares it against the current one. A transition is
//! reported only when:
//!
//! - a previous observation exists (the first-ever placement never fires),
//! - the top-ranked participant changed, and
//! - the new top-ranked participant is the currently selected favorite.
//!
//! The tracker observes every tick, whether or not a favorite is selected,
//! so selecting a favorite that is already leading never fires
//! retroactively. State persists across ticks and is only reset when the
//! roster is reseeded.

use liveboard_types::ParticipantId;

/// A detected leader transition involving the favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The participant that just took the top rank (the favorite).
    pub new_leader: ParticipantId,
    /// The leader observed on the previous tick, if there was one.
    pub previous_leader: Option<ParticipantId>,
}

/// Tracks the previously observed leader across ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderTracker {
    /// Top-ranked participant at the last observation.
    previous: Option<ParticipantId>,
    /// Whether any observation has been made yet.
    observed: bool,
}

impl LeaderTracker {
    /// Create a tracker with no prior observation.
    pub const fn new() -> Self {
        Self {
            previous: None,
            observed: false,
        }
    }

    /// Observe the current top-ranked participant for this tick.
    ///
    /// `current` is the top standing's id (or `None` for an empty board);
    /// `favorite` is the selection fixed at the start of the tick. Returns
    /// a [`Transition`] only on the tick where the favorite takes the top
    /// rank from a different (or absent) previously observed leader.
    pub fn observe(
        &mut self,
        current: Option<ParticipantId>,
        favorite: Option<ParticipantId>,
    ) -> Option<Transition> {
        let fired = if self.observed && current != self.previous {
            match (current, favorite) {
                (Some(leader), Some(fav)) if leader == fav => Some(Transition {
                    new_leader: leader,
                    previous_leader: self.previous,
                }),
                _ => None,
            }
        } else {
            None
        };

        self.previous = current;
        self.observed = true;
        fired
    }

    /// Return the previously observed leader, if any.
    pub const fn previous_leader(&self) -> Option<ParticipantId> {
        self.previous
    }

    /// Forget all observations (used when the roster is reseeded).
    pub const fn reset(&mut self) {
        self.previous = None;
        self.observed = false;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn first_observation_never_fires() {
        let mut tracker = LeaderTracker::new();
        let favorite = ParticipantId::new();
        // Favorite is already leading on the very first snapshot.
        let fired = tracker.observe(Some(favorite), Some(favorite));
        assert!(fired.is_none());
        assert_eq!(tracker.previous_leader(), Some(favorite));
    }

    #[test]
    fn overtake_fires_exactly_once() {
        let mut tracker = LeaderTracker::new();
        let rival = ParticipantId::new();
        let favorite = ParticipantId::new();

        // Ticks 1-4: the rival leads.
        for _ in 0..4 {
            assert!(tracker.observe(Some(rival), Some(favorite)).is_none());
        }

        // Tick 5: the favorite overtakes.
        let fired = tracker.observe(Some(favorite), Some(favorite));
        let transition = fired.unwrap();
        assert_eq!(transition.new_leader, favorite);
        assert_eq!(transition.previous_leader, Some(rival));

        // Ticks 6-8: favorite keeps leading, no further signal.
        for _ in 0..3 {
            assert!(tracker.observe(Some(favorite), Some(favorite)).is_none());
        }
    }

    #[test]
    fn refires_after_losing_and_regaining_the_lead() {
        let mut tracker = LeaderTracker::new();
        let rival = ParticipantId::new();
        let favorite = ParticipantId::new();

        let _ = tracker.observe(Some(rival), Some(favorite));
        assert!(tracker.observe(Some(favorite), Some(favorite)).is_some());
        assert!(tracker.observe(Some(rival), Some(favorite)).is_none());
        assert!(tracker.observe(Some(favorite), Some(favorite)).is_some());
    }

    #[test]
    fn no_signal_without_a_favorite() {
        let mut tracker = LeaderTracker::new();
        let a = ParticipantId::new();
        let b = ParticipantId::new();

        let _ = tracker.observe(Some(a), None);
        assert!(tracker.observe(Some(b), None).is_none());
        // The tracker still followed the change.
        assert_eq!(tracker.previous_leader(), Some(b));
    }

    #[test]
    fn no_signal_when_a_non_favorite_overtakes() {
        let mut tracker = LeaderTracker::new();
        let rival = ParticipantId::new();
        let other = ParticipantId::new();
        let favorite = ParticipantId::new();

        let _ = tracker.observe(Some(rival), Some(favorite));
        assert!(tracker.observe(Some(other), Some(favorite)).is_none());
    }

    #[test]
    fn tracking_without_favorite_prevents_retroactive_fire() {
        let mut tracker = LeaderTracker::new();
        let leader = ParticipantId::new();

        // Leader established before any favorite is selected.
        let _ = tracker.observe(Some(leader), None);
        // Observer now selects the current leader as favorite: no edge.
        assert!(tracker.observe(Some(leader), Some(leader)).is_none());
    }

    #[test]
    fn reset_forgets_observations() {
        let mut tracker = LeaderTracker::new();
        let favorite = ParticipantId::new();
        let _ = tracker.observe(Some(ParticipantId::new()), Some(favorite));
        tracker.reset();
        assert!(tracker.previous_leader().is_none());
        // After reset, the next observation is a first placement again.
        assert!(tracker.observe(Some(favorite), Some(favorite)).is_none());
    }
}
