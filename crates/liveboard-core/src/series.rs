//! Bounded sliding window of score snapshots.
//!
//! The series is append-only from the simulator's point of view, but only
//! the most recent `window` snapshots are retained; older ones are evicted
//! on overflow. There is no persistence -- the series lives and dies with
//! the board session.

use std::collections::VecDeque;

use liveboard_types::ScoreSnapshot;

/// Default number of retained snapshots.
pub const DEFAULT_WINDOW: usize = 15;

/// A bounded, append-only series of score snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSeries {
    /// Maximum retained snapshots. A configured value of 0 is treated as 1.
    window: usize,
    /// Retained snapshots, oldest first.
    snapshots: VecDeque<ScoreSnapshot>,
}

impl ScoreSeries {
    /// Create an empty series retaining at most `window` snapshots.
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
            snapshots: VecDeque::new(),
        }
    }

    /// Append a snapshot, evicting the oldest entries so the retained
    /// length never exceeds the window.
    pub fn push(&mut self, snapshot: ScoreSnapshot) {
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.window {
            let _ = self.snapshots.pop_front();
        }
    }

    /// Return the most recent snapshot, if any.
    pub fn latest(&self) -> Option<&ScoreSnapshot> {
        self.snapshots.back()
    }

    /// Return the number of retained snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Return `true` if no snapshots are retained.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Return the configured window size.
    pub const fn window(&self) -> usize {
        self.window
    }

    /// Iterate retained snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &ScoreSnapshot> {
        self.snapshots.iter()
    }

    /// Drop all retained snapshots (used when the roster changes).
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }
}

impl<'a> IntoIterator for &'a ScoreSeries {
    type Item = &'a ScoreSnapshot;
    type IntoIter = std::collections::vec_deque::Iter<'a, ScoreSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn snapshot(label: &str) -> ScoreSnapshot {
        ScoreSnapshot {
            time_label: label.to_owned(),
            scores: BTreeMap::new(),
        }
    }

    #[test]
    fn starts_empty() {
        let series = ScoreSeries::new(DEFAULT_WINDOW);
        assert!(series.is_empty());
        assert!(series.latest().is_none());
    }

    #[test]
    fn push_appends_and_latest_follows() {
        let mut series = ScoreSeries::new(DEFAULT_WINDOW);
        series.push(snapshot("0:00"));
        series.push(snapshot("0:02"));
        assert_eq!(series.len(), 2);
        assert_eq!(series.latest().unwrap().time_label, "0:02");
    }

    #[test]
    fn window_never_exceeded_after_many_pushes() {
        let mut series = ScoreSeries::new(15);
        for i in 0..100u64 {
            series.push(snapshot(&format!("t{i}")));
            assert!(series.len() <= 15);
        }
        assert_eq!(series.len(), 15);
        // The oldest retained entry is push 85 of 0..100.
        assert_eq!(series.iter().next().unwrap().time_label, "t85");
        assert_eq!(series.latest().unwrap().time_label, "t99");
    }

    #[test]
    fn zero_window_is_treated_as_one() {
        let mut series = ScoreSeries::new(0);
        series.push(snapshot("0:00"));
        series.push(snapshot("0:02"));
        assert_eq!(series.len(), 1);
        assert_eq!(series.latest().unwrap().time_label, "0:02");
    }

    #[test]
    fn clear_empties_the_series() {
        let mut series = ScoreSeries::new(3);
        series.push(snapshot("0:00"));
        series.clear();
        assert!(series.is_empty());
    }
}
