//! Ranking derived from the latest snapshot.
//!
//! Standings are computed fresh each tick -- leader state is never stored
//! except as the tracker's previously observed leader. The sort is stable
//! and the input is roster order, so equal scores rank the earlier roster
//! entry first. The leaderboard (top 3) and the chart line selection
//! (top 10) are both prefixes of the same standings vector.

use liveboard_types::{Participant, ScoreSnapshot, Standing};

/// Compute full standings for the latest snapshot.
///
/// Participants missing from the snapshot (which does not happen in normal
/// operation) fall back to their current score field. Returns standings
/// sorted descending by score with 1-based ranks; ties keep roster order.
pub fn standings(participants: &[Participant], latest: &ScoreSnapshot) -> Vec<Standing> {
    let mut entries: Vec<Standing> = participants
        .iter()
        .map(|p| Standing {
            rank: 0,
            participant_id: p.id,
            name: p.name.clone(),
            color: p.color.clone(),
            score: latest.scores.get(&p.id).copied().unwrap_or(p.score),
        })
        .collect();

    // sort_by is stable: equal scores keep roster order.
    entries.sort_by(|a, b| b.score.cmp(&a.score));

    for (index, entry) in entries.iter_mut().enumerate() {
        let rank = index.checked_add(1).unwrap_or(usize::MAX);
        entry.rank = u32::try_from(rank).unwrap_or(u32::MAX);
    }
    entries
}

/// Return the top `n` standings as a prefix slice.
pub fn top(standings: &[Standing], n: usize) -> &[Standing] {
    let end = n.min(standings.len());
    standings.get(..end).unwrap_or(&[])
}
