//! The fixed color palette assigned to participants.
//!
//! Colors are assigned cyclically by roster index so the chart and the
//! leaderboard stay visually consistent for the lifetime of a session.
//! The palette order is part of the board's visual contract and must not
//! be reordered.

/// Ordered palette of line colors, cycled by roster index.
pub const PALETTE: [&str; 15] = [
    "#22c55e", // Green
    "#ef4444", // Red
    "#3b82f6", // Blue
    "#eab308", // Yellow
    "#a855f7", // Purple
    "#ec4899", // Pink
    "#14b8a6", // Teal
    "#f97316", // Orange
    "#06b6d4", // Cyan
    "#84cc16", // Lime
    "#f59e0b", // Amber
    "#8b5cf6", // Violet
    "#10b981", // Emerald
    "#f43f5e", // Rose
    "#6366f1", // Indigo
];

/// Return the palette color for a roster index.
///
/// Indices wrap around: participant 15 gets the same color as participant 0.
pub fn color_for_index(index: usize) -> &'static str {
    let wrapped = index.checked_rem(PALETTE.len()).unwrap_or(0);
    PALETTE.get(wrapped).copied().unwrap_or("#22c55e")
}
