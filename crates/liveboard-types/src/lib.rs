//! Shared type definitions for the Liveboard progress simulator.
//!
//! This crate is the single source of truth for all types used across the
//! Liveboard workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the presentation layer.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity identifiers
//! - [`palette`] -- The fixed cyclic color palette
//! - [`structs`] -- Core entity structs (participants, snapshots, standings,
//!   leader changes, celebration bursts)

pub mod ids;
pub mod palette;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use ids::{CelebrationId, ParticipantId};
pub use palette::{PALETTE, color_for_index};
pub use structs::{
    BurstOrigin, CelebrationBurst, LeaderChange, Participant, ScoreSnapshot, Standing,
};
