//! Clock, tick cycle, and orchestration for the Liveboard progress board.
//!
//! This crate owns the 5-phase tick cycle that drives the board:
//! Advance, Walk, Record, Rank, and Detect.
//!
//! # Modules
//!
//! - [`celebration`] -- Burst schedule generation for the leader
//!   celebration effect.
//! - [`clock`] -- Simulated clock with tick counter, elapsed seconds,
//!   and `m:ss` label formatting.
//! - [`config`] -- Configuration loading from `liveboard-config.yaml`
//!   into strongly-typed structs.
//! - [`leader`] -- Edge-triggered detection of the favorite taking the
//!   lead.
//! - [`operator`] -- Shared observer control state (pause, speed,
//!   favorite, stop).
//! - [`rank`] -- Stable score ranking and leaderboard extraction.
//! - [`runner`] -- The bounded async run loop around the tick cycle.
//! - [`seed`] -- Roster seeding and reseeding.
//! - [`series`] -- Sliding window of score snapshots.
//! - [`tick`] -- The 5-phase tick cycle.
//! - [`walk`] -- Bounded random walk score deltas.

pub mod celebration;
pub mod clock;
pub mod config;
pub mod leader;
pub mod operator;
pub mod rank;
pub mod runner;
pub mod seed;
pub mod series;
pub mod tick;
pub mod walk;
