//! Trace replay.
//!
//! A simulation replays an [`AccessTrace`](crate::AccessTrace) through one
//! fixed-capacity, fully-associative cache under one replacement policy.
//!
//! # Components
//! - [`Simulator`] - The forward pass shared by every policy
//! - [`CacheState`] / [`ResidentList`] - The residents of one cache
//! - [`AccessOutcome`] / [`RunResult`] - What each access did
//! - [`RunStats`] - Summary statistics of a run
//! - [`runner`] - Policy dispatch by name or kind

mod cache_state;
mod outcome;
pub mod runner;
mod simulator;
mod stats;

pub use cache_state::{CacheState, ResidentList};
pub use outcome::{AccessOutcome, MissKind, RunResult};
pub use runner::{run, run_all, run_many, run_with};
pub use simulator::Simulator;
pub use stats::RunStats;
