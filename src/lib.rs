//! pagesim - A page replacement simulator.
//!
//! Replays one access trace through a fixed-capacity, fully-associative
//! cache under each of the classical replacement policies and reports,
//! for every access, whether it hit, how a miss is classified, what the
//! cache holds afterwards and which page (if any) was evicted.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Runner (simulation::runner)               │   │
//! │  │      run(name, trace, capacity) · run_all · run_many     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Simulator (simulation::Simulator)             │   │
//! │  │   one forward pass · hit/miss · compulsory/capacity      │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Replacers: FIFO | LRU | MRU | MFU | LFU | MIN  │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │        CacheState (ResidentList) · RunResult · RunStats  │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                   Common (common/)                       │   │
//! │  │   PageId · SlotId · AccessTrace · Capacity · Error       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, AccessTrace, Capacity, Error, config)
//! - [`replacer`] - Eviction policy implementations
//! - [`simulation`] - Trace replay, outcomes and statistics
//!
//! # Quick Start
//! ```
//! use pagesim::{run, AccessTrace, MissKind, PageId};
//!
//! let trace: AccessTrace = "1 2 3 1 2 4".parse().unwrap();
//! let result = run("FIFO", &trace, 3).unwrap();
//!
//! assert_eq!(result.total_hits, 2);
//! assert_eq!(result.outcomes[5].miss_kind, Some(MissKind::Capacity));
//! assert_eq!(result.outcomes[5].evicted, Some(PageId::new(1)));
//! ```
//!
//! # Logging
//! Runs emit `tracing` events (`debug` per run, `trace` per eviction). The
//! crate installs no subscriber.

pub mod common;
pub mod replacer;
pub mod simulation;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_CAPACITY, DEFAULT_POLICIES};
pub use common::{AccessTrace, Capacity, Error, PageId, Result, SimulationConfig, SlotId};

pub use replacer::{PolicyKind, ReplacementPolicy};
pub use simulation::{
    run, run_all, run_many, run_with, AccessOutcome, MissKind, RunResult, RunStats, Simulator,
};
