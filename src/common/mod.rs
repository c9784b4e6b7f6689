//! Common types and utilities shared across pagesim.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and validated parameters
//! - Error types
//! - Identifiers (PageId, SlotId)
//! - The access trace fed to every simulation

mod access_trace;
pub mod config;
pub mod error;
mod page_id;
mod slot_id;

pub use access_trace::AccessTrace;
pub use config::{Capacity, SimulationConfig, SimulationConfigBuilder};
pub use error::{Error, Result};
pub use page_id::PageId;
pub use slot_id::SlotId;
