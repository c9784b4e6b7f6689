//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// Every variant is a precondition failure detected before a simulation
/// pass starts. Once a pass is running it cannot fail, so there is nothing
/// to retry: the caller has to fix its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The simulation was configured with unusable parameters.
    ///
    /// Raised for a non-positive capacity or an empty policy set.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The policy selector does not name a supported policy.
    #[error("unknown policy: {0:?} (expected one of FIFO, LRU, MRU, MFU, LFU, MIN)")]
    UnknownPolicy(String),

    /// A token in a textual trace is not a page number.
    #[error("invalid page number: {0:?}")]
    InvalidPage(String),
}
