//! Policy dispatch: the entry points a presentation layer calls.

use std::{panic, thread};

use tracing::debug;

use crate::common::{AccessTrace, Capacity, Result};
use crate::replacer::{
    FifoReplacer, LfuReplacer, LruReplacer, MfuReplacer, MinReplacer, MruReplacer, PolicyKind,
};
use crate::simulation::RunResult;

/// Run the policy named `policy_name` over `trace` with `capacity` slots.
///
/// The capacity is validated before the name is looked at and before any
/// simulation state exists.
///
/// # Errors
/// - `Error::InvalidConfiguration` if `capacity <= 0`
/// - `Error::UnknownPolicy` if `policy_name` is not FIFO, LRU, MRU, MFU,
///   LFU or MIN (case-insensitive)
///
/// # Example
/// ```
/// use pagesim::{run, AccessTrace, Error, PageId};
///
/// let trace = AccessTrace::from([1, 2, 3, 1, 2, 4]);
/// let result = run("LRU", &trace, 3).unwrap();
/// assert_eq!(result.outcomes[5].evicted, Some(PageId::new(3)));
///
/// assert!(matches!(run("LRU", &trace, 0), Err(Error::InvalidConfiguration(_))));
/// assert!(matches!(run("ARC", &trace, 3), Err(Error::UnknownPolicy(_))));
/// ```
pub fn run(policy_name: &str, trace: &AccessTrace, capacity: i64) -> Result<RunResult> {
    let capacity = Capacity::try_from(capacity)?;
    let policy = policy_name.parse::<PolicyKind>()?;
    Ok(run_with(policy, trace, capacity))
}

/// Run `policy` over `trace` with `capacity` slots.
///
/// Every call builds fresh bookkeeping and a fresh cache.
pub fn run_with(policy: PolicyKind, trace: &AccessTrace, capacity: Capacity) -> RunResult {
    match policy {
        PolicyKind::Fifo => FifoReplacer::simulate(trace, capacity),
        PolicyKind::Lru => LruReplacer::simulate(trace, capacity),
        PolicyKind::Mru => MruReplacer::simulate(trace, capacity),
        PolicyKind::Mfu => MfuReplacer::simulate(trace, capacity),
        PolicyKind::Lfu => LfuReplacer::simulate(trace, capacity),
        PolicyKind::Min => MinReplacer::simulate(trace, capacity),
    }
}

/// Run every supported policy over `trace`, in [`PolicyKind::ALL`] order.
pub fn run_all(trace: &AccessTrace, capacity: Capacity) -> Vec<RunResult> {
    run_many(&PolicyKind::ALL, trace, capacity)
}

/// Run each of `policies` over `trace`, one thread per policy.
///
/// Runs share nothing but the read-only trace, so they need no locking.
/// Results come back in the order of `policies`.
pub fn run_many(
    policies: &[PolicyKind],
    trace: &AccessTrace,
    capacity: Capacity,
) -> Vec<RunResult> {
    debug!(policies = policies.len(), %capacity, accesses = trace.len(), "running policies");

    if policies.len() <= 1 {
        return policies
            .iter()
            .map(|&policy| run_with(policy, trace, capacity))
            .collect();
    }

    thread::scope(|scope| {
        let handles: Vec<_> = policies
            .iter()
            .map(|&policy| scope.spawn(move || run_with(policy, trace, capacity)))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    })
}
