//! Configuration constants and validated simulation parameters.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::common::{AccessTrace, Error, Result};
use crate::replacer::PolicyKind;
use crate::simulation::{runner, RunResult};

/// Cache capacity used when the caller does not pick one.
///
/// Three slots is the classic textbook setting for page replacement
/// exercises and keeps every snapshot short enough to read at a glance.
pub const DEFAULT_CAPACITY: usize = 3;

/// Policies replayed when the caller does not pick a subset.
pub const DEFAULT_POLICIES: [PolicyKind; 6] = PolicyKind::ALL;

/// Number of cache slots available to a simulation.
///
/// A `Capacity` is always positive; the constructors reject zero and
/// negative values with [`Error::InvalidConfiguration`], so nothing
/// downstream has to re-check it.
///
/// # Example
/// ```
/// use pagesim::Capacity;
///
/// let capacity = Capacity::new(3).unwrap();
/// assert_eq!(capacity.get(), 3);
/// assert!(Capacity::new(0).is_err());
/// assert!(Capacity::try_from(-1i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "usize")]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    /// Validate a capacity.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        NonZeroUsize::new(capacity)
            .map(Capacity)
            .ok_or_else(|| non_positive(capacity as i64))
    }

    /// The capacity as a plain count.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

fn non_positive(capacity: i64) -> Error {
    Error::InvalidConfiguration(format!("capacity must be positive, got {capacity}"))
}

impl TryFrom<i64> for Capacity {
    type Error = Error;

    fn try_from(capacity: i64) -> Result<Self> {
        if capacity <= 0 {
            return Err(non_positive(capacity));
        }
        let capacity = usize::try_from(capacity).map_err(|_| {
            Error::InvalidConfiguration(format!("capacity {capacity} does not fit in memory"))
        })?;
        Self::new(capacity)
    }
}

impl From<Capacity> for usize {
    fn from(capacity: Capacity) -> usize {
        capacity.get()
    }
}

impl Default for Capacity {
    fn default() -> Self {
        const DEFAULT: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CAPACITY) {
            Some(capacity) => capacity,
            None => panic!("DEFAULT_CAPACITY must be non-zero"),
        };
        Capacity(DEFAULT)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated set of simulation parameters.
///
/// Built with [`SimulationConfig::builder`]; `build` rejects a
/// non-positive capacity and an empty policy list.
///
/// # Example
/// ```
/// use pagesim::{AccessTrace, PolicyKind, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .capacity(2)
///     .policies([PolicyKind::Fifo, PolicyKind::Min])
///     .build()
///     .unwrap();
///
/// let results = config.run(&AccessTrace::from([1, 2, 3, 1]));
/// assert_eq!(results.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    capacity: Capacity,
    policies: Vec<PolicyKind>,
}

impl SimulationConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Configured capacity.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    /// Configured policies, in run order.
    pub fn policies(&self) -> &[PolicyKind] {
        &self.policies
    }

    /// Replay every configured policy over `trace`.
    ///
    /// Results come back in the configured policy order.
    pub fn run(&self, trace: &AccessTrace) -> Vec<RunResult> {
        runner::run_many(&self.policies, trace, self.capacity)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            capacity: Capacity::default(),
            policies: DEFAULT_POLICIES.to_vec(),
        }
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Debug, Clone)]
pub struct SimulationConfigBuilder {
    capacity: i64,
    policies: Vec<PolicyKind>,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY as i64,
            policies: DEFAULT_POLICIES.to_vec(),
        }
    }
}

impl SimulationConfigBuilder {
    /// Set the cache capacity. Validated in [`build`](Self::build).
    pub fn capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replace the policy list.
    pub fn policies(mut self, policies: impl IntoIterator<Item = PolicyKind>) -> Self {
        self.policies = policies.into_iter().collect();
        self
    }

    /// Replace the policy list from policy names.
    ///
    /// # Errors
    /// `Error::UnknownPolicy` for the first name that does not parse.
    pub fn policy_names<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        self.policies = names
            .into_iter()
            .map(str::parse::<PolicyKind>)
            .collect::<Result<Vec<PolicyKind>>>()?;
        Ok(self)
    }

    /// Validate and produce the configuration.
    ///
    /// # Errors
    /// `Error::InvalidConfiguration` for a non-positive capacity or an
    /// empty policy list.
    pub fn build(self) -> Result<SimulationConfig> {
        let capacity = Capacity::try_from(self.capacity)?;
        if self.policies.is_empty() {
            return Err(Error::InvalidConfiguration(
                "at least one policy must be selected".into(),
            ));
        }
        Ok(SimulationConfig {
            capacity,
            policies: self.policies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        assert_eq!(Capacity::default().get(), DEFAULT_CAPACITY);
        assert_eq!(DEFAULT_CAPACITY, 3);
    }

    #[test]
    fn test_capacity_rejects_non_positive() {
        assert!(matches!(Capacity::new(0), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(Capacity::try_from(0i64), Err(Error::InvalidConfiguration(_))));
        assert!(matches!(Capacity::try_from(-5i64), Err(Error::InvalidConfiguration(_))));
        assert_eq!(Capacity::try_from(4i64).unwrap().get(), 4);
    }

    #[test]
    fn test_capacity_serde() {
        let capacity = Capacity::new(5).unwrap();
        assert_eq!(serde_json::to_string(&capacity).unwrap(), "5");
        assert_eq!(serde_json::from_str::<Capacity>("5").unwrap(), capacity);
        assert!(serde_json::from_str::<Capacity>("0").is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.capacity().get(), DEFAULT_CAPACITY);
        assert_eq!(config.policies(), &PolicyKind::ALL);
        assert_eq!(SimulationConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn test_config_rejects_empty_policies() {
        let err = SimulationConfig::builder()
            .policies(Vec::<PolicyKind>::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_config_policy_names() {
        let config = SimulationConfig::builder()
            .policy_names(["lru", "MIN"])
            .unwrap()
            .capacity(2)
            .build()
            .unwrap();
        assert_eq!(config.policies(), &[PolicyKind::Lru, PolicyKind::Min]);
        assert_eq!(config.capacity().get(), 2);

        let err = SimulationConfig::builder()
            .policy_names(["lru", "arc"])
            .unwrap_err();
        assert_eq!(err, Error::UnknownPolicy("arc".into()));
    }

    #[test]
    fn test_config_run_preserves_order() {
        let config = SimulationConfig::builder()
            .policies([PolicyKind::Min, PolicyKind::Fifo])
            .build()
            .unwrap();
        let results = config.run(&AccessTrace::from([1, 2, 3, 4, 1]));
        assert_eq!(results[0].policy, PolicyKind::Min);
        assert_eq!(results[1].policy, PolicyKind::Fifo);
    }
}
