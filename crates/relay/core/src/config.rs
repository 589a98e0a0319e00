//! Relay configuration.

use alloy_primitives::ChainId;
use relay_ssz::ForkSchedule;
use serde::{Deserialize, Serialize};

/// Default resource budget forwarded to a receiver per delivery attempt.
const DEFAULT_CALLBACK_GAS_LIMIT: u64 = 1_000_000;

/// Static configuration of a relay instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RelayConfig {
    /// Initial state of the administrative pause flag.
    pub paused: bool,
    /// Resource budget forwarded to the receiver on each delivery attempt.
    pub callback_gas_limit: u64,
    /// Fork schedules overriding or extending the built-in ones.
    pub forks: Vec<ChainForkSchedule>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self { paused: false, callback_gas_limit: DEFAULT_CALLBACK_GAS_LIMIT, forks: Vec::new() }
    }
}

impl RelayConfig {
    /// Returns the fork schedule of `chain_id`: the configured one if any, otherwise the
    /// built-in one.
    pub fn fork_schedule(&self, chain_id: ChainId) -> ForkSchedule {
        self.forks
            .iter()
            .rev()
            .find(|entry| entry.chain_id == chain_id)
            .map_or_else(|| ForkSchedule::for_chain(chain_id), |entry| entry.schedule)
    }
}

/// A [`ForkSchedule`] bound to a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ChainForkSchedule {
    /// The source chain.
    pub chain_id: ChainId,
    /// Its fork schedule.
    #[serde(flatten)]
    pub schedule: ForkSchedule,
}
