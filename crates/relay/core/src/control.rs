//! Administrative state read by the delivery path.

use crate::HeaderOracle;
use alloy_primitives::ChainId;
use std::{
    collections::HashMap,
    sync::{
        Arc, PoisonError, RwLock,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
};
use tracing::info;

/// Administrative controls of a relay: the pause flag, the callback resource budget and
/// the header oracle of each source chain.
///
/// The admin layer owns mutation; [`Publisher`](crate::Publisher) only reads.
#[derive(Debug)]
pub struct RelayControl {
    paused: AtomicBool,
    callback_gas_limit: AtomicU64,
    oracles: RwLock<HashMap<ChainId, Arc<dyn HeaderOracle>>>,
}

impl RelayControl {
    /// Creates a new [`RelayControl`] with no header oracles.
    pub fn new(paused: bool, callback_gas_limit: u64) -> Self {
        Self {
            paused: AtomicBool::new(paused),
            callback_gas_limit: AtomicU64::new(callback_gas_limit),
            oracles: RwLock::default(),
        }
    }

    /// Pauses delivery.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::SeqCst);
        info!(target: "relay::control", "Delivery paused");
    }

    /// Resumes delivery.
    pub fn unpause(&self) {
        self.paused.store(false, Ordering::SeqCst);
        info!(target: "relay::control", "Delivery resumed");
    }

    /// Returns `true` if delivery is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Sets the resource budget forwarded to receivers.
    pub fn set_callback_gas_limit(&self, gas_limit: u64) {
        self.callback_gas_limit.store(gas_limit, Ordering::SeqCst);
    }

    /// Returns the resource budget forwarded to receivers.
    pub fn callback_gas_limit(&self) -> u64 {
        self.callback_gas_limit.load(Ordering::SeqCst)
    }

    /// Configures the header oracle of `chain_id`, replacing any previous one.
    pub fn set_header_oracle(&self, chain_id: ChainId, oracle: Arc<dyn HeaderOracle>) {
        self.oracles.write().unwrap_or_else(PoisonError::into_inner).insert(chain_id, oracle);
        info!(target: "relay::control", chain_id, "Header oracle configured");
    }

    /// Removes the header oracle of `chain_id`.
    pub fn clear_header_oracle(&self, chain_id: ChainId) -> Option<Arc<dyn HeaderOracle>> {
        self.oracles.write().unwrap_or_else(PoisonError::into_inner).remove(&chain_id)
    }

    /// Returns the header oracle of `chain_id`, if configured.
    pub fn header_oracle(&self, chain_id: ChainId) -> Option<Arc<dyn HeaderOracle>> {
        self.oracles.read().unwrap_or_else(PoisonError::into_inner).get(&chain_id).cloned()
    }
}

impl From<&crate::RelayConfig> for RelayControl {
    fn from(config: &crate::RelayConfig) -> Self {
        Self::new(config.paused, config.callback_gas_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RelayConfig, StaticHeaderOracle};

    #[test]
    fn test_pause_toggle() {
        let control = RelayControl::new(false, 1);
        assert!(!control.is_paused());
        control.pause();
        assert!(control.is_paused());
        control.unpause();
        assert!(!control.is_paused());
    }

    #[test]
    fn test_from_config() {
        let config = RelayConfig { paused: true, callback_gas_limit: 42, ..Default::default() };
        let control = RelayControl::from(&config);
        assert!(control.is_paused());
        assert_eq!(control.callback_gas_limit(), 42);
    }

    #[test]
    fn test_header_oracle_registry() {
        let control = RelayControl::new(false, 1);
        assert!(control.header_oracle(1).is_none());

        control.set_header_oracle(1, Arc::new(StaticHeaderOracle::new()));
        assert!(control.header_oracle(1).is_some());
        assert!(control.header_oracle(2).is_none());

        assert!(control.clear_header_oracle(1).is_some());
        assert!(control.header_oracle(1).is_none());
    }
}
