//! The receiver seam and the registry of receivers by address.

use alloy_primitives::{Address, Bytes};
use auto_impl::auto_impl;
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::{Arc, PoisonError, RwLock},
};

/// Result of calling a receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutcome {
    /// Whether the call completed without reverting.
    pub success: bool,
    /// Return data on success, revert data otherwise.
    pub output: Bytes,
}

impl CallOutcome {
    /// A call that returned `output`.
    pub const fn success(output: Bytes) -> Self {
        Self { success: true, output }
    }

    /// A call that reverted with `output`.
    pub const fn revert(output: Bytes) -> Self {
        Self { success: false, output }
    }

    /// A call that exhausted its resource budget.
    pub const fn out_of_gas() -> Self {
        Self::revert(Bytes::new())
    }
}

/// A destination-chain receiver.
///
/// Receivers are untrusted: they may revert, exhaust `gas_limit`, return arbitrary data,
/// or call back into the relay.
#[auto_impl(&, Box, Arc)]
pub trait SubscriptionReceiver: Debug + Send + Sync {
    /// Executes `calldata` with a resource budget of `gas_limit`.
    fn call(&self, calldata: &Bytes, gas_limit: u64) -> CallOutcome;
}

/// Receivers deployed at destination addresses.
#[derive(Debug, Default)]
pub struct ReceiverRegistry {
    receivers: RwLock<HashMap<Address, Arc<dyn SubscriptionReceiver>>>,
}

impl ReceiverRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deploys `receiver` at `address`, replacing any previous receiver.
    pub fn register(&self, address: Address, receiver: Arc<dyn SubscriptionReceiver>) {
        self.receivers.write().unwrap_or_else(PoisonError::into_inner).insert(address, receiver);
    }

    /// Removes the receiver at `address`.
    pub fn unregister(&self, address: &Address) -> Option<Arc<dyn SubscriptionReceiver>> {
        self.receivers.write().unwrap_or_else(PoisonError::into_inner).remove(address)
    }

    /// Returns the receiver at `address`.
    pub fn get(&self, address: &Address) -> Option<Arc<dyn SubscriptionReceiver>> {
        self.receivers.read().unwrap_or_else(PoisonError::into_inner).get(address).cloned()
    }

    /// Calls the receiver at `address`. An address without a receiver behaves like an
    /// account without code: the call succeeds and returns nothing.
    pub fn call(&self, address: &Address, calldata: &Bytes, gas_limit: u64) -> CallOutcome {
        // Released before the call so receivers can reach the registry.
        let receiver = self.get(address);
        receiver.map_or_else(
            || CallOutcome::success(Bytes::new()),
            |receiver| receiver.call(calldata, gas_limit),
        )
    }
}
