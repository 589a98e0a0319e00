//! The header oracle (light client) seam.

use alloy_primitives::B256;
use auto_impl::auto_impl;
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::{
        PoisonError, RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

/// Read-only view of a light client that tracks trusted beacon header roots of one
/// source chain.
#[auto_impl(&, Box, Arc)]
pub trait HeaderOracle: Debug + Send + Sync {
    /// Returns the trusted header root at `slot`, if known.
    fn header_root(&self, slot: u64) -> Option<B256>;

    /// Returns `false` if the light client has seen conflicting headers. No proof should
    /// be trusted until this is resolved.
    fn is_consistent(&self) -> bool;
}

/// A [`HeaderOracle`] over a fixed set of header roots.
#[derive(Debug)]
pub struct StaticHeaderOracle {
    headers: RwLock<HashMap<u64, B256>>,
    consistent: AtomicBool,
}

impl Default for StaticHeaderOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl StaticHeaderOracle {
    /// Creates an empty, consistent oracle.
    pub fn new() -> Self {
        Self { headers: RwLock::default(), consistent: AtomicBool::new(true) }
    }

    /// Records the header root of `slot`.
    pub fn insert_header(&self, slot: u64, root: B256) {
        self.headers.write().unwrap_or_else(PoisonError::into_inner).insert(slot, root);
    }

    /// Sets the consistency flag.
    pub fn set_consistent(&self, consistent: bool) {
        self.consistent.store(consistent, Ordering::SeqCst);
    }
}

impl HeaderOracle for StaticHeaderOracle {
    fn header_root(&self, slot: u64) -> Option<B256> {
        self.headers.read().unwrap_or_else(PoisonError::into_inner).get(&slot).copied()
    }

    fn is_consistent(&self) -> bool {
        self.consistent.load(Ordering::SeqCst)
    }
}
