//! In-memory ledger.

use super::{DeliveryTx, LedgerError, PublishLedger};
use relay_pubsub::{PublishKey, PublishStatus};
use std::{collections::BTreeSet, sync::RwLock};
use tracing::trace;

/// A [`PublishLedger`] held in memory.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    succeeded: RwLock<BTreeSet<PublishKey>>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of delivered keys.
    pub fn len(&self) -> Result<usize, LedgerError> {
        Ok(self.succeeded.read().map_err(|_| LedgerError::Poisoned)?.len())
    }

    /// Returns `true` if nothing has been delivered.
    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

impl PublishLedger for MemoryLedger {
    fn status(&self, key: &PublishKey) -> Result<PublishStatus, LedgerError> {
        let succeeded = self.succeeded.read().map_err(|_| LedgerError::Poisoned)?;
        Ok(if succeeded.contains(key) { PublishStatus::Succeeded } else { PublishStatus::NotRecorded })
    }

    fn commit(&self, tx: &DeliveryTx) -> Result<(), LedgerError> {
        let mut succeeded = self.succeeded.write().map_err(|_| LedgerError::Poisoned)?;
        if let Some(key) = tx.succeeded().iter().find(|key| succeeded.contains(*key)) {
            return Err(LedgerError::Conflict(*key));
        }
        succeeded.extend(tx.succeeded().iter().copied());
        trace!(target: "relay::ledger", staged = tx.succeeded().len(), "Committed delivery");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::B256;

    fn key(byte: u8) -> PublishKey {
        PublishKey::from(B256::repeat_byte(byte))
    }

    #[test]
    fn test_commit_records_success() {
        let ledger = MemoryLedger::new();
        assert_eq!(ledger.status(&key(1)).unwrap(), PublishStatus::NotRecorded);

        let mut tx = DeliveryTx::new();
        tx.record_success(key(1));
        ledger.commit(&tx).unwrap();

        assert_eq!(ledger.status(&key(1)).unwrap(), PublishStatus::Succeeded);
        assert_eq!(ledger.status(&key(2)).unwrap(), PublishStatus::NotRecorded);
        assert_eq!(ledger.len().unwrap(), 1);
    }

    #[test]
    fn test_dropped_tx_applies_nothing() {
        let ledger = MemoryLedger::new();
        {
            let mut tx = DeliveryTx::new();
            tx.record_success(key(1));
        }
        assert!(ledger.is_empty().unwrap());
    }

    #[test]
    fn test_conflicting_commit_is_all_or_nothing() {
        let ledger = MemoryLedger::new();
        let mut first = DeliveryTx::new();
        first.record_success(key(1));
        ledger.commit(&first).unwrap();

        let mut second = DeliveryTx::new();
        second.record_success(key(2));
        second.record_success(key(1));
        assert!(matches!(ledger.commit(&second), Err(LedgerError::Conflict(k)) if k == key(1)));
        assert_eq!(ledger.status(&key(2)).unwrap(), PublishStatus::NotRecorded);
    }
}
