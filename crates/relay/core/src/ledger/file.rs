//! File-backed ledger.

use super::{DeliveryTx, LedgerError, PublishLedger};
use relay_pubsub::{PublishKey, PublishStatus};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeSet,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::RwLock,
};
use tracing::{debug, trace};

/// On-disk layout of a [`FileLedger`].
#[derive(Debug, Default, Serialize, Deserialize)]
struct LedgerFile {
    succeeded: BTreeSet<PublishKey>,
}

/// A [`PublishLedger`] persisted as a JSON file.
///
/// The file is rewritten on every commit through a temporary sibling file and an atomic
/// rename, so a crash leaves either the previous or the next ledger on disk.
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    succeeded: RwLock<BTreeSet<PublishKey>>,
}

impl FileLedger {
    /// Opens the ledger at `path`. A missing file is an empty ledger.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LedgerError> {
        let path = path.into();
        let succeeded = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice::<LedgerFile>(&bytes)?.succeeded,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeSet::new(),
            Err(err) => return Err(err.into()),
        };
        debug!(
            target: "relay::ledger",
            path = %path.display(),
            delivered = succeeded.len(),
            "Opened ledger"
        );
        Ok(Self { path, succeeded: RwLock::new(succeeded) })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, ledger: &LedgerFile) -> Result<(), LedgerError> {
        let tmp = self.path.with_extension("tmp");
        let encoded = serde_json::to_vec_pretty(ledger)?;
        {
            let mut file = File::create(&tmp)?;
            file.write_all(&encoded)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PublishLedger for FileLedger {
    fn status(&self, key: &PublishKey) -> Result<PublishStatus, LedgerError> {
        let succeeded = self.succeeded.read().map_err(|_| LedgerError::Poisoned)?;
        Ok(if succeeded.contains(key) { PublishStatus::Succeeded } else { PublishStatus::NotRecorded })
    }

    fn commit(&self, tx: &DeliveryTx) -> Result<(), LedgerError> {
        let mut succeeded = self.succeeded.write().map_err(|_| LedgerError::Poisoned)?;
        if let Some(key) = tx.succeeded().iter().find(|key| succeeded.contains(*key)) {
            return Err(LedgerError::Conflict(*key));
        }

        let mut next = LedgerFile { succeeded: succeeded.clone() };
        next.succeeded.extend(tx.succeeded().iter().copied());
        self.persist(&next)?;
        *succeeded = next.succeeded;

        trace!(target: "relay::ledger", staged = tx.succeeded().len(), "Persisted delivery");
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
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = FileLedger::open(dir.path().join("ledger.json")).unwrap();
        assert_eq!(ledger.status(&key(1)).unwrap(), PublishStatus::NotRecorded);
        assert!(!ledger.path().exists());
    }

    #[test]
    fn test_commit_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");

        let ledger = FileLedger::open(&path).unwrap();
        let mut tx = DeliveryTx::new();
        tx.record_success(key(1));
        ledger.commit(&tx).unwrap();
        drop(ledger);

        let reopened = FileLedger::open(&path).unwrap();
        assert_eq!(reopened.status(&key(1)).unwrap(), PublishStatus::Succeeded);
        assert!(!path.with_extension("tmp").exists());

        let mut tx = DeliveryTx::new();
        tx.record_success(key(1));
        assert!(matches!(reopened.commit(&tx), Err(LedgerError::Conflict(_))));
    }

    #[test]
    fn test_failed_persist_applies_nothing() {
        let dir = tempfile::tempdir().unwrap();
        // The parent directory does not exist, so the temporary file cannot be created.
        let ledger = FileLedger::open(dir.path().join("missing").join("ledger.json")).unwrap();

        let mut tx = DeliveryTx::new();
        tx.record_success(key(1));
        assert!(matches!(ledger.commit(&tx), Err(LedgerError::Io(_))));
        assert_eq!(ledger.status(&key(1)).unwrap(), PublishStatus::NotRecorded);
    }

    #[test]
    fn test_corrupt_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, b"not json").unwrap();
        assert!(matches!(FileLedger::open(&path), Err(LedgerError::Codec(_))));
    }
}
