//! Seams for the proof primitives, and their beacon chain implementations.

use crate::RelayConfig;
use alloy_primitives::{Address, B256, Bytes, ChainId, LogData};
use relay_receipt::{ReceiptError, parse_event};
use relay_ssz::{ForkSchedule, verify_receipts_root};
use std::fmt::Debug;
use tracing::debug;

/// Verifies that a receipts root is committed to by a trusted header root.
pub trait ProofVerifier: Debug + Send + Sync {
    /// Returns `true` if `branch` proves that `receipts_root` is the receipts root of the
    /// block at `tx_slot`, as committed to by the header with root `header_root` at
    /// `source_slot` on `chain_id`.
    fn verify(
        &self,
        receipts_root: B256,
        branch: &[B256],
        header_root: B256,
        source_slot: u64,
        tx_slot: u64,
        chain_id: ChainId,
    ) -> bool;
}

/// Extracts an event log from a receipt inclusion proof.
pub trait ReceiptParser: Debug + Send + Sync {
    /// Returns the topics and data of the log at `log_index` in the receipt at
    /// `tx_index_encoded`, which must be emitted by `source_address` with
    /// `event_signature` as topic 0.
    fn parse(
        &self,
        receipt_proof: &[Bytes],
        receipts_root: B256,
        tx_index_encoded: &[u8],
        log_index: u64,
        source_address: Address,
        event_signature: B256,
    ) -> Result<LogData, ReceiptError>;
}

/// [`ProofVerifier`] over beacon chain SSZ branches.
#[derive(Debug, Clone, Default)]
pub struct BeaconProofVerifier {
    config: RelayConfig,
}

impl BeaconProofVerifier {
    /// Creates a verifier using the fork schedules of `config`.
    pub const fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    /// Returns the fork schedule used for `chain_id`.
    pub fn fork_schedule(&self, chain_id: ChainId) -> ForkSchedule {
        self.config.fork_schedule(chain_id)
    }
}

impl ProofVerifier for BeaconProofVerifier {
    fn verify(
        &self,
        receipts_root: B256,
        branch: &[B256],
        header_root: B256,
        source_slot: u64,
        tx_slot: u64,
        chain_id: ChainId,
    ) -> bool {
        let forks = self.fork_schedule(chain_id);
        match verify_receipts_root(receipts_root, branch, header_root, source_slot, tx_slot, &forks)
        {
            Ok(()) => true,
            Err(err) => {
                debug!(
                    target: "relay::proof",
                    chain_id,
                    source_slot,
                    tx_slot,
                    %err,
                    "Receipts root proof rejected"
                );
                false
            }
        }
    }
}

/// [`ReceiptParser`] over Merkle-Patricia receipt proofs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReceiptLogParser;

impl ReceiptParser for ReceiptLogParser {
    fn parse(
        &self,
        receipt_proof: &[Bytes],
        receipts_root: B256,
        tx_index_encoded: &[u8],
        log_index: u64,
        source_address: Address,
        event_signature: B256,
    ) -> Result<LogData, ReceiptError> {
        parse_event(
            receipt_proof,
            receipts_root,
            tx_index_encoded,
            log_index,
            source_address,
            event_signature,
        )
    }
}
