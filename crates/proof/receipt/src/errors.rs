//! Errors for receipt proofs and log extraction.

use alloy_eips::eip2718::Eip2718Error;
use alloy_primitives::{Address, B256};
use alloy_trie::proof::ProofVerificationError;
use thiserror::Error;

/// Errors raised while extracting an event from a receipt proof.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// No trie nodes were supplied.
    #[error("empty receipt proof")]
    EmptyProof,
    /// The final proof node could not be decoded.
    #[error("malformed trie node: {0}")]
    MalformedNode(#[from] alloy_rlp::Error),
    /// The final proof node is not a leaf.
    #[error("receipt proof does not end in a leaf node")]
    UnexpectedNode,
    /// The proof does not match the receipts root.
    #[error("receipt proof verification failed: {0}")]
    Proof(ProofVerificationError),
    /// The proven value is not a valid receipt.
    #[error("failed to decode receipt: {0}")]
    Decode(Eip2718Error),
    /// The receipt has no log at the requested index.
    #[error("log index {index} out of bounds for receipt with {len} logs")]
    LogIndexOutOfBounds {
        /// Requested log index.
        index: u64,
        /// Number of logs in the receipt.
        len: usize,
    },
    /// The log was emitted by another contract.
    #[error("log emitted by {actual}, expected {expected}")]
    SourceMismatch {
        /// Expected emitter.
        expected: Address,
        /// Actual emitter.
        actual: Address,
    },
    /// The log has no topics, so it cannot carry an event signature.
    #[error("log has no event signature")]
    MissingSignature,
    /// The first topic of the log is not the expected event signature.
    #[error("event signature {actual}, expected {expected}")]
    SignatureMismatch {
        /// Expected event signature.
        expected: B256,
        /// Actual first topic.
        actual: B256,
    },
}
