//! Builders for receipts and receipts tries.

use crate::encode_tx_index;
use alloy_consensus::{Eip658Value, Receipt, ReceiptEnvelope};
use alloy_eips::eip2718::Encodable2718;
use alloy_primitives::{Address, B256, Bytes, Log};
use alloy_trie::{
    HashBuilder, Nibbles,
    proof::{ProofNodes, ProofRetainer},
};

/// Emitter, topics and data of one log.
pub type LogSpec = (Address, Vec<B256>, Vec<u8>);

fn receipt(logs: Vec<LogSpec>) -> Receipt {
    let logs = logs
        .into_iter()
        .map(|(address, topics, data)| Log::new_unchecked(address, topics, data.into()))
        .collect();
    Receipt { status: Eip658Value::Eip658(true), cumulative_gas_used: 21_000, logs }
}

/// Encodes an EIP-1559 receipt carrying `logs`.
pub fn receipt_with_logs(logs: Vec<LogSpec>) -> Vec<u8> {
    ReceiptEnvelope::Eip1559(receipt(logs).with_bloom()).encoded_2718()
}

/// Encodes a legacy receipt carrying `logs`.
pub fn legacy_receipt_with_logs(logs: Vec<LogSpec>) -> Vec<u8> {
    ReceiptEnvelope::Legacy(receipt(logs).with_bloom()).encoded_2718()
}

/// A receipts trie retaining the proof of every receipt.
#[derive(Debug)]
pub struct ReceiptTrie {
    /// Root of the trie.
    pub root: B256,
    nodes: ProofNodes,
}

impl ReceiptTrie {
    /// Builds the trie of `receipts`, keyed by their RLP-encoded index.
    pub fn new(receipts: &[Vec<u8>]) -> Self {
        let mut leaves = receipts
            .iter()
            .enumerate()
            .map(|(index, receipt)| (Nibbles::unpack(encode_tx_index(index as u64)), receipt))
            .collect::<Vec<_>>();
        leaves.sort_by(|a, b| a.0.cmp(&b.0));

        let targets = leaves.iter().map(|(key, _)| key.clone()).collect();
        let mut builder = HashBuilder::default().with_proof_retainer(ProofRetainer::new(targets));
        for (key, value) in &leaves {
            builder.add_leaf(key.clone(), value.as_slice());
        }
        let root = builder.root();
        Self { root, nodes: builder.take_proof_nodes() }
    }

    /// Returns the proof of the receipt at `index`, root first.
    pub fn proof(&self, index: u64) -> Vec<Bytes> {
        let key = Nibbles::unpack(encode_tx_index(index));
        self.nodes.matching_nodes_sorted(&key).into_iter().map(|(_, node)| node).collect()
    }
}
