//! Extraction of a single event log from a proven receipt.

use crate::{ReceiptError, verify_receipt_proof};
use alloy_consensus::ReceiptEnvelope;
use alloy_eips::eip2718::Decodable2718;
use alloy_primitives::{Address, B256, Bytes, LogData};

/// Proves the receipt at `tx_index_encoded` under `receipts_root` and returns the topics and
/// data of its log at `log_index`.
///
/// The log must be emitted by `source_address` and its first topic must be
/// `event_signature`.
pub fn parse_event(
    receipt_proof: &[Bytes],
    receipts_root: B256,
    tx_index_encoded: &[u8],
    log_index: u64,
    source_address: Address,
    event_signature: B256,
) -> Result<LogData, ReceiptError> {
    let value = verify_receipt_proof(receipts_root, tx_index_encoded, receipt_proof)?;
    let receipt =
        ReceiptEnvelope::decode_2718(&mut value.as_slice()).map_err(ReceiptError::Decode)?;

    let logs = receipt.logs();
    let log = usize::try_from(log_index)
        .ok()
        .and_then(|index| logs.get(index))
        .ok_or(ReceiptError::LogIndexOutOfBounds { index: log_index, len: logs.len() })?;

    if log.address != source_address {
        return Err(ReceiptError::SourceMismatch {
            expected: source_address,
            actual: log.address,
        });
    }
    match log.data.topics().first() {
        None => return Err(ReceiptError::MissingSignature),
        Some(topic) if *topic != event_signature => {
            return Err(ReceiptError::SignatureMismatch {
                expected: event_signature,
                actual: *topic,
            });
        }
        Some(_) => {}
    }

    Ok(log.data.clone())
}
