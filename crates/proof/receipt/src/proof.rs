//! Receipts trie inclusion proofs.

use crate::ReceiptError;
use alloy_primitives::{B256, Bytes};
use alloy_rlp::Decodable;
use alloy_trie::{Nibbles, nodes::TrieNode, proof::verify_proof};

/// Returns the receipts trie key of the transaction at `index`: its RLP encoding.
pub fn encode_tx_index(index: u64) -> Bytes {
    alloy_rlp::encode(index).into()
}

/// Verifies `proof` against `receipts_root` and returns the receipt stored under
/// `tx_index_encoded`.
///
/// The value is read from the final node of the proof, then the whole path from the
/// root to that leaf is checked.
pub fn verify_receipt_proof(
    receipts_root: B256,
    tx_index_encoded: &[u8],
    proof: &[Bytes],
) -> Result<Vec<u8>, ReceiptError> {
    let last = proof.last().ok_or(ReceiptError::EmptyProof)?;
    let TrieNode::Leaf(leaf) = TrieNode::decode(&mut last.as_ref())? else {
        return Err(ReceiptError::UnexpectedNode);
    };

    verify_proof(receipts_root, Nibbles::unpack(tx_index_encoded), Some(leaf.value.clone()), proof)
        .map_err(ReceiptError::Proof)?;

    Ok(leaf.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ReceiptTrie, receipt_with_logs};
    use alloy_primitives::{Address, hex};
    use rstest::rstest;

    #[rstest]
    #[case(0, "80")]
    #[case(1, "01")]
    #[case(127, "7f")]
    #[case(128, "8180")]
    #[case(256, "820100")]
    fn test_encode_tx_index(#[case] index: u64, #[case] expected: &str) {
        assert_eq!(encode_tx_index(index), Bytes::from(hex::decode(expected).unwrap()));
    }

    #[rstest]
    #[case::single(1, 0)]
    #[case::first(3, 0)]
    #[case::middle(200, 129)]
    #[case::last(200, 199)]
    fn test_verify_receipt_proof(#[case] count: u64, #[case] index: u64) {
        let receipts = (0..count)
            .map(|i| receipt_with_logs(vec![(Address::with_last_byte(i as u8), vec![], vec![])]))
            .collect::<Vec<_>>();
        let trie = ReceiptTrie::new(&receipts);

        let key = encode_tx_index(index);
        let proof = trie.proof(index);
        let value = verify_receipt_proof(trie.root, &key, &proof).unwrap();
        assert_eq!(value, receipts[index as usize]);
    }

    #[test]
    fn test_proof_for_other_key_rejected() {
        let receipts = (0..4)
            .map(|i| receipt_with_logs(vec![(Address::with_last_byte(i), vec![], vec![])]))
            .collect::<Vec<_>>();
        let trie = ReceiptTrie::new(&receipts);

        let proof = trie.proof(1);
        assert!(matches!(
            verify_receipt_proof(trie.root, &encode_tx_index(2), &proof),
            Err(ReceiptError::Proof(_))
        ));
    }

    #[test]
    fn test_wrong_root_rejected() {
        let receipts = vec![receipt_with_logs(vec![]), receipt_with_logs(vec![])];
        let trie = ReceiptTrie::new(&receipts);
        assert!(matches!(
            verify_receipt_proof(B256::repeat_byte(1), &encode_tx_index(0), &trie.proof(0)),
            Err(ReceiptError::Proof(_))
        ));
    }

    #[test]
    fn test_truncated_proof_rejected() {
        let receipts = (0..20).map(|_| receipt_with_logs(vec![])).collect::<Vec<_>>();
        let trie = ReceiptTrie::new(&receipts);

        let mut proof = trie.proof(5);
        assert!(proof.len() > 1);
        proof.truncate(1);
        assert!(verify_receipt_proof(trie.root, &encode_tx_index(5), &proof).is_err());

        assert!(matches!(
            verify_receipt_proof(trie.root, &encode_tx_index(5), &[]),
            Err(ReceiptError::EmptyProof)
        ));
    }
}
