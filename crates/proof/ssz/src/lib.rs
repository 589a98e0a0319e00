#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod errors;
pub use errors::SszError;

mod branch;
pub use branch::{concat_gindex, gindex_depth, hash_pair, is_valid_merkle_branch, restore_merkle_root};

mod fork;
pub use fork::ForkSchedule;

mod receipts;
pub use receipts::{
    SLOT_BRANCH_LEN, SLOTS_PER_HISTORICAL_ROOT, receipts_root_gindex, verify_receipts_root,
};

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
