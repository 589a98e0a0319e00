//! Per-chain fork activation slots that affect SSZ container layouts.

use alloy_primitives::ChainId;
use serde::{Deserialize, Serialize};

/// Fork activation slots of a beacon chain.
///
/// Only forks that change the generalized index of the receipts root are tracked:
/// Capella introduces `state.historical_summaries`, Deneb grows the execution payload
/// past 16 fields and Electra grows the beacon state past 32 fields. A fork that never
/// activates is represented by [`u64::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ForkSchedule {
    /// First slot of the Capella fork.
    pub capella_slot: u64,
    /// First slot of the Deneb fork.
    pub deneb_slot: u64,
    /// First slot of the Electra fork.
    pub electra_slot: u64,
}

impl Default for ForkSchedule {
    fn default() -> Self {
        Self::BELLATRIX
    }
}

impl ForkSchedule {
    /// A chain that never leaves the Bellatrix layout.
    pub const BELLATRIX: Self =
        Self { capella_slot: u64::MAX, deneb_slot: u64::MAX, electra_slot: u64::MAX };

    /// Ethereum mainnet.
    pub const MAINNET: Self =
        Self { capella_slot: 6_209_536, deneb_slot: 8_626_176, electra_slot: 11_649_024 };

    /// Sepolia testnet.
    pub const SEPOLIA: Self =
        Self { capella_slot: 1_818_624, deneb_slot: 4_243_456, electra_slot: 7_118_848 };

    /// Holesky testnet.
    pub const HOLESKY: Self =
        Self { capella_slot: 8_192, deneb_slot: 950_272, electra_slot: 3_710_976 };

    /// Returns the built-in schedule of a known chain, falling back to
    /// [`ForkSchedule::BELLATRIX`].
    pub const fn for_chain(chain_id: ChainId) -> Self {
        match chain_id {
            1 => Self::MAINNET,
            11_155_111 => Self::SEPOLIA,
            17_000 => Self::HOLESKY,
            _ => Self::BELLATRIX,
        }
    }

    /// Returns `true` if Capella is active at `slot`.
    pub const fn is_capella(&self, slot: u64) -> bool {
        slot >= self.capella_slot
    }

    /// Depth of the beacon state container at `slot`.
    pub const fn state_depth(&self, slot: u64) -> u32 {
        if slot >= self.electra_slot { 6 } else { 5 }
    }

    /// Depth of the execution payload container at `slot`.
    pub const fn payload_depth(&self, slot: u64) -> u32 {
        if slot >= self.deneb_slot { 5 } else { 4 }
    }
}
