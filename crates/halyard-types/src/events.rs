//! Notification log entries.
//!
//! Every state transition in the core appends an entry to its owner's
//! event log. The logs are append-only and consumed by external
//! observers (indexers, keeper tooling); nothing in the core's control
//! flow depends on them.

use serde::{Deserialize, Serialize};

use crate::{Address, Hash};

/// Events recorded by the cumulative Merkle drop ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum DropEvent {
    /// The authoritative root was replaced.
    RootUpdated {
        /// The new Merkle root.
        root: Hash,
        /// Content address of the full off-chain proof set. Advisory only.
        metadata_uri: String,
    },
    /// A claim was paid out.
    Claimed {
        /// The beneficiary whose entitlement increased.
        beneficiary: Address,
        /// The delta paid by this claim.
        delta: u64,
    },
    /// The ledger's held balance was topped up.
    Funded {
        /// Amount added to the held balance.
        amount: u64,
    },
}

/// Events recorded by the reward rate accumulator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum RateEvent {
    /// A period reward was applied.
    Harvested {
        /// Newly realized reward.
        reward: u64,
        /// Previously locked value released this period.
        unlocked_bonus: u64,
        /// Harvest timestamp (Unix seconds).
        timestamp: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drop_event_serde_tagging() {
        let event = DropEvent::Claimed {
            beneficiary: [0x11; 20],
            delta: 283,
        };
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["event"], "claimed");
        assert_eq!(json["delta"], 283);
    }

    #[test]
    fn test_root_updated_round_trip() {
        let event = DropEvent::RootUpdated {
            root: [0xAB; 32],
            metadata_uri: "ipfs://bafy-example".to_string(),
        };
        let json = serde_json::to_string(&event).expect("serialize");
        let back: DropEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, event);
    }

    #[test]
    fn test_rate_event_round_trip() {
        let event = RateEvent::Harvested {
            reward: 1_000,
            unlocked_bonus: 50,
            timestamp: 1_700_000_000,
        };
        let json = serde_json::to_string(&event).expect("serialize");
        let back: RateEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, event);
    }
}
