//! The cumulative drop ledger: root rotation, claims, and funding.
//!
//! State transitions are atomic per call: every failure path returns
//! before the first mutation, so an error leaves nothing to observe.
//! The claim record is written before the balance debit, so a claim
//! re-entered during payout sees the already-updated cumulative amount.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use halyard_crypto::merkle::{leaf_hash, verify_proof};
use halyard_types::events::DropEvent;
use halyard_types::{Address, Hash};

use crate::{DropError, Result};

/// Cumulative Merkle drop ledger.
///
/// Holds the authoritative root for the current distribution cycle, the
/// per-beneficiary cumulative-paid record, and the balance from which
/// claims are paid. Only the configured updater may rotate the root;
/// anyone may submit a claim for any beneficiary, since entitlement is
/// proven, not asserted by the caller.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DropLedger {
    /// The sole principal allowed to rotate the root.
    updater: Address,
    /// Root of the current reward-table snapshot.
    current_root: Hash,
    /// Content address of the current cycle's full proof set. Advisory.
    metadata_uri: String,
    /// Cumulative amount already paid, per beneficiary. Entries default
    /// to zero and are never deleted.
    claimed: BTreeMap<Address, u64>,
    /// Balance available for payouts.
    balance: u64,
    /// Append-only notification log.
    events: Vec<DropEvent>,
}

impl DropLedger {
    /// Create a ledger with no root, no funds, and an empty record.
    ///
    /// Claims against the all-zero initial root fail proof verification
    /// until the first rotation lands.
    pub fn new(updater: Address) -> Self {
        Self {
            updater,
            current_root: [0u8; 32],
            metadata_uri: String::new(),
            claimed: BTreeMap::new(),
            balance: 0,
            events: Vec::new(),
        }
    }

    /// Replace the authoritative root for a new distribution cycle.
    ///
    /// The claim record is intentionally untouched: the new table holds
    /// cumulative totals, so prior payouts stay subtracted.
    ///
    /// # Errors
    ///
    /// - [`DropError::Unauthorized`] if `caller` is not the updater
    pub fn set_root(
        &mut self,
        caller: Address,
        new_root: Hash,
        metadata_uri: impl Into<String>,
    ) -> Result<()> {
        if caller != self.updater {
            return Err(DropError::Unauthorized);
        }

        let metadata_uri = metadata_uri.into();
        self.current_root = new_root;
        self.metadata_uri = metadata_uri.clone();
        self.events.push(DropEvent::RootUpdated {
            root: new_root,
            metadata_uri: metadata_uri.clone(),
        });

        tracing::info!(
            root = %hex::encode(new_root),
            %metadata_uri,
            "drop: root rotated"
        );
        Ok(())
    }

    /// Claim the delta between a proven cumulative entitlement and the
    /// amount already paid.
    ///
    /// Returns the delta paid out. Any caller may claim on behalf of
    /// any beneficiary; the payout always goes to the beneficiary.
    ///
    /// # Errors
    ///
    /// - [`DropError::InvalidProof`] if the leaf does not fold to the
    ///   current root (e.g. a stale or forged proof)
    /// - [`DropError::AlreadyClaimed`] if `cumulative_amount` is not
    ///   strictly greater than the recorded amount
    /// - [`DropError::InsufficientFunds`] if the held balance cannot
    ///   cover the delta
    pub fn claim(
        &mut self,
        beneficiary: Address,
        cumulative_amount: u64,
        proof: &[Hash],
    ) -> Result<u64> {
        let leaf = leaf_hash(&beneficiary, cumulative_amount);
        if !verify_proof(self.current_root, leaf, proof) {
            return Err(DropError::InvalidProof);
        }

        let claimed = self.claimed.get(&beneficiary).copied().unwrap_or(0);
        let delta = match cumulative_amount.checked_sub(claimed) {
            Some(delta) if delta > 0 => delta,
            _ => {
                return Err(DropError::AlreadyClaimed {
                    cumulative: cumulative_amount,
                    claimed,
                })
            }
        };

        if delta > self.balance {
            return Err(DropError::InsufficientFunds {
                needed: delta,
                available: self.balance,
            });
        }

        // Record before paying: a re-entered claim must see the new
        // cumulative amount and fail the monotonicity check.
        self.claimed.insert(beneficiary, cumulative_amount);
        self.balance -= delta;
        self.events.push(DropEvent::Claimed { beneficiary, delta });

        tracing::info!(
            beneficiary = %hex::encode(beneficiary),
            delta,
            cumulative_amount,
            "drop: claim paid"
        );
        Ok(delta)
    }

    /// Top up the balance claims are paid from.
    ///
    /// # Errors
    ///
    /// - [`DropError::Overflow`] if the balance would overflow
    pub fn fund(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(DropError::Overflow)?;
        self.events.push(DropEvent::Funded { amount });
        tracing::trace!(amount, balance = self.balance, "drop: funded");
        Ok(())
    }

    /// The root of the current distribution cycle.
    pub fn current_root(&self) -> Hash {
        self.current_root
    }

    /// Content address published with the current root.
    pub fn metadata_uri(&self) -> &str {
        &self.metadata_uri
    }

    /// Cumulative amount already paid to a beneficiary.
    pub fn claimed_amount(&self, beneficiary: &Address) -> u64 {
        self.claimed.get(beneficiary).copied().unwrap_or(0)
    }

    /// Balance currently available for payouts.
    pub fn balance(&self) -> u64 {
        self.balance
    }

    /// The append-only notification log.
    pub fn events(&self) -> &[DropEvent] {
        &self.events
    }

    /// Drain the notification log, handing entries to an indexer.
    pub fn drain_events(&mut self) -> Vec<DropEvent> {
        std::mem::take(&mut self.events)
    }
}
