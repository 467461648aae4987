//! The reward rate accumulator.
//!
//! Tracks the total underlying value backing the derivative token.
//! Harvests add newly realized reward plus any value unlocked this
//! period; nothing ever subtracts (there is no slashing path here), so
//! the total and the derived rate are monotonically non-decreasing.
//!
//! ## Rate formula
//!
//! ```text
//! rate = total_underlying * WAD / derivative_supply    (supply > 0)
//! rate = WAD                                           (supply == 0)
//! ```
//!
//! There is no continuous accrual term: the rate is flat between
//! harvests and steps upward when one lands.

use serde::{Deserialize, Serialize};

use halyard_types::events::RateEvent;
use halyard_types::WAD;

use crate::{OracleError, Result};

/// Accumulated reward state for the derivative token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RateAccumulator {
    /// Total underlying value backing the derivative, in raw units.
    total_underlying: u64,
    /// Timestamp of the last accepted harvest (Unix seconds).
    last_update: u64,
    /// Append-only notification log.
    events: Vec<RateEvent>,
}

impl RateAccumulator {
    /// Create an accumulator seeded with the vault's initial underlying
    /// value (the principal backing the derivative at launch).
    pub fn new(initial_underlying: u64, initial_time: u64) -> Self {
        Self {
            total_underlying: initial_underlying,
            last_update: initial_time,
            events: Vec::new(),
        }
    }

    /// Apply a period's harvested reward.
    ///
    /// `reward` is the newly realized reward; `unlocked_bonus` is value
    /// released from a prior locked allocation. Both magnitudes arrive
    /// already verified by the keeper subsystem against its own rewards
    /// root; this accumulator only consumes them.
    ///
    /// Equal timestamps are accepted so several reward sources can
    /// settle in the same ordering slot.
    ///
    /// # Errors
    ///
    /// - [`OracleError::NonMonotonicTimestamp`] if `timestamp` is older
    ///   than the last accepted one
    /// - [`OracleError::Overflow`] if the total would overflow
    pub fn harvest(&mut self, reward: u64, unlocked_bonus: u64, timestamp: u64) -> Result<()> {
        if timestamp < self.last_update {
            return Err(OracleError::NonMonotonicTimestamp {
                new: timestamp,
                last: self.last_update,
            });
        }

        let added = reward
            .checked_add(unlocked_bonus)
            .ok_or(OracleError::Overflow)?;
        self.total_underlying = self
            .total_underlying
            .checked_add(added)
            .ok_or(OracleError::Overflow)?;
        self.last_update = timestamp;
        self.events.push(RateEvent::Harvested {
            reward,
            unlocked_bonus,
            timestamp,
        });

        tracing::info!(
            reward,
            unlocked_bonus,
            total = self.total_underlying,
            timestamp,
            "oracle: harvest applied"
        );
        Ok(())
    }

    /// The exchange rate at [`halyard_types::RATE_DECIMALS`] precision.
    ///
    /// At zero supply the rate is exactly one underlying unit per
    /// derivative unit ([`WAD`]); the division is never reached.
    /// `now` is accepted for interface symmetry with the surrounding
    /// system; with no accrual term the answer does not depend on it.
    pub fn current_rate(&self, derivative_supply: u64, _now: u64) -> u128 {
        if derivative_supply == 0 {
            return WAD;
        }
        // u64 * 10^18 fits u128 with room to spare.
        (self.total_underlying as u128) * WAD / (derivative_supply as u128)
    }

    /// Total underlying value backing the derivative.
    pub fn total_underlying(&self) -> u64 {
        self.total_underlying
    }

    /// Timestamp of the last accepted harvest.
    pub fn last_update(&self) -> u64 {
        self.last_update
    }

    /// The append-only notification log.
    pub fn events(&self) -> &[RateEvent] {
        &self.events
    }

    /// Drain the notification log, handing entries to an indexer.
    pub fn drain_events(&mut self) -> Vec<RateEvent> {
        std::mem::take(&mut self.events)
    }
}
