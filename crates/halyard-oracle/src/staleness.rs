//! Harvest freshness tracking.
//!
//! The rate only moves when the harvesting collaborator reports in. A
//! stalled harvester leaves the feed answering with an old rate, which
//! downstream vaults would happily keep pricing against. This guard
//! gives keeper tooling a cheap freshness check to alarm on.
//!
//! Advisory only: the feed itself stays infallible.

use halyard_types::config::DEFAULT_STALENESS_THRESHOLD_SECS;

use crate::{OracleError, Result};

/// Tracks the last harvest time against a staleness threshold.
#[derive(Debug, Clone)]
pub struct StalenessGuard {
    /// Unix timestamp of the last observed harvest.
    last_update_time: u64,
    /// Staleness threshold in seconds.
    staleness_threshold: u64,
}

impl StalenessGuard {
    /// Create a guard with the default threshold, seeded with the
    /// timestamp of the initial oracle state.
    pub fn new(initial_time: u64) -> Self {
        Self {
            last_update_time: initial_time,
            staleness_threshold: DEFAULT_STALENESS_THRESHOLD_SECS,
        }
    }

    /// Create a guard with a custom staleness threshold.
    pub fn with_threshold(initial_time: u64, staleness_threshold: u64) -> Self {
        Self {
            last_update_time: initial_time,
            staleness_threshold,
        }
    }

    /// Record a successful harvest.
    pub fn record_harvest(&mut self, harvest_time: u64) {
        self.last_update_time = harvest_time;
    }

    /// Whether the time since the last harvest exceeds the threshold.
    pub fn is_stale(&self, current_time: u64) -> bool {
        current_time.saturating_sub(self.last_update_time) > self.staleness_threshold
    }

    /// Check freshness, surfacing staleness as an error for keepers.
    ///
    /// # Errors
    ///
    /// - [`OracleError::StaleHarvest`] if no harvest landed within the
    ///   threshold
    pub fn check_fresh(&self, current_time: u64) -> Result<()> {
        if self.is_stale(current_time) {
            tracing::warn!(
                last_update = self.last_update_time,
                current = current_time,
                threshold = self.staleness_threshold,
                "oracle: harvest is stale"
            );
            return Err(OracleError::StaleHarvest {
                last_update: self.last_update_time,
                current: current_time,
                threshold: self.staleness_threshold,
            });
        }
        Ok(())
    }

    /// Timestamp of the last observed harvest.
    pub fn last_update_time(&self) -> u64 {
        self.last_update_time
    }

    /// The configured staleness threshold.
    pub fn staleness_threshold(&self) -> u64 {
        self.staleness_threshold
    }
}
