//! # halyard-oracle
//!
//! Reward-derived pricing for the staked derivative token.
//!
//! Harvested rewards accumulate into a total-underlying-value figure;
//! the exchange rate of the derivative is that total divided by the
//! derivative's supply, at 18-decimal fixed-point precision. The rate
//! only ever steps upward, at harvest boundaries.
//!
//! ## Modules
//!
//! - [`rate`] — The reward rate accumulator
//! - [`feed`] — The latest-answer/decimals read façade
//! - [`staleness`] — Harvest freshness tracking for keeper tooling

pub mod feed;
pub mod rate;
pub mod staleness;

pub use feed::PriceFeed;
pub use rate::RateAccumulator;

/// Error types for oracle operations.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// Harvest timestamp is older than the stored one.
    #[error("non-monotonic timestamp: {new} < {last}")]
    NonMonotonicTimestamp {
        /// The rejected harvest timestamp.
        new: u64,
        /// The last accepted timestamp.
        last: u64,
    },

    /// Arithmetic overflow in the accumulator.
    #[error("arithmetic overflow")]
    Overflow,

    /// No harvest has landed within the staleness threshold.
    #[error(
        "harvest is stale: last update {last_update}, current {current}, threshold {threshold}"
    )]
    StaleHarvest {
        /// Timestamp of the last harvest.
        last_update: u64,
        /// Current timestamp.
        current: u64,
        /// Staleness threshold in seconds.
        threshold: u64,
    },
}

/// Convenience result type for oracle operations.
pub type Result<T> = std::result::Result<T, OracleError>;
