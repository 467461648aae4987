//! # halyard-drop
//!
//! Cumulative Merkle drop ledger.
//!
//! Each off-chain distribution cycle publishes a Merkle root over the
//! *total-to-date* entitlement of every beneficiary. A claim proves the
//! beneficiary's current cumulative amount against that root and pays
//! out only the increase since the last successful claim, so each
//! cycle's increment is redeemable exactly once.
//!
//! ## Modules
//!
//! - [`ledger`] — Root rotation, claims, and funding

pub mod ledger;

pub use ledger::DropLedger;

/// Error types for drop ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum DropError {
    /// Root rotation attempted by a non-authorized caller.
    #[error("caller is not the authorized root updater")]
    Unauthorized,

    /// The submitted proof does not fold to the current root.
    #[error("invalid proof for the current root")]
    InvalidProof,

    /// The proven cumulative amount is not strictly greater than the
    /// amount already paid.
    #[error("already claimed: proven cumulative {cumulative} <= recorded {claimed}")]
    AlreadyClaimed {
        /// The cumulative amount the proof covers.
        cumulative: u64,
        /// The cumulative amount already recorded.
        claimed: u64,
    },

    /// The ledger's held balance cannot cover the computed delta.
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds {
        /// The delta the claim would pay.
        needed: u64,
        /// The ledger's current held balance.
        available: u64,
    },

    /// Arithmetic overflow while funding the ledger.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Convenience result type for drop ledger operations.
pub type Result<T> = std::result::Result<T, DropError>;
