//! # halyard-crypto
//!
//! Cryptographic primitives for the Halyard protocol.
//!
//! The hashing suite is fixed: Keccak-256 everywhere, matching the
//! off-chain distribution pipeline. No algorithm negotiation is
//! permitted.
//!
//! ## Modules
//!
//! - [`keccak`] — Keccak-256 digests
//! - [`merkle`] — Canonical leaf encoding, proof verification, and the
//!   reference tree builder

pub mod keccak;
pub mod merkle;

/// Error types for cryptographic operations.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// A tree cannot be built over an empty table.
    #[error("cannot build a Merkle tree over an empty table")]
    EmptyTree,

    /// A proof was requested for a leaf index outside the tree.
    #[error("leaf index {index} out of range (tree has {leaves} leaves)")]
    LeafOutOfRange {
        /// The requested leaf index.
        index: usize,
        /// The number of leaves in the tree.
        leaves: usize,
    },
}

pub type Result<T> = std::result::Result<T, CryptoError>;
