//! Keccak-256 hashing.
//!
//! All digests in the Halyard protocol are Keccak-256, the convention
//! of the off-chain reward-table pipeline. This module is the only
//! place the hash function is named; everything else goes through it.

use sha3::{Digest, Keccak256};

use halyard_types::Hash;

/// Compute the Keccak-256 digest of the input data.
pub fn keccak(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Compute the Keccak-256 digest of two concatenated 32-byte words.
pub fn keccak_pair(a: &Hash, b: &Hash) -> Hash {
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(a);
    buf[32..].copy_from_slice(b);
    keccak(&buf)
}
