//! # Hashing Utilities
//!
//! One hash function, used everywhere: SHA-256. Network ids, transaction
//! hashes, hash-x signers, authorization payloads and contract ids are all
//! SHA-256 digests. The network picked it and we are not in a position to
//! argue.

use sha2::{Digest, Sha256};

/// Compute the SHA-256 digest of `data`.
///
/// # Example
///
/// ```
/// use stellar_wire::crypto::sha256;
///
/// let hash = sha256(b"stellar");
/// assert_eq!(hash.len(), 32);
/// ```
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 over several slices, as if they were concatenated.
///
/// Saves building a temporary buffer when hashing `prefix ∥ body`.
pub fn sha256_concat(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Hex-encoded SHA-256. Handy for logs and for comparing against block
/// explorers, which all show hashes in lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}
