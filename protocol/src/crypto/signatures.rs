//! # Digital Signatures
//!
//! Free-standing verification for signatures that arrived as bytes off the
//! wire: a public key, a message and 64 bytes that are supposed to tie them
//! together. Signing lives on [`Keypair`](super::Keypair), since you
//! cannot sign without one.
//!
//! ## Strictness
//!
//! We use `ed25519-dalek`'s default verification, which rejects
//! non-canonical signature scalars. The network does the same, so anything
//! we accept it will accept too.

use ed25519_dalek::{Signature as DalekSignature, Verifier, VerifyingKey};
use thiserror::Error;

use crate::xdr::DecoratedSignature;

/// Errors during signature verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("signature verification failed")]
    VerificationFailed,

    #[error("invalid signature bytes: expected 64 bytes, got {0}")]
    InvalidSignatureBytes(usize),

    #[error("invalid public key")]
    InvalidPublicKey,
}

/// Verify a signature using raw byte components.
pub fn verify_raw(
    public_key_bytes: &[u8; 32],
    message: &[u8],
    signature_bytes: &[u8],
) -> Result<(), SignatureError> {
    let verifying_key =
        VerifyingKey::from_bytes(public_key_bytes).map_err(|_| SignatureError::InvalidPublicKey)?;

    let sig: [u8; 64] = signature_bytes
        .try_into()
        .map_err(|_| SignatureError::InvalidSignatureBytes(signature_bytes.len()))?;

    verifying_key
        .verify(message, &DalekSignature::from_bytes(&sig))
        .map_err(|_| SignatureError::VerificationFailed)
}

/// The hint a signature by `public_key` would carry.
pub fn hint_for(public_key: &[u8; 32]) -> [u8; 4] {
    [public_key[28], public_key[29], public_key[30], public_key[31]]
}

/// Verify a decorated signature: the hint must match the key, and the
/// signature must verify over `message`.
pub fn verify_decorated(
    public_key: &[u8; 32],
    message: &[u8],
    decorated: &DecoratedSignature,
) -> Result<(), SignatureError> {
    if decorated.hint != hint_for(public_key) {
        return Err(SignatureError::VerificationFailed);
    }
    verify_raw(public_key, message, decorated.signature.as_slice())
}
