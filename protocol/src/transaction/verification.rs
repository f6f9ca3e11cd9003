//! Checking who signed an envelope.
//!
//! A decorated signature only carries a 4-byte hint, not the signer's key.
//! To ask "did this key sign?" we filter signatures by the key's hint and
//! run ed25519 verification on the survivors against the envelope hash.
//! The hint is a shortcut, never proof: two keys can share a hint, which
//! is why every candidate is verified.

use tracing::trace;

use super::envelope::Envelope;
use super::TransactionError;
use crate::crypto::signatures::{hint_for, verify_decorated};
use crate::identity::strkey::decode_account_id;

fn signed_by<E: Envelope + ?Sized>(
    envelope: &E,
    hash: &[u8; 32],
    key: &[u8; 32],
) -> bool {
    let hint = hint_for(key);
    envelope
        .signatures()
        .iter()
        .filter(|sig| sig.hint == hint)
        .any(|sig| verify_decorated(key, hash, sig).is_ok())
}

/// `true` if `public_key` (a `G...` strkey) has a valid signature on
/// `envelope`.
pub fn verify_signature_from<E: Envelope + ?Sized>(
    envelope: &E,
    public_key: &str,
) -> Result<bool, TransactionError> {
    let key = decode_account_id(public_key)?;
    let hash = envelope.hash()?;
    let found = signed_by(envelope, &hash, &key);
    trace!(signer = public_key, found, "signature lookup");
    Ok(found)
}

/// Require a valid signature from every key in `public_keys`.
///
/// Fails with [`TransactionError::MissingSignature`] naming the first key
/// that has not signed.
pub fn verify_signatures<E: Envelope + ?Sized>(
    envelope: &E,
    public_keys: &[&str],
) -> Result<(), TransactionError> {
    let hash = envelope.hash()?;
    for public_key in public_keys {
        let key = decode_account_id(public_key)?;
        if !signed_by(envelope, &hash, &key) {
            return Err(TransactionError::MissingSignature {
                signer: public_key.to_string(),
            });
        }
    }
    Ok(())
}
