//! Signature payloads and signature lists.
//!
//! What gets signed is never the envelope itself. It is
//!
//! ```text
//!   network_id (32) ∥ envelope type (i32) ∥ XDR(transaction)
//! ```
//!
//! hashed with SHA-256. The envelope type keeps a plain transaction and a
//! fee bump from ever sharing a hash; the network id keeps testnet and the
//! public network apart. Get one byte of this wrong and every signature
//! you produce is valid for a transaction that does not exist.

use tracing::{debug, warn};

use super::TransactionError;
use crate::config::MAX_SIGNATURES;
use crate::crypto::sha256;
use crate::network::Network;
use crate::xdr::{BytesM, DecoratedSignature, EnvelopeType, Signatures, XdrCodec, XdrError, XdrWriter};

/// Build the signature base for `tx` tagged as `envelope_type`.
pub fn signature_base<T: XdrCodec>(
    network: &Network,
    envelope_type: EnvelopeType,
    tx: &T,
) -> Result<Vec<u8>, XdrError> {
    let mut w = XdrWriter::with_capacity(256);
    network.network_id().encode(&mut w)?;
    envelope_type.encode(&mut w)?;
    tx.encode(&mut w)?;
    Ok(w.into_bytes())
}

/// A signature that reveals the preimage of a hash-x signer.
///
/// The hint is the tail of `sha256(preimage)` and the "signature" is the
/// preimage itself, which is why it can be at most 64 bytes.
pub fn hashx_signature(preimage: &[u8]) -> Result<DecoratedSignature, TransactionError> {
    let hash = sha256(preimage);
    Ok(DecoratedSignature {
        hint: [hash[28], hash[29], hash[30], hash[31]],
        signature: BytesM::try_from(preimage)?,
    })
}

/// The ordered, append-only signatures of one envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureList(Vec<DecoratedSignature>);

impl SignatureList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `sig`.
    ///
    /// Rejects an exact duplicate and leaves the list untouched, so signing
    /// the same envelope twice with the same key is an error the caller
    /// gets to see.
    pub fn push(&mut self, sig: DecoratedSignature) -> Result<(), TransactionError> {
        if self.0.contains(&sig) {
            let hint = hex::encode(sig.hint);
            warn!(%hint, "duplicate signature rejected");
            return Err(TransactionError::DuplicateSignature { hint });
        }
        if self.0.len() >= MAX_SIGNATURES as usize {
            return Err(TransactionError::TooManySignatures {
                max: MAX_SIGNATURES,
            });
        }
        debug!(hint = %hex::encode(sig.hint), count = self.0.len() + 1, "signature appended");
        self.0.push(sig);
        Ok(())
    }

    pub fn as_slice(&self) -> &[DecoratedSignature] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DecoratedSignature> {
        self.0.iter()
    }

    /// The XDR form.
    pub fn to_xdr(&self) -> Result<Signatures, XdrError> {
        Signatures::try_from(self.0.clone())
    }
}

impl From<Signatures> for SignatureList {
    fn from(sigs: Signatures) -> Self {
        Self(sigs.into_vec())
    }
}

impl<'a> IntoIterator for &'a SignatureList {
    type Item = &'a DecoratedSignature;
    type IntoIter = std::slice::Iter<'a, DecoratedSignature>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
