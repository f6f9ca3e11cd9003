//! Signing authorization entries for contract invocations.
//!
//! When a contract calls `require_auth` on an address that is not the
//! transaction source, that address has to have signed off on the exact
//! invocation tree ahead of time. The signature covers
//!
//! ```text
//!   sha256(XDR(HashIdPreimage::SorobanAuthorization {
//!       network_id, nonce, signature_expiration_ledger, invocation
//!   }))
//! ```
//!
//! and is embedded in the entry's credentials as a vector of
//! `{public_key, signature}` maps.
//!
//! The expiration ledger is exclusive. A signature whose expiration equals
//! the current ledger is already expired, so pick `valid_until_ledger` with
//! some headroom.

use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};

use crate::crypto::{sha256, verify_raw, KeyError, Keypair};
use crate::identity::Address;
use crate::network::Network;
use crate::xdr::{
    HashIdPreimage, HashIdPreimageSorobanAuthorization, ScVal, SorobanAddressCredentials,
    SorobanAuthorizationEntry, SorobanAuthorizedInvocation, SorobanCredentials, XdrCodec,
    XdrError,
};

/// Errors raised while signing or checking authorization entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The produced signature does not verify against the public key it is
    /// supposed to come from.
    #[error("signature does not match the authorizing public key")]
    SignatureMismatch,

    /// No public key was given and the signer cannot provide one.
    #[error("public key required for an external signer")]
    MissingPublicKey,

    /// The credentials carry no signatures, or not in the expected shape.
    #[error("malformed authorization signature: {0}")]
    MalformedSignature(&'static str),

    /// An external signer reported a failure.
    #[error("signer failed: {0}")]
    Signer(String),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Xdr(#[from] XdrError),
}

// ---------------------------------------------------------------------------
// Signers
// ---------------------------------------------------------------------------

/// Something that can sign an authorization preimage.
///
/// Implementations receive the whole preimage, not just its hash, so that a
/// remote signer can show the user what they are approving. The returned
/// bytes must be an ed25519 signature over `sha256(XDR(preimage))`.
pub trait AuthorizationSigner {
    fn sign_authorization(&self, preimage: &HashIdPreimage) -> Result<Vec<u8>, AuthError>;

    /// The raw key this signer signs with, if it knows it. When `None`, the
    /// key is taken from the credential's address.
    fn authorizing_key(&self) -> Option<[u8; 32]> {
        None
    }
}

impl AuthorizationSigner for Keypair {
    fn sign_authorization(&self, preimage: &HashIdPreimage) -> Result<Vec<u8>, AuthError> {
        let payload = sha256(&preimage.to_xdr_bytes()?);
        Ok(self.sign(&payload)?.to_vec())
    }

    fn authorizing_key(&self) -> Option<[u8; 32]> {
        Some(self.raw_public_key())
    }
}

/// Adapts a closure into an [`AuthorizationSigner`]. Use it for hardware
/// wallets, remote signing services and anything else that keeps the
/// secret key out of this process.
pub struct CallbackSigner<F> {
    callback: F,
}

impl<F> CallbackSigner<F>
where
    F: Fn(&HashIdPreimage) -> Result<Vec<u8>, AuthError>,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> AuthorizationSigner for CallbackSigner<F>
where
    F: Fn(&HashIdPreimage) -> Result<Vec<u8>, AuthError>,
{
    fn sign_authorization(&self, preimage: &HashIdPreimage) -> Result<Vec<u8>, AuthError> {
        (self.callback)(preimage)
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// The preimage an address signs to authorize `invocation`.
pub fn authorization_preimage(
    credentials: &SorobanAddressCredentials,
    invocation: &SorobanAuthorizedInvocation,
    network: &Network,
) -> HashIdPreimage {
    HashIdPreimage::SorobanAuthorization(HashIdPreimageSorobanAuthorization {
        network_id: network.network_id(),
        nonce: credentials.nonce,
        signature_expiration_ledger: credentials.signature_expiration_ledger,
        invocation: invocation.clone(),
    })
}

/// The 32-byte hash that actually gets signed.
pub fn authorization_payload(
    credentials: &SorobanAddressCredentials,
    invocation: &SorobanAuthorizedInvocation,
    network: &Network,
) -> Result<[u8; 32], AuthError> {
    let preimage = authorization_preimage(credentials, invocation, network);
    Ok(sha256(&preimage.to_xdr_bytes()?))
}

fn signature_entry(public_key: &[u8; 32], signature: &[u8]) -> Result<ScVal, AuthError> {
    // Map keys sorted: "public_key" < "signature".
    let entry = ScVal::map(vec![
        (ScVal::symbol("public_key")?, ScVal::bytes(public_key)?),
        (ScVal::symbol("signature")?, ScVal::bytes(signature)?),
    ])?;
    Ok(ScVal::vec(vec![entry])?)
}

// ---------------------------------------------------------------------------
// Signing
// ---------------------------------------------------------------------------

/// Sign `entry` so it is valid until (not including) `valid_until_ledger`.
///
/// Entries with source-account credentials need no signature and are
/// returned unchanged. For address credentials the expiration is set, the
/// payload signed, and the signature checked against the public key before
/// it is embedded, so a misbehaving external signer cannot produce an entry
/// that only fails on chain.
pub fn authorize_entry<S: AuthorizationSigner + ?Sized>(
    entry: &SorobanAuthorizationEntry,
    signer: &S,
    valid_until_ledger: u32,
    network: &Network,
) -> Result<SorobanAuthorizationEntry, AuthError> {
    let SorobanCredentials::Address(credentials) = &entry.credentials else {
        return Ok(entry.clone());
    };
    let mut credentials = credentials.clone();
    credentials.signature_expiration_ledger = valid_until_ledger;

    let preimage = authorization_preimage(&credentials, &entry.root_invocation, network);
    let payload = sha256(&preimage.to_xdr_bytes()?);
    let signature = signer.sign_authorization(&preimage)?;
    let public_key = signer
        .authorizing_key()
        .unwrap_or_else(|| *Address::from_sc_address(&credentials.address).raw());

    if verify_raw(&public_key, &payload, &signature).is_err() {
        warn!(
            payload = %hex::encode(payload),
            "authorization signature does not verify"
        );
        return Err(AuthError::SignatureMismatch);
    }
    credentials.signature = signature_entry(&public_key, &signature)?;
    debug!(
        address = %Address::from_sc_address(&credentials.address),
        nonce = credentials.nonce,
        valid_until_ledger,
        "authorization signed"
    );

    Ok(SorobanAuthorizationEntry {
        credentials: SorobanCredentials::Address(credentials),
        root_invocation: entry.root_invocation.clone(),
    })
}

/// Build and sign a fresh entry authorizing `invocation`.
///
/// The authorizing address is `public_key` (a `G...` strkey) if given,
/// otherwise the signer's own key. The nonce is a uniformly random `i64`.
pub fn authorize_invocation<S: AuthorizationSigner + ?Sized>(
    signer: &S,
    public_key: Option<&str>,
    valid_until_ledger: u32,
    invocation: SorobanAuthorizedInvocation,
    network: &Network,
) -> Result<SorobanAuthorizationEntry, AuthError> {
    let address = match public_key {
        Some(pk) => Address::Account(Keypair::from_public_key(pk)?.raw_public_key()),
        None => Address::Account(signer.authorizing_key().ok_or(AuthError::MissingPublicKey)?),
    };
    let nonce: i64 = rand::thread_rng().gen();
    let entry = SorobanAuthorizationEntry {
        credentials: SorobanCredentials::Address(SorobanAddressCredentials {
            address: address.to_sc_address(),
            nonce,
            signature_expiration_ledger: 0,
            signature: ScVal::Void,
        }),
        root_invocation: invocation,
    };
    authorize_entry(&entry, signer, valid_until_ledger, network)
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Check that every signature embedded in `entry` is a valid signature by
/// the credential's account over the entry's payload.
///
/// Source-account entries are trivially valid: the transaction signature
/// covers them.
pub fn verify_authorization(
    entry: &SorobanAuthorizationEntry,
    network: &Network,
) -> Result<(), AuthError> {
    let SorobanCredentials::Address(credentials) = &entry.credentials else {
        return Ok(());
    };
    let payload = authorization_payload(credentials, &entry.root_invocation, network)?;
    let expected_key = Address::from_sc_address(&credentials.address);

    let signatures = credentials
        .signature
        .as_vec()
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MalformedSignature("expected a non-empty vector"))?;
    for sig in signatures {
        let public_key: [u8; 32] = sig
            .map_get("public_key")
            .and_then(ScVal::as_bytes)
            .and_then(|b| b.try_into().ok())
            .ok_or(AuthError::MalformedSignature("missing public_key"))?;
        let signature = sig
            .map_get("signature")
            .and_then(ScVal::as_bytes)
            .ok_or(AuthError::MalformedSignature("missing signature"))?;
        if Address::Account(public_key) != expected_key {
            return Err(AuthError::SignatureMismatch);
        }
        verify_raw(&public_key, &payload, signature).map_err(|_| AuthError::SignatureMismatch)?;
    }
    Ok(())
}
