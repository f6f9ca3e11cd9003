//! # Transaction Module
//!
//! Construction, signing, fee bumping and verification of transaction
//! envelopes. This is where XDR values turn into something the network
//! will actually accept.
//!
//! ## Architecture
//!
//! ```text
//! builder.rs      — TransactionBuilder: source, sequence, fee, preconditions, ops
//! operation.rs    — Operation constructors from human-friendly inputs
//! envelope.rs     — TxEnvelope / FeeBumpEnvelope and the Envelope trait
//! signing.rs      — Signature base, signature lists, the duplicate guard
//! fee_bump.rs     — Wrapping a signed envelope in a fee bump, and its results
//! verification.rs — Checking a decorated signature against a public key
//! ```
//!
//! ## Transaction Lifecycle
//!
//! 1. **Build** — [`TransactionBuilder`] assembles a transaction. Bad time
//!    bounds and operation counts are rejected here, not later.
//! 2. **Hash** — [`Envelope::hash`] fixes the signature payload. It covers
//!    the network id, so a testnet signature is useless on the public network.
//! 3. **Sign** — [`Envelope::sign`] appends a decorated signature. Signing
//!    twice with the same key is an error, not a silent duplicate.
//! 4. **Serialize** — [`Envelope::to_xdr`] produces the base64 that gets
//!    submitted.
//!
//! ## Design Decisions
//!
//! - Fees, amounts and sequence numbers are integers. No floating point
//!   anywhere near monetary values.
//! - Envelopes own their signature list. Ownership gives single-writer
//!   mutation for free; share a `&` once it is frozen.

pub mod builder;
pub mod envelope;
pub mod fee_bump;
pub mod operation;
pub mod signing;
pub mod verification;

use thiserror::Error;

use crate::amount::AmountError;
use crate::crypto::KeyError;
use crate::identity::StrkeyError;
use crate::price::PriceError;
use crate::xdr::XdrError;

pub use builder::{Account, TransactionBuilder};
pub use envelope::{parse_envelope, Envelope, FeeBumpEnvelope, ParsedEnvelope, TxEnvelope};
pub use fee_bump::{build_fee_bump, inner_result_pair, wrap_inner_result};
pub use signing::{hashx_signature, signature_base, SignatureList};
pub use verification::{verify_signature_from, verify_signatures};

/// Errors raised while building, signing or wrapping transactions.
///
/// None of these are transient. Retrying the same call with the same inputs
/// gives the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// An identical signature (same hint, same bytes) is already attached.
    #[error("duplicate signature with hint {hint}")]
    DuplicateSignature { hint: String },

    /// Signing was attempted with a public-only keypair.
    #[error("no secret key available")]
    NoSecretKey,

    /// `max_time` is non-zero and not after `min_time`.
    #[error("invalid time bounds: min_time {min_time}, max_time {max_time}")]
    InvalidTimeBounds { min_time: u64, max_time: u64 },

    /// Neither time bounds nor `set_timeout` were given.
    #[error("time bounds must be set, use set_timeout(TIMEOUT_INFINITE) for no bound")]
    MissingTimeBounds,

    /// `set_timeout` was called after an upper time bound was already set.
    #[error("time bounds already have an upper bound")]
    TimeoutAlreadySet,

    /// `max_ledger` is non-zero and not after `min_ledger`.
    #[error("invalid ledger bounds: min_ledger {min_ledger}, max_ledger {max_ledger}")]
    InvalidLedgerBounds { min_ledger: u32, max_ledger: u32 },

    #[error("transaction has no operations")]
    NoOperations,

    #[error("too many operations: {count} (max {max})")]
    TooManyOperations { count: usize, max: u32 },

    #[error("too many signatures (max {max})")]
    TooManySignatures { max: u32 },

    /// A required signer has no valid signature on the envelope.
    #[error("missing signature from {signer}")]
    MissingSignature { signer: String },

    /// A fee bump offers less than the network minimum or the inner rate.
    #[error("fee bump base fee {offered} is below the required minimum {minimum}")]
    FeeTooLow { minimum: i64, offered: i64 },

    #[error("fee does not fit in its wire type")]
    FeeOverflow,

    #[error("sequence number overflow")]
    SequenceOverflow,

    /// The asset code is empty, longer than 12 characters or not alphanumeric.
    #[error("invalid asset code {0:?}")]
    InvalidAssetCode(String),

    /// A balance or pool id that is not the expected length of hex.
    #[error("invalid {kind} id {id:?}")]
    InvalidId { kind: &'static str, id: String },

    /// Pool assets must be given in canonical order, and differ.
    #[error("liquidity pool assets are not in canonical order")]
    PoolAssetsOutOfOrder,

    /// A legacy V0 envelope cannot carry this transaction.
    #[error("transaction cannot be expressed as a V0 envelope")]
    NotRepresentableAsV0,

    #[error("key error: {0}")]
    Key(KeyError),

    #[error(transparent)]
    Xdr(#[from] XdrError),

    #[error(transparent)]
    Strkey(#[from] StrkeyError),

    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    Price(#[from] PriceError),
}

impl From<KeyError> for TransactionError {
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::NoSecretKey => TransactionError::NoSecretKey,
            KeyError::Strkey(e) => TransactionError::Strkey(e),
            other => TransactionError::Key(other),
        }
    }
}
