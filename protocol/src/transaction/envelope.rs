//! Envelopes: a transaction plus the signatures that authorize it.
//!
//! There are two kinds a client ever signs: a plain [`TxEnvelope`] and a
//! [`FeeBumpEnvelope`] that pays for one. They hash differently and carry
//! different bodies, but signing, hashing and serializing work the same
//! way, so both implement [`Envelope`].
//!
//! Legacy V0 envelopes still show up in old archives. They are parsed into
//! a [`TxEnvelope`] holding the equivalent V1 transaction, which hashes to
//! the same value, and written back out as V0.

use tracing::debug;

use super::signing::{hashx_signature, signature_base, SignatureList};
use super::TransactionError;
use crate::crypto::{sha256, Keypair};
use crate::network::Network;
use crate::xdr::{
    DecoratedSignature, EnvelopeType, FeeBumpTransaction, FeeBumpTransactionEnvelope,
    FeeBumpTransactionInnerTx, MuxedAccount, Preconditions, Transaction, TransactionEnvelope,
    TransactionExt, TransactionV0, TransactionV0Envelope, TransactionV0Ext, TransactionV1Envelope,
    XdrCodec,
};

/// Shared behaviour of signable envelopes.
pub trait Envelope {
    /// The network this envelope is signed for.
    fn network(&self) -> &Network;

    /// The byte sequence that gets hashed and signed.
    fn signature_base(&self) -> Result<Vec<u8>, TransactionError>;

    fn signatures(&self) -> &SignatureList;

    fn signatures_mut(&mut self) -> &mut SignatureList;

    /// The XDR envelope, signatures included.
    fn to_xdr_envelope(&self) -> Result<TransactionEnvelope, TransactionError>;

    /// SHA-256 of the signature base. This is the transaction hash.
    fn hash(&self) -> Result<[u8; 32], TransactionError> {
        Ok(sha256(&self.signature_base()?))
    }

    fn hash_hex(&self) -> Result<String, TransactionError> {
        Ok(hex::encode(self.hash()?))
    }

    /// Sign with `keypair` and append the decorated signature.
    fn sign(&mut self, keypair: &Keypair) -> Result<(), TransactionError> {
        let hash = self.hash()?;
        let sig = keypair.sign_decorated(&hash)?;
        debug!(
            hash = %hex::encode(hash),
            signer = %keypair.public_key(),
            "signing envelope"
        );
        self.signatures_mut().push(sig)
    }

    /// Append a hash-x signature revealing `preimage`.
    fn sign_hashx(&mut self, preimage: &[u8]) -> Result<(), TransactionError> {
        let sig = hashx_signature(preimage)?;
        self.signatures_mut().push(sig)
    }

    /// Append a signature produced elsewhere, e.g. by a hardware wallet.
    fn add_signature(&mut self, sig: DecoratedSignature) -> Result<(), TransactionError> {
        self.signatures_mut().push(sig)
    }

    /// Base64 XDR of the whole envelope, ready to submit.
    fn to_xdr(&self) -> Result<String, TransactionError> {
        Ok(self.to_xdr_envelope()?.to_xdr_base64()?)
    }
}

// ---------------------------------------------------------------------------
// TxEnvelope
// ---------------------------------------------------------------------------

/// A plain transaction and its signatures.
///
/// Get one from [`TransactionBuilder`](super::TransactionBuilder), which
/// checks time bounds and operation counts, or from [`parse_envelope`].
/// There is no public way to wrap an arbitrary [`Transaction`]:
///
/// ```compile_fail
/// use stellar_wire::network::Network;
/// use stellar_wire::transaction::TxEnvelope;
/// use stellar_wire::xdr::Transaction;
///
/// fn wrap(tx: Transaction) -> TxEnvelope {
///     TxEnvelope::new(tx, Network::testnet())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxEnvelope {
    tx: Transaction,
    network: Network,
    signatures: SignatureList,
    legacy_v0: bool,
}

impl TxEnvelope {
    /// Wrap an unsigned transaction the builder has already validated.
    pub(crate) fn new(tx: Transaction, network: Network) -> Self {
        Self {
            tx,
            network,
            signatures: SignatureList::new(),
            legacy_v0: false,
        }
    }

    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }

    /// `true` if this came from a V0 envelope and will be written back as one.
    pub fn is_legacy_v0(&self) -> bool {
        self.legacy_v0
    }

    /// The XDR V1 envelope. Fee bumps always wrap this form.
    pub fn to_v1_envelope(&self) -> Result<TransactionV1Envelope, TransactionError> {
        Ok(TransactionV1Envelope {
            tx: self.tx.clone(),
            signatures: self.signatures.to_xdr()?,
        })
    }

    fn to_v0(&self) -> Result<TransactionV0, TransactionError> {
        let MuxedAccount::Ed25519(source) = &self.tx.source_account else {
            return Err(TransactionError::NotRepresentableAsV0);
        };
        let time_bounds = match &self.tx.cond {
            Preconditions::None => None,
            Preconditions::Time(tb) => Some(*tb),
            Preconditions::V2(_) => return Err(TransactionError::NotRepresentableAsV0),
        };
        if self.tx.ext != TransactionExt::V0 {
            return Err(TransactionError::NotRepresentableAsV0);
        }
        Ok(TransactionV0 {
            source_account_ed25519: *source,
            fee: self.tx.fee,
            seq_num: self.tx.seq_num,
            time_bounds,
            memo: self.tx.memo.clone(),
            operations: self.tx.operations.clone(),
            ext: TransactionV0Ext::V0,
        })
    }
}

impl Envelope for TxEnvelope {
    fn network(&self) -> &Network {
        &self.network
    }

    // V0 transactions hash as their V1 equivalent.
    fn signature_base(&self) -> Result<Vec<u8>, TransactionError> {
        Ok(signature_base(&self.network, EnvelopeType::Tx, &self.tx)?)
    }

    fn signatures(&self) -> &SignatureList {
        &self.signatures
    }

    fn signatures_mut(&mut self) -> &mut SignatureList {
        &mut self.signatures
    }

    fn to_xdr_envelope(&self) -> Result<TransactionEnvelope, TransactionError> {
        if self.legacy_v0 {
            return Ok(TransactionEnvelope::TxV0(TransactionV0Envelope {
                tx: self.to_v0()?,
                signatures: self.signatures.to_xdr()?,
            }));
        }
        Ok(TransactionEnvelope::Tx(self.to_v1_envelope()?))
    }
}

// ---------------------------------------------------------------------------
// FeeBumpEnvelope
// ---------------------------------------------------------------------------

/// A fee bump and its own signatures. The inner envelope, with its
/// signatures, travels untouched inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeBumpEnvelope {
    tx: FeeBumpTransaction,
    network: Network,
    signatures: SignatureList,
}

impl FeeBumpEnvelope {
    /// Fee checks live in [`build_fee_bump`](super::build_fee_bump).
    pub(crate) fn new(tx: FeeBumpTransaction, network: Network) -> Self {
        Self {
            tx,
            network,
            signatures: SignatureList::new(),
        }
    }

    pub fn transaction(&self) -> &FeeBumpTransaction {
        &self.tx
    }

    /// The wrapped envelope, as a signable envelope of its own.
    pub fn inner(&self) -> TxEnvelope {
        let FeeBumpTransactionInnerTx::Tx(inner) = &self.tx.inner_tx;
        TxEnvelope {
            tx: inner.tx.clone(),
            network: self.network.clone(),
            signatures: SignatureList::from(inner.signatures.clone()),
            legacy_v0: false,
        }
    }
}

impl Envelope for FeeBumpEnvelope {
    fn network(&self) -> &Network {
        &self.network
    }

    fn signature_base(&self) -> Result<Vec<u8>, TransactionError> {
        Ok(signature_base(&self.network, EnvelopeType::TxFeeBump, &self.tx)?)
    }

    fn signatures(&self) -> &SignatureList {
        &self.signatures
    }

    fn signatures_mut(&mut self) -> &mut SignatureList {
        &mut self.signatures
    }

    fn to_xdr_envelope(&self) -> Result<TransactionEnvelope, TransactionError> {
        Ok(TransactionEnvelope::TxFeeBump(FeeBumpTransactionEnvelope {
            tx: self.tx.clone(),
            signatures: self.signatures.to_xdr()?,
        }))
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Either kind of envelope, as parsed from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedEnvelope {
    Tx(TxEnvelope),
    FeeBump(FeeBumpEnvelope),
}

impl ParsedEnvelope {
    fn as_dyn(&self) -> &dyn Envelope {
        match self {
            Self::Tx(e) => e,
            Self::FeeBump(e) => e,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn Envelope {
        match self {
            Self::Tx(e) => e,
            Self::FeeBump(e) => e,
        }
    }
}

impl Envelope for ParsedEnvelope {
    fn network(&self) -> &Network {
        self.as_dyn().network()
    }

    fn signature_base(&self) -> Result<Vec<u8>, TransactionError> {
        self.as_dyn().signature_base()
    }

    fn signatures(&self) -> &SignatureList {
        self.as_dyn().signatures()
    }

    fn signatures_mut(&mut self) -> &mut SignatureList {
        self.as_dyn_mut().signatures_mut()
    }

    fn to_xdr_envelope(&self) -> Result<TransactionEnvelope, TransactionError> {
        self.as_dyn().to_xdr_envelope()
    }
}

impl ParsedEnvelope {
    /// Wrap a decoded XDR envelope.
    pub fn from_xdr_envelope(env: TransactionEnvelope, network: Network) -> Self {
        match env {
            TransactionEnvelope::TxV0(v0) => Self::Tx(TxEnvelope {
                tx: Transaction::from(v0.tx),
                network,
                signatures: SignatureList::from(v0.signatures),
                legacy_v0: true,
            }),
            TransactionEnvelope::Tx(v1) => Self::Tx(TxEnvelope {
                tx: v1.tx,
                network,
                signatures: SignatureList::from(v1.signatures),
                legacy_v0: false,
            }),
            TransactionEnvelope::TxFeeBump(fb) => Self::FeeBump(FeeBumpEnvelope {
                tx: fb.tx,
                network,
                signatures: SignatureList::from(fb.signatures),
            }),
        }
    }
}

/// Decode a base64 XDR envelope of any kind.
pub fn parse_envelope(xdr: &str, network: &Network) -> Result<ParsedEnvelope, TransactionError> {
    let env = TransactionEnvelope::from_xdr_base64(xdr)?;
    Ok(ParsedEnvelope::from_xdr_envelope(env, network.clone()))
}
