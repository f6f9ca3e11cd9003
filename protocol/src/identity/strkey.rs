//! # Strkey
//!
//! The human-facing spelling of keys and hashes. A strkey is
//!
//! ```text
//!   base32( version_byte ∥ payload ∥ crc16_xmodem(version_byte ∥ payload) as LE )
//! ```
//!
//! with the RFC 4648 alphabet and the `=` padding stripped. The version byte
//! is chosen so that the first base32 character is a readable letter: `G`
//! for accounts, `S` for seeds, `M` for muxed accounts and so on.
//!
//! Decoding is unforgiving. Lowercase, stray padding, non-canonical trailing
//! bits, a wrong version for the context, a bad checksum or a payload of the
//! wrong size all fail. A strkey that decodes is a strkey that re-encodes to
//! exactly the same text.

use std::fmt;
use std::str::FromStr;

use crc::{Crc, CRC_16_XMODEM};
use data_encoding::BASE32_NOPAD;
use thiserror::Error;

use crate::xdr::{BytesM, SignerKeyEd25519SignedPayload, XdrCodec};

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Errors from strkey decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrkeyError {
    /// Not valid canonical base32, or too short to hold a version and checksum.
    #[error("malformed strkey encoding")]
    MalformedEncoding,

    /// The version byte is unknown or not the one this context expects.
    #[error("invalid strkey version byte {found:#04x}")]
    InvalidVersion {
        /// Version byte found in the decoded data.
        found: u8,
    },

    /// The trailing CRC16 does not match the data.
    #[error("invalid strkey checksum")]
    InvalidChecksum,

    /// The payload is the wrong size for its version.
    #[error("invalid payload length {len} for {version:?}")]
    InvalidPayloadLength {
        /// Version the payload was tagged with.
        version: VersionByte,
        /// Payload size in bytes.
        len: usize,
    },
}

// ---------------------------------------------------------------------------
// Version bytes
// ---------------------------------------------------------------------------

/// The closed set of strkey classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionByte {
    /// `G...`, an ed25519 account id.
    AccountId,
    /// `S...`, an ed25519 secret seed.
    Seed,
    /// `T...`, the hash of a pre-authorized transaction.
    PreAuthTx,
    /// `X...`, a SHA-256 hash whose preimage acts as a signer.
    HashX,
    /// `M...`, an account id plus a 64-bit sub-account id.
    MuxedAccount,
    /// `P...`, an ed25519 key bound to a payload it must sign.
    SignedPayload,
    /// `C...`, a contract id.
    Contract,
}

impl VersionByte {
    /// Every class, in no particular order.
    pub const ALL: [VersionByte; 7] = [
        Self::AccountId,
        Self::Seed,
        Self::PreAuthTx,
        Self::HashX,
        Self::MuxedAccount,
        Self::SignedPayload,
        Self::Contract,
    ];

    /// The raw version byte. Always a multiple of 8 so the top five bits
    /// select the leading base32 character.
    pub const fn byte(self) -> u8 {
        match self {
            Self::AccountId => 6 << 3,
            Self::Seed => 18 << 3,
            Self::PreAuthTx => 19 << 3,
            Self::HashX => 23 << 3,
            Self::MuxedAccount => 12 << 3,
            Self::SignedPayload => 15 << 3,
            Self::Contract => 2 << 3,
        }
    }

    /// The first character of every strkey of this class.
    pub const fn prefix(self) -> char {
        match self {
            Self::AccountId => 'G',
            Self::Seed => 'S',
            Self::PreAuthTx => 'T',
            Self::HashX => 'X',
            Self::MuxedAccount => 'M',
            Self::SignedPayload => 'P',
            Self::Contract => 'C',
        }
    }

    /// Look up a class by its raw byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.byte() == byte)
    }

    /// Whether `len` is an acceptable payload size for this class.
    pub const fn accepts_payload_len(self, len: usize) -> bool {
        match self {
            Self::MuxedAccount => len == 32 + 8,
            // key, 4-byte length, 1..=64 payload bytes padded to 4
            Self::SignedPayload => len >= 32 + 4 + 4 && len <= 32 + 4 + 64,
            _ => len == 32,
        }
    }
}

// ---------------------------------------------------------------------------
// Raw encode / decode
// ---------------------------------------------------------------------------

/// Encode `payload` under `version`.
///
/// Does not check the payload size; use [`Strkey`] for typed encoding.
pub fn encode(version: VersionByte, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + 3);
    data.push(version.byte());
    data.extend_from_slice(payload);
    let checksum = CRC16.checksum(&data);
    data.extend_from_slice(&checksum.to_le_bytes());
    BASE32_NOPAD.encode(&data)
}

/// Decode `text`, requiring it to be of class `expected`.
pub fn decode(expected: VersionByte, text: &str) -> Result<Vec<u8>, StrkeyError> {
    let (version, payload) = decode_any(text)?;
    if version != expected {
        return Err(StrkeyError::InvalidVersion {
            found: version.byte(),
        });
    }
    Ok(payload)
}

/// Decode `text` of any known class, returning the class and the payload.
pub fn decode_any(text: &str) -> Result<(VersionByte, Vec<u8>), StrkeyError> {
    let data = BASE32_NOPAD
        .decode(text.as_bytes())
        .map_err(|_| StrkeyError::MalformedEncoding)?;
    // data-encoding already rejects non-zero trailing bits, but a
    // round-trip comparison is the definition of canonical.
    if BASE32_NOPAD.encode(&data) != text {
        return Err(StrkeyError::MalformedEncoding);
    }
    if data.len() < 3 {
        return Err(StrkeyError::MalformedEncoding);
    }

    let version = VersionByte::from_byte(data[0])
        .ok_or(StrkeyError::InvalidVersion { found: data[0] })?;

    let (body, checksum) = data.split_at(data.len() - 2);
    if CRC16.checksum(body).to_le_bytes() != checksum {
        return Err(StrkeyError::InvalidChecksum);
    }

    let payload = &body[1..];
    if !version.accepts_payload_len(payload.len()) {
        return Err(StrkeyError::InvalidPayloadLength {
            version,
            len: payload.len(),
        });
    }
    Ok((version, payload.to_vec()))
}

/// `true` if `text` decodes as class `version`.
pub fn is_valid(version: VersionByte, text: &str) -> bool {
    decode(version, text).is_ok()
}

fn to_array(version: VersionByte, payload: &[u8]) -> Result<[u8; 32], StrkeyError> {
    payload
        .try_into()
        .map_err(|_| StrkeyError::InvalidPayloadLength {
            version,
            len: payload.len(),
        })
}

/// Decode a `G...` account id to its raw ed25519 key.
pub fn decode_account_id(text: &str) -> Result<[u8; 32], StrkeyError> {
    to_array(VersionByte::AccountId, &decode(VersionByte::AccountId, text)?)
}

/// Encode a raw ed25519 key as a `G...` account id.
pub fn encode_account_id(key: &[u8; 32]) -> String {
    encode(VersionByte::AccountId, key)
}

/// Decode an `S...` seed.
pub fn decode_seed(text: &str) -> Result<[u8; 32], StrkeyError> {
    to_array(VersionByte::Seed, &decode(VersionByte::Seed, text)?)
}

/// Encode a raw seed as `S...`.
pub fn encode_seed(seed: &[u8; 32]) -> String {
    encode(VersionByte::Seed, seed)
}

/// Decode a `C...` contract id.
pub fn decode_contract(text: &str) -> Result<[u8; 32], StrkeyError> {
    to_array(VersionByte::Contract, &decode(VersionByte::Contract, text)?)
}

/// Encode a contract id as `C...`.
pub fn encode_contract(id: &[u8; 32]) -> String {
    encode(VersionByte::Contract, id)
}

// ---------------------------------------------------------------------------
// Typed strkeys
// ---------------------------------------------------------------------------

/// A decoded strkey of any class.
///
/// `Debug` redacts seeds. `Display` does not, since writing a seed out is
/// the whole point of calling `to_string` on one.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Strkey {
    PublicKeyEd25519([u8; 32]),
    PrivateKeyEd25519([u8; 32]),
    PreAuthTx([u8; 32]),
    HashX([u8; 32]),
    MuxedAccountEd25519 { ed25519: [u8; 32], id: u64 },
    SignedPayloadEd25519(SignerKeyEd25519SignedPayload),
    Contract([u8; 32]),
}

impl Strkey {
    /// The class of this strkey.
    pub fn version(&self) -> VersionByte {
        match self {
            Self::PublicKeyEd25519(_) => VersionByte::AccountId,
            Self::PrivateKeyEd25519(_) => VersionByte::Seed,
            Self::PreAuthTx(_) => VersionByte::PreAuthTx,
            Self::HashX(_) => VersionByte::HashX,
            Self::MuxedAccountEd25519 { .. } => VersionByte::MuxedAccount,
            Self::SignedPayloadEd25519(_) => VersionByte::SignedPayload,
            Self::Contract(_) => VersionByte::Contract,
        }
    }

    /// Build a signed-payload strkey. Fails if `payload` is empty or
    /// longer than 64 bytes.
    pub fn signed_payload(ed25519: [u8; 32], payload: &[u8]) -> Result<Self, StrkeyError> {
        let invalid = StrkeyError::InvalidPayloadLength {
            version: VersionByte::SignedPayload,
            len: payload.len(),
        };
        if payload.is_empty() {
            return Err(invalid);
        }
        let payload = BytesM::<64>::try_from(payload).map_err(|_| invalid)?;
        Ok(Self::SignedPayloadEd25519(SignerKeyEd25519SignedPayload {
            ed25519,
            payload,
        }))
    }

    fn payload_bytes(&self) -> Vec<u8> {
        match self {
            Self::PublicKeyEd25519(k)
            | Self::PrivateKeyEd25519(k)
            | Self::PreAuthTx(k)
            | Self::HashX(k)
            | Self::Contract(k) => k.to_vec(),
            Self::MuxedAccountEd25519 { ed25519, id } => {
                let mut out = Vec::with_capacity(40);
                out.extend_from_slice(ed25519);
                out.extend_from_slice(&id.to_be_bytes());
                out
            }
            // The body is exactly the XDR of the signer key: the ed25519
            // key followed by a var-opaque payload.
            Self::SignedPayloadEd25519(sp) => {
                let mut out = Vec::with_capacity(32 + 4 + 64);
                out.extend_from_slice(&sp.ed25519);
                out.extend_from_slice(&(sp.payload.len() as u32).to_be_bytes());
                out.extend_from_slice(&sp.payload);
                out.resize(out.len() + crate::xdr::cursor::padding_len(sp.payload.len()), 0);
                out
            }
        }
    }

    /// Decode any strkey.
    pub fn from_string(text: &str) -> Result<Self, StrkeyError> {
        let (version, payload) = decode_any(text)?;
        Ok(match version {
            VersionByte::AccountId => Self::PublicKeyEd25519(to_array(version, &payload)?),
            VersionByte::Seed => Self::PrivateKeyEd25519(to_array(version, &payload)?),
            VersionByte::PreAuthTx => Self::PreAuthTx(to_array(version, &payload)?),
            VersionByte::HashX => Self::HashX(to_array(version, &payload)?),
            VersionByte::Contract => Self::Contract(to_array(version, &payload)?),
            VersionByte::MuxedAccount => {
                let (key, id) = payload.split_at(32);
                let mut id_bytes = [0u8; 8];
                id_bytes.copy_from_slice(id);
                Self::MuxedAccountEd25519 {
                    ed25519: to_array(version, key)?,
                    id: u64::from_be_bytes(id_bytes),
                }
            }
            VersionByte::SignedPayload => {
                let sp = SignerKeyEd25519SignedPayload::from_xdr_bytes(&payload).map_err(|_| {
                    StrkeyError::InvalidPayloadLength {
                        version,
                        len: payload.len(),
                    }
                })?;
                if sp.payload.is_empty() {
                    return Err(StrkeyError::InvalidPayloadLength {
                        version,
                        len: payload.len(),
                    });
                }
                Self::SignedPayloadEd25519(sp)
            }
        })
    }
}

impl fmt::Display for Strkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.version(), &self.payload_bytes()))
    }
}

impl fmt::Debug for Strkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrivateKeyEd25519(_) => f.write_str("Strkey(S...redacted)"),
            other => write!(f, "Strkey({other})"),
        }
    }
}

impl FromStr for Strkey {
    type Err = StrkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}
