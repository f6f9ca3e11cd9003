//! Text forms of accounts: `G...` for a plain account, `M...` for a muxed
//! one. Both parse into the XDR [`MuxedAccount`], so code that takes a
//! destination never has to care which kind it was handed.

use std::fmt;
use std::str::FromStr;

use super::strkey::{self, Strkey, StrkeyError, VersionByte};
use crate::xdr::{AccountId, MuxedAccount, MuxedAccountMed25519, PublicKey};

/// Build a muxed account from a base key and a sub-account id.
pub fn muxed_account(ed25519: [u8; 32], id: u64) -> MuxedAccount {
    MuxedAccount::MuxedEd25519(MuxedAccountMed25519 { id, ed25519 })
}

/// Parse a `G...` or `M...` strkey.
pub fn parse_muxed_account(text: &str) -> Result<MuxedAccount, StrkeyError> {
    match Strkey::from_string(text)? {
        Strkey::PublicKeyEd25519(key) => Ok(MuxedAccount::Ed25519(key)),
        Strkey::MuxedAccountEd25519 { ed25519, id } => Ok(muxed_account(ed25519, id)),
        other => Err(StrkeyError::InvalidVersion {
            found: other.version().byte(),
        }),
    }
}

/// Parse a `G...` account id into XDR.
pub fn parse_account_id(text: &str) -> Result<AccountId, StrkeyError> {
    Ok(PublicKey::PublicKeyTypeEd25519(strkey::decode_account_id(
        text,
    )?))
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&strkey::encode_account_id(self.ed25519()))
    }
}

impl FromStr for PublicKey {
    type Err = StrkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_account_id(s)
    }
}

impl fmt::Display for MuxedAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MuxedAccount::Ed25519(key) => f.write_str(&strkey::encode_account_id(key)),
            MuxedAccount::MuxedEd25519(m) => {
                let mut payload = [0u8; 40];
                payload[..32].copy_from_slice(&m.ed25519);
                payload[32..].copy_from_slice(&m.id.to_be_bytes());
                f.write_str(&strkey::encode(VersionByte::MuxedAccount, &payload))
            }
        }
    }
}

impl FromStr for MuxedAccount {
    type Err = StrkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_muxed_account(s)
    }
}
