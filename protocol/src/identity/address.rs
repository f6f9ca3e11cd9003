//! # Addresses
//!
//! Contracts do not care whether the caller is a person or another
//! contract; both show up as an [`ScAddress`]. [`Address`] is the same idea
//! on the client side, spelled as `G...` or `C...`.

use std::fmt;
use std::str::FromStr;

use super::strkey::{self, Strkey, StrkeyError};
use crate::xdr::{PublicKey, ScAddress, ScVal};

/// An account or a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    Account([u8; 32]),
    Contract([u8; 32]),
}

impl Address {
    /// Parse a `G...` or `C...` strkey.
    pub fn from_string(text: &str) -> Result<Self, StrkeyError> {
        match Strkey::from_string(text)? {
            Strkey::PublicKeyEd25519(key) => Ok(Self::Account(key)),
            Strkey::Contract(id) => Ok(Self::Contract(id)),
            other => Err(StrkeyError::InvalidVersion {
                found: other.version().byte(),
            }),
        }
    }

    /// Raw key or contract id.
    pub fn raw(&self) -> &[u8; 32] {
        match self {
            Self::Account(k) | Self::Contract(k) => k,
        }
    }

    pub fn to_sc_address(&self) -> ScAddress {
        match self {
            Self::Account(k) => ScAddress::Account(PublicKey::PublicKeyTypeEd25519(*k)),
            Self::Contract(id) => ScAddress::Contract(*id),
        }
    }

    pub fn from_sc_address(addr: &ScAddress) -> Self {
        match addr {
            ScAddress::Account(pk) => Self::Account(*pk.ed25519()),
            ScAddress::Contract(id) => Self::Contract(*id),
        }
    }

    /// Wrap as a contract argument.
    pub fn to_sc_val(&self) -> ScVal {
        ScVal::Address(self.to_sc_address())
    }
}

impl From<Address> for ScAddress {
    fn from(a: Address) -> Self {
        a.to_sc_address()
    }
}

impl From<&ScAddress> for Address {
    fn from(a: &ScAddress) -> Self {
        Address::from_sc_address(a)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(k) => f.write_str(&strkey::encode_account_id(k)),
            Self::Contract(id) => f.write_str(&strkey::encode_contract(id)),
        }
    }
}

impl FromStr for Address {
    type Err = StrkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}
