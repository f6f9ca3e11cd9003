//! # Networks
//!
//! A network is identified by its passphrase, and by nothing else. The
//! SHA-256 of the passphrase is the network id, and the network id is the
//! first thing hashed into every transaction signature. Sign for testnet
//! and the public network will reject it, which is the entire reason this
//! type exists.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config;
use crate::crypto::sha256;

/// A network, named by its passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Network {
    passphrase: String,
}

impl Network {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    /// The public network.
    pub fn public() -> Self {
        Self::new(config::PUBLIC_NETWORK_PASSPHRASE)
    }

    pub fn testnet() -> Self {
        Self::new(config::TESTNET_PASSPHRASE)
    }

    pub fn futurenet() -> Self {
        Self::new(config::FUTURENET_PASSPHRASE)
    }

    pub fn standalone() -> Self {
        Self::new(config::STANDALONE_PASSPHRASE)
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// SHA-256 of the passphrase.
    pub fn network_id(&self) -> [u8; 32] {
        sha256(self.passphrase.as_bytes())
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.passphrase)
    }
}
