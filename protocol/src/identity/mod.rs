//! # Identity Module
//!
//! Everything that turns 32 raw bytes into something a human can paste into
//! a form without losing money to a typo.
//!
//! 1. **Strkey** — versioned, checksummed base32 for keys, hashes and
//!    contract ids. One wrong character and decoding fails, which is
//!    exactly the point.
//! 2. **Muxed accounts** — `G...` and `M...` text forms of transaction
//!    sources and destinations.
//! 3. **Addresses** — accounts and contracts as contract-call arguments.

pub mod address;
pub mod muxed;
pub mod strkey;

pub use address::Address;
pub use muxed::{muxed_account, parse_account_id, parse_muxed_account};
pub use strkey::{Strkey, StrkeyError, VersionByte};
