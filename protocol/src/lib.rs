// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # stellar-wire — Core Library
//!
//! Everything a Stellar client has to get bit-exact before the network will
//! even look at it: the XDR wire format, strkey addresses, transaction
//! hashing and signing, fee bumps and Soroban authorization entries.
//!
//! No RPC, no Horizon client, no async runtime. This crate turns intent
//! into bytes and bytes back into intent. Getting them onto the network is
//! somebody else's job.
//!
//! ## Architecture
//!
//! - **xdr** — The codec and the schema. Strict, canonical, depth-limited.
//! - **identity** — Strkeys (`G...`, `S...`, `M...`, `C...`), muxed accounts, addresses.
//! - **crypto** — Ed25519 keypairs, decorated signatures, SHA-256.
//! - **network** — Passphrases and the network id every signature commits to.
//! - **transaction** — Builder, envelopes, signing, fee bumps, verification.
//! - **soroban** — Contract values, resource declarations and authorization entry signing.
//! - **price** — Decimal prices to `i32 / i32` fractions.
//! - **amount** — Decimal amounts to stroops and back.
//! - **toid** — Total-order ids for ledger/transaction/operation positions.
//! - **config** — Protocol constants.
//!
//! ## Design Philosophy
//!
//! 1. One value, one encoding. Anything the decoder accepts re-encodes to
//!    the same bytes.
//! 2. Money is integers. Floats never touch amounts, fees or prices.
//! 3. Secrets stay put. Seeds never show up in `Debug` output or logs.
//! 4. If it ends up in a hash, it has golden vectors. Plural.

pub mod amount;
pub mod config;
pub mod crypto;
pub mod identity;
pub mod network;
pub mod price;
pub mod soroban;
pub mod toid;
pub mod transaction;
pub mod xdr;
