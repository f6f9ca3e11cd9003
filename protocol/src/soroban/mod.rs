//! # Soroban
//!
//! Client-side helpers for smart contract calls: converting values to and
//! from [`ScVal`](crate::xdr::ScVal), declaring the footprint and resources
//! a call needs, and signing the authorization entries that let a contract
//! act on behalf of an address that is not paying for the transaction.

pub mod auth;
pub mod data;
pub mod scval;

pub use auth::{
    authorization_payload, authorization_preimage, authorize_entry, authorize_invocation,
    verify_authorization, AuthError, AuthorizationSigner, CallbackSigner,
};
pub use data::SorobanDataBuilder;
