//! # Cryptographic Primitives
//!
//! Two algorithms, both boring, both well audited:
//!
//! - **Ed25519** for signatures. Fast, deterministic, and nobody has broken it.
//! - **SHA-256** for every hash the network cares about.
//!
//! ## A note on "rolling your own crypto"
//!
//! We don't. Everything here is a thin, type-safe wrapper around audited
//! implementations. If you're tempted to optimize these functions, please
//! reconsider. Then reconsider again.

pub mod hash;
pub mod keys;
pub mod signatures;

pub use hash::{sha256, sha256_concat, sha256_hex};
pub use keys::{KeyError, Keypair};
pub use signatures::{verify_decorated, verify_raw, SignatureError};
