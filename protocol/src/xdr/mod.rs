//! # XDR Codec
//!
//! Every byte that crosses the network, gets hashed for a signature, or
//! lands in a ledger goes through this module. XDR is a dull format on
//! purpose: big-endian integers, everything aligned to four bytes, zero
//! padding, a length in front of anything variable and a tag in front of
//! any union. Dull is what you want when two implementations written a
//! decade apart have to agree on the same hash.
//!
//! The codec is strict. Unknown union tags, out-of-range enum values,
//! oversized arrays, non-zero padding, booleans that are neither 0 nor 1
//! and trailing garbage all fail loudly, which gives every accepted value
//! exactly one encoding.
//!
//! ```text
//!   value ──encode──► XdrWriter ──► bytes ──► base64
//!   value ◄──decode── XdrReader ◄── bytes ◄── base64
//! ```

#[macro_use]
mod macros;

pub mod cursor;
pub mod error;
pub mod primitives;
pub mod types;
pub mod writer;

pub use cursor::XdrReader;
pub use error::XdrError;
pub use primitives::{decode_fixed_array, encode_fixed_array, BytesM, StringM, VecM};
pub use types::*;
pub use writer::XdrWriter;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

/// A value with a canonical XDR encoding.
///
/// Implementors provide [`encode`](XdrCodec::encode) and
/// [`decode`](XdrCodec::decode); the byte and base64 helpers come for free.
pub trait XdrCodec: Sized {
    /// Append this value's encoding to `w`.
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError>;

    /// Read one value from `r`, leaving the cursor just past it.
    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError>;

    /// Encode to a fresh byte vector.
    fn to_xdr_bytes(&self) -> Result<Vec<u8>, XdrError> {
        let mut w = XdrWriter::new();
        self.encode(&mut w)?;
        Ok(w.into_bytes())
    }

    /// Decode a value that must span the whole buffer.
    fn from_xdr_bytes(bytes: &[u8]) -> Result<Self, XdrError> {
        let mut r = XdrReader::new(bytes);
        let value = Self::decode(&mut r)?;
        r.finish()?;
        Ok(value)
    }

    /// Decode a value from the front of `bytes`, returning it together with
    /// the number of bytes consumed.
    fn decode_prefix(bytes: &[u8]) -> Result<(Self, usize), XdrError> {
        let mut r = XdrReader::new(bytes);
        let value = Self::decode(&mut r)?;
        Ok((value, r.pos()))
    }

    /// Encode and wrap in standard padded base64.
    fn to_xdr_base64(&self) -> Result<String, XdrError> {
        Ok(BASE64.encode(self.to_xdr_bytes()?))
    }

    /// Unwrap base64 and decode the whole payload.
    fn from_xdr_base64(s: &str) -> Result<Self, XdrError> {
        let bytes = BASE64
            .decode(s.trim())
            .map_err(|e| XdrError::Base64(e.to_string()))?;
        Self::from_xdr_bytes(&bytes)
    }
}
