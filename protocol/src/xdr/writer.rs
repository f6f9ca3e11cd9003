//! Write side of the codec: an append-only buffer with XDR alignment rules.

use super::cursor::padding_len;
use super::error::XdrError;
use crate::config::DEFAULT_XDR_DEPTH_LIMIT;

/// An XDR output buffer.
#[derive(Debug, Clone)]
pub struct XdrWriter {
    buf: Vec<u8>,
    depth: u32,
    depth_limit: u32,
}

impl Default for XdrWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XdrWriter {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            depth: 0,
            depth_limit: DEFAULT_XDR_DEPTH_LIMIT,
        }
    }

    /// A writer with an explicit nesting limit.
    pub fn with_depth_limit(depth_limit: u32) -> Self {
        Self {
            depth_limit,
            ..Self::new()
        }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_i32(&mut self, v: i32) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    pub fn write_i64(&mut self, v: i64) {
        self.buf.extend_from_slice(&v.to_be_bytes());
    }

    /// Append `bytes` followed by zero padding to the next 4-byte boundary.
    pub fn write_padded(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
        let pad = padding_len(bytes.len());
        self.buf.extend(std::iter::repeat(0u8).take(pad));
    }

    /// Write a length prefix after checking it against `max`.
    pub fn write_len(&mut self, len: usize, max: u32) -> Result<(), XdrError> {
        let wire = u32::try_from(len).map_err(|_| XdrError::LengthOverflow(len))?;
        if wire > max {
            return Err(XdrError::BoundExceeded { max, len });
        }
        self.write_u32(wire);
        Ok(())
    }

    /// Run `f` one nesting level deeper.
    pub fn descend(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<(), XdrError>,
    ) -> Result<(), XdrError> {
        if self.depth >= self.depth_limit {
            return Err(XdrError::DepthLimitExceeded(self.depth_limit));
        }
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        out
    }
}
