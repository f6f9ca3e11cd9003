//! Read side of the codec: a cursor over a borrowed byte slice.
//!
//! The reader never copies more than the caller asks for and never reads
//! past the end of its slice. It also tracks nesting depth so recursive
//! types (contract values, claim predicates, invocation trees) cannot blow
//! the stack on hostile input.

use super::error::XdrError;
use crate::config::DEFAULT_XDR_DEPTH_LIMIT;

/// A decoding cursor over XDR bytes.
#[derive(Debug, Clone)]
pub struct XdrReader<'a> {
    slice: &'a [u8],
    pos: usize,
    depth: u32,
    depth_limit: u32,
}

impl<'a> XdrReader<'a> {
    /// Create a reader at the start of `slice` with the default depth limit.
    pub fn new(slice: &'a [u8]) -> Self {
        Self::with_depth_limit(slice, DEFAULT_XDR_DEPTH_LIMIT)
    }

    /// Create a reader with an explicit nesting limit.
    pub fn with_depth_limit(slice: &'a [u8], depth_limit: u32) -> Self {
        Self {
            slice,
            pos: 0,
            depth: 0,
            depth_limit,
        }
    }

    /// Bytes consumed so far.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    pub fn remaining(&self) -> usize {
        self.slice.len().saturating_sub(self.pos)
    }

    /// `true` once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    #[inline]
    fn need(&self, n: usize) -> Result<(), XdrError> {
        if n > self.remaining() {
            Err(XdrError::Truncated {
                needed: n,
                remaining: self.remaining(),
            })
        } else {
            Ok(())
        }
    }

    /// Borrow the next `len` bytes and advance past them.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], XdrError> {
        self.need(len)?;
        let out = &self.slice[self.pos..self.pos + len];
        self.pos += len;
        Ok(out)
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], XdrError> {
        let bytes = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_u32(&mut self) -> Result<u32, XdrError> {
        Ok(u32::from_be_bytes(self.read_array::<4>()?))
    }

    pub fn read_i32(&mut self) -> Result<i32, XdrError> {
        Ok(i32::from_be_bytes(self.read_array::<4>()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, XdrError> {
        Ok(u64::from_be_bytes(self.read_array::<8>()?))
    }

    pub fn read_i64(&mut self) -> Result<i64, XdrError> {
        Ok(i64::from_be_bytes(self.read_array::<8>()?))
    }

    /// Skip the zero padding that follows a payload of `len` bytes.
    ///
    /// Padding must be zero; anything else is rejected so that every
    /// accepted input has exactly one encoding.
    pub fn read_padding(&mut self, len: usize) -> Result<(), XdrError> {
        let pad = padding_len(len);
        if pad == 0 {
            return Ok(());
        }
        let bytes = self.read_bytes(pad)?;
        if bytes.iter().any(|b| *b != 0) {
            return Err(XdrError::NonZeroPadding);
        }
        Ok(())
    }

    /// Read `len` payload bytes followed by their padding.
    pub fn read_padded(&mut self, len: usize) -> Result<&'a [u8], XdrError> {
        let bytes = self.read_bytes(len)?;
        self.read_padding(len)?;
        Ok(bytes)
    }

    /// Read a 4-byte length prefix and check it against `max`.
    ///
    /// The length is also checked against the bytes that remain, scaled by
    /// the smallest possible element size, so a forged prefix cannot make
    /// the decoder allocate gigabytes before failing.
    pub fn read_len(&mut self, max: u32, min_elem_size: usize) -> Result<usize, XdrError> {
        let len = self.read_u32()?;
        if len > max {
            return Err(XdrError::BoundExceeded {
                max,
                len: len as usize,
            });
        }
        let len = len as usize;
        let min_bytes = len.saturating_mul(min_elem_size);
        self.need(min_bytes)?;
        Ok(len)
    }

    /// Run `f` one nesting level deeper.
    pub fn descend<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, XdrError>,
    ) -> Result<T, XdrError> {
        if self.depth >= self.depth_limit {
            return Err(XdrError::DepthLimitExceeded(self.depth_limit));
        }
        self.depth += 1;
        let out = f(self);
        self.depth -= 1;
        out
    }

    /// Fail unless every byte was consumed.
    pub fn finish(&self) -> Result<(), XdrError> {
        match self.remaining() {
            0 => Ok(()),
            count => Err(XdrError::TrailingBytes { count }),
        }
    }
}

/// Padding needed to bring `len` up to a multiple of four.
#[inline]
pub fn padding_len(len: usize) -> usize {
    (4 - len % 4) % 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_big_endian_integers() {
        let bytes = [0x00, 0x00, 0x01, 0x02, 0xFF, 0xFF, 0xFF, 0xFE];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(r.read_u32().unwrap(), 0x0102);
        assert_eq!(r.read_i32().unwrap(), -2);
        assert!(r.is_empty());
    }

    #[test]
    fn truncated_read_reports_shortfall() {
        let mut r = XdrReader::new(&[0u8; 3]);
        assert_eq!(
            r.read_u32(),
            Err(XdrError::Truncated {
                needed: 4,
                remaining: 3
            })
        );
    }

    #[test]
    fn padding_must_be_zero() {
        let good = [0xAA, 0x00, 0x00, 0x00];
        let mut r = XdrReader::new(&good);
        assert_eq!(r.read_padded(1).unwrap(), &[0xAA]);

        let bad = [0xAA, 0x00, 0x01, 0x00];
        let mut r = XdrReader::new(&bad);
        assert_eq!(r.read_padded(1), Err(XdrError::NonZeroPadding));
    }

    #[test]
    fn length_prefix_respects_bound() {
        let bytes = [0x00, 0x00, 0x00, 0x05, 1, 2, 3, 4, 5, 0, 0, 0];
        let mut r = XdrReader::new(&bytes);
        assert_eq!(
            r.read_len(4, 1),
            Err(XdrError::BoundExceeded { max: 4, len: 5 })
        );
    }

    #[test]
    fn forged_length_fails_before_allocating() {
        // Claims 0x10000000 elements with nothing behind it.
        let bytes = [0x10, 0x00, 0x00, 0x00];
        let mut r = XdrReader::new(&bytes);
        assert!(matches!(
            r.read_len(u32::MAX, 4),
            Err(XdrError::Truncated { .. })
        ));
    }

    #[test]
    fn depth_limit_is_enforced() {
        fn nest(r: &mut XdrReader<'_>, levels: u32) -> Result<(), XdrError> {
            if levels == 0 {
                return Ok(());
            }
            r.descend(|r| nest(r, levels - 1))
        }
        let mut r = XdrReader::with_depth_limit(&[], 3);
        assert!(nest(&mut r, 3).is_ok());
        assert_eq!(nest(&mut r, 4), Err(XdrError::DepthLimitExceeded(3)));
    }

    #[test]
    fn finish_detects_trailing_bytes() {
        let r = XdrReader::new(&[0u8; 4]);
        assert_eq!(r.finish(), Err(XdrError::TrailingBytes { count: 4 }));
    }

    #[test]
    fn padding_len_values() {
        assert_eq!(padding_len(0), 0);
        assert_eq!(padding_len(1), 3);
        assert_eq!(padding_len(2), 2);
        assert_eq!(padding_len(3), 1);
        assert_eq!(padding_len(4), 0);
    }
}
