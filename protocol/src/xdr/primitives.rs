//! Codec implementations for the scalar wire types and the generic
//! containers (bounded bytes, bounded strings, bounded vectors, optionals,
//! boxes and fixed arrays).
//!
//! Bounded containers check their bound at construction *and* again at
//! encode time. The private inner vector means the first check normally
//! makes the second one redundant, but encoding must never silently
//! truncate, so both stay.

use std::fmt;
use std::ops::Deref;

use super::cursor::XdrReader;
use super::error::XdrError;
use super::writer::XdrWriter;
use super::XdrCodec;

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

impl XdrCodec for i32 {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_i32(*self);
        Ok(())
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        r.read_i32()
    }
}

impl XdrCodec for u32 {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_u32(*self);
        Ok(())
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        r.read_u32()
    }
}

impl XdrCodec for i64 {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_i64(*self);
        Ok(())
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        r.read_i64()
    }
}

impl XdrCodec for u64 {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_u64(*self);
        Ok(())
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        r.read_u64()
    }
}

impl XdrCodec for f32 {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_u32(self.to_bits());
        Ok(())
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        Ok(f32::from_bits(r.read_u32()?))
    }
}

impl XdrCodec for f64 {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_u64(self.to_bits());
        Ok(())
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        Ok(f64::from_bits(r.read_u64()?))
    }
}

impl XdrCodec for bool {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_u32(u32::from(*self));
        Ok(())
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        match r.read_u32()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(XdrError::InvalidBool(other)),
        }
    }
}

/// Fixed-length opaque data: exactly `N` bytes plus padding.
impl<const N: usize> XdrCodec for [u8; N] {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_padded(self);
        Ok(())
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        let bytes = r.read_array::<N>()?;
        r.read_padding(N)?;
        Ok(bytes)
    }
}

// ---------------------------------------------------------------------------
// Optional / Box
// ---------------------------------------------------------------------------

/// Optionals count one nesting level, present or not.
impl<T: XdrCodec> XdrCodec for Option<T> {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.descend(|w| match self {
            None => {
                w.write_u32(0);
                Ok(())
            }
            Some(v) => {
                w.write_u32(1);
                v.encode(w)
            }
        })
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        r.descend(|r| match r.read_u32()? {
            0 => Ok(None),
            1 => Ok(Some(T::decode(r)?)),
            other => Err(XdrError::InvalidOptionalFlag(other)),
        })
    }
}

impl<T: XdrCodec> XdrCodec for Box<T> {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        self.as_ref().encode(w)
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        Ok(Box::new(T::decode(r)?))
    }
}

// ---------------------------------------------------------------------------
// Fixed arrays of elements
// ---------------------------------------------------------------------------

/// Encode a fixed-count array: no length prefix, elements back to back.
pub fn encode_fixed_array<T: XdrCodec, const N: usize>(
    items: &[T; N],
    w: &mut XdrWriter,
) -> Result<(), XdrError> {
    for item in items {
        item.encode(w)?;
    }
    Ok(())
}

/// Decode exactly `N` elements with no length prefix.
pub fn decode_fixed_array<T: XdrCodec, const N: usize>(
    r: &mut XdrReader<'_>,
) -> Result<[T; N], XdrError> {
    let mut items = Vec::with_capacity(N);
    for _ in 0..N {
        items.push(T::decode(r)?);
    }
    items.try_into().map_err(|items: Vec<T>| XdrError::BoundExceeded {
        max: N as u32,
        len: items.len(),
    })
}

// ---------------------------------------------------------------------------
// BytesM — variable-length opaque<MAX>
// ---------------------------------------------------------------------------

/// Variable-length opaque data bounded by `MAX` bytes.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BytesM<const MAX: u32 = { u32::MAX }>(Vec<u8>);

impl<const MAX: u32> BytesM<MAX> {
    pub const MAX_LEN: u32 = MAX;

    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl<const MAX: u32> Deref for BytesM<MAX> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.0
    }
}

impl<const MAX: u32> TryFrom<Vec<u8>> for BytesM<MAX> {
    type Error = XdrError;

    fn try_from(v: Vec<u8>) -> Result<Self, XdrError> {
        check_bound(v.len(), MAX)?;
        Ok(Self(v))
    }
}

impl<const MAX: u32> TryFrom<&[u8]> for BytesM<MAX> {
    type Error = XdrError;

    fn try_from(v: &[u8]) -> Result<Self, XdrError> {
        Self::try_from(v.to_vec())
    }
}

impl<const MAX: u32, const N: usize> TryFrom<[u8; N]> for BytesM<MAX> {
    type Error = XdrError;

    fn try_from(v: [u8; N]) -> Result<Self, XdrError> {
        Self::try_from(v.to_vec())
    }
}

impl<const MAX: u32> fmt::Debug for BytesM<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BytesM({})", self.to_hex())
    }
}

impl<const MAX: u32> XdrCodec for BytesM<MAX> {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_len(self.0.len(), MAX)?;
        w.write_padded(&self.0);
        Ok(())
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        let len = r.read_len(MAX, 1)?;
        Ok(Self(r.read_padded(len)?.to_vec()))
    }
}

// ---------------------------------------------------------------------------
// StringM — string<MAX>
// ---------------------------------------------------------------------------

/// An XDR string bounded by `MAX` bytes.
///
/// The wire format is a byte string; it is not required to be UTF-8.
/// Use [`StringM::as_str`] when text is expected.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StringM<const MAX: u32 = { u32::MAX }>(Vec<u8>);

impl<const MAX: u32> StringM<MAX> {
    pub const MAX_LEN: u32 = MAX;

    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The contents as UTF-8, if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl<const MAX: u32> TryFrom<&str> for StringM<MAX> {
    type Error = XdrError;

    fn try_from(s: &str) -> Result<Self, XdrError> {
        Self::try_from(s.as_bytes().to_vec())
    }
}

impl<const MAX: u32> TryFrom<String> for StringM<MAX> {
    type Error = XdrError;

    fn try_from(s: String) -> Result<Self, XdrError> {
        Self::try_from(s.into_bytes())
    }
}

impl<const MAX: u32> TryFrom<Vec<u8>> for StringM<MAX> {
    type Error = XdrError;

    fn try_from(v: Vec<u8>) -> Result<Self, XdrError> {
        check_bound(v.len(), MAX)?;
        Ok(Self(v))
    }
}

impl<const MAX: u32> fmt::Display for StringM<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

impl<const MAX: u32> fmt::Debug for StringM<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StringM({:?})", String::from_utf8_lossy(&self.0))
    }
}

impl<const MAX: u32> XdrCodec for StringM<MAX> {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.write_len(self.0.len(), MAX)?;
        w.write_padded(&self.0);
        Ok(())
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        let len = r.read_len(MAX, 1)?;
        Ok(Self(r.read_padded(len)?.to_vec()))
    }
}

// ---------------------------------------------------------------------------
// VecM — T<MAX>
// ---------------------------------------------------------------------------

/// A variable-length array bounded by `MAX` elements.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VecM<T, const MAX: u32 = { u32::MAX }>(Vec<T>);

impl<T, const MAX: u32> Default for VecM<T, MAX> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T, const MAX: u32> VecM<T, MAX> {
    pub const MAX_LEN: u32 = MAX;

    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element, refusing to grow past the bound.
    pub fn try_push(&mut self, item: T) -> Result<(), XdrError> {
        check_bound(self.0.len() + 1, MAX)?;
        self.0.push(item);
        Ok(())
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T, const MAX: u32> Deref for VecM<T, MAX> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const MAX: u32> TryFrom<Vec<T>> for VecM<T, MAX> {
    type Error = XdrError;

    fn try_from(v: Vec<T>) -> Result<Self, XdrError> {
        check_bound(v.len(), MAX)?;
        Ok(Self(v))
    }
}

impl<T, const MAX: u32> IntoIterator for VecM<T, MAX> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const MAX: u32> IntoIterator for &'a VecM<T, MAX> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Like optionals, a vector is one nesting level regardless of length.
impl<T: XdrCodec, const MAX: u32> XdrCodec for VecM<T, MAX> {
    fn encode(&self, w: &mut XdrWriter) -> Result<(), XdrError> {
        w.descend(|w| {
            w.write_len(self.0.len(), MAX)?;
            for item in &self.0 {
                item.encode(w)?;
            }
            Ok(())
        })
    }

    fn decode(r: &mut XdrReader<'_>) -> Result<Self, XdrError> {
        r.descend(|r| {
            // Every XDR value occupies at least one 4-byte unit.
            let len = r.read_len(MAX, 4)?;
            let mut items = Vec::with_capacity(len);
            for _ in 0..len {
                items.push(T::decode(r)?);
            }
            Ok(Self(items))
        })
    }
}

fn check_bound(len: usize, max: u32) -> Result<(), XdrError> {
    if len > max as usize {
        Err(XdrError::BoundExceeded { max, len })
    } else {
        Ok(())
    }
}
