//! Conversions between Rust values and contract values.
//!
//! Nothing clever: integers map to their same-width arms, 128-bit
//! integers split into hi/lo halves, and symbols, strings and byte arrays
//! get their length bounds checked on the way in.

use crate::xdr::{
    BytesM, Int128Parts, ScMapEntry, ScVal, ScVec, StringM, UInt128Parts, VecM, XdrError,
};

impl From<bool> for ScVal {
    fn from(v: bool) -> Self {
        ScVal::Bool(v)
    }
}

impl From<u32> for ScVal {
    fn from(v: u32) -> Self {
        ScVal::U32(v)
    }
}

impl From<i32> for ScVal {
    fn from(v: i32) -> Self {
        ScVal::I32(v)
    }
}

impl From<u64> for ScVal {
    fn from(v: u64) -> Self {
        ScVal::U64(v)
    }
}

impl From<i64> for ScVal {
    fn from(v: i64) -> Self {
        ScVal::I64(v)
    }
}

impl From<i128> for ScVal {
    fn from(v: i128) -> Self {
        ScVal::I128(Int128Parts {
            hi: (v >> 64) as i64,
            lo: v as u64,
        })
    }
}

impl From<u128> for ScVal {
    fn from(v: u128) -> Self {
        ScVal::U128(UInt128Parts {
            hi: (v >> 64) as u64,
            lo: v as u64,
        })
    }
}

impl ScVal {
    /// A symbol: at most 32 bytes.
    pub fn symbol(s: &str) -> Result<Self, XdrError> {
        Ok(ScVal::Symbol(StringM::try_from(s)?))
    }

    pub fn string(s: &str) -> Result<Self, XdrError> {
        Ok(ScVal::String(StringM::try_from(s)?))
    }

    pub fn bytes(b: &[u8]) -> Result<Self, XdrError> {
        Ok(ScVal::Bytes(BytesM::try_from(b)?))
    }

    pub fn vec(items: Vec<ScVal>) -> Result<Self, XdrError> {
        Ok(ScVal::Vec(Some(ScVec::try_from(items)?)))
    }

    /// A map. Entries keep the order given; the host expects them sorted
    /// by key.
    pub fn map(entries: Vec<(ScVal, ScVal)>) -> Result<Self, XdrError> {
        let entries: Vec<ScMapEntry> = entries
            .into_iter()
            .map(|(key, val)| ScMapEntry { key, val })
            .collect();
        Ok(ScVal::Map(Some(VecM::try_from(entries)?)))
    }

    pub fn as_i128(&self) -> Option<i128> {
        match self {
            ScVal::I128(p) => Some((i128::from(p.hi) << 64) | i128::from(p.lo)),
            _ => None,
        }
    }

    pub fn as_u128(&self) -> Option<u128> {
        match self {
            ScVal::U128(p) => Some((u128::from(p.hi) << 64) | u128::from(p.lo)),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ScVal::Bytes(b) => Some(b.as_slice()),
            _ => None,
        }
    }

    pub fn as_vec(&self) -> Option<&[ScVal]> {
        match self {
            ScVal::Vec(Some(v)) => Some(v.as_slice()),
            _ => None,
        }
    }

    /// Look up the value stored under symbol `key` in a map.
    pub fn map_get(&self, key: &str) -> Option<&ScVal> {
        let ScVal::Map(Some(entries)) = self else {
            return None;
        };
        entries.iter().find_map(|e| match &e.key {
            ScVal::Symbol(s) if s.as_bytes() == key.as_bytes() => Some(&e.val),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xdr::XdrCodec;

    #[test]
    fn i128_splits_into_halves() {
        for v in [0i128, 1, -1, i128::MAX, i128::MIN, 1 << 64, -(1 << 64) + 7] {
            let sc = ScVal::from(v);
            assert_eq!(sc.as_i128(), Some(v), "{v}");
        }
        match ScVal::from(-1i128) {
            ScVal::I128(p) => assert_eq!((p.hi, p.lo), (-1, u64::MAX)),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(ScVal::from(u128::MAX).as_u128(), Some(u128::MAX));
    }

    #[test]
    fn symbol_is_bounded() {
        assert!(ScVal::symbol(&"a".repeat(32)).is_ok());
        assert_eq!(
            ScVal::symbol(&"a".repeat(33)),
            Err(XdrError::BoundExceeded { max: 32, len: 33 })
        );
    }

    #[test]
    fn map_lookup_by_symbol() {
        let m = ScVal::map(vec![
            (ScVal::symbol("a").unwrap(), ScVal::from(1u32)),
            (ScVal::symbol("b").unwrap(), ScVal::bytes(b"xyz").unwrap()),
        ])
        .unwrap();
        assert_eq!(m.map_get("a"), Some(&ScVal::U32(1)));
        assert_eq!(m.map_get("b").and_then(ScVal::as_bytes), Some(&b"xyz"[..]));
        assert_eq!(m.map_get("c"), None);
        assert_eq!(ScVal::from(true).map_get("a"), None);

        let bytes = m.to_xdr_bytes().unwrap();
        assert_eq!(ScVal::from_xdr_bytes(&bytes).unwrap(), m);
    }

    #[test]
    fn integer_arms() {
        assert_eq!(ScVal::from(7u32), ScVal::U32(7));
        assert_eq!(ScVal::from(-7i32), ScVal::I32(-7));
        assert_eq!(ScVal::from(7u64), ScVal::U64(7));
        assert_eq!(ScVal::from(-7i64), ScVal::I64(-7));
        assert_eq!(ScVal::vec(vec![]).unwrap().as_vec(), Some(&[][..]));
    }
}
