//! # Amounts
//!
//! Humans write `12.5`; the ledger stores `125000000`. Every asset amount
//! on the wire is a signed 64-bit count of stroops, one ten-millionth of a
//! unit, so seven decimal places is all the precision there is. Ask for an
//! eighth and you get an error, not a rounding surprise.

use thiserror::Error;

use crate::config::{AMOUNT_DECIMALS, STROOPS_PER_UNIT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("not a decimal number: {0:?}")]
    InvalidDecimal(String),

    #[error("amount {0:?} has more than 7 digits after the decimal point")]
    TooPrecise(String),

    #[error("amount {0:?} is negative")]
    Negative(String),

    #[error("amount {0:?} does not fit in a 64-bit stroop count")]
    Overflow(String),
}

/// Split a plain unsigned decimal (`"12"`, `"12.5"`, `".5"`, `"5."`) into
/// its digits as an integer and the number of fractional digits.
///
/// Returns `None` for anything else, including signs and exponents, or if
/// the digits do not fit in a `u128`.
pub(crate) fn parse_unsigned_decimal(s: &str) -> Option<(u128, u32)> {
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let mut mantissa: u128 = 0;
    for c in int_part.chars().chain(frac_part.chars()) {
        let digit = c.to_digit(10)?;
        mantissa = mantissa.checked_mul(10)?.checked_add(u128::from(digit))?;
    }
    Some((mantissa, frac_part.len() as u32))
}

/// Parse a decimal amount into stroops.
///
/// ```
/// use stellar_wire::amount::to_stroops;
///
/// assert_eq!(to_stroops("1.5").unwrap(), 15_000_000);
/// assert_eq!(to_stroops("0.0000001").unwrap(), 1);
/// ```
pub fn to_stroops(amount: &str) -> Result<i64, AmountError> {
    let trimmed = amount.trim();
    if trimmed.starts_with('-') {
        return Err(AmountError::Negative(amount.to_string()));
    }
    let (mantissa, scale) = parse_unsigned_decimal(trimmed)
        .ok_or_else(|| AmountError::InvalidDecimal(amount.to_string()))?;

    let mut mantissa = mantissa;
    let mut scale = scale;
    // "1.50000000" is fine: trailing zeros carry no precision.
    while scale > AMOUNT_DECIMALS as u32 && mantissa % 10 == 0 {
        mantissa /= 10;
        scale -= 1;
    }
    if scale > AMOUNT_DECIMALS as u32 {
        return Err(AmountError::TooPrecise(amount.to_string()));
    }

    let factor = 10u128.pow(AMOUNT_DECIMALS as u32 - scale);
    mantissa
        .checked_mul(factor)
        .and_then(|v| i64::try_from(v).ok())
        .ok_or_else(|| AmountError::Overflow(amount.to_string()))
}

/// Format stroops as a decimal amount with trailing zeros stripped.
///
/// ```
/// use stellar_wire::amount::from_stroops;
///
/// assert_eq!(from_stroops(15_000_000), "1.5");
/// assert_eq!(from_stroops(1), "0.0000001");
/// ```
pub fn from_stroops(stroops: i64) -> String {
    let sign = if stroops < 0 { "-" } else { "" };
    let abs = stroops.unsigned_abs();
    let per_unit = STROOPS_PER_UNIT as u64;
    let whole = abs / per_unit;
    let frac = abs % per_unit;
    if frac == 0 {
        return format!("{sign}{whole}");
    }
    let frac = format!("{frac:0width$}", width = AMOUNT_DECIMALS);
    format!("{sign}{whole}.{}", frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_amounts() {
        assert_eq!(to_stroops("1").unwrap(), 10_000_000);
        assert_eq!(to_stroops("1.5").unwrap(), 15_000_000);
        assert_eq!(to_stroops("2.5123456").unwrap(), 25_123_456);
        assert_eq!(to_stroops(".5").unwrap(), 5_000_000);
        assert_eq!(to_stroops("0").unwrap(), 0);
        assert_eq!(to_stroops("1.50000000").unwrap(), 15_000_000);
    }

    #[test]
    fn max_amount() {
        assert_eq!(to_stroops("922337203685.4775807").unwrap(), i64::MAX);
        assert!(matches!(
            to_stroops("922337203685.4775808"),
            Err(AmountError::Overflow(_))
        ));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(to_stroops("0.00000001"), Err(AmountError::TooPrecise(_))));
        assert!(matches!(to_stroops("-1"), Err(AmountError::Negative(_))));
        assert!(matches!(to_stroops("1e5"), Err(AmountError::InvalidDecimal(_))));
        assert!(matches!(to_stroops(""), Err(AmountError::InvalidDecimal(_))));
        assert!(matches!(to_stroops("."), Err(AmountError::InvalidDecimal(_))));
        assert!(matches!(to_stroops("1.2.3"), Err(AmountError::InvalidDecimal(_))));
    }

    #[test]
    fn formats_stroops() {
        assert_eq!(from_stroops(10_000_000), "1");
        assert_eq!(from_stroops(25_123_456), "2.5123456");
        assert_eq!(from_stroops(0), "0");
        assert_eq!(from_stroops(-5_000_000), "-0.5");
        assert_eq!(from_stroops(i64::MAX), "922337203685.4775807");
    }

    #[test]
    fn format_then_parse() {
        for v in [1, 10, 123_456_789, 10_000_000, i64::MAX] {
            assert_eq!(to_stroops(&from_stroops(v)).unwrap(), v);
        }
    }
}
