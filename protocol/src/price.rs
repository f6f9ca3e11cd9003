//! # Price Approximation
//!
//! Offers carry their price as a fraction of two `i32`s, not as a decimal.
//! Turning `"2.93850088"` into `36731261/12500000` is a continued-fraction
//! walk: keep taking the integer part and inverting the remainder, and stop
//! at the last convergent whose terms both still fit in an `i32`.
//!
//! All arithmetic here is exact integer arithmetic on the decimal's digits.
//! Floats never get a vote.

use thiserror::Error;
use tracing::trace;

use crate::amount::parse_unsigned_decimal;
use crate::xdr::Price;

const INT32_MAX: u128 = i32::MAX as u128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PriceError {
    /// The walk ended on a convergent with a zero term: the value is zero,
    /// or too large or too small to express as `i32 / i32`.
    #[error("no rational approximation found for {0:?}")]
    NoApproximation(String),

    #[error("not a non-negative decimal number: {0:?}")]
    InvalidDecimal(String),

    #[error("invalid price {n}/{d}: both terms must be positive")]
    InvalidPrice { n: i32, d: i32 },
}

/// Best `n/d` approximation of `numerator/denominator` with both terms at
/// most `i32::MAX`.
fn approximate(mut p: u128, mut q: u128) -> Option<(i32, i32)> {
    // Convergents h/k, seeded with 0/1 and 1/0.
    let (mut h0, mut h1) = (0u128, 1u128);
    let (mut k0, mut k1) = (1u128, 0u128);
    loop {
        // x = p/q > INT32_MAX, written without dividing.
        if q.checked_mul(INT32_MAX).is_some_and(|bound| p > bound) {
            break;
        }
        let a = p / q;
        let remainder = p % q;
        let h = a * h1 + h0;
        let k = a * k1 + k0;
        if h > INT32_MAX || k > INT32_MAX {
            break;
        }
        (h0, h1) = (h1, h);
        (k0, k1) = (k1, k);
        if remainder == 0 {
            break;
        }
        (p, q) = (q, remainder);
    }
    if h1 == 0 || k1 == 0 {
        return None;
    }
    // Both terms were checked against INT32_MAX above.
    Some((h1 as i32, k1 as i32))
}

/// Approximate a decimal string as a [`Price`].
///
/// ```
/// use stellar_wire::price::best_rational_approximation;
///
/// let p = best_rational_approximation("2.93850088").unwrap();
/// assert_eq!((p.n, p.d), (36731261, 12500000));
/// ```
pub fn best_rational_approximation(decimal: &str) -> Result<Price, PriceError> {
    let trimmed = decimal.trim();
    let (mantissa, scale) = parse_unsigned_decimal(trimmed)
        .filter(|&(_, scale)| scale <= 38)
        .ok_or_else(|| PriceError::InvalidDecimal(decimal.to_string()))?;
    let denominator = 10u128.pow(scale);

    let (n, d) = approximate(mantissa, denominator)
        .ok_or_else(|| PriceError::NoApproximation(decimal.to_string()))?;
    trace!(input = trimmed, n, d, "approximated price");
    Ok(Price { n, d })
}

impl Price {
    /// A price from explicit terms. Both must be positive.
    pub fn new(n: i32, d: i32) -> Result<Self, PriceError> {
        if n <= 0 || d <= 0 {
            return Err(PriceError::InvalidPrice { n, d });
        }
        Ok(Price { n, d })
    }

    /// Parse a decimal string such as `"0.25"`.
    pub fn from_raw_price(decimal: &str) -> Result<Self, PriceError> {
        best_rational_approximation(decimal)
    }
}
