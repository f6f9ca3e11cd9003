//! # Total Order IDs
//!
//! Every operation ever applied has a position: the ledger it closed in,
//! the order of its transaction within that ledger, and its index within
//! the transaction. A TOID packs all three into one signed 64-bit integer
//! so that "everything after X" is a single integer comparison.
//!
//! ```text
//!    63     32 31          12 11        0
//!   ┌─────────┬──────────────┬───────────┐
//!   │ ledger  │ tx order     │ op order  │
//!   │ 31 bits │ 20 bits      │ 12 bits   │
//!   └─────────┴──────────────┴───────────┘
//! ```
//!
//! The sign bit is always zero, so TOIDs sort the same way as signed and
//! unsigned integers.

use std::fmt;
use thiserror::Error;

/// Largest ledger sequence a TOID can hold.
pub const LEDGER_MAX: u32 = (1 << 31) - 1;

/// Largest transaction order a TOID can hold.
pub const TRANSACTION_ORDER_MAX: u32 = (1 << 20) - 1;

/// Largest operation order a TOID can hold.
pub const OPERATION_ORDER_MAX: u32 = (1 << 12) - 1;

const TRANSACTION_SHIFT: u32 = 12;
const LEDGER_SHIFT: u32 = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToidError {
    /// A field does not fit its bit width, or a packed value is negative.
    #[error("{field} = {value} is out of range (max {max})")]
    ValueOutOfRange {
        field: &'static str,
        value: i64,
        max: i64,
    },

    #[error("invalid ledger range: start {start} is after end {end}")]
    InvalidRange { start: u32, end: u32 },
}

/// A decoded total order id.
///
/// Field order matches bit order, so the derived `Ord` agrees with the
/// packed integer's order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Toid {
    ledger_sequence: u32,
    transaction_order: u32,
    operation_order: u32,
}

fn check(field: &'static str, value: u32, max: u32) -> Result<(), ToidError> {
    if value > max {
        return Err(ToidError::ValueOutOfRange {
            field,
            value: value.into(),
            max: max.into(),
        });
    }
    Ok(())
}

impl Toid {
    pub fn new(
        ledger_sequence: u32,
        transaction_order: u32,
        operation_order: u32,
    ) -> Result<Self, ToidError> {
        check("ledger_sequence", ledger_sequence, LEDGER_MAX)?;
        check("transaction_order", transaction_order, TRANSACTION_ORDER_MAX)?;
        check("operation_order", operation_order, OPERATION_ORDER_MAX)?;
        Ok(Self {
            ledger_sequence,
            transaction_order,
            operation_order,
        })
    }

    pub fn ledger_sequence(&self) -> u32 {
        self.ledger_sequence
    }

    pub fn transaction_order(&self) -> u32 {
        self.transaction_order
    }

    pub fn operation_order(&self) -> u32 {
        self.operation_order
    }

    /// Pack into the wire integer.
    pub fn to_i64(&self) -> i64 {
        (i64::from(self.ledger_sequence) << LEDGER_SHIFT)
            | (i64::from(self.transaction_order) << TRANSACTION_SHIFT)
            | i64::from(self.operation_order)
    }

    /// Unpack a wire integer. Negative values are not TOIDs.
    pub fn from_i64(value: i64) -> Result<Self, ToidError> {
        if value < 0 {
            return Err(ToidError::ValueOutOfRange {
                field: "toid",
                value,
                max: i64::MAX,
            });
        }
        // Every non-negative i64 splits into in-range fields.
        Ok(Self {
            ledger_sequence: (value >> LEDGER_SHIFT) as u32,
            transaction_order: ((value >> TRANSACTION_SHIFT) as u32) & TRANSACTION_ORDER_MAX,
            operation_order: (value as u32) & OPERATION_ORDER_MAX,
        })
    }

    /// The next operation position.
    ///
    /// When the operation order is already at its maximum it wraps to zero
    /// and the ledger advances. The transaction order is left alone, which
    /// is what cursor-style paging wants.
    pub fn increment_operation_order(self) -> Result<Self, ToidError> {
        if self.operation_order == OPERATION_ORDER_MAX {
            let ledger = self.ledger_sequence + 1;
            check("ledger_sequence", ledger, LEDGER_MAX)?;
            Ok(Self {
                ledger_sequence: ledger,
                operation_order: 0,
                ..self
            })
        } else {
            Ok(Self {
                operation_order: self.operation_order + 1,
                ..self
            })
        }
    }

    /// The largest TOID inside `ledger_sequence`. Use as an exclusive upper
    /// bound to mean "after everything in this ledger".
    pub fn after_ledger(ledger_sequence: u32) -> Result<Self, ToidError> {
        Self::new(ledger_sequence, TRANSACTION_ORDER_MAX, OPERATION_ORDER_MAX)
    }

    /// `[from, to)` covering ledgers `start..=end`.
    ///
    /// Ledger 1 starts at zero so the range also includes anything placed
    /// before the first ledger. `to` is the first TOID of `end + 1`.
    pub fn ledger_range_inclusive(start: u32, end: u32) -> Result<(i64, i64), ToidError> {
        if start > end {
            return Err(ToidError::InvalidRange { start, end });
        }
        let from = if start == 1 {
            0
        } else {
            Self::new(start, 0, 0)?.to_i64()
        };
        let to = Self::new(end.saturating_add(1), 0, 0)?.to_i64();
        Ok((from, to))
    }
}

impl fmt::Display for Toid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_i64())
    }
}

impl TryFrom<i64> for Toid {
    type Error = ToidError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_i64(value)
    }
}

impl From<Toid> for i64 {
    fn from(t: Toid) -> Self {
        t.to_i64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEDGER_FIRST: i64 = 4_294_967_296;
    const TX_FIRST: i64 = 4096;
    const OP_FIRST: i64 = 1;

    fn toid(l: u32, t: u32, o: u32) -> Toid {
        Toid::new(l, t, o).unwrap()
    }

    #[test]
    fn packing_vectors() {
        let cases = [
            (toid(0, 0, 1), 1),
            (toid(0, 0, 4095), 4095),
            (toid(0, 1, 0), 4096),
            (toid(0, 1_048_575, 0), 4_294_963_200),
            (toid(1, 0, 0), 4_294_967_296),
            (toid(LEDGER_MAX, 0, 0), 9_223_372_032_559_808_512),
            (toid(1, 1, 1), LEDGER_FIRST + TX_FIRST + OP_FIRST),
            (toid(1, 1, 0), LEDGER_FIRST + TX_FIRST),
            (toid(1, 0, 1), LEDGER_FIRST + OP_FIRST),
            (toid(0, 0, 0), 0),
            (
                toid(LEDGER_MAX, TRANSACTION_ORDER_MAX, OPERATION_ORDER_MAX),
                i64::MAX,
            ),
        ];
        for (id, expected) in cases {
            assert_eq!(id.to_i64(), expected, "{id:?}");
            assert_eq!(Toid::from_i64(expected).unwrap(), id);
        }
    }

    #[test]
    fn fields_out_of_range() {
        assert!(matches!(
            Toid::new(1 << 31, 0, 0),
            Err(ToidError::ValueOutOfRange { field: "ledger_sequence", .. })
        ));
        assert!(matches!(
            Toid::new(0, 1 << 20, 0),
            Err(ToidError::ValueOutOfRange { field: "transaction_order", .. })
        ));
        assert_eq!(
            Toid::new(0, 0, 4096),
            Err(ToidError::ValueOutOfRange {
                field: "operation_order",
                value: 4096,
                max: 4095
            })
        );
        assert!(Toid::from_i64(-1).is_err());
    }

    #[test]
    fn increment_rolls_into_next_ledger() {
        assert_eq!(toid(0, 0, 0).increment_operation_order().unwrap(), toid(0, 0, 1));
        assert_eq!(toid(0, 0, 4095).increment_operation_order().unwrap(), toid(1, 0, 0));
        assert_eq!(toid(0, 7, 4095).increment_operation_order().unwrap(), toid(1, 7, 0));
        assert!(toid(LEDGER_MAX, 0, 4095).increment_operation_order().is_err());
    }

    #[test]
    fn after_ledger_is_the_last_slot() {
        let t = Toid::after_ledger(5).unwrap();
        assert_eq!(t.to_i64() + 1, toid(6, 0, 0).to_i64());
    }

    #[test]
    fn ledger_ranges() {
        for (start, end, from_ledger, to_ledger) in [(1, 1, 0, 2), (1, 2, 0, 3), (2, 2, 2, 3), (2, 3, 2, 4)] {
            let (from, to) = Toid::ledger_range_inclusive(start, end).unwrap();
            assert_eq!(Toid::from_i64(from).unwrap(), toid(from_ledger, 0, 0));
            assert_eq!(Toid::from_i64(to).unwrap(), toid(to_ledger, 0, 0));
        }
        assert_eq!(
            Toid::ledger_range_inclusive(3, 2),
            Err(ToidError::InvalidRange { start: 3, end: 2 })
        );
    }

    #[test]
    fn ordering_matches_integer_ordering() {
        let a = toid(1, 4095, 7);
        let b = toid(2, 0, 0);
        assert!(a < b);
        assert!(a.to_i64() < b.to_i64());
    }
}
