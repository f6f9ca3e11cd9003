//! Error types for the XDR codec.
//!
//! Every failure the codec can produce is a distinct variant, so callers can
//! tell a truncated buffer apart from a bound violation or an unknown union
//! arm without parsing strings. None of these are transient: retrying the
//! same bytes gives the same answer.

use thiserror::Error;

/// Errors raised while encoding or decoding XDR.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XdrError {
    /// The input ended before the value was complete.
    #[error("truncated input: needed {needed} more bytes, {remaining} remaining")]
    Truncated {
        /// Bytes the decoder asked for.
        needed: usize,
        /// Bytes actually left in the buffer.
        remaining: usize,
    },

    /// A full-buffer decode finished with bytes left over.
    #[error("{count} trailing bytes after decoded value")]
    TrailingBytes {
        /// Number of unread bytes.
        count: usize,
    },

    /// A variable-length value exceeds its declared maximum.
    #[error("length {len} exceeds declared maximum {max}")]
    BoundExceeded {
        /// The schema bound.
        max: u32,
        /// The offending length.
        len: usize,
    },

    /// A length does not fit the 32-bit wire prefix.
    #[error("length {0} does not fit in a 32-bit length prefix")]
    LengthOverflow(usize),

    /// A union tag has no matching arm.
    #[error("unknown discriminant {value} for union {type_name}")]
    UnknownDiscriminant {
        /// Name of the union being decoded.
        type_name: &'static str,
        /// The tag read from the wire.
        value: i32,
    },

    /// An enum value is not one of the declared constants.
    #[error("invalid value {value} for enum {type_name}")]
    InvalidEnumValue {
        /// Name of the enum being decoded.
        type_name: &'static str,
        /// The value read from the wire.
        value: i32,
    },

    /// A boolean was encoded as something other than 0 or 1.
    #[error("invalid boolean encoding: {0}")]
    InvalidBool(u32),

    /// An optional presence flag was something other than 0 or 1.
    #[error("invalid optional presence flag: {0}")]
    InvalidOptionalFlag(u32),

    /// Padding after a variable-length payload contained non-zero bytes.
    #[error("non-zero padding bytes")]
    NonZeroPadding,

    /// Nesting went deeper than the configured limit.
    #[error("nesting depth limit of {0} exceeded")]
    DepthLimitExceeded(u32),

    /// The base64 transport wrapper was malformed.
    #[error("base64 decode error: {0}")]
    Base64(String),
}

impl XdrError {
    /// `true` for errors caused by garbage or short input rather than by a
    /// schema rule (bounds, discriminants).
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::Truncated { .. }
                | Self::TrailingBytes { .. }
                | Self::LengthOverflow(_)
                | Self::InvalidBool(_)
                | Self::InvalidOptionalFlag(_)
                | Self::NonZeroPadding
                | Self::DepthLimitExceeded(_)
                | Self::Base64(_)
        )
    }
}
