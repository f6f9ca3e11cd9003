//! Schema macros. One invocation per XDR definition, and the codec falls
//! out the other end.
//!
//! - `xdr_enum!`   : named `int` constants, decoded strictly.
//! - `xdr_struct!` : fields encoded in declaration order.
//! - `xdr_union!`  : a tag followed by the selected arm. The tag is either
//!   an `xdr_enum!` type or a plain `int`.
//!
//! Structs and unions wrap their bodies in `descend`, as do optionals and
//! vectors in `primitives`, so every codec frame that can recurse counts
//! against the depth limit.

/// Expands to the pattern `$bind`. Lets a `$( .. )?` repetition that only
/// mentions a payload type emit a binding pattern instead.
macro_rules! __xdr_bind {
    ($bind:pat, $_payload:ty) => {
        $bind
    };
}

/// Defines an XDR enum: a fieldless `#[repr(i32)]` Rust enum with strict
/// decoding.
macro_rules! xdr_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(i32)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $name {
            /// Every declared constant, in declaration order.
            pub const VARIANTS: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// The constant's name as written in the schema.
            pub fn name(&self) -> &'static str {
                match self {
                    $( $name::$variant => stringify!($variant) ),+
                }
            }
        }

        impl TryFrom<i32> for $name {
            type Error = $crate::xdr::XdrError;

            fn try_from(value: i32) -> Result<Self, $crate::xdr::XdrError> {
                $(
                    if value == $name::$variant as i32 {
                        return Ok($name::$variant);
                    }
                )+
                Err($crate::xdr::XdrError::InvalidEnumValue {
                    type_name: stringify!($name),
                    value,
                })
            }
        }

        impl From<$name> for i32 {
            fn from(v: $name) -> i32 {
                v as i32
            }
        }

        impl $crate::xdr::XdrCodec for $name {
            fn encode(
                &self,
                w: &mut $crate::xdr::XdrWriter,
            ) -> Result<(), $crate::xdr::XdrError> {
                w.write_i32(*self as i32);
                Ok(())
            }

            fn decode(
                r: &mut $crate::xdr::XdrReader<'_>,
            ) -> Result<Self, $crate::xdr::XdrError> {
                let value = r.read_i32()?;
                Self::try_from(value)
            }
        }
    };
}

/// Defines an XDR struct. Attributes (derives included) pass through.
macro_rules! xdr_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $fty ),+
        }

        impl $crate::xdr::XdrCodec for $name {
            fn encode(
                &self,
                w: &mut $crate::xdr::XdrWriter,
            ) -> Result<(), $crate::xdr::XdrError> {
                w.descend(|w| {
                    $( $crate::xdr::XdrCodec::encode(&self.$field, w)?; )+
                    Ok(())
                })
            }

            fn decode(
                r: &mut $crate::xdr::XdrReader<'_>,
            ) -> Result<Self, $crate::xdr::XdrError> {
                r.descend(|r| {
                    Ok($name {
                        $( $field: <$fty as $crate::xdr::XdrCodec>::decode(r)?, )+
                    })
                })
            }
        }
    };
}

/// Defines an XDR union.
///
/// ```text
/// xdr_union! {
///     pub enum Memo switch (MemoType) {
///         None = MemoType::None,
///         Id(u64) = MemoType::Id,
///     }
/// }
/// ```
///
/// `switch (int)` takes integer literals instead of enum paths. Tags with no
/// arm fail decoding with `UnknownDiscriminant`.
macro_rules! xdr_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident switch (int) {
            $( $(#[$vmeta:meta])* $variant:ident $( ($payload:ty) )? = $disc:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$vmeta])* $variant $( ($payload) )? ),+
        }

        impl $name {
            /// The integer tag of the selected arm.
            pub fn discriminant(&self) -> i32 {
                match self {
                    $( $name::$variant $( (__xdr_bind!(_, $payload)) )? => $disc ),+
                }
            }
        }

        impl $crate::xdr::XdrCodec for $name {
            fn encode(
                &self,
                w: &mut $crate::xdr::XdrWriter,
            ) -> Result<(), $crate::xdr::XdrError> {
                w.descend(|w| {
                    w.write_i32(self.discriminant());
                    match self {
                        $(
                            $name::$variant $( (__xdr_bind!(v, $payload)) )? => {
                                $( <$payload as $crate::xdr::XdrCodec>::encode(v, w)?; )?
                            }
                        )+
                    }
                    Ok(())
                })
            }

            #[allow(unreachable_patterns)]
            fn decode(
                r: &mut $crate::xdr::XdrReader<'_>,
            ) -> Result<Self, $crate::xdr::XdrError> {
                r.descend(|r| {
                    let raw = r.read_i32()?;
                    match raw {
                        $(
                            $disc => Ok($name::$variant $(
                                (<$payload as $crate::xdr::XdrCodec>::decode(r)?)
                            )?),
                        )+
                        _ => Err($crate::xdr::XdrError::UnknownDiscriminant {
                            type_name: stringify!($name),
                            value: raw,
                        }),
                    }
                })
            }
        }
    };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident switch ($disc_ty:ident) {
            $( $(#[$vmeta:meta])* $variant:ident $( ($payload:ty) )? = $disc:path ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $( $(#[$vmeta])* $variant $( ($payload) )? ),+
        }

        impl $name {
            /// The tag of the selected arm.
            pub fn discriminant(&self) -> $disc_ty {
                match self {
                    $( $name::$variant $( (__xdr_bind!(_, $payload)) )? => $disc ),+
                }
            }
        }

        impl $crate::xdr::XdrCodec for $name {
            fn encode(
                &self,
                w: &mut $crate::xdr::XdrWriter,
            ) -> Result<(), $crate::xdr::XdrError> {
                w.descend(|w| {
                    w.write_i32(self.discriminant() as i32);
                    match self {
                        $(
                            $name::$variant $( (__xdr_bind!(v, $payload)) )? => {
                                $( <$payload as $crate::xdr::XdrCodec>::encode(v, w)?; )?
                            }
                        )+
                    }
                    Ok(())
                })
            }

            #[allow(unreachable_patterns)]
            fn decode(
                r: &mut $crate::xdr::XdrReader<'_>,
            ) -> Result<Self, $crate::xdr::XdrError> {
                r.descend(|r| {
                    let raw = r.read_i32()?;
                    let unknown = $crate::xdr::XdrError::UnknownDiscriminant {
                        type_name: stringify!($name),
                        value: raw,
                    };
                    let disc = match $disc_ty::try_from(raw) {
                        Ok(disc) => disc,
                        Err(_) => return Err(unknown),
                    };
                    match disc {
                        $(
                            $disc => Ok($name::$variant $(
                                (<$payload as $crate::xdr::XdrCodec>::decode(r)?)
                            )?),
                        )+
                        _ => Err(unknown),
                    }
                })
            }
        }
    };
}
