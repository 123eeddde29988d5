use crate::serde::{ConstructorId, FlagsWord};
use derive_more::Display;
use std::error::Error;

/// Every way a decode can fail. None of these are fatal to the process;
/// a failure aborts the object being decoded and everything enclosing it.
#[derive(PartialEq, Eq, Clone, Debug, Display)]
pub enum DecodeError {
    #[display(fmt = "Truncated: {} bytes needed, {} remaining", needed, remaining)]
    Truncated { needed: usize, remaining: usize },

    #[display(fmt = "Malformed: {}", _0)]
    Malformed(Malformation),

    /// Routine when the peer speaks a newer layer.
    #[display(fmt = "Unknown constructor {}", _0)]
    UnknownConstructor(ConstructorId),

    #[display(fmt = "Expected constructor {} but got {}", expected, got)]
    TypeMismatch {
        expected: ConstructorId,
        got: ConstructorId,
    },

    /// The constructor is registered but belongs to a different abstract type.
    #[display(fmt = "Constructor {} is not a variant of {}", got, abstract_type)]
    UnexpectedVariant {
        abstract_type: &'static str,
        got: ConstructorId,
    },

    #[display(fmt = "String field is not valid UTF-8")]
    InvalidEncoding,
}
impl Error for DecodeError {}

impl From<Malformation> for DecodeError {
    fn from(malformation: Malformation) -> Self {
        Self::Malformed(malformation)
    }
}

#[derive(PartialEq, Eq, Clone, Debug, Display)]
pub enum Malformation {
    #[display(fmt = "non-zero padding byte")]
    NonZeroPadding,

    #[display(fmt = "buffer ends inside padding")]
    MissingPadding,

    #[display(fmt = "invalid length marker {:#04x}", _0)]
    LengthMarker(u8),

    /// A long-form length header whose value fits the short form.
    #[display(fmt = "non-canonical long-form length {}", _0)]
    NonCanonicalLength(usize),

    #[display(fmt = "expected vector marker, got {}", _0)]
    VectorMarker(ConstructorId),

    #[display(fmt = "declared length {} exceeds limit {}", declared, limit)]
    LengthExceedsLimit { declared: usize, limit: usize },

    #[display(fmt = "declared count {} exceeds limit {}", declared, limit)]
    CountExceedsLimit { declared: usize, limit: usize },

    #[display(fmt = "nesting depth exceeds limit {}", _0)]
    DepthExceedsLimit(usize),

    #[display(fmt = "flags {} set outside known bits {}", flags, known)]
    UnknownFlags { flags: FlagsWord, known: FlagsWord },

    #[display(fmt = "{} trailing bytes after object", _0)]
    TrailingBytes(usize),
}
