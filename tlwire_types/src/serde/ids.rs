use derive_more::{Deref, Display, From, Into};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

#[derive(From, Into, Deref, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
#[display(fmt = "#{:08x}", _0)]
pub struct ConstructorId(pub u32);

/// Constructors that belong to the codec rather than to any layer.
#[repr(u32)]
#[derive(PartialEq, Eq, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum BuiltinId {
    BoolFalse = 0xbc799737,
    BoolTrue = 0x997275b5,
    Vector = 0x1cb5c415,
}
impl BuiltinId {
    pub fn from_id(id: ConstructorId) -> Option<Self> {
        Self::from_u32(id.0)
    }
}
impl From<BuiltinId> for ConstructorId {
    fn from(builtin: BuiltinId) -> Self {
        Self(builtin as u32)
    }
}

pub const BOOL_FALSE_ID: ConstructorId = ConstructorId(BuiltinId::BoolFalse as u32);
pub const BOOL_TRUE_ID: ConstructorId = ConstructorId(BuiltinId::BoolTrue as u32);
pub const VECTOR_ID: ConstructorId = ConstructorId(BuiltinId::Vector as u32);

/// Presence bitmask of a type's optional fields.
#[derive(From, Into, Deref, Display, Default, PartialEq, Eq, Clone, Copy, Debug)]
#[display(fmt = "{:#010x}", _0)]
pub struct FlagsWord(u32);
impl FlagsWord {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Bits 32 and above are outside the word, so they are never present.
    fn mask(bit: u8) -> u32 {
        1u32.checked_shl(u32::from(bit)).unwrap_or(0)
    }

    pub fn set(&mut self, bit: u8, present: bool) {
        debug_assert!(bit < 32, "flag bit {bit} is outside the flags word");
        if present {
            self.0 |= Self::mask(bit);
        }
    }

    pub fn has(&self, bit: u8) -> bool {
        self.0 & Self::mask(bit) != 0
    }

    pub fn is_within(&self, known: FlagsWord) -> bool {
        self.0 & !known.0 == 0
    }
}
