//! Per-type field tables.
//!
//! These are pure data. The hand-written decoders consult them only for the set of
//! known flag bits. The registry uses them to validate layers at startup and to skip
//! over objects without building them.

use crate::serde::{ConstructorId, FlagsWord, BOOL_FALSE_ID, BOOL_TRUE_ID};
use anyhow::{anyhow, Result};
use std::fmt::{self, Display, Formatter};


#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum WireType {
    /// Always field zero, and only on types with optional fields.
    FlagsWord,
    Int32,
    Int64,
    Bool,
    /// Carried by the flags bit alone. Must be optional.
    True,
    Bytes,
    String,
    Vector(&'static WireType),
    /// A boxed object of the named abstract type.
    Object(&'static str),
}
impl Display for WireType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlagsWord => write!(f, "#"),
            Self::Int32 => write!(f, "int"),
            Self::Int64 => write!(f, "long"),
            Self::Bool => write!(f, "Bool"),
            Self::True => write!(f, "true"),
            Self::Bytes => write!(f, "bytes"),
            Self::String => write!(f, "string"),
            Self::Vector(elem) => write!(f, "Vector<{elem}>"),
            Self::Object(abstract_type) => write!(f, "{abstract_type}"),
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Field {
    pub name: &'static str,
    pub wire_type: WireType,
    pub optional_bit: Option<u8>,
}
impl Field {
    pub const fn flags() -> Self {
        Self {
            name: "flags",
            wire_type: WireType::FlagsWord,
            optional_bit: None,
        }
    }
    pub const fn required(name: &'static str, wire_type: WireType) -> Self {
        Self {
            name,
            wire_type,
            optional_bit: None,
        }
    }
    pub const fn optional(name: &'static str, wire_type: WireType, bit: u8) -> Self {
        Self {
            name,
            wire_type,
            optional_bit: Some(bit),
        }
    }
}
impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.optional_bit {
            None => write!(f, "{}:{}", self.name, self.wire_type),
            Some(bit) => write!(f, "{}:flags.{}?{}", self.name, bit, self.wire_type),
        }
    }
}

/// One constructor. `fields` are in wire order.
#[derive(PartialEq, Eq, Debug)]
pub struct SchemaObject {
    pub constructor_id: ConstructorId,
    pub qualified_name: &'static str,
    /// The abstract type this constructor produces.
    pub result_type: &'static str,
    pub fields: &'static [Field],
}

impl SchemaObject {
    pub fn has_optional_fields(&self) -> bool {
        self.fields.iter().any(|field| field.optional_bit.is_some())
    }

    pub fn known_flags(&self) -> FlagsWord {
        let mut flags = FlagsWord::empty();
        for field in self.fields {
            if let Some(bit) = field.optional_bit {
                flags.set(bit, true);
            }
        }
        flags
    }

    pub fn validate(&self) -> Result<()> {
        let has_optional = self.has_optional_fields();
        let flags_positions = self
            .fields
            .iter()
            .enumerate()
            .filter(|(_, field)| field.wire_type == WireType::FlagsWord)
            .map(|(i, _)| i)
            .collect::<Vec<_>>();
        match (has_optional, &flags_positions[..]) {
            (false, []) | (true, [0]) => {}
            (false, _) => {
                return Err(anyhow!(
                    "{}: flags word without optional fields",
                    self.qualified_name
                ))
            }
            (true, _) => {
                return Err(anyhow!(
                    "{}: flags word must appear exactly once, as field zero",
                    self.qualified_name
                ))
            }
        }

        let mut seen = FlagsWord::empty();
        for field in self.fields {
            match (field.optional_bit, field.wire_type) {
                (None, WireType::True) => {
                    return Err(anyhow!(
                        "{}.{}: a true-typed field must be optional",
                        self.qualified_name,
                        field.name
                    ))
                }
                (Some(_), WireType::FlagsWord) => {
                    return Err(anyhow!(
                        "{}.{}: the flags word cannot be optional",
                        self.qualified_name,
                        field.name
                    ))
                }
                (Some(bit), _) => {
                    if bit >= 32 {
                        return Err(anyhow!(
                            "{}.{}: bit {} is outside the flags word",
                            self.qualified_name,
                            field.name,
                            bit
                        ));
                    }
                    if seen.has(bit) {
                        return Err(anyhow!(
                            "{}.{}: bit {} is already bound",
                            self.qualified_name,
                            field.name,
                            bit
                        ));
                    }
                    seen.set(bit, true);
                }
                (None, _) => {}
            }
        }

        Ok(())
    }
}

/// `name#id field:type ... = Result`
impl Display for SchemaObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.qualified_name, self.constructor_id)?;
        for field in self.fields {
            write!(f, " {field}")?;
        }
        write!(f, " = {}", self.result_type)
    }
}

pub static BOOL_FALSE_SCHEMA: SchemaObject = SchemaObject {
    constructor_id: BOOL_FALSE_ID,
    qualified_name: "boolFalse",
    result_type: "Bool",
    fields: &[],
};
pub static BOOL_TRUE_SCHEMA: SchemaObject = SchemaObject {
    constructor_id: BOOL_TRUE_ID,
    qualified_name: "boolTrue",
    result_type: "Bool",
    fields: &[],
};
