use crate::error::DecodeError;
use crate::schema::SchemaObject;
use crate::serde::{ByteCursor, ConstructorId, WireWriter, WriteLen};
use crate::types::{Deser, Object};
use std::any::Any;
use std::fmt::Debug;

/// A concrete constructor.
///
/// Implementors write and read only the body; the blanket impls below handle the
/// leading ID. `ser_body` and `deser_body` must agree field-for-field with `SCHEMA`.
pub trait KnownType: Debug + Send + Sync + Sized + 'static {
    const CONSTRUCTOR_ID: ConstructorId;
    const SCHEMA: &'static SchemaObject;

    /// Flags word (if any) and fields, in declared order.
    fn ser_body(&self, w: &mut WireWriter) -> WriteLen;

    /// Called with the constructor ID already consumed.
    fn deser_body(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError>;
}

impl<T: KnownType> Object for T {
    fn constructor_id(&self) -> ConstructorId {
        T::CONSTRUCTOR_ID
    }
    fn qualified_name(&self) -> &'static str {
        T::SCHEMA.qualified_name
    }
    fn ser(&self, w: &mut WireWriter) -> WriteLen {
        let mut w_len = w.write_id(T::CONSTRUCTOR_ID);
        w_len += self.ser_body(w);
        w_len
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl<T: KnownType> Deser for T {
    fn deser(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        r.nested(|r| {
            let got = r.read_id()?;
            if got != T::CONSTRUCTOR_ID {
                return Err(DecodeError::TypeMismatch {
                    expected: T::CONSTRUCTOR_ID,
                    got,
                });
            }
            T::deser_body(r)
        })
    }
}

/// A closed set of constructors sharing one result type. Implemented by
/// [`abstract_type!`](crate::abstract_type).
pub trait AbstractType {
    const TL_NAME: &'static str;
    const VARIANT_IDS: &'static [ConstructorId];
}
