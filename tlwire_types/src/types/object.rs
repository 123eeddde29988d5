use crate::error::DecodeError;
use crate::serde::{ByteCursor, ConstructorId, WireWriter, WriteLen, BOOL_FALSE_ID, BOOL_TRUE_ID};
use std::any::Any;
use std::fmt::Debug;

/// Any value that goes on the wire boxed, i.e. behind its own constructor ID.
pub trait Object: Any + Debug + Send + Sync {
    fn constructor_id(&self) -> ConstructorId;
    fn qualified_name(&self) -> &'static str;

    /// Writes the constructor ID, then the body.
    fn ser(&self, w: &mut WireWriter) -> WriteLen;

    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl dyn Object {
    pub fn is<T: Object>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast<T: Object>(self: Box<Self>) -> Result<Box<T>, Box<dyn Object>> {
        if !self.is::<T>() {
            return Err(self);
        }
        let raw: *mut dyn Object = Box::into_raw(self);
        // SAFETY: The concrete type behind the pointer was just checked to be `T`.
        Ok(unsafe { Box::from_raw(raw as *mut T) })
    }
}

/// Values readable from a position where a boxed value starts.
pub trait Deser: Sized {
    fn deser(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError>;
}

/* bool is boxed: it is one of two payload-less constructors. */
impl Object for bool {
    fn constructor_id(&self) -> ConstructorId {
        if *self {
            BOOL_TRUE_ID
        } else {
            BOOL_FALSE_ID
        }
    }
    fn qualified_name(&self) -> &'static str {
        if *self {
            "boolTrue"
        } else {
            "boolFalse"
        }
    }
    fn ser(&self, w: &mut WireWriter) -> WriteLen {
        w.write_bool(*self)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}
impl Deser for bool {
    fn deser(r: &mut ByteCursor<'_>) -> Result<Self, DecodeError> {
        r.read_bool()
    }
}
