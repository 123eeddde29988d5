use crate::error::{DecodeError, Malformation};
use crate::limits::DecodeLimits;
use crate::registry::Registry;
use crate::schema::SchemaObject;
use crate::serde::{
    padding_for, BuiltinId, ConstructorId, FlagsWord, LONG_LEN_MARKER, MIN_VECTOR_ELEM_LEN,
    SHORT_LEN_LIMIT, VECTOR_ID,
};
use crate::types::{AbstractType, Deser, Object};
use std::str;

/// Read position over one immutable buffer, owned by a single decode call.
///
/// Readers consume exactly the bytes their format specifies and nothing more,
/// so the position after any read is where the next field starts.
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
    registry: &'a Registry,
    depth: usize,
}

impl<'a> ByteCursor<'a> {
    pub fn new(buf: &'a [u8], registry: &'a Registry) -> Self {
        Self {
            buf,
            pos: 0,
            registry,
            depth: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }
    pub fn limits(&self) -> &'a DecodeLimits {
        self.registry.limits()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(DecodeError::Truncated {
                needed: n,
                remaining,
            });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut arr = [0u8; N];
        arr.copy_from_slice(self.take(N)?);
        Ok(arr)
    }

    pub fn skip_fixed(&mut self, n: usize) -> Result<(), DecodeError> {
        self.take(n).map(|_| ())
    }

    /// Runs `f` one object deeper, failing once the configured depth is exceeded.
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<T, DecodeError> {
        let max_depth = self.limits().max_depth;
        if self.depth >= max_depth {
            return Err(Malformation::DepthExceedsLimit(max_depth).into());
        }
        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    /* Fixed width */

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }
    pub fn read_id(&mut self) -> Result<ConstructorId, DecodeError> {
        self.read_u32().map(ConstructorId)
    }
    pub fn read_int32(&mut self) -> Result<i32, DecodeError> {
        Ok(i32::from_le_bytes(self.take_array()?))
    }
    pub fn read_int64(&mut self) -> Result<i64, DecodeError> {
        Ok(i64::from_le_bytes(self.take_array()?))
    }

    /// Reads `schema`'s flags word, rejecting bits no optional field is bound to.
    pub fn read_flags(&mut self, schema: &SchemaObject) -> Result<FlagsWord, DecodeError> {
        let flags = FlagsWord::from(self.read_u32()?);
        let known = schema.known_flags();
        if !flags.is_within(known) {
            return Err(Malformation::UnknownFlags { flags, known }.into());
        }
        Ok(flags)
    }

    pub fn read_bool(&mut self) -> Result<bool, DecodeError> {
        let id = self.read_id()?;
        match BuiltinId::from_id(id) {
            Some(BuiltinId::BoolTrue) => Ok(true),
            Some(BuiltinId::BoolFalse) => Ok(false),
            _ => Err(DecodeError::UnknownConstructor(id)),
        }
    }

    /* Dynamic length */

    /// Borrows the body of a bytes field, consuming its header and padding.
    pub fn read_bytes_ref(&mut self) -> Result<&'a [u8], DecodeError> {
        /* length header */
        let [marker] = self.take_array::<1>()?;
        let (header_len, len) = match marker {
            LONG_LEN_MARKER => {
                let [b0, b1, b2] = self.take_array::<3>()?;
                let len = u32::from_le_bytes([b0, b1, b2, 0]) as usize;
                if len < SHORT_LEN_LIMIT {
                    return Err(Malformation::NonCanonicalLength(len).into());
                }
                (4, len)
            }
            0xFF => return Err(Malformation::LengthMarker(marker).into()),
            short => (1, short as usize),
        };
        let limit = self.limits().max_bytes_len;
        if len > limit {
            return Err(Malformation::LengthExceedsLimit {
                declared: len,
                limit,
            }
            .into());
        }

        /* body */
        let body = self.take(len)?;

        /* padding */
        let padding_len = padding_for(header_len + len);
        if self.remaining() < padding_len {
            return Err(Malformation::MissingPadding.into());
        }
        let padding = self.take(padding_len)?;
        if padding.iter().any(|&b| b != 0) {
            return Err(Malformation::NonZeroPadding.into());
        }

        Ok(body)
    }

    pub fn read_bytes(&mut self) -> Result<Vec<u8>, DecodeError> {
        self.read_bytes_ref().map(<[u8]>::to_vec)
    }

    pub fn read_str_ref(&mut self) -> Result<&'a str, DecodeError> {
        let body = self.read_bytes_ref()?;
        str::from_utf8(body).map_err(|_| DecodeError::InvalidEncoding)
    }

    pub fn read_string(&mut self) -> Result<String, DecodeError> {
        self.read_str_ref().map(str::to_owned)
    }

    /// Reads the marker and count. Returns the count.
    pub fn read_vector_header(&mut self) -> Result<usize, DecodeError> {
        /* marker */
        let marker = self.read_id()?;
        if marker != VECTOR_ID {
            return Err(Malformation::VectorMarker(marker).into());
        }

        /* count */
        let count = self.read_u32()? as usize;
        let limit = self.limits().max_vector_len;
        if count > limit {
            return Err(Malformation::CountExceedsLimit {
                declared: count,
                limit,
            }
            .into());
        }

        Ok(count)
    }

    pub fn read_vector<T>(
        &mut self,
        mut read_elem: impl FnMut(&mut Self) -> Result<T, DecodeError>,
    ) -> Result<Vec<T>, DecodeError> {
        let count = self.read_vector_header()?;

        /* elems */
        let mut items = Vec::with_capacity(count.min(self.remaining() / MIN_VECTOR_ELEM_LEN));
        for _ in 0..count {
            items.push(read_elem(self)?);
        }

        Ok(items)
    }

    /* Objects */

    /// Statically typed read: the leading ID must be `T`'s.
    pub fn decode<T: Deser>(&mut self) -> Result<T, DecodeError> {
        T::deser(self)
    }

    /// Polymorphic read: the leading ID picks the type.
    pub fn decode_dyn(&mut self) -> Result<Box<dyn Object>, DecodeError> {
        let registry = self.registry;
        registry.resolve_and_decode(self)
    }

    /// Polymorphic read restricted to `A`'s variants.
    pub fn decode_variant<A: AbstractType>(&mut self) -> Result<Box<dyn Object>, DecodeError> {
        let registry = self.registry;
        registry.resolve_and_decode_variant(self, A::TL_NAME, A::VARIANT_IDS)
    }
}
