use crate::serde::{BytesLen, ConstructorId, FlagsWord, VectorCount, BOOL_FALSE_ID, BOOL_TRUE_ID, VECTOR_ID};
use derive_more::{Add, AddAssign, Deref, From, Into};

#[derive(Deref, Add, AddAssign, Default, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(i: usize) -> Self {
        Self(i)
    }
}

/// Growable sink for one encode call. Writing never fails.
#[derive(From, Into, Deref, Default, Debug)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn put(&mut self, bytes: &[u8]) -> WriteLen {
        self.buf.extend_from_slice(bytes);
        WriteLen(bytes.len())
    }

    pub fn write_u32(&mut self, u: u32) -> WriteLen {
        self.put(&u.to_le_bytes())
    }

    pub fn write_id(&mut self, id: ConstructorId) -> WriteLen {
        self.write_u32(*id)
    }

    pub fn write_flags(&mut self, flags: FlagsWord) -> WriteLen {
        self.write_u32(*flags)
    }

    pub fn write_int32(&mut self, i: i32) -> WriteLen {
        self.put(&i.to_le_bytes())
    }

    pub fn write_int64(&mut self, i: i64) -> WriteLen {
        self.put(&i.to_le_bytes())
    }

    pub fn write_bool(&mut self, b: bool) -> WriteLen {
        self.write_id(if b { BOOL_TRUE_ID } else { BOOL_FALSE_ID })
    }

    /// # Panics
    ///
    /// If `body` is longer than [`crate::serde::MAX_WIRE_BYTES_LEN`].
    pub fn write_bytes(&mut self, body: &[u8]) -> WriteLen {
        let len = BytesLen::from_body(body);
        let (header, header_len) = len.header();

        let mut w_len = WriteLen(0);

        /* length header */
        w_len += self.put(&header[..header_len]);

        /* body */
        w_len += self.put(body);

        /* padding */
        w_len += self.put(&[0u8; 3][..len.padding_len()]);

        w_len
    }

    pub fn write_string(&mut self, s: &str) -> WriteLen {
        self.write_bytes(s.as_bytes())
    }

    pub fn write_vector<T>(
        &mut self,
        items: &[T],
        mut write_elem: impl FnMut(&mut Self, &T) -> WriteLen,
    ) -> WriteLen {
        let mut w_len = WriteLen(0);

        /* marker */
        w_len += self.write_id(VECTOR_ID);

        /* count */
        w_len += self.write_u32(*VectorCount::from_items(items));

        /* elems */
        for item in items {
            w_len += write_elem(self, item);
        }

        w_len
    }
}
