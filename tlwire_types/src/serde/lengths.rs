use derive_more::Deref;

/// Lengths below this take the one-byte header.
pub const SHORT_LEN_LIMIT: usize = 254;
pub const LONG_LEN_MARKER: u8 = 0xFE;
/// Largest body a three-byte length can describe.
pub const MAX_WIRE_BYTES_LEN: usize = 0x00FF_FFFF;
/// Every vector element, bare or boxed, occupies at least this many bytes.
pub const MIN_VECTOR_ELEM_LEN: usize = 4;

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct BytesLen(usize);
impl BytesLen {
    pub fn from_body(body: &[u8]) -> Self {
        Self(body.len())
    }
    pub fn new_manual(len: usize) -> Self {
        Self(len)
    }

    /// # Panics
    ///
    /// If the length exceeds [`MAX_WIRE_BYTES_LEN`]. Such a body has no wire form.
    pub fn header(&self) -> ([u8; 4], usize) {
        assert!(
            self.0 <= MAX_WIRE_BYTES_LEN,
            "bytes field of {} bytes has no wire representation",
            self.0
        );
        if self.0 < SHORT_LEN_LIMIT {
            ([self.0 as u8, 0, 0, 0], 1)
        } else {
            let [b0, b1, b2, _] = (self.0 as u32).to_le_bytes();
            ([LONG_LEN_MARKER, b0, b1, b2], 4)
        }
    }

    pub fn header_len(&self) -> usize {
        if self.0 < SHORT_LEN_LIMIT {
            1
        } else {
            4
        }
    }

    pub fn padding_len(&self) -> usize {
        padding_for(self.header_len() + self.0)
    }

    /// Header, body and padding.
    pub fn field_len(&self) -> usize {
        self.header_len() + self.0 + self.padding_len()
    }
}

pub fn padding_for(unpadded_len: usize) -> usize {
    (4 - unpadded_len % 4) % 4
}

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct VectorCount(u32);
impl VectorCount {
    /// # Panics
    ///
    /// If there are more than `u32::MAX` items.
    pub fn from_items<T>(items: &[T]) -> Self {
        assert!(
            items.len() <= u32::MAX as usize,
            "vector of {} items has no wire representation",
            items.len()
        );
        Self(items.len() as u32)
    }
}
