mod abstract_type;
mod known_type;
mod object;

pub use known_type::*;
pub use object::*;

use crate::serde::WireWriter;

/// Encodes one object, leading constructor ID included.
pub fn encode<O: Object + ?Sized>(obj: &O) -> Vec<u8> {
    let mut w = WireWriter::new();
    obj.ser(&mut w);
    w.into_bytes()
}
