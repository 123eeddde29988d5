//! # Wire format
//!
//! Every object on the wire begins with its [`ConstructorId`], a little-endian `u32`
//! naming the concrete type. Types with optional fields follow the ID with a
//! [`FlagsWord`]; bit `i` set means the optional field bound to bit `i` follows.
//! Absent optional fields take zero bytes.
//!
//! Values nested inside an object are either *bare* (no leading ID, the reader knows
//! the type) or *boxed* (leading ID, the reader resolves it).
//!
//! ```text
//! int     [u8; 4]                      bare, LE
//! long    [u8; 8]                      bare, LE
//! Bool    boolTrue#997275b5            boxed, no payload
//!       | boolFalse#bc799737
//! bytes   {                            bare
//!             len < 254:   len: u8,
//!             len >= 254:  0xFE, len: [u8; 3] LE,
//!             body:        [u8; len],
//!             padding:     [0u8; 0..=3],   // whole field is a multiple of 4
//!         }
//! string  bytes, UTF-8
//! Vector  {                            boxed
//!             marker:      vector#1cb5c415,
//!             count:       u32 LE,
//!             elems:       [T; count],  // each bare or boxed per T
//!         }
//! object  {                            boxed
//!             id:          ConstructorId,
//!             flags:       FlagsWord,   // iff the type has optional fields
//!             fields...,                // declared order
//!         }
//! ```
//!
//! Every encoding is a multiple of 4 bytes long.

mod cursor;
mod ids;
mod lengths;
mod writer;

pub use cursor::*;
pub use ids::*;
pub use lengths::*;
pub use writer::*;
