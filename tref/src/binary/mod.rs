//! Binary cursor over `.tref` byte buffers
//!
//! Every fixed-width field of the format (header size, line skip, glyph count,
//! glyph records) is moved verbatim between memory and the buffer, without
//! byte order conversion.
//!
//! - [`BinaryReader`] fails with [`DecodeError::OutOfBounds`] instead of
//!   reading past the end of its slice.
//! - [`BinaryWriter`] appends to a growable in-memory buffer and cannot fail.
//!
//! [`DecodeError::OutOfBounds`]: crate::DecodeError::OutOfBounds

mod reader;
mod writer;

pub use reader::BinaryReader;
pub use writer::BinaryWriter;
