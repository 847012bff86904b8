//! TREF bitmap font container
//!
//! A `.tref` file bundles everything needed to draw text with a bitmap font:
//! a glyph table, a line skip metric and the glyph atlas image.
//!
//! # Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ magic: "TREF"                    (4 bytes)  │
//! │ payload size: u32                (4 bytes)  │
//! ├─────────────────────────────────────────────┤
//! │ LZ4 block                                   │
//! │  ├── line_skip: i32                         │
//! │  ├── glyph_count: u32                       │
//! │  ├── glyph_count × (codepoint u32, Glyph)   │
//! │  └── atlas: QOI image (rest of payload)     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! All integers are stored in host byte order. Files are therefore only
//! portable between machines of the same endianness.
//!
//! # Modules
//!
//! - [`binary`] - Bounds-checked cursor reads and raw writes
//! - [`glyph`] - Glyph record and glyph table codec
//! - [`compression`] - LZ4 block layer
//! - [`atlas`] - QOI layer for the glyph atlas
//! - [`container`] - `encode` / `decode` of whole `.tref` files
//!
//! # Example
//!
//! ```
//! use tref::{Bitmap, Glyph, GlyphMap};
//!
//! let mut glyphs = GlyphMap::new();
//! glyphs.insert('A' as u32, Glyph::new(0, 0, 4, 4, 0, -4, 5));
//! let atlas = Bitmap::new(4, 4, vec![255; 4 * 4 * 4]).unwrap();
//!
//! let bytes = tref::encode(12, &glyphs, atlas.view()).unwrap();
//! let font = tref::decode(&bytes).unwrap();
//!
//! assert_eq!(font.line_skip, 12);
//! assert_eq!(font.glyphs, glyphs);
//! assert_eq!(font.bitmap, atlas);
//! ```

pub mod atlas;
pub mod binary;
pub mod bitmap;
pub mod compression;
pub mod container;
mod error;
pub mod glyph;
mod limits;

pub use bitmap::{Bitmap, BitmapRef};
pub use container::{
    Font, TrefFont, decode, decode_from, decode_with_limits, encode, encode_to,
    encode_to_with_limits, encode_with_limits,
};
pub use error::{BitmapError, DecodeError, EncodeError};
pub use glyph::{Codepoint, Glyph, GlyphMap};
pub use limits::CodecLimits;

/// Magic bytes at the start of every `.tref` file
pub const TREF_MAGIC: &[u8; 4] = b"TREF";

/// File extension without dot
pub const TREF_EXTENSION: &str = "tref";
