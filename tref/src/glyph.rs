//! Glyph records and the glyph table codec
//!
//! # Layout
//! ```text
//! 0x00: glyph_count u32
//! 0x04: glyph_count × entry (18 bytes each)
//!
//! entry:
//! 0x00: codepoint u32
//! 0x04: x u16
//! 0x06: y u16
//! 0x08: width u16
//! 0x0A: height u16
//! 0x0C: x_offset i16
//! 0x0E: y_offset i16
//! 0x10: advance i16
//! ```

use std::collections::BTreeMap;

use bytemuck::{Pod, Zeroable};

use crate::binary::{BinaryReader, BinaryWriter};
use crate::{DecodeError, EncodeError};

/// Unicode scalar value identifying a glyph
///
/// The codec does not validate the range. By convention codepoint 0 holds the
/// fallback glyph drawn for characters missing from the table.
pub type Codepoint = u32;

/// Glyph table, iterated in ascending codepoint order
pub type GlyphMap = BTreeMap<Codepoint, Glyph>;

/// Location of a character in the atlas and its typographic placement
///
/// This exact field order and width is stored on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Glyph {
    /// X position in atlas (pixels)
    pub x: u16,
    /// Y position in atlas (pixels)
    pub y: u16,
    /// Width in atlas (pixels); 0 for whitespace glyphs
    pub width: u16,
    /// Height in atlas (pixels); 0 for whitespace glyphs
    pub height: u16,
    /// Horizontal render offset
    pub x_offset: i16,
    /// Vertical render offset
    pub y_offset: i16,
    /// Horizontal advance to the next glyph
    pub advance: i16,
}

impl Glyph {
    pub const SIZE: usize = 14;

    pub fn new(
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        x_offset: i16,
        y_offset: i16,
        advance: i16,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            x_offset,
            y_offset,
            advance,
        }
    }

    /// Whether the glyph covers no atlas pixels
    pub fn is_blank(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Size of one serialized table entry (codepoint + glyph)
pub const GLYPH_ENTRY_SIZE: usize = size_of::<Codepoint>() + Glyph::SIZE;

/// Read a glyph count followed by that many entries.
///
/// Duplicate codepoints are accepted; the last entry wins.
pub fn read_glyph_table(reader: &mut BinaryReader<'_>) -> Result<GlyphMap, DecodeError> {
    let count = reader.read::<u32>()?;
    let mut glyphs = GlyphMap::new();
    for _ in 0..count {
        let codepoint = reader.read::<Codepoint>()?;
        let glyph = reader.read::<Glyph>()?;
        glyphs.insert(codepoint, glyph);
    }
    tracing::trace!(count, unique = glyphs.len(), "read glyph table");
    Ok(glyphs)
}

/// Write the glyph count followed by every entry in ascending codepoint order.
pub fn write_glyph_table(writer: &mut BinaryWriter, glyphs: &GlyphMap) -> Result<(), EncodeError> {
    let count = u32::try_from(glyphs.len()).map_err(|_| EncodeError::TooManyGlyphs(glyphs.len()))?;
    writer.write(&count);
    for (codepoint, glyph) in glyphs {
        writer.write(codepoint);
        writer.write(glyph);
    }
    Ok(())
}
