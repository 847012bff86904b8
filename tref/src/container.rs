//! `.tref` container encode/decode
//!
//! Both directions are single-pass pipelines over in-memory buffers:
//!
//! ```text
//! decode: magic → payload size → LZ4 → line skip → glyph table → QOI
//! encode: QOI → line skip + glyph table + QOI → size check → LZ4 → header
//! ```
//!
//! Nothing is written to a sink until the complete file has been built, so a
//! failed encode never leaves a truncated file behind.

use std::io::{Read, Write};

use crate::atlas::{decode_image, encode_image};
use crate::binary::{BinaryReader, BinaryWriter};
use crate::compression::{compress, decompress};
use crate::glyph::{GLYPH_ENTRY_SIZE, read_glyph_table, write_glyph_table};
use crate::{
    Bitmap, BitmapRef, CodecLimits, DecodeError, EncodeError, GlyphMap, TREF_MAGIC,
};

/// Size of the uncompressed container header (magic + payload size)
pub const HEADER_SIZE: usize = 8;

/// Font metrics without the atlas
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Font {
    /// Vertical distance between baselines
    pub line_skip: i32,
    pub glyphs: GlyphMap,
}

/// Fully decoded `.tref` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrefFont {
    /// Vertical distance between baselines
    pub line_skip: i32,
    pub glyphs: GlyphMap,
    /// Glyph atlas, 4 channels per pixel
    pub bitmap: Bitmap,
}

impl TrefFont {
    /// Split into metrics and atlas
    pub fn into_parts(self) -> (Font, Bitmap) {
        (
            Font {
                line_skip: self.line_skip,
                glyphs: self.glyphs,
            },
            self.bitmap,
        )
    }
}

/// Decode a complete `.tref` file with the default limits.
pub fn decode(bytes: &[u8]) -> Result<TrefFont, DecodeError> {
    decode_with_limits(bytes, &CodecLimits::default())
}

/// Decode a complete `.tref` file.
pub fn decode_with_limits(bytes: &[u8], limits: &CodecLimits) -> Result<TrefFont, DecodeError> {
    let mut reader = BinaryReader::new(bytes);
    match reader.read_bytes(TREF_MAGIC.len()) {
        Ok(magic) if magic == TREF_MAGIC => {}
        _ => return Err(DecodeError::InvalidHeader),
    }

    let payload_size = reader.read::<u32>()? as usize;
    if payload_size > limits.payload_ceiling() {
        return Err(DecodeError::Decompression(format!(
            "declared size {payload_size} exceeds the limit of {}",
            limits.payload_ceiling()
        )));
    }

    let payload = decompress(reader.remaining(), payload_size)?;
    let mut reader = BinaryReader::new(&payload);
    let line_skip = reader.read::<i32>()?;
    let glyphs = read_glyph_table(&mut reader)?;
    let bitmap = decode_image(reader.remaining())?;

    tracing::debug!(
        payload_size,
        glyphs = glyphs.len(),
        width = bitmap.width(),
        height = bitmap.height(),
        "decoded tref"
    );
    Ok(TrefFont {
        line_skip,
        glyphs,
        bitmap,
    })
}

/// Read a source to its end and decode it.
pub fn decode_from<R: Read>(mut reader: R) -> Result<TrefFont, DecodeError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode(&bytes)
}

/// Encode a `.tref` file with the default limits.
pub fn encode(
    line_skip: i32,
    glyphs: &GlyphMap,
    bitmap: BitmapRef<'_>,
) -> Result<Vec<u8>, EncodeError> {
    encode_with_limits(line_skip, glyphs, bitmap, &CodecLimits::default())
}

/// Encode a `.tref` file.
pub fn encode_with_limits(
    line_skip: i32,
    glyphs: &GlyphMap,
    bitmap: BitmapRef<'_>,
    limits: &CodecLimits,
) -> Result<Vec<u8>, EncodeError> {
    let image = encode_image(bitmap)?;

    let table_size = glyphs.len().saturating_mul(GLYPH_ENTRY_SIZE);
    let mut payload = BinaryWriter::with_capacity(8 + table_size + image.len());
    payload.write(&line_skip);
    write_glyph_table(&mut payload, glyphs)?;
    payload.write_bytes(&image);
    drop(image);

    let max = limits.payload_ceiling();
    if payload.len() > max {
        return Err(EncodeError::PayloadTooLarge {
            size: payload.len(),
            max,
        });
    }
    let payload = payload.into_inner();
    // The ceiling is below u32::MAX, so the size always fits the header field.
    let payload_size = payload.len() as u32;
    let compressed = compress(&payload, max)?;

    let mut file = BinaryWriter::with_capacity(HEADER_SIZE + compressed.len());
    file.write_bytes(TREF_MAGIC);
    file.write(&payload_size);
    file.write_bytes(&compressed);

    tracing::debug!(
        payload_size,
        compressed = compressed.len(),
        glyphs = glyphs.len(),
        "encoded tref"
    );
    Ok(file.into_inner())
}

/// Encode a `.tref` file with the default limits and write it to `writer`.
pub fn encode_to<W: Write>(
    writer: W,
    line_skip: i32,
    glyphs: &GlyphMap,
    bitmap: BitmapRef<'_>,
) -> Result<(), EncodeError> {
    encode_to_with_limits(writer, line_skip, glyphs, bitmap, &CodecLimits::default())
}

/// Encode a `.tref` file and write it to `writer` in one piece.
///
/// `writer` is untouched unless encoding succeeded.
pub fn encode_to_with_limits<W: Write>(
    mut writer: W,
    line_skip: i32,
    glyphs: &GlyphMap,
    bitmap: BitmapRef<'_>,
    limits: &CodecLimits,
) -> Result<(), EncodeError> {
    let bytes = encode_with_limits(line_skip, glyphs, bitmap, limits)?;
    writer.write_all(&bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Glyph;

    fn sample_glyphs() -> GlyphMap {
        let mut glyphs = GlyphMap::new();
        glyphs.insert(0, Glyph::new(0, 0, 0, 0, 0, 0, 5));
        glyphs.insert(65, Glyph::new(2, 2, 10, 12, 0, -12, 11));
        glyphs
    }

    #[test]
    fn test_header_layout() {
        let bitmap = Bitmap::filled(4, 4, [0, 0, 0, 255]).unwrap();
        let bytes = encode(18, &sample_glyphs(), bitmap.view()).unwrap();

        assert_eq!(&bytes[0..4], b"TREF");
        let payload_size = u32::from_ne_bytes(bytes[4..8].try_into().unwrap()) as usize;
        let payload = decompress(&bytes[HEADER_SIZE..], payload_size).unwrap();

        assert_eq!(&payload[0..4], &18i32.to_ne_bytes());
        assert_eq!(&payload[4..8], &2u32.to_ne_bytes());
        let image_start = 8 + 2 * GLYPH_ENTRY_SIZE;
        assert_eq!(&payload[image_start..image_start + 4], b"qoif");
    }

    #[test]
    fn test_into_parts() {
        let bitmap = Bitmap::filled(2, 2, [1, 2, 3, 4]).unwrap();
        let bytes = encode(-3, &sample_glyphs(), bitmap.view()).unwrap();

        let (font, atlas) = decode(&bytes).unwrap().into_parts();
        assert_eq!(font.line_skip, -3);
        assert_eq!(font.glyphs, sample_glyphs());
        assert_eq!(atlas, bitmap);
    }

    #[test]
    fn test_decode_limit() {
        let bitmap = Bitmap::filled(8, 8, [1, 2, 3, 4]).unwrap();
        let bytes = encode(1, &sample_glyphs(), bitmap.view()).unwrap();

        let limits = CodecLimits::new(16);
        assert!(matches!(
            decode_with_limits(&bytes, &limits),
            Err(DecodeError::Decompression(_))
        ));
    }

    #[test]
    fn test_header_only_is_out_of_bounds() {
        assert!(matches!(
            decode(b"TREF\x01\x00"),
            Err(DecodeError::OutOfBounds { .. })
        ));
    }
}
