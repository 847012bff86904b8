//! QOI layer for the glyph atlas
//!
//! The atlas is always stored as 4-channel sRGB QOI. Decoding always yields 4
//! channels, even when the embedded image was written with 3 (alpha becomes
//! 255).

use std::io::Cursor;

use image::codecs::qoi::QoiEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, ImageReader, Limits};

use crate::bitmap::CHANNELS;
use crate::{Bitmap, BitmapRef, DecodeError, EncodeError};

/// QOI header plus end marker
const QOI_FRAMING: usize = 14 + 8;

/// Most pixels a single QOI byte can cover (`QOI_OP_RUN`)
const QOI_MAX_RUN: u64 = 62;

/// Decoder limits for `encoded_len` bytes of QOI data
fn decode_limits(encoded_len: usize) -> Limits {
    let max_pixels = (encoded_len.saturating_sub(QOI_FRAMING) as u64).saturating_mul(QOI_MAX_RUN);
    let mut limits = Limits::no_limits();
    limits.max_alloc = Some(max_pixels.saturating_mul(CHANNELS as u64));
    limits
}

/// Encode a 4-channel bitmap as QOI.
pub fn encode_image(bitmap: BitmapRef<'_>) -> Result<Vec<u8>, EncodeError> {
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return Err(EncodeError::ImageEncoding(format!(
            "zero-area image ({}x{})",
            bitmap.width(),
            bitmap.height()
        )));
    }

    let mut encoded = Vec::new();
    QoiEncoder::new(&mut encoded)
        .write_image(
            bitmap.data(),
            bitmap.width(),
            bitmap.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::ImageEncoding(e.to_string()))?;

    if encoded.is_empty() {
        return Err(EncodeError::ImageEncoding("encoder produced no data".into()));
    }
    tracing::trace!(
        width = bitmap.width(),
        height = bitmap.height(),
        encoded = encoded.len(),
        "encoded atlas"
    );
    Ok(encoded)
}

/// Decode QOI bytes into a 4-channel bitmap.
///
/// The allocation ceiling is the most pixels `bytes` could describe, which
/// every output of [`encode_image`] stays within.
pub fn decode_image(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    let mut reader = ImageReader::with_format(Cursor::new(bytes), ImageFormat::Qoi);
    reader.limits(decode_limits(bytes.len()));
    let image = reader
        .decode()
        .map_err(|e| DecodeError::ImageDecoding(e.to_string()))?;
    let rgba = image.into_rgba8();
    let (width, height) = rgba.dimensions();
    Bitmap::new(width, height, rgba.into_raw())
        .map_err(|e| DecodeError::ImageDecoding(e.to_string()))
}
