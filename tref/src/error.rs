//! Error types for encoding and decoding `.tref` files.

use std::io;

/// Failure while reading a `.tref` file.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The first four bytes are not `TREF`
    #[error("invalid .tref file header")]
    InvalidHeader,

    /// The LZ4 payload is corrupt or does not match the declared size
    #[error("LZ4 decompression of tref file failed: {0}")]
    Decompression(String),

    /// A fixed-size field extends past the end of the available bytes
    #[error("unexpected end of data at offset {offset}: needed {needed} bytes, {remaining} remaining")]
    OutOfBounds {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// The embedded atlas is not a valid QOI image
    #[error("failed to decode QOI data: {0}")]
    ImageDecoding(String),

    /// Reading from the source failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Failure while producing a `.tref` file.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The atlas could not be encoded as QOI
    #[error("failed to encode QOI data: {0}")]
    ImageEncoding(String),

    /// The uncompressed payload exceeds the compressor's input ceiling
    #[error("payload of {size} bytes exceeds the maximum of {max} bytes")]
    PayloadTooLarge { size: usize, max: usize },

    /// The glyph count does not fit the u32 count field
    #[error("too many glyphs: {0}")]
    TooManyGlyphs(usize),

    /// Writing to the sink failed
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Pixel data does not match the declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BitmapError {
    #[error("pixel buffer is {actual} bytes, expected {expected} for the given dimensions")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("bitmap dimensions {width}x{height} overflow the address space")]
    Overflow { width: u32, height: u32 },
}
