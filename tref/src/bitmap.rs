//! 4-channel 8-bit pixel buffers
//!
//! Channel order (RGBA or ARGB) is up to the caller; the container only
//! carries `width × height × 4` bytes.

use crate::BitmapError;

/// Bytes per pixel of every bitmap handled by the container
pub const CHANNELS: usize = 4;

fn expected_len(width: u32, height: u32) -> Result<usize, BitmapError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(BitmapError::Overflow { width, height })
}

fn check_len(width: u32, height: u32, actual: usize) -> Result<(), BitmapError> {
    let expected = expected_len(width, height)?;
    if expected != actual {
        return Err(BitmapError::SizeMismatch { expected, actual });
    }
    Ok(())
}

/// Owned pixel buffer, as returned by decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// Wrap pixel data, checking that its length matches the dimensions
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BitmapError> {
        check_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Bitmap where every pixel is `pixel`
    pub fn filled(width: u32, height: u32, pixel: [u8; CHANNELS]) -> Result<Self, BitmapError> {
        let pixels = expected_len(width, height)? / CHANNELS;
        Ok(Self {
            width,
            height,
            data: pixel.repeat(pixels),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Borrow as an encoder input
    pub fn view(&self) -> BitmapRef<'_> {
        BitmapRef {
            width: self.width,
            height: self.height,
            data: &self.data,
        }
    }
}

/// Borrowed pixel buffer, as accepted by encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapRef<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> BitmapRef<'a> {
    /// Borrow pixel data, checking that its length matches the dimensions
    pub fn new(width: u32, height: u32, data: &'a [u8]) -> Result<Self, BitmapError> {
        check_len(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }
}
