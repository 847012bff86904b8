//! Bounds-checked binary reader

use crate::DecodeError;
use bytemuck::AnyBitPattern;

/// Cursor over a borrowed byte slice
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> BinaryReader<'a> {
    /// Create a reader positioned at the start of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// Read `size_of::<T>()` bytes verbatim (host byte order)
    ///
    /// The cursor only advances on success.
    pub fn read<T: AnyBitPattern>(&mut self) -> Result<T, DecodeError> {
        let bytes = self.take(size_of::<T>())?;
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// Read exactly `len` raw bytes
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        self.take(len)
    }

    /// Unread tail of the buffer
    pub fn remaining(&self) -> &'a [u8] {
        &self.bytes[self.position..]
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.bytes.len() - self.position;
        if len > remaining {
            return Err(DecodeError::OutOfBounds {
                offset: self.position,
                needed: len,
                remaining,
            });
        }
        let bytes = &self.bytes[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_native_order() {
        let value: u32 = 0x1234_5678;
        let bytes = value.to_ne_bytes();

        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(reader.read::<u32>().unwrap(), 0x1234_5678);
        assert!(reader.remaining().is_empty());
    }

    #[test]
    fn test_read_sequence_advances() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&(-18i32).to_ne_bytes());
        bytes.extend_from_slice(&7u16.to_ne_bytes());
        bytes.push(0xAB);

        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(reader.read::<i32>().unwrap(), -18);
        assert_eq!(reader.remaining().len(), 3);
        assert_eq!(reader.read::<u16>().unwrap(), 7);
        assert_eq!(reader.remaining(), &[0xAB]);
    }

    #[test]
    fn test_read_past_end_fails_without_advancing() {
        let bytes = [1u8, 2, 3];
        let mut reader = BinaryReader::new(&bytes);

        match reader.read::<u32>() {
            Err(DecodeError::OutOfBounds {
                offset,
                needed,
                remaining,
            }) => {
                assert_eq!(offset, 0);
                assert_eq!(needed, 4);
                assert_eq!(remaining, 3);
            }
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
        assert_eq!(reader.remaining(), &bytes);
        assert_eq!(reader.read::<u16>().unwrap(), u16::from_ne_bytes([1, 2]));
    }

    #[test]
    fn test_read_from_empty() {
        let mut reader = BinaryReader::new(&[]);
        assert!(reader.read::<u8>().is_err());
        assert!(reader.remaining().is_empty());
    }

    #[test]
    fn test_read_bytes() {
        let bytes = b"TREFrest";
        let mut reader = BinaryReader::new(bytes);
        assert_eq!(reader.read_bytes(4).unwrap(), b"TREF");
        assert_eq!(reader.remaining(), b"rest");
        assert!(reader.read_bytes(5).is_err());
    }
}
