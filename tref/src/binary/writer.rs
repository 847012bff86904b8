//! In-memory binary writer

use bytemuck::NoUninit;

/// Append-only byte buffer
#[derive(Debug, Clone, Default)]
pub struct BinaryWriter {
    buffer: Vec<u8>,
}

impl BinaryWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Append the raw bytes of `value` (host byte order)
    pub fn write<T: NoUninit>(&mut self, value: &T) {
        self.buffer.extend_from_slice(bytemuck::bytes_of(value));
    }

    /// Append a byte slice as-is
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Consume the writer and return the buffer
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}
