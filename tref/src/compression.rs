//! LZ4 block layer
//!
//! The payload is stored as a single raw LZ4 block (no frame header), the same
//! output `LZ4_compress_default` produces. The decompressed size is not part
//! of the block and has to come from the container header.

use crate::{DecodeError, EncodeError};

/// Largest input LZ4 accepts (`LZ4_MAX_INPUT_SIZE`)
pub const LZ4_MAX_INPUT_SIZE: usize = 0x7E00_0000;

/// Upper bound on how much one compressed byte can expand
const LZ4_MAX_EXPANSION: usize = 255;

/// Compress `bytes` as a single LZ4 block.
///
/// Fails if `bytes` is larger than `max_input` or the LZ4 ceiling, whichever
/// is smaller.
pub fn compress(bytes: &[u8], max_input: usize) -> Result<Vec<u8>, EncodeError> {
    let max = max_input.min(LZ4_MAX_INPUT_SIZE);
    if bytes.len() > max {
        return Err(EncodeError::PayloadTooLarge {
            size: bytes.len(),
            max,
        });
    }
    let compressed = lz4_flex::block::compress(bytes);
    tracing::trace!(
        uncompressed = bytes.len(),
        compressed = compressed.len(),
        "compressed payload"
    );
    Ok(compressed)
}

/// Decompress a single LZ4 block that must expand to exactly `expected` bytes.
///
/// The declared size is checked against the LZ4 ceiling and the largest
/// expansion `compressed` could possibly produce before anything is allocated.
pub fn decompress(compressed: &[u8], expected: usize) -> Result<Vec<u8>, DecodeError> {
    if expected > LZ4_MAX_INPUT_SIZE {
        return Err(DecodeError::Decompression(format!(
            "declared size {expected} exceeds the LZ4 maximum of {LZ4_MAX_INPUT_SIZE}"
        )));
    }
    let max_expansion = compressed
        .len()
        .saturating_mul(LZ4_MAX_EXPANSION)
        .saturating_add(16);
    if expected > max_expansion {
        return Err(DecodeError::Decompression(format!(
            "declared size {expected} cannot be produced from {} compressed bytes",
            compressed.len()
        )));
    }

    let mut output = vec![0u8; expected];
    let written = lz4_flex::block::decompress_into(compressed, &mut output)
        .map_err(|e| DecodeError::Decompression(e.to_string()))?;
    if written != expected {
        return Err(DecodeError::Decompression(format!(
            "decompressed {written} bytes, header declares {expected}"
        )));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<u8> {
        (0..4096u32).map(|i| (i % 7) as u8).collect()
    }

    #[test]
    fn test_roundtrip() {
        let data = sample();
        let compressed = compress(&data, LZ4_MAX_INPUT_SIZE).unwrap();
        assert!(compressed.len() < data.len());
        assert_eq!(decompress(&compressed, data.len()).unwrap(), data);
    }

    #[test]
    fn test_deterministic() {
        let data = sample();
        assert_eq!(
            compress(&data, LZ4_MAX_INPUT_SIZE).unwrap(),
            compress(&data, LZ4_MAX_INPUT_SIZE).unwrap()
        );
    }

    #[test]
    fn test_input_over_limit() {
        let data = sample();
        match compress(&data, 100) {
            Err(EncodeError::PayloadTooLarge { size, max }) => {
                assert_eq!(size, 4096);
                assert_eq!(max, 100);
            }
            other => panic!("expected PayloadTooLarge, got {other:?}"),
        }
    }

    #[test]
    fn test_size_mismatch() {
        let data = sample();
        let compressed = compress(&data, LZ4_MAX_INPUT_SIZE).unwrap();

        assert!(matches!(
            decompress(&compressed, data.len() + 1),
            Err(DecodeError::Decompression(_))
        ));
        assert!(matches!(
            decompress(&compressed, data.len() - 1),
            Err(DecodeError::Decompression(_))
        ));
    }

    #[test]
    fn test_truncated_block() {
        let data = sample();
        let compressed = compress(&data, LZ4_MAX_INPUT_SIZE).unwrap();

        for len in 0..compressed.len() {
            assert!(
                decompress(&compressed[..len], data.len()).is_err(),
                "truncation at {len} should fail"
            );
        }
    }

    #[test]
    fn test_forged_size_rejected_before_allocation() {
        let err = decompress(&[0x00], u32::MAX as usize).unwrap_err();
        assert!(matches!(err, DecodeError::Decompression(_)));

        let err = decompress(&[0x10, 0x41], 1 << 20).unwrap_err();
        assert!(matches!(err, DecodeError::Decompression(_)));
    }

    #[test]
    fn test_garbage_input() {
        let garbage = [0xFFu8; 64];
        assert!(decompress(&garbage, 1000).is_err());
    }
}
