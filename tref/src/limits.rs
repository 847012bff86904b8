//! Caller-tunable ceilings for the container codec.

use serde::{Deserialize, Serialize};

use crate::compression::LZ4_MAX_INPUT_SIZE;

/// Size limits applied while encoding and decoding
///
/// Can be embedded in an application's own config file:
///
/// ```toml
/// [tref]
/// max_payload_size = 16777216
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecLimits {
    /// Largest uncompressed payload accepted, in bytes
    ///
    /// Values above the LZ4 input ceiling are clamped to it.
    pub max_payload_size: usize,
}

impl CodecLimits {
    pub fn new(max_payload_size: usize) -> Self {
        Self { max_payload_size }
    }

    /// Effective payload ceiling after clamping to what LZ4 can compress
    pub fn payload_ceiling(&self) -> usize {
        self.max_payload_size.min(LZ4_MAX_INPUT_SIZE)
    }
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_payload_size: LZ4_MAX_INPUT_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_lz4_ceiling() {
        assert_eq!(CodecLimits::default().payload_ceiling(), LZ4_MAX_INPUT_SIZE);
    }

    #[test]
    fn test_clamped_to_lz4_ceiling() {
        let limits = CodecLimits::new(usize::MAX);
        assert_eq!(limits.payload_ceiling(), LZ4_MAX_INPUT_SIZE);
        assert_eq!(CodecLimits::new(1024).payload_ceiling(), 1024);
    }

    #[test]
    fn test_from_toml() {
        #[derive(Deserialize)]
        struct Config {
            tref: CodecLimits,
        }

        let config: Config = toml::from_str("[tref]\nmax_payload_size = 4096\n").unwrap();
        assert_eq!(config.tref.max_payload_size, 4096);

        let config: Config = toml::from_str("[tref]\n").unwrap();
        assert_eq!(config.tref, CodecLimits::default());
    }
}
