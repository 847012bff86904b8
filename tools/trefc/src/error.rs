//! Compiler errors and their process exit codes.

use std::io;
use std::path::PathBuf;

use crate::definitions::ParseError;

/// Everything that can stop the compiler
///
/// Each variant maps to a distinct process exit code so scripts can tell
/// failure categories apart.
#[derive(Debug, thiserror::Error)]
pub enum CompilerError {
    #[error("file '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to open file '{}' ({source})", path.display())]
    FileOpening { path: PathBuf, source: io::Error },

    #[error("while parsing '{}':\n{source}", path.display())]
    Parse { path: PathBuf, source: ParseError },

    #[error("failed to load image from '{}' ({source})", path.display())]
    ImageLoading {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("image '{}' does not hold RGBA pixels ({source})", path.display())]
    InvalidBitmap {
        path: PathBuf,
        source: tref::BitmapError,
    },

    #[error("failed to encode image ({0})")]
    Encoding(#[from] tref::EncodeError),

    #[error("a writing operation failed on '{}' ({source})", path.display())]
    Writing { path: PathBuf, source: io::Error },

    #[error("failed to save image to '{}' ({source})", path.display())]
    ImageSaving {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("'{}' is not a valid .tref file ({source})", path.display())]
    InvalidFont {
        path: PathBuf,
        source: tref::DecodeError,
    },
}

impl CompilerError {
    /// Process exit code for this failure category
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::FileNotFound(_) => exit_code::FILE_NOT_FOUND,
            Self::FileOpening { .. } => exit_code::FILE_OPENING_FAILURE,
            Self::Parse { .. } => exit_code::PARSING_FAILURE,
            Self::ImageLoading { .. }
            | Self::InvalidBitmap { .. }
            | Self::Encoding(_)
            | Self::ImageSaving { .. } => exit_code::IMAGE_FAILURE,
            Self::Writing { .. } => exit_code::WRITING_FAILURE,
            Self::InvalidFont { .. } => exit_code::INVALID_FONT,
        }
    }
}

/// Process exit codes
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const INVALID_ARGUMENTS: u8 = 1;
    pub const FILE_NOT_FOUND: u8 = 2;
    pub const FILE_OPENING_FAILURE: u8 = 3;
    pub const PARSING_FAILURE: u8 = 4;
    pub const IMAGE_FAILURE: u8 = 5;
    pub const WRITING_FAILURE: u8 = 6;
    pub const INVALID_FONT: u8 = 7;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::ParseErrorKind;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            CompilerError::FileNotFound("a".into()),
            CompilerError::FileOpening {
                path: "a".into(),
                source: io::Error::other("denied"),
            },
            CompilerError::Parse {
                path: "a".into(),
                source: ParseError {
                    line: 1,
                    kind: ParseErrorKind::UnterminatedComment,
                },
            },
            CompilerError::Encoding(tref::EncodeError::ImageEncoding("empty".into())),
            CompilerError::Writing {
                path: "a".into(),
                source: io::Error::other("full"),
            },
            CompilerError::InvalidFont {
                path: "a".into(),
                source: tref::DecodeError::InvalidHeader,
            },
        ];
        let mut codes: Vec<u8> = errors.iter().map(CompilerError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(!codes.contains(&exit_code::SUCCESS));
        assert!(!codes.contains(&exit_code::INVALID_ARGUMENTS));
    }

    #[test]
    fn test_parse_error_message() {
        let err = CompilerError::Parse {
            path: "font.txt".into(),
            source: ParseError {
                line: 4,
                kind: ParseErrorKind::ExpectedSymbol(":"),
            },
        };
        assert_eq!(err.to_string(), "while parsing 'font.txt':\nline 4: expected ':'");
    }

    #[test]
    fn test_invalid_bitmap_is_image_failure() {
        let err = CompilerError::InvalidBitmap {
            path: "atlas.png".into(),
            source: tref::BitmapError::SizeMismatch {
                expected: 16,
                actual: 12,
            },
        };
        assert_eq!(err.exit_code(), exit_code::IMAGE_FAILURE);
        assert!(err.to_string().starts_with("image 'atlas.png' does not hold RGBA pixels"));
    }
}
