//! Definitions + atlas image → `.tref`

use std::fs;
use std::path::Path;

use tref::{Bitmap, Font};

use crate::CompilerError;
use crate::definitions::parse_definitions;

/// Summary of a successful compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileSummary {
    pub glyphs: usize,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
}

/// Read and parse a glyph definition file.
pub fn load_definitions(path: &Path) -> Result<Font, CompilerError> {
    if !path.exists() {
        return Err(CompilerError::FileNotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| CompilerError::FileOpening {
        path: path.to_path_buf(),
        source,
    })?;
    parse_definitions(&text).map_err(|source| CompilerError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a PNG, JPEG or BMP atlas as 4-channel RGBA.
pub fn load_bitmap(path: &Path) -> Result<Bitmap, CompilerError> {
    if !path.exists() {
        return Err(CompilerError::FileNotFound(path.to_path_buf()));
    }
    let img = image::open(path).map_err(|source| CompilerError::ImageLoading {
        path: path.to_path_buf(),
        source,
    })?;

    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(width, height, "loaded atlas {}", path.display());
    Bitmap::new(width, height, rgba.into_raw()).map_err(|source| CompilerError::InvalidBitmap {
        path: path.to_path_buf(),
        source,
    })
}

/// Compile a definition file and an atlas image into a `.tref` file.
///
/// The output file is only created once the font has been fully encoded.
pub fn compile(
    definitions: &Path,
    image: &Path,
    output: &Path,
) -> Result<CompileSummary, CompilerError> {
    let font = load_definitions(definitions)?;
    let bitmap = load_bitmap(image)?;

    let bytes = tref::encode(font.line_skip, &font.glyphs, bitmap.view())?;
    fs::write(output, &bytes).map_err(|source| CompilerError::Writing {
        path: output.to_path_buf(),
        source,
    })?;

    Ok(CompileSummary {
        glyphs: font.glyphs.len(),
        width: bitmap.width(),
        height: bitmap.height(),
        bytes: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const DEFINITIONS: &str = "\
line_skip: 18
'A': x: 2, y: 2, width: 10, height: 12, xoffset: 0, yoffset: -12, advance: 11
";

    fn write_atlas(path: &Path) {
        let img = image::RgbaImage::from_fn(16, 16, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgba([255, 0, 0, 255]) // Red
            } else {
                image::Rgba([0, 255, 0, 128]) // Green
            }
        });
        img.save(path).expect("Failed to save PNG");
    }

    #[test]
    fn test_compile() {
        let dir = tempdir().expect("Failed to create temp dir");
        let defs = dir.path().join("font.txt");
        let png = dir.path().join("font.png");
        let out = dir.path().join("font.tref");
        fs::write(&defs, DEFINITIONS).unwrap();
        write_atlas(&png);

        let summary = compile(&defs, &png, &out).unwrap();
        assert_eq!(summary.glyphs, 2);
        assert_eq!((summary.width, summary.height), (16, 16));

        let bytes = fs::read(&out).unwrap();
        assert_eq!(bytes.len(), summary.bytes);
        let font = tref::decode(&bytes).unwrap();
        assert_eq!(font.line_skip, 18);
        assert!(font.glyphs.contains_key(&0));
        assert_eq!(font.bitmap.data()[0..4], [255, 0, 0, 255]);
        assert_eq!(font.bitmap.data()[4..8], [0, 255, 0, 128]);
    }

    #[test]
    fn test_missing_inputs() {
        let dir = tempdir().expect("Failed to create temp dir");
        let defs = dir.path().join("font.txt");
        let out = dir.path().join("font.tref");

        let err = compile(&defs, &dir.path().join("font.png"), &out).unwrap_err();
        assert!(matches!(err, CompilerError::FileNotFound(_)));

        fs::write(&defs, DEFINITIONS).unwrap();
        let err = compile(&defs, &dir.path().join("font.png"), &out).unwrap_err();
        assert!(matches!(err, CompilerError::FileNotFound(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_parse_failure_writes_nothing() {
        let dir = tempdir().expect("Failed to create temp dir");
        let defs = dir.path().join("font.txt");
        let png = dir.path().join("font.png");
        let out = dir.path().join("font.tref");
        fs::write(&defs, "line_skip: 1\n/* never closed\n").unwrap();
        write_atlas(&png);

        let err = compile(&defs, &png, &out).unwrap_err();
        assert!(matches!(err, CompilerError::Parse { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn test_unreadable_image() {
        let dir = tempdir().expect("Failed to create temp dir");
        let png = dir.path().join("broken.png");
        fs::write(&png, b"definitely not a png").unwrap();

        let err = load_bitmap(&png).unwrap_err();
        assert!(matches!(err, CompilerError::ImageLoading { .. }));
    }
}
