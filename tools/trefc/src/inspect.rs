//! Reading `.tref` files back: `info` and `extract`

use std::fs;
use std::path::Path;

use image::{ExtendedColorType, ImageFormat};
use tref::{Font, TrefFont};

use crate::CompilerError;
use crate::definitions::{format_codepoint, write_definitions};

/// Read and decode a `.tref` file.
pub fn load_font(path: &Path) -> Result<TrefFont, CompilerError> {
    if !path.exists() {
        return Err(CompilerError::FileNotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(|source| CompilerError::FileOpening {
        path: path.to_path_buf(),
        source,
    })?;
    tref::decode(&bytes).map_err(|source| CompilerError::InvalidFont {
        path: path.to_path_buf(),
        source,
    })
}

/// Human-readable summary of a decoded font
pub fn describe(font: &TrefFont) -> String {
    let mut lines = vec![
        format!("line skip: {}", font.line_skip),
        format!("glyphs:    {}", font.glyphs.len()),
        format!(
            "atlas:     {}x{} ({} bytes RGBA)",
            font.bitmap.width(),
            font.bitmap.height(),
            font.bitmap.data().len()
        ),
    ];
    if let (Some(first), Some(last)) = (font.glyphs.keys().next(), font.glyphs.keys().last()) {
        lines.push(format!(
            "range:     {} .. {}",
            format_codepoint(*first),
            format_codepoint(*last)
        ));
    }
    let blank = font.glyphs.values().filter(|g| g.is_blank()).count();
    lines.push(format!("blank:     {blank}"));
    lines.join("\n")
}

/// Write the atlas as PNG and/or the metrics as a definition file.
pub fn extract(
    input: &Path,
    atlas: Option<&Path>,
    definitions: Option<&Path>,
) -> Result<TrefFont, CompilerError> {
    let font = load_font(input)?;

    if let Some(path) = atlas {
        image::save_buffer_with_format(
            path,
            font.bitmap.data(),
            font.bitmap.width(),
            font.bitmap.height(),
            ExtendedColorType::Rgba8,
            ImageFormat::Png,
        )
        .map_err(|source| CompilerError::ImageSaving {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Wrote atlas to {}", path.display());
    }

    if let Some(path) = definitions {
        let metrics = Font {
            line_skip: font.line_skip,
            glyphs: font.glyphs.clone(),
        };
        fs::write(path, write_definitions(&metrics)).map_err(|source| CompilerError::Writing {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Wrote definitions to {}", path.display());
    }

    Ok(font)
}
