//! Definition file writer

use std::fmt;

use tref::{Codepoint, Font};

/// Render a codepoint the way the parser reads it back.
///
/// Visible characters are quoted, codepoint 0 is `NUL` and everything else
/// (whitespace, control characters, invalid scalars) is hexadecimal.
pub fn format_codepoint(codepoint: Codepoint) -> String {
    if codepoint == 0 {
        return "NUL".to_string();
    }
    match char::from_u32(codepoint) {
        Some(c) if !c.is_control() && !c.is_whitespace() => format!("'{c}'"),
        _ => format!("0x{codepoint:X}"),
    }
}

/// Font metrics formatted as a definition file
pub struct Definitions<'a>(pub &'a Font);

impl fmt::Display for Definitions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let font = self.0;
        writeln!(f, "line_skip: {}", font.line_skip)?;
        if !font.glyphs.is_empty() {
            writeln!(f)?;
        }
        for (&codepoint, glyph) in &font.glyphs {
            writeln!(
                f,
                "{}: x: {}, y: {}, width: {}, height: {}, xoffset: {}, yoffset: {}, advance: {}",
                format_codepoint(codepoint),
                glyph.x,
                glyph.y,
                glyph.width,
                glyph.height,
                glyph.x_offset,
                glyph.y_offset,
                glyph.advance
            )?;
        }
        Ok(())
    }
}

/// Render font metrics as a definition file.
pub fn write_definitions(font: &Font) -> String {
    Definitions(font).to_string()
}
