//! Definition file parser
//!
//! Parsing runs over the comment-stripped text one line at a time with a
//! small cursor that tracks its byte position in the line.

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use tref::{Codepoint, Font, Glyph};

use super::source::strip_comments;

/// Highest Unicode scalar value
const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Parse failure with the 1-based line it occurred on
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unterminated block ('/*') comment")]
    UnterminatedComment,

    #[error("expected '{0}'")]
    ExpectedSymbol(&'static str),

    #[error("'{0}' is not a permitted integer value")]
    InvalidValue(String),

    #[error("'{value}' is not within the supported range of values for '{field}'")]
    OutOfRange { value: String, field: &'static str },

    #[error("invalid codepoint '{0}'")]
    InvalidCodepoint(String),

    #[error("duplicate codepoint '{0:#06x}'")]
    DuplicateCodepoint(Codepoint),
}

/// Parse a definition file into font metrics.
///
/// An all-zero glyph is added for codepoint 0 when the file defines none.
pub fn parse_definitions(text: &str) -> Result<Font, ParseError> {
    let stripped = strip_comments(text)?;
    let mut lines = stripped
        .lines()
        .enumerate()
        .map(|(index, line)| Cursor::new(line, index + 1))
        .filter(|cursor| !cursor.is_blank());

    let mut font = Font::default();
    let Some(mut first) = lines.next() else {
        return Err(ParseError {
            line: 1,
            kind: ParseErrorKind::ExpectedSymbol("line_skip"),
        });
    };
    font.line_skip = first.named_int("line_skip")?;
    first.expect_end()?;

    for mut cursor in lines {
        let codepoint = cursor.codepoint()?;
        if font.glyphs.contains_key(&codepoint) {
            return Err(cursor.error(ParseErrorKind::DuplicateCodepoint(codepoint)));
        }
        let glyph = cursor.glyph()?;
        font.glyphs.insert(codepoint, glyph);
    }

    font.glyphs.entry(0).or_default();
    tracing::debug!(
        line_skip = font.line_skip,
        glyphs = font.glyphs.len(),
        "parsed glyph definitions"
    );
    Ok(font)
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str, line: usize) -> Self {
        Self { text, pos: 0, line }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn is_blank(&self) -> bool {
        self.rest().trim().is_empty()
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError {
            line: self.line,
            kind,
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start_matches([' ', '\t', '\r']).len();
    }

    fn eat(&mut self, symbol: &str) -> bool {
        self.skip_whitespace();
        if self.rest().starts_with(symbol) {
            self.pos += symbol.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, symbol: &'static str) -> Result<(), ParseError> {
        if self.eat(symbol) {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::ExpectedSymbol(symbol)))
        }
    }

    fn expect_end(&mut self) -> Result<(), ParseError> {
        self.skip_whitespace();
        if self.rest().is_empty() {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::ExpectedSymbol("\\n")))
        }
    }

    /// Take everything up to (not including) `delimiter` or the end of line
    fn token_until(&mut self, delimiter: char) -> &'a str {
        self.skip_whitespace();
        let rest = self.rest();
        let len = rest.find(delimiter).unwrap_or(rest.len());
        self.pos += len;
        rest[..len].trim_end_matches([' ', '\t', '\r'])
    }

    /// `name: <integer>`, leaving the cursor on the following delimiter
    fn named_int<T>(&mut self, name: &'static str) -> Result<T, ParseError>
    where
        T: FromStr<Err = ParseIntError>,
    {
        self.expect(name)?;
        self.expect(":")?;
        let token = self.token_until(',');
        token.parse::<T>().map_err(|e| {
            self.error(match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    ParseErrorKind::OutOfRange {
                        value: token.to_string(),
                        field: name,
                    }
                }
                _ => ParseErrorKind::InvalidValue(token.to_string()),
            })
        })
    }

    /// Glyph codepoint followed by `:`
    fn codepoint(&mut self) -> Result<Codepoint, ParseError> {
        self.skip_whitespace();
        let codepoint = if self.rest().starts_with('\'') {
            self.quoted_codepoint()?
        } else {
            let token = self.token_until(':');
            if let Some(hex) = token.strip_prefix("0x") {
                u32::from_str_radix(hex, 16)
                    .ok()
                    .filter(|&value| is_valid_codepoint(value))
                    .ok_or_else(|| self.error(ParseErrorKind::InvalidCodepoint(token.to_string())))?
            } else if token == "NUL" {
                0
            } else if self.rest().is_empty() {
                return Err(self.error(ParseErrorKind::ExpectedSymbol(":")));
            } else {
                return Err(self.error(ParseErrorKind::InvalidCodepoint(token.to_string())));
            }
        };
        self.expect(":")?;
        Ok(codepoint)
    }

    /// Exactly one character between single quotes
    fn quoted_codepoint(&mut self) -> Result<Codepoint, ParseError> {
        let rest = self.rest();
        let mut chars = rest.char_indices().skip(1);
        match (chars.next(), chars.next()) {
            (Some((_, c)), Some((end, '\''))) => {
                self.pos += end + 1;
                Ok(c as Codepoint)
            }
            _ => {
                let len = rest.find(':').unwrap_or(rest.len());
                let literal = rest[..len].trim_end().to_string();
                Err(self.error(ParseErrorKind::InvalidCodepoint(literal)))
            }
        }
    }

    /// Attributes after the codepoint, in their fixed order
    fn glyph(&mut self) -> Result<Glyph, ParseError> {
        let x = self.named_int("x")?;
        self.expect(",")?;
        let y = self.named_int("y")?;
        self.expect(",")?;
        let width = self.named_int("width")?;
        self.expect(",")?;
        let height = self.named_int("height")?;
        self.expect(",")?;
        let x_offset = self.named_int("xoffset")?;
        self.expect(",")?;
        let y_offset = self.named_int("yoffset")?;
        self.expect(",")?;
        let advance = self.named_int("advance")?;
        self.expect_end()?;
        Ok(Glyph::new(x, y, width, height, x_offset, y_offset, advance))
    }
}

fn is_valid_codepoint(value: u32) -> bool {
    value <= MAX_CODEPOINT && char::from_u32(value).is_some()
}
