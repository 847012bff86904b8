//! Glyph definition files
//!
//! A definition file describes a font's metrics in plain text:
//!
//! ```text
//! // Comments run to the end of the line
//! line_skip: 18
//!
//! /* Block comments may
//!    span several lines */
//! NUL:  x: 0, y: 0, width: 0, height: 0, xoffset: 0, yoffset: 0, advance: 5
//! 'A':  x: 2, y: 2, width: 10, height: 12, xoffset: 0, yoffset: -12, advance: 11
//! 0x20: x: 0, y: 0, width: 0, height: 0, xoffset: 0, yoffset: 0, advance: 4
//! ```
//!
//! Codepoints are written as a quoted character (`'a'`, `'''` for the quote
//! itself), a hexadecimal value (`0x20`) or `NUL`. Each glyph occupies one
//! line and lists its attributes in the fixed order shown above. Spaces and
//! tabs between tokens are ignored.

mod parser;
mod source;
mod writer;

pub use parser::{ParseError, ParseErrorKind, parse_definitions};
pub use writer::{Definitions, format_codepoint, write_definitions};
