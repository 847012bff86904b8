//! Comment stripping
//!
//! Comments are removed before parsing. Newlines inside block comments are
//! kept so that line numbers in later errors still match the original file.

use super::parser::{ParseError, ParseErrorKind};

/// 1-based line number of byte offset `pos` in `text`
pub(crate) fn line_number(text: &str, pos: usize) -> usize {
    text[..pos].bytes().filter(|&b| b == b'\n').count() + 1
}

/// Remove `//` and `/* */` comments.
///
/// Quoted characters such as `'/'` are copied verbatim and never start a
/// comment.
pub(crate) fn strip_comments(text: &str) -> Result<String, ParseError> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];

        if rest.starts_with("/*") {
            let Some(len) = rest[2..].find("*/") else {
                return Err(ParseError {
                    line: line_number(text, pos),
                    kind: ParseErrorKind::UnterminatedComment,
                });
            };
            let comment = &rest[..len + 4];
            out.extend(comment.chars().filter(|&c| c == '\n'));
            pos += comment.len();
        } else if rest.starts_with("//") {
            pos += rest.find('\n').unwrap_or(rest.len());
        } else if bytes[pos] == b'\'' {
            let quoted = quoted_len(rest);
            out.push_str(&rest[..quoted]);
            pos += quoted;
        } else {
            let Some(c) = rest.chars().next() else { break };
            out.push(c);
            pos += c.len_utf8();
        }
    }

    Ok(out)
}

/// Length of a `'c'` literal at the start of `text`, or 1 for a lone quote
fn quoted_len(text: &str) -> usize {
    let mut chars = text.char_indices().skip(1);
    match (chars.next(), chars.next()) {
        (Some((_, c)), Some((end, '\''))) if c != '\n' => end + 1,
        _ => 1,
    }
}
