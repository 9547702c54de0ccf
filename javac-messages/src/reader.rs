//! Logical line reconstruction.
//!
//! A logical line is a physical line with its trailing whitespace removed and
//! every `\uXXXX` escape decoded. No other escape is touched here; value
//! escapes belong to [`crate::value`].

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::error::{ParseError, Production};

lazy_static! {
    static ref UNICODE_ESCAPE_REGEX: Regex = Regex::new(
        r"\\u([dD][89abAB][0-9a-fA-F]{2})\\u([dD][c-fC-F][0-9a-fA-F]{2})|\\u([0-9a-fA-F]{4})"
    )
    .unwrap();
}

/// Name used in diagnostics when the caller does not name the source.
pub const DEFAULT_SOURCE_NAME: &str = "<input>";

/// One logical line together with its 1-based physical line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalLine {
    pub number: usize,
    pub text: String,
}

/// Decodes every `\uXXXX` escape in `line`.
///
/// A high surrogate directly followed by an escaped low surrogate combines into
/// one code point. Escapes that do not denote a scalar value (such as a lone
/// surrogate) and malformed escapes are left as literal text.
pub fn decode_unicode_escapes(line: &str) -> Cow<'_, str> {
    UNICODE_ESCAPE_REGEX.replace_all(line, |caps: &Captures| {
        let hex = |i: usize| {
            caps.get(i)
                .and_then(|m| u32::from_str_radix(m.as_str(), 16).ok())
        };
        let code_point = match (hex(1), hex(2), hex(3)) {
            (Some(high), Some(low), _) => Some(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)),
            (_, _, single) => single,
        };
        code_point
            .and_then(char::from_u32)
            .map_or_else(|| caps[0].to_string(), String::from)
    })
}

/// Turns raw text lines into [`LogicalLine`]s, numbering them from 1.
pub struct LogicalLines<I> {
    lines: I,
    line_no: usize,
}

impl<I> LogicalLines<I> {
    pub fn new(lines: I) -> Self {
        LogicalLines { lines, line_no: 0 }
    }
}

impl<I, S> Iterator for LogicalLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = LogicalLine;

    fn next(&mut self) -> Option<Self::Item> {
        let raw = self.lines.next()?;
        self.line_no += 1;
        let text = decode_unicode_escapes(raw.as_ref().trim_end()).into_owned();
        Some(LogicalLine {
            number: self.line_no,
            text,
        })
    }
}

/// A one-line lookahead over [`LogicalLines`], shared by the parser driver and
/// the value assembler.
///
/// `current()` returns `None` once the input is exhausted.
pub struct LineCursor<I> {
    lines: LogicalLines<I>,
    current: Option<LogicalLine>,
    last_line_no: usize,
    source_name: String,
}

impl<I, S> LineCursor<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I, source_name: impl Into<String>) -> Self {
        let mut lines = LogicalLines::new(lines);
        let current = lines.next();
        LineCursor {
            last_line_no: current.as_ref().map_or(0, |line| line.number),
            lines,
            current,
            source_name: source_name.into(),
        }
    }

    pub fn current(&self) -> Option<&LogicalLine> {
        self.current.as_ref()
    }

    /// Moves to the next logical line.
    pub fn advance(&mut self) {
        self.current = self.lines.next();
        if let Some(line) = &self.current {
            self.last_line_no = line.number;
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Builds a [`ParseError`] pointing at the current line (or at the last
    /// line read, once the input is exhausted).
    pub fn error(&self, production: Production, message: Option<String>) -> ParseError {
        let (line_no, line) = match &self.current {
            Some(line) => (line.number, line.text.clone()),
            None => (self.last_line_no, String::new()),
        };
        ParseError {
            filename: self.source_name.clone(),
            line_no,
            line,
            production,
            message: message.unwrap_or_else(|| "Parse error".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_whitespace_is_stripped() {
        let lines: Vec<_> = LogicalLines::new(["abc   ", "def\t\r\n", "  ghi"].iter()).collect();
        assert_eq!(lines[0].text, "abc");
        assert_eq!(lines[1].text, "def");
        assert_eq!(lines[2].text, "  ghi");
        assert_eq!(
            lines.iter().map(|l| l.number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_unicode_escape_decodes_to_one_char() {
        assert_eq!(decode_unicode_escapes(r"error:\u0020"), "error: ");
        assert_eq!(decode_unicode_escapes(r"caf\u00e9"), "caf\u{e9}");
        assert_eq!(
            decode_unicode_escapes(r"\u00E9\u00e9"),
            "\u{e9}\u{e9}"
        );
    }

    #[test]
    fn test_escaped_backslash_is_produced_verbatim() {
        let decoded = decode_unicode_escapes(r"a\u005cn");
        assert_eq!(decoded, "a\\n");
    }

    #[test]
    fn test_escape_decoded_after_trailing_whitespace_strip() {
        let raw = r"    error:\u0020   ";
        let lines: Vec<_> = LogicalLines::new([raw].into_iter()).collect();
        assert_eq!(lines[0].text, "    error: ");
    }

    #[test]
    fn test_malformed_escape_is_left_literal() {
        assert_eq!(decode_unicode_escapes(r"\u12"), r"\u12");
        assert_eq!(decode_unicode_escapes(r"\uzzzz"), r"\uzzzz");
    }

    #[test]
    fn test_surrogate_pair_combines() {
        let raw = r"\ud83d\ude00";
        assert_eq!(decode_unicode_escapes(raw), "\u{1f600}");
    }

    #[test]
    fn test_lone_surrogate_is_left_literal() {
        let raw = r"\ud83d!";
        assert_eq!(decode_unicode_escapes(raw), raw);
    }

    #[test]
    fn test_cursor_signals_end_of_input() {
        let mut cursor = LineCursor::new(["a=b"].iter(), DEFAULT_SOURCE_NAME);
        assert_eq!(cursor.current().map(|l| l.number), Some(1));
        cursor.advance();
        assert!(cursor.current().is_none());
        let error = cursor.error(Production::Value, None);
        assert_eq!(error.line_no, 1);
        assert_eq!(error.line, "");
    }

    #[test]
    fn test_cursor_error_points_at_current_line() {
        let mut cursor = LineCursor::new(["# c", " bad"].iter(), "x.properties");
        cursor.advance();
        let error = cursor.error(Production::Item, None);
        assert_eq!(error.filename, "x.properties");
        assert_eq!(error.line_no, 2);
        assert_eq!(error.line, " bad");
        assert_eq!(error.message, "Parse error");
    }
}
