//! Assembly of property values from continuation lines.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::{ParseError, Production},
    reader::LineCursor,
};

lazy_static! {
    static ref QUOTE_RUN_REGEX: Regex = Regex::new("'{2,}").unwrap();
}

/// An escape sequence the legacy format does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownEscape(pub char);

impl std::fmt::Display for UnknownEscape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\\{}", self.0)
    }
}

/// Decodes the value escapes `\n`, `\t`, `\'` and `\"`.
///
/// A backslash at the very end of `chunk` has nothing to escape and is kept.
pub fn decode_escapes(chunk: &str) -> Result<String, UnknownEscape> {
    let mut out = String::with_capacity(chunk.len());
    let mut chars = chunk.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\'') => out.push('\''),
            Some('"') => out.push('"'),
            Some(other) => return Err(UnknownEscape(other)),
            None => out.push('\\'),
        }
    }

    Ok(out)
}

/// Collapses every run of two or more single quotes into one.
pub fn collapse_quotes(value: &str) -> String {
    QUOTE_RUN_REGEX.replace_all(value, "'").into_owned()
}

/// Decodes a value that sits entirely on its key line.
pub(crate) fn single_line<I, S>(cursor: &LineCursor<I>, rest: &str) -> Result<String, ParseError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let decoded = decode_escapes(rest).map_err(|escape| unknown_escape(cursor, escape))?;
    Ok(collapse_quotes(&decoded))
}

/// Reads the continuation lines of a value.
///
/// The cursor must sit on the first continuation line. On return it is on the
/// first line after the value.
pub(crate) fn assemble<I, S>(cursor: &mut LineCursor<I>) -> Result<String, ParseError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let mut value = String::new();

    while let Some(line) = cursor.current() {
        let has_continuation = line.text.ends_with('\\');
        let chunk = line.text.trim_start();
        let chunk = chunk.strip_suffix('\\').unwrap_or(chunk);
        let decoded = match decode_escapes(chunk) {
            Ok(decoded) => decoded,
            Err(escape) => return Err(unknown_escape(&*cursor, escape)),
        };
        value.push_str(&decoded);
        cursor.advance();

        if !has_continuation {
            break;
        }
    }

    // Doubled quotes may straddle a chunk boundary, so collapse once at the end.
    Ok(collapse_quotes(&value))
}

pub(crate) fn unknown_escape<I, S>(cursor: &LineCursor<I>, escape: UnknownEscape) -> ParseError
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    cursor.error(Production::Value, Some(format!("Unknown escape: {escape}")))
}
