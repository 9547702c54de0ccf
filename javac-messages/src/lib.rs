#![forbid(unsafe_code)]
//! Parser for javac's `compiler.properties` message catalog.
//!
//! The file is a loosely specified `key=value` format: values continue over
//! several lines with a trailing backslash, contain numbered placeholders
//! (`{0}`, `{1}`, ...), and the types of those placeholders live only in
//! stylized comments above each message. This crate recovers all of that into
//! a typed model.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use javac_messages::parse_file;
//!
//! let messages = parse_file("compiler.properties")?;
//! for message in messages.iter().filter(|m| m.is_error_message()) {
//!     println!("{}: {} placeholder(s)", message.name(), message.n_placeholders());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Comment dialects
//!
//! - **Declarations**: `# 0: symbol kind, 1: name`
//! - **Parenthetical comments**: `# 0: message segment (feature)`
//! - **Long-form descriptions**: `# {0} - package in which the class is declared`
//!
//! Comments that are none of these (for example `# TODO 308: ...`) are
//! reported as [`Diagnostic`]s and never fail the parse.

pub mod annotation;
pub mod catalog;
pub mod diagnostics;
pub mod error;
pub mod options;
pub mod parser;
pub mod placeholder;
pub mod reader;
pub mod source;
pub mod types;
pub mod value;

use std::path::Path;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::Catalog,
    diagnostics::{Diagnostic, Issue},
    error::{Error, ParseError, Production},
    options::ParseOptions,
    parser::{LineKind, Parsed},
    source::{SourceInfo, sha256_hex, verify_checksum},
    types::{Component, ERROR_PREFIX, Message, MessageRecord, Placeholder},
};

/// Parses an ordered sequence of lines.
///
/// `source_name` only labels errors and diagnostics; it defaults to `<input>`.
pub fn parse<I, S>(lines: I, source_name: Option<&str>) -> Result<Vec<Message>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = ParseOptions::new();
    options.source_name = source_name.map(str::to_string);
    Ok(parse_with_options(lines, &options)?.messages)
}

/// Parses lines, returning the messages together with every diagnostic.
pub fn parse_with_options<I, S>(lines: I, options: &ParseOptions) -> Result<Parsed, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parser::Parser::new(lines.into_iter(), options).parse()
}

/// Parses a whole file's text.
pub fn parse_str(text: &str, source_name: Option<&str>) -> Result<Vec<Message>, ParseError> {
    parse(text.lines(), source_name)
}

/// Reads `path` as UTF-8 and parses it, naming the source after the file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Message>, Error> {
    let path = path.as_ref();
    let text = source::read_source_text(path)?;
    let source_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    Ok(parse_str(&text, source_name.as_deref())?)
}
