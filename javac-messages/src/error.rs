//! All error types for the javac-messages crate.
//!
//! [`ParseError`] is the only structural failure the parser raises. [`Error`]
//! wraps it together with the I/O, integrity and export failures of the
//! surrounding API.

use std::fmt::{Display, Formatter};

use thiserror::Error;

/// The parsing rule that was active when a [`ParseError`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Production {
    /// Classifying a top-level line (comment, blank line or message start).
    Item,
    /// Splitting a `key=value` line.
    Message,
    /// Assembling and unescaping a property value.
    Value,
}

impl Production {
    pub fn as_str(&self) -> &'static str {
        match self {
            Production::Item => "item",
            Production::Message => "message",
            Production::Value => "value",
        }
    }
}

impl Display for Production {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A structural defect in the properties file. Fatal for the whole parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{filename}:{line_no}: {message}\n\n  {line_no} | {line}\n\n(while parsing {production})")]
pub struct ParseError {
    /// Source name given to the parser, `<input>` when none was given.
    pub filename: String,
    /// 1-based line number of the offending line.
    pub line_no: usize,
    /// The offending logical line.
    pub line: String,
    pub production: Production,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("hashes differ: expected {expected}; got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("unknown message `{0}`")]
    UnknownMessage(String),
}

impl Error {
    /// Creates a checksum mismatch error, normalizing both digests to lowercase.
    pub fn checksum_mismatch(expected: impl AsRef<str>, actual: impl AsRef<str>) -> Self {
        Error::ChecksumMismatch {
            expected: expected.as_ref().to_ascii_lowercase(),
            actual: actual.as_ref().to_ascii_lowercase(),
        }
    }
}
