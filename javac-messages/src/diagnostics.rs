//! Recoverable annotation defects.
//!
//! None of these abort a parse. The affected message keeps its text but loses
//! some or all placeholder metadata, and the defect is reported here.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// What went wrong while interpreting annotations for one message.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// The last comment line has no `:` at all; it is prose, not a declaration.
    NotAnAnnotation { line: String },
    /// A declaration entry lacks `:` or its index is not a number.
    MalformedAnnotation { line: String },
    /// The same index is declared twice; the later declaration was kept.
    DuplicateIndex { index: usize, line: String },
    /// A `{n}` in the value has no matching declaration.
    UnresolvedPlaceholder { index: usize },
}

impl Display for Issue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Issue::NotAnAnnotation { line } => {
                write!(f, "not interpreting this as an annotation: {line}")
            }
            Issue::MalformedAnnotation { line } => {
                write!(f, "ignoring malformed annotation line: {line}")
            }
            Issue::DuplicateIndex { index, line } => {
                write!(f, "duplicate index {index} in annotation line: {line}")
            }
            Issue::UnresolvedPlaceholder { index } => {
                write!(f, "could not find a declaration for placeholder {{{index}}}")
            }
        }
    }
}

/// An [`Issue`] located in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Diagnostic {
    pub filename: String,
    /// 1-based line of the `key=` line of the affected message.
    pub line_no: usize,
    /// Name of the affected message.
    pub message_name: String,
    pub issue: Issue,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.filename, self.line_no, self.message_name, self.issue
        )
    }
}
