//! Interpretation of the stylized comments that declare placeholder types.
//!
//! javac's `compiler.properties` describes placeholders in the comment block
//! right above a message. The last comment line declares types:
//!
//! ```text
//! # 0: symbol kind, 1: name, 2: message segment (reason)
//! ```
//!
//! Earlier lines may describe placeholders in long form:
//!
//! ```text
//! # {0} - package in which the invisible class is declared
//! # {1} - module in which {0} is declared
//! # 0: symbol, 1: symbol
//! ```
//!
//! And some comment blocks are not declarations at all:
//!
//! ```text
//! # TODO 308: make a better error message
//! ```
//!
//! Interpretation is best-effort and all-or-nothing per message: anything that
//! does not look like a declaration yields no placeholders and an [`Issue`].

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{diagnostics::Issue, types::Placeholder};

lazy_static! {
    static ref LONG_COMMENT_REGEX: Regex = Regex::new(r"^#\s*\{(\d+)\}\s*-\s*(.*)$").unwrap();
}

/// Placeholders declared by a comment block, plus what went wrong reading it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub placeholders: BTreeMap<usize, Placeholder>,
    pub issues: Vec<Issue>,
}

impl Annotation {
    fn rejected(mut self, issue: Issue) -> Self {
        self.placeholders.clear();
        self.issues.push(issue);
        self
    }

    pub fn get(&self, index: usize) -> Option<&Placeholder> {
        self.placeholders.get(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.placeholders.is_empty()
    }
}

/// Interprets the comment lines directly above a message.
pub fn parse_annotation<S: AsRef<str>>(lines: &[S]) -> Annotation {
    let annotation = Annotation::default();

    // Only the last line declares types.
    let Some((declaration, preceding)) = lines.split_last() else {
        return annotation;
    };

    let declaration = declaration.as_ref();
    let body = declaration.strip_prefix('#').unwrap_or(declaration).trim();

    if !body.contains(':') {
        return annotation.rejected(Issue::NotAnAnnotation {
            line: body.to_string(),
        });
    }

    let long_comments = long_comments(preceding);
    let mut annotation = annotation;

    for entry in body.split(',') {
        let Some((index, description)) = entry.trim().split_once(':') else {
            return annotation.rejected(Issue::MalformedAnnotation {
                line: body.to_string(),
            });
        };
        let Ok(index) = index.trim().parse::<usize>() else {
            return annotation.rejected(Issue::MalformedAnnotation {
                line: body.to_string(),
            });
        };

        let (type_name, comment) = split_description(description.trim());
        let placeholder = Placeholder {
            index,
            type_name,
            comment: comment.or_else(|| long_comments.get(&index).cloned()),
        };

        if annotation.placeholders.insert(index, placeholder).is_some() {
            annotation.issues.push(Issue::DuplicateIndex {
                index,
                line: body.to_string(),
            });
        }
    }

    annotation
}

/// Collects `# {n} - text` descriptions.
fn long_comments<S: AsRef<str>>(lines: &[S]) -> BTreeMap<usize, String> {
    lines
        .iter()
        .filter_map(|line| LONG_COMMENT_REGEX.captures(line.as_ref()))
        .filter_map(|caps| {
            let index = caps[1].parse::<usize>().ok()?;
            Some((index, caps[2].trim().to_string()))
        })
        .collect()
}

/// Splits `message segment (feature)` into the type and the parenthetical.
fn split_description(description: &str) -> (Option<String>, Option<String>) {
    if let Some((type_name, comment)) = description
        .strip_suffix(')')
        .and_then(|inner| inner.split_once('('))
    {
        return (non_empty(type_name), non_empty(comment));
    }
    (non_empty(description), None)
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}
