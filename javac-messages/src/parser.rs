//! The line-classification state machine that drives a parse.
//!
//! Each top-level logical line is one of four shapes (see [`LineKind`]).
//! Comment lines accumulate until a blank line discards them or a message
//! consumes them as its annotation.

use tracing::warn;

use crate::{
    annotation::parse_annotation,
    diagnostics::{Diagnostic, Issue},
    error::{ParseError, Production},
    options::ParseOptions,
    placeholder::split_components,
    reader::{LineCursor, LogicalLine},
    types::Message,
    value,
};

/// The shape of a top-level logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Starts with `#`.
    Comment,
    /// Empty after trailing whitespace removal.
    Blank,
    /// Starts with an alphabetic character: `key=value`.
    MessageStart,
    /// Anything else, e.g. an indented line outside a value.
    Invalid,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        match line.chars().next() {
            None => LineKind::Blank,
            Some('#') => LineKind::Comment,
            Some(c) if c.is_alphabetic() => LineKind::MessageStart,
            Some(_) => LineKind::Invalid,
        }
    }
}

/// The outcome of a successful parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parsed {
    /// Messages in file order.
    pub messages: Vec<Message>,
    /// Recoverable defects met along the way.
    pub diagnostics: Vec<Diagnostic>,
}

/// State of one parse run.
pub struct Parser<I> {
    cursor: LineCursor<I>,
    comments: Vec<String>,
    parsed: Parsed,
    log_diagnostics: bool,
}

impl<I, S> Parser<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    pub fn new(lines: I, options: &ParseOptions) -> Self {
        Parser {
            cursor: LineCursor::new(lines, options.source_name()),
            comments: Vec::new(),
            parsed: Parsed::default(),
            log_diagnostics: options.log_diagnostics,
        }
    }

    /// Consumes every line of input.
    pub fn parse(mut self) -> Result<Parsed, ParseError> {
        while let Some(line) = self.cursor.current() {
            match LineKind::classify(&line.text) {
                LineKind::Comment => {
                    let comment = line.text.clone();
                    self.comments.push(comment);
                    self.cursor.advance();
                }
                LineKind::Blank => {
                    // Comments only annotate the message right below them.
                    self.comments.clear();
                    self.cursor.advance();
                }
                LineKind::MessageStart => {
                    // The message leaves the cursor on the first line it did
                    // not consume, which may start the next item.
                    let line = line.clone();
                    self.message(&line)?;
                    self.comments.clear();
                }
                LineKind::Invalid => return Err(self.cursor.error(Production::Item, None)),
            }
        }

        Ok(self.parsed)
    }

    /// Parses `key=value`, with or without continuation lines.
    fn message(&mut self, line: &LogicalLine) -> Result<(), ParseError> {
        let Some((name, rest)) = line.text.split_once('=') else {
            return Err(self.cursor.error(
                Production::Message,
                Some("expected `property=` here".to_string()),
            ));
        };
        // A few keys are padded with spaces.
        let name = name.trim();

        // Anything between `=` and a trailing backslash is not part of the value.
        let value = if rest.ends_with('\\') {
            self.cursor.advance();
            value::assemble(&mut self.cursor)?
        } else {
            let value = value::single_line(&self.cursor, rest)?;
            self.cursor.advance();
            value
        };

        let annotation = parse_annotation(self.comments.as_slice());
        let split = split_components(&value, &annotation.placeholders);

        for issue in annotation.issues.into_iter().chain(split.issues) {
            self.report(line.number, name, issue);
        }

        self.parsed.messages.push(Message::new(name, split.components));
        Ok(())
    }

    fn report(&mut self, line_no: usize, message_name: &str, issue: Issue) {
        let diagnostic = Diagnostic {
            filename: self.cursor.source_name().to_string(),
            line_no,
            message_name: message_name.to_string(),
            issue,
        };
        if self.log_diagnostics {
            warn!(
                file = %diagnostic.filename,
                line = diagnostic.line_no,
                key = %diagnostic.message_name,
                "{}",
                diagnostic.issue
            );
        }
        self.parsed.diagnostics.push(diagnostic);
    }
}
