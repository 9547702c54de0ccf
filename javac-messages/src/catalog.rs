//! An indexed, read-only collection of parsed messages.
//!
//! A `Catalog` is what downstream layers hold on to: it is parsed once, never
//! mutated, and can be shared freely between readers.

use std::{
    collections::{BTreeMap, HashMap},
    io::{BufRead, Write},
    path::Path,
};

use crate::{
    diagnostics::Diagnostic,
    error::Error,
    options::ParseOptions,
    parser::{Parsed, Parser},
    source::read_source_text,
    types::{Message, MessageRecord},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    messages: Vec<Message>,
    index: HashMap<String, usize>,
    diagnostics: Vec<Diagnostic>,
}

impl From<Parsed> for Catalog {
    fn from(parsed: Parsed) -> Self {
        let mut catalog = Catalog::from_messages(parsed.messages);
        catalog.diagnostics = parsed.diagnostics;
        catalog
    }
}

impl Catalog {
    /// Builds a catalog from messages in file order.
    ///
    /// If a name occurs twice, lookups by name find the first occurrence.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        let mut index = HashMap::with_capacity(messages.len());
        for (position, message) in messages.iter().enumerate() {
            index.entry(message.name().to_string()).or_insert(position);
        }
        Catalog {
            messages,
            index,
            diagnostics: Vec::new(),
        }
    }

    /// Parses a catalog from text.
    pub fn parse_str(text: &str, options: &ParseOptions) -> Result<Self, Error> {
        let parsed = Parser::new(text.lines(), options).parse()?;
        Ok(Catalog::from(parsed))
    }

    /// Parses a catalog from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R, options: &ParseOptions) -> Result<Self, Error> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        let parsed = Parser::new(lines.into_iter(), options).parse()?;
        Ok(Catalog::from(parsed))
    }

    /// Parses the file at `path`, naming it after its file name unless
    /// `options` already names the source.
    pub fn read_from<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = read_source_text(path)?;

        let options = match (&options.source_name, path.file_name()) {
            (None, Some(file_name)) => options
                .clone()
                .with_source_name(file_name.to_string_lossy()),
            _ => options.clone(),
        };
        Catalog::parse_str(&text, &options)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Recoverable defects recorded while parsing.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn get(&self, name: &str) -> Option<&Message> {
        self.position(name).map(|position| &self.messages[position])
    }

    /// File-order position of the named message.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// The message after `name`, wrapping around to the first.
    pub fn next(&self, name: &str) -> Result<&Message, Error> {
        self.offset(name, 1)
    }

    /// The message before `name`, wrapping around to the last.
    pub fn previous(&self, name: &str) -> Result<&Message, Error> {
        self.offset(name, self.messages.len().saturating_sub(1))
    }

    fn offset(&self, name: &str, step: usize) -> Result<&Message, Error> {
        let position = self
            .position(name)
            .ok_or_else(|| Error::UnknownMessage(name.to_string()))?;
        Ok(&self.messages[(position + step) % self.messages.len()])
    }

    /// Only the `compiler.err.*` messages.
    pub fn errors(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().filter(|m| m.is_error_message())
    }

    /// Number of messages per level.
    pub fn by_level(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for message in &self.messages {
            *counts.entry(message.level().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// How often each placeholder type occurs, counting every distinct
    /// placeholder of every message once. Untyped placeholders count under
    /// `None`.
    pub fn placeholder_type_counts(&self) -> BTreeMap<Option<String>, usize> {
        let mut counts = BTreeMap::new();
        for placeholder in self.messages.iter().flat_map(Message::placeholders) {
            *counts.entry(placeholder.type_name.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Rows for persistence, in file order.
    pub fn records(&self) -> Vec<MessageRecord> {
        self.messages.iter().map(Message::record).collect()
    }

    /// Writes all messages as a pretty-printed JSON array.
    pub fn to_json_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(writer, &self.messages).map_err(Error::Serialize)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::io::Cursor;

    const SAMPLE: &str = indoc! {r"
        # 0: symbol
        compiler.err.first=\
            first {0}

        compiler.warn.second=\
            second {0} and {1}

        # 0: type, 1: symbol
        compiler.misc.third=\
            third {1} {0}
    "};

    fn catalog() -> Catalog {
        Catalog::parse_str(SAMPLE, &ParseOptions::new().with_log_diagnostics(false)).unwrap()
    }

    #[test]
    fn test_lookup_and_order() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.position("compiler.warn.second"), Some(1));
        assert_eq!(
            catalog.get("compiler.misc.third").map(|m| m.to_string()),
            Some("third {1} {0}".to_string())
        );
        assert!(catalog.get("compiler.err.missing").is_none());
    }

    #[test]
    fn test_next_and_previous_wrap_around() {
        let catalog = catalog();
        assert_eq!(catalog.next("compiler.err.first").unwrap().name(), "compiler.warn.second");
        assert_eq!(catalog.next("compiler.misc.third").unwrap().name(), "compiler.err.first");
        assert_eq!(catalog.previous("compiler.err.first").unwrap().name(), "compiler.misc.third");
        assert_eq!(catalog.previous("compiler.warn.second").unwrap().name(), "compiler.err.first");
        assert!(matches!(
            catalog.next("nope"),
            Err(Error::UnknownMessage(name)) if name == "nope"
        ));
    }

    #[test]
    fn test_errors_and_levels() {
        let catalog = catalog();
        let errors: Vec<_> = catalog.errors().map(Message::name).collect();
        assert_eq!(errors, vec!["compiler.err.first"]);

        let levels = catalog.by_level();
        assert_eq!(levels.get("err"), Some(&1));
        assert_eq!(levels.get("warn"), Some(&1));
        assert_eq!(levels.get("misc"), Some(&1));
    }

    #[test]
    fn test_placeholder_type_counts() {
        let counts = catalog().placeholder_type_counts();
        assert_eq!(counts.get(&Some("symbol".to_string())), Some(&2));
        assert_eq!(counts.get(&Some("type".to_string())), Some(&1));
        assert_eq!(counts.get(&None), Some(&2));
    }

    #[test]
    fn test_diagnostics_are_kept() {
        let catalog = catalog();
        assert_eq!(catalog.diagnostics().len(), 2);
        assert!(
            catalog
                .diagnostics()
                .iter()
                .all(|d| d.message_name == "compiler.warn.second")
        );
    }

    #[test]
    fn test_from_reader_matches_parse_str() {
        let options = ParseOptions::new().with_log_diagnostics(false);
        let from_reader = Catalog::from_reader(Cursor::new(SAMPLE), &options).unwrap();
        assert_eq!(from_reader, catalog());
    }

    #[test]
    fn test_records_and_json() {
        let catalog = catalog();
        let records = catalog.records();
        assert_eq!(records[1].id, "compiler.warn.second");
        assert_eq!(records[1].level, "warn");
        assert_eq!(records[1].text, "second {0} and {1}");

        let mut out = Vec::new();
        catalog.to_json_writer(&mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(3));
        assert_eq!(json[0]["name"], "compiler.err.first");
    }

    #[test]
    fn test_first_duplicate_name_wins() {
        let catalog = Catalog::from_messages(vec![
            Message::new("a.b.c", vec![]),
            Message::new("a.b.c", vec![]),
        ]);
        assert_eq!(catalog.position("a.b.c"), Some(0));
        assert_eq!(catalog.len(), 2);
    }
}
