//! The parsed message model.
//! The parser produces these; every other layer only reads them.

use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
};

use serde::{Deserialize, Serialize};

/// Name prefix shared by all error-level messages.
pub const ERROR_PREFIX: &str = "compiler.err.";

/// A numbered substitution slot `{n}` inside a message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Placeholder {
    /// The number written between the braces.
    pub index: usize,

    /// Declared type, e.g. `symbol kind` or `message segment`.
    #[serde(rename = "type")]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub type_name: Option<String>,

    /// Free-form description, from a parenthetical or a `# {n} - text` line.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub comment: Option<String>,
}

impl Placeholder {
    /// A placeholder no annotation has described.
    pub fn untyped(index: usize) -> Self {
        Placeholder {
            index,
            type_name: None,
            comment: None,
        }
    }

    pub fn is_typed(&self) -> bool {
        self.type_name.is_some()
    }
}

impl Display for Placeholder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.index)
    }
}

/// One piece of a message template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    Text(String),
    Placeholder(Placeholder),
}

impl Component {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Component::Text(text) => Some(text),
            Component::Placeholder(_) => None,
        }
    }

    pub fn as_placeholder(&self) -> Option<&Placeholder> {
        match self {
            Component::Text(_) => None,
            Component::Placeholder(placeholder) => Some(placeholder),
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Component::Text(text) => f.write_str(text),
            Component::Placeholder(placeholder) => write!(f, "{}", placeholder),
        }
    }
}

/// A message declared in `compiler.properties`.
///
/// Messages are immutable once parsed; the template is exposed read-only
/// through [`Message::components`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Message {
    name: String,
    components: Vec<Component>,
}

impl Message {
    pub fn new(name: impl Into<String>, components: Vec<Component>) -> Self {
        Message {
            name: name.into(),
            components,
        }
    }

    /// The dotted property key, e.g. `compiler.err.cant.resolve`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Literal text and placeholders, in rendering order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// The second dot-separated segment of the name (`err`, `warn`, `misc`, ...).
    pub fn level(&self) -> &str {
        self.name.split('.').nth(1).unwrap_or_default()
    }

    /// Unique placeholders sorted by index.
    ///
    /// Components are stored in template order, which need not follow index
    /// order, so the view is rebuilt here.
    pub fn placeholders(&self) -> Vec<&Placeholder> {
        let mut unique = BTreeMap::new();
        for placeholder in self.components.iter().filter_map(Component::as_placeholder) {
            unique.entry(placeholder.index).or_insert(placeholder);
        }
        unique.into_values().collect()
    }

    pub fn n_placeholders(&self) -> usize {
        self.placeholders().len()
    }

    pub fn placeholder(&self, index: usize) -> Option<&Placeholder> {
        self.components
            .iter()
            .filter_map(Component::as_placeholder)
            .find(|p| p.index == index)
    }

    pub fn is_error_message(&self) -> bool {
        self.name.starts_with(ERROR_PREFIX)
    }

    /// The literal parts of the template, whitespace-normalized and joined by
    /// single spaces. Useful as a search query.
    pub fn literal_text(&self) -> String {
        self.components
            .iter()
            .filter_map(Component::as_text)
            .flat_map(str::split_whitespace)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The row persisted for this message.
    pub fn record(&self) -> MessageRecord {
        MessageRecord {
            id: self.name.clone(),
            level: self.level().to_string(),
            text: self.to_string(),
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for component in &self.components {
            write!(f, "{}", component)?;
        }
        Ok(())
    }
}

/// Flat view of a message for storage: its name, level and rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageRecord {
    pub id: String,
    pub level: String,
    pub text: String,
}
