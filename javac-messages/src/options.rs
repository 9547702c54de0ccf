//! Options controlling a parse run.

use crate::reader::DEFAULT_SOURCE_NAME;

/// Parse behavior options for [`crate::parse_with_options`] and the
/// [`crate::Catalog`] loaders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Name used for the source in errors and diagnostics.
    pub source_name: Option<String>,
    /// Whether recoverable defects are also emitted through `tracing`.
    pub log_diagnostics: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            source_name: None,
            log_diagnostics: true,
        }
    }
}

impl ParseOptions {
    /// Creates default parse options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self
    }

    /// Enables/disables diagnostic logging.
    pub fn with_log_diagnostics(mut self, log_diagnostics: bool) -> Self {
        self.log_diagnostics = log_diagnostics;
        self
    }

    /// The source name, or `<input>` when none was set.
    pub fn source_name(&self) -> &str {
        self.source_name.as_deref().unwrap_or(DEFAULT_SOURCE_NAME)
    }
}
