//! CLI library for testing purposes

pub mod export;
pub mod stats;
pub mod validation;
pub mod verify;
pub mod view;

pub use javac_messages::Catalog;

use javac_messages::ParseOptions;

use crate::validation::validate_file_path;

/// Reads and parses `input` for one command.
///
/// Diagnostics are kept on the catalog rather than logged; commands decide
/// whether to show them.
pub fn read_catalog(input: &str) -> Result<Catalog, String> {
    validate_file_path(input)?;
    let options = ParseOptions::new().with_log_diagnostics(false);
    Catalog::read_from(input, &options).map_err(|e| e.to_string())
}
