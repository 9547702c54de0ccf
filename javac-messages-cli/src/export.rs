use javac_messages::Catalog;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::validation::validate_output_path;

/// Write the catalog as JSON to `output`, or to stdout when no output is given.
pub fn export_catalog(catalog: &Catalog, output: Option<&str>) -> Result<(), String> {
    match output {
        Some(path) => {
            validate_output_path(path)?;
            let file = File::create(path).map_err(|e| format!("Cannot create {}: {}", path, e))?;
            let mut writer = BufWriter::new(file);
            catalog
                .to_json_writer(&mut writer)
                .map_err(|e| e.to_string())?;
            writer.flush().map_err(|e| e.to_string())?;
            eprintln!("Exported {} messages to {}", catalog.len(), path);
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            catalog.to_json_writer(&mut lock).map_err(|e| e.to_string())?;
            writeln!(lock).map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}
