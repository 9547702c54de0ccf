use javac_messages::Catalog;
use serde_json::json;
use std::collections::BTreeMap;

const UNTYPED: &str = "(untyped)";

#[derive(Default)]
struct PlaceholderStats {
    total: usize,
    typed: usize,
    by_type: BTreeMap<String, usize>,
}

fn accumulate(catalog: &Catalog) -> PlaceholderStats {
    let mut stats = PlaceholderStats::default();
    for (type_name, count) in catalog.placeholder_type_counts() {
        stats.total += count;
        if type_name.is_some() {
            stats.typed += count;
        }
        let key = type_name.unwrap_or_else(|| UNTYPED.to_string());
        *stats.by_type.entry(key).or_insert(0) += count;
    }
    stats
}

fn typed_percent(stats: &PlaceholderStats) -> f64 {
    if stats.total == 0 {
        100.0
    } else {
        (stats.typed as f64) * 100.0 / (stats.total as f64)
    }
}

/// Statistics as the JSON document `stats --json` prints.
pub fn stats_json(catalog: &Catalog) -> serde_json::Value {
    let stats = accumulate(catalog);
    let percent = typed_percent(&stats);
    json!({
        "summary": {
            "messages": catalog.len(),
            "error_messages": catalog.errors().count(),
            "diagnostics": catalog.diagnostics().len(),
        },
        "levels": catalog.by_level(),
        "placeholders": {
            "total": stats.total,
            "typed": stats.typed,
            "typed_percent": (percent * 100.0).round() / 100.0,
            "by_type": stats.by_type,
        },
    })
}

pub fn print_stats(catalog: &Catalog, json_output: bool) -> Result<(), String> {
    if json_output {
        let body = stats_json(catalog);
        let text = serde_json::to_string_pretty(&body).map_err(|e| e.to_string())?;
        println!("{}", text);
        return Ok(());
    }

    let stats = accumulate(catalog);

    println!("=== Stats ===");
    println!("Messages: {}", catalog.len());
    println!("Error messages: {}", catalog.errors().count());
    println!("Diagnostics: {}", catalog.diagnostics().len());

    println!("\nBy level:");
    for (level, count) in catalog.by_level() {
        println!("  {}: {}", level, count);
    }

    println!("\nPlaceholders: {}", stats.total);
    println!("  Typed: {:.2}%", typed_percent(&stats));
    println!("  By type:");
    for (type_name, count) in &stats.by_type {
        println!("    {}: {}", type_name, count);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use javac_messages::ParseOptions;

    const SAMPLE: &str = "# 0: symbol\ncompiler.err.a=\\\n    {0} and {1}\n\n# 0: symbol\ncompiler.warn.b=\\\n    {0}\n";

    #[test]
    fn test_stats_json_shape() {
        let catalog =
            Catalog::parse_str(SAMPLE, &ParseOptions::new().with_log_diagnostics(false)).unwrap();
        let v = stats_json(&catalog);
        assert_eq!(v["summary"]["messages"], 2);
        assert_eq!(v["summary"]["error_messages"], 1);
        assert_eq!(v["summary"]["diagnostics"], 1);
        assert_eq!(v["levels"]["err"], 1);
        assert_eq!(v["levels"]["warn"], 1);
        assert_eq!(v["placeholders"]["total"], 3);
        assert_eq!(v["placeholders"]["typed"], 2);
        assert_eq!(v["placeholders"]["typed_percent"], 66.67);
        assert_eq!(v["placeholders"]["by_type"]["symbol"], 2);
        assert_eq!(v["placeholders"]["by_type"]["(untyped)"], 1);
    }

    #[test]
    fn test_empty_catalog_is_fully_typed() {
        let v = stats_json(&Catalog::default());
        assert_eq!(v["placeholders"]["total"], 0);
        assert_eq!(v["placeholders"]["typed_percent"], 100.0);
    }
}
