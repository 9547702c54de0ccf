use javac_messages::{Catalog, Message};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width values are cut to unless `--full` is given.
pub const TRUNCATE_WIDTH: usize = 50;

/// Which messages `list` prints.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub level: Option<String>,
    pub full: bool,
    pub warnings: bool,
}

/// Cuts `value` to at most `width` terminal columns, marking the cut with
/// `...`.
pub fn truncate(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in value.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// One message as `list` prints it.
pub fn format_entry(message: &Message, full: bool) -> String {
    let text = message.to_string();
    let mut out = format!("{}:", message.name());
    if full {
        for line in text.lines() {
            out.push_str("\n    ");
            out.push_str(line);
        }
    } else {
        let flat = text.split('\n').collect::<Vec<_>>().join(" ");
        out.push_str("\n    ");
        out.push_str(&truncate(&flat, TRUNCATE_WIDTH));
    }
    out
}

/// Print the messages of a catalog, followed by the error totals.
pub fn print_list(catalog: &Catalog, filter: &ListFilter) {
    let messages = catalog
        .iter()
        .filter(|m| filter.level.as_deref().is_none_or(|level| m.level() == level));

    for message in messages {
        println!("{}", format_entry(message, filter.full));
    }

    println!(
        "\n{} error messages ({} total)",
        catalog.errors().count(),
        catalog.len()
    );

    if filter.warnings {
        for diagnostic in catalog.diagnostics() {
            eprintln!("warning: {}", diagnostic);
        }
    }
}

/// One message in detail, with its placeholders.
pub fn format_message(message: &Message) -> String {
    let mut out = String::new();
    out.push_str(&format!("Name: {}\n", message.name()));
    out.push_str(&format!("Level: {}\n", message.level()));
    out.push_str("Text:\n");
    for line in message.to_string().lines() {
        out.push_str(&format!("    {}\n", line));
    }

    let placeholders = message.placeholders();
    out.push_str(&format!("Placeholders: {}", placeholders.len()));
    for placeholder in placeholders {
        let type_name = placeholder.type_name.as_deref().unwrap_or("(untyped)");
        out.push_str(&format!("\n  {}: {}", placeholder, type_name));
        if let Some(comment) = &placeholder.comment {
            out.push_str(&format!(" ({})", comment));
        }
    }
    out
}

/// Which message `show` prints, relative to the named one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Current,
    Next,
    Previous,
}

/// Print the named message, or its neighbor in file order.
pub fn print_show(catalog: &Catalog, name: &str, step: Step) -> Result<(), String> {
    let message = match step {
        Step::Current => catalog
            .get(name)
            .ok_or_else(|| javac_messages::Error::UnknownMessage(name.to_string())),
        Step::Next => catalog.next(name),
        Step::Previous => catalog.previous(name),
    }
    .map_err(|e| e.to_string())?;

    println!("{}", format_message(message));
    Ok(())
}
