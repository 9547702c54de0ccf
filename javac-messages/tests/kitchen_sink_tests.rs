use javac_messages::{
    Error, Issue, Message, ParseOptions, Production, parse, parse_file, parse_with_options,
};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

// Various parsing cases, including:
// - multiple, complex placeholder declarations
// - a message with a stray line extender (`\` at the end of its last line)
// - a message with no placeholders
// - a message with a comment, but no placeholder declarations
// - a message with placeholders, but no placeholder declarations
// - a message with a unicode escape
// - placeholders with parenthetical and long-form comments
const EXAMPLE: &str = r"
# 0: symbol kind, 1: name, 2: list of type or message segment, 3: list of type or message segment, 4: symbol kind, 5: type, 6: message segment
compiler.misc.cant.apply.symbol=\
    {0} {1} in {4} {5} cannot be applied to given types\n\
    required: {2}\n\
    found:    {3}\n\
    reason: {6}

# 0: fragment
compiler.err.local.classes.cant.extend.sealed=\
    {0} classes must not extend sealed classes\

compiler.misc.anonymous=\
    anonymous

# TODO 308: make a better error message
compiler.err.this.as.identifier=\
    as of release 8, ''this'' is allowed as the parameter name for the receiver type only\n\
    which has to be the first parameter, and cannot be a lambda parameter

compile.misc.fake.message=syntax error

compiler.misc.bad.const.pool.tag=\
    bad constant pool tag: {0}

## All errors which do not refer to a particular line in the source code are
## preceded by this string.
compiler.err.error=\
    error:\u0020

# 0: message segment (feature), 1: string (found version), 2: string (expected version)
compiler.err.feature.not.supported.in.source=\
   {0} is not supported in -source {1}\n\
    (use -source {2} or higher to enable {0})

# {0} - package in which the invisible class is declared
# {1} - module in which {0} is declared
# 0: symbol, 1: symbol
compiler.misc.not.def.access.does.not.read.from.unnamed=\
    package {0} is declared in module {1}, which is not in the module graph

compiler.err.else.without.if=\
    ''else'' without ''if''

# 0: symbol
compiler.err.icls.cant.have.static.decl.fake=\
    modifier \''static\'' is only allowed in constant variable declarations
";
const N_EXAMPLES: usize = 11;

fn quiet() -> ParseOptions {
    ParseOptions::new()
        .with_source_name("<example>")
        .with_log_diagnostics(false)
}

fn by_name(messages: &[Message]) -> HashMap<&str, &Message> {
    messages.iter().map(|m| (m.name(), m)).collect()
}

fn type_of(message: &Message, position: usize) -> Option<&str> {
    message.placeholders()[position].type_name.as_deref()
}

fn comment_of(message: &Message, position: usize) -> Option<&str> {
    message.placeholders()[position].comment.as_deref()
}

#[test]
fn test_kitchen_sink() {
    let text = EXAMPLE;
    let parsed = parse_with_options(text.lines(), &quiet()).unwrap();
    let messages = parsed.messages;
    assert_eq!(messages.len(), N_EXAMPLES);
    let name_to_message = by_name(&messages);
    assert_eq!(name_to_message.len(), N_EXAMPLES);

    // A simple message renders as its text.
    let m = name_to_message["compiler.misc.anonymous"];
    assert_eq!(m.to_string(), "anonymous");
    assert_eq!(m.n_placeholders(), 0);

    // A single typed placeholder.
    let m = name_to_message["compiler.err.local.classes.cant.extend.sealed"];
    assert_eq!(m.to_string(), "{0} classes must not extend sealed classes");
    assert_eq!(m.n_placeholders(), 1);
    assert_eq!(type_of(m, 0), Some("fragment"));

    // Many placeholders, out of order in the template.
    let m = name_to_message["compiler.misc.cant.apply.symbol"];
    assert_eq!(m.n_placeholders(), 7);
    assert_eq!(type_of(m, 0), Some("symbol kind"));
    assert_eq!(type_of(m, 1), Some("name"));
    assert_eq!(type_of(m, 2), Some("list of type or message segment"));
    assert_eq!(type_of(m, 4), Some("symbol kind"));
    assert_eq!(type_of(m, 5), Some("type"));
    assert_eq!(type_of(m, 6), Some("message segment"));
    assert_eq!(
        m.to_string(),
        "{0} {1} in {4} {5} cannot be applied to given types\nrequired: {2}\nfound:    {3}\nreason: {6}"
    );

    // A unicode escape.
    let m = name_to_message["compiler.err.error"];
    assert_eq!(m.to_string(), "error: ");

    // A comment, but no placeholders.
    let m = name_to_message["compiler.err.this.as.identifier"];
    assert_eq!(m.n_placeholders(), 0);
    assert!(m.to_string().starts_with("as of release 8, 'this' is allowed"));

    // Placeholders, but no declarations.
    let m = name_to_message["compiler.misc.bad.const.pool.tag"];
    assert_eq!(m.n_placeholders(), 1);
    assert_eq!(type_of(m, 0), None);

    // A value on the key line.
    let m = name_to_message["compile.misc.fake.message"];
    assert_eq!(m.to_string(), "syntax error");

    // Parenthetical comments.
    let m = name_to_message["compiler.err.feature.not.supported.in.source"];
    assert_eq!(m.n_placeholders(), 3);
    assert_eq!(type_of(m, 0), Some("message segment"));
    assert_eq!(comment_of(m, 0), Some("feature"));
    assert_eq!(type_of(m, 1), Some("string"));
    assert_eq!(comment_of(m, 1), Some("found version"));
    assert_eq!(type_of(m, 2), Some("string"));
    assert_eq!(comment_of(m, 2), Some("expected version"));

    // Long-form comments above the declaration.
    let m = name_to_message["compiler.misc.not.def.access.does.not.read.from.unnamed"];
    assert_eq!(type_of(m, 0), Some("symbol"));
    assert_eq!(
        comment_of(m, 0),
        Some("package in which the invisible class is declared")
    );
    assert_eq!(type_of(m, 1), Some("symbol"));
    assert_eq!(comment_of(m, 1), Some("module in which {0} is declared"));

    // Single quotes.
    let m = name_to_message["compiler.err.else.without.if"];
    assert_eq!(m.to_string(), "'else' without 'if'");
    let m = name_to_message["compiler.err.icls.cant.have.static.decl.fake"];
    assert_eq!(
        m.to_string(),
        "modifier 'static' is only allowed in constant variable declarations"
    );
}

#[test]
fn test_kitchen_sink_diagnostics() {
    let text = EXAMPLE;
    let parsed = parse_with_options(text.lines(), &quiet()).unwrap();
    let issues: Vec<_> = parsed
        .diagnostics
        .iter()
        .map(|d| (d.message_name.as_str(), &d.issue))
        .collect();

    assert!(issues.contains(&(
        "compiler.err.this.as.identifier",
        &Issue::MalformedAnnotation {
            line: "TODO 308: make a better error message".to_string()
        }
    )));
    assert!(issues.contains(&(
        "compiler.err.error",
        &Issue::NotAnAnnotation {
            line: "# preceded by this string.".to_string()
        }
    )));
    assert!(issues.contains(&(
        "compiler.misc.bad.const.pool.tag",
        &Issue::UnresolvedPlaceholder { index: 0 }
    )));
    assert!(parsed.diagnostics.iter().all(|d| d.filename == "<example>"));
}

#[test]
fn test_every_component_sequence_is_well_formed() {
    let text = EXAMPLE;
    let messages = parse(text.lines(), None).unwrap();
    for message in &messages {
        let components = message.components();
        for pair in components.windows(2) {
            assert!(
                !(pair[0].as_text().is_some() && pair[1].as_text().is_some()),
                "adjacent text in {}",
                message.name()
            );
        }
        assert!(components.iter().all(|c| c.as_text() != Some("")));
        for placeholder in components.iter().filter_map(|c| c.as_placeholder()) {
            assert!(
                message
                    .placeholders()
                    .iter()
                    .any(|p| p.index == placeholder.index)
            );
        }
    }
}

#[test]
fn test_annotation_with_repeated_placeholders() {
    let lines = [
        "# 0: symbol kind, 1: name",
        "compiler.err.already.defined=\\",
        "    {0} {1} is already defined; the {0} {1} clashes",
    ];
    let messages = parse(lines, None).unwrap();
    let m = &messages[0];
    assert_eq!(m.n_placeholders(), 2);
    let types: Vec<_> = m
        .components()
        .iter()
        .filter_map(|c| c.as_placeholder())
        .map(|p| p.type_name.as_deref())
        .collect();
    assert_eq!(
        types,
        vec![Some("symbol kind"), Some("name"), Some("symbol kind"), Some("name")]
    );
}

#[test]
fn test_indented_line_outside_value_fails_with_its_line_number() {
    let lines = ["compiler.misc.a=one", "", "   not a message"];
    let error = parse(lines, Some("compiler.properties")).unwrap_err();
    assert_eq!(error.filename, "compiler.properties");
    assert_eq!(error.line_no, 3);
    assert_eq!(error.line, "   not a message");
    assert_eq!(error.production, Production::Item);
}

#[test]
fn test_no_partial_results_on_failure() {
    let lines = ["compiler.misc.a=one", "compiler.misc.b=\\", r"    bad \z escape"];
    let error = parse(lines, None).unwrap_err();
    assert_eq!(error.filename, "<input>");
    assert_eq!(error.line_no, 3);
    assert_eq!(error.message, r"Unknown escape: \z");
}

#[test]
fn test_reparsing_is_idempotent() {
    let text = EXAMPLE;
    let first = parse(text.lines(), None).unwrap();
    let second = parse(text.lines(), None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_parse_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("compiler.properties");
    fs::write(&path, EXAMPLE).unwrap();

    let messages = parse_file(&path).unwrap();
    assert_eq!(messages.len(), N_EXAMPLES);
}

#[test]
fn test_parse_file_names_errors_after_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.properties");
    fs::write(&path, "compiler.err.no.equals\n").unwrap();

    match parse_file(&path).unwrap_err() {
        Error::Parse(error) => {
            assert_eq!(error.filename, "broken.properties");
            assert_eq!(error.production, Production::Message);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_file_missing_path_is_io_error() {
    let dir = TempDir::new().unwrap();
    let error = parse_file(dir.path().join("missing.properties")).unwrap_err();
    assert!(matches!(error, Error::Io(_)));
}

#[test]
fn test_parse_file_rejects_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.properties");
    fs::write(&path, b"compiler.misc.x=caf\xe9\n").unwrap();
    assert!(matches!(parse_file(&path), Err(Error::Io(_))));
}
