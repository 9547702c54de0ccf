//! Splitting message values into literal text and `{n}` placeholders.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    diagnostics::Issue,
    types::{Component, Placeholder},
};

lazy_static! {
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{(\d+)\}").unwrap();
}

/// Components of one value, plus the placeholders no declaration covered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Split {
    pub components: Vec<Component>,
    pub issues: Vec<Issue>,
}

/// Splits `text` into components, typing each `{n}` from `declared`.
///
/// Literal spans are only emitted when non-empty, so two text components are
/// never adjacent. Every occurrence of the same index yields the same
/// placeholder.
pub fn split_components(text: &str, declared: &BTreeMap<usize, Placeholder>) -> Split {
    let mut split = Split::default();
    let mut seen: BTreeMap<usize, Placeholder> = BTreeMap::new();
    let mut last_fencepost = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(text) {
        // An index too large for usize is not a placeholder; it stays in the text.
        let (Some(whole), Ok(index)) = (caps.get(0), caps[1].parse::<usize>()) else {
            continue;
        };

        let placeholder = seen
            .entry(index)
            .or_insert_with(|| match declared.get(&index) {
                Some(placeholder) => placeholder.clone(),
                None => {
                    split.issues.push(Issue::UnresolvedPlaceholder { index });
                    Placeholder::untyped(index)
                }
            })
            .clone();

        push_text(&mut split.components, &text[last_fencepost..whole.start()]);
        split.components.push(Component::Placeholder(placeholder));
        last_fencepost = whole.end();
    }

    push_text(&mut split.components, &text[last_fencepost..]);
    split
}

fn push_text(components: &mut Vec<Component>, text: &str) {
    if !text.is_empty() {
        components.push(Component::Text(text.to_string()));
    }
}
