//! Unordered (`- `) and ordered (`1. `) lists.
//!
//! Both toggles work line by line over the selection, or over the caret's
//! line when nothing is selected. Nesting is expressed with
//! [`INDENT_UNIT`](super::indent::INDENT_UNIT) indentation.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::indent::{INDENT_UNIT, indent_level};
use super::{CaretMode, Replacement, Target};

static UNORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-(?:[^-]|$)").expect("valid unordered item regex"));
static UNORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s?").expect("valid unordered marker regex"));
static ORDERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.").expect("valid ordered item regex"));
static ORDERED_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+\.\s?").expect("valid ordered marker regex"));
static ORDERED_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+\.").expect("valid ordered number regex"));

fn is_unordered_text(text: &str) -> bool {
    let mut items = text.split('\n').filter(|line| !line.is_empty()).peekable();
    items.peek().is_some() && items.all(|line| UNORDERED_ITEM.is_match(line.trim_start()))
}

fn is_ordered_text(text: &str) -> bool {
    text.split('\n')
        .all(|line| ORDERED_ITEM.is_match(line.trim_start()))
}

fn map_lines(text: &str, f: impl FnMut(&str) -> String) -> String {
    text.split('\n').map(f).collect::<Vec<_>>().join("\n")
}

/// Whether every non-empty target line is a `-` item (and there is at least one).
pub fn is_unordered_list(target: &Target<'_>) -> bool {
    is_unordered_text(target.selection_or_current_line())
}

/// Whether every target line starts with `digits.`.
pub fn is_ordered_list(target: &Target<'_>) -> bool {
    is_ordered_text(target.selection_or_current_line())
}

pub fn toggle_unordered_list(target: &Target<'_>) -> Replacement {
    let target = target.line_snapped();
    let text = target.selection();

    if is_unordered_text(text) {
        let snippet = map_lines(text, |line| UNORDERED_MARKER.replace(line, "").into_owned());
        return target.replace(snippet, CaretMode::Start);
    }

    let snippet = if is_ordered_text(text) {
        map_lines(text, |line| {
            let marker = format!("{}-", INDENT_UNIT.repeat(indent_level(line)));
            ORDERED_NUMBER.replace(line, marker.as_str()).into_owned()
        })
    } else {
        map_lines(text, |line| format!("- {line}"))
    };
    target.replace(snippet, CaretMode::End)
}

pub fn toggle_ordered_list(target: &Target<'_>) -> Replacement {
    let target = target.line_snapped();
    let text = target.selection();

    if is_ordered_text(text) {
        let snippet = map_lines(text, |line| ORDERED_MARKER.replace(line, "").into_owned());
        return target.replace(snippet, CaretMode::Start);
    }

    let snippet = if is_unordered_text(text) {
        renumber_unordered(text)
    } else {
        text.split('\n')
            .enumerate()
            .map(|(i, line)| format!("{}. {line}", i + 1))
            .collect::<Vec<_>>()
            .join("\n")
    };
    target.replace(snippet, CaretMode::End)
}

/// Convert `-` items to numbered items, counting each indentation level
/// independently. Blank lines pass through unnumbered.
fn renumber_unordered(text: &str) -> String {
    let mut counters: HashMap<usize, usize> = HashMap::new();
    map_lines(text, |line| {
        if line.is_empty() {
            return String::new();
        }
        let level = indent_level(line);
        let n = counters.entry(level).or_insert(0);
        *n += 1;
        let rest = UNORDERED_MARKER.replace(line, "");
        format!("{}{n}. {rest}", INDENT_UNIT.repeat(level))
    })
}
