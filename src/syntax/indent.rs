//! Tab / Shift+Tab indentation.
//!
//! Indentation is always [`INDENT_UNIT`] (four spaces). A line's level is its
//! leading whitespace character count divided by four; mixed tab/space input
//! is counted per character.

use super::{CaretMode, Replacement, Target, current_line};

/// One level of indentation.
pub const INDENT_UNIT: &str = "    ";

/// Nesting level of `line`.
pub fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count() / INDENT_UNIT.len()
}

/// The target widened to whole lines: from the start of the line holding
/// `start` to the end of the line holding `end`.
fn full_lines<'a>(target: &Target<'a>) -> Target<'a> {
    let text = target.text();
    let first = current_line(text, target.start());
    let last = current_line(text, target.end());
    Target::new(text, first.from, last.to, target.caret_pos())
}

fn prefix_lines(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Indent by one unit.
///
/// With a selection every touched line is indented. Without one a unit is
/// inserted at the caret, which indents the current line when the caret sits
/// at its start.
pub fn indent(target: &Target<'_>) -> Replacement {
    if target.is_none_selected() {
        let at = Target::caret(target.text(), target.caret_pos());
        return at.replace(INDENT_UNIT, CaretMode::End);
    }
    let lines = full_lines(target);
    lines.replace(prefix_lines(lines.selection(), INDENT_UNIT), CaretMode::End)
}

/// Remove one leading unit from every touched line (the caret's line when
/// nothing is selected). Lines without a full unit are left as they are.
///
/// `None` when no line had anything to remove.
pub fn outdent(target: &Target<'_>) -> Option<Replacement> {
    let lines = if target.is_none_selected() {
        target.line_snapped()
    } else {
        full_lines(target)
    };
    let text = lines.selection();
    if !text.split('\n').any(|line| line.starts_with(INDENT_UNIT)) {
        return None;
    }
    let snippet = text
        .split('\n')
        .map(|line| line.strip_prefix(INDENT_UNIT).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n");
    Some(lines.replace(snippet, CaretMode::Start))
}
