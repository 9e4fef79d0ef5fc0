//! The buffer/selection/caret view every toggle operates on.

use std::ops::Range;

use super::{CaretMode, Replacement};

/// One line of the buffer, split on `\n`.
///
/// `from..to` is a half-open byte range into the buffer that excludes the
/// line separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub from: usize,
    pub to: usize,
    pub content: &'a str,
}

/// Split `text` into lines with their byte ranges.
///
/// An empty buffer has one empty line; a trailing `\n` yields a final empty line.
pub fn lines(text: &str) -> Vec<Line<'_>> {
    let mut out = Vec::new();
    let mut from = 0;
    for content in text.split('\n') {
        out.push(Line {
            from,
            to: from + content.len(),
            content,
        });
        from += content.len() + 1;
    }
    out
}

/// The first line whose `[from, to]` contains `caret`.
///
/// A caret beyond the end of the buffer resolves to the last line.
pub fn current_line(text: &str, caret: usize) -> Line<'_> {
    let all = lines(text);
    let last = all[all.len() - 1];
    all.into_iter()
        .find(|line| caret >= line.from && caret <= line.to)
        .unwrap_or(last)
}

/// Clamp `offset` into `text` and round it down to a char boundary.
pub fn clamp_to_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// `(buffer, sel_start, sel_end, caret)` with offsets normalized into the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target<'a> {
    text: &'a str,
    start: usize,
    end: usize,
    caret: usize,
}

impl<'a> Target<'a> {
    /// Build a target. Offsets are clamped to the buffer, ordered, and
    /// floored to UTF-8 boundaries so every toggle stays total.
    pub fn new(text: &'a str, sel_start: usize, sel_end: usize, caret: usize) -> Self {
        let a = clamp_to_boundary(text, sel_start);
        let b = clamp_to_boundary(text, sel_end);
        Self {
            text,
            start: a.min(b),
            end: a.max(b),
            caret: clamp_to_boundary(text, caret),
        }
    }

    /// A target spanning `range` with the caret at its end.
    pub fn select(text: &'a str, range: Range<usize>) -> Self {
        Self::new(text, range.start, range.end, range.end)
    }

    /// A collapsed selection at `caret`.
    pub fn caret(text: &'a str, caret: usize) -> Self {
        Self::new(text, caret, caret, caret)
    }

    pub const fn text(&self) -> &'a str {
        self.text
    }

    pub const fn start(&self) -> usize {
        self.start
    }

    pub const fn end(&self) -> usize {
        self.end
    }

    pub const fn caret_pos(&self) -> usize {
        self.caret
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The selected text, empty when nothing is selected.
    pub fn selection(&self) -> &'a str {
        &self.text[self.start..self.end]
    }

    pub const fn is_none_selected(&self) -> bool {
        self.start == self.end
    }

    /// The line containing the caret.
    pub fn current_line(&self) -> Line<'a> {
        current_line(self.text, self.caret)
    }

    /// The selection if one exists, otherwise the caret's line.
    pub fn selection_or_current_line(&self) -> &'a str {
        if self.is_none_selected() {
            self.current_line().content
        } else {
            self.selection()
        }
    }

    /// With no selection, a copy of this target spanning the whole current line.
    pub fn line_snapped(&self) -> Self {
        if !self.is_none_selected() {
            return *self;
        }
        let line = self.current_line();
        Self {
            text: self.text,
            start: line.from,
            end: line.to,
            caret: self.caret,
        }
    }

    /// `before + (' ' if with_space) + selection + after`.
    pub fn wrap(&self, before: &str, after: &str, with_space: bool) -> String {
        let selection = self.selection();
        let mut out = String::with_capacity(before.len() + selection.len() + after.len() + 1);
        out.push_str(before);
        if with_space {
            out.push(' ');
        }
        out.push_str(selection);
        out.push_str(after);
        out
    }

    /// The selection with `before_len` leading bytes (plus one following
    /// space, if any) and `after_len` trailing bytes removed.
    pub fn unwrap(&self, before_len: usize, after_len: usize) -> String {
        let selection = self.selection();
        let mut from = before_len.min(selection.len());
        if selection.get(from..).is_some_and(|rest| rest.starts_with(' ')) {
            from += 1;
        }
        let to = selection.len().saturating_sub(after_len);
        if from >= to {
            return String::new();
        }
        selection.get(from..to).unwrap_or_default().to_string()
    }

    /// A replacement of this target's range.
    pub fn replace(&self, snippet: impl Into<String>, caret: CaretMode) -> Replacement {
        Replacement {
            start: self.start,
            end: self.end,
            snippet: snippet.into(),
            caret,
        }
    }
}
