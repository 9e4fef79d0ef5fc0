//! Markdown syntax toggling.
//!
//! Every construct follows the same shape: inspect a [`Target`], decide
//! whether the construct is already present, and produce a [`Replacement`]
//! that either applies or removes it. Nothing here touches a buffer; the
//! caller splices the replacement in.
//!
//! - [`heading`]: `#` through `######`
//! - [`emphasis`]: bold and italic
//! - [`list`]: unordered and ordered lists, including conversion between them
//! - [`block`]: blockquote, fenced code, inline code, divider
//! - [`link`]: links and images
//! - [`indent`]: Tab / Shift+Tab line indentation

pub mod block;
pub mod emphasis;
pub mod heading;
pub mod indent;
pub mod link;
pub mod list;
mod target;

use serde::{Deserialize, Serialize};

pub use target::{Line, Target, clamp_to_boundary, current_line, lines};

/// Default language tag written after an opening code fence.
pub const DEFAULT_CODE_LANGUAGE: &str = "ts";

/// A markdown construct the toolbar can apply or remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Construct {
    /// Heading of the given level (clamped to 1..=6).
    Heading(u8),
    Bold,
    Italic,
    UnorderedList,
    OrderedList,
    Link,
    Image,
    Blockquote,
    CodeBlock,
    InlineCode,
    Divider,
}

impl Construct {
    /// All constructs in toolbar order.
    pub const ALL: [Self; 16] = [
        Self::Heading(1),
        Self::Heading(2),
        Self::Heading(3),
        Self::Heading(4),
        Self::Heading(5),
        Self::Heading(6),
        Self::Bold,
        Self::Italic,
        Self::UnorderedList,
        Self::OrderedList,
        Self::Blockquote,
        Self::InlineCode,
        Self::CodeBlock,
        Self::Divider,
        Self::Link,
        Self::Image,
    ];
}

/// Where the caret lands after a replacement is spliced in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaretMode {
    /// At the start of the replaced range.
    Start,
    /// Immediately after the inserted snippet.
    End,
}

/// Replace `start..end` of the buffer with `snippet`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub start: usize,
    pub end: usize,
    pub snippet: String,
    pub caret: CaretMode,
}

impl Replacement {
    /// Splice into `text`, returning the new text and caret offset.
    ///
    /// Out-of-range offsets are clamped to the text.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let start = clamp_to_boundary(text, self.start);
        let end = clamp_to_boundary(text, self.end.max(start));
        let mut out = String::with_capacity(text.len() - (end - start) + self.snippet.len());
        out.push_str(&text[..start]);
        out.push_str(&self.snippet);
        out.push_str(&text[end..]);
        let caret = match self.caret {
            CaretMode::Start => start,
            CaretMode::End => start + self.snippet.len(),
        };
        (out, caret)
    }
}

/// Stateless construct detection and toggling.
///
/// The only setting is the language tag written on new code fences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggler {
    code_language: String,
}

impl Default for Toggler {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LANGUAGE)
    }
}

impl Toggler {
    pub fn new(code_language: impl Into<String>) -> Self {
        Self {
            code_language: code_language.into(),
        }
    }

    pub fn code_language(&self) -> &str {
        &self.code_language
    }

    /// Whether `construct` already wraps the target.
    pub fn is_active(&self, construct: Construct, target: &Target<'_>) -> bool {
        match construct {
            Construct::Heading(level) => heading::is_heading(target, level),
            Construct::Bold => emphasis::is_bold(target),
            Construct::Italic => emphasis::is_italic(target),
            Construct::UnorderedList => list::is_unordered_list(target),
            Construct::OrderedList => list::is_ordered_list(target),
            Construct::Link => link::is_link(target),
            Construct::Image => link::is_image(target),
            Construct::Blockquote => block::is_quote(target),
            Construct::CodeBlock => block::is_code_block(target),
            Construct::InlineCode => block::is_inline_code(target),
            Construct::Divider => block::is_divider(target),
        }
    }

    /// Apply `construct` if absent, remove it if present.
    ///
    /// `None` means the buffer must be left untouched.
    pub fn toggle(&self, construct: Construct, target: &Target<'_>) -> Option<Replacement> {
        match construct {
            Construct::Heading(level) => Some(heading::toggle_heading(target, level)),
            Construct::Bold => Some(emphasis::toggle_bold(target)),
            Construct::Italic => Some(emphasis::toggle_italic(target)),
            Construct::UnorderedList => Some(list::toggle_unordered_list(target)),
            Construct::OrderedList => Some(list::toggle_ordered_list(target)),
            Construct::Link => link::toggle_link(target),
            Construct::Image => link::toggle_image(target),
            Construct::Blockquote => Some(block::toggle_quote(target)),
            Construct::CodeBlock => block::toggle_code_block(target, &self.code_language),
            Construct::InlineCode => Some(block::toggle_inline_code(target)),
            Construct::Divider => Some(block::toggle_divider(target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replacement_apply_end_moves_past_snippet() {
        let rep = Replacement {
            start: 6,
            end: 11,
            snippet: "**world**".to_string(),
            caret: CaretMode::End,
        };
        let (text, caret) = rep.apply("hello world!");
        assert_eq!(text, "hello **world**!");
        assert_eq!(caret, 15);
    }

    #[test]
    fn test_replacement_apply_start_keeps_range_start() {
        let rep = Replacement {
            start: 0,
            end: 3,
            snippet: String::new(),
            caret: CaretMode::Start,
        };
        assert_eq!(rep.apply("---\nabc"), ("\nabc".to_string(), 0));
    }

    #[test]
    fn test_replacement_apply_clamps_offsets() {
        let rep = Replacement {
            start: 10,
            end: 20,
            snippet: "!".to_string(),
            caret: CaretMode::End,
        };
        assert_eq!(rep.apply("abc"), ("abc!".to_string(), 4));
    }

    #[test]
    fn test_toggler_dispatches_bold() {
        let toggler = Toggler::default();
        let target = Target::select("Hello", 0..5);
        assert!(!toggler.is_active(Construct::Bold, &target));
        let rep = toggler.toggle(Construct::Bold, &target).unwrap();
        assert_eq!(rep.snippet, "**Hello**");
    }

    #[test]
    fn test_toggler_uses_configured_code_language() {
        let toggler = Toggler::new("rust");
        let target = Target::select("fn main() {}", 0..12);
        let rep = toggler.toggle(Construct::CodeBlock, &target).unwrap();
        assert_eq!(rep.snippet, "```rust\nfn main() {}\n```");
    }

    #[test]
    fn test_construct_serializes_snake_case() {
        let json = serde_json::to_string(&Construct::UnorderedList).unwrap();
        assert_eq!(json, "\"unordered_list\"");
        let heading: Construct = serde_json::from_str("{\"heading\":2}").unwrap();
        assert_eq!(heading, Construct::Heading(2));
    }
}
