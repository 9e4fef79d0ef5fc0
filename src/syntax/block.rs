//! Blockquotes, code (fenced and inline), and horizontal dividers.

use std::sync::LazyLock;

use regex::Regex;

use super::{CaretMode, Replacement, Target};

static QUOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>[ \t]?").expect("valid quote regex"));
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```[\w+#.-]*\n(.*)\n```$").expect("valid code fence regex")
});
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`[^`]+`").expect("valid inline code regex"));

const DIVIDER: &str = "---";
const DIVIDER_SNIPPET: &str = "\n---\n\n";

/// Whether the target (or the caret's line) starts with `>`.
pub fn is_quote(target: &Target<'_>) -> bool {
    QUOTE.is_match(target.selection_or_current_line())
}

pub fn toggle_quote(target: &Target<'_>) -> Replacement {
    let target = target.line_snapped();
    let text = target.selection();
    if QUOTE.is_match(text) {
        target.replace(QUOTE.replace(text, ""), CaretMode::Start)
    } else {
        target.replace(target.wrap("> ", "", false), CaretMode::End)
    }
}

/// Whether the selection is exactly one fenced code block.
pub fn is_code_block(target: &Target<'_>) -> bool {
    CODE_FENCE.is_match(target.selection())
}

/// Fence the selection with `language` as the info string, or unfence it.
///
/// `None` if the fence matched but its body could not be captured.
pub fn toggle_code_block(target: &Target<'_>, language: &str) -> Option<Replacement> {
    let text = target.selection();
    if !CODE_FENCE.is_match(text) {
        let snippet = format!("```{language}\n{text}\n```");
        return Some(target.replace(snippet, CaretMode::End));
    }
    let body = CODE_FENCE.captures(text)?.get(1)?.as_str();
    Some(target.replace(body, CaretMode::Start))
}

/// Whether the selection contains a backtick-delimited span.
pub fn is_inline_code(target: &Target<'_>) -> bool {
    INLINE_CODE.is_match(target.selection())
}

pub fn toggle_inline_code(target: &Target<'_>) -> Replacement {
    if is_inline_code(target) {
        target.replace(target.selection().replace('`', ""), CaretMode::Start)
    } else {
        target.replace(target.wrap("`", "`", false), CaretMode::End)
    }
}

/// Whether the selection is exactly `---`.
pub fn is_divider(target: &Target<'_>) -> bool {
    target.selection() == DIVIDER
}

/// Remove a selected `---`, otherwise insert a divider after the selection.
pub fn toggle_divider(target: &Target<'_>) -> Replacement {
    if is_divider(target) {
        target.replace("", CaretMode::Start)
    } else {
        target.replace(target.wrap("", DIVIDER_SNIPPET, false), CaretMode::End)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all(text: &str) -> Target<'_> {
        Target::select(text, 0..text.len())
    }

    #[test]
    fn test_insert_blockquote() {
        assert_eq!(toggle_quote(&all("Hello")).snippet, "> Hello");
    }

    #[test]
    fn test_is_blockquote() {
        assert!(is_quote(&all("> Hello")));
        assert!(is_quote(&all(">Hello")));
        assert!(!is_quote(&all("a > b")));
    }

    #[test]
    fn test_remove_blockquote() {
        assert_eq!(toggle_quote(&all("> Hello")).snippet, "Hello");
        assert_eq!(toggle_quote(&all(">Hello")).snippet, "Hello");
    }

    #[test]
    fn test_remove_blockquote_keeps_following_newline() {
        assert_eq!(toggle_quote(&all(">\nfoo")).snippet, "\nfoo");
        assert_eq!(toggle_quote(&all(">\tfoo")).snippet, "foo");
    }

    #[test]
    fn test_quote_collapsed_uses_current_line() {
        let text = "a\nquote me\nb";
        let rep = toggle_quote(&Target::caret(text, 3));
        assert_eq!(rep.apply(text).0, "a\n> quote me\nb");
    }

    #[test]
    fn test_insert_codeblock() {
        assert_eq!(
            toggle_code_block(&all("Hello"), "ts").unwrap().snippet,
            "```ts\nHello\n```"
        );
    }

    #[test]
    fn test_is_codeblock() {
        assert!(is_code_block(&all("```ts\nHello\n```")));
        assert!(is_code_block(&all("```\nHello\n```")));
        assert!(!is_code_block(&all("```ts Hello```")));
    }

    #[test]
    fn test_remove_codeblock() {
        assert_eq!(
            toggle_code_block(&all("```ts\nHello\n```"), "ts").unwrap().snippet,
            "Hello"
        );
    }

    #[test]
    fn test_remove_multiline_codeblock() {
        let text = "```rust\nfn a() {}\n\nfn b() {}\n```";
        assert!(is_code_block(&all(text)));
        assert_eq!(
            toggle_code_block(&all(text), "ts").unwrap().snippet,
            "fn a() {}\n\nfn b() {}"
        );
    }

    #[test]
    fn test_empty_codeblock_round_trips() {
        let rep = toggle_code_block(&Target::caret("", 0), "ts").unwrap();
        assert_eq!(rep.snippet, "```ts\n\n```");
        assert_eq!(toggle_code_block(&all(&rep.snippet), "ts").unwrap().snippet, "");
    }

    #[test]
    fn test_insert_inline_code() {
        assert_eq!(toggle_inline_code(&all("Hello")).snippet, "`Hello`");
    }

    #[test]
    fn test_is_inline_code() {
        assert!(is_inline_code(&all("`Hello`")));
        assert!(is_inline_code(&all("call `f()` now")));
        assert!(!is_inline_code(&all("``")));
    }

    #[test]
    fn test_remove_inline_code_strips_all_backticks() {
        assert_eq!(toggle_inline_code(&all("`Hello`")).snippet, "Hello");
        assert_eq!(toggle_inline_code(&all("`a` and `b`")).snippet, "a and b");
    }

    #[test]
    fn test_insert_divider_on_empty_selection() {
        let rep = toggle_divider(&Target::caret("", 0));
        assert_eq!(rep.snippet, "\n---\n\n");
        assert_eq!(rep.caret, CaretMode::End);
    }

    #[test]
    fn test_divider_is_appended_after_selection_not_wrapped_around_it() {
        let snippet = toggle_divider(&all("intro")).snippet;
        assert_eq!(snippet, "intro\n---\n\n");
        assert_ne!(snippet, "\n---intro\n\n");
    }

    #[test]
    fn test_remove_divider() {
        assert!(is_divider(&all("---")));
        assert_eq!(toggle_divider(&all("---")).snippet, "");
        assert!(!is_divider(&all("----")));
    }
}
