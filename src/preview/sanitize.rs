//! Strip script-executing HTML with ammonia.

use ammonia::Builder;

use super::Sanitizer;

/// Allow-list sanitizer for rendered markdown.
///
/// Starts from ammonia's defaults (no scripts, styles, frames or plugins, no
/// event handler attributes, only http/https/mailto and friends as URL
/// schemes after entity decoding) and additionally keeps the attributes
/// comrak emits for task lists, table alignment and code languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlSanitizer;

fn builder() -> Builder<'static> {
    let mut builder = Builder::default();
    builder
        .link_rel(None)
        .add_tags(&["input"])
        .add_tag_attributes("input", &["type", "checked", "disabled"])
        .add_tag_attributes("th", &["align"])
        .add_tag_attributes("td", &["align"])
        .add_tag_attributes("code", &["class"]);
    builder
}

impl Sanitizer for HtmlSanitizer {
    fn sanitize(&self, html: &str) -> String {
        builder().clean(html).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(html: &str) -> String {
        HtmlSanitizer.sanitize(html)
    }

    #[test]
    fn test_keeps_safe_markup() {
        let html = "<p><strong>Hi</strong> <a href=\"https://example.com\">x</a></p>";
        assert_eq!(clean(html), html);
    }

    #[test]
    fn test_removes_script_elements() {
        assert_eq!(clean("<p>a</p><script>alert(1)</script><p>b</p>"), "<p>a</p><p>b</p>");
        assert_eq!(clean("<SCRIPT type=\"x\">\nalert(1)\n</SCRIPT >ok"), "ok");
    }

    #[test]
    fn test_removes_unclosed_frames() {
        let html = clean("<iframe src=\"https://x\"></iframe>rest");
        assert!(!html.contains("iframe"), "got: {html}");
        assert!(html.contains("rest"), "got: {html}");
    }

    #[test]
    fn test_removes_event_handlers() {
        let html = clean("<img src=\"a.png\" onerror=\"alert(1)\" alt='x'>");
        assert!(!html.contains("onerror"), "got: {html}");
        assert!(html.contains("src=\"a.png\""), "got: {html}");
        assert_eq!(clean("<b onclick=go()>x</b>"), "<b>x</b>");
    }

    #[test]
    fn test_removes_handlers_separated_by_slashes() {
        let html = clean("<img/src=x/onerror=alert(1)>");
        assert!(!html.contains("onerror"), "got: {html}");
        assert!(!html.contains("alert"), "got: {html}");
    }

    #[test]
    fn test_neutralizes_script_urls() {
        for html in [
            "<a href=\"javascript:alert(1)\">x</a>",
            "<a href=' JavaScript:void(0)'>x</a>",
            "<a href=\"jav&#x61;script:alert(1)\">x</a>",
            "<a href=\"&#106;avascript:alert(1)\">x</a>",
        ] {
            let out = clean(html);
            assert!(!out.to_lowercase().contains("script"), "got: {out}");
            assert!(!out.contains("alert"), "got: {out}");
            assert!(out.contains(">x</a>"), "got: {out}");
        }
    }

    #[test]
    fn test_removes_svg_xlink_script_urls() {
        let html = clean(
            "<svg><a xlink:href=\"&#106;avascript:alert(1)\"><text>x</text></a></svg>",
        );
        assert!(!html.contains("avascript"), "got: {html}");
        assert!(!html.contains("alert"), "got: {html}");
    }

    #[test]
    fn test_keeps_task_list_checkboxes() {
        let html = clean("<li><input type=\"checkbox\" checked=\"\" disabled=\"\" /> done</li>");
        assert!(html.contains("type=\"checkbox\""), "got: {html}");
        assert!(html.contains("checked"), "got: {html}");
    }
}
