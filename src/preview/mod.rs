//! Live HTML preview of the document.
//!
//! Rendering and sanitizing are collaborators behind the [`Renderer`] and
//! [`Sanitizer`] traits; [`ComrakRenderer`] and [`HtmlSanitizer`] are the
//! defaults.

mod render;
mod sanitize;

pub use render::ComrakRenderer;
pub use sanitize::HtmlSanitizer;

/// Markdown to HTML.
pub trait Renderer {
    fn render(&self, markdown: &str) -> String;
}

/// Untrusted HTML to HTML that is safe to display.
pub trait Sanitizer {
    fn sanitize(&self, html: &str) -> String;
}

/// Render and sanitize in one step.
pub fn render_safe(markdown: &str, renderer: &dyn Renderer, sanitizer: &dyn Sanitizer) -> String {
    sanitizer.sanitize(&renderer.render(markdown))
}

/// Preview pane state.
///
/// The HTML is regenerated each time the preview is shown, not on every edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preview {
    visible: bool,
    html: String,
}

impl Preview {
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// HTML from the last time the preview was shown.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Show or hide the preview, rendering `markdown` when it becomes visible.
    ///
    /// Returns the new visibility.
    pub fn toggle(
        &mut self,
        markdown: &str,
        renderer: &dyn Renderer,
        sanitizer: &dyn Sanitizer,
    ) -> bool {
        if !self.visible {
            self.html = render_safe(markdown, renderer, sanitizer);
        }
        self.visible = !self.visible;
        tracing::debug!(visible = self.visible, "preview toggled");
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Upper;

    impl Renderer for Upper {
        fn render(&self, markdown: &str) -> String {
            format!("<p>{}</p><script>x</script>", markdown.to_uppercase())
        }
    }

    #[test]
    fn test_render_safe_runs_renderer_then_sanitizer() {
        assert_eq!(render_safe("hi", &Upper, &HtmlSanitizer), "<p>HI</p>");
    }

    #[test]
    fn test_toggle_renders_only_when_shown() {
        let mut preview = Preview::default();
        assert!(preview.toggle("a", &Upper, &HtmlSanitizer));
        assert_eq!(preview.html(), "<p>A</p>");

        assert!(!preview.toggle("b", &Upper, &HtmlSanitizer));
        assert_eq!(preview.html(), "<p>A</p>");

        assert!(preview.toggle("c", &Upper, &HtmlSanitizer));
        assert_eq!(preview.html(), "<p>C</p>");
    }

    #[test]
    fn test_comrak_output_is_sanitized() {
        let html = render_safe(
            "hello <img src=x onerror=\"alert(1)\">\n\n<script>alert(2)</script>",
            &ComrakRenderer::default(),
            &HtmlSanitizer,
        );
        assert!(!html.contains("onerror"), "got: {html}");
        assert!(!html.contains("alert(2)"), "got: {html}");
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_comrak_entity_encoded_links_are_sanitized() {
        let html = render_safe(
            "<a href=\"jav&#x61;script:alert(1)\">x</a> and <img/src=x/onerror=alert(1)>",
            &ComrakRenderer::default(),
            &HtmlSanitizer,
        );
        assert!(!html.contains("script:"), "got: {html}");
        assert!(!html.contains("onerror"), "got: {html}");
        assert!(html.contains(">x</a>"), "got: {html}");
    }
}
