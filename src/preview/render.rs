//! Markdown to HTML with comrak.

use comrak::{Options, markdown_to_html};

use super::Renderer;

/// GFM renderer: tables, strikethrough, autolinks and task lists, with a
/// single newline rendered as a line break.
///
/// Raw HTML is passed through; pair it with a [`Sanitizer`](super::Sanitizer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComrakRenderer {
    hardbreaks: bool,
}

impl Default for ComrakRenderer {
    fn default() -> Self {
        Self { hardbreaks: true }
    }
}

impl ComrakRenderer {
    /// Toggle whether single newlines become `<br />`.
    pub const fn with_hardbreaks(mut self, enabled: bool) -> Self {
        self.hardbreaks = enabled;
        self
    }

    fn create_options(&self) -> Options {
        let mut options = Options::default();

        // Enable GFM extensions
        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;

        options.render.hardbreaks = self.hardbreaks;
        options.render.unsafe_ = true;

        options
    }
}

impl Renderer for ComrakRenderer {
    fn render(&self, markdown: &str) -> String {
        markdown_to_html(markdown, &self.create_options())
    }
}
