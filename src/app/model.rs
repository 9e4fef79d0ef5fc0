use crate::editor::Session;
use crate::options::{Control, Options};
use crate::preview::{ComrakRenderer, HtmlSanitizer, Preview, Renderer, Sanitizer};

/// A toolbar button as the host should draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolbarItem {
    pub control: Control,
    /// The construct already wraps the selection.
    pub active: bool,
    /// The control can act right now (undo/redo availability).
    pub enabled: bool,
}

/// The complete editor state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// The document being edited
    pub session: Session,
    /// Which toolbar controls are offered
    pub options: Options,
    /// Preview pane state
    pub preview: Preview,
    /// Whether the editing surface has focus (Tab indents only when focused)
    pub focused: bool,
    renderer: Box<dyn Renderer>,
    sanitizer: Box<dyn Sanitizer>,
}

impl Model {
    /// Model with the default comrak renderer and HTML sanitizer.
    pub fn new(session: Session, options: Options) -> Self {
        Self {
            session,
            options,
            preview: Preview::default(),
            focused: false,
            renderer: Box::new(ComrakRenderer::default()),
            sanitizer: Box::new(HtmlSanitizer),
        }
    }

    /// Replace the markdown renderer.
    pub fn with_renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Replace the HTML sanitizer.
    pub fn with_sanitizer(mut self, sanitizer: impl Sanitizer + 'static) -> Self {
        self.sanitizer = Box::new(sanitizer);
        self
    }

    pub(super) fn toggle_preview(&mut self) -> bool {
        let text = self.session.text();
        self.preview
            .toggle(&text, self.renderer.as_ref(), self.sanitizer.as_ref())
    }

    /// Enabled toolbar controls with their current state.
    pub fn toolbar(&self) -> Vec<ToolbarItem> {
        self.options
            .toolbar
            .controls()
            .into_iter()
            .map(|control| match control {
                Control::Construct(construct) => ToolbarItem {
                    control,
                    active: self.session.is_active(construct),
                    enabled: true,
                },
                Control::Undo => ToolbarItem {
                    control,
                    active: false,
                    enabled: self.session.can_undo(),
                },
                Control::Redo => ToolbarItem {
                    control,
                    active: false,
                    enabled: self.session.can_redo(),
                },
            })
            .collect()
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("session", &self.session)
            .field("options", &self.options)
            .field("preview", &self.preview)
            .field("focused", &self.focused)
            .finish_non_exhaustive()
    }
}
