use crate::app::Model;
use crate::syntax::Construct;

/// All possible events and actions in the editor.
///
/// These represent user input from the host UI and external value writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Toolbar
    /// Apply or remove a construct on the selection
    Toggle(Construct),
    /// Step back in history
    Undo,
    /// Step forward in history
    Redo,

    // Indentation
    /// Indent selected lines (Tab)
    Indent,
    /// Outdent selected lines (Shift+Tab)
    Outdent,

    // Host state
    /// Selection and caret reported by the host
    Select {
        start: usize,
        end: usize,
        caret: usize,
    },
    /// Typed input: full new content and caret
    Input { text: String, caret: usize },
    /// Programmatic value write
    Load(String),
    /// Editing surface gained or lost focus
    Focus(bool),

    // Preview
    /// Show or hide the rendered preview
    TogglePreview,
}

/// Pure function that updates the model based on a message.
///
/// All state transitions happen here; observers registered on the session
/// are notified synchronously as part of each committed edit.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::Toggle(construct) => {
            model.session.toggle(construct);
        }
        Message::Undo => {
            model.session.undo();
        }
        Message::Redo => {
            model.session.redo();
        }
        Message::Indent => {
            model.session.indent();
        }
        Message::Outdent => {
            model.session.outdent();
        }
        Message::Select { start, end, caret } => {
            model.session.select(start, end, caret);
        }
        Message::Input { text, caret } => {
            model.session.input(&text, caret);
        }
        Message::Load(text) => {
            model.session.load(&text);
        }
        Message::Focus(focused) => {
            model.focused = focused;
        }
        Message::TogglePreview => {
            // Returning to the editor hands focus back to the editing surface.
            if !model.toggle_preview() {
                model.focused = true;
            }
        }
    }
    model
}
