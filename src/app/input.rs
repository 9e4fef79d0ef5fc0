use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Message, Model};
use crate::syntax::Construct;

/// Map a key press to a message.
///
/// Cmd (`SUPER`) and Ctrl are interchangeable. Tab and Shift+Tab only act
/// while the editor is focused; bold and italic only when the toolbar offers
/// them.
pub fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let command = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let toolbar = &model.options.toolbar;

    match key.code {
        KeyCode::Enter if command => Some(Message::TogglePreview),
        KeyCode::Char(c) if command => match c.to_ascii_lowercase() {
            'z' if shift => Some(Message::Redo),
            'z' => Some(Message::Undo),
            'b' if toolbar.allows(Construct::Bold) => Some(Message::Toggle(Construct::Bold)),
            'i' if toolbar.allows(Construct::Italic) => Some(Message::Toggle(Construct::Italic)),
            _ => None,
        },
        KeyCode::Tab if model.focused => Some(if shift {
            Message::Outdent
        } else {
            Message::Indent
        }),
        KeyCode::BackTab if model.focused => Some(Message::Outdent),
        _ => None,
    }
}
