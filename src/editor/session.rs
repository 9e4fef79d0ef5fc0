//! One editing session: buffer, selection, caret, history and observers.

use crate::export::Download;
use crate::syntax::{self, Construct, Replacement, Target, Toggler};

use super::{EditorBuffer, History, Selection};

/// Handle returned by [`Session::subscribe`].
pub type ObserverId = usize;

type Observer = Box<dyn FnMut(&str)>;

/// A computed but not yet committed edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    /// The splice to perform.
    pub replacement: Replacement,
    /// Buffer content once the splice is applied.
    pub text: String,
    /// Caret offset once the splice is applied.
    pub caret: usize,
}

/// Owns the document and everything needed to edit it.
///
/// Every committed mutation records a history entry (unless the content is
/// unchanged) and then calls each observer with the new content, in
/// subscription order.
pub struct Session {
    buffer: EditorBuffer,
    selection: Selection,
    caret: usize,
    history: History,
    toggler: Toggler,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: ObserverId,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Toggler::default())
    }
}

impl Session {
    /// An empty session with empty history.
    pub fn new(toggler: Toggler) -> Self {
        Self {
            buffer: EditorBuffer::empty(),
            selection: Selection::default(),
            caret: 0,
            history: History::new(),
            toggler,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// The current document text.
    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub const fn buffer(&self) -> &EditorBuffer {
        &self.buffer
    }

    pub const fn selection(&self) -> Selection {
        self.selection
    }

    pub const fn caret(&self) -> usize {
        self.caret
    }

    pub const fn history(&self) -> &History {
        &self.history
    }

    pub const fn toggler(&self) -> &Toggler {
        &self.toggler
    }

    pub const fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Register a callback invoked with the new content after each mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&str) + 'static) -> ObserverId {
        let id = self.next_observer;
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Record the host's selection and caret, clamped to the buffer.
    pub fn select(&mut self, start: usize, end: usize, caret: usize) {
        self.selection = Selection::new(
            self.buffer.clamp_offset(start),
            self.buffer.clamp_offset(end),
        );
        self.caret = self.buffer.clamp_offset(caret);
    }

    /// Collapse the selection at `caret`.
    pub fn set_caret(&mut self, caret: usize) {
        self.select(caret, caret, caret);
    }

    fn with_target<R>(&self, f: impl FnOnce(&Target<'_>) -> R) -> R {
        let text = self.buffer.text();
        let target = Target::new(&text, self.selection.start, self.selection.end, self.caret);
        f(&target)
    }

    /// Whether `construct` already wraps the selection (or the caret's line).
    pub fn is_active(&self, construct: Construct) -> bool {
        self.with_target(|target| self.toggler.is_active(construct, target))
    }

    /// Work out what toggling `construct` would do without touching the buffer.
    pub fn compute_edit(&self, construct: Construct) -> Option<PendingEdit> {
        self.with_target(|target| {
            let replacement = self.toggler.toggle(construct, target)?;
            Some(pending(target.text(), replacement))
        })
    }

    /// Commit an edit computed against the current buffer.
    ///
    /// Returns the caret offset the host should focus.
    pub fn apply_edit(&mut self, edit: PendingEdit) -> usize {
        let before = self.caret;
        let Replacement {
            start, end, snippet, ..
        } = edit.replacement;
        self.buffer.replace(start..end, &snippet);
        self.set_caret(edit.caret);
        self.commit(before);
        self.caret
    }

    /// Toggle `construct` on the current selection. Returns whether anything changed.
    pub fn toggle(&mut self, construct: Construct) -> bool {
        let Some(edit) = self.compute_edit(construct) else {
            tracing::debug!(?construct, "toggle produced no edit");
            return false;
        };
        tracing::debug!(?construct, start = edit.replacement.start, end = edit.replacement.end, "toggle");
        self.apply_edit(edit);
        true
    }

    /// Indent the selected lines, or insert one indent unit at the caret.
    pub fn indent(&mut self) -> bool {
        let edit = self.with_target(|target| pending(target.text(), syntax::indent::indent(target)));
        self.apply_edit(edit);
        true
    }

    /// Remove one indent unit from the selected lines (or the caret's line).
    pub fn outdent(&mut self) -> bool {
        let edit = self.with_target(|target| {
            syntax::indent::outdent(target).map(|rep| pending(target.text(), rep))
        });
        match edit {
            Some(edit) => {
                self.apply_edit(edit);
                true
            }
            None => false,
        }
    }

    /// Accept typed input: the host's full new content and caret.
    pub fn input(&mut self, text: &str, caret: usize) {
        let before = self.caret;
        self.buffer.set_text(text);
        self.set_caret(caret);
        self.commit(before);
    }

    /// External write of a whole document.
    ///
    /// The load is recorded as an edit in place of the live history entry,
    /// with the caret at the end of the document.
    pub fn load(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.buffer.mark_clean();
        let end = self.buffer.len();
        self.set_caret(end);
        self.history.rewind_for_load();
        self.history.append(text, end, end);
        tracing::debug!(len = end, index = ?self.history.index(), "document loaded");
        self.notify();
    }

    pub fn undo(&mut self) -> bool {
        let Some(restore) = self.history.undo() else {
            return false;
        };
        let (content, caret) = (restore.content.to_string(), restore.caret);
        self.restore(&content, caret);
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(restore) = self.history.redo() else {
            return false;
        };
        let (content, caret) = (restore.content.to_string(), restore.caret);
        self.restore(&content, caret);
        true
    }

    /// The document as a downloadable markdown file.
    pub fn export(&mut self) -> Download {
        self.buffer.mark_clean();
        Download::markdown(self.buffer.text())
    }

    fn restore(&mut self, content: &str, caret: usize) {
        self.buffer.set_text(content);
        self.set_caret(caret);
        self.notify();
    }

    fn commit(&mut self, caret_before: usize) {
        let text = self.buffer.text();
        self.history.append(&text, caret_before, self.caret);
        self.notify_with(&text);
    }

    fn notify(&mut self) {
        let text = self.buffer.text();
        self.notify_with(&text);
    }

    fn notify_with(&mut self, text: &str) {
        for (_, observer) in &mut self.observers {
            observer(text);
        }
    }
}

fn pending(text: &str, replacement: Replacement) -> PendingEdit {
    let (text, caret) = replacement.apply(text);
    PendingEdit {
        replacement,
        text,
        caret,
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("buffer", &self.buffer)
            .field("selection", &self.selection)
            .field("caret", &self.caret)
            .field("history", &format_args!("History({} entries)", self.history.len()))
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn session_with(text: &str) -> Session {
        let mut session = Session::default();
        session.load(text);
        session
    }

    #[test]
    fn test_load_records_one_entry_with_caret_at_end() {
        let session = session_with("Hello");
        assert_eq!(session.text(), "Hello");
        assert_eq!(session.caret(), 5);
        assert_eq!(session.history().index(), Some(0));
        assert!(!session.can_undo());
        assert!(!session.buffer().is_dirty());
    }

    #[test]
    fn test_toggle_bold_on_selection() {
        let mut session = session_with("say hello");
        session.select(4, 9, 4);
        assert!(session.toggle(Construct::Bold));
        assert_eq!(session.text(), "say **hello**");
        assert_eq!(session.caret(), 13);
        assert!(session.selection().is_empty());
        assert!(session.can_undo());
    }

    #[test]
    fn test_compute_edit_does_not_mutate() {
        let mut session = session_with("Hello");
        session.select(0, 5, 0);
        let edit = session.compute_edit(Construct::Heading(1)).unwrap();
        assert_eq!(edit.text, "# Hello");
        assert_eq!(edit.caret, 7);
        assert_eq!(session.text(), "Hello");

        let caret = session.apply_edit(edit);
        assert_eq!(caret, 7);
        assert_eq!(session.text(), "# Hello");
    }

    #[test]
    fn test_collapsed_heading_toggle_keeps_stored_selection_until_commit() {
        let mut session = session_with("a\ntitle");
        session.set_caret(4);
        let edit = session.compute_edit(Construct::Heading(2)).unwrap();
        assert_eq!(edit.text, "a\n## title");
        assert_eq!(session.selection(), Selection::collapsed(4));
    }

    #[test]
    fn test_undo_and_redo_restore_carets() {
        let mut session = session_with("Hello");
        session.select(0, 5, 0);
        session.toggle(Construct::Bold);
        assert!(session.undo());
        assert_eq!(session.text(), "Hello");
        assert_eq!(session.caret(), 0);

        assert!(session.redo());
        assert_eq!(session.text(), "**Hello**");
        assert_eq!(session.caret(), 9);
        assert!(!session.redo());
    }

    #[test]
    fn test_input_with_same_content_does_not_grow_history() {
        let mut session = session_with("abc");
        session.input("abc", 1);
        assert_eq!(session.history().len(), 1);
        session.input("abcd", 4);
        assert_eq!(session.history().index(), Some(1));
    }

    #[test]
    fn test_outdent_without_indent_changes_nothing() {
        let mut session = session_with("abc");
        session.set_caret(1);
        assert!(!session.outdent());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_indent_then_outdent_line() {
        let mut session = session_with("one\ntwo");
        session.set_caret(4);
        session.indent();
        assert_eq!(session.text(), "one\n    two");
        session.set_caret(9);
        session.outdent();
        assert_eq!(session.text(), "one\ntwo");
    }

    #[test]
    fn test_observers_receive_committed_content() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut session = Session::default();
        let sink = Rc::clone(&seen);
        let id = session.subscribe(move |text| sink.borrow_mut().push(text.to_string()));

        session.load("Hi");
        session.select(0, 2, 0);
        session.toggle(Construct::Italic);
        session.undo();
        assert_eq!(*seen.borrow(), vec!["Hi", "*Hi*", "Hi"]);

        assert!(session.unsubscribe(id));
        session.redo();
        assert_eq!(seen.borrow().len(), 3);
        assert!(!session.unsubscribe(id));
    }

    #[test]
    fn test_select_clamps_to_buffer() {
        let mut session = session_with("abc");
        session.select(10, 1, 50);
        assert_eq!(session.selection(), Selection::new(1, 3));
        assert_eq!(session.caret(), 3);
    }

    #[test]
    fn test_export_marks_clean() {
        let mut session = session_with("# Doc");
        session.input("# Doc!", 6);
        assert!(session.buffer().is_dirty());
        let download = session.export();
        assert_eq!(download.contents, "# Doc!");
        assert!(!session.buffer().is_dirty());
    }
}
