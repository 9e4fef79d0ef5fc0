use std::cell::RefCell;
use std::rc::Rc;

use markwrap::editor::Session;
use markwrap::syntax::Construct;

fn typed(session: &mut Session, text: &str) {
    session.input(text, text.len());
}

#[test]
fn test_three_edits_then_undo() {
    let mut session = Session::default();
    typed(&mut session, "a");
    typed(&mut session, "ab");
    typed(&mut session, "abc");
    assert_eq!(session.history().index(), Some(2));

    assert!(session.undo());
    assert_eq!(session.history().index(), Some(1));
    assert_eq!(session.text(), "ab");
}

#[test]
fn test_undo_at_first_entry_is_noop() {
    let mut session = Session::default();
    typed(&mut session, "a");
    assert_eq!(session.history().index(), Some(0));
    assert!(!session.can_undo());
    assert!(!session.undo());
    assert_eq!(session.text(), "a");
    assert_eq!(session.history().index(), Some(0));
}

#[test]
fn test_edit_after_undo_discards_redo() {
    let mut session = Session::default();
    typed(&mut session, "a");
    typed(&mut session, "ab");
    typed(&mut session, "abc");
    session.undo();
    assert!(session.can_redo());

    typed(&mut session, "abx");
    assert!(!session.can_redo());
    assert_eq!(session.history().len(), 3);
    assert_eq!(session.history().index(), Some(2));
}

#[test]
fn test_unchanged_content_is_not_recorded() {
    let mut session = Session::default();
    typed(&mut session, "same");
    typed(&mut session, "same");
    assert_eq!(session.history().index(), Some(0));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_toggle_undo_redo_restores_caret() {
    let mut session = Session::default();
    session.load("Hello");
    session.select(0, 5, 5);
    assert!(session.toggle(Construct::Bold));
    assert_eq!(session.text(), "**Hello**");
    assert_eq!(session.caret(), 9);

    session.undo();
    assert_eq!(session.text(), "Hello");
    assert_eq!(session.caret(), 5);

    session.redo();
    assert_eq!(session.text(), "**Hello**");
    assert_eq!(session.caret(), 9);
}

#[test]
fn test_load_replaces_live_entry() {
    let mut session = Session::default();
    typed(&mut session, "first");
    typed(&mut session, "second");
    session.load("loaded");
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history().index(), Some(1));
    assert_eq!(session.caret(), "loaded".len());

    session.undo();
    assert_eq!(session.text(), "first");
}

#[test]
fn test_observers_see_every_committed_change() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut session = Session::default();
    let sink = Rc::clone(&seen);
    session.subscribe(move |text| sink.borrow_mut().push(text.to_string()));

    session.load("Hello");
    session.select(0, 5, 5);
    session.toggle(Construct::Italic);
    session.undo();

    assert_eq!(*seen.borrow(), vec!["Hello", "*Hello*", "Hello"]);
}

#[test]
fn test_nothing_to_outdent_leaves_history_alone() {
    let mut session = Session::default();
    session.load("plain");
    session.set_caret(2);
    assert!(!session.outdent());
    assert_eq!(session.history().len(), 1);
}
