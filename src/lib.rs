// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. options::OptionsError)
    clippy::module_name_repetitions
)]

//! # Markwrap
//!
//! The editing core of a markdown toolbar editor.
//!
//! Markwrap turns toolbar actions into text edits:
//! - Toggle headings, emphasis, lists, quotes, code, links, images and dividers
//!   on a selection (apply when absent, remove when present)
//! - Indent and outdent with a four-space unit
//! - Linear undo/redo history with caret restore
//! - Sanitized HTML preview and markdown export
//!
//! ## Architecture
//!
//! Hosts drive the editor with The Elm Architecture (TEA) pattern:
//! - **Model**: Session, toolbar options and preview state
//! - **Message**: Toolbar actions, typed input and host events
//! - **Update**: Pure state transitions
//!
//! ## Modules
//!
//! - [`syntax`]: Detection and snippet computation for each construct
//! - [`editor`]: Buffer, history and editing session
//! - [`app`]: Model, messages, update and keyboard shortcuts
//! - [`options`]: Toolbar options
//! - [`preview`]: Markdown rendering and HTML sanitizing
//! - [`export`]: Markdown download
//! - [`config`]: Saved command-line defaults
//! - [`watcher`]: File watching

pub mod app;
pub mod config;
pub mod editor;
pub mod export;
pub mod options;
pub mod preview;
pub mod syntax;
pub mod watcher;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{Message, Model, update};
    pub use crate::editor::Session;
    pub use crate::options::Options;
    pub use crate::syntax::{Construct, Replacement, Target, Toggler};
}
