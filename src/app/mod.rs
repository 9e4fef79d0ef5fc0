//! Host-facing editor state and update loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete editor state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`handle_key`]: Keyboard shortcuts to messages

mod input;
mod model;
mod update;

pub use input::handle_key;
pub use model::{Model, ToolbarItem};
pub use update::{Message, update};
