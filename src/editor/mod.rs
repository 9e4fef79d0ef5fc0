//! Editing state for a single markdown document.
//!
//! Provides a rope-backed text buffer, a linear undo/redo history of
//! whole-buffer snapshots, and the [`Session`] that ties them to the
//! syntax toggler.

mod buffer;
mod history;
mod session;

use std::ops::Range;

pub use buffer::EditorBuffer;
pub use history::{History, HistoryEntry, Restore};
pub use session::{ObserverId, PendingEdit, Session};

/// Selected byte range, always `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Selection between two offsets in either order.
    pub const fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Empty selection at `at`.
    pub const fn collapsed(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
