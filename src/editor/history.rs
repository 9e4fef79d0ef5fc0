//! Linear undo/redo over whole-buffer snapshots.

/// A committed buffer state and the caret positions around the edit that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Caret before the edit; restored when the edit is undone.
    pub caret_before: usize,
    /// Caret after the edit; restored when the edit is redone.
    pub caret_after: usize,
    pub content: String,
}

/// Buffer content and caret to restore after an undo or redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restore<'a> {
    pub content: &'a str,
    pub caret: usize,
}

/// Append-only history that discards the redo branch on a new edit.
///
/// `index` points at the entry matching the live buffer; `None` means no
/// entry has been committed yet (or the load rewound past the first one).
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    index: Option<usize>,
}

impl History {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: None,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the live entry.
    pub const fn index(&self) -> Option<usize> {
        self.index
    }

    /// The entry matching the live buffer.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.index.and_then(|i| self.entries.get(i))
    }

    pub const fn can_undo(&self) -> bool {
        matches!(self.index, Some(i) if i > 0)
    }

    pub fn can_redo(&self) -> bool {
        match self.index {
            Some(i) => i + 1 < self.entries.len(),
            None => !self.is_empty(),
        }
    }

    /// Commit `content` unless it equals the live entry.
    ///
    /// Entries after the live one are dropped first. Returns whether an entry
    /// was added.
    pub fn append(&mut self, content: &str, caret_before: usize, caret_after: usize) -> bool {
        if self.current().is_some_and(|entry| entry.content == content) {
            return false;
        }
        let keep = self.index.map_or(0, |i| i + 1);
        self.entries.truncate(keep);
        self.entries.push(HistoryEntry {
            caret_before,
            caret_after,
            content: content.to_string(),
        });
        self.index = Some(self.entries.len() - 1);
        tracing::debug!(index = keep, len = self.entries.len(), "history append");
        true
    }

    /// Step back one entry.
    ///
    /// The caret returned is the `caret_before` of the entry being undone.
    pub fn undo(&mut self) -> Option<Restore<'_>> {
        let i = self.index.filter(|&i| i > 0)?;
        let caret = self.entries[i].caret_before;
        self.index = Some(i - 1);
        tracing::debug!(index = i - 1, "history undo");
        Some(Restore {
            content: &self.entries[i - 1].content,
            caret,
        })
    }

    /// Step forward one entry, restoring its `caret_after`.
    pub fn redo(&mut self) -> Option<Restore<'_>> {
        if !self.can_redo() {
            return None;
        }
        let i = self.index.map_or(0, |i| i + 1);
        self.index = Some(i);
        tracing::debug!(index = i, "history redo");
        let entry = &self.entries[i];
        Some(Restore {
            content: &entry.content,
            caret: entry.caret_after,
        })
    }

    /// Move the live index back one step ahead of recording an external load,
    /// so the loaded document takes the place of the live entry.
    pub const fn rewind_for_load(&mut self) {
        self.index = match self.index {
            Some(i) if i > 0 => Some(i - 1),
            _ => None,
        };
    }
}
