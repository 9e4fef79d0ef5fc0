use std::ops::Range;

use ropey::Rope;

/// A text buffer backed by a rope data structure.
///
/// All offsets are byte offsets into the UTF-8 text. The only way to change
/// the content apart from wholesale replacement is [`EditorBuffer::replace`],
/// which splices a snippet over a range.
pub struct EditorBuffer {
    rope: Rope,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Whether the buffer has been modified since creation or last export.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after exporting).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.rope.len_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_bytes() == 0
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Clamp a byte offset into the buffer and round it down to a char boundary.
    pub fn clamp_offset(&self, offset: usize) -> usize {
        let offset = offset.min(self.len());
        self.rope.char_to_byte(self.rope.byte_to_char(offset))
    }

    /// Replace a byte range with `snippet`.
    ///
    /// Returns the byte offset just past the inserted snippet.
    pub fn replace(&mut self, range: Range<usize>, snippet: &str) -> usize {
        let (start, end) = self.char_range(range);
        if start < end {
            self.rope.remove(start..end);
        }
        if !snippet.is_empty() {
            self.rope.insert(start, snippet);
        }
        self.dirty = true;
        self.rope.char_to_byte(start) + snippet.len()
    }

    /// Replace the whole content.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.dirty = true;
    }

    // --- Private helpers ---

    /// Convert a byte range to an ordered ropey char range.
    fn char_range(&self, range: Range<usize>) -> (usize, usize) {
        let a = self.rope.byte_to_char(range.start.min(self.len()));
        let b = self.rope.byte_to_char(range.end.min(self.len()));
        (a.min(b), a.max(b))
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field("rope", &format_args!("Rope({} bytes)", self.rope.len_bytes()))
            .field("dirty", &self.dirty)
            .finish()
    }
}
