//! Text value with selection, and the three edits the router performs on it.
//!
//! Offsets are in characters, not bytes.

/// Selection in a single text value.
/// anchor = where selection started, cursor = current position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSelection {
    /// Where selection started (fixed point)
    pub anchor: usize,
    /// Current cursor position
    pub cursor: usize,
}

impl TextSelection {
    pub fn caret(pos: usize) -> Self {
        Self {
            anchor: pos,
            cursor: pos,
        }
    }

    pub fn new(anchor: usize, cursor: usize) -> Self {
        Self { anchor, cursor }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }

    /// Get selection as ordered range (start, end)
    pub fn range(&self) -> (usize, usize) {
        if self.anchor <= self.cursor {
            (self.anchor, self.cursor)
        } else {
            (self.cursor, self.anchor)
        }
    }

    fn clamped(self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            cursor: self.cursor.min(len),
        }
    }
}

/// Text content plus selection, as held by a text buffer.
///
/// `selection == None` means the buffer has never had a selection
/// (distinct from a caret collapsed at offset 0).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextEditingValue {
    pub text: String,
    pub selection: Option<TextSelection>,
}

impl TextEditingValue {
    pub fn new(text: impl Into<String>, selection: Option<TextSelection>) -> Self {
        Self {
            text: text.into(),
            selection,
        }
    }

    /// Text with the caret placed after the last character.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.chars().count();
        Self {
            text,
            selection: Some(TextSelection::caret(len)),
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Selection to edit against: a missing selection is a caret at the end,
    /// and out-of-range offsets are clamped to the text length.
    pub fn effective_selection(&self) -> TextSelection {
        let len = self.char_len();
        match self.selection {
            Some(selection) => selection.clamped(len),
            None => TextSelection::caret(len),
        }
    }

    /// Caret position if the selection is collapsed.
    pub fn caret(&self) -> Option<usize> {
        let selection = self.effective_selection();
        selection.is_empty().then_some(selection.cursor)
    }

    /// Delete the selection, or the character before the caret.
    /// Returns `false` when there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        let selection = self.effective_selection();
        if !selection.is_empty() {
            self.delete_range(selection);
            return true;
        }
        if selection.cursor == 0 {
            self.selection = Some(selection);
            return false;
        }
        let start = selection.cursor - 1;
        self.delete_range(TextSelection::new(start, selection.cursor));
        true
    }

    /// Delete the selection, or the character after the caret.
    /// Returns `false` when there was nothing to delete.
    pub fn delete_forward(&mut self) -> bool {
        let selection = self.effective_selection();
        if !selection.is_empty() {
            self.delete_range(selection);
            return true;
        }
        if selection.cursor >= self.char_len() {
            self.selection = Some(selection);
            return false;
        }
        self.delete_range(TextSelection::new(selection.cursor, selection.cursor + 1));
        true
    }

    /// Replace the selection with `s` and place the caret after it.
    pub fn insert_str(&mut self, s: &str) {
        let (start, end) = self.effective_selection().range();
        let byte_start = self.char_to_byte(start);
        let byte_end = self.char_to_byte(end);
        self.text.replace_range(byte_start..byte_end, s);
        self.selection = Some(TextSelection::caret(start + s.chars().count()));
    }

    fn delete_range(&mut self, selection: TextSelection) {
        let (start, end) = selection.range();
        let byte_start = self.char_to_byte(start);
        let byte_end = self.char_to_byte(end);
        self.text.replace_range(byte_start..byte_end, "");
        self.selection = Some(TextSelection::caret(start));
    }

    /// Convert character index to byte index
    fn char_to_byte(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}
