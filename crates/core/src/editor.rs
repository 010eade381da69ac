//! The editor content buffer.
//!
//! [`ContentBuffer`] is the authoring textarea made concrete: it holds the
//! draft content text plus a cursor, and splices embed tokens at the cursor
//! position. With no cursor context (a fresh buffer, or a cursor set past the
//! end) the token lands at the end of the text.

use crate::markup::MediaKind;

/// Draft content text with an insertion cursor.
///
/// The cursor is a byte offset into the text, always clamped to a char
/// boundary so splices stay valid UTF-8.
#[derive(Debug, Clone, Default)]
pub struct ContentBuffer {
    text: String,
    cursor: usize,
}

impl ContentBuffer {
    /// Creates an empty buffer with the cursor at the start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the buffer text, placing the cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Moves the cursor to `position`, clamping past-the-end and mid-character
    /// positions back to the nearest valid boundary.
    pub fn set_cursor(&mut self, position: usize) {
        let mut position = position.min(self.text.len());
        while !self.text.is_char_boundary(position) {
            position -= 1;
        }
        self.cursor = position;
    }

    /// Splices the literal embed token for `kind` and `url` at the cursor and
    /// advances the cursor past it.
    pub fn insert_media(&mut self, kind: MediaKind, url: &str) {
        let token = kind.token(url);
        self.text.insert_str(self.cursor, &token);
        self.cursor += token.len();
    }

    /// Returns the current buffer text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the current cursor position (byte offset).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Consumes the buffer, returning the final content text.
    pub fn into_text(self) -> String {
        self.text
    }
}
