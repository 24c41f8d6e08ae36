use unicode_width::UnicodeWidthStr;

/// Single-line edit buffer. `cursor` counts characters, not bytes.
#[derive(Debug, Default)]
pub(super) struct Input {
    pub(super) buf: String,
    pub(super) cursor: usize,
}

impl Input {
    fn byte_index(&self, cursor: usize) -> usize {
        self.buf
            .char_indices()
            .nth(cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.buf.len())
    }

    fn char_len(&self) -> usize {
        self.buf.chars().count()
    }

    /// Terminal cells occupied by the text left of the cursor.
    pub(super) fn cursor_width(&self) -> usize {
        self.buf[..self.byte_index(self.cursor)].width()
    }

    pub(super) fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.buf.insert(at, c);
        self.cursor += 1;
    }

    pub(super) fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn delete(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.buf.remove(at);
    }

    pub(super) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    /// Replaces the buffer when `s` differs, e.g. after the draft was reset.
    pub(super) fn sync(&mut self, s: &str) {
        if self.buf != s {
            self.buf = s.to_string();
            self.cursor = self.char_len();
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui/input_tests.rs"]
mod tests;
