//! Word-wise movement and deletion on a [`Buffer`].
//!
//! A word is a maximal run of non-whitespace chars. When the text is not
//! echoed as is, word operations act on the whole line instead, so that
//! cursor stops never reveal where the words of a password break.

use crate::{buffer::Buffer, mode::EchoMode};

/// The start of the word left of `pos`, skipping any whitespace directly
/// before `pos` first.
pub(crate) fn word_start_before(chars: &[char], pos: usize) -> usize {
    let pos = std::cmp::min(pos, chars.len());
    let spaces = chars[..pos].iter().rev()
        .take_while(|c| c.is_whitespace())
        .count();
    let word = chars[..pos - spaces].iter().rev()
        .take_while(|c| !c.is_whitespace())
        .count();
    pos - spaces - word
}

/// The end of the word right of `pos`, skipping any whitespace directly
/// after `pos` first.
pub(crate) fn word_end_after(chars: &[char], pos: usize) -> usize {
    let pos = std::cmp::min(pos, chars.len());
    let spaces = chars[pos..].iter()
        .take_while(|c| c.is_whitespace())
        .count();
    let word = chars[pos + spaces..].iter()
        .take_while(|c| !c.is_whitespace())
        .count();
    pos + spaces + word
}

impl Buffer {
    pub fn word_left(&mut self, echo: EchoMode) -> bool {
        if echo.reveals_words() {
            self.set_cursor(word_start_before(self.chars(), self.cursor()))
        } else {
            self.cursor_start()
        }
    }

    pub fn word_right(&mut self, echo: EchoMode) -> bool {
        if echo.reveals_words() {
            self.set_cursor(word_end_after(self.chars(), self.cursor()))
        } else {
            self.cursor_end()
        }
    }

    pub fn delete_word_left(&mut self, echo: EchoMode) -> bool {
        if echo.reveals_words() {
            let start = word_start_before(self.chars(), self.cursor());
            self.delete_range(start, self.cursor())
        } else {
            self.delete_before_cursor()
        }
    }

    pub fn delete_word_right(&mut self, echo: EchoMode) -> bool {
        if echo.reveals_words() {
            let cursor = self.cursor();
            let end = word_end_after(self.chars(), cursor);
            self.delete_range(cursor, end)
        } else {
            self.delete_after_cursor()
        }
    }
}
