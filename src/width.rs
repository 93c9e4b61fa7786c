//!

use unicode_width::UnicodeWidthChar;

/// Measures how many terminal columns a character occupies.
pub trait DisplayWidth {
    fn char_width(&self, c: char) -> usize;

    fn str_width(&self, chars: &[char]) -> usize {
        chars.iter().map(|&c| self.char_width(c)).sum()
    }
}

/// Column widths per Unicode East Asian Width. Control characters count as 0, as do combining marks.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnicodeColumns;

impl DisplayWidth for UnicodeColumns {
    fn char_width(&self, c: char) -> usize {
        c.width().unwrap_or(0)
    }
}

impl<M: DisplayWidth + ?Sized> DisplayWidth for &M {
    fn char_width(&self, c: char) -> usize {
        (**self).char_width(c)
    }
}
