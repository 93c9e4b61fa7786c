//!

/// The text being edited, as a sequence of `char`s, plus the cursor offset.
///
/// The cursor always satisfies `0 <= cursor <= len`, and when a character
/// limit is set the text never grows beyond it. Out-of-range requests are
/// clamped and excess input is dropped, so no operation here can fail.
///
/// Mutating operations return whether they changed the text or moved the
/// cursor.
#[derive(Default, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Buffer {
    chars: Vec<char>,
    cursor: usize,
    /// The maximum number of chars. `0` means unlimited.
    limit: usize,
}

impl Buffer {
    pub fn with_limit(limit: usize) -> Self {
        Self { limit, ..Self::default() }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Set the char limit. Text beyond a new, smaller limit is cut off.
    pub fn set_limit(&mut self, limit: usize) -> bool {
        self.limit = limit;
        let changed = self.truncate_to_limit();
        self.clamp_cursor();
        changed
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The number of chars that can still be inserted, or `None` if unlimited.
    pub fn remaining(&self) -> Option<usize> {
        match self.limit {
            0 => None,
            limit => Some(limit.saturating_sub(self.chars.len())),
        }
    }

    pub fn set_value(&mut self, value: &str) -> bool {
        let old = std::mem::replace(&mut self.chars, value.chars().collect());
        self.truncate_to_limit();
        let old_cursor = self.cursor;
        self.clamp_cursor();
        old != self.chars || old_cursor != self.cursor
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.chars.is_empty() || self.cursor != 0;
        self.chars.clear();
        self.cursor = 0;
        changed
    }

    pub fn set_cursor(&mut self, pos: usize) -> bool {
        let old = self.cursor;
        self.cursor = std::cmp::min(pos, self.chars.len());
        old != self.cursor
    }

    pub fn cursor_start(&mut self) -> bool {
        self.set_cursor(0)
    }

    pub fn cursor_end(&mut self) -> bool {
        self.set_cursor(self.chars.len())
    }

    pub fn cursor_left(&mut self) -> bool {
        self.cursor > 0 && self.set_cursor(self.cursor - 1)
    }

    pub fn cursor_right(&mut self) -> bool {
        self.set_cursor(self.cursor + 1)
    }

    /// Insert `input` at the cursor and advance the cursor past it.
    /// Only as many leading chars as still fit under the limit are inserted.
    pub fn insert<I>(&mut self, input: I) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        let fit: Vec<char> = match self.remaining() {
            None => input.into_iter().collect(),
            Some(room) => input.into_iter().take(room).collect(),
        };
        if fit.is_empty() {
            return false;
        }
        let count = fit.len();
        self.chars.splice(self.cursor..self.cursor, fit);
        self.cursor += count;
        true
    }

    /// Delete the char before the cursor (backspace).
    pub fn delete_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
        true
    }

    /// Delete the char under the cursor (forward delete).
    pub fn delete_at(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        true
    }

    /// Delete all text before the cursor.
    pub fn delete_before_cursor(&mut self) -> bool {
        self.delete_range(0, self.cursor)
    }

    /// Delete all text after the cursor.
    pub fn delete_after_cursor(&mut self) -> bool {
        self.delete_range(self.cursor, self.chars.len())
    }

    /// Remove `[start, end)` and leave the cursor at `start`.
    pub(crate) fn delete_range(&mut self, start: usize, end: usize) -> bool {
        let end = std::cmp::min(end, self.chars.len());
        if start >= end {
            return false;
        }
        self.chars.drain(start..end);
        self.cursor = start;
        true
    }

    fn truncate_to_limit(&mut self) -> bool {
        if self.limit > 0 && self.chars.len() > self.limit {
            self.chars.truncate(self.limit);
            true
        } else {
            false
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor = std::cmp::min(self.cursor, self.chars.len());
    }
}

impl std::fmt::Display for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn typing_advances_the_cursor() {
        let mut buf = Buffer::default();
        for c in "hello".chars() {
            assert!(buf.insert([c]));
        }
        assert_eq!(buf.value(), "hello");
        assert_eq!(buf.cursor(), 5);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut buf = Buffer::default();
        buf.set_value("helld");
        buf.set_cursor(3);
        buf.insert("lo wor".chars());
        assert_eq!(buf.value(), "hello world");
        assert_eq!(buf.cursor(), 9);
    }

    #[test]
    fn set_value_truncates_and_clamps() {
        let mut buf = Buffer::with_limit(3);
        buf.set_value("abcdef");
        assert_eq!(buf.value(), "abc");
        buf.set_cursor(42);
        assert_eq!(buf.cursor(), 3);
        buf.set_value("a");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn set_value_keeps_an_in_range_cursor() {
        let mut buf = Buffer::default();
        buf.set_value("hello");
        assert_eq!(buf.cursor(), 0);
        buf.set_cursor(2);
        buf.set_value("help me");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn paste_is_cut_to_the_remaining_room() {
        let mut buf = Buffer::with_limit(5);
        buf.set_value("abc");
        buf.cursor_end();
        assert!(buf.insert("xyzxyz".chars()));
        assert_eq!(buf.value(), "abcxy");
        assert_eq!(buf.cursor(), 5);
        assert!(!buf.insert(['q']));
        assert_eq!(buf.value(), "abcxy");
    }

    #[test]
    fn shrinking_the_limit_cuts_the_text() {
        let mut buf = Buffer::default();
        buf.set_value("abcdef");
        buf.cursor_end();
        assert!(buf.set_limit(2));
        assert_eq!(buf.value(), "ab");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn single_char_deletions() {
        let mut buf = Buffer::default();
        buf.set_value("abc");
        assert!(!buf.delete_before());
        assert!(buf.delete_at());
        assert_eq!(buf.value(), "bc");
        buf.cursor_end();
        assert!(!buf.delete_at());
        assert!(buf.delete_before());
        assert_eq!(buf.value(), "b");
        assert_eq!(buf.cursor(), 1);
    }

    #[test]
    fn kill_before_and_after_the_cursor() {
        let mut buf = Buffer::default();
        buf.set_value("hello world");
        buf.set_cursor(5);
        assert!(buf.delete_after_cursor());
        assert_eq!(buf.value(), "hello");
        assert_eq!(buf.cursor(), 5);
        buf.set_cursor(2);
        assert!(buf.delete_before_cursor());
        assert_eq!(buf.value(), "llo");
        assert_eq!(buf.cursor(), 0);
        assert!(!buf.delete_before_cursor());
    }

    #[test]
    fn cursor_moves_report_change() {
        let mut buf = Buffer::default();
        buf.set_value("ab");
        assert!(!buf.cursor_left());
        assert!(buf.cursor_right());
        assert!(buf.cursor_right());
        assert!(!buf.cursor_right());
        assert!(buf.cursor_start());
        assert!(!buf.cursor_start());
    }

    #[test]
    fn display_prints_the_text() {
        let mut buf = Buffer::default();
        buf.set_value("日本");
        assert_eq!(buf.to_string(), "日本");
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(String),
        SetCursor(usize),
        SetValue(String),
        Left,
        Right,
        Backspace,
        Delete,
        KillStart,
        KillEnd,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z 日]{0,6}".prop_map(Op::Insert),
            (0usize..20).prop_map(Op::SetCursor),
            "[a-z 日]{0,12}".prop_map(Op::SetValue),
            Just(Op::Left),
            Just(Op::Right),
            Just(Op::Backspace),
            Just(Op::Delete),
            Just(Op::KillStart),
            Just(Op::KillEnd),
        ]
    }

    fn apply(buf: &mut Buffer, op: Op) {
        match op {
            Op::Insert(s) => { buf.insert(s.chars()); }
            Op::SetCursor(pos) => { buf.set_cursor(pos); }
            Op::SetValue(s) => { buf.set_value(&s); }
            Op::Left => { buf.cursor_left(); }
            Op::Right => { buf.cursor_right(); }
            Op::Backspace => { buf.delete_before(); }
            Op::Delete => { buf.delete_at(); }
            Op::KillStart => { buf.delete_before_cursor(); }
            Op::KillEnd => { buf.delete_after_cursor(); }
        }
    }

    proptest! {
        #[test]
        fn cursor_and_limit_invariants(
            limit in 0usize..8,
            ops in proptest::collection::vec(op(), 0..40),
        ) {
            let mut buf = Buffer::with_limit(limit);
            for op in ops {
                apply(&mut buf, op);
                prop_assert!(buf.cursor() <= buf.len());
                if limit > 0 {
                    prop_assert!(buf.len() <= limit);
                }
            }
        }

        #[test]
        fn paste_truncation_law(
            limit in 1usize..10,
            value in "[a-z]{0,10}",
            paste in "[a-z]{0,10}",
        ) {
            let mut buf = Buffer::with_limit(limit);
            buf.set_value(&value);
            buf.cursor_end();
            let before = buf.value();
            let room = limit - buf.len();
            buf.insert(paste.chars());
            let expected: String = before.chars().chain(paste.chars().take(room)).collect();
            prop_assert_eq!(buf.value(), expected);
        }

        #[test]
        fn cursor_start_is_idempotent(value in "[a-z ]{0,10}", pos in 0usize..12) {
            let mut once = Buffer::default();
            once.set_value(&value);
            once.set_cursor(pos);
            once.cursor_start();
            let mut twice = once.clone();
            prop_assert!(!twice.cursor_start());
            prop_assert_eq!(once, twice);
        }
    }
}
