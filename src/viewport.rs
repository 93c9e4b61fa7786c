//!

use crate::width::DisplayWidth;

/// The visible slice `[left, right)` of the text when the text does not fit
/// within the width budget of the input field.
///
/// The window scrolls horizontally to follow the cursor. Its width is counted
/// in display columns rather than chars, as wide glyphs take 2 columns. When
/// the cursor sits at the end of the text it occupies one extra column of
/// slack directly after the window.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    left: usize,
    right: usize,
}

impl Viewport {
    pub fn left(&self) -> usize {
        self.left
    }

    pub fn right(&self) -> usize {
        self.right
    }

    pub fn range(&self) -> std::ops::Range<usize> {
        self.left..self.right
    }

    /// Recompute the window after any change to `chars` or `cursor`.
    /// A `budget` of `0` means unbounded, i.e. the whole text is visible.
    pub fn fit<M>(&mut self, chars: &[char], cursor: usize, budget: u16, columns: &M)
    where
        M: DisplayWidth + ?Sized,
    {
        let len = chars.len();
        let budget = budget as usize;
        if budget == 0 || columns.str_width(chars) <= budget {
            *self = Self { left: 0, right: len };
            return;
        }
        let cursor = std::cmp::min(cursor, len);

        // Deletions may have shrunk the text underneath the window
        self.right = std::cmp::min(self.right, len);
        self.left = std::cmp::min(self.left, self.right);

        if cursor < self.left {
            self.left = cursor;
        } else if cursor >= self.right {
            // At or past the right edge the cursor cell becomes the last one
            self.left = anchor_left(chars, cursor, budget, columns);
        }
        let mut right = fill_right(chars, self.left, budget, columns);
        let cursor_visible = cursor < right || (cursor == len && right == len);
        if !cursor_visible {
            self.left = anchor_left(chars, cursor, budget, columns);
            right = fill_right(chars, self.left, budget, columns);
        }
        self.right = right;
    }
}

/// The largest `right` such that `chars[left..right]` fits in `budget`
/// columns. At least one char is taken, even if it is wider than the budget.
fn fill_right<M>(chars: &[char], left: usize, budget: usize, columns: &M) -> usize
where
    M: DisplayWidth + ?Sized,
{
    let mut used = 0;
    let mut right = left;
    for &c in &chars[left..] {
        let w = columns.char_width(c);
        if used + w > budget && right > left {
            break;
        }
        used += w;
        right += 1;
    }
    right
}

/// The smallest `left` such that the text from `left` up to and including
/// the cursor cell fits in `budget` columns. At the end of the text the cursor
/// cell is the slack column, so it is not counted.
fn anchor_left<M>(chars: &[char], cursor: usize, budget: usize, columns: &M) -> usize
where
    M: DisplayWidth + ?Sized,
{
    let mut used = chars.get(cursor).map_or(0, |&c| columns.char_width(c));
    let mut left = cursor;
    for &c in chars[..cursor].iter().rev() {
        let w = columns.char_width(c);
        if used + w > budget {
            break;
        }
        used += w;
        left -= 1;
    }
    left
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::UnicodeColumns;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn fitted(vp: &mut Viewport, text: &[char], cursor: usize, budget: u16) -> (usize, usize) {
        vp.fit(text, cursor, budget, &UnicodeColumns);
        (vp.left(), vp.right())
    }

    #[test]
    fn short_text_is_fully_visible() {
        let text = chars("abc");
        let mut vp = Viewport::default();
        assert_eq!(fitted(&mut vp, &text, 3, 5), (0, 3));
        assert_eq!(fitted(&mut vp, &text, 1, 0), (0, 3));
    }

    #[test]
    fn cursor_at_start_shows_the_first_columns() {
        let text = chars("abcdefgh");
        let mut vp = Viewport::default();
        assert_eq!(fitted(&mut vp, &text, 8, 5), (3, 8));
        assert_eq!(fitted(&mut vp, &text, 0, 5), (0, 5));
        assert!(UnicodeColumns.str_width(&text[vp.range()]) <= 5);
    }

    #[test]
    fn window_follows_the_cursor_rightwards() {
        let text = chars("abcdefgh");
        let mut vp = Viewport::default();
        assert_eq!(fitted(&mut vp, &text, 0, 5), (0, 5));
        assert_eq!(fitted(&mut vp, &text, 4, 5), (0, 5));
        // One past the right edge: the cursor's char becomes the last cell
        assert_eq!(fitted(&mut vp, &text, 5, 5), (1, 6));
        // Moving back inside the window doesn't scroll
        assert_eq!(fitted(&mut vp, &text, 3, 5), (1, 6));
        assert_eq!(fitted(&mut vp, &text, 0, 5), (0, 5));
    }

    #[test]
    fn wide_glyphs_count_double() {
        let text = chars("日本語テキスト");
        let mut vp = Viewport::default();
        assert_eq!(fitted(&mut vp, &text, 0, 5), (0, 2));
        assert_eq!(fitted(&mut vp, &text, 7, 5), (5, 7));
    }

    #[test]
    fn deletions_shrink_the_window() {
        let mut text = chars("abcdefgh");
        let mut vp = Viewport::default();
        assert_eq!(fitted(&mut vp, &text, 8, 5), (3, 8));
        text.truncate(6);
        assert_eq!(fitted(&mut vp, &text, 6, 5), (1, 6));
        text.truncate(4);
        assert_eq!(fitted(&mut vp, &text, 4, 5), (0, 4));
    }

    #[test]
    fn deleting_at_the_end_refills_from_the_left() {
        let mut text = chars("abcdefghij");
        let mut vp = Viewport::default();
        assert_eq!(fitted(&mut vp, &text, 10, 5), (5, 10));
        for (len, left) in [(9, 4), (8, 3), (7, 2), (6, 1)] {
            text.truncate(len);
            assert_eq!(fitted(&mut vp, &text, len, 5), (left, len));
        }
    }

    #[test]
    fn wide_glyphs_refill_by_columns() {
        let mut text = chars("ab日本語");
        let mut vp = Viewport::default();
        assert_eq!(fitted(&mut vp, &text, 5, 4), (3, 5));
        text.truncate(4);
        assert_eq!(fitted(&mut vp, &text, 4, 4), (2, 4));
    }

    #[test]
    fn a_glyph_wider_than_the_budget_is_still_shown() {
        let text = chars("日日");
        let mut vp = Viewport::default();
        assert_eq!(fitted(&mut vp, &text, 1, 1), (1, 2));
    }

    proptest! {
        #[test]
        fn cursor_stays_visible_within_budget(
            text in "[a-z日]{0,20}",
            budget in 2u16..8,
            cursors in proptest::collection::vec(0usize..22, 1..10),
        ) {
            let text = chars(&text);
            let mut vp = Viewport::default();
            for cursor in cursors {
                let cursor = cursor.min(text.len());
                vp.fit(&text, cursor, budget, &UnicodeColumns);
                prop_assert!(vp.left() <= cursor);
                prop_assert!(cursor < vp.right() || cursor == text.len());
                prop_assert!(vp.right() <= text.len());
                let used = UnicodeColumns.str_width(&text[vp.range()]);
                prop_assert!(used <= budget as usize);
            }
        }
    }
}
