//!

use crate::{
    input::TextInput,
    mode::EchoMode,
    width::DisplayWidth,
};
use crossterm::style::{Attribute, Color, ContentStyle};
use unicode_segmentation::UnicodeSegmentation;

/// The marker drawn in front of the cursor cell in plain mode.
pub const PLAIN_CURSOR: char = '¦';

/// Inline styles for the parts of an input field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Styles {
    pub prompt: ContentStyle,
    pub text: ContentStyle,
    /// Used for the padding after the text.
    pub background: ContentStyle,
    pub placeholder: ContentStyle,
    /// Reverse video is added on top of this for the cursor cell.
    pub cursor: ContentStyle,
}

impl Styles {
    pub fn new(plain: bool) -> Self {
        let mut placeholder = ContentStyle::new();
        if !plain {
            placeholder.foreground_color = Some(Color::AnsiValue(240));
        }
        Self {
            prompt: ContentStyle::new(),
            text: ContentStyle::new(),
            background: ContentStyle::new(),
            placeholder,
            cursor: ContentStyle::new(),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(false)
    }
}

/// A string being rendered, along with the number of columns it takes up.
struct Line<'m, M: ?Sized> {
    out: String,
    columns: usize,
    measure: &'m M,
}

impl<'m, M: DisplayWidth + ?Sized> Line<'m, M> {
    fn new(measure: &'m M) -> Self {
        Self { out: String::new(), columns: 0, measure }
    }

    fn push(&mut self, style: ContentStyle, text: &str) {
        if text.is_empty() {
            return;
        }
        self.columns += text.chars().map(|c| self.measure.char_width(c)).sum::<usize>();
        self.out.push_str(&style.apply(text).to_string());
    }

    /// Pad with spaces up to `columns`, if anything is left.
    fn pad_to(&mut self, style: ContentStyle, columns: usize) {
        let padding = columns.saturating_sub(self.columns);
        self.push(style, &" ".repeat(padding));
    }
}

impl<M: DisplayWidth> TextInput<M> {
    /// Render the prompt, the visible part of the text, and the cursor.
    pub fn render(&self) -> String {
        let prompt = self.styles.prompt.apply(self.prompt.as_str()).to_string();
        let mut line = Line::new(&self.columns);
        if self.buffer.is_empty() && !self.placeholder.is_empty() {
            self.render_placeholder(&mut line);
        } else {
            self.render_text(&mut line);
        }
        if self.width > 0 {
            // One extra column for the cursor at the end of the text
            line.pad_to(self.styles.background, self.width as usize + 1);
        }
        prompt + &line.out
    }

    fn render_text(&self, line: &mut Line<'_, M>) {
        let chars = self.buffer.chars();
        let cursor = self.buffer.cursor();
        let window = self.viewport.range();
        match self.echo_mode {
            EchoMode::Normal | EchoMode::Masked => {
                let echo = |slice: &[char]| self.echo_mode.transform(slice, self.mask, &self.columns);
                let under_cursor = chars.get(cursor).map(|c| echo(std::slice::from_ref(c)));
                let post_cursor: &[char] = if cursor < window.end {
                    &chars[cursor + 1..window.end]
                } else {
                    &[]
                };
                line.push(self.styles.text, &echo(&chars[window.start..cursor]));
                self.render_cursor(line, under_cursor.as_deref(), self.styles.text);
                line.push(self.styles.text, &echo(post_cursor));
            }
            EchoMode::Hidden => self.render_cursor(line, None, self.styles.text),
        }
    }

    fn render_placeholder(&self, line: &mut Line<'_, M>) {
        let mut graphemes = self.placeholder.graphemes(true);
        let first = graphemes.next();
        let rest = graphemes.as_str();
        self.render_cursor(line, first, self.styles.placeholder);
        line.push(self.styles.placeholder, rest);
    }

    /// Draw the cursor cell, highlighted while the cursor is visible.
    /// A `cell` of `None` is the empty cell after the end of the text.
    fn render_cursor(&self, line: &mut Line<'_, M>, cell: Option<&str>, unhighlighted: ContentStyle) {
        let text = cell.unwrap_or(" ");
        match (self.blinker.is_visible(), self.plain, cell) {
            (false, _, _) => line.push(unhighlighted, text),
            (true, false, _) => {
                let mut style = self.styles.cursor;
                style.attributes.set(Attribute::Reverse);
                line.push(style, text);
            }
            (true, true, None) => line.push(self.styles.cursor, &PLAIN_CURSOR.to_string()),
            (true, true, Some(text)) => {
                line.push(self.styles.cursor, &PLAIN_CURSOR.to_string());
                line.push(unhighlighted, text);
            }
        }
    }
}
