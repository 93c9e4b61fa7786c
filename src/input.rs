//!

use crate::{
    blink::{BlinkTag, Blinker},
    buffer::Buffer,
    config::Config,
    error::ClipboardError,
    event::{Action, Event},
    ids::{IdAllocator, InstanceId, ProcessIds},
    macros::key,
    mode::{CursorMode, EchoMode},
    render::Styles,
    viewport::Viewport,
    width::{DisplayWidth, UnicodeColumns},
};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;


pub struct TextInputBuilder<M: DisplayWidth = UnicodeColumns> {
    columns: M,
    value: String,
    prompt: String,
    placeholder: String,
    blink_interval: Duration,
    echo_mode: EchoMode,
    mask: char,
    char_limit: usize,
    width: u16,
    cursor_mode: CursorMode,
    plain: bool,
    styles: Option<Styles>,
    focused: bool,
}

impl Default for TextInputBuilder<UnicodeColumns> {
    fn default() -> TextInputBuilder<UnicodeColumns> {
        TextInputBuilder {
            columns: UnicodeColumns,
            value: String::new(),
            prompt: String::new(),
            placeholder: String::new(),
            blink_interval: Duration::ZERO,
            echo_mode: EchoMode::Normal,
            mask: '*',
            char_limit: 0,
            width: 0,
            cursor_mode: CursorMode::Blink,
            plain: false,
            styles: None,
            focused: false,
        }
        .config(&Config::default())
    }
}

impl<M: DisplayWidth> TextInputBuilder<M> {
    /// Measure display columns with `columns` instead.
    pub fn columns<N: DisplayWidth>(self, columns: N) -> TextInputBuilder<N> {
        TextInputBuilder {
            columns,
            value: self.value,
            prompt: self.prompt,
            placeholder: self.placeholder,
            blink_interval: self.blink_interval,
            echo_mode: self.echo_mode,
            mask: self.mask,
            char_limit: self.char_limit,
            width: self.width,
            cursor_mode: self.cursor_mode,
            plain: self.plain,
            styles: self.styles,
            focused: self.focused,
        }
    }

    /// Take over every option stored in `config`.
    pub fn config(mut self, config: &Config) -> Self {
        self.prompt = config.prompt.clone();
        self.placeholder = config.placeholder.clone();
        self.blink_interval = config.blink_interval();
        self.echo_mode = config.echo_mode;
        self.mask = config.mask;
        self.char_limit = config.char_limit;
        self.width = config.width;
        self.cursor_mode = config.cursor_mode;
        self.plain = config.plain;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn blink_interval(mut self, interval: Duration) -> Self {
        self.blink_interval = interval;
        self
    }

    pub fn echo_mode(mut self, echo_mode: EchoMode) -> Self {
        self.echo_mode = echo_mode;
        self
    }

    pub fn mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    pub fn char_limit(mut self, limit: usize) -> Self {
        self.char_limit = limit;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn cursor_mode(mut self, mode: CursorMode) -> Self {
        self.cursor_mode = mode;
        self
    }

    pub fn plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    pub fn styles(mut self, styles: Styles) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Start out focused. No timer is armed until the owner sends
    /// [`Event::InitialBlink`].
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn build(self) -> TextInput<M> {
        self.build_with(&ProcessIds)
    }

    /// Build, taking the widget's id from `ids`.
    pub fn build_with(self, ids: &dyn IdAllocator) -> TextInput<M> {
        let mut buffer = Buffer::with_limit(self.char_limit);
        buffer.set_value(&self.value);
        let mut input = TextInput {
            buffer,
            viewport: Viewport::default(),
            blinker: Blinker::new(ids.next_id(), self.blink_interval),
            focused: self.focused,
            cursor_mode: self.cursor_mode,
            echo_mode: self.echo_mode,
            mask: self.mask,
            prompt: self.prompt,
            placeholder: self.placeholder,
            width: self.width,
            plain: self.plain,
            styles: self.styles.unwrap_or_else(|| Styles::new(self.plain)),
            last_error: None,
            columns: self.columns,
        };
        input.show_cursor();
        input.refit();
        input
    }
}


/// A single-line text input field.
///
/// The widget is driven by its owner's event loop: every input is fed to
/// [`update`](Self::update), and whatever [`Action`] comes back is carried
/// out off the loop (see [`Effects`](crate::effects::Effects)), which
/// eventually posts another [`Event`]. [`render`](Self::render) turns the
/// current state into a string of styled terminal text.
#[derive(Debug)]
pub struct TextInput<M: DisplayWidth = UnicodeColumns> {
    pub(crate) buffer: Buffer,
    /// The visible part of the buffer
    pub(crate) viewport: Viewport,
    pub(crate) blinker: Blinker,
    pub(crate) focused: bool,
    pub(crate) cursor_mode: CursorMode,
    pub(crate) echo_mode: EchoMode,
    pub(crate) mask: char,
    pub(crate) prompt: String,
    pub(crate) placeholder: String,
    /// The width budget of the viewport, in columns
    pub(crate) width: u16,
    pub(crate) plain: bool,
    pub(crate) styles: Styles,
    /// The last failed clipboard read
    pub(crate) last_error: Option<ClipboardError>,
    pub(crate) columns: M,
}

impl TextInput<UnicodeColumns> {
    pub fn new() -> Self {
        TextInputBuilder::default().build()
    }

    pub fn builder() -> TextInputBuilder<UnicodeColumns> {
        TextInputBuilder::default()
    }
}

impl Default for TextInput<UnicodeColumns> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: DisplayWidth> TextInput<M> {
    pub fn id(&self) -> InstanceId {
        self.blinker.id()
    }

    pub fn value(&self) -> String {
        self.buffer.value()
    }

    pub fn cursor_position(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn cursor_mode(&self) -> CursorMode {
        self.cursor_mode
    }

    pub fn echo_mode(&self) -> EchoMode {
        self.echo_mode
    }

    pub fn last_error(&self) -> Option<&ClipboardError> {
        self.last_error.as_ref()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Whether the cursor is drawn highlighted right now.
    pub fn is_cursor_visible(&self) -> bool {
        self.blinker.is_visible()
    }

    /// The generation of the most recently armed blink timer.
    pub fn blink_generation(&self) -> u64 {
        self.blinker.generation()
    }

    pub fn blink_interval(&self) -> Duration {
        self.blinker.interval()
    }

    pub fn char_limit(&self) -> usize {
        self.buffer.limit()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Replace the text, cut to the char limit. The cursor keeps its
    /// position, clamped to the new text. Like any edit, this restarts the
    /// blink phase.
    #[must_use]
    pub fn set_value(&mut self, value: &str) -> Option<Action> {
        let changed = self.buffer.set_value(value);
        self.after_edit(changed)
    }

    /// Move the cursor, clamped to `[0, len]`.
    #[must_use]
    pub fn set_cursor(&mut self, pos: usize) -> Option<Action> {
        let changed = self.buffer.set_cursor(pos);
        self.after_edit(changed)
    }

    #[must_use]
    pub fn cursor_start(&mut self) -> Option<Action> {
        self.set_cursor(0)
    }

    #[must_use]
    pub fn cursor_end(&mut self) -> Option<Action> {
        self.set_cursor(self.buffer.len())
    }

    /// Clear the text and the last error.
    #[must_use]
    pub fn reset(&mut self) -> Option<Action> {
        self.last_error = None;
        let changed = self.buffer.clear();
        self.after_edit(changed)
    }

    /// Change the char limit, cutting the text if it is too long.
    #[must_use]
    pub fn set_char_limit(&mut self, limit: usize) -> Option<Action> {
        let changed = self.buffer.set_limit(limit);
        self.after_edit(changed)
    }

    pub fn set_width(&mut self, width: u16) {
        self.width = width;
        self.refit();
    }

    pub fn set_echo_mode(&mut self, echo_mode: EchoMode) {
        self.echo_mode = echo_mode;
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_blink_interval(&mut self, interval: Duration) {
        self.blinker.set_interval(interval);
    }

    /// Switch cursor modes. Any armed timer is cancelled; in blink mode a new
    /// one is returned to be started.
    #[must_use]
    pub fn set_cursor_mode(&mut self, mode: CursorMode) -> Option<Action> {
        self.cursor_mode = mode;
        self.blinker.cancel();
        self.show_cursor();
        self.blink_action()
    }

    /// Accept input. In blink mode the first blink timer is returned.
    #[must_use]
    pub fn focus(&mut self) -> Option<Action> {
        self.focused = true;
        self.show_cursor();
        self.blink_action()
    }

    /// Stop accepting input and hide the cursor.
    pub fn blur(&mut self) {
        self.focused = false;
        self.blinker.cancel();
        self.blinker.set_visible(false);
    }

    /// Process a single event, and return the follow-up work it calls for.
    pub fn update(&mut self, event: Event) -> Option<Action> {
        if !self.focused {
            return self.update_unfocused(event);
        }
        match event {
            Event::Key(key) => self.dispatch_key(key),
            Event::FocusGained => self.focus(),
            Event::FocusLost => {
                self.blur();
                None
            }
            Event::InitialBlink => self.blink_action(),
            Event::BlinkExpired(tag) => self.blink(tag),
            Event::BlinkCanceled => None,
            Event::Paste(text) => {
                let changed = self.buffer.insert(text.chars());
                self.after_edit(changed)
            }
            Event::PasteFailed(err) => {
                self.record_error(err);
                None
            }
        }
    }

    fn update_unfocused(&mut self, event: Event) -> Option<Action> {
        match event {
            Event::FocusGained => self.focus(),
            Event::PasteFailed(err) => {
                self.record_error(err);
                None
            }
            event => {
                log::debug!("[input {}] unfocused, ignoring {event:?}", self.id());
                self.blinker.set_visible(false);
                None
            }
        }
    }

    fn dispatch_key(&mut self, key: KeyEvent) -> Option<Action> {
        let echo = self.echo_mode;
        let changed = match key {
            key!(CONTROL-'v') => {
                log::debug!("[input {}] requesting clipboard contents", self.id());
                return Some(Action::ReadClipboard);
            }

            // Deletion:
            key!(@name Backspace) => self.buffer.delete_before(),
            key!(@name ALT-Backspace) | key!(CONTROL-'w') => self.buffer.delete_word_left(echo),
            key!(@name Delete) | key!(CONTROL-'d') => self.buffer.delete_at(),
            key!(@name ALT-Delete) | key!(ALT-'d') => self.buffer.delete_word_right(echo),
            key!(CONTROL-'u') => self.buffer.delete_before_cursor(),
            key!(CONTROL-'k') => self.buffer.delete_after_cursor(),

            // Navigation:
            key!(@name Left) | key!(CONTROL-'b') => self.buffer.cursor_left(),
            key!(@name Right) | key!(CONTROL-'f') => self.buffer.cursor_right(),
            key!(@name ALT|CONTROL-Left) | key!(ALT-'b') => self.buffer.word_left(echo),
            key!(@name ALT|CONTROL-Right) | key!(ALT-'f') => self.buffer.word_right(echo),
            key!(@name Home) | key!(CONTROL-'a') => self.buffer.cursor_start(),
            key!(@name End) | key!(CONTROL-'e') => self.buffer.cursor_end(),

            // Editing:
            key!(@c) | key!(SHIFT-@c) => self.buffer.insert([c]),

            _key => false,
        };
        self.after_edit(changed)
    }

    fn blink(&mut self, tag: BlinkTag) -> Option<Action> {
        match self.cursor_mode {
            CursorMode::Blink => {}
            CursorMode::Static | CursorMode::Hidden => return None,
        }
        if !self.blinker.expects(tag) {
            log::trace!("[input {}] ignoring stale blink {tag:?}", self.id());
            return None;
        }
        self.blinker.toggle();
        self.blink_action()
    }

    fn record_error(&mut self, err: ClipboardError) {
        log::warn!("[input {}] clipboard read failed: {err}", self.id());
        self.last_error = Some(err);
    }

    /// Refit the viewport, and restart the blink phase if anything changed.
    fn after_edit(&mut self, changed: bool) -> Option<Action> {
        self.refit();
        if !changed {
            return None;
        }
        self.show_cursor();
        self.blink_action()
    }

    /// A new blink timer, if the cursor is supposed to blink right now.
    fn blink_action(&mut self) -> Option<Action> {
        match self.cursor_mode {
            CursorMode::Blink if self.focused => Some(Action::Blink(self.blinker.arm())),
            CursorMode::Blink | CursorMode::Static | CursorMode::Hidden => None,
        }
    }

    fn show_cursor(&mut self) {
        let visible = match self.cursor_mode {
            CursorMode::Blink | CursorMode::Static => self.focused,
            CursorMode::Hidden => false,
        };
        self.blinker.set_visible(visible);
    }

    fn refit(&mut self) {
        let (chars, cursor) = (self.buffer.chars(), self.buffer.cursor());
        self.viewport.fit(chars, cursor, self.width, &self.columns);
    }
}
