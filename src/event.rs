//!

use crate::{
    blink::{BlinkTag, BlinkTimer},
    error::ClipboardError,
};
use crossterm::event::{self as term, KeyEvent};

/// Everything that can be fed into [`TextInput::update`].
///
/// [`TextInput::update`]: crate::input::TextInput::update
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    FocusGained,
    FocusLost,
    /// Start blinking, if the widget is focused and in blink mode.
    InitialBlink,
    /// A blink timer ran out.
    BlinkExpired(BlinkTag),
    /// A blink timer was cancelled before it ran out.
    BlinkCanceled,
    /// Text read from the clipboard, or pasted by the terminal.
    Paste(String),
    /// Reading the clipboard failed.
    PasteFailed(ClipboardError),
}

impl Event {
    /// Convert a terminal event, dropping those an input field doesn't handle.
    pub fn from_terminal(event: term::Event) -> Option<Self> {
        match event {
            term::Event::Key(key) => Some(Self::Key(key)),
            term::Event::FocusGained => Some(Self::FocusGained),
            term::Event::FocusLost => Some(Self::FocusLost),
            term::Event::Paste(text) => Some(Self::Paste(text)),
            term::Event::Mouse(_) | term::Event::Resize(_, _) => None,
        }
    }
}

impl From<KeyEvent> for Event {
    fn from(key: KeyEvent) -> Self {
        Self::Key(key)
    }
}

/// Follow-up work requested by the widget. Actions are carried out off the
/// event loop, and report back by posting an [`Event`].
#[derive(Debug)]
pub enum Action {
    /// Wait for the timer, then post its expiry (or cancellation).
    Blink(BlinkTimer),
    /// Read the system clipboard, then post `Paste` or `PasteFailed`.
    ReadClipboard,
}

impl Action {
    pub fn is_blink(&self) -> bool {
        matches!(self, Self::Blink(_))
    }

    pub fn blink_tag(&self) -> Option<BlinkTag> {
        match self {
            Self::Blink(timer) => Some(timer.tag()),
            Self::ReadClipboard => None,
        }
    }
}
