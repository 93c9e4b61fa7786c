//!

use serde_json::Error as SerdeJsonError;

pub type InputResult<T> = std::result::Result<T, InputError>;

#[derive(Debug, displaydoc::Display, derive_more::From)]
pub enum InputError {
    /// I/O error: {0}
    IoError(std::io::Error),
    /// SerdeJsonError: {0}
    SerdeJson(SerdeJsonError),
    /// Clipboard error: {0}
    Clipboard(ClipboardError),
}

impl std::error::Error for InputError {}

/// A failed clipboard read. Recorded on the widget, never fatal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, displaydoc::Display)]
pub enum ClipboardError {
    /// the clipboard holds no text
    Empty,
    /// the clipboard is unavailable: {0}
    Unavailable(String),
}

impl std::error::Error for ClipboardError {}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ContentNotAvailable => Self::Empty,
            err => Self::Unavailable(err.to_string()),
        }
    }
}
