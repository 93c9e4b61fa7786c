//!

use crate::error::ClipboardError;

/// Read access to a clipboard. Reads may block, so they are only ever
/// performed by [`Effects`](crate::effects::Effects), off the event loop.
pub trait Clipboard: Send + Sync {
    fn read_text(&self) -> Result<String, ClipboardError>;
}

/// The system clipboard.
#[derive(Default, Clone, Copy, Debug)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        // Connect per read, the clipboard may be unavailable at times
        let mut clipboard = arboard::Clipboard::new()?;
        Ok(clipboard.get_text()?)
    }
}

/// A clipboard with fixed contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedClipboard(pub Result<String, ClipboardError>);

impl Clipboard for FixedClipboard {
    fn read_text(&self) -> Result<String, ClipboardError> {
        self.0.clone()
    }
}
