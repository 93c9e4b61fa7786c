//! A single-line text input widget for terminal user interfaces.
//!
//! The widget owns a text buffer, a cursor, a horizontally scrolling viewport
//! and a blinking cursor. It is driven by an event loop it doesn't own:
//!
//! ```no_run
//! use input_block::prelude::*;
//!
//! fn main() -> InputResult<()> {
//!     let (sender, receiver) = crossbeam::channel::unbounded();
//!     let effects = Effects::new(sender.clone());
//!     let mut input = TextInput::builder().placeholder("name").width(20).build();
//!     effects.perform_all(input.focus())?;
//!     std::thread::spawn(move || {
//!         while let Ok(event) = crossterm::event::read() {
//!             if let Some(event) = Event::from_terminal(event) {
//!                 if sender.send(event).is_err() { break; }
//!             }
//!         }
//!     });
//!     for event in receiver {
//!         effects.perform_all(input.update(event))?;
//!         print!("\r{}", input.render());
//!     }
//!     Ok(())
//! }
//! ```

mod blink;
mod buffer;
mod clipboard;
mod config;
mod effects;
mod error;
mod event;
mod ids;
mod input;
mod macros;
mod mode;
mod render;
mod viewport;
mod width;
mod word;

pub mod prelude {
    pub use camino::{Utf8Path, Utf8PathBuf};
    pub use crate::{
        blink::{BlinkTag, BlinkTimer, DEFAULT_BLINK_INTERVAL},
        buffer::Buffer,
        clipboard::{Clipboard, FixedClipboard, SystemClipboard},
        config::Config,
        effects::Effects,
        error::{ClipboardError, InputError, InputResult},
        event::{Action, Event},
        ids::{IdAllocator, InstanceId, ProcessIds, SequentialIds},
        input::{TextInput, TextInputBuilder},
        mode::{CursorMode, EchoMode},
        render::{Styles, PLAIN_CURSOR},
        viewport::Viewport,
        width::{DisplayWidth, UnicodeColumns},
    };
    pub use crossterm::style::{Color, ContentStyle, Stylize};
}
