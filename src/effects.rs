//! Carrying out [`Action`]s off the event loop.

use crate::{
    clipboard::{Clipboard, SystemClipboard},
    error::InputResult,
    event::{Action, Event},
};
use crossbeam::channel::Sender;
use std::sync::Arc;
use std::thread;

/// Performs the follow-up work requested by input widgets on background
/// threads, and posts the outcome as an [`Event`] into the owner's queue.
/// The widgets themselves are never touched from those threads.
pub struct Effects<C: Clipboard = SystemClipboard> {
    events: Sender<Event>,
    clipboard: Arc<C>,
}

impl Effects<SystemClipboard> {
    pub fn new(events: Sender<Event>) -> Self {
        Self::with_clipboard(events, SystemClipboard)
    }
}

impl<C: Clipboard + 'static> Effects<C> {
    pub fn with_clipboard(events: Sender<Event>, clipboard: C) -> Self {
        Self { events, clipboard: Arc::new(clipboard) }
    }

    /// Start carrying out `action`. This never blocks.
    pub fn perform(&self, action: Action) -> InputResult<()> {
        let events = self.events.clone();
        match action {
            Action::Blink(timer) => {
                thread::Builder::new()
                    .name("input-blink".to_string())
                    .spawn(move || post(&events, timer.wait()))?;
            }
            Action::ReadClipboard => {
                let clipboard = Arc::clone(&self.clipboard);
                thread::Builder::new()
                    .name("input-clipboard".to_string())
                    .spawn(move || {
                        let event = match clipboard.read_text() {
                            Ok(text) => Event::Paste(text),
                            Err(err) => Event::PasteFailed(err),
                        };
                        post(&events, event);
                    })?;
            }
        }
        Ok(())
    }

    /// Like [`perform`](Self::perform), for the optional outcome of `update`.
    pub fn perform_all(&self, actions: impl IntoIterator<Item = Action>) -> InputResult<()> {
        for action in actions {
            self.perform(action)?;
        }
        Ok(())
    }
}

fn post(events: &Sender<Event>, event: Event) {
    if let Err(err) = events.send(event) {
        log::warn!("[effects] event queue is gone, dropping {:?}", err.into_inner());
    }
}
