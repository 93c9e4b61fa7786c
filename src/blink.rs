//! Cursor blinking.
//!
//! A widget arms at most one timer at a time. Each timer carries a
//! [`BlinkTag`] naming the widget and the blink generation it was armed in,
//! and the widget keeps the sending half of a cancellation channel for it.
//! Re-arming, switching cursor modes, losing focus or dropping the widget
//! drops that sender, which wakes the timer up early as cancelled. An expiry
//! that raced with the cancellation is still rejected by its stale tag.

use crate::{event::Event, ids::InstanceId};
use crossbeam::channel::{self, Receiver, Sender};
use std::time::Duration;

pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(530);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlinkTag {
    pub id: InstanceId,
    pub generation: u64,
}

/// A single-shot timer, to be waited on off the event loop thread.
#[derive(Debug)]
pub struct BlinkTimer {
    tag: BlinkTag,
    interval: Duration,
    cancel: Receiver<()>,
}

impl BlinkTimer {
    pub fn tag(&self) -> BlinkTag {
        self.tag
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self.cancel.try_recv(),
            Err(channel::TryRecvError::Disconnected)
        )
    }

    /// Block until the interval elapses or the timer is cancelled.
    pub fn wait(self) -> Event {
        channel::select! {
            recv(self.cancel) -> _ => Event::BlinkCanceled,
            default(self.interval) => Event::BlinkExpired(self.tag),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Blinker {
    id: InstanceId,
    generation: u64,
    interval: Duration,
    /// Whether the cursor is currently drawn highlighted.
    visible: bool,
    /// The cancellation handle of the armed timer, if any.
    armed: Option<Sender<()>>,
}

impl Blinker {
    pub(crate) fn new(id: InstanceId, interval: Duration) -> Self {
        Self {
            id,
            generation: 0,
            interval,
            visible: false,
            armed: None,
        }
    }

    pub(crate) fn id(&self) -> InstanceId {
        self.id
    }

    pub(crate) fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }

    pub(crate) fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Cancel the armed timer, if any, then arm a new one.
    pub(crate) fn arm(&mut self) -> BlinkTimer {
        self.cancel();
        self.generation += 1;
        let (sender, receiver) = channel::bounded(0);
        self.armed = Some(sender);
        log::trace!("[blink] armed {:?} for {:?}", self.tag(), self.interval);
        BlinkTimer {
            tag: self.tag(),
            interval: self.interval,
            cancel: receiver,
        }
    }

    pub(crate) fn cancel(&mut self) {
        if self.armed.take().is_some() {
            log::trace!("[blink] cancelled {:?}", self.tag());
        }
    }

    /// Whether `tag` belongs to the timer that is armed right now.
    pub(crate) fn expects(&self, tag: BlinkTag) -> bool {
        self.is_armed() && tag == self.tag()
    }

    pub(crate) fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    fn tag(&self) -> BlinkTag {
        BlinkTag { id: self.id, generation: self.generation }
    }
}
