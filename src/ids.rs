//! Identity of input widgets, used to route blink timer events back to the
//! widget that armed the timer.

use lazy_static::lazy_static;
use std::sync::Mutex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, derive_more::From)]
pub struct InstanceId(u64);

pub trait IdAllocator {
    fn next_id(&self) -> InstanceId;
}

lazy_static! {
    static ref LAST_ID: Mutex<u64> = Mutex::new(0);
}

/// Hands out ids from a single counter shared by the whole process.
#[derive(Default, Clone, Copy, Debug)]
pub struct ProcessIds;

impl IdAllocator for ProcessIds {
    fn next_id(&self) -> InstanceId {
        // A poisoned counter is still a valid counter
        let mut last = LAST_ID.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *last += 1;
        InstanceId(*last)
    }
}

/// Hands out `start, start + 1, ...`; for deterministic ids in tests.
#[derive(Debug)]
pub struct SequentialIds {
    next: Mutex<u64>,
}

impl SequentialIds {
    pub fn starting_at(start: u64) -> Self {
        Self { next: Mutex::new(start) }
    }
}

impl IdAllocator for SequentialIds {
    fn next_id(&self) -> InstanceId {
        let mut next = self.next.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let id = InstanceId(*next);
        *next += 1;
        id
    }
}
