//! Delayed transcript appends, tagged with the run epoch that queued them.

use std::time::Instant;

use crate::model::{Sender, Severity};

/// A transcript line waiting for its due time.
#[derive(Debug, Clone)]
pub(super) struct Scheduled {
    pub epoch: u64,
    pub due: Instant,
    pub sender: Sender,
    pub text: String,
    pub severity: Severity,
}

/// Pending appends, applied in due order.
#[derive(Debug, Default)]
pub(super) struct Schedule {
    queue: Vec<Scheduled>,
}

impl Schedule {
    pub fn push(&mut self, item: Scheduled) {
        self.queue.push(item);
    }

    /// Remove and return every item due at or before `now`, earliest first.
    ///
    /// Items with equal due times keep their queueing order.
    pub fn take_due(&mut self, now: Instant) -> Vec<Scheduled> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.queue.drain(..).partition(|item| item.due <= now);
        self.queue = rest;
        due.sort_by_key(|item| item.due);
        due
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.queue.iter().map(|item| item.due).min()
    }

    /// Whether anything queued under `epoch` is still waiting.
    pub fn has_pending(&self, epoch: u64) -> bool {
        self.queue.iter().any(|item| item.epoch == epoch)
    }
}
