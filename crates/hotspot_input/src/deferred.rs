//! End-of-cycle task queue.
//!
//! An input cycle is everything a host delivers for one raw input: a release and the
//! click it synthesizes, for example. Work scheduled here runs when the cycle ends,
//! after every event of the cycle and before the first event of the next one. It is a
//! sequencing device on one thread, not a timer.

use std::collections::VecDeque;

/// FIFO of tasks waiting for the end of the current input cycle.
#[derive(Debug, Clone)]
pub struct DeferredQueue<T> {
    pending: VecDeque<T>,
}

impl<T> DeferredQueue<T> {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Schedule a task for the end of the current cycle.
    pub fn schedule(&mut self, task: T) {
        self.pending.push_back(task);
    }

    /// Remove and return every pending task in scheduling order.
    ///
    /// Tasks scheduled while the returned batch is processed stay queued for the
    /// next call.
    pub fn take_pending(&mut self) -> Vec<T> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<T> Default for DeferredQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
