//! Delivery queue between the listener thread and `receive` callers.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};
use slirc_proto::Message;

/// Outcome of a non-blocking or bounded pop.
#[derive(Debug)]
pub(crate) enum Pop {
    Message(Message),
    Empty,
    Closed,
}

#[derive(Debug, Default)]
struct State {
    messages: VecDeque<Message>,
    /// Set once by the listener on exit; queued messages stay deliverable.
    closed: bool,
}

/// FIFO of parsed messages with a "non-empty or closed" signal.
#[derive(Debug, Default)]
pub(crate) struct Inbox {
    state: Mutex<State>,
    ready: Condvar,
}

impl Inbox {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append every message of one read atomically, in order.
    pub(crate) fn push_batch(&self, batch: Vec<Message>) {
        if batch.is_empty() {
            return;
        }
        let count = batch.len();
        self.state.lock().messages.extend(batch);
        if count == 1 {
            self.ready.notify_one();
        } else {
            self.ready.notify_all();
        }
    }

    /// Mark the queue closed and wake every waiter.
    pub(crate) fn close(&self) {
        self.state.lock().closed = true;
        self.ready.notify_all();
    }

    /// Block until a message is available. `None` once closed and drained.
    pub(crate) fn pop(&self) -> Option<Message> {
        let mut state = self.state.lock();
        loop {
            if let Some(message) = state.messages.pop_front() {
                return Some(message);
            }
            if state.closed {
                return None;
            }
            self.ready.wait(&mut state);
        }
    }

    pub(crate) fn try_pop(&self) -> Pop {
        let mut state = self.state.lock();
        match state.messages.pop_front() {
            Some(message) => Pop::Message(message),
            None if state.closed => Pop::Closed,
            None => Pop::Empty,
        }
    }

    /// Like [`pop`](Self::pop), giving up after `timeout`.
    pub(crate) fn pop_timeout(&self, timeout: Duration) -> Pop {
        let deadline = Instant::now().checked_add(timeout);
        let mut state = self.state.lock();
        loop {
            if let Some(message) = state.messages.pop_front() {
                return Pop::Message(message);
            }
            if state.closed {
                return Pop::Closed;
            }
            match deadline {
                Some(deadline) => {
                    if self.ready.wait_until(&mut state, deadline).timed_out() {
                        return match state.messages.pop_front() {
                            Some(message) => Pop::Message(message),
                            None if state.closed => Pop::Closed,
                            None => Pop::Empty,
                        };
                    }
                }
                // Timeout too large to represent.
                None => self.ready.wait(&mut state),
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.state.lock().messages.len()
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.state.lock().closed
    }
}
