//! Background read loop.
//!
//! One listener per connection. Each iteration reads once, reassembles
//! frames, answers keep-alive probes on the write path, parses the rest and
//! enqueues them as one batch. The loop ends on EOF, on a read or PONG write
//! failure, or when the running flag is cleared.

use std::borrow::Cow;
use std::io::{self, ErrorKind, Read, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bytes::Bytes;
use parking_lot::Mutex;
use slirc_proto::{LineBuffer, Message, UnknownCodePolicy, keepalive};
use tracing::{debug, error, info, trace, warn};

use super::inbox::Inbox;
use crate::error::ClientError;
use crate::transport::write_line;

pub(crate) type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Why the loop stopped.
#[derive(Debug)]
enum Exit {
    Stopped,
    Eof,
    Read(io::Error),
    Pong(ClientError),
}

pub(crate) struct Listener<R> {
    pub(crate) reader: R,
    pub(crate) writer: SharedWriter,
    pub(crate) inbox: Arc<Inbox>,
    pub(crate) running: Arc<AtomicBool>,
    pub(crate) policy: UnknownCodePolicy,
    pub(crate) buffer_size: usize,
}

impl<R: Read> Listener<R> {
    /// Run until shutdown, then close the inbox.
    pub(crate) fn run(mut self) {
        let exit = self.read_loop();

        self.running.store(false, Ordering::Release);
        self.inbox.close();

        match exit {
            Exit::Stopped => debug!("Listener stopped"),
            Exit::Eof => info!("Server closed the connection"),
            Exit::Read(e) => warn!(error = %e, "Read failed, closing connection"),
            Exit::Pong(e) => error!(error = %e, "Failed to answer keep-alive, closing connection"),
        }
    }

    fn read_loop(&mut self) -> Exit {
        let mut frames = LineBuffer::with_capacity(self.buffer_size);
        let mut buf = vec![0u8; self.buffer_size];

        loop {
            if !self.running.load(Ordering::Acquire) {
                return Exit::Stopped;
            }

            let n = match self.reader.read(&mut buf) {
                Ok(0) => return self.stopped_or(Exit::Eof),
                Ok(n) => n,
                Err(e) if is_timeout(&e) => continue,
                Err(e) => return self.stopped_or(Exit::Read(e)),
            };

            let mut batch = Vec::new();
            let handled = self.handle_frames(frames.push(&buf[..n]), &mut batch);
            self.inbox.push_batch(batch);
            if let Err(e) = handled {
                return Exit::Pong(e);
            }
        }
    }

    /// A shutdown-induced EOF or error is a normal stop.
    fn stopped_or(&self, exit: Exit) -> Exit {
        if self.running.load(Ordering::Acquire) {
            exit
        } else {
            Exit::Stopped
        }
    }

    /// Parse `frames` into `batch`, answering keep-alive probes on the way.
    /// Stops at the first PONG that cannot be written.
    fn handle_frames(&self, frames: Vec<Bytes>, batch: &mut Vec<Message>) -> Result<(), ClientError> {
        for frame in frames {
            if frame.is_empty() {
                continue;
            }

            let line = String::from_utf8_lossy(&frame);
            if let Cow::Owned(_) = line {
                debug!(bytes = frame.len(), "Frame is not valid UTF-8, decoded lossily");
            }
            trace!(direction = "in", line = %line, "IRC line");

            if let Some(pong) = keepalive::probe_response(&line) {
                write_line(&self.writer, &pong)?;
                debug!(line = %pong, "Answered keep-alive");
                continue;
            }

            match Message::parse(&line, self.policy) {
                Ok(message) => batch.push(message),
                Err(e) => warn!(frame = %line, error = %e, "Dropping unparsable frame"),
            }
        }

        Ok(())
    }
}

fn is_timeout(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        ErrorKind::WouldBlock | ErrorKind::TimedOut | ErrorKind::Interrupted
    )
}
