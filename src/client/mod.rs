//! Client - owns a single connection to an IRC server.
//!
//! ```text
//!   caller threads                     listener thread
//!   ──────────────                     ───────────────
//!   send() ──▶ [write lock] ──▶ socket ◀── read ──┐
//!                  ▲                              │ LineBuffer
//!                  └──────── PONG ◀── keep-alive ─┤
//!                                                 │ Message::parse
//!   receive() ◀── [Inbox: Mutex + Condvar] ◀──────┘
//! ```
//!
//! Construction connects, starts the listener and registers (optional PASS,
//! then NICK and USER). Dropping the client clears the running flag, shuts
//! the socket down and joins the listener; unread messages are released with
//! it.

mod inbox;
mod listener;

use std::io::Write;
use std::net::TcpStream;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use parking_lot::Mutex;
use slirc_proto::{CommandExt, Message};
use tracing::{debug, info, warn};

use self::inbox::{Inbox, Pop};
use self::listener::{Listener, SharedWriter};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::transport::{self, Closer, Split, TransportStream, write_line};

/// A registered connection to an IRC server.
///
/// `Client` is `Sync`: any number of threads may call [`send`](Self::send)
/// and [`receive`](Self::receive) through a shared reference. Every builder
/// of [`CommandExt`] is available on it.
pub struct Client {
    host: String,
    port: u16,
    nickname: String,
    writer: SharedWriter,
    closer: Box<dyn Closer>,
    inbox: Arc<Inbox>,
    running: Arc<AtomicBool>,
    listener: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("nickname", &self.nickname)
            .field("running", &self.running.load(Ordering::Acquire))
            .field("pending", &self.inbox.len())
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Resolve and connect to the configured server, then register.
    pub fn connect(config: &ClientConfig) -> Result<Client> {
        config.validate()?;
        let stream: TcpStream = transport::connect(
            &config.server.host,
            config.server.port,
            config.server.ip_version,
            config.connection.connect_timeout(),
        )?;
        Self::from_stream(stream, config)
    }

    /// Take over an already connected stream, then register.
    pub fn from_stream<S: TransportStream>(stream: S, config: &ClientConfig) -> Result<Client> {
        let read_timeout = Some(config.connection.read_timeout());
        let Split {
            reader,
            writer,
            closer,
        } = stream.split(read_timeout)?;

        let writer: Box<dyn Write + Send> = Box::new(writer);
        let writer: SharedWriter = Arc::new(Mutex::new(writer));
        let inbox = Arc::new(Inbox::new());
        let running = Arc::new(AtomicBool::new(true));

        let listener = Listener {
            reader,
            writer: Arc::clone(&writer),
            inbox: Arc::clone(&inbox),
            running: Arc::clone(&running),
            policy: config.connection.unknown_numerics,
            buffer_size: config.connection.read_buffer_size.max(1),
        };
        let handle = thread::Builder::new()
            .name(format!("slirc-listener-{}", config.server.host))
            .spawn(move || listener.run());
        let handle = match handle {
            Ok(handle) => handle,
            Err(e) => {
                closer.close();
                return Err(ClientError::ListenerSpawn(e));
            }
        };

        let client = Client {
            host: config.server.host.clone(),
            port: config.server.port,
            nickname: config.identity.nickname.clone(),
            writer,
            closer: Box::new(closer),
            inbox,
            running,
            listener: Some(handle),
        };

        info!(
            server = %client.host,
            port = client.port,
            nick = %client.nickname,
            "Connected"
        );
        client.register(config)?;
        Ok(client)
    }

    fn register(&self, config: &ClientConfig) -> Result<()> {
        if let Some(password) = config.server.password.as_deref().filter(|p| !p.is_empty()) {
            debug!("Sending PASS");
            self.pass(password)?;
        }
        debug!(nick = %config.identity.nickname, "Sending NICK");
        self.nick(&config.identity.nickname)?;
        debug!(realname = %config.identity.realname, "Sending USER");
        self.user(&config.identity.nickname, &config.identity.realname, &[])
    }

    /// Send one raw line; CRLF is appended.
    ///
    /// Lines longer than 510 bytes, or containing CR or LF, are rejected
    /// before anything reaches the socket. A failed write is fatal: the
    /// connection is shut down and later calls fail with
    /// [`ClientError::ConnectionClosed`].
    pub fn send(&self, line: &str) -> Result<()> {
        slirc_proto::line::validate_line(line)?;
        if !self.is_connected() {
            return Err(ClientError::ConnectionClosed);
        }
        match write_line(&self.writer, line) {
            Err(ClientError::Io(e)) => {
                warn!(server = %self.host, error = %e, "Write failed, closing connection");
                self.shut_down();
                Err(ClientError::Io(e))
            }
            result => result,
        }
    }

    /// Clear the running flag and shut the socket down; the listener sees
    /// either on its next read and closes the inbox.
    fn shut_down(&self) {
        self.running.store(false, Ordering::Release);
        self.closer.close();
    }

    /// Block until a message arrives and return the oldest one.
    ///
    /// Messages received before a disconnect are still delivered; after
    /// that this fails with [`ClientError::ConnectionClosed`].
    pub fn receive(&self) -> Result<Message> {
        self.inbox.pop().ok_or(ClientError::ConnectionClosed)
    }

    /// Return the oldest message if one is queued.
    pub fn try_receive(&self) -> Result<Option<Message>> {
        match self.inbox.try_pop() {
            Pop::Message(message) => Ok(Some(message)),
            Pop::Empty => Ok(None),
            Pop::Closed => Err(ClientError::ConnectionClosed),
        }
    }

    /// Like [`receive`](Self::receive), returning `Ok(None)` after `timeout`.
    pub fn receive_timeout(&self, timeout: Duration) -> Result<Option<Message>> {
        match self.inbox.pop_timeout(timeout) {
            Pop::Message(message) => Ok(Some(message)),
            Pop::Empty => Ok(None),
            Pop::Closed => Err(ClientError::ConnectionClosed),
        }
    }

    /// Number of messages waiting to be received.
    pub fn pending(&self) -> usize {
        self.inbox.len()
    }

    /// Returns true while the listener is running.
    pub fn is_connected(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Nickname the client registered with.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Server host as configured.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Server port as configured.
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl CommandExt for Client {
    type Error = ClientError;

    fn send_line(&self, line: &str) -> Result<()> {
        self.send(line)
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        self.shut_down();
        if let Some(handle) = self.listener.take() {
            let _ = handle.join();
        }
        debug!(server = %self.host, unread = self.inbox.len(), "Client dropped");
    }
}
