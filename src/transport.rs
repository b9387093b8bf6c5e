//! Blocking byte-stream transport.
//!
//! A connected stream is split into three handles: the read half, owned by
//! the listener thread; the write half, shared behind the client's write
//! lock; and a closer that shuts both directions down, which is how a
//! blocked read is interrupted on drop.

use std::io::{self, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use parking_lot::Mutex;
use slirc_proto::line::encode_line;
use tracing::{debug, trace};

use crate::config::IpVersion;
use crate::error::{ClientError, Result};

/// Shuts a connection down from any thread.
pub trait Closer: Send + Sync + 'static {
    /// Shut down both directions. Errors are ignored; the peer may already
    /// be gone.
    fn close(&self);
}

/// The three handles of a split connection.
pub struct Split<R, W, C> {
    /// Read half, moved into the listener thread.
    pub reader: R,
    /// Write half, shared behind the write lock.
    pub writer: W,
    /// Shuts both halves down.
    pub closer: C,
}

/// A connected, reliable, ordered byte stream.
pub trait TransportStream: Sized {
    type Reader: Read + Send + 'static;
    type Writer: Write + Send + 'static;
    type Closer: Closer;

    /// Split the stream. Reads on the returned reader fail with
    /// `WouldBlock`/`TimedOut` after `read_timeout`; `None` blocks forever.
    fn split(
        self,
        read_timeout: Option<Duration>,
    ) -> io::Result<Split<Self::Reader, Self::Writer, Self::Closer>>;
}

impl Closer for TcpStream {
    fn close(&self) {
        let _ = self.shutdown(Shutdown::Both);
    }
}

impl TransportStream for TcpStream {
    type Reader = TcpStream;
    type Writer = TcpStream;
    type Closer = TcpStream;

    fn split(
        self,
        read_timeout: Option<Duration>,
    ) -> io::Result<Split<TcpStream, TcpStream, TcpStream>> {
        self.set_nodelay(true)?;
        // A zero timeout is rejected by the OS; treat it as "no timeout".
        self.set_read_timeout(read_timeout.filter(|t| !t.is_zero()))?;
        Ok(Split {
            reader: self.try_clone()?,
            closer: self.try_clone()?,
            writer: self,
        })
    }
}

/// Resolve `host:port` and connect to the first reachable address of the
/// requested IP version.
pub fn connect(
    host: &str,
    port: u16,
    version: IpVersion,
    timeout: Duration,
) -> Result<TcpStream> {
    let addrs: Vec<SocketAddr> = (host, port)
        .to_socket_addrs()?
        .filter(|addr| version.matches(addr))
        .collect();

    let mut last_error = None;
    for addr in &addrs {
        debug!(%addr, "Connecting");
        let attempt = if timeout.is_zero() {
            TcpStream::connect(addr)
        } else {
            TcpStream::connect_timeout(addr, timeout)
        };
        match attempt {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                debug!(%addr, error = %e, "Connect attempt failed");
                last_error = Some(e);
            }
        }
    }

    Err(match last_error {
        Some(e) => ClientError::Io(e),
        None => ClientError::NoAddress {
            host: host.to_owned(),
            port,
            version,
        },
    })
}

/// Validate `line`, append CRLF and write it while holding the write lock.
///
/// Nothing is written if validation fails.
pub(crate) fn write_line<W: Write + ?Sized>(writer: &Mutex<Box<W>>, line: &str) -> Result<()> {
    let buf = encode_line(line)?;
    let mut writer = writer.lock();
    writer.write_all(&buf)?;
    writer.flush()?;
    trace!(direction = "out", line, "IRC line");
    Ok(())
}
