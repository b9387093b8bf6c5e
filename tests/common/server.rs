//! Scripted loopback server.

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::{Duration, Instant};

use slirc_client::ClientConfig;

/// How long any single expectation waits before failing the test.
pub const PATIENCE: Duration = Duration::from_secs(5);

/// A listening socket on an ephemeral loopback port.
pub struct TestServer {
    listener: TcpListener,
    port: u16,
}

#[allow(dead_code)]
impl TestServer {
    pub fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let port = listener.local_addr().expect("local addr").port();
        Self { listener, port }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Client configuration pointing at this server, with a short read
    /// timeout so shutdown is observed quickly.
    pub fn config(&self, nickname: &str) -> ClientConfig {
        ClientConfig::new("127.0.0.1", self.port, nickname, format!("{nickname} test"))
            .with_read_timeout(Duration::from_millis(50))
    }

    /// Accept the next connection.
    pub fn accept(&self) -> ServerConn {
        let (stream, _) = self.listener.accept().expect("accept");
        stream.set_read_timeout(Some(PATIENCE)).expect("read timeout");
        ServerConn {
            reader: BufReader::new(stream.try_clone().expect("clone")),
            writer: stream,
        }
    }
}

/// Server side of one accepted connection.
pub struct ServerConn {
    reader: BufReader<TcpStream>,
    writer: TcpStream,
}

#[allow(dead_code)]
impl ServerConn {
    /// Next line from the client with CRLF removed, or `None` on EOF.
    pub fn next_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                assert!(line.ends_with("\r\n"), "unterminated line {line:?}");
                line.truncate(line.len() - 2);
                Some(line)
            }
            Err(e) if e.kind() == std::io::ErrorKind::ConnectionReset => None,
            Err(e) => panic!("read from client failed: {e}"),
        }
    }

    /// Next line from the client; panics on EOF.
    pub fn read_line(&mut self) -> String {
        self.next_line().expect("client closed the connection")
    }

    /// Consume the registration burst and return it.
    pub fn registration(&mut self, with_password: bool) -> Vec<String> {
        let count = if with_password { 3 } else { 2 };
        (0..count).map(|_| self.read_line()).collect()
    }

    /// Write raw bytes in one go.
    pub fn send(&mut self, bytes: &[u8]) {
        self.writer.write_all(bytes).expect("write to client");
        self.writer.flush().expect("flush");
    }

    /// Write `bytes` in pieces of `size`, pausing between them so the client
    /// sees separate reads.
    pub fn send_chunked(&mut self, bytes: &[u8], size: usize) {
        for chunk in bytes.chunks(size) {
            self.send(chunk);
            thread::sleep(Duration::from_millis(1));
        }
    }

    /// Close the connection from the server side.
    pub fn close(self) {
        let _ = self.writer.shutdown(std::net::Shutdown::Both);
    }
}

/// Poll `condition` until it holds or [`PATIENCE`] runs out.
#[allow(dead_code)]
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + PATIENCE;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}
