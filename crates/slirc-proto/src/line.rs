//! CRLF framing for the IRC wire format.
//!
//! Inbound bytes arrive in arbitrary chunks. [`split_frames`] is the pure
//! form of reassembly: given everything accumulated so far it returns the
//! complete frames and the unterminated tail. [`LineBuffer`] keeps that tail
//! between reads so a listener can feed it chunk after chunk.
//!
//! Outbound lines go through [`encode_line`], which enforces the 510 byte
//! per-line limit before appending the delimiter.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{self, ProtocolError};

/// Frame delimiter.
pub const DELIMITER: &[u8; 2] = b"\r\n";

/// Maximum length of a line, excluding [`DELIMITER`].
pub const MAX_LINE_LEN: usize = 510;

fn find_delimiter(buf: &[u8]) -> Option<usize> {
    buf.windows(DELIMITER.len()).position(|w| w == DELIMITER)
}

/// Split `buf` into complete frames and the leftover remainder.
///
/// Frames never contain the delimiter. The remainder is everything after the
/// last delimiter and is empty when `buf` ends on one. No length limit is
/// applied here.
///
/// ```
/// use slirc_proto::line::split_frames;
///
/// let (frames, rest) = split_frames(b"PING :a\r\n:srv 001 me :hi\r\n:srv NOT");
/// assert_eq!(frames, vec![&b"PING :a"[..], &b":srv 001 me :hi"[..]]);
/// assert_eq!(rest, b":srv NOT");
/// ```
pub fn split_frames(buf: &[u8]) -> (Vec<&[u8]>, &[u8]) {
    let mut frames = Vec::new();
    let mut start = 0;

    while let Some(offset) = find_delimiter(&buf[start..]) {
        frames.push(&buf[start..start + offset]);
        start += offset + DELIMITER.len();
    }

    (frames, &buf[start..])
}

/// Accumulates inbound bytes and hands out complete frames.
///
/// The buffered tail is the remainder of [`split_frames`]; the frames it
/// yields are identical regardless of how the input was chunked.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buf: BytesMut,
    /// Index of the next byte to scan for a delimiter.
    next_index: usize,
}

impl LineBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(capacity),
            next_index: 0,
        }
    }

    /// Append freshly received bytes.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Take the next complete frame, if one is buffered.
    pub fn next_frame(&mut self) -> Option<Bytes> {
        // A CR at the very end of the previous scan may pair with a new LF.
        let from = self.next_index.saturating_sub(1);
        match find_delimiter(&self.buf[from..]) {
            Some(offset) => {
                let frame = self.buf.split_to(from + offset).freeze();
                self.buf.advance(DELIMITER.len());
                self.next_index = 0;
                Some(frame)
            }
            None => {
                self.next_index = self.buf.len();
                None
            }
        }
    }

    /// Append `bytes` and drain every frame completed by them.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<Bytes> {
        self.extend_from_slice(bytes);
        std::iter::from_fn(|| self.next_frame()).collect()
    }

    /// Bytes received after the last delimiter.
    pub fn remainder(&self) -> &[u8] {
        &self.buf
    }

    /// Returns true if no partial frame is buffered.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

/// Check that `line` can be sent as a single frame.
///
/// The line must not contain CR or LF, which would split it into several
/// frames on the wire, and must fit in [`MAX_LINE_LEN`] bytes.
pub fn validate_line(line: &str) -> error::Result<()> {
    if let Some(ch) = line.chars().find(|c| matches!(c, '\r' | '\n')) {
        return Err(ProtocolError::IllegalControlChar(ch));
    }
    if line.len() > MAX_LINE_LEN {
        return Err(ProtocolError::MessageTooLong {
            actual: line.len(),
            limit: MAX_LINE_LEN,
        });
    }
    Ok(())
}

/// Validate `line` and append the delimiter.
pub fn encode_line(line: &str) -> error::Result<BytesMut> {
    validate_line(line)?;
    let mut dst = BytesMut::with_capacity(line.len() + DELIMITER.len());
    dst.put_slice(line.as_bytes());
    dst.put_slice(DELIMITER);
    Ok(dst)
}
