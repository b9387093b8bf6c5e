//! # slirc-proto
//!
//! Wire-level building blocks for an IRC client: CRLF frame reassembly,
//! positional message parsing with numeric reply classification, keep-alive
//! probe detection, and outbound command builders.
//!
//! ## Features
//!
//! - Chunk-boundary independent frame splitting ([`line`])
//! - `[:prefix] keyword target body` parsing into [`Message`]
//! - A constant registry of RFC 2812 numeric replies ([`Response`])
//! - Relaxed or strict handling of unknown numeric codes
//! - One builder per client command ([`CommandExt`])
//! - Optional `serde` support for the plain data types

#![deny(clippy::all)]
#![warn(missing_docs)]

//! ## Quick Start
//!
//! ### Parsing IRC Messages
//!
//! ```rust
//! use slirc_proto::{Message, Response};
//!
//! let message: Message = ":irc.example.net 001 alice :Welcome".parse().expect("valid frame");
//! assert_eq!(message.response(), Some(Response::RPL_WELCOME));
//! assert_eq!(message.target(), "alice");
//! ```
//!
//! ### Reassembling Frames
//!
//! ```rust
//! use slirc_proto::LineBuffer;
//!
//! let mut buffer = LineBuffer::new();
//! assert!(buffer.push(b"PING :ab").is_empty());
//! let frames = buffer.push(b"c\r\n");
//! assert_eq!(&frames[0][..], b"PING :abc");
//! ```
//!
//! ### Building Commands
//!
//! ```rust
//! use std::cell::RefCell;
//! use slirc_proto::{CommandExt, ProtocolError};
//!
//! struct Outbox(RefCell<Vec<String>>);
//!
//! impl CommandExt for Outbox {
//!     type Error = ProtocolError;
//!
//!     fn send_line(&self, line: &str) -> Result<(), ProtocolError> {
//!         self.0.borrow_mut().push(line.to_owned());
//!         Ok(())
//!     }
//! }
//!
//! let outbox = Outbox(RefCell::new(Vec::new()));
//! outbox.privmsg("#rust", "hello there").unwrap();
//! assert_eq!(outbox.0.borrow()[0], "PRIVMSG #rust :hello there");
//! ```

pub mod command;
pub mod error;
pub mod keepalive;
pub mod line;
pub mod message;
pub mod mode;
pub mod prefix;
pub mod response;

pub use self::command::{CommandExt, CommandLine};
pub use self::error::{MessageParseError, ProtocolError};
pub use self::line::{LineBuffer, MAX_LINE_LEN};
pub use self::message::{Message, MessageKind, Numeric, UnknownCodePolicy};
pub use self::mode::{ChannelMode, ModeOperation, StatsQuery, UserMode};
pub use self::prefix::Prefix;
pub use self::response::Response;
