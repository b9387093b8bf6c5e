//! slirc-client - Straylight IRC client connection engine.
//!
//! Owns one connection to an IRC server: a background listener thread
//! reassembles inbound frames, answers keep-alive probes and queues parsed
//! messages; any thread may send commands or take messages off the queue.
//!
//! ```no_run
//! use slirc_client::{Client, ClientConfig, CommandExt};
//!
//! # fn main() -> slirc_client::Result<()> {
//! let config = ClientConfig::new("irc.libera.chat", 6667, "slirc", "slirc client");
//! let client = Client::connect(&config)?;
//! client.join("#rust", None)?;
//! while let Ok(message) = client.receive() {
//!     println!("{}", message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use client::Client;
pub use config::{ClientConfig, ConfigError, IpVersion};
pub use error::{ClientError, Result};
pub use slirc_proto::{CommandExt, Message, MessageKind, Numeric, Response, UnknownCodePolicy};
