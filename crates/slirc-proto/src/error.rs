//! Error types for the IRC protocol library.
//!
//! [`MessageParseError`] describes why a single inbound frame could not be
//! turned into a [`Message`](crate::Message). [`ProtocolError`] covers the
//! outbound side: line limits and command builder preconditions.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// Outbound line exceeded the per-line limit.
    #[error("message too long: {actual} bytes (limit: {limit})")]
    MessageTooLong {
        /// Actual line length, excluding the delimiter.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },

    /// Illegal control character in an outbound line.
    #[error("illegal control character: {0:?}")]
    IllegalControlChar(char),

    /// Failed to parse an inbound frame.
    #[error("invalid message: {string}")]
    InvalidMessage {
        /// The raw frame.
        string: String,
        /// The underlying parse error.
        #[source]
        cause: MessageParseError,
    },

    /// Two list parameters that are paired positionally have different lengths.
    #[error("{command}: {left} and {right} lists must have the same length ({left_len} != {right_len})")]
    MismatchedLists {
        /// The command being built.
        command: &'static str,
        /// Name of the first list.
        left: &'static str,
        /// Name of the second list.
        right: &'static str,
        /// Length of the first list.
        left_len: usize,
        /// Length of the second list.
        right_len: usize,
    },

    /// A mode or mode operation that the command cannot carry.
    #[error("{command}: {reason}")]
    InvalidMode {
        /// The command being built.
        command: &'static str,
        /// Why the mode was refused.
        reason: &'static str,
    },

    /// Too many targets for a command that caps its parameter list.
    #[error("{command} accepts at most {limit} targets, got {actual}")]
    TooManyTargets {
        /// The command being built.
        command: &'static str,
        /// Number of targets supplied.
        actual: usize,
        /// Maximum accepted.
        limit: usize,
    },

    /// A required parameter list was empty.
    #[error("{command}: at least one {what} is required")]
    EmptyList {
        /// The command being built.
        command: &'static str,
        /// What was missing.
        what: &'static str,
    },
}

/// Errors encountered when parsing IRC messages.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Frame was empty.
    #[error("empty message")]
    EmptyMessage,

    /// Frame had no keyword after the prefix.
    #[error("missing command")]
    MissingCommand,

    /// Prefix carried only one of the `!` and `@` separators, or had them in
    /// the wrong order.
    #[error("invalid prefix: {0}")]
    InvalidPrefix(String),

    /// Keyword started with a digit but was not a 3-digit code.
    #[error("invalid numeric: {0}")]
    InvalidNumeric(String),

    /// Numeric code missing from the registry or outside every known range,
    /// under the strict policy.
    #[error("unknown numeric code: {0:03}")]
    UnknownNumeric(u16),
}

impl MessageParseError {
    /// Attach the raw frame this error was produced from.
    pub fn into_protocol_error(self, raw: &str) -> ProtocolError {
        ProtocolError::InvalidMessage {
            string: raw.to_owned(),
            cause: self,
        }
    }
}
