use std::borrow::Cow;

use crate::prefix::Prefix;
use crate::response::Response;

/// How a numeric code missing from the registry is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum UnknownCodePolicy {
    /// Accept the frame: empty name, error flag from the code range alone.
    #[default]
    Relaxed,
    /// Reject the frame.
    Strict,
}

/// A classified numeric reply.
///
/// Every field is computed once, when the frame is parsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Numeric {
    pub(crate) code: u16,
    pub(crate) response: Option<Response>,
    pub(crate) is_error: bool,
    pub(crate) policy: UnknownCodePolicy,
}

impl Numeric {
    /// The 3-digit code as an integer.
    pub fn code(&self) -> u16 {
        self.code
    }

    /// The registry entry, if the code is known.
    pub fn response(&self) -> Option<Response> {
        self.response
    }

    /// Symbolic name (e.g. `"RPL_WELCOME"`), empty for unknown codes.
    pub fn name(&self) -> &'static str {
        self.response.map_or("", |r| r.name())
    }

    /// Whether the code lies in the 400-599 error range.
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Whether the code is in the registry.
    pub fn is_known(&self) -> bool {
        self.response.is_some()
    }

    /// The policy in force when this reply was parsed.
    pub fn policy(&self) -> UnknownCodePolicy {
        self.policy
    }
}

/// The two kinds of inbound message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MessageKind {
    /// A named command, stored verbatim (e.g. `PRIVMSG`).
    Standard(String),
    /// A 3-digit numeric reply.
    Numeric(Numeric),
}

/// An inbound IRC message.
///
/// Parsed positionally from `[:prefix] keyword target body`, where `body` is
/// everything after the third field, byte for byte, including any leading
/// `:`. Immutable once built.
///
/// # Example
///
/// ```
/// use slirc_proto::Message;
///
/// let msg: Message = ":alice!a@host.example PRIVMSG #chan :hello world".parse().unwrap();
/// assert_eq!(msg.source_nickname(), Some("alice"));
/// assert_eq!(msg.command(), Some("PRIVMSG"));
/// assert_eq!(msg.target(), "#chan");
/// assert_eq!(msg.body(), ":hello world");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub(crate) prefix: Option<Prefix>,
    pub(crate) kind: MessageKind,
    pub(crate) target: String,
    pub(crate) body: String,
}

impl Message {
    /// Message source, if the frame carried a prefix.
    pub fn prefix(&self) -> Option<&Prefix> {
        self.prefix.as_ref()
    }

    /// Standard or numeric classification.
    pub fn kind(&self) -> &MessageKind {
        &self.kind
    }

    /// Recipient/target token (third field).
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Everything after the target, verbatim.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The body with one leading `:` removed, if present.
    pub fn trailing(&self) -> &str {
        self.body.strip_prefix(':').unwrap_or(&self.body)
    }

    /// The keyword as it appears on the wire: the command name or a
    /// zero-padded 3-digit code.
    pub fn keyword(&self) -> Cow<'_, str> {
        match &self.kind {
            MessageKind::Standard(command) => Cow::Borrowed(command),
            MessageKind::Numeric(numeric) => Cow::Owned(format!("{:03}", numeric.code)),
        }
    }

    /// Command name for standard messages.
    pub fn command(&self) -> Option<&str> {
        match &self.kind {
            MessageKind::Standard(command) => Some(command),
            MessageKind::Numeric(_) => None,
        }
    }

    /// Classification for numeric replies.
    pub fn numeric(&self) -> Option<&Numeric> {
        match &self.kind {
            MessageKind::Numeric(numeric) => Some(numeric),
            MessageKind::Standard(_) => None,
        }
    }

    /// Returns true for numeric replies.
    pub fn is_numeric(&self) -> bool {
        matches!(self.kind, MessageKind::Numeric(_))
    }

    /// Registry entry for a known numeric reply.
    pub fn response(&self) -> Option<Response> {
        self.numeric().and_then(Numeric::response)
    }

    /// Nickname of a user source.
    pub fn source_nickname(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::nick)
    }

    /// Username of a user source.
    pub fn source_user(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::user)
    }

    /// Host of the source; empty when the frame had no prefix.
    pub fn source_host(&self) -> &str {
        self.prefix.as_ref().map_or("", Prefix::host)
    }
}
