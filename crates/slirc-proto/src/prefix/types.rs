//! IRC message prefix types.
//!
//! A prefix identifies the origin of a message: either a bare host (usually
//! a server) or a user's `nick!user@host` mask.
//!
//! # Reference
//! - RFC 2812 Section 2.3.1: Message format

use std::str::FromStr;

use crate::error::MessageParseError;

/// IRC message prefix - identifies the origin of a message.
///
/// Nickname and username are either both present or both absent, which is
/// why a user source is a single variant rather than optional fields.
#[derive(Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prefix {
    /// Bare host with neither `!` nor `@` (e.g. "irc.example.com")
    ServerName(String),
    /// User prefix: (nickname, username, hostname)
    Nickname(String, String, String),
}

impl Prefix {
    /// Create a new user prefix from nick, user, and host components.
    ///
    /// # Example
    ///
    /// ```
    /// use slirc_proto::Prefix;
    ///
    /// let prefix = Prefix::new("nick", "user", "host.example.com");
    /// assert_eq!(prefix.nick(), Some("nick"));
    /// assert_eq!(prefix.user(), Some("user"));
    /// assert_eq!(prefix.host(), "host.example.com");
    /// ```
    pub fn new(nick: impl Into<String>, user: impl Into<String>, host: impl Into<String>) -> Self {
        Prefix::Nickname(nick.into(), user.into(), host.into())
    }

    /// Parse a prefix field with its leading `:` already removed.
    ///
    /// A field with neither `!` nor `@` is a bare host. A field with both,
    /// `!` first, splits into nick, user and host. Anything else is rejected.
    pub fn parse(s: &str) -> Result<Self, MessageParseError> {
        match (s.find('!'), s.find('@')) {
            (None, None) => Ok(Prefix::ServerName(s.to_owned())),
            (Some(bang), Some(at)) if bang < at => Ok(Prefix::Nickname(
                s[..bang].to_owned(),
                s[bang + 1..at].to_owned(),
                s[at + 1..].to_owned(),
            )),
            _ => Err(MessageParseError::InvalidPrefix(s.to_owned())),
        }
    }

    /// Get the nickname if this is a user prefix.
    pub fn nick(&self) -> Option<&str> {
        match self {
            Prefix::Nickname(nick, _, _) => Some(nick),
            Prefix::ServerName(_) => None,
        }
    }

    /// Get the username if this is a user prefix.
    pub fn user(&self) -> Option<&str> {
        match self {
            Prefix::Nickname(_, user, _) => Some(user),
            Prefix::ServerName(_) => None,
        }
    }

    /// Get the hostname. For a server source this is the whole prefix.
    pub fn host(&self) -> &str {
        match self {
            Prefix::ServerName(name) => name,
            Prefix::Nickname(_, _, host) => host,
        }
    }

    /// Returns true for a bare-host source.
    pub fn is_server(&self) -> bool {
        matches!(self, Prefix::ServerName(_))
    }
}

impl FromStr for Prefix {
    type Err = MessageParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Prefix::parse(s.strip_prefix(':').unwrap_or(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_prefix() {
        let prefix = Prefix::parse("alice!a@host.example").unwrap();
        assert_eq!(prefix, Prefix::new("alice", "a", "host.example"));
        assert_eq!(prefix.nick(), Some("alice"));
        assert_eq!(prefix.user(), Some("a"));
        assert_eq!(prefix.host(), "host.example");
        assert!(!prefix.is_server());
    }

    #[test]
    fn test_parse_server_prefix() {
        let prefix = Prefix::parse("server.example").unwrap();
        assert_eq!(prefix, Prefix::ServerName("server.example".to_string()));
        assert_eq!(prefix.nick(), None);
        assert_eq!(prefix.user(), None);
        assert_eq!(prefix.host(), "server.example");
    }

    #[test]
    fn test_bare_host_without_dot_is_server() {
        let prefix = Prefix::parse("localhost").unwrap();
        assert!(prefix.is_server());
    }

    #[test]
    fn test_parse_rejects_half_masks() {
        assert_eq!(
            Prefix::parse("alice!a"),
            Err(MessageParseError::InvalidPrefix("alice!a".to_string()))
        );
        assert_eq!(
            Prefix::parse("alice@host"),
            Err(MessageParseError::InvalidPrefix("alice@host".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_reversed_separators() {
        assert!(Prefix::parse("a@b!c").is_err());
    }

    #[test]
    fn test_from_str_strips_colon() {
        let prefix: Prefix = ":nick!user@host".parse().unwrap();
        assert_eq!(prefix.nick(), Some("nick"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Prefix::new("n", "u", "h").to_string(), "n!u@h");
        assert_eq!(Prefix::ServerName("irc.x".into()).to_string(), "irc.x");
    }
}
