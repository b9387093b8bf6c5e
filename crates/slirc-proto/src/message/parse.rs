//! Message parsing implementation.
//!
//! The parser is positional: an optional `:`-prefixed source, then the
//! keyword, then a single target token, then the body. Frames that carry
//! several middle parameters keep all but the first inside the body.

use std::str::FromStr;

use crate::error::MessageParseError;
use crate::prefix::Prefix;
use crate::response::{CodeRange, Response};

use super::types::{Message, MessageKind, Numeric, UnknownCodePolicy};

/// Split off the first space-delimited field. The separating space is
/// consumed; the rest is returned untouched.
fn split_field(s: &str) -> (&str, &str) {
    match s.find(' ') {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None => (s, ""),
    }
}

impl Numeric {
    /// Classify a numeric code under `policy`.
    pub fn classify(code: u16, policy: UnknownCodePolicy) -> Result<Numeric, MessageParseError> {
        let response = Response::from_code(code);
        if response.is_none() && policy == UnknownCodePolicy::Strict {
            return Err(MessageParseError::UnknownNumeric(code));
        }

        let is_error = match (CodeRange::of(code), policy) {
            (Some(range), _) => range.is_error(),
            (None, UnknownCodePolicy::Relaxed) => false,
            (None, UnknownCodePolicy::Strict) => {
                return Err(MessageParseError::UnknownNumeric(code))
            }
        };

        Ok(Numeric {
            code,
            response,
            is_error,
            policy,
        })
    }
}

fn parse_keyword(keyword: &str, policy: UnknownCodePolicy) -> Result<MessageKind, MessageParseError> {
    match keyword.as_bytes().first() {
        None => Err(MessageParseError::MissingCommand),
        Some(b) if b.is_ascii_digit() => {
            if keyword.len() != 3 || !keyword.bytes().all(|b| b.is_ascii_digit()) {
                return Err(MessageParseError::InvalidNumeric(keyword.to_owned()));
            }
            let code = keyword
                .parse::<u16>()
                .map_err(|_| MessageParseError::InvalidNumeric(keyword.to_owned()))?;
            Numeric::classify(code, policy).map(MessageKind::Numeric)
        }
        Some(_) => Ok(MessageKind::Standard(keyword.to_owned())),
    }
}

impl Message {
    /// Parse one complete frame (delimiter already removed).
    ///
    /// `policy` decides what happens to numeric codes that are not in the
    /// registry.
    pub fn parse(frame: &str, policy: UnknownCodePolicy) -> Result<Message, MessageParseError> {
        if frame.is_empty() {
            return Err(MessageParseError::EmptyMessage);
        }

        let (prefix, rest) = match frame.strip_prefix(':') {
            Some(stripped) => {
                let (field, rest) = split_field(stripped);
                (Some(Prefix::parse(field)?), rest)
            }
            None => (None, frame),
        };

        let (keyword, rest) = split_field(rest);
        let kind = parse_keyword(keyword, policy)?;
        let (target, body) = split_field(rest);

        Ok(Message {
            prefix,
            kind,
            target: target.to_owned(),
            body: body.to_owned(),
        })
    }
}

impl FromStr for Message {
    type Err = MessageParseError;

    /// Parse with [`UnknownCodePolicy::Relaxed`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Message::parse(s, UnknownCodePolicy::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_field() {
        assert_eq!(split_field("a b c"), ("a", "b c"));
        assert_eq!(split_field("abc"), ("abc", ""));
        assert_eq!(split_field("a  b"), ("a", " b"));
        assert_eq!(split_field(""), ("", ""));
    }

    #[test]
    fn test_parse_privmsg() {
        let msg: Message = ":alice!a@host.example PRIVMSG #chan :hello world"
            .parse()
            .unwrap();
        assert_eq!(msg.source_nickname(), Some("alice"));
        assert_eq!(msg.source_user(), Some("a"));
        assert_eq!(msg.source_host(), "host.example");
        assert_eq!(msg.target(), "#chan");
        assert_eq!(msg.body(), ":hello world");
        assert_eq!(msg.trailing(), "hello world");
        assert_eq!(msg.kind(), &MessageKind::Standard("PRIVMSG".to_string()));
    }

    #[test]
    fn test_parse_welcome() {
        let msg: Message = ":server.example 001 alice :Welcome".parse().unwrap();
        let numeric = msg.numeric().expect("numeric reply");
        assert_eq!(numeric.code(), 1);
        assert_eq!(numeric.name(), "RPL_WELCOME");
        assert!(!numeric.is_error());
        assert!(numeric.is_known());
        assert_eq!(msg.keyword(), "001");
        assert_eq!(msg.source_nickname(), None);
        assert_eq!(msg.source_host(), "server.example");
    }

    #[test]
    fn test_parse_error_numeric() {
        let msg: Message = ":srv 433 * alice :Nickname is already in use"
            .parse()
            .unwrap();
        let numeric = msg.numeric().unwrap();
        assert_eq!(numeric.response(), Some(Response::ERR_NICKNAMEINUSE));
        assert!(numeric.is_error());
        assert_eq!(msg.target(), "*");
        assert_eq!(msg.body(), "alice :Nickname is already in use");
    }

    #[test]
    fn test_unknown_numeric_relaxed() {
        let msg = Message::parse(":srv 999 me :odd", UnknownCodePolicy::Relaxed).unwrap();
        let numeric = msg.numeric().unwrap();
        assert!(!numeric.is_known());
        assert!(!numeric.is_error());
        assert_eq!(numeric.name(), "");
        assert_eq!(numeric.policy(), UnknownCodePolicy::Relaxed);
    }

    #[test]
    fn test_unknown_numeric_strict() {
        assert_eq!(
            Message::parse(":srv 999 me :odd", UnknownCodePolicy::Strict),
            Err(MessageParseError::UnknownNumeric(999))
        );
    }

    #[test]
    fn test_unknown_numeric_in_error_range() {
        let msg = Message::parse(":srv 599 me :x", UnknownCodePolicy::Relaxed).unwrap();
        let numeric = msg.numeric().unwrap();
        assert!(!numeric.is_known());
        assert!(numeric.is_error());

        assert!(Message::parse(":srv 599 me :x", UnknownCodePolicy::Strict).is_err());
    }

    #[test]
    fn test_known_numeric_under_strict() {
        let msg = Message::parse(":srv 376 me :End of MOTD", UnknownCodePolicy::Strict).unwrap();
        assert_eq!(msg.response(), Some(Response::RPL_ENDOFMOTD));
    }

    #[test]
    fn test_invalid_numeric() {
        assert_eq!(
            ":srv 12 me :x".parse::<Message>(),
            Err(MessageParseError::InvalidNumeric("12".to_string()))
        );
        assert_eq!(
            ":srv 1234 me :x".parse::<Message>(),
            Err(MessageParseError::InvalidNumeric("1234".to_string()))
        );
        assert_eq!(
            ":srv 4x4 me :x".parse::<Message>(),
            Err(MessageParseError::InvalidNumeric("4x4".to_string()))
        );
    }

    #[test]
    fn test_malformed_prefix() {
        assert_eq!(
            ":alice!a PRIVMSG #c :x".parse::<Message>(),
            Err(MessageParseError::InvalidPrefix("alice!a".to_string()))
        );
        assert!(":alice@h PRIVMSG #c :x".parse::<Message>().is_err());
    }

    #[test]
    fn test_no_prefix() {
        let msg: Message = "ERROR :Closing Link".parse().unwrap();
        assert!(msg.prefix().is_none());
        assert_eq!(msg.command(), Some("ERROR"));
        assert_eq!(msg.target(), ":Closing");
        assert_eq!(msg.body(), "Link");
        assert_eq!(msg.source_host(), "");
    }

    #[test]
    fn test_missing_fields() {
        let msg: Message = ":nick!u@h QUIT".parse().unwrap();
        assert_eq!(msg.command(), Some("QUIT"));
        assert_eq!(msg.target(), "");
        assert_eq!(msg.body(), "");
    }

    #[test]
    fn test_empty_and_prefix_only() {
        assert_eq!("".parse::<Message>(), Err(MessageParseError::EmptyMessage));
        assert_eq!(
            ":server.example".parse::<Message>(),
            Err(MessageParseError::MissingCommand)
        );
    }

    #[test]
    fn test_multiple_middle_params_stay_in_body() {
        let msg: Message = ":op!o@h MODE #chan +o alice".parse().unwrap();
        assert_eq!(msg.target(), "#chan");
        assert_eq!(msg.body(), "+o alice");
    }

    #[test]
    fn test_display_roundtrip() {
        for raw in [
            ":alice!a@host.example PRIVMSG #chan :hello world",
            ":server.example 001 alice :Welcome",
            ":srv 042 me :odd",
            "NOTICE AUTH :*** Looking up your hostname",
        ] {
            let msg: Message = raw.parse().unwrap();
            assert_eq!(msg.to_string(), raw);
        }
    }
}
