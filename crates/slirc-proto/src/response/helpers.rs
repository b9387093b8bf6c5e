//! Helper methods and trait implementations for IRC response codes.
//!
//! This module provides:
//! - Code conversion (`code`)
//! - Range classification ([`CodeRange`], `is_error`)
//! - Display/parsing traits

use super::Response;
use std::str::FromStr;

/// The numeric ranges RFC 2812 assigns meaning to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodeRange {
    /// 001-099: sent to the client right after registration.
    Registration,
    /// 200-399: replies to commands.
    CommandReply,
    /// 400-599: error replies.
    Error,
}

impl CodeRange {
    /// Classify `code`, or `None` if it lies outside all three ranges.
    pub fn of(code: u16) -> Option<CodeRange> {
        match code {
            1..=99 => Some(CodeRange::Registration),
            200..=399 => Some(CodeRange::CommandReply),
            400..=599 => Some(CodeRange::Error),
            _ => None,
        }
    }

    /// Returns true for the error range.
    #[inline]
    pub fn is_error(self) -> bool {
        self == CodeRange::Error
    }
}

impl Response {
    /// Returns the numeric code as u16
    #[inline]
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Range the code falls in. Every registered code has one.
    pub fn range(&self) -> Option<CodeRange> {
        CodeRange::of(self.code())
    }

    /// Check if this is an error response (400-599)
    #[inline]
    pub fn is_error(&self) -> bool {
        self.range().is_some_and(CodeRange::is_error)
    }

    /// Check if this is a command reply (200-399)
    #[inline]
    pub fn is_reply(&self) -> bool {
        self.range() == Some(CodeRange::CommandReply)
    }
}

impl FromStr for Response {
    type Err = ParseResponseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u16 = s.parse().map_err(|_| ParseResponseError::InvalidFormat)?;
        Response::from_code(code).ok_or(ParseResponseError::UnknownCode(code))
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}", self.code())
    }
}

/// Error when parsing a response code
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseResponseError {
    /// The string was not a valid number
    InvalidFormat,
    /// The numeric code is not a known response
    UnknownCode(u16),
}

impl std::fmt::Display for ParseResponseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "invalid response code format"),
            Self::UnknownCode(code) => write!(f, "unknown response code: {}", code),
        }
    }
}

impl std::error::Error for ParseResponseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_range_boundaries() {
        assert_eq!(CodeRange::of(0), None);
        assert_eq!(CodeRange::of(1), Some(CodeRange::Registration));
        assert_eq!(CodeRange::of(99), Some(CodeRange::Registration));
        assert_eq!(CodeRange::of(100), None);
        assert_eq!(CodeRange::of(199), None);
        assert_eq!(CodeRange::of(200), Some(CodeRange::CommandReply));
        assert_eq!(CodeRange::of(399), Some(CodeRange::CommandReply));
        assert_eq!(CodeRange::of(400), Some(CodeRange::Error));
        assert_eq!(CodeRange::of(599), Some(CodeRange::Error));
        assert_eq!(CodeRange::of(600), None);
        assert_eq!(CodeRange::of(999), None);
    }

    #[test]
    fn is_error_true_for_4xx_and_5xx() {
        assert!(Response::ERR_NOSUCHNICK.is_error());
        assert!(Response::ERR_NICKNAMEINUSE.is_error());
        assert!(Response::ERR_UMODEUNKNOWNFLAG.is_error());
    }

    #[test]
    fn is_error_false_for_success_codes() {
        assert!(!Response::RPL_WELCOME.is_error());
        assert!(!Response::RPL_TOPIC.is_error());
        assert!(!Response::RPL_NAMREPLY.is_error());
    }

    #[test]
    fn is_reply_only_for_2xx_and_3xx() {
        assert!(Response::RPL_AWAY.is_reply());
        assert!(Response::RPL_TRACELINK.is_reply());
        assert!(!Response::RPL_WELCOME.is_reply());
        assert!(!Response::ERR_NOSUCHNICK.is_reply());
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert_eq!(
            "999".parse::<Response>(),
            Err(ParseResponseError::UnknownCode(999))
        );
        assert_eq!(
            "x1".parse::<Response>(),
            Err(ParseResponseError::InvalidFormat)
        );
    }
}
