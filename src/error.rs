//! Unified error handling for slirc-client.
//!
//! Protocol-level failures come from `slirc-proto` and are wrapped here
//! together with transport failures, so every public operation returns the
//! same [`ClientError`].

use slirc_proto::ProtocolError;
use thiserror::Error;

/// Convenience type alias for Results using [`ClientError`].
pub type Result<T, E = ClientError> = std::result::Result<T, E>;

/// Errors returned by [`Client`](crate::Client) operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// Socket or address resolution failure.
    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration rejected before connecting.
    #[error("invalid configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Outbound line or builder precondition rejected before sending.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The host resolved to no address of the requested IP version.
    #[error("no {version} address found for {host}:{port}")]
    NoAddress {
        /// Host as configured.
        host: String,
        /// Port as configured.
        port: u16,
        /// Requested IP version.
        version: crate::config::IpVersion,
    },

    /// The listener has stopped and every queued message has been consumed.
    #[error("connection closed")]
    ConnectionClosed,

    /// The OS refused to start the listener thread.
    #[error("failed to spawn listener thread: {0}")]
    ListenerSpawn(#[source] std::io::Error),
}

impl ClientError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Config(_) => "config",
            Self::Protocol(_) => "protocol",
            Self::NoAddress { .. } => "no_address",
            Self::ConnectionClosed => "connection_closed",
            Self::ListenerSpawn(_) => "listener_spawn",
        }
    }

    /// Returns true if the connection can no longer be used.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Protocol(_) | Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protocol_errors_are_recoverable() {
        let err: ClientError = ProtocolError::MessageTooLong {
            actual: 511,
            limit: 510,
        }
        .into();
        assert!(!err.is_fatal());
        assert_eq!(err.error_code(), "protocol");
        assert_eq!(
            err.to_string(),
            "protocol error: message too long: 511 bytes (limit: 510)"
        );
    }

    #[test]
    fn test_closed_is_fatal() {
        assert!(ClientError::ConnectionClosed.is_fatal());
        assert_eq!(ClientError::ConnectionClosed.to_string(), "connection closed");
    }

    #[test]
    fn test_no_address_display() {
        let err = ClientError::NoAddress {
            host: "irc.example.net".into(),
            port: 6667,
            version: crate::config::IpVersion::V6,
        };
        assert_eq!(err.to_string(), "no IPv6 address found for irc.example.net:6667");
    }
}
