//! Keep-alive probe detection.
//!
//! Servers periodically send `PING :<token>` and drop clients that do not
//! answer with `PONG :<token>`. The listener answers these itself, so they
//! never reach the application.

/// Keyword of a keep-alive probe.
pub const PING: &str = "PING";

/// Keyword of a keep-alive answer.
pub const PONG: &str = "PONG";

/// Returns the `:`-prefixed payload if `frame` is a keep-alive probe.
///
/// Only a bare `PING :payload` frame qualifies. A prefixed PING, or one whose
/// argument lacks the leading `:`, is left for the application.
pub fn probe_payload(frame: &str) -> Option<&str> {
    let payload = frame.strip_prefix(PING)?.strip_prefix(' ')?;
    payload.starts_with(':').then_some(payload)
}

/// Build the answer line for a keep-alive probe, or `None` if `frame` is not
/// one.
///
/// ```
/// use slirc_proto::keepalive::probe_response;
///
/// assert_eq!(probe_response("PING :abc123").as_deref(), Some("PONG :abc123"));
/// assert_eq!(probe_response(":srv PRIVMSG me :PING :x"), None);
/// ```
pub fn probe_response(frame: &str) -> Option<String> {
    probe_payload(frame).map(|payload| format!("{} {}", PONG, payload))
}
