use std::fmt::{self, Write};

use crate::error::ProtocolError;

/// Incremental formatter for one outbound command line.
///
/// Parameters are appended left to right. Optional parameters are skipped
/// when absent or empty, list parameters are comma-joined with empty
/// elements dropped, and at most one trailing parameter is written last.
///
/// ```
/// use slirc_proto::command::CommandLine;
///
/// let line = CommandLine::new("PART")
///     .list(&["#rust", "", "#irc"])
///     .opt_trailing(Some("bye"))
///     .finish();
/// assert_eq!(line, "PART #rust,#irc :bye");
/// ```
#[derive(Clone, Debug)]
pub struct CommandLine {
    line: String,
}

impl CommandLine {
    /// Start a line with `keyword`.
    pub fn new(keyword: &str) -> Self {
        Self {
            line: keyword.to_owned(),
        }
    }

    /// Append a middle parameter.
    pub fn arg(mut self, arg: impl fmt::Display) -> Self {
        // Writing into a String cannot fail.
        let _ = write!(self.line, " {}", arg);
        self
    }

    /// Append a middle parameter if present and non-empty.
    pub fn opt_arg(self, arg: Option<&str>) -> Self {
        match arg {
            Some(a) if !a.is_empty() => self.arg(a),
            _ => self,
        }
    }

    /// Append a comma-separated list as one parameter.
    pub fn list(mut self, items: &[&str]) -> Self {
        self.line.push(' ');
        self.line.push_str(&comma_join(items.iter().copied()));
        self
    }

    /// Append each item as its own space-separated parameter.
    pub fn spaced(self, items: &[&str]) -> Self {
        items
            .iter()
            .filter(|s| !s.is_empty())
            .fold(self, |line, item| line.arg(item))
    }

    /// Append the trailing parameter, which may contain spaces.
    pub fn trailing(mut self, text: &str) -> Self {
        self.line.push_str(" :");
        self.line.push_str(text);
        self
    }

    /// Append the trailing parameter if present and non-empty.
    pub fn opt_trailing(self, text: Option<&str>) -> Self {
        match text {
            Some(t) if !t.is_empty() => self.trailing(t),
            _ => self,
        }
    }

    /// The line built so far.
    pub fn as_str(&self) -> &str {
        &self.line
    }

    /// Consume the builder and return the line.
    pub fn finish(self) -> String {
        self.line
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Comma-join the non-empty items.
pub(crate) fn comma_join<'a>(items: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for item in items.into_iter().filter(|s| !s.is_empty()) {
        if !out.is_empty() {
            out.push(',');
        }
        out.push_str(item);
    }
    out
}

/// Fail unless `items` holds at least one non-empty element.
pub(crate) fn require_items(
    command: &'static str,
    what: &'static str,
    items: &[&str],
) -> Result<(), ProtocolError> {
    if items.iter().any(|s| !s.is_empty()) {
        Ok(())
    } else {
        Err(ProtocolError::EmptyList { command, what })
    }
}
