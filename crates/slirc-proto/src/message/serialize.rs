use std::fmt::{self, Display, Formatter};

use super::types::Message;

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(ref prefix) = self.prefix {
            write!(f, ":{} ", prefix)?;
        }

        write!(f, "{}", self.keyword())?;

        if !self.target.is_empty() {
            write!(f, " {}", self.target)?;
        }
        if !self.body.is_empty() {
            write!(f, " {}", self.body)?;
        }

        Ok(())
    }
}
