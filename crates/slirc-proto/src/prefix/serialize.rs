use std::fmt;

use super::types::Prefix;

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Prefix::ServerName(name) => write!(f, "{}", name),
            Prefix::Nickname(nick, user, host) => write!(f, "{}!{}@{}", nick, user, host),
        }
    }
}
