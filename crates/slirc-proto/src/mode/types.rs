//! IRC mode types for users and channels.
//!
//! Only the RFC 2812 mode letters a client sends are modelled. Each type maps
//! to exactly one wire character.
//!
//! # Reference
//! - RFC 2812 Section 3.1.5 (User Modes)
//! - RFC 2811 Section 4 (Channel Modes)
//! - RFC 2812 Section 3.4.4 (STATS queries)

use std::fmt;

/// Direction of a mode change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModeOperation {
    /// '+'
    Add,
    /// '-'
    Remove,
}

impl ModeOperation {
    /// The wire character.
    pub fn as_char(self) -> char {
        match self {
            Self::Add => '+',
            Self::Remove => '-',
        }
    }
}

/// User modes as defined in RFC 2812.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserMode {
    /// 'a' - User is away
    Away,
    /// 'i' - User is invisible
    Invisible,
    /// 'w' - User receives WALLOPS messages
    Wallops,
    /// 'r' - Restricted user connection
    Restricted,
    /// 'o' - Operator flag
    Oper,
    /// 'O' - Local operator flag
    LocalOper,
    /// 's' - User receives server notices
    ServerNotices,
}

impl UserMode {
    /// The wire character.
    pub fn as_char(self) -> char {
        match self {
            Self::Away => 'a',
            Self::Invisible => 'i',
            Self::Wallops => 'w',
            Self::Restricted => 'r',
            Self::Oper => 'o',
            Self::LocalOper => 'O',
            Self::ServerNotices => 's',
        }
    }

    /// Bit used for this mode in the USER command, if it can be set there.
    ///
    /// RFC 2812 Section 3.1.3: bit 2 is `w`, bit 3 is `i`.
    pub fn registration_bit(self) -> Option<u8> {
        match self {
            Self::Wallops => Some(0b0100),
            Self::Invisible => Some(0b1000),
            _ => None,
        }
    }
}

/// Channel modes as defined in RFC 2811.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelMode {
    /// 'O' - Channel creator status
    Creator,
    /// 'o' - Channel operator privilege
    Oper,
    /// 'v' - Voice privilege
    Voice,
    /// 'a' - Anonymous channel
    Anonymous,
    /// 'i' - Invite only
    InviteOnly,
    /// 'm' - Moderated
    Moderated,
    /// 'n' - No messages from outside clients
    NoExternalMessages,
    /// 'q' - Quiet channel
    Quiet,
    /// 'p' - Private channel
    Private,
    /// 's' - Secret channel
    Secret,
    /// 'r' - Server reop
    ServerReop,
    /// 't' - Topic settable by channel operators only
    ProtectedTopic,
    /// 'k' - Channel key
    Key,
    /// 'l' - User limit
    Limit,
    /// 'b' - Ban mask
    Ban,
    /// 'e' - Ban exception mask
    Exception,
    /// 'I' - Invite exception mask
    InviteException,
}

impl ChannelMode {
    /// The wire character.
    pub fn as_char(self) -> char {
        match self {
            Self::Creator => 'O',
            Self::Oper => 'o',
            Self::Voice => 'v',
            Self::Anonymous => 'a',
            Self::InviteOnly => 'i',
            Self::Moderated => 'm',
            Self::NoExternalMessages => 'n',
            Self::Quiet => 'q',
            Self::Private => 'p',
            Self::Secret => 's',
            Self::ServerReop => 'r',
            Self::ProtectedTopic => 't',
            Self::Key => 'k',
            Self::Limit => 'l',
            Self::Ban => 'b',
            Self::Exception => 'e',
            Self::InviteException => 'I',
        }
    }

    /// Returns true for the mask list modes, which may be queried without
    /// an argument (e.g. `MODE #chan +b`).
    pub fn is_list_mode(self) -> bool {
        matches!(self, Self::Ban | Self::Exception | Self::InviteException)
    }
}

/// STATS query letters from RFC 2812 Section 3.4.4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatsQuery {
    /// 'l' - Connection list with traffic counters
    Links,
    /// 'm' - Command usage counts
    Commands,
    /// 'o' - Configured operators
    Opers,
    /// 'u' - Server uptime
    Uptime,
}

impl StatsQuery {
    /// The wire character.
    pub fn as_char(self) -> char {
        match self {
            Self::Links => 'l',
            Self::Commands => 'm',
            Self::Opers => 'o',
            Self::Uptime => 'u',
        }
    }
}

macro_rules! display_as_char {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_char())
                }
            }
        )+
    };
}

display_as_char!(ModeOperation, UserMode, ChannelMode, StatsQuery);
