//! IRC user and channel mode types.

mod types;

pub use self::types::{ChannelMode, ModeOperation, StatsQuery, UserMode};
