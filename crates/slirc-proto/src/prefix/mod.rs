//! IRC message prefix (message source).

mod serialize;
mod types;

pub use self::types::Prefix;
