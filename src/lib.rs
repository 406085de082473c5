//! Configuration for a slock-style screen locker: who to drop privileges to
//! and how the lock screen looks.

pub use config::Config;
pub use error::{Error, Result};

pub mod color;
pub mod config;
pub mod enums;
mod error;
pub mod font;
pub mod privs;
pub mod util;

#[cfg(test)]
mod tests;
