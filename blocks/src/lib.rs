//! Status bar blocks in the style of dwmblocks: an ordered table of shell
//! commands, each with an icon and a refresh policy.

pub use block::{Block, Delimiter};
pub use error::{Error, Result};
pub use table::StatusTable;

mod block;
pub mod config;
mod error;
mod table;
