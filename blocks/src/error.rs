use std::{ffi::c_int, io, path::PathBuf};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("lua: {0}")]
    Lua(#[from] mlua::Error),

    #[error("delimiter must be a single character, got `{0}`")]
    InvalidDelimiter(String),

    #[error("block {index}: signal {signal} outside 0..={max}")]
    InvalidSignal { index: usize, signal: c_int, max: c_int },

    #[error("block {index}: empty command")]
    EmptyCommand { index: usize },

    #[error("no block at index {0}")]
    NoSuchBlock(usize),

    #[error("command `{command}` failed with `{source}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
}
