use std::{io, path::PathBuf};

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

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("invalid font `{font}`: {reason}")]
    InvalidFont { font: String, reason: &'static str },

    #[error("{0} name is empty")]
    EmptyName(&'static str),

    #[error("unknown user `{0}`")]
    UnknownUser(String),

    #[error("unknown group `{0}`")]
    UnknownGroup(String),

    #[error("looking up `{name}`: {source}")]
    Lookup {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("{call}: {source}")]
    Privileges {
        call: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("root privileges could be regained after dropping them")]
    RegainedRoot,
}
