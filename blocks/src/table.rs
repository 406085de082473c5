use std::{
    collections::HashMap,
    ffi::c_int,
    path::{Path, PathBuf},
};

use libc::{SIGRTMAX, SIGRTMIN};
use mlua::{Lua, LuaSerdeExt};

use crate::{
    config::{BLOCKS, DELIM},
    Block, Delimiter, Error, Result,
};

fn default_delim() -> Delimiter {
    DELIM
}

/// The full, ordered set of blocks. Order is left-to-right display order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusTable {
    #[serde(default = "default_delim")]
    delim: Delimiter,
    blocks: Vec<Block>,
}

impl Default for StatusTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StatusTable {
    pub fn new(blocks: Vec<Block>, delim: Delimiter) -> Self {
        Self { delim, blocks }
    }

    /// The table compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(BLOCKS.to_vec(), DELIM)
    }

    pub fn delimiter(&self) -> Delimiter {
        self.delim
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Blocks that `signal` should refresh, along with their positions.
    pub fn with_signal(
        &self,
        signal: c_int,
    ) -> impl Iterator<Item = (usize, &Block)> + '_ {
        self.iter()
            .enumerate()
            .filter(move |(_, b)| signal > 0 && b.signal == signal)
    }

    /// Largest usable signal offset, `SIGRTMAX - SIGRTMIN`.
    pub fn max_signal() -> c_int {
        SIGRTMAX() - SIGRTMIN()
    }

    pub fn validate(&self) -> Result<()> {
        let max = Self::max_signal();
        let mut seen = HashMap::new();
        for (index, block) in self.iter().enumerate() {
            if block.command.trim().is_empty() {
                return Err(Error::EmptyCommand { index });
            }
            if !(0..=max).contains(&block.signal) {
                return Err(Error::InvalidSignal {
                    index,
                    signal: block.signal,
                    max,
                });
            }
            if block.signal == 0 {
                continue;
            }
            if let Some(prev) = seen.insert(block.signal, index) {
                log::warn!(
                    "blocks {prev} and {index} both refresh on signal {}",
                    block.signal
                );
            }
        }
        Ok(())
    }

    /// Evaluate a Lua chunk returning `{ delim = ..., blocks = {...} }`.
    pub fn from_lua(src: &str, name: &str) -> Result<Self> {
        let lua = Lua::new();
        let value: mlua::Value = lua.load(src).set_name(name).eval()?;
        let table: Self = lua.from_value(value)?;
        table.validate()?;
        Ok(table)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading blocks from {}", path.display());
        let src = std::fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_owned(), source })?;
        Self::from_lua(&src, &path.display().to_string())
    }

    pub fn home_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rsblocks").join("config.lua"))
    }

    /// Load the user's config file, falling back on the builtin table if
    /// there isn't one.
    pub fn load_home() -> Result<Self> {
        match Self::home_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                log::info!("no config file found, using builtin blocks");
                Ok(Self::builtin())
            }
        }
    }

    /// Render as a Lua config that [StatusTable::from_lua] reads back.
    pub fn to_lua(&self) -> String {
        let blocks: String = self
            .iter()
            .map(|b| format!("        {},\n", b.to_lua()))
            .collect();
        format!(
            "return {{\n    delim = {},\n    blocks = {{\n{blocks}    }},\n}}\n",
            self.delim.to_lua()
        )
    }
}

impl<'a> IntoIterator for &'a StatusTable {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
