use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use mlua::{Lua, LuaSerdeExt};
use serde::Deserialize;

use crate::{
    Error, Result,
    color::Color,
    enums::LockState,
    font::FontName,
    privs::Identity,
    util::lua_quote,
};

pub use colors::{COLORNAME, ColorScheme};

mod colors;

// privileges

/// User to drop privileges to
pub const USER: &str = "reralt";
/// Group to drop privileges to
pub const GROUP: &str = "users";

// appearance

/// Treat a cleared input like a wrong password (color)
pub const FAILONCLEAR: bool = true;
/// Time in seconds to cancel lock with mouse movement
pub const TIMETOCANCEL: u32 = 4;
/// Default message
pub const MESSAGE: &str = "L O C K E D";
pub const TEXT_COLOR: Color = Color::from_static("#ffffff");
/// Must be a valid core X font
pub const FONT_NAME: FontName = FontName::from_static("6x13");

/// C-style toggles are accepted as well as booleans, but only 0 and 1.
fn flag<'de, D>(d: D) -> std::result::Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }
    match Flag::deserialize(d)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(n) => Err(serde::de::Error::custom(format!(
            "expected 0 or 1, got {n}"
        ))),
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub user: String,
    pub group: String,
    pub colors: ColorScheme,
    #[serde(deserialize_with = "flag")]
    pub failonclear: bool,
    pub timetocancel: u32,
    pub message: String,
    pub text_color: Color,
    pub font_name: FontName,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user: USER.to_owned(),
            group: GROUP.to_owned(),
            colors: ColorScheme::default(),
            failonclear: FAILONCLEAR,
            timetocancel: TIMETOCANCEL,
            message: MESSAGE.to_owned(),
            text_color: TEXT_COLOR,
            font_name: FONT_NAME,
        }
    }
}

impl Config {
    pub fn color(&self, state: LockState) -> &Color {
        &self.colors[state]
    }

    pub fn time_to_cancel(&self) -> Duration {
        Duration::from_secs(self.timetocancel.into())
    }

    pub fn identity(&self) -> Identity<'_> {
        Identity { user: &self.user, group: &self.group }
    }

    pub fn validate(&self) -> Result<()> {
        if self.user.is_empty() {
            return Err(Error::EmptyName("user"));
        }
        if self.group.is_empty() {
            return Err(Error::EmptyName("group"));
        }
        self.colors.check()?;
        self.text_color.check()?;
        self.font_name.check()
    }

    /// Evaluate a Lua chunk that returns a table of overrides. Keys left out
    /// keep their default values.
    pub fn from_lua(src: &str, name: &str) -> Result<Self> {
        let lua = Lua::new();
        let value: mlua::Value = lua.load(src).set_name(name).eval()?;
        let config: Self = lua.from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        let src = std::fs::read_to_string(path)
            .map_err(|source| Error::Io { path: path.to_owned(), source })?;
        Self::from_lua(&src, &path.display().to_string())
    }

    pub fn home_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rslock").join("config.lua"))
    }

    pub fn load_home() -> Result<Self> {
        match Self::home_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                log::info!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Render as a Lua config that [Config::from_lua] reads back.
    pub fn to_lua(&self) -> String {
        format!(
            "return {{
    user = {},
    group = {},
    colors = {},
    failonclear = {},
    timetocancel = {},
    message = {},
    text_color = {},
    font_name = {},
}}
",
            lua_quote(&self.user),
            lua_quote(&self.group),
            self.colors.to_lua(),
            self.failonclear,
            self.timetocancel,
            lua_quote(&self.message),
            lua_quote(self.text_color.as_str()),
            lua_quote(self.font_name.as_str()),
        )
    }
}
