use std::{ops::Index, sync::LazyLock};

use crate::{
    Result,
    color::Color,
    enums::{LockState, NUMCOLS},
    util::lua_quote,
};

pub static COLORNAME: LazyLock<[Color; NUMCOLS]> = LazyLock::new(|| {
    let mut ret = [const { Color::from_static("") }; NUMCOLS];
    ret[LockState::Init as usize] = Color::from_static("black");
    ret[LockState::Input as usize] = Color::from_static("#1D4A05");
    ret[LockState::Failed as usize] = Color::from_static("#cc241d");
    ret
});

/// Background colors indexed by [LockState]
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(from = "NamedColors")]
pub struct ColorScheme([Color; NUMCOLS]);

/// How the scheme is spelled in a config file
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct NamedColors {
    init: Color,
    input: Color,
    failed: Color,
}

impl From<NamedColors> for ColorScheme {
    fn from(c: NamedColors) -> Self {
        let mut ret = COLORNAME.clone();
        ret[LockState::Init as usize] = c.init;
        ret[LockState::Input as usize] = c.input;
        ret[LockState::Failed as usize] = c.failed;
        Self(ret)
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self(COLORNAME.clone())
    }
}

impl Index<LockState> for ColorScheme {
    type Output = Color;

    fn index(&self, state: LockState) -> &Color {
        &self.0[state as usize]
    }
}

impl ColorScheme {
    pub fn new(init: Color, input: Color, failed: Color) -> Self {
        NamedColors { init, input, failed }.into()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LockState, &Color)> {
        LockState::ALL.into_iter().zip(&self.0)
    }

    pub(crate) fn check(&self) -> Result<()> {
        self.0.iter().try_for_each(Color::check)
    }

    pub(crate) fn to_lua(&self) -> String {
        let fields: Vec<String> = self
            .iter()
            .map(|(state, color)| {
                format!("{} = {}", state.name(), lua_quote(color.as_str()))
            })
            .collect();
        format!("{{ {} }}", fields.join(", "))
    }
}
