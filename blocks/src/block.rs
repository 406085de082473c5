use std::{
    borrow::Cow,
    ffi::{c_int, c_uint},
    fmt::{self, Display},
    process::Command,
};

use libc::SIGRTMIN;

use crate::{Error, Result};

/// One segment of the status bar: an icon followed by the output of a shell
/// command.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Block {
    #[serde(default)]
    pub icon: Cow<'static, str>,
    pub command: Cow<'static, str>,
    /// Seconds between refreshes, 0 means never
    #[serde(default)]
    pub interval: c_uint,
    /// Offset from `SIGRTMIN` that forces a refresh, 0 means none
    #[serde(default)]
    pub signal: c_int,
}

impl Block {
    pub const fn new(
        icon: &'static str,
        command: &'static str,
        interval: c_uint,
        signal: c_int,
    ) -> Self {
        Self {
            icon: Cow::Borrowed(icon),
            command: Cow::Borrowed(command),
            interval,
            signal,
        }
    }

    pub fn refreshes_on_interval(&self) -> bool {
        self.interval != 0
    }

    pub fn refreshes_on_signal(&self) -> bool {
        self.signal > 0
    }

    /// The real-time signal a consumer should install a handler for, if any.
    pub fn rt_signal(&self) -> Option<c_int> {
        self.refreshes_on_signal().then(|| SIGRTMIN() + self.signal)
    }

    /// Commands are shell pipelines, so they go through `sh -c` rather than
    /// being exec'd directly.
    pub fn shell_command(&self) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(self.command.as_ref());
        cmd
    }

    /// Run the command once and return the icon followed by its stdout with
    /// newlines removed.
    pub fn run(&self) -> Result<String> {
        let out = self.shell_command().output().map_err(|source| {
            Error::Spawn { command: self.command.to_string(), source }
        })?;
        if !out.status.success() {
            log::warn!("command `{}` exited with {}", self.command, out.status);
        }
        let stdout = String::from_utf8_lossy(&out.stdout);
        Ok(format!("{}{}", self.icon, stdout.replace('\n', "")))
    }

    pub(crate) fn to_lua(&self) -> String {
        format!(
            "{{ icon = {}, command = {}, interval = {}, signal = {} }}",
            lua_quote(&self.icon),
            lua_quote(&self.command),
            self.interval,
            self.signal
        )
    }
}

/// Quote `s` as a Lua string literal. Control characters use three-digit
/// decimal escapes so a following digit can't extend them.
pub(crate) fn lua_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                out.push_str(&format!("\\{:03}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Separator between rendered blocks. `'\0'` in the C configuration meant
/// "no delimiter", which is `Delimiter::NONE` here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct Delimiter(Option<char>);

impl Delimiter {
    pub const NONE: Self = Self(None);

    pub const fn new(c: char) -> Self {
        if c == '\0' { Self::NONE } else { Self(Some(c)) }
    }

    pub fn get(&self) -> Option<char> {
        self.0
    }

    pub(crate) fn to_lua(self) -> String {
        lua_quote(&self.to_string())
    }
}

impl TryFrom<String> for Delimiter {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(Self::NONE),
            (Some(c), None) => Ok(Self::new(c)),
            _ => Err(Error::InvalidDelimiter(value)),
        }
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "{c}"),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sentinels() {
        let b = Block::new("", "clock", 0, 0);
        assert!(!b.refreshes_on_interval());
        assert!(!b.refreshes_on_signal());
        assert_eq!(b.rt_signal(), None);

        let b = Block::new("", "volume", 0, 10);
        assert!(b.refreshes_on_signal());
        assert_eq!(b.rt_signal(), Some(SIGRTMIN() + 10));
    }

    #[test]
    fn run_pipeline() {
        let b = Block::new("> ", "printf 'a\\nb\\n' | tr a-z A-Z", 1, 0);
        assert_eq!(b.run().unwrap(), "> AB");
    }

    #[test]
    fn run_failing_command_keeps_stdout() {
        let b = Block::new("", "echo partial; exit 3", 1, 0);
        assert_eq!(b.run().unwrap(), "partial");
    }

    #[test]
    fn delimiter_from_string() {
        assert_eq!(Delimiter::try_from(String::new()).unwrap(), Delimiter::NONE);
        assert_eq!(
            Delimiter::try_from("\0".to_owned()).unwrap(),
            Delimiter::NONE
        );
        assert_eq!(
            Delimiter::try_from("|".to_owned()).unwrap().get(),
            Some('|')
        );
        let err = Delimiter::try_from(" | ".to_owned()).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"delimiter must be a single character, got ` | `");
    }

    #[test]
    fn quoting() {
        assert_eq!(lua_quote("a\u{0}1"), r#""a\0001""#);
        assert_eq!(lua_quote("sed 's/+//g' \"x\""), r#""sed 's/+//g' \"x\"""#);
        assert_eq!(Delimiter::NONE.to_lua(), r#""""#);
        assert_eq!(Delimiter::new('|').to_lua(), r#""|""#);
    }
}
