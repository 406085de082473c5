//! Core X font descriptors: full XLFD names, wildcard patterns, or aliases
//! from `fonts.alias` such as `6x13`.

use std::{borrow::Cow, fmt};

use crate::{Error, Result};

/// The 14 fields of an X Logical Font Description. Numeric fields are
/// `None` when wildcarded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xlfd<'a> {
    pub foundry: &'a str,
    pub family: &'a str,
    pub weight: &'a str,
    pub slant: &'a str,
    pub setwidth: &'a str,
    pub add_style: &'a str,
    pub pixel_size: Option<u32>,
    pub point_size: Option<u32>,
    pub resolution_x: Option<u32>,
    pub resolution_y: Option<u32>,
    pub spacing: &'a str,
    pub average_width: Option<u32>,
    pub registry: &'a str,
    pub encoding: &'a str,
}

const XLFD_FIELDS: usize = 14;

fn numeric(field: &str) -> std::result::Result<Option<u32>, &'static str> {
    match field {
        "*" => Ok(None),
        _ => field.parse().map(Some).map_err(|_| "non-numeric size field"),
    }
}

fn parse_xlfd(name: &str) -> std::result::Result<Xlfd<'_>, &'static str> {
    let Some(rest) = name.strip_prefix('-') else {
        return Err("XLFD must start with `-`");
    };
    let f: Vec<&str> = rest.split('-').collect();
    if f.len() != XLFD_FIELDS {
        return Err("XLFD must have 14 fields");
    }
    Ok(Xlfd {
        foundry: f[0],
        family: f[1],
        weight: f[2],
        slant: f[3],
        setwidth: f[4],
        add_style: f[5],
        pixel_size: numeric(f[6])?,
        point_size: numeric(f[7])?,
        resolution_x: numeric(f[8])?,
        resolution_y: numeric(f[9])?,
        spacing: f[10],
        average_width: numeric(f[11])?,
        registry: f[12],
        encoding: f[13],
    })
}

fn check(name: &str) -> std::result::Result<(), &'static str> {
    if name.is_empty() {
        return Err("empty font name");
    }
    if name.chars().any(char::is_whitespace) {
        return Err("font name contains whitespace");
    }
    if !name.starts_with('-') {
        // alias
        return Ok(());
    }
    // a shorter pattern is fine as long as a wildcard can span the rest
    if name[1..].split('-').count() < XLFD_FIELDS && name.contains('*') {
        return Ok(());
    }
    parse_xlfd(name).map(|_| ())
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct FontName(Cow<'static, str>);

impl FontName {
    /// Only for literals in this crate; they are checked by the tests.
    pub(crate) const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The parsed XLFD, or `None` for aliases and short patterns.
    pub fn xlfd(&self) -> Option<Xlfd<'_>> {
        parse_xlfd(&self.0).ok()
    }

    pub fn is_alias(&self) -> bool {
        !self.0.starts_with('-')
    }

    pub(crate) fn check(&self) -> Result<()> {
        check(&self.0).map_err(|reason| Error::InvalidFont {
            font: self.0.to_string(),
            reason,
        })
    }
}

impl TryFrom<String> for FontName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        let font = Self(Cow::Owned(value));
        font.check()?;
        Ok(font)
    }
}

impl std::str::FromStr for FontName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s.to_owned())
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TERMINUS: &str =
        "-xos4-terminus-medium-r-normal--28-280-72-72-c-140-iso10646-1";

    #[test]
    fn full_xlfd() {
        let font: FontName = TERMINUS.parse().unwrap();
        assert!(!font.is_alias());
        let xlfd = font.xlfd().unwrap();
        assert_eq!(xlfd.family, "terminus");
        assert_eq!(xlfd.add_style, "");
        assert_eq!(xlfd.pixel_size, Some(28));
        assert_eq!(xlfd.point_size, Some(280));
        assert_eq!(xlfd.average_width, Some(140));
        assert_eq!((xlfd.registry, xlfd.encoding), ("iso10646", "1"));
    }

    #[test]
    fn alias_and_patterns() {
        let font: FontName = "6x13".parse().unwrap();
        assert!(font.is_alias());
        assert_eq!(font.xlfd(), None);

        let font: FontName =
            "-*-fixed-medium-r-*-*-13-*-*-*-*-*-*-*".parse().unwrap();
        assert_eq!(font.xlfd().unwrap().pixel_size, Some(13));
        assert_eq!(font.xlfd().unwrap().point_size, None);

        let font: FontName = "-misc-fixed-*".parse().unwrap();
        assert_eq!(font.xlfd(), None);
    }

    #[test]
    fn rejects() {
        let err = "-xos4-terminus-medium-r-normal--big-280-72-72-c-140-iso10646-1"
            .parse::<FontName>()
            .unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"invalid font `-xos4-terminus-medium-r-normal--big-280-72-72-c-140-iso10646-1`: non-numeric size field");

        assert!("".parse::<FontName>().is_err());
        assert!("monospace 12".parse::<FontName>().is_err());
        assert!("-misc-fixed-medium".parse::<FontName>().is_err());
    }
}
