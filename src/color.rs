//! Color specifications in the forms Xlib's `XAllocNamedColor` accepts:
//! `#` followed by 1 to 4 hex digits per channel, or a color name.

use std::{borrow::Cow, fmt};

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed `0xRRGGBB`, as used for X pixel values on TrueColor visuals.
    pub fn pixel(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Names from X11's rgb.txt, lowercased with spaces removed.
const NAMED: &[(&str, Rgb)] = &[
    ("black", Rgb::new(0, 0, 0)),
    ("white", Rgb::new(255, 255, 255)),
    ("red", Rgb::new(255, 0, 0)),
    ("green", Rgb::new(0, 255, 0)),
    ("blue", Rgb::new(0, 0, 255)),
    ("yellow", Rgb::new(255, 255, 0)),
    ("cyan", Rgb::new(0, 255, 255)),
    ("magenta", Rgb::new(255, 0, 255)),
    ("gray", Rgb::new(190, 190, 190)),
    ("grey", Rgb::new(190, 190, 190)),
    ("darkgray", Rgb::new(169, 169, 169)),
    ("darkgrey", Rgb::new(169, 169, 169)),
    ("lightgray", Rgb::new(211, 211, 211)),
    ("lightgrey", Rgb::new(211, 211, 211)),
    ("dimgray", Rgb::new(105, 105, 105)),
    ("dimgrey", Rgb::new(105, 105, 105)),
    ("slategray", Rgb::new(112, 128, 144)),
    ("slategrey", Rgb::new(112, 128, 144)),
    ("darkred", Rgb::new(139, 0, 0)),
    ("darkgreen", Rgb::new(0, 100, 0)),
    ("darkblue", Rgb::new(0, 0, 139)),
    ("navy", Rgb::new(0, 0, 128)),
    ("navyblue", Rgb::new(0, 0, 128)),
    ("steelblue", Rgb::new(70, 130, 180)),
    ("lightblue", Rgb::new(173, 216, 230)),
    ("forestgreen", Rgb::new(34, 139, 34)),
    ("firebrick", Rgb::new(178, 34, 34)),
    ("maroon", Rgb::new(176, 48, 96)),
    ("brown", Rgb::new(165, 42, 42)),
    ("orange", Rgb::new(255, 165, 0)),
    ("gold", Rgb::new(255, 215, 0)),
    ("purple", Rgb::new(160, 32, 240)),
    ("pink", Rgb::new(255, 192, 203)),
    ("violet", Rgb::new(238, 130, 238)),
    ("orchid", Rgb::new(218, 112, 214)),
    ("tomato", Rgb::new(255, 99, 71)),
    ("coral", Rgb::new(255, 127, 80)),
    ("salmon", Rgb::new(250, 128, 114)),
    ("khaki", Rgb::new(240, 230, 140)),
    ("ivory", Rgb::new(255, 255, 240)),
    ("beige", Rgb::new(245, 245, 220)),
    ("turquoise", Rgb::new(64, 224, 208)),
    ("chocolate", Rgb::new(210, 105, 30)),
    ("tan", Rgb::new(210, 180, 140)),
];

fn lookup(name: &str) -> Option<Rgb> {
    let key: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    NAMED.iter().find(|(n, _)| *n == key).map(|(_, rgb)| *rgb)
}

/// Scale a channel of `digits` hex digits down to 8 bits. X treats `#rgb` as
/// the high bits of each channel, so `#f00` is `0xf0` red, not `0xff`.
fn channel(hex: &str) -> Option<u8> {
    let v = u16::from_str_radix(hex, 16).ok()?;
    let v = match hex.len() {
        1 => v << 4,
        2 => v,
        3 => v >> 4,
        _ => v >> 8,
    };
    Some(v as u8)
}

fn parse(spec: &str) -> Option<Rgb> {
    let Some(hex) = spec.strip_prefix('#') else {
        return lookup(spec);
    };
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let n = match hex.len() {
        3 | 6 | 9 | 12 => hex.len() / 3,
        _ => return None,
    };
    Some(Rgb {
        r: channel(&hex[..n])?,
        g: channel(&hex[n..2 * n])?,
        b: channel(&hex[2 * n..])?,
    })
}

/// A validated color specification. The original text is kept so it can be
/// handed to the X server unchanged.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "String")]
pub struct Color(Cow<'static, str>);

impl Color {
    /// Only for literals in this crate; they are checked by the tests.
    pub(crate) const fn from_static(spec: &'static str) -> Self {
        Self(Cow::Borrowed(spec))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> Rgb {
        parse(&self.0).unwrap_or_default()
    }

    pub(crate) fn check(&self) -> Result<()> {
        match parse(&self.0) {
            Some(_) => Ok(()),
            None => Err(Error::InvalidColor(self.0.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        let color = Self(Cow::Owned(value));
        color.check()?;
        Ok(color)
    }
}

impl std::str::FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from(s.to_owned())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
