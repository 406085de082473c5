use std::{io::Write, time::Duration};

use crate::{
    Config, Error,
    color::Rgb,
    config::{COLORNAME, ColorScheme, FONT_NAME, TEXT_COLOR},
    enums::{LockState, NUMCOLS},
};

#[test]
fn defaults() {
    let config = Config::default();
    config.validate().unwrap();

    assert_eq!(config.identity().user, "reralt");
    assert_eq!(config.identity().group, "users");
    assert!(config.failonclear);
    assert_eq!(config.time_to_cancel(), Duration::from_secs(4));
    assert_eq!(config.message, "L O C K E D");
    assert_eq!(config.text_color.rgb(), Rgb::new(0xff, 0xff, 0xff));
    assert!(config.font_name.is_alias());
}

#[test]
fn color_table() {
    assert_eq!(NUMCOLS, 3);
    assert_eq!(COLORNAME.len(), NUMCOLS);

    let config = Config::default();
    assert_eq!(config.color(LockState::Init).as_str(), "black");
    assert_eq!(config.color(LockState::Input).as_str(), "#1D4A05");
    assert_eq!(config.color(LockState::Failed).as_str(), "#cc241d");
    assert_eq!(
        config.color(LockState::Failed).rgb(),
        Rgb::new(0xcc, 0x24, 0x1d)
    );

    let states: Vec<_> = config.colors.iter().map(|(s, _)| s).collect();
    assert_eq!(states, LockState::ALL);

    for state in LockState::ALL {
        assert_eq!(config.color(state), &config.colors[state]);
        assert!(!state.name().is_empty());
    }
}

#[test]
fn lua_quoting() {
    use crate::util::lua_quote;

    assert_eq!(lua_quote("a\u{0}1"), r#""a\0001""#);
    assert_eq!(lua_quote("say \"hi\"\\"), r#""say \"hi\"\\""#);
    assert_eq!(lua_quote("\u{1b}[0m\r"), r#""\027[0m\013""#);
    assert_eq!(lua_quote("\u{f017} clock"), "\"\u{f017} clock\"");
}

#[test]
fn static_literals_are_valid() {
    for color in COLORNAME.iter() {
        assert!(color.to_string().parse::<crate::color::Color>().is_ok());
    }
    assert!(TEXT_COLOR.to_string().parse::<crate::color::Color>().is_ok());
    assert!(FONT_NAME.to_string().parse::<crate::font::FontName>().is_ok());
}

#[test]
fn partial_lua_config() {
    let src = r##"
        return {
            user = "nasif",
            colors = { init = "black", input = "#076678", failed = "#cc241d" },
            message = "L E S S   I S   M O R E",
            font_name = "-xos4-terminus-medium-r-normal--28-280-72-72-c-140-iso10646-1",
            failonclear = 0,
        }
    "##;
    let config = Config::from_lua(src, "test").unwrap();
    assert_eq!(config.user, "nasif");
    assert_eq!(config.group, "users");
    assert_eq!(
        config.color(LockState::Input).rgb(),
        Rgb::new(0x07, 0x66, 0x78)
    );
    assert!(!config.failonclear);
    assert_eq!(config.timetocancel, 4);
    assert_eq!(config.font_name.xlfd().unwrap().pixel_size, Some(28));
}

#[test]
fn empty_lua_config_is_default() {
    let config = Config::from_lua("return {}", "test").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn lua_config_errors() {
    let cases = [
        r##"return { failonclear = 2 }"##,
        r##"return { timetocancel = -1 }"##,
        r##"return { text_color = "#12" }"##,
        r##"return { font_name = "-bad" }"##,
        r##"return { colors = { init = "black", input = "white" } }"##,
        r##"return { colors = { init = "black", input = "white", failed = "red", extra = "blue" } }"##,
        r##"return { colour = "red" }"##,
        r##"return { "##,
    ];
    for src in cases {
        let err = Config::from_lua(src, "test").unwrap_err();
        assert!(matches!(err, Error::Lua(_)), "{src}: {err}");
    }

    let err =
        Config::from_lua(r#"return { user = "" }"#, "test").unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"user name is empty");
}

#[test]
fn dump() {
    insta::assert_snapshot!(Config::default().to_lua(), @r##"
    return {
        user = "reralt",
        group = "users",
        colors = { init = "black", input = "#1D4A05", failed = "#cc241d" },
        failonclear = true,
        timetocancel = 4,
        message = "L O C K E D",
        text_color = "#ffffff",
        font_name = "6x13",
    }
    "##);
}

#[test]
fn dump_round_trip() {
    let mut config = Config::default();
    config.message = "quote \" and tab \t, nul \u{0}1".to_owned();
    config.user = "back\\slash\n".to_owned();
    config.colors = ColorScheme::new(
        "navy".parse().unwrap(),
        "#abc".parse().unwrap(),
        "#ffff00000000".parse().unwrap(),
    );
    config.failonclear = false;
    let back = Config::from_lua(&config.to_lua(), "dump").unwrap();
    assert_eq!(back, config);
}

#[test]
fn load_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"return {{ timetocancel = 0, group = "wheel" }}"#)
        .unwrap();
    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.time_to_cancel(), Duration::ZERO);
    assert_eq!(config.group, "wheel");

    let err = Config::load("/nonexistent/rslock.lua").unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
