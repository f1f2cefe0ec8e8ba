//! Integration tests for config loading

use panestyle::color::Color;
use panestyle::config::ConfigError;
use panestyle::Config;

use crate::helpers::write_config;

#[test]
fn loads_overrides_from_file() {
    let (_dir, path) = write_config(
        r##"
[theme.colors]
black = "#1d1f21"
white = "#c5c8c6"

[theme.bright]
green = "#b5bd68"
"##,
    );
    let config = Config::load_from(&path).expect("valid config");
    let theme = config.theme();

    assert_eq!(theme.background, Color::rgb(0x1d, 0x1f, 0x21));
    assert_eq!(theme.colors().white, Color::rgb(0xc5, 0xc8, 0xc6));
    assert_eq!(theme.palette.bright.green, Color::rgb(0xb5, 0xbd, 0x68));
}

#[test]
fn stylesheet_uses_configured_palette() {
    let (_dir, path) = write_config("[theme.colors]\nblack = \"#000\"\n");
    let sheet = Config::load_from(&path).expect("valid config").stylesheet();
    assert_eq!(sheet.theme().background, Color::rgb(0, 0, 0));
}

#[test]
fn unknown_section_is_rejected() {
    let (_dir, path) = write_config("[fonts]\nsize = 14\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn directory_is_a_read_error() {
    let (dir, _path) = write_config("");
    let err = Config::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
