//! Unit tests for config module

use simpleterm::{BoxStyle, BoxStyleName, Config, ConsoleBuilder, Locale};
use std::fs;
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.rule_width, 80);
    assert_eq!(config.indent_unit, "  ");
    assert_eq!(config.locale, Locale::new("en"));
    assert_eq!(config.frame_style(), BoxStyle::UNICODE);
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config {
        rule_width: 42,
        indent_unit: "\t".to_string(),
        locale: Locale::new("de-AT"),
        box_style: BoxStyleName::Rounded,
    };
    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("box_style = \"rounded\""));
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_file_overrides_only_present_keys() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "indent_unit = \"> \"\nbox_style = \"Minimal\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.indent_unit, "> ");
    assert_eq!(config.box_style, BoxStyleName::Minimal);
    assert_eq!(config.rule_width, 80);
}

#[test]
fn malformed_file_reports_the_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "rule_width = \"eighty\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("config.toml"));
}

#[test]
fn save_then_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("sub").join("config.toml");
    let config = Config {
        rule_width: 9,
        ..Config::default()
    };

    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn builder_captures_loaded_values() {
    let config = Config::from_toml_str("rule_width = 6\nbox_style = \"ascii\"\n").unwrap();
    let mut cb = ConsoleBuilder::with_sink(&config, Vec::new()).unwrap();
    cb.rule('=').boxed(None, "x");
    let out = cb.build();
    assert!(out.starts_with("======"));
    assert!(out.contains("+---+"));
}
