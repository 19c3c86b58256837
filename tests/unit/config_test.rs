//! Unit tests for config module

use legacy_term::capabilities::{BackendChoice, TierChoice};
use legacy_term::{Attribute, Config};
use tempfile::TempDir;

use crate::helpers::temp_file;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.render.backend, BackendChoice::Auto);
    assert_eq!(config.render.color_tier, TierChoice::Auto);
    assert_eq!(config.legacy.fallback_attribute, 0x07);
    assert_eq!(config.legacy.fallback(), Attribute::FALLBACK);
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.render.color_tier = TierChoice::TrueColor;
    config.legacy.fallback_attribute = 0x1E;
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_config_fills_defaults() {
    let toml_str = r#"
[render]
backend = "plain"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.render.backend, BackendChoice::Plain);
    assert_eq!(config.render.color_tier, TierChoice::Auto);
    assert_eq!(config.legacy.fallback_attribute, 0x07);
}

#[test]
fn load_from_missing_file_returns_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_reads_file() {
    let (_dir, path) = temp_file(
        "config.toml",
        "[render]\ncolor_tier = \"legacy\"\n\n[legacy]\nfallback_attribute = 23\n",
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.render.color_tier, TierChoice::Legacy);
    assert_eq!(config.legacy.fallback(), Attribute(23));
}

#[test]
fn load_from_rejects_invalid_attribute() {
    let (_dir, path) = temp_file("config.toml", "[legacy]\nfallback_attribute = 4096\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("fallback_attribute"));
}

#[test]
fn load_from_rejects_malformed_toml() {
    let (_dir, path) = temp_file("config.toml", "[render\nbackend = ");
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn save_to_creates_directories() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nested").join("dir").join("config.toml");
    let mut config = Config::default();
    config.render.backend = BackendChoice::Ansi;

    config.save_to(&path).unwrap();
    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap(), config);
}
