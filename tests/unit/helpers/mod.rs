//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use legacy_term::capabilities::Capabilities;
use legacy_term::ColorTier;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Write `contents` to `name` inside a fresh temp directory
pub fn temp_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write temp file");
    (temp_dir, path)
}

/// Capabilities of an interactive terminal
pub fn terminal_caps(vt_supported: bool, legacy_console: bool) -> Capabilities {
    Capabilities {
        is_terminal: true,
        vt_supported,
        legacy_console,
        color_tier: ColorTier::Standard,
    }
}
