//! CLI tests
//!
//! Runs the legacy-term binary with piped stdout, so `auto` resolves to the
//! plain backend.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use crate::helpers::fixture_path;

fn legacy_term() -> Command {
    let mut cmd = Command::cargo_bin("legacy-term").expect("binary should build");
    cmd.env_remove("COLORTERM").env("TERM", "xterm");
    cmd
}

#[test]
fn render_plain_keeps_text_and_carriage_return() {
    legacy_term()
        .args(["render", "--backend", "plain"])
        .arg(fixture_path("status.json"))
        .assert()
        .success()
        .stdout("build running\rbuild ok");
}

#[test]
fn render_reads_stdin() {
    legacy_term()
        .args(["render", "--backend", "plain"])
        .write_stdin(r#"[{"text": "from stdin"}, {"control": [{"type": "bell"}]}]"#)
        .assert()
        .success()
        .stdout("from stdin\x07");
}

#[test]
fn render_auto_is_plain_when_piped() {
    legacy_term()
        .arg("render")
        .write_stdin(r#"[{"text": "x", "style": {"fg": "red"}}]"#)
        .assert()
        .success()
        .stdout("x");
}

#[test]
fn render_ansi_emits_sgr_and_erase() {
    legacy_term()
        .args(["render", "--backend", "ansi", "--color-tier", "standard"])
        .arg(fixture_path("status.json"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\x1b[38;5;3mrunning\x1b[0m")
                .and(predicate::str::contains("\r\x1b[2K"))
                .and(predicate::str::contains("\x1b[38;5;2m\x1b[48;5;0mok\x1b[0m")),
        );
}

#[test]
fn render_rejects_malformed_json() {
    legacy_term()
        .args(["render", "--backend", "plain"])
        .write_stdin("[{\"text\": ")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse segments JSON"));
}

#[test]
fn render_missing_file_fails() {
    legacy_term()
        .args(["render", "--backend", "plain", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read segments file"));
}

// Off Windows there is no legacy console at all; on Windows the piped stdout
// has no screen buffer, so the legacy host must refuse it.
#[test]
fn forced_legacy_backend_fails_when_stdout_is_piped() {
    legacy_term()
        .args(["render", "--backend", "legacy"])
        .write_stdin("[]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open Legacy renderer"));
}

#[test]
fn backend_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[render]\nbackend = \"ansi\"\ncolor_tier = \"standard\"\n").unwrap();

    legacy_term()
        .arg("--config")
        .arg(&config)
        .arg("render")
        .write_stdin(r#"[{"text": "x", "style": {"fg": "red"}}]"#)
        .assert()
        .success()
        .stdout("\x1b[38;5;1mx\x1b[0m");
}

#[test]
fn demo_plain_output() {
    legacy_term()
        .args(["demo", "--backend", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Backgrounds: ").and(predicate::str::contains("\rdone\n")));
}

#[test]
fn probe_reports_plain_for_pipe() {
    legacy_term()
        .arg("probe")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("terminal:        no")
                .and(predicate::str::contains("backend (auto):  Plain")),
        );
}

#[test]
fn config_show_prints_effective_toml() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[render]\nbackend = \"plain\"\n").unwrap();

    legacy_term()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("backend = \"plain\"")
                .and(predicate::str::contains("fallback_attribute = 7")),
        );
}

#[test]
fn config_init_writes_defaults_once() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("nested").join("config.toml");

    legacy_term()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(config.exists());

    legacy_term()
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Config already exists"));
}

#[test]
fn invalid_config_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.toml");
    fs::write(&config, "[legacy]\nfallback_attribute = 999\n").unwrap();

    legacy_term()
        .arg("--config")
        .arg(&config)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}
