//! Unit tests for capability probing and backend selection

use legacy_term::capabilities::{tier_from_env, BackendChoice, BackendKind, TierChoice};
use legacy_term::ColorTier;

use crate::helpers::terminal_caps;

#[test]
fn redirected_output_selects_plain() {
    let mut caps = terminal_caps(false, true);
    caps.is_terminal = false;
    assert_eq!(BackendKind::select(&caps), BackendKind::Plain);
}

#[test]
fn vt_terminal_selects_ansi() {
    assert_eq!(BackendKind::select(&terminal_caps(true, true)), BackendKind::Ansi);
    assert_eq!(BackendKind::select(&terminal_caps(true, false)), BackendKind::Ansi);
}

#[test]
fn non_vt_console_selects_legacy() {
    assert_eq!(BackendKind::select(&terminal_caps(false, true)), BackendKind::Legacy);
}

#[test]
fn no_vt_and_no_console_selects_plain() {
    assert_eq!(BackendKind::select(&terminal_caps(false, false)), BackendKind::Plain);
}

#[test]
fn explicit_choice_overrides_probe() {
    let caps = terminal_caps(true, false);
    assert_eq!(BackendChoice::Auto.resolve(&caps), BackendKind::Ansi);
    assert_eq!(BackendChoice::Legacy.resolve(&caps), BackendKind::Legacy);
    assert_eq!(BackendChoice::Plain.resolve(&caps), BackendKind::Plain);
}

#[test]
fn tier_from_environment() {
    assert_eq!(tier_from_env(Some("truecolor"), None), ColorTier::TrueColor);
    assert_eq!(tier_from_env(Some("24bit"), Some("xterm")), ColorTier::TrueColor);
    assert_eq!(tier_from_env(None, Some("xterm-256color")), ColorTier::EightBit);
    assert_eq!(tier_from_env(None, Some("xterm")), ColorTier::Standard);
    assert_eq!(tier_from_env(None, None), ColorTier::Standard);
}

#[test]
fn tier_choice_resolves() {
    let mut caps = terminal_caps(true, false);
    caps.color_tier = ColorTier::EightBit;
    assert_eq!(TierChoice::Auto.resolve(&caps), ColorTier::EightBit);
    assert_eq!(TierChoice::Legacy.resolve(&caps), ColorTier::Legacy);
    assert_eq!(TierChoice::TrueColor.resolve(&caps), ColorTier::TrueColor);
}
