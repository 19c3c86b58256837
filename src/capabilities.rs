//! Console capability probing and backend selection.
//!
//! Probing happens once at startup; the resulting [`BackendKind`] decides
//! which renderer is built. Nothing here runs inside the render loop.

use std::env;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::ColorTier;

/// What the attached output stream can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Stdout is an interactive terminal
    pub is_terminal: bool,
    /// The host interprets VT escape sequences
    pub vt_supported: bool,
    /// A legacy console screen buffer is attached to stdout
    pub legacy_console: bool,
    /// Best color tier for VT output
    pub color_tier: ColorTier,
}

impl Capabilities {
    /// Probe stdout and the environment.
    pub fn probe() -> Self {
        let is_terminal = atty::is(atty::Stream::Stdout);
        let caps = Self {
            is_terminal,
            vt_supported: vt_supported(),
            legacy_console: is_terminal && legacy_console_available(),
            color_tier: tier_from_env(
                env::var("COLORTERM").ok().as_deref(),
                env::var("TERM").ok().as_deref(),
            ),
        };
        debug!(?caps, "Probed console capabilities");
        caps
    }
}

/// `ENABLE_VIRTUAL_TERMINAL_PROCESSING` output mode flag.
const VT_PROCESSING_FLAG: u32 = 0x0004;

/// True if a console output mode already has VT processing on.
#[cfg_attr(not(windows), allow(dead_code))]
fn mode_has_vt_processing(mode: u32) -> bool {
    mode & VT_PROCESSING_FLAG != 0
}

/// Read the stdout console mode. Never changes it.
#[cfg(windows)]
fn vt_supported() -> bool {
    use crossterm_winapi::{ConsoleMode, Handle, HandleType};

    Handle::new(HandleType::OutputHandle)
        .and_then(|handle| ConsoleMode::from(handle).mode())
        .map(mode_has_vt_processing)
        .unwrap_or(false)
}

#[cfg(not(windows))]
fn vt_supported() -> bool {
    true
}

#[cfg(windows)]
fn legacy_console_available() -> bool {
    crate::console::WinConsole::stdout().is_ok()
}

#[cfg(not(windows))]
fn legacy_console_available() -> bool {
    false
}

/// Color tier implied by `COLORTERM` and `TERM`.
pub fn tier_from_env(colorterm: Option<&str>, term: Option<&str>) -> ColorTier {
    let true_color = matches!(colorterm, Some("truecolor") | Some("24bit"));
    let colors_256 = term.map(|t| t.contains("256color")).unwrap_or(false);
    ColorTier::from_flags(true_color, colors_256)
}

/// A concrete renderer backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    Legacy,
    Ansi,
    Plain,
}

impl BackendKind {
    /// Pick a backend for the probed capabilities.
    ///
    /// Redirected output gets plain text; terminals that understand VT get
    /// escape sequences; only a non-VT console falls back to the legacy path.
    pub fn select(caps: &Capabilities) -> Self {
        if !caps.is_terminal {
            Self::Plain
        } else if caps.vt_supported {
            Self::Ansi
        } else if caps.legacy_console {
            Self::Legacy
        } else {
            Self::Plain
        }
    }
}

/// Backend requested by configuration or command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum BackendChoice {
    #[default]
    Auto,
    Legacy,
    Ansi,
    Plain,
}

impl BackendChoice {
    pub fn resolve(self, caps: &Capabilities) -> BackendKind {
        match self {
            Self::Auto => BackendKind::select(caps),
            Self::Legacy => BackendKind::Legacy,
            Self::Ansi => BackendKind::Ansi,
            Self::Plain => BackendKind::Plain,
        }
    }
}

/// Color tier requested by configuration or command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum TierChoice {
    #[default]
    Auto,
    Legacy,
    Standard,
    EightBit,
    TrueColor,
}

impl TierChoice {
    pub fn resolve(self, caps: &Capabilities) -> ColorTier {
        match self {
            Self::Auto => caps.color_tier,
            Self::Legacy => ColorTier::Legacy,
            Self::Standard => ColorTier::Standard,
            Self::EightBit => ColorTier::EightBit,
            Self::TrueColor => ColorTier::TrueColor,
        }
    }
}
