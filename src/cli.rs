//! CLI definitions for legacy-term
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so the dispatch logic stays small.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use legacy_term::capabilities::{BackendChoice, TierChoice};

/// Build clap styles for help output.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "legacy-term")]
#[command(about = "Render styled segments on legacy consoles, VT terminals, or plain output")]
#[command(
    long_about = "legacy-term renders a stream of styled text segments and control codes.

On a console without VT support the output is drawn with console attribute
and cursor calls. Terminals that understand escape sequences get ANSI output,
and redirected output gets plain text.

QUICK START:
    legacy-term demo                      Show colors and cursor control
    legacy-term render segments.json      Render segments from a JSON file
    legacy-term probe                     Show detected console capabilities"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Use this config file instead of ~/.config/legacy-term/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a JSON array of segments
    #[command(long_about = "Render a JSON array of segments.

Each segment has optional \"text\", \"style\" ({\"fg\": ..., \"bg\": ...}) and
\"control\" (a list of {\"type\": ...} objects) fields. Reads stdin when no
file is given.

EXAMPLE:
    echo '[{\"text\": \"Hi\", \"style\": {\"fg\": \"red\"}}]' | legacy-term render")]
    Render {
        /// JSON file with segments (stdin if omitted)
        file: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render a built-in sample of colors and control codes
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show detected console capabilities and the backend that would be used
    Probe,

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Backend and color overrides shared by rendering commands.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Renderer backend (overrides config)
    #[arg(long, value_enum)]
    pub backend: Option<BackendChoice>,
    /// Color tier for ANSI output (overrides config)
    #[arg(long, value_enum)]
    pub color_tier: Option<TierChoice>,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the config file path
    Path,
    /// Write the default configuration file if none exists
    Init,
}
