//! Command handlers for the legacy-term CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod config;
pub mod demo;
pub mod probe;
pub mod render;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use legacy_term::capabilities::Capabilities;
use legacy_term::renderer::{open_renderer, SegmentRenderer};
use legacy_term::Config;

use crate::cli::OutputArgs;

/// Load the config from `path` if given, else from the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Probe the console and open the renderer chosen by flags, then config.
pub fn open_output(config: &Config, args: &OutputArgs) -> Result<Box<dyn SegmentRenderer>> {
    let caps = Capabilities::probe();
    let backend = args
        .backend
        .unwrap_or(config.render.backend)
        .resolve(&caps);
    let tier = args
        .color_tier
        .unwrap_or(config.render.color_tier)
        .resolve(&caps);
    debug!(?backend, ?tier, "Selected renderer");

    open_renderer(backend, tier, config.legacy.fallback())
        .with_context(|| format!("Failed to open {:?} renderer", backend))
}
