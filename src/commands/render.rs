//! Render command handler

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use legacy_term::renderer::SegmentRenderer;
use legacy_term::{Config, Segment};

use super::open_output;
use crate::cli::OutputArgs;

/// Read segments as a JSON array from `file`, or stdin if `None`.
pub fn read_segments(file: Option<&Path>) -> Result<Vec<Segment>> {
    let contents = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read segments file: {:?}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read segments from stdin")?;
            buf
        }
    };
    serde_json::from_str(&contents).context("Failed to parse segments JSON")
}

/// Render segments from a file or stdin.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, file: Option<&Path>, output: &OutputArgs) -> Result<()> {
    let segments = read_segments(file)?;
    let mut renderer = open_output(config, output)?;
    renderer.render(&segments);
    Ok(())
}
