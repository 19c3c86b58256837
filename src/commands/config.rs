//! Config subcommands handler

use anyhow::Result;
use std::path::{Path, PathBuf};

use legacy_term::Config;

fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Print the path the config is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(path: Option<&Path>) -> Result<()> {
    println!("{}", resolve_path(path)?.display());
    Ok(())
}

/// Write a default config file unless one already exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: Option<&Path>) -> Result<()> {
    let path = resolve_path(path)?;
    if path.exists() {
        println!("Config already exists: {}", path.display());
        return Ok(());
    }
    Config::default().save_to(&path)?;
    println!("Wrote default config: {}", path.display());
    Ok(())
}
