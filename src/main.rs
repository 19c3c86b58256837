//! legacy-term - CLI entry point

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Render { file, output } => {
            let config = commands::load_config(config_path)?;
            commands::render::handle(&config, file.as_deref(), &output)
        }
        Commands::Demo { output } => {
            let config = commands::load_config(config_path)?;
            commands::demo::handle(&config, &output)
        }
        Commands::Probe => commands::probe::handle(),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => {
                commands::config::handle_show(&commands::load_config(config_path)?)
            }
            ConfigCommands::Path => commands::config::handle_path(config_path),
            ConfigCommands::Init => commands::config::handle_init(config_path),
        },
    }
}
