//! deskcon - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use deskcon::cli::{Cli, Commands, ConfigCommands};

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Run) => commands::run::handle(&cli.run),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init => commands::config::handle_init(),
        },
    }
}
