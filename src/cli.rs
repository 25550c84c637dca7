//! CLI definitions for deskcon
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Args, Parser, Subcommand};

/// Build clap styles matching the console theme.
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "deskcon")]
#[command(about = "[ deskcon ] - a sandboxed shell console with scrollback and selection")]
#[command(
    long_about = "deskcon - an embedded shell console.

deskcon runs a shell behind a line-oriented console: type a command, press
Enter, and the shell's output scrolls by in a wrapped, selectable scrollback.
Directory changes are confined to a sandbox root (./Desktop by default).

QUICK START:
    deskcon                        Open the console
    deskcon run --root ~/scratch   Use another sandbox root
    deskcon config show            Print the effective configuration

INSIDE THE CONSOLE:
    help, clear, exit/quit         Built-in commands
    Ctrl+C / Ctrl+X / Ctrl+V       Copy, cut, paste
    Shift+Arrows, Ctrl+A           Select in the input line
    Drag / double-click            Select in the scrollback
    Ctrl+Q                         Quit"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub run: RunArgs,
}

/// Options for opening the console.
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Sandbox root directory (overrides [sandbox].directory)
    #[arg(long, value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Shell program to run (overrides [shell].program)
    #[arg(long, value_name = "PROGRAM", global = true)]
    pub shell: Option<String>,

    /// Log file (overrides [logging].file)
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the console (default)
    #[command(long_about = "Open the console full-screen in this terminal.

The shell starts in the sandbox root, which is created if missing.
Diagnostics are written to ~/.config/deskcon/deskcon.log unless
--log-file or [logging].file says otherwise.

EXAMPLES:
    deskcon run
    deskcon run --root /tmp/sandbox --shell bash")]
    Run,

    /// Configuration management
    #[command(
        subcommand,
        long_about = "View and initialize the deskcon configuration.

Config file location: ~/.config/deskcon/config.toml

EXAMPLES:
    deskcon config show     Show current configuration
    deskcon config path     Print the config file path
    deskcon config init     Write a default config file"
    )]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write the default configuration if no config file exists
    Init,
}
