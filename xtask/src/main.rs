//! xtask - Build tasks for deskcon
//!
//! Run with: cargo xtask <command>
//!
//! Commands:
//! - gen-docs: Generate man pages and COMMANDS.md from the CLI definitions

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};

use deskcon::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build tasks for deskcon")]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Subcommand)]
enum XtaskCommand {
    /// Generate documentation from CLI definitions
    #[command(name = "gen-docs")]
    GenDocs {
        /// Output directory (default: docs/)
        #[arg(long, short, default_value = "docs")]
        output: PathBuf,

        /// Generate man pages only
        #[arg(long)]
        man: bool,

        /// Generate COMMANDS.md only
        #[arg(long)]
        markdown: bool,
    },
}

fn main() -> Result<()> {
    let args = Xtask::parse();

    match args.command {
        XtaskCommand::GenDocs {
            output,
            man,
            markdown,
        } => {
            let gen_all = !man && !markdown;
            if gen_all || man {
                generate_man_pages(&output)?;
            }
            if gen_all || markdown {
                generate_markdown(&output)?;
            }
        }
    }

    Ok(())
}

/// Render one man page per command, recursing into nested subcommands.
fn render_man(cmd: &clap::Command, prefix: &str, dir: &Path) -> Result<()> {
    let name = if prefix.is_empty() {
        cmd.get_name().to_string()
    } else {
        format!("{}-{}", prefix, cmd.get_name())
    };

    let mut buffer = Vec::new();
    clap_mangen::Man::new(cmd.clone()).render(&mut buffer)?;
    let path = dir.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Generated: {}", path.display());

    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        render_man(sub, &name, dir)?;
    }
    Ok(())
}

fn generate_man_pages(output: &Path) -> Result<()> {
    let man_dir = output.join("man");
    fs::create_dir_all(&man_dir).context("Failed to create man directory")?;
    render_man(&Cli::command(), "", &man_dir)?;
    println!("Man pages generated in {}", man_dir.display());
    Ok(())
}

fn generate_markdown(output: &Path) -> Result<()> {
    fs::create_dir_all(output).context("Failed to create output directory")?;

    let mut cmd = Cli::command();
    let mut markdown = String::new();
    markdown.push_str("# deskcon Command Reference\n\n");
    markdown.push_str("This document is auto-generated from the CLI definitions.\n\n");
    markdown.push_str("```\n");
    markdown.push_str(&cmd.render_long_help().to_string());
    markdown.push_str("```\n\n");

    for sub in cmd.get_subcommands_mut() {
        if sub.is_hide_set() {
            continue;
        }
        markdown.push_str(&format!("## deskcon {}\n\n```\n", sub.get_name()));
        markdown.push_str(&sub.render_long_help().to_string());
        markdown.push_str("```\n\n");
    }

    let path = output.join("COMMANDS.md");
    fs::write(&path, markdown).context("Failed to write COMMANDS.md")?;
    println!("Generated: {}", path.display());
    Ok(())
}
