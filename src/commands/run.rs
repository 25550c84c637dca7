//! `deskcon run`: open the console in this terminal

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use deskcon::cli::RunArgs;
use deskcon::clipboard::SystemClipboard;
use deskcon::console::{CellMeasure, ConsoleSession};
use deskcon::tui::ConsoleApp;
use deskcon::utils::shutdown::ShutdownGuard;
use deskcon::Config;

/// Apply command-line overrides on top of the loaded config.
pub fn apply_overrides(config: &mut Config, args: &RunArgs) {
    if let Some(root) = &args.root {
        config.sandbox.directory = root.display().to_string();
    }
    if let Some(shell) = &args.shell {
        config.shell.program = Some(shell.clone());
        config.shell.args.clear();
    }
    if let Some(log_file) = &args.log_file {
        config.logging.file = Some(log_file.clone());
    }
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: &RunArgs) -> Result<()> {
    let mut config = Config::load()?;
    apply_overrides(&mut config, args);

    let log_file = config.log_file()?;
    deskcon::logging::init_global(&log_file, &config.logging.level)?;

    let settings = config.session_settings();
    info!(
        root = %settings.root.display(),
        shell = %settings.shell.program,
        "Opening console"
    );

    let shutdown = ShutdownGuard::new();
    shutdown.register_signal_handlers();

    let mut session = ConsoleSession::new(
        settings,
        Arc::new(CellMeasure),
        Box::new(SystemClipboard::new()),
    );
    session.start();

    let mut app = ConsoleApp::new(session).context("Failed to initialize terminal")?;
    app.run(&shutdown)
}
