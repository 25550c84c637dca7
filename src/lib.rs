//! deskcon library
//!
//! An embedded console that runs a shell child process behind a wrapped,
//! selectable scrollback, with command history, clipboard exchange and a
//! sandboxed working directory. The [`console`] module is host-agnostic;
//! [`tui`] hosts it in a terminal.

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod console;
pub mod logging;
pub mod tui;
pub mod utils;

pub use config::Config;
pub use console::{ConsoleSession, SessionSettings};

/// Package version, with the git commit for development builds.
pub fn version_string() -> String {
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if !sha.is_empty() && sha != "unknown" => {
            let short: String = sha.chars().take(7).collect();
            format!("{} ({})", env!("CARGO_PKG_VERSION"), short)
        }
        _ => env!("CARGO_PKG_VERSION").to_string(),
    }
}
