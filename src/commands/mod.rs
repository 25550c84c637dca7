//! Command handlers for the deskcon CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod config;
pub mod run;
