//! Configuration management for deskcon

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::console::{SessionSettings, ShellCommand};

impl Config {
    /// Get the config file path (~/.config/deskcon/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/deskcon)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from the default file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load_from(&io::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to the default file
    pub fn save(&self) -> Result<()> {
        io::save_to(self, &io::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Check values the console cannot work with.
    pub fn validate(&self) -> Result<(), String> {
        if self.scrollback.capacity == 0 {
            return Err("scrollback.capacity must be > 0".to_string());
        }
        if self.scrollback.evict_chunk == 0 {
            return Err("scrollback.evict_chunk must be > 0".to_string());
        }
        if self.scrollback.evict_chunk > self.scrollback.capacity {
            return Err(format!(
                "scrollback.evict_chunk {} exceeds scrollback.capacity {}",
                self.scrollback.evict_chunk, self.scrollback.capacity
            ));
        }
        if self.history.capacity == 0 {
            return Err("history.capacity must be > 0".to_string());
        }
        if self.input.repeat_interval_ms == 0 {
            return Err("input.repeat_interval_ms must be > 0".to_string());
        }
        if self.clipboard.toast_fade_start_ms > self.clipboard.toast_ms {
            return Err(format!(
                "clipboard.toast_fade_start_ms {} exceeds clipboard.toast_ms {}",
                self.clipboard.toast_fade_start_ms, self.clipboard.toast_ms
            ));
        }
        Ok(())
    }

    /// Sandbox root, with `~/` expanded
    pub fn sandbox_root(&self) -> PathBuf {
        let dir = &self.sandbox.directory;
        if let Some(stripped) = dir.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        }
        PathBuf::from(dir)
    }

    /// Shell command, falling back to the platform default
    pub fn shell_command(&self) -> ShellCommand {
        match &self.shell.program {
            Some(program) => ShellCommand::new(program.clone(), self.shell.args.clone()),
            None => ShellCommand::platform_default(),
        }
    }

    /// Log file path, defaulting to deskcon.log in the config directory
    pub fn log_file(&self) -> Result<PathBuf> {
        match &self.logging.file {
            Some(path) => Ok(path.clone()),
            None => Ok(io::config_dir()?.join("deskcon.log")),
        }
    }

    /// Console session settings derived from this configuration
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            root: self.sandbox_root(),
            shell: self.shell_command(),
            max_parent_depth: self.sandbox.max_parent_depth,
            scrollback_capacity: self.scrollback.capacity,
            evict_chunk: self.scrollback.evict_chunk,
            history_capacity: self.history.capacity,
            repeat_delay: Duration::from_millis(self.input.repeat_delay_ms),
            repeat_interval: Duration::from_millis(self.input.repeat_interval_ms),
            double_click_interval: Duration::from_millis(self.input.double_click_ms),
            double_click_radius: self.input.double_click_radius,
            toast_duration: Duration::from_millis(self.clipboard.toast_ms),
            toast_fade_start: Duration::from_millis(self.clipboard.toast_fade_start_ms),
        }
    }
}
