//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub sandbox: SandboxConfig,
    #[serde(default)]
    pub scrollback: ScrollbackConfig,
    #[serde(default)]
    pub history: HistoryConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shell launched behind the console
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Program to run; platform default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// Arguments; only used together with `program`
    #[serde(default)]
    pub args: Vec<String>,
}

/// Directory sandbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandboxConfig {
    /// Root directory, relative to the working directory unless absolute
    #[serde(default = "default_sandbox_directory")]
    pub directory: String,
    #[serde(default = "default_max_parent_depth")]
    pub max_parent_depth: usize,
}

pub fn default_sandbox_directory() -> String {
    "Desktop".to_string()
}

pub fn default_max_parent_depth() -> usize {
    2
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            directory: default_sandbox_directory(),
            max_parent_depth: default_max_parent_depth(),
        }
    }
}

/// Scrollback bounds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollbackConfig {
    #[serde(default = "default_scrollback_capacity")]
    pub capacity: usize,
    /// Lines dropped at once when the capacity is exceeded
    #[serde(default = "default_evict_chunk")]
    pub evict_chunk: usize,
}

pub fn default_scrollback_capacity() -> usize {
    1000
}

pub fn default_evict_chunk() -> usize {
    100
}

impl Default for ScrollbackConfig {
    fn default() -> Self {
        Self {
            capacity: default_scrollback_capacity(),
            evict_chunk: default_evict_chunk(),
        }
    }
}

/// Command history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_history_capacity")]
    pub capacity: usize,
}

pub fn default_history_capacity() -> usize {
    100
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_history_capacity(),
        }
    }
}

/// Keyboard repeat and double-click timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_repeat_delay_ms")]
    pub repeat_delay_ms: u64,
    #[serde(default = "default_repeat_interval_ms")]
    pub repeat_interval_ms: u64,
    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: u64,
    /// Maximum pointer travel between the two clicks
    #[serde(default = "default_double_click_radius")]
    pub double_click_radius: f32,
}

pub fn default_repeat_delay_ms() -> u64 {
    500
}

pub fn default_repeat_interval_ms() -> u64 {
    50
}

pub fn default_double_click_ms() -> u64 {
    400
}

pub fn default_double_click_radius() -> f32 {
    4.0
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            repeat_delay_ms: default_repeat_delay_ms(),
            repeat_interval_ms: default_repeat_interval_ms(),
            double_click_ms: default_double_click_ms(),
            double_click_radius: default_double_click_radius(),
        }
    }
}

/// Copy acknowledgement timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    #[serde(default = "default_toast_fade_start_ms")]
    pub toast_fade_start_ms: u64,
}

pub fn default_toast_ms() -> u64 {
    1500
}

pub fn default_toast_fade_start_ms() -> u64 {
    1000
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            toast_ms: default_toast_ms(),
            toast_fade_start_ms: default_toast_fade_start_ms(),
        }
    }
}

/// Diagnostic log output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; `deskcon.log` in the config directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

pub fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
