//! Wayland clipboard via wl-copy / wl-paste.

use super::{capture_out, pipe_in, program_exists};
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// Only offered inside a Wayland session.
pub struct WlClipboard;

impl WlClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WlClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardTool for WlClipboard {
    fn name(&self) -> &'static str {
        "wl-copy"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux")
            && std::env::var_os("WAYLAND_DISPLAY").is_some()
            && program_exists("wl-copy")
    }

    fn copy_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_in("wl-copy", &[], text)
    }

    fn paste_text(&self) -> Result<String, ToolError> {
        // wl-paste appends a newline unless told not to.
        capture_out("wl-paste", &["--no-newline"])
    }
}
