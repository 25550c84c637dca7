//! macOS clipboard via pbcopy / pbpaste.

use super::{capture_out, pipe_in};
use crate::clipboard::tool::{ClipboardTool, ToolError};

pub struct Pbcopy;

impl Pbcopy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Pbcopy {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardTool for Pbcopy {
    fn name(&self) -> &'static str {
        "pbcopy"
    }

    fn is_available(&self) -> bool {
        // Ships with every macOS install.
        cfg!(target_os = "macos")
    }

    fn copy_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_in("pbcopy", &[], text)
    }

    fn paste_text(&self) -> Result<String, ToolError> {
        capture_out("pbpaste", &[])
    }
}
