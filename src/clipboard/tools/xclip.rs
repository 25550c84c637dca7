//! X11 clipboard via xclip.

use super::{capture_out, pipe_in, program_exists};
use crate::clipboard::tool::{ClipboardTool, ToolError};

/// Linux X11 clipboard tool using `xclip -selection clipboard`.
pub struct Xclip;

impl Xclip {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Xclip {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardTool for Xclip {
    fn name(&self) -> &'static str {
        "xclip"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && program_exists("xclip")
    }

    fn copy_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_in("xclip", &["-selection", "clipboard"], text)
    }

    fn paste_text(&self) -> Result<String, ToolError> {
        capture_out("xclip", &["-selection", "clipboard", "-o"])
    }
}
