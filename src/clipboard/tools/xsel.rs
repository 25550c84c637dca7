//! X11 clipboard via xsel.

use super::{capture_out, pipe_in, program_exists};
use crate::clipboard::tool::{ClipboardTool, ToolError};

pub struct Xsel;

impl Xsel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Xsel {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardTool for Xsel {
    fn name(&self) -> &'static str {
        "xsel"
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && program_exists("xsel")
    }

    fn copy_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_in("xsel", &["--clipboard", "--input"], text)
    }

    fn paste_text(&self) -> Result<String, ToolError> {
        capture_out("xsel", &["--clipboard", "--output"])
    }
}
