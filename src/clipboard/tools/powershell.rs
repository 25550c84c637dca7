//! Windows clipboard via PowerShell's Set-Clipboard / Get-Clipboard.

use super::{capture_out, pipe_in};
use crate::clipboard::tool::{ClipboardTool, ToolError};

pub struct PowerShell;

impl PowerShell {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PowerShell {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardTool for PowerShell {
    fn name(&self) -> &'static str {
        "powershell"
    }

    fn is_available(&self) -> bool {
        cfg!(windows)
    }

    fn copy_text(&self, text: &str) -> Result<(), ToolError> {
        pipe_in(
            "powershell",
            &[
                "-NoProfile",
                "-NonInteractive",
                "-Command",
                "$input | Out-String | ForEach-Object { Set-Clipboard -Value $_.TrimEnd() }",
            ],
            text,
        )
    }

    fn paste_text(&self) -> Result<String, ToolError> {
        let text = capture_out(
            "powershell",
            &["-NoProfile", "-NonInteractive", "-Command", "Get-Clipboard -Raw"],
        )?;
        Ok(text.trim_end_matches(['\r', '\n']).to_string())
    }
}
