//! Platform clipboard programs.

mod pbcopy;
mod powershell;
mod wl_clipboard;
mod xclip;
mod xsel;

pub use pbcopy::Pbcopy;
pub use powershell::PowerShell;
pub use wl_clipboard::WlClipboard;
pub use xclip::Xclip;
pub use xsel::Xsel;

use std::io::Write;
use std::process::{Command, Stdio};

use super::tool::{ClipboardTool, ToolError};

/// Tools for the current platform, most preferred first.
pub fn platform_tools() -> Vec<Box<dyn ClipboardTool>> {
    if cfg!(target_os = "macos") {
        vec![Box::new(Pbcopy::new())]
    } else if cfg!(windows) {
        vec![Box::new(PowerShell::new())]
    } else {
        vec![
            Box::new(WlClipboard::new()),
            Box::new(Xclip::new()),
            Box::new(Xsel::new()),
        ]
    }
}

/// Whether `program` is on the PATH.
pub(crate) fn program_exists(program: &str) -> bool {
    let finder = if cfg!(windows) { "where" } else { "which" };
    Command::new(finder)
        .arg(program)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run `program` with `text` on its standard input.
pub(crate) fn pipe_in(program: &str, args: &[&str], text: &str) -> Result<(), ToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ToolError::NotFound,
            _ => ToolError::Failed(e.to_string()),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ToolError::Failed(e.to_string()))?;
    }

    let status = child.wait().map_err(|e| ToolError::Failed(e.to_string()))?;
    if status.success() {
        Ok(())
    } else {
        Err(ToolError::Failed(format!("{} exited with {}", program, status)))
    }
}

/// Run `program` and return its standard output as text.
pub(crate) fn capture_out(program: &str, args: &[&str]) -> Result<String, ToolError> {
    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ToolError::NotFound,
            _ => ToolError::Failed(e.to_string()),
        })?;

    if !output.status.success() {
        return Err(ToolError::Failed(
            String::from_utf8_lossy(&output.stderr).trim().to_string(),
        ));
    }
    String::from_utf8(output.stdout).map_err(|_| ToolError::InvalidUtf8)
}
