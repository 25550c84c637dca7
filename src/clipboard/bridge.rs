//! Clipboard trait and the tool-driven system implementation.

use tracing::debug;

use super::error::ClipboardError;
use super::tool::{ClipboardTool, ToolError};
use super::tools::platform_tools;

/// Text clipboard used by the console session.
pub trait Clipboard: Send {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;

    fn paste(&mut self) -> Result<String, ClipboardError>;
}

/// The OS clipboard, reached through external tools tried in order.
pub struct SystemClipboard {
    tools: Vec<Box<dyn ClipboardTool>>,
}

impl SystemClipboard {
    /// Create with platform-appropriate tools.
    pub fn new() -> Self {
        Self {
            tools: platform_tools(),
        }
    }

    /// Create with specific tools (for testing).
    pub fn with_tools(tools: Vec<Box<dyn ClipboardTool>>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &[Box<dyn ClipboardTool>] {
        &self.tools
    }

    /// Run `op` on each available tool until one succeeds.
    ///
    /// Unsupported or missing tools are skipped. When every tool fails the
    /// last concrete failure is returned.
    fn first_success<T>(
        &self,
        what: &'static str,
        op: impl Fn(&dyn ClipboardTool) -> Result<T, ToolError>,
    ) -> Result<T, ClipboardError> {
        let mut last_error = None;
        for tool in self.tools.iter().filter(|t| t.is_available()) {
            match op(tool.as_ref()) {
                Ok(value) => {
                    debug!(tool = tool.name(), what, "Clipboard operation succeeded");
                    return Ok(value);
                }
                Err(ToolError::NotFound | ToolError::NotSupported) => continue,
                Err(ToolError::Failed(message)) => {
                    debug!(tool = tool.name(), what, %message, "Clipboard tool failed, trying next");
                    last_error = Some(ClipboardError::ToolFailed {
                        tool: tool.name(),
                        message,
                    });
                }
                Err(ToolError::InvalidUtf8) => {
                    last_error = Some(ClipboardError::InvalidUtf8 { tool: tool.name() });
                }
            }
        }
        Err(last_error.unwrap_or(ClipboardError::NoToolAvailable))
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.first_success("copy", |tool| tool.copy_text(text))
    }

    fn paste(&mut self) -> Result<String, ClipboardError> {
        self.first_success("paste", |tool| tool.paste_text())
    }
}
