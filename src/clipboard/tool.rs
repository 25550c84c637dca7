//! Trait implemented by each external clipboard program.

/// Why a single tool could not complete an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The program is not installed.
    NotFound,
    /// The program cannot do this (e.g. a copy-only tool asked to paste).
    NotSupported,
    /// The program ran and failed.
    Failed(String),
    /// The program printed something that is not UTF-8.
    InvalidUtf8,
}

/// One way of reaching the system clipboard.
pub trait ClipboardTool: Send {
    /// Short program name for logs and errors.
    fn name(&self) -> &'static str;

    /// Whether the program can run on this machine.
    fn is_available(&self) -> bool;

    /// Put `text` on the clipboard.
    fn copy_text(&self, text: &str) -> Result<(), ToolError>;

    /// Read the clipboard as text.
    fn paste_text(&self) -> Result<String, ToolError>;
}
