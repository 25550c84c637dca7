//! Clipboard operation errors.

/// Errors that can occur during clipboard operations.
///
/// The console swallows all of these; they only reach the log.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("No clipboard tool available. On Linux, install wl-clipboard, xclip, or xsel.")]
    NoToolAvailable,

    #[error("{tool} failed: {message}")]
    ToolFailed { tool: &'static str, message: String },

    #[error("{tool} returned text that is not valid UTF-8")]
    InvalidUtf8 { tool: &'static str },
}
