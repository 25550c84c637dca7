//! Clipboard exchange for the console.
//!
//! The console copies selected text out and pastes text in through the
//! [`Clipboard`] trait. The system implementation shells out to whichever
//! platform clipboard tool is installed (`wl-copy`, `xclip`, `xsel`,
//! `pbcopy`, PowerShell), trying them in priority order.
//!
//! # Example
//!
//! ```ignore
//! use deskcon::clipboard::{Clipboard, SystemClipboard};
//!
//! let mut clipboard = SystemClipboard::new();
//! clipboard.copy("hello")?;
//! let text = clipboard.paste()?;
//! ```

mod bridge;
mod error;
pub mod tool;
pub mod tools;

pub use bridge::{Clipboard, SystemClipboard};
pub use error::ClipboardError;
