//! Embedded console: a line-oriented front end to a shell child process.
//!
//! The pieces, leaves first:
//!
//! - [`wrap`] splits text into display lines against a width budget.
//! - [`scrollback`] keeps the wrapped lines, bounded, with scroll state.
//! - [`sandbox`] refuses directory changes that would leave the root.
//! - [`process`] runs the shell and streams its output into the scrollback.
//! - [`selection`] tracks input-line and scrollback selections.
//! - [`history`] remembers submitted commands.
//! - [`session`] ties them together behind host-driven update/draw hooks.

pub mod error;
pub mod history;
pub mod host;
pub mod input;
pub mod keys;
pub mod measure;
pub mod process;
pub mod sandbox;
pub mod sanitize;
pub mod scrollback;
pub mod selection;
pub mod session;
pub mod toast;
pub mod view;
pub mod wrap;

pub use error::ProcessError;
pub use history::HistoryLog;
pub use host::{HostEvent, Point, Rect, WindowHost};
pub use keys::{Key, KeyStroke, Modifiers};
pub use measure::{CellMeasure, FixedAdvance, TextMeasure};
pub use process::{ChildProcessSession, ShellCommand};
pub use sandbox::PathSandbox;
pub use scrollback::{DisplayLine, LineTag, ScrollbackBuffer};
pub use selection::SelectionModel;
pub use session::{ConsoleSession, FocusState, SessionSettings};
pub use view::ConsoleView;
