//! TUI (Text User Interface) host for the console
//!
//! Runs the console full-screen in a terminal using ratatui/crossterm. The
//! terminal plays the role of the console's window: it supplies the content
//! rectangle, input events and a frame to draw into.

pub mod app;
pub mod console_app;
pub mod event;
pub mod host;
pub mod theme;
pub mod ui;

pub use console_app::ConsoleApp;
pub use theme::current_theme;
