//! Full-screen terminal ownership for the console host
//!
//! Raw mode, the alternate screen and mouse capture are held for the lifetime
//! of an [`App`] and released when it is dropped, including on panics that
//! unwind through the event loop.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use super::event::{Event, EventHandler};

/// Why the host loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitReason {
    /// The host's quit shortcut
    QuitKey,
    /// `exit`/`quit` typed into the console
    ConsoleClosed,
    /// SIGINT, SIGHUP or a vanished parent
    Shutdown,
}

/// The terminal in console mode plus its input feed.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventHandler,
    quit: Option<QuitReason>,
}

impl App {
    /// Switch the terminal into console mode.
    ///
    /// Every step taken so far is undone if a later one fails.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enter_console_mode().context("Failed to enter raw mode")?;

        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                leave_console_mode(&mut io::stdout());
                return Err(e).context("Failed to create terminal");
            }
        };

        Ok(Self {
            terminal,
            events: EventHandler::new(tick_rate),
            quit: None,
        })
    }

    /// Terminal size as (columns, rows).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    /// Block until the next input event or tick.
    pub fn next_event(&self) -> Result<Event> {
        self.events.next()
    }

    pub fn should_quit(&self) -> bool {
        self.quit.is_some()
    }

    /// Stop after the current iteration. The first reason given sticks.
    pub fn quit(&mut self, reason: QuitReason) {
        self.quit.get_or_insert(reason);
    }

    pub fn quit_reason(&self) -> Option<QuitReason> {
        self.quit
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.events.stop();
        leave_console_mode(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

/// Raw mode first, then the alternate screen with mouse reporting.
fn enter_console_mode() -> io::Result<()> {
    enable_raw_mode()?;
    if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e);
    }
    Ok(())
}

/// Best-effort reverse of [`enter_console_mode`].
fn leave_console_mode<W: Write>(out: &mut W) {
    let _ = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
    let _ = disable_raw_mode();
}
