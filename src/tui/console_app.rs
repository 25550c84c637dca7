//! The console TUI application
//!
//! Runs a [`ConsoleSession`] full-screen: feeds it terminal input, ticks it,
//! and draws its view until the user quits or a shutdown signal arrives.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use tracing::info;

use super::app::{App, QuitReason};
use super::event::Event;
use super::host::{is_quit_key, mouse_point, to_keystroke, TerminalHost};
use super::theme::{current_theme, Theme};
use super::ui::render_console;
use crate::console::{ConsoleSession, HostEvent};
use crate::utils::shutdown::ShutdownGuard;

/// Frame/tick interval; short enough for smooth toast fading.
const TICK_RATE: Duration = Duration::from_millis(33);

/// Console application state
pub struct ConsoleApp {
    /// Base app for terminal handling
    app: App,
    session: ConsoleSession,
    host: TerminalHost,
    theme: Theme,
    last_update: Instant,
}

impl ConsoleApp {
    /// Enter TUI mode and take ownership of a started session.
    pub fn new(session: ConsoleSession) -> Result<Self> {
        let app = App::new(TICK_RATE)?;
        let (width, height) = app.size()?;
        Ok(Self {
            app,
            session,
            host: TerminalHost::new(width, height),
            theme: current_theme(),
            last_update: Instant::now(),
        })
    }

    /// Run the event loop until quit, `exit`/`quit`, or a shutdown signal.
    pub fn run(&mut self, shutdown: &ShutdownGuard) -> Result<()> {
        loop {
            self.update();
            self.draw()?;

            if shutdown.should_exit() {
                self.app.quit(QuitReason::Shutdown);
            }
            if self.app.should_quit() {
                break;
            }

            match self.app.next_event()? {
                Event::Key(key) => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => self.host.resize(width, height),
                Event::Tick => {}
            }
        }
        info!(reason = ?self.app.quit_reason(), "Console host stopped");
        Ok(())
    }

    fn update(&mut self) {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last_update);
        self.last_update = now;

        self.session.update(&self.host, dt);
        self.host.end_tick();

        for event in self.session.take_events() {
            match event {
                HostEvent::Closed => self.app.quit(QuitReason::ConsoleClosed),
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let view = self.session.draw();
        let theme = &self.theme;
        self.app.draw(|frame| render_console(frame, &view, theme))
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if is_quit_key(&key) {
            self.app.quit(QuitReason::QuitKey);
            return;
        }
        if let Some(stroke) = to_keystroke(&key) {
            // Terminals repeat keys themselves and never report releases.
            self.session.key_down(stroke);
            self.session.key_up(stroke.key);
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let point = mouse_point(&mouse);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.session.mouse_down(&self.host, point, Instant::now())
            }
            MouseEventKind::Drag(MouseButton::Left) => self.session.mouse_drag(point),
            MouseEventKind::Up(MouseButton::Left) => self.session.mouse_up(point),
            MouseEventKind::ScrollUp => self.session.scroll_wheel(point, 1.0),
            MouseEventKind::ScrollDown => self.session.scroll_wheel(point, -1.0),
            _ => {}
        }
    }
}
