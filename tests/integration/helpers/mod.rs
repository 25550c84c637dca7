//! Test helper utilities

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use deskcon::clipboard::{Clipboard, ClipboardError};
use deskcon::console::{
    ConsoleSession, FixedAdvance, Point, Rect, SessionSettings, ShellCommand, WindowHost,
};
use tempfile::TempDir;

/// Advance of one glyph in the test font.
pub const ADVANCE: f32 = 10.0;

/// Height of one line in the test font.
pub const LINE: f32 = 16.0;

/// Window host with directly adjustable state.
#[derive(Debug, Clone)]
pub struct TestHost {
    pub rect: Rect,
    pub visible: bool,
    pub resizing: bool,
    pub topmost: bool,
}

impl TestHost {
    /// Ten scrollback lines plus the input line, 80 glyphs wide.
    pub fn new() -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, 800.0, 11.0 * LINE),
            visible: true,
            resizing: false,
            topmost: true,
        }
    }
}

impl WindowHost for TestHost {
    fn content_rect(&self) -> Rect {
        self.rect
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn is_topmost_under_pointer(&self, _point: Point) -> bool {
        self.topmost
    }

    fn is_resizing(&self) -> bool {
        self.resizing
    }
}

/// In-memory clipboard whose contents the test can inspect.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: Arc<Mutex<String>>,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            contents: Arc::new(Mutex::new(text.to_string())),
        }
    }

    pub fn text(&self) -> String {
        self.contents.lock().unwrap().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        *self.contents.lock().unwrap() = text.to_string();
        Ok(())
    }

    fn paste(&mut self) -> Result<String, ClipboardError> {
        Ok(self.contents.lock().unwrap().clone())
    }
}

/// A session rooted in a fresh temp directory, laid out in a [`TestHost`].
pub struct Harness {
    pub temp: TempDir,
    pub host: TestHost,
    pub clipboard: MemoryClipboard,
    pub session: ConsoleSession,
    pub now: Instant,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_settings(|_| {})
    }

    pub fn with_settings(tweak: impl FnOnce(&mut SessionSettings)) -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let root = temp.path().join("Desktop");
        std::fs::create_dir_all(&root).expect("Failed to create root");

        let mut settings = SessionSettings {
            root,
            shell: ShellCommand::new("sh", Vec::new()),
            ..SessionSettings::default()
        };
        tweak(&mut settings);

        let clipboard = MemoryClipboard::default();
        let session = ConsoleSession::new(
            settings,
            Arc::new(FixedAdvance::new(ADVANCE, LINE)),
            Box::new(clipboard.clone()),
        );
        let mut harness = Self {
            temp,
            host: TestHost::new(),
            clipboard,
            session,
            now: Instant::now(),
        };
        harness.tick();
        harness
    }

    pub fn root(&self) -> PathBuf {
        self.session.sandbox().root().to_path_buf()
    }

    /// One 16 ms frame.
    pub fn tick(&mut self) {
        self.now += Duration::from_millis(16);
        self.session.update(&self.host, Duration::from_millis(16));
    }

    /// Press and release the left button at `(x, y)`.
    pub fn click(&mut self, x: f32, y: f32) {
        let point = Point::new(x, y);
        self.session.mouse_down(&self.host, point, self.now);
        self.session.mouse_up(point);
        self.now += Duration::from_millis(100);
    }

    /// Two clicks close enough in time to count as a double-click.
    pub fn double_click(&mut self, x: f32, y: f32) {
        self.click(x, y);
        self.click(x, y);
    }

    /// Click into the input line to give it keyboard focus.
    pub fn focus_input(&mut self) {
        let y = self.session.input_area().y + 1.0;
        self.click(self.session.input_area().right() - 1.0, y);
        self.now += Duration::from_secs(1);
    }

    /// Vertical center of scroll line `row` when the view is not scrolled.
    pub fn row_y(&self, row: usize) -> f32 {
        self.session.scroll_area().y + row as f32 * LINE + LINE / 2.0
    }

    /// Text of every scrollback line.
    pub fn lines(&self) -> Vec<String> {
        let scrollback = self.session.scrollback();
        scrollback.texts(0..scrollback.len())
    }

    /// Wait until some line satisfies `pred`, ticking the session.
    pub fn wait_for(&mut self, pred: impl Fn(&str) -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if self.lines().iter().any(|l| pred(l)) {
                return true;
            }
            std::thread::sleep(Duration::from_millis(20));
            self.tick();
        }
        false
    }
}
