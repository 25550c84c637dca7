//! The console orchestrator.
//!
//! [`ConsoleSession`] owns every console component and is driven entirely by
//! its host: `update` once per tick, `draw` once per frame, and the input
//! hooks as events arrive. Nothing here returns an error to the host; every
//! failure ends up as a colored scrollback line or is dropped silently.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::error::ProcessError;
use super::history::{HistoryLog, DEFAULT_HISTORY_CAPACITY};
use super::host::{HostEvent, Point, Rect, WindowHost};
use super::input::InputLine;
use super::keys::{Key, KeyRepeat, KeyStroke, DEFAULT_REPEAT_DELAY, DEFAULT_REPEAT_INTERVAL};
use super::measure::{char_at, char_index_at, TextMeasure};
use super::process::{ChildProcessSession, ShellCommand};
use super::sandbox::{PathSandbox, DEFAULT_MAX_PARENT_DEPTH};
use super::scrollback::{LineTag, ScrollbackBuffer, DEFAULT_CAPACITY, DEFAULT_EVICT_CHUNK};
use super::selection::{
    word_bounds, ClickKind, ClickTracker, SelectionModel, TextPos, DEFAULT_DOUBLE_CLICK_INTERVAL,
    DEFAULT_DOUBLE_CLICK_RADIUS,
};
use super::toast::{CopyToast, DEFAULT_TOAST_DURATION, DEFAULT_TOAST_FADE_START};
use super::view::{ConsoleView, InputView, ToastView, ViewLine};
use crate::clipboard::Clipboard;

/// Prompt drawn in front of the input line and in command echoes.
pub const PROMPT: &str = "> ";

/// Lines scrolled per mouse-wheel notch.
pub const WHEEL_LINES: f32 = 3.0;

const COPIED_LABEL: &str = "Copied";

/// Tunables for a console session.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Sandbox root and shell working directory
    pub root: PathBuf,
    pub shell: ShellCommand,
    pub max_parent_depth: usize,
    pub scrollback_capacity: usize,
    pub evict_chunk: usize,
    pub history_capacity: usize,
    pub repeat_delay: Duration,
    pub repeat_interval: Duration,
    pub double_click_interval: Duration,
    pub double_click_radius: f32,
    pub toast_duration: Duration,
    pub toast_fade_start: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("Desktop"),
            shell: ShellCommand::platform_default(),
            max_parent_depth: DEFAULT_MAX_PARENT_DEPTH,
            scrollback_capacity: DEFAULT_CAPACITY,
            evict_chunk: DEFAULT_EVICT_CHUNK,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            repeat_delay: DEFAULT_REPEAT_DELAY,
            repeat_interval: DEFAULT_REPEAT_INTERVAL,
            double_click_interval: DEFAULT_DOUBLE_CLICK_INTERVAL,
            double_click_radius: DEFAULT_DOUBLE_CLICK_RADIUS,
            toast_duration: DEFAULT_TOAST_DURATION,
            toast_fade_start: DEFAULT_TOAST_FADE_START,
        }
    }
}

/// Where keyboard and pointer input currently goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusState {
    /// Hidden or not accepting keystrokes
    Idle,
    /// Input line has keyboard focus
    Focused,
    /// Scrollback drag in progress; `resume_focused` is restored on release
    Selecting { resume_focused: bool },
}

/// Composes the console components and dispatches commands.
pub struct ConsoleSession {
    settings: SessionSettings,
    measure: Arc<dyn TextMeasure>,
    scrollback: ScrollbackBuffer,
    process: ChildProcessSession,
    sandbox: PathSandbox,
    history: HistoryLog,
    input: InputLine,
    selection: SelectionModel,
    clicks: ClickTracker,
    repeat: KeyRepeat,
    toast: Option<CopyToast>,
    clipboard: Box<dyn Clipboard>,
    focus: FocusState,
    visible: bool,
    bounds: Rect,
    scroll_area: Rect,
    input_area: Rect,
    needs_layout: bool,
    seen_evicted: u64,
    seen_epoch: u64,
    events: Vec<HostEvent>,
}

impl ConsoleSession {
    /// Assemble a session. Nothing touches the filesystem or spawns a process
    /// until [`start`](Self::start).
    pub fn new(settings: SessionSettings, measure: Arc<dyn TextMeasure>, clipboard: Box<dyn Clipboard>) -> Self {
        let scrollback = ScrollbackBuffer::with_capacity(
            Arc::clone(&measure),
            settings.scrollback_capacity,
            settings.evict_chunk,
        );
        let process = ChildProcessSession::new(settings.shell.clone(), settings.root.clone(), scrollback.clone());
        let sandbox = PathSandbox::new(settings.root.clone(), settings.max_parent_depth);

        Self {
            history: HistoryLog::new(settings.history_capacity),
            clicks: ClickTracker::new(settings.double_click_interval, settings.double_click_radius),
            repeat: KeyRepeat::new(settings.repeat_delay, settings.repeat_interval),
            seen_evicted: scrollback.evicted_total(),
            seen_epoch: scrollback.layout_epoch(),
            settings,
            measure,
            scrollback,
            process,
            sandbox,
            input: InputLine::new(),
            selection: SelectionModel::new(),
            toast: None,
            clipboard,
            focus: FocusState::Idle,
            visible: false,
            bounds: Rect::default(),
            scroll_area: Rect::default(),
            input_area: Rect::default(),
            needs_layout: true,
            events: Vec::new(),
        }
    }

    /// Create the sandbox root, print the banner and launch the shell.
    pub fn start(&mut self) {
        let root = self.settings.root.clone();
        if let Err(e) = std::fs::create_dir_all(&root) {
            warn!(root = %root.display(), error = %e, "Failed to create console root");
            self.scrollback.append(
                &format!("Could not create {}: {}", root.display(), e),
                LineTag::Failure,
                true,
            );
        }
        // Resolve the root now that it exists.
        self.sandbox = PathSandbox::new(root, self.settings.max_parent_depth);

        self.scrollback.append(
            &format!("deskcon {}", crate::version_string()),
            LineTag::Info,
            true,
        );
        self.scrollback.append(
            &format!("Working directory: {}", self.sandbox.root().display()),
            LineTag::Info,
            true,
        );
        self.scrollback.append(
            "Type 'help' for available commands.",
            LineTag::Info,
            true,
        );
        self.start_shell();
    }

    fn start_shell(&mut self) -> bool {
        match self.process.start() {
            Ok(()) => {
                self.scrollback.append(
                    &format!("Shell started: {}", self.settings.shell.program),
                    LineTag::Success,
                    true,
                );
                true
            }
            Err(e) => {
                warn!(error = %e, "Shell failed to start");
                self.scrollback.append(&e.to_string(), LineTag::Failure, true);
                false
            }
        }
    }

    // ---- accessors --------------------------------------------------------

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn scrollback(&self) -> &ScrollbackBuffer {
        &self.scrollback
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn selection(&self) -> &SelectionModel {
        &self.selection
    }

    pub fn sandbox(&self) -> &PathSandbox {
        &self.sandbox
    }

    pub fn process(&self) -> &ChildProcessSession {
        &self.process
    }

    pub fn focus(&self) -> FocusState {
        self.focus
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn scroll_area(&self) -> Rect {
        self.scroll_area
    }

    pub fn input_area(&self) -> Rect {
        self.input_area
    }

    /// Drain notifications raised since the last call.
    pub fn take_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.events)
    }

    fn has_keyboard(&self) -> bool {
        matches!(
            self.focus,
            FocusState::Focused
                | FocusState::Selecting {
                    resume_focused: true
                }
        )
    }

    // ---- host hooks -------------------------------------------------------

    /// Per-tick housekeeping: layout, shell exit detection, key repeat and
    /// toast aging.
    pub fn update(&mut self, host: &dyn WindowHost, dt: Duration) {
        let visible = host.is_visible();
        if visible != self.visible {
            self.notify_visibility_changed(visible);
        }
        if !self.visible {
            return;
        }

        let rect = host.content_rect();
        let resizing = host.is_resizing();
        if self.needs_layout || resizing || rect != self.bounds {
            self.layout(rect, self.needs_layout || resizing);
        }

        self.process.poll_exit();

        if let Some((stroke, count)) = self.repeat.tick(dt) {
            if self.has_keyboard() {
                for _ in 0..count {
                    self.apply_stroke(stroke);
                }
            } else {
                self.repeat.cancel();
            }
        }

        if let Some(toast) = &mut self.toast {
            toast.advance(dt);
            if toast.is_expired() {
                self.toast = None;
            }
        }

        self.sync_selection();
    }

    /// Split the content rectangle into scrollback and input areas.
    fn layout(&mut self, rect: Rect, force_rewrap: bool) {
        let line_height = self.measure.line_height();
        self.bounds = rect;
        let input_height = line_height.min(rect.height);
        self.input_area = Rect::new(rect.x, rect.bottom() - input_height, rect.width, input_height);
        self.scroll_area = Rect::new(rect.x, rect.y, rect.width, (rect.height - input_height).max(0.0));
        if self
            .scrollback
            .set_viewport(self.scroll_area.width, self.scroll_area.height, force_rewrap)
        {
            debug!(width = self.scroll_area.width, "Console re-laid out");
        }
        self.needs_layout = false;
        self.sync_selection();
    }

    /// Build the render model for this frame.
    pub fn draw(&mut self) -> ConsoleView {
        self.sync_selection();
        let line_height = self.measure.line_height();
        let visible = self.scrollback.visible_lines();
        let selected = self.selection.scrollback();

        let lines = visible
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let index = visible.first_index + i;
                ViewLine {
                    text: line.text().to_string(),
                    tag: line.tag(),
                    y: self.scroll_area.y + visible.top + i as f32 * line_height,
                    selection: selected.and_then(|s| s.span_on_line(index, line.text().chars().count())),
                }
            })
            .collect();

        let input = InputView {
            prompt: PROMPT.to_string(),
            text: self.input.text(),
            cursor: self.input.cursor(),
            selection: self.selection.input().filter(|s| !s.is_empty()).map(|s| s.range()),
            focused: self.has_keyboard(),
        };

        let toast = self.toast.as_ref().map(|t| ToastView {
            text: t.text.clone(),
            x: t.x,
            y: t.y,
            opacity: t.opacity(),
        });

        ConsoleView {
            scroll_area: self.scroll_area,
            input_area: self.input_area,
            lines,
            input,
            toast,
            scroll: self.scrollback.metrics(),
        }
    }

    /// Shown or hidden by the host. Showing forces a full re-layout.
    pub fn notify_visibility_changed(&mut self, visible: bool) {
        self.visible = visible;
        if visible {
            self.needs_layout = true;
        } else {
            self.focus = FocusState::Idle;
            self.repeat.cancel();
            self.clicks.reset();
            if self.selection.is_dragging() {
                self.selection.end_drag();
            }
        }
    }

    /// Give up keyboard focus, e.g. because a sibling widget claimed it.
    pub fn clear_focus(&mut self) {
        self.focus = match self.focus {
            FocusState::Selecting { .. } => FocusState::Selecting {
                resume_focused: false,
            },
            _ => FocusState::Idle,
        };
        self.repeat.cancel();
    }

    /// Follow evictions and drop selections invalidated by re-wrap or clear.
    fn sync_selection(&mut self) {
        let epoch = self.scrollback.layout_epoch();
        let evicted = self.scrollback.evicted_total();
        if epoch != self.seen_epoch {
            self.selection.on_layout_reset();
        } else if evicted != self.seen_evicted {
            self.selection.on_evicted((evicted - self.seen_evicted) as usize);
        }
        self.seen_epoch = epoch;
        self.seen_evicted = evicted;
    }

    // ---- keyboard ---------------------------------------------------------

    pub fn key_down(&mut self, stroke: KeyStroke) {
        if !self.visible {
            return;
        }
        let accepted = self.has_keyboard() || is_global_key(stroke);
        if !accepted {
            return;
        }
        self.repeat.press(stroke);
        self.apply_stroke(stroke);
    }

    pub fn key_up(&mut self, key: Key) {
        self.repeat.release(key);
    }

    fn apply_stroke(&mut self, stroke: KeyStroke) {
        let shift = stroke.modifiers.shift;
        if stroke.modifiers.ctrl {
            match stroke.key {
                Key::Char('a') | Key::Char('A') => {
                    self.selection.select_all(self.input.len());
                    self.input.move_end();
                }
                Key::Char('c') | Key::Char('C') => self.copy_selection(),
                Key::Char('x') | Key::Char('X') => {
                    if self.selection.input_text(&self.input).is_some() {
                        self.copy_selection();
                        self.delete_input_selection();
                    }
                }
                Key::Char('v') | Key::Char('V') => self.paste(),
                _ => {}
            }
            return;
        }

        match stroke.key {
            Key::Enter => self.submit(),
            Key::Escape => self.selection.clear(),
            Key::Up => {
                if let Some(text) = self.history.previous(&self.input.text()) {
                    self.set_input_text(&text);
                }
            }
            Key::Down => {
                if let Some(text) = self.history.next() {
                    self.set_input_text(&text);
                }
            }
            Key::PageUp => self.scrollback.scroll_by(-self.scroll_area.height),
            Key::PageDown => self.scrollback.scroll_by(self.scroll_area.height),
            Key::Left | Key::Right | Key::Home | Key::End if shift => self.extend_input_selection(stroke.key),
            Key::Left => {
                self.collapse_input_selection();
                self.input.move_left();
            }
            Key::Right => {
                self.collapse_input_selection();
                self.input.move_right();
            }
            Key::Home => {
                self.collapse_input_selection();
                self.input.move_home();
            }
            Key::End => {
                self.collapse_input_selection();
                self.input.move_end();
            }
            Key::Backspace => {
                if !self.delete_input_selection() {
                    self.input.backspace();
                }
            }
            Key::Delete => {
                if !self.delete_input_selection() {
                    self.input.delete();
                }
            }
            Key::Char(ch) if !ch.is_control() => {
                self.delete_input_selection();
                self.input.insert_char(ch);
            }
            Key::Char(_) | Key::Tab => {}
        }
    }

    fn extend_input_selection(&mut self, key: Key) {
        let (cursor, len) = (self.input.cursor(), self.input.len());
        let caret = match key {
            Key::Left => self.selection.extend_by(-1, cursor, len),
            Key::Right => self.selection.extend_by(1, cursor, len),
            Key::Home => self.selection.extend_to_start(cursor),
            _ => self.selection.extend_to_end(cursor, len),
        };
        self.input.set_cursor(caret);
    }

    fn collapse_input_selection(&mut self) {
        if self.selection.input().is_some() {
            self.selection.clear();
        }
    }

    /// Remove the selected part of the input line; false if nothing was
    /// selected.
    fn delete_input_selection(&mut self) -> bool {
        let Some(sel) = self.selection.input() else {
            return false;
        };
        self.selection.clear();
        if sel.is_empty() {
            return false;
        }
        self.input.delete_range(sel.range());
        true
    }

    fn set_input_text(&mut self, text: &str) {
        self.collapse_input_selection();
        self.input.set_text(text);
    }

    // ---- clipboard --------------------------------------------------------

    fn copy_selection(&mut self) {
        let Some(text) = self.selection.selected_text(&self.input, &self.scrollback) else {
            return;
        };
        match self.clipboard.copy(&text) {
            Ok(()) => {
                let (x, y) = self.selection_anchor();
                self.toast = Some(CopyToast::new(
                    COPIED_LABEL,
                    x,
                    y,
                    self.settings.toast_duration,
                    self.settings.toast_fade_start,
                ));
            }
            Err(e) => debug!(error = %e, "Copy failed"),
        }
    }

    fn paste(&mut self) {
        match self.clipboard.paste() {
            Ok(text) => {
                let flat = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
                if flat.is_empty() {
                    return;
                }
                self.delete_input_selection();
                self.input.insert_str(&flat);
            }
            Err(e) => debug!(error = %e, "Paste failed"),
        }
    }

    /// Where the copy acknowledgement appears: just above the start of the
    /// selection, kept inside the console.
    fn selection_anchor(&self) -> (f32, f32) {
        let line_height = self.measure.line_height();
        if let Some(sel) = self.selection.input() {
            let start = sel.range().start;
            let prefix = format!("{}{}", PROMPT, self.input.slice(0..start));
            let x = self.input_area.x + self.measure.width(&prefix);
            let y = (self.input_area.y - line_height).max(self.bounds.y);
            return (x, y);
        }
        if let Some(sel) = self.selection.scrollback() {
            let (first, _) = sel.normalized();
            let prefix = self
                .scrollback
                .line(first.line)
                .map(|l| l.text().chars().take(first.ch).collect::<String>())
                .unwrap_or_default();
            let x = self.scroll_area.x + self.measure.width(&prefix);
            let y = self.scroll_area.y + first.line as f32 * line_height - self.scrollback.scroll_offset()
                - line_height;
            let y = y.clamp(self.scroll_area.y, (self.scroll_area.bottom() - line_height).max(self.scroll_area.y));
            return (x, y);
        }
        (self.input_area.x, self.input_area.y)
    }

    // ---- pointer ----------------------------------------------------------

    /// Button press. `now` feeds double-click detection.
    pub fn mouse_down(&mut self, host: &dyn WindowHost, point: Point, now: Instant) {
        if !self.visible || host.is_resizing() || !host.is_topmost_under_pointer(point) {
            return;
        }
        self.sync_selection();

        if self.input_area.contains(point) {
            self.focus = FocusState::Focused;
            let kind = self.clicks.register(point.x, point.y, now);
            self.click_input(point, kind);
        } else if self.scroll_area.contains(point) {
            let kind = self.clicks.register(point.x, point.y, now);
            self.click_scrollback(point, kind);
        } else {
            self.clicks.reset();
            if !self.bounds.contains(point) {
                self.clear_focus();
            }
        }
    }

    fn click_input(&mut self, point: Point, kind: ClickKind) {
        let text = self.input.text();
        let x = point.x - self.input_area.x - self.measure.width(PROMPT);
        match kind {
            ClickKind::Single => {
                self.collapse_input_selection();
                let index = char_index_at(&text, x, self.measure.as_ref());
                self.input.set_cursor(index);
            }
            ClickKind::Double => {
                let bounds = word_bounds(&text, char_at(&text, x, self.measure.as_ref()));
                if bounds.is_empty() {
                    return;
                }
                self.selection.start_at(bounds.start);
                let caret = self
                    .selection
                    .extend_by(bounds.len() as isize, bounds.start, self.input.len());
                self.input.set_cursor(caret);
            }
        }
    }

    fn click_scrollback(&mut self, point: Point, kind: ClickKind) {
        let resume_focused = self.has_keyboard();
        let Some((pos, text)) = self.hit_test(point) else {
            self.selection.clear();
            return;
        };
        match kind {
            ClickKind::Double => {
                let x = point.x - self.scroll_area.x;
                let ch = char_at(&text, x, self.measure.as_ref());
                self.selection.select_word_at(TextPos::new(pos.line, ch), &text);
            }
            ClickKind::Single => {
                self.selection.begin_drag(pos);
                self.focus = FocusState::Selecting { resume_focused };
            }
        }
    }

    /// Map a point to a scrollback position. Points above the first line
    /// snap to its start, points below the last line snap to its end.
    fn hit_test(&self, point: Point) -> Option<(TextPos, String)> {
        let len = self.scrollback.len();
        if len == 0 {
            return None;
        }
        let line_height = self.measure.line_height();
        let content_y = point.y - self.scroll_area.y + self.scrollback.scroll_offset();
        if content_y < 0.0 {
            let text = self.scrollback.line(0)?.text().to_string();
            return Some((TextPos::new(0, 0), text));
        }
        let line = (content_y / line_height).floor() as usize;
        if line >= len {
            let text = self.scrollback.line(len - 1)?.text().to_string();
            let end = text.chars().count();
            return Some((TextPos::new(len - 1, end), text));
        }
        let text = self.scrollback.line(line)?.text().to_string();
        let ch = char_index_at(&text, point.x - self.scroll_area.x, self.measure.as_ref());
        Some((TextPos::new(line, ch), text))
    }

    /// Pointer moved with the button held.
    pub fn mouse_drag(&mut self, point: Point) {
        if !self.selection.is_dragging() {
            return;
        }
        self.sync_selection();
        if !self.selection.is_dragging() {
            // The selection was evicted or reset under the pointer.
            self.resume_focus();
            return;
        }

        let line_height = self.measure.line_height();
        if point.y < self.scroll_area.y {
            self.scrollback.scroll_by(-line_height);
        } else if point.y >= self.scroll_area.bottom() {
            self.scrollback.scroll_by(line_height);
        }
        if let Some((pos, _)) = self.hit_test(point) {
            self.selection.update_drag(pos);
        }
    }

    /// Button released: finish any drag and return to the previous focus.
    pub fn mouse_up(&mut self, _point: Point) {
        if self.selection.is_dragging() {
            self.selection.end_drag();
        }
        self.resume_focus();
    }

    fn resume_focus(&mut self) {
        if let FocusState::Selecting { resume_focused } = self.focus {
            self.focus = if resume_focused {
                FocusState::Focused
            } else {
                FocusState::Idle
            };
        }
    }

    /// Wheel over the console; positive `notches` scroll towards older output.
    pub fn scroll_wheel(&mut self, point: Point, notches: f32) {
        if !self.visible || !self.bounds.contains(point) {
            return;
        }
        self.scrollback
            .scroll_by(-notches * WHEEL_LINES * self.measure.line_height());
    }

    // ---- commands ---------------------------------------------------------

    /// Replace the input line with `line` and submit it, as if typed.
    pub fn submit_line(&mut self, line: &str) {
        self.set_input_text(line);
        self.submit();
    }

    fn submit(&mut self) {
        let command = self.input.text().trim().to_string();
        self.input.clear();
        self.collapse_input_selection();
        self.scrollback.scroll_to_bottom();

        if command.is_empty() {
            self.scrollback.append("", LineTag::Output, true);
            return;
        }

        self.history.submit(&command);
        self.scrollback
            .append(&format!("{}{}", PROMPT, command), LineTag::Echo, true);

        if self.sandbox.is_blocked(&command) {
            info!(command = %command, "Directory change refused");
            self.scrollback.append(
                &format!(
                    "Directory changes outside {} are not allowed.",
                    self.sandbox.root().display()
                ),
                LineTag::Warning,
                true,
            );
            return;
        }

        match command.to_lowercase().as_str() {
            "exit" | "quit" => self.close(),
            "clear" => {
                self.scrollback.clear();
                self.selection.clear();
            }
            "help" => self.print_help(),
            _ => self.forward(&command),
        }
    }

    fn forward(&mut self, command: &str) {
        if !self.process.is_running() {
            self.scrollback.append(
                "Shell is not running. Restarting...",
                LineTag::Warning,
                true,
            );
            if !self.start_shell() {
                return;
            }
        }

        match self.process.send(command) {
            Ok(()) => {}
            Err(ProcessError::PipeClosed { restarted: true, .. }) => self.scrollback.append(
                "Shell input was closed. The shell was restarted; run the command again.",
                LineTag::Warning,
                true,
            ),
            Err(e @ ProcessError::PipeClosed { restarted: false, .. }) => {
                self.scrollback.append(&e.to_string(), LineTag::Failure, true);
            }
            Err(e) => {
                warn!(error = %e, "Command not delivered");
                self.scrollback.append(&e.to_string(), LineTag::Failure, true);
            }
        }
    }

    fn print_help(&self) {
        self.scrollback
            .append(&help_text(self.sandbox.root()), LineTag::Info, true);
    }

    /// `exit`/`quit`: hide and tell the host to drop the console's icon.
    fn close(&mut self) {
        info!("Console closed by command");
        self.notify_visibility_changed(false);
        self.events.push(HostEvent::Closed);
    }
}

impl std::fmt::Debug for ConsoleSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleSession")
            .field("root", &self.settings.root)
            .field("focus", &self.focus)
            .field("visible", &self.visible)
            .field("running", &self.process.is_running())
            .field("scrollback", &self.scrollback)
            .finish()
    }
}

/// Keys handled even without input focus.
fn is_global_key(stroke: KeyStroke) -> bool {
    match stroke.key {
        Key::PageUp | Key::PageDown | Key::Escape => !stroke.modifiers.ctrl,
        Key::Char('c') | Key::Char('C') => stroke.modifiers.ctrl,
        _ => false,
    }
}

/// The fixed block printed by `help`.
pub fn help_text(root: &Path) -> String {
    [
        "Available commands:".to_string(),
        "  help        Show this help message".to_string(),
        "  clear       Clear the console output".to_string(),
        "  exit, quit  Close the console".to_string(),
        "Any other input is passed to the shell.".to_string(),
        format!("Directory changes are restricted to {}.", root.display()),
    ]
    .join("\n")
}
