//! Text selection over the input line or the scrollback.
//!
//! Only one kind of selection exists at a time: starting an input selection
//! drops a scrollback selection and vice versa.

use std::ops::Range;
use std::time::{Duration, Instant};

use super::input::InputLine;
use super::measure::byte_offset;
use super::scrollback::ScrollbackBuffer;

/// Default maximum delay between the clicks of a double-click.
pub const DEFAULT_DOUBLE_CLICK_INTERVAL: Duration = Duration::from_millis(400);

/// Default maximum pointer travel between the clicks of a double-click.
pub const DEFAULT_DOUBLE_CLICK_RADIUS: f32 = 4.0;

/// A position in the scrollback: display line index and char index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextPos {
    pub line: usize,
    pub ch: usize,
}

impl TextPos {
    pub fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

/// Characters that belong to a word for double-click selection.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.')
}

/// Char range of the word around `ch` in `text`.
///
/// Falls back to exactly one character when `ch` is not on a word
/// character. Returns an empty range for positions past the end.
pub fn word_bounds(text: &str, ch: usize) -> Range<usize> {
    let chars: Vec<char> = text.chars().collect();
    if ch >= chars.len() {
        return chars.len()..chars.len();
    }
    if !is_word_char(chars[ch]) {
        return ch..ch + 1;
    }
    let mut start = ch;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = ch + 1;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }
    start..end
}

/// Selection inside the command being typed.
///
/// `anchor` stays put while `head` follows the extension keys, so the
/// selection can grow in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputSelection {
    pub anchor: usize,
    pub head: usize,
}

impl InputSelection {
    /// Normalized half-open char range.
    pub fn range(&self) -> Range<usize> {
        self.anchor.min(self.head)..self.anchor.max(self.head)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// Selection over scrollback lines, recorded in drag order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollbackSelection {
    pub start: TextPos,
    pub end: TextPos,
}

impl ScrollbackSelection {
    /// Dragged upwards or leftwards.
    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }

    /// `(first, last)` in buffer order; `last.ch` is exclusive.
    pub fn normalized(&self) -> (TextPos, TextPos) {
        if self.is_reversed() {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Char range of `line` covered by the selection, if any.
    pub fn span_on_line(&self, line: usize, line_len: usize) -> Option<Range<usize>> {
        let (first, last) = self.normalized();
        if line < first.line || line > last.line {
            return None;
        }
        let start = if line == first.line { first.ch } else { 0 };
        let end = if line == last.line { last.ch } else { line_len };
        let (start, end) = (start.min(line_len), end.min(line_len));
        (start < end).then_some(start..end)
    }

    /// Extract the selected text from `lines`, where `lines[0]` is the first
    /// selected line in buffer order.
    pub fn extract(&self, lines: &[String]) -> String {
        let (first, last) = self.normalized();
        let count = last.line - first.line + 1;
        let mut out = Vec::with_capacity(count);
        for (offset, text) in lines.iter().take(count).enumerate() {
            let line_len = text.chars().count();
            let start = if offset == 0 { first.ch.min(line_len) } else { 0 };
            let end = if offset + 1 == count {
                last.ch.min(line_len)
            } else {
                line_len
            };
            let start = start.min(end);
            out.push(&text[byte_offset(text, start)..byte_offset(text, end)]);
        }
        out.join("\n")
    }

    /// Move the selection after `evicted` lines were dropped from the front.
    ///
    /// Returns `None` when any part of the selection was evicted.
    pub fn shifted_up(&self, evicted: usize) -> Option<Self> {
        let (first, _) = self.normalized();
        if first.line < evicted {
            return None;
        }
        Some(Self {
            start: TextPos::new(self.start.line - evicted, self.start.ch),
            end: TextPos::new(self.end.line - evicted, self.end.ch),
        })
    }
}

/// Which selection, if any, is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Input(InputSelection),
    Scrollback(ScrollbackSelection),
}

/// Owner of the active selection and the drag state.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    active: Selection,
    dragging: bool,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Selection {
        self.active
    }

    pub fn clear(&mut self) {
        self.active = Selection::None;
        self.dragging = false;
    }

    pub fn has_selection(&self) -> bool {
        match self.active {
            Selection::None => false,
            Selection::Input(sel) => !sel.is_empty(),
            Selection::Scrollback(sel) => !sel.is_empty(),
        }
    }

    // ---- input line -------------------------------------------------------

    pub fn input(&self) -> Option<InputSelection> {
        match self.active {
            Selection::Input(sel) => Some(sel),
            _ => None,
        }
    }

    /// Anchor a new, empty input selection at `char_index`.
    pub fn start_at(&mut self, char_index: usize) {
        self.dragging = false;
        self.active = Selection::Input(InputSelection {
            anchor: char_index,
            head: char_index,
        });
    }

    fn input_or_anchor(&mut self, cursor: usize) -> InputSelection {
        match self.active {
            Selection::Input(sel) => sel,
            _ => {
                self.start_at(cursor);
                InputSelection {
                    anchor: cursor,
                    head: cursor,
                }
            }
        }
    }

    /// Move the selection head by `delta` chars; returns the new caret.
    pub fn extend_by(&mut self, delta: isize, cursor: usize, len: usize) -> usize {
        let mut sel = self.input_or_anchor(cursor);
        sel.head = sel.head.saturating_add_signed(delta).min(len);
        self.active = Selection::Input(sel);
        sel.head
    }

    /// Extend to the beginning of the line; returns the new caret.
    pub fn extend_to_start(&mut self, cursor: usize) -> usize {
        let mut sel = self.input_or_anchor(cursor);
        sel.head = 0;
        self.active = Selection::Input(sel);
        0
    }

    /// Extend to the end of the line; returns the new caret.
    pub fn extend_to_end(&mut self, cursor: usize, len: usize) -> usize {
        let mut sel = self.input_or_anchor(cursor);
        sel.head = len;
        self.active = Selection::Input(sel);
        len
    }

    /// Select the whole input line.
    pub fn select_all(&mut self, len: usize) {
        self.dragging = false;
        self.active = Selection::Input(InputSelection { anchor: 0, head: len });
    }

    /// Selected part of the input line.
    pub fn input_text(&self, input: &InputLine) -> Option<String> {
        let sel = self.input()?;
        (!sel.is_empty()).then(|| input.slice(sel.range()))
    }

    // ---- scrollback -------------------------------------------------------

    pub fn scrollback(&self) -> Option<ScrollbackSelection> {
        match self.active {
            Selection::Scrollback(sel) => Some(sel),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn begin_drag(&mut self, pos: TextPos) {
        self.active = Selection::Scrollback(ScrollbackSelection {
            start: pos,
            end: pos,
        });
        self.dragging = true;
    }

    pub fn update_drag(&mut self, pos: TextPos) {
        if !self.dragging {
            return;
        }
        if let Selection::Scrollback(sel) = &mut self.active {
            sel.end = pos;
        }
    }

    /// Finish dragging; a zero-length drag leaves no selection.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        if let Selection::Scrollback(sel) = self.active {
            if sel.is_empty() {
                self.active = Selection::None;
            }
        }
    }

    /// Select the word under `pos` in `line_text`.
    pub fn select_word_at(&mut self, pos: TextPos, line_text: &str) {
        self.dragging = false;
        let bounds = word_bounds(line_text, pos.ch);
        if bounds.is_empty() {
            self.active = Selection::None;
            return;
        }
        self.active = Selection::Scrollback(ScrollbackSelection {
            start: TextPos::new(pos.line, bounds.start),
            end: TextPos::new(pos.line, bounds.end),
        });
    }

    /// Selected scrollback text, joined with line breaks.
    pub fn scrollback_text(&self, buffer: &ScrollbackBuffer) -> Option<String> {
        let sel = self.scrollback()?;
        if sel.is_empty() {
            return None;
        }
        let (first, last) = sel.normalized();
        let lines = buffer.texts(first.line..last.line + 1);
        if lines.is_empty() {
            return None;
        }
        Some(sel.extract(&lines))
    }

    /// Whatever is selected, from either source.
    pub fn selected_text(&self, input: &InputLine, buffer: &ScrollbackBuffer) -> Option<String> {
        match self.active {
            Selection::None => None,
            Selection::Input(_) => self.input_text(input),
            Selection::Scrollback(_) => self.scrollback_text(buffer),
        }
    }

    /// Keep a scrollback selection attached to its text after eviction.
    pub fn on_evicted(&mut self, evicted: usize) {
        if evicted == 0 {
            return;
        }
        if let Selection::Scrollback(sel) = self.active {
            match sel.shifted_up(evicted) {
                Some(moved) => self.active = Selection::Scrollback(moved),
                None => self.clear(),
            }
        }
    }

    /// Drop a scrollback selection whose line indices are no longer valid.
    pub fn on_layout_reset(&mut self) {
        if matches!(self.active, Selection::Scrollback(_)) {
            self.clear();
        }
    }
}

/// Kind of click recognised by [`ClickTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    Single,
    Double,
}

/// Distinguishes double-clicks from two separate single clicks.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    interval: Duration,
    radius: f32,
    last: Option<(Instant, f32, f32)>,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_CLICK_INTERVAL, DEFAULT_DOUBLE_CLICK_RADIUS)
    }
}

impl ClickTracker {
    pub fn new(interval: Duration, radius: f32) -> Self {
        Self {
            interval,
            radius,
            last: None,
        }
    }

    /// Classify a click at `(x, y)` happening at `now`.
    ///
    /// A double-click consumes both clicks, so a third quick click starts
    /// over as a single click.
    pub fn register(&mut self, x: f32, y: f32, now: Instant) -> ClickKind {
        if let Some((at, lx, ly)) = self.last {
            let close = (x - lx).hypot(y - ly) <= self.radius;
            let quick = now.saturating_duration_since(at) <= self.interval;
            if close && quick {
                self.last = None;
                return ClickKind::Double;
            }
        }
        self.last = Some((now, x, y));
        ClickKind::Single
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
