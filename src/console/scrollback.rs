//! Thread-safe, line-wrapped scrollback.
//!
//! The buffer is shared between the foreground loop (rendering, user
//! scrolling, command echoes) and the two reader threads of the child
//! process. Every operation takes the single internal mutex for a short
//! critical section; nothing hands out references into the line storage.
//!
//! Each display line remembers the unwrapped source text it came from, so a
//! width change can re-split output from scratch instead of re-joining
//! fragments or guessing which lines were prompts.

use std::collections::VecDeque;
use std::ops::Range;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::measure::TextMeasure;
use super::wrap::{fragment_offsets, wrap};

/// Default maximum number of display lines kept.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Default number of lines dropped from the front once capacity is exceeded.
pub const DEFAULT_EVICT_CHUNK: usize = 100;

/// Classification used for coloring a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineTag {
    /// Child process standard output
    Output,
    /// Child process standard error
    Error,
    /// Echo of a submitted command
    Echo,
    /// Built-in informational text (help, banners)
    Info,
    Success,
    Warning,
    Failure,
}

/// One rendered row of the scrollback.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayLine {
    text: String,
    tag: LineTag,
    no_wrap: bool,
    source: Arc<str>,
    /// Byte offset of this fragment within `source`
    offset: usize,
    origin: u64,
    fragment: usize,
}

impl DisplayLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tag(&self) -> LineTag {
        self.tag
    }

    /// Whether this line is exempt from re-wrapping.
    pub fn is_no_wrap(&self) -> bool {
        self.no_wrap
    }

    /// The unwrapped text this line was cut from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Lines intersecting the viewport, copied out for rendering.
#[derive(Debug, Clone, Default)]
pub struct VisibleLines {
    /// Buffer index of `lines[0]`
    pub first_index: usize,
    /// Vertical position of `lines[0]` relative to the viewport top (<= 0)
    pub top: f32,
    pub lines: Vec<DisplayLine>,
}

/// Scroll position summary for drawing a scrollbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub offset: f32,
    pub content_height: f32,
    pub viewport_height: f32,
    pub following: bool,
}

/// Compute which buffer indices intersect a viewport.
///
/// Returns a half-open `(start, end)` pair clamped to `len`.
pub fn visible_range(
    scroll_offset: f32,
    viewport_height: f32,
    line_height: f32,
    len: usize,
) -> (usize, usize) {
    if line_height <= 0.0 || len == 0 {
        return (0, 0);
    }
    let start = (scroll_offset.max(0.0) / line_height).floor() as usize;
    let end = ((scroll_offset.max(0.0) + viewport_height.max(0.0)) / line_height).ceil() as usize;
    (start.min(len), end.min(len))
}

struct ScrollbackState {
    lines: VecDeque<DisplayLine>,
    capacity: usize,
    evict_chunk: usize,
    line_height: f32,
    wrap_width: f32,
    viewport_height: f32,
    scroll_offset: f32,
    auto_follow: bool,
    next_origin: u64,
    evicted_total: u64,
    layout_epoch: u64,
}

impl ScrollbackState {
    fn content_height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }

    fn max_offset(&self) -> f32 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    fn clamp_offset(&mut self) {
        let max = self.max_offset();
        self.scroll_offset = self.scroll_offset.clamp(0.0, max);
    }

    fn follow_if_pinned(&mut self) {
        if self.auto_follow {
            self.scroll_offset = self.max_offset();
        } else {
            self.clamp_offset();
        }
    }

    fn push_fragments(&mut self, source: Arc<str>, fragments: Vec<String>, tag: LineTag, no_wrap: bool) {
        let origin = self.next_origin;
        self.next_origin += 1;
        let offsets = fragment_offsets(&source, &fragments);
        for (fragment, (text, offset)) in fragments.into_iter().zip(offsets).enumerate() {
            self.lines.push_back(DisplayLine {
                text,
                tag,
                no_wrap,
                source: Arc::clone(&source),
                offset,
                origin,
                fragment,
            });
        }
    }

    /// Drop whole chunks from the front until the buffer fits again.
    fn enforce_capacity(&mut self) {
        let mut evicted = 0;
        while self.lines.len() > self.capacity {
            let n = self.evict_chunk.min(self.lines.len());
            self.lines.drain(..n);
            evicted += n;
        }
        if evicted == 0 {
            return;
        }

        self.evicted_total += evicted as u64;
        self.scroll_offset = (self.scroll_offset - evicted as f32 * self.line_height).max(0.0);
        self.reroot_partial_head();
        debug!(evicted, remaining = self.lines.len(), "Scrollback evicted lines");
    }

    /// If eviction cut a wrapped line in half, make the tail of the source
    /// from the first surviving fragment on its new source, so a later re-wrap
    /// neither resurrects evicted text nor splits a hard-wrapped token.
    fn reroot_partial_head(&mut self) {
        let Some(head) = self.lines.front() else {
            return;
        };
        if head.fragment == 0 {
            return;
        }
        let (origin, cut) = (head.origin, head.offset);
        let tail: Arc<str> = head.source.get(cut..).unwrap_or_default().into();
        for (fragment, line) in self
            .lines
            .iter_mut()
            .take_while(|l| l.origin == origin)
            .enumerate()
        {
            line.offset = line.offset.saturating_sub(cut);
            line.source = Arc::clone(&tail);
            line.fragment = fragment;
        }
    }
}

/// Shared handle to the scrollback. Cloning shares the same buffer.
#[derive(Clone)]
pub struct ScrollbackBuffer {
    state: Arc<Mutex<ScrollbackState>>,
    measure: Arc<dyn TextMeasure>,
}

impl ScrollbackBuffer {
    /// Create an empty buffer with the default capacity policy.
    pub fn new(measure: Arc<dyn TextMeasure>) -> Self {
        Self::with_capacity(measure, DEFAULT_CAPACITY, DEFAULT_EVICT_CHUNK)
    }

    /// Create an empty buffer holding at most `capacity` lines, dropping
    /// `evict_chunk` lines at a time when full.
    pub fn with_capacity(measure: Arc<dyn TextMeasure>, capacity: usize, evict_chunk: usize) -> Self {
        let capacity = capacity.max(1);
        let state = ScrollbackState {
            lines: VecDeque::new(),
            capacity,
            evict_chunk: evict_chunk.clamp(1, capacity),
            line_height: measure.line_height(),
            wrap_width: 0.0,
            viewport_height: 0.0,
            scroll_offset: 0.0,
            auto_follow: true,
            next_origin: 0,
            evicted_total: 0,
            layout_epoch: 0,
        };
        Self {
            state: Arc::new(Mutex::new(state)),
            measure,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ScrollbackState> {
        // A reader thread that panicked mid-append leaves the buffer usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn measure(&self) -> &Arc<dyn TextMeasure> {
        &self.measure
    }

    pub fn line_height(&self) -> f32 {
        self.lock().line_height
    }

    /// Append text, one display line per `\n`-separated segment.
    ///
    /// Unless `no_wrap` is set, each segment is word-wrapped against the
    /// current width. Blank segments are always stored as no-wrap lines.
    pub fn append(&self, text: &str, tag: LineTag, no_wrap: bool) {
        let width = self.lock().wrap_width;

        // Wrap outside the lock; readers may be appending concurrently.
        let mut prepared = self.prepare(text, width, no_wrap);

        let mut state = self.lock();
        if state.wrap_width != width {
            // A resize re-wrapped the buffer while we were wrapping.
            prepared = self.prepare(text, state.wrap_width, no_wrap);
        }
        for (source, fragments, no_wrap) in prepared {
            state.push_fragments(source, fragments, tag, no_wrap);
        }
        state.enforce_capacity();
        state.follow_if_pinned();
    }

    fn prepare(&self, text: &str, width: f32, no_wrap: bool) -> Vec<(Arc<str>, Vec<String>, bool)> {
        text.split('\n')
            .map(|segment| {
                let segment = segment.strip_suffix('\r').unwrap_or(segment);
                let blank = segment.trim().is_empty();
                let fragments = if no_wrap || blank {
                    vec![segment.to_string()]
                } else {
                    wrap(segment, width, self.measure.as_ref())
                };
                (Arc::from(segment), fragments, no_wrap || blank)
            })
            .collect()
    }

    /// Re-split every wrappable line against `new_width`.
    ///
    /// The scroll offset is rescaled by the content-height ratio so the
    /// viewport stays at roughly the same place in the output.
    pub fn rewrap_all(&self, new_width: f32) {
        let mut state = self.lock();
        let old_height = state.content_height();
        let old_len = state.lines.len();
        state.wrap_width = new_width;

        let mut rebuilt = VecDeque::with_capacity(old_len);
        let mut i = 0;
        while i < old_len {
            let line = &state.lines[i];
            if line.no_wrap {
                rebuilt.push_back(line.clone());
                i += 1;
                continue;
            }

            let origin = line.origin;
            let (tag, source) = (line.tag, Arc::clone(&line.source));
            while i < old_len && state.lines[i].origin == origin {
                i += 1;
            }
            let fragments = wrap(&source, new_width, self.measure.as_ref());
            let offsets = fragment_offsets(&source, &fragments);
            for (fragment, (text, offset)) in fragments.into_iter().zip(offsets).enumerate() {
                rebuilt.push_back(DisplayLine {
                    text,
                    tag,
                    no_wrap: false,
                    source: Arc::clone(&source),
                    offset,
                    origin,
                    fragment,
                });
            }
        }

        state.lines = rebuilt;
        state.layout_epoch += 1;
        state.enforce_capacity();

        let new_height = state.content_height();
        if !state.auto_follow && old_height > 0.0 {
            state.scroll_offset *= new_height / old_height;
        }
        state.follow_if_pinned();
        debug!(
            width = new_width,
            before = old_len,
            after = state.lines.len(),
            "Scrollback re-wrapped"
        );
    }

    /// Update the viewport size. Re-wraps when the width changed by at least
    /// half a unit, or when `force_rewrap` is set. Returns whether a re-wrap
    /// happened.
    pub fn set_viewport(&self, width: f32, height: f32, force_rewrap: bool) -> bool {
        let needs_rewrap = {
            let mut state = self.lock();
            state.viewport_height = height.max(0.0);
            state.follow_if_pinned();
            force_rewrap || (state.wrap_width - width).abs() >= 0.5
        };
        if needs_rewrap {
            self.rewrap_all(width);
        }
        needs_rewrap
    }

    pub fn wrap_width(&self) -> f32 {
        self.lock().wrap_width
    }

    /// Remove every line and reset scrolling.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.lines.clear();
        state.scroll_offset = 0.0;
        state.auto_follow = true;
        state.layout_epoch += 1;
    }

    pub fn len(&self) -> usize {
        self.lock().lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity
    }

    /// Copy of a single line.
    pub fn line(&self, index: usize) -> Option<DisplayLine> {
        self.lock().lines.get(index).cloned()
    }

    /// Text of the lines in `range` (clamped to the buffer).
    pub fn texts(&self, range: Range<usize>) -> Vec<String> {
        let state = self.lock();
        let end = range.end.min(state.lines.len());
        let start = range.start.min(end);
        state
            .lines
            .range(start..end)
            .map(|l| l.text.clone())
            .collect()
    }

    /// Copy of every line, oldest first.
    pub fn snapshot(&self) -> Vec<DisplayLine> {
        self.lock().lines.iter().cloned().collect()
    }

    /// Lines currently intersecting the viewport.
    pub fn visible_lines(&self) -> VisibleLines {
        let state = self.lock();
        let (start, end) = visible_range(
            state.scroll_offset,
            state.viewport_height,
            state.line_height,
            state.lines.len(),
        );
        VisibleLines {
            first_index: start,
            top: start as f32 * state.line_height - state.scroll_offset,
            lines: state.lines.range(start..end).cloned().collect(),
        }
    }

    /// Scroll by `delta` units (positive scrolls towards newer output).
    pub fn scroll_by(&self, delta: f32) {
        let mut state = self.lock();
        state.scroll_offset += delta;
        state.clamp_offset();
        state.auto_follow = state.scroll_offset + 0.001 >= state.max_offset();
    }

    /// Jump to the newest line and resume auto-follow.
    pub fn scroll_to_bottom(&self) {
        let mut state = self.lock();
        state.auto_follow = true;
        state.scroll_offset = state.max_offset();
    }

    pub fn scroll_offset(&self) -> f32 {
        self.lock().scroll_offset
    }

    pub fn is_following(&self) -> bool {
        self.lock().auto_follow
    }

    pub fn metrics(&self) -> ScrollMetrics {
        let state = self.lock();
        ScrollMetrics {
            offset: state.scroll_offset,
            content_height: state.content_height(),
            viewport_height: state.viewport_height,
            following: state.auto_follow,
        }
    }

    /// Total number of lines ever evicted from the front.
    pub fn evicted_total(&self) -> u64 {
        self.lock().evicted_total
    }

    /// Bumped whenever line indices are invalidated wholesale (re-wrap, clear).
    pub fn layout_epoch(&self) -> u64 {
        self.lock().layout_epoch
    }
}

impl std::fmt::Debug for ScrollbackBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("ScrollbackBuffer")
            .field("lines", &state.lines.len())
            .field("capacity", &state.capacity)
            .field("scroll_offset", &state.scroll_offset)
            .field("auto_follow", &state.auto_follow)
            .finish()
    }
}
