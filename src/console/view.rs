//! Render model handed to the host's drawing code.

use std::ops::Range;

use super::host::Rect;
use super::scrollback::{LineTag, ScrollMetrics};

/// One visible scrollback row.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewLine {
    pub text: String,
    pub tag: LineTag,
    /// Top edge in host coordinates
    pub y: f32,
    /// Selected char range on this row
    pub selection: Option<Range<usize>>,
}

/// The command line being edited.
#[derive(Debug, Clone, PartialEq)]
pub struct InputView {
    pub prompt: String,
    pub text: String,
    /// Caret position in chars
    pub cursor: usize,
    pub selection: Option<Range<usize>>,
    pub focused: bool,
}

/// Fading copy acknowledgement.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

/// Everything needed to draw one frame of the console.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleView {
    pub scroll_area: Rect,
    pub input_area: Rect,
    pub lines: Vec<ViewLine>,
    pub input: InputView,
    pub toast: Option<ToastView>,
    pub scroll: ScrollMetrics,
}
