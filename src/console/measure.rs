//! Text measurement used for wrapping and pointer hit-testing.
//!
//! The console never renders glyphs itself. Whoever hosts it supplies a
//! [`TextMeasure`] that reports how wide a string is in the host's units
//! (pixels for a graphical window, cells for a terminal) and how tall one
//! line is.

use unicode_width::UnicodeWidthStr;

/// Width/height oracle provided by the rendering collaborator.
pub trait TextMeasure: Send + Sync {
    /// Rendered width of `text`.
    fn width(&self, text: &str) -> f32;

    /// Height of a single display line.
    fn line_height(&self) -> f32;
}

/// Terminal-cell measurement: one unit per display column, one unit per row.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn width(&self, text: &str) -> f32 {
        UnicodeWidthStr::width(text) as f32
    }

    fn line_height(&self) -> f32 {
        1.0
    }
}

/// Monospace measurement with a fixed advance per character.
///
/// Handy for hosts that render with a fixed-pitch font of known size.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance {
    pub advance: f32,
    pub line_height: f32,
}

impl FixedAdvance {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl TextMeasure for FixedAdvance {
    fn width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Map a horizontal offset inside `text` to the nearest character boundary.
///
/// Returns a char index in `0..=len`. Offsets left of the text give 0, offsets
/// past its end give `len`.
pub fn char_index_at(text: &str, x: f32, measure: &dyn TextMeasure) -> usize {
    if x <= 0.0 {
        return 0;
    }
    let mut prev_width = 0.0;
    for (i, (byte_idx, ch)) in text.char_indices().enumerate() {
        let next_width = measure.width(&text[..byte_idx + ch.len_utf8()]);
        if x < next_width {
            let midpoint = (prev_width + next_width) / 2.0;
            return if x < midpoint { i } else { i + 1 };
        }
        prev_width = next_width;
    }
    text.chars().count()
}

/// Index of the character drawn under horizontal offset `x`.
///
/// Unlike [`char_index_at`] this picks the glyph, not the nearest caret
/// boundary. Offsets past the end give `len`.
pub fn char_at(text: &str, x: f32, measure: &dyn TextMeasure) -> usize {
    if x < 0.0 {
        return 0;
    }
    for (i, (byte_idx, ch)) in text.char_indices().enumerate() {
        if x < measure.width(&text[..byte_idx + ch.len_utf8()]) {
            return i;
        }
    }
    text.chars().count()
}

/// Byte offset of the `char_idx`-th character (or `text.len()` past the end).
pub fn byte_offset(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}
