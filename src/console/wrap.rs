//! Greedy word wrapping against a measured width budget.
//!
//! Words are packed onto a line while `measure(line + " " + word)` still fits.
//! A word that cannot fit on a line of its own is hard-split into the widest
//! prefixes that fit, never fewer than one character per fragment, so the
//! loop always makes progress.

use super::measure::TextMeasure;

/// Wrap `text` into display lines no wider than `max_width`.
///
/// Always returns at least one line (`[""]` for empty or blank input). Text
/// that already fits is returned untouched, preserving its spacing.
pub fn wrap(text: &str, max_width: f32, measure: &dyn TextMeasure) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![String::new()];
    }
    if max_width <= 0.0 || measure.width(text) <= max_width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            place_word(word, max_width, measure, &mut lines, &mut current);
            continue;
        }

        let candidate = format!("{} {}", current, word);
        if measure.width(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            place_word(word, max_width, measure, &mut lines, &mut current);
        }
    }

    lines.push(current);
    lines
}

/// Start a fresh line with `word`, hard-splitting it when it is too wide.
///
/// Every fragment except the last is flushed to `lines`; the last one becomes
/// the new current line so following words can still join it.
fn place_word(
    word: &str,
    max_width: f32,
    measure: &dyn TextMeasure,
    lines: &mut Vec<String>,
    current: &mut String,
) {
    if measure.width(word) <= max_width {
        current.push_str(word);
        return;
    }

    let mut fragments = split_long_word(word, max_width, measure);
    if let Some(last) = fragments.pop() {
        lines.extend(fragments);
        *current = last;
    }
}

/// Split an unbreakable token into the widest fitting prefixes.
pub fn split_long_word(word: &str, max_width: f32, measure: &dyn TextMeasure) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut rest = word;

    while !rest.is_empty() {
        let mut cut = 0;
        for (idx, ch) in rest.char_indices() {
            let end = idx + ch.len_utf8();
            if measure.width(&rest[..end]) > max_width {
                break;
            }
            cut = end;
        }
        if cut == 0 {
            // Even one character is too wide; take it anyway.
            cut = rest.chars().next().map(char::len_utf8).unwrap_or(rest.len());
        }
        fragments.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }

    fragments
}

/// Byte offset into `source` at which each fragment of `wrap(source, ..)`
/// starts.
///
/// Fragments are matched against the source with whitespace runs treated as
/// a single break, so collapsed spacing between packed words still lines up.
pub fn fragment_offsets(source: &str, fragments: &[String]) -> Vec<usize> {
    let skip_space = |from: usize| {
        source[from..]
            .find(|c: char| !c.is_whitespace())
            .map_or(source.len(), |i| from + i)
    };

    let mut offsets = Vec::with_capacity(fragments.len());
    let mut cursor = 0;
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 || !fragment.starts_with(char::is_whitespace) {
            cursor = skip_space(cursor);
        }
        offsets.push(if i == 0 { 0 } else { cursor });
        for ch in fragment.chars() {
            if ch.is_whitespace() {
                cursor = skip_space(cursor);
            } else if let Some(next) = source[cursor..].chars().next() {
                cursor += next.len_utf8();
            }
        }
    }
    offsets
}
