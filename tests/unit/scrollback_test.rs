//! Unit tests for the scrollback buffer

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use deskcon::console::scrollback::visible_range;
use deskcon::console::{LineTag, ScrollbackBuffer, TextMeasure};

use crate::helpers::{buffer, chars, small_buffer, texts};

#[test]
fn append_splits_on_newlines() {
    let buf = buffer(80.0, 10.0);
    buf.append("one\ntwo\r\nthree", LineTag::Output, false);
    assert_eq!(texts(&buf), vec!["one", "two", "three"]);
}

#[test]
fn append_wraps_against_current_width() {
    let buf = buffer(10.0, 10.0);
    buf.append("the quick brown fox", LineTag::Output, false);
    assert_eq!(texts(&buf), vec!["the quick", "brown fox"]);
    assert_eq!(buf.line(1).unwrap().source(), "the quick brown fox");
}

#[test]
fn no_wrap_lines_keep_their_length() {
    let buf = buffer(10.0, 10.0);
    buf.append("the quick brown fox", LineTag::Info, true);
    assert_eq!(texts(&buf), vec!["the quick brown fox"]);
    assert!(buf.line(0).unwrap().is_no_wrap());
}

#[test]
fn blank_lines_are_stored_as_no_wrap() {
    let buf = buffer(10.0, 10.0);
    buf.append("a\n\nb", LineTag::Output, false);
    let line = buf.line(1).unwrap();
    assert_eq!(line.text(), "");
    assert!(line.is_no_wrap());
}

#[test]
fn tags_are_kept_per_line() {
    let buf = buffer(80.0, 10.0);
    buf.append("out", LineTag::Output, false);
    buf.append("err", LineTag::Error, false);
    assert_eq!(buf.line(0).unwrap().tag(), LineTag::Output);
    assert_eq!(buf.line(1).unwrap().tag(), LineTag::Error);
}

#[test]
fn rewrap_restores_original_lines_when_widening() {
    let buf = buffer(10.0, 10.0);
    buf.append("the quick brown fox", LineTag::Output, false);
    buf.append("jumps over", LineTag::Output, false);
    assert_eq!(buf.len(), 3);

    buf.rewrap_all(40.0);
    assert_eq!(texts(&buf), vec!["the quick brown fox", "jumps over"]);

    buf.rewrap_all(5.0);
    assert_eq!(
        texts(&buf),
        vec!["the", "quick", "brown", "fox", "jumps", "over"]
    );
}

#[test]
fn rewrap_leaves_no_wrap_lines_alone() {
    let buf = buffer(40.0, 10.0);
    buf.append("> some long echoed command", LineTag::Echo, true);
    buf.rewrap_all(8.0);
    assert_eq!(texts(&buf), vec!["> some long echoed command"]);
}

#[test]
fn set_viewport_only_rewraps_on_width_change() {
    let buf = buffer(10.0, 10.0);
    assert!(!buf.set_viewport(10.2, 20.0, false));
    assert!(buf.set_viewport(10.0, 20.0, true));
    assert!(buf.set_viewport(20.0, 20.0, false));
    assert_eq!(buf.wrap_width(), 20.0);
}

#[test]
fn rewrap_bumps_layout_epoch() {
    let buf = buffer(10.0, 10.0);
    let before = buf.layout_epoch();
    buf.rewrap_all(20.0);
    assert!(buf.layout_epoch() > before);
}

#[test]
fn capacity_is_enforced_in_chunks() {
    let buf = small_buffer(10, 4, 80.0);
    for i in 0..11 {
        buf.append(&format!("line {}", i), LineTag::Output, false);
    }
    assert_eq!(buf.len(), 7);
    assert_eq!(buf.evicted_total(), 4);
    assert_eq!(buf.line(0).unwrap().text(), "line 4");
}

#[test]
fn never_exceeds_capacity_under_bulk_append() {
    let buf = small_buffer(50, 10, 80.0);
    let text: Vec<String> = (0..500).map(|i| format!("row {}", i)).collect();
    buf.append(&text.join("\n"), LineTag::Output, false);
    assert!(buf.len() <= 50);
    assert_eq!(buf.line(buf.len() - 1).unwrap().text(), "row 499");
}

#[test]
fn eviction_inside_a_wrapped_line_does_not_resurrect_text() {
    let buf = small_buffer(3, 2, 2.0);
    buf.append("x", LineTag::Output, false);
    buf.append("aa bb cc", LineTag::Output, false);
    assert_eq!(texts(&buf), vec!["bb", "cc"]);

    buf.rewrap_all(20.0);
    assert_eq!(texts(&buf), vec!["bb cc"]);
}

#[test]
fn eviction_inside_a_split_token_rejoins_without_a_space() {
    let buf = small_buffer(3, 2, 3.0);
    buf.append("x", LineTag::Output, false);
    buf.append("abcdefghi", LineTag::Output, false);
    assert_eq!(texts(&buf), vec!["def", "ghi"]);

    buf.rewrap_all(20.0);
    assert_eq!(texts(&buf), vec!["defghi"]);
}

#[test]
fn eviction_keeps_the_tail_of_mixed_words_and_splits() {
    let buf = small_buffer(3, 2, 4.0);
    buf.append("x", LineTag::Output, false);
    buf.append("aaaa bbbbbbbb", LineTag::Output, false);
    assert_eq!(texts(&buf), vec!["bbbb", "bbbb"]);
    assert_eq!(buf.line(0).unwrap().source(), "bbbbbbbb");

    buf.rewrap_all(20.0);
    assert_eq!(texts(&buf), vec!["bbbbbbbb"]);
}

#[test]
fn rewrap_at_the_same_width_is_idempotent() {
    let buf = buffer(7.0, 10.0);
    buf.append("the quick brown fox", LineTag::Output, false);
    buf.append("> echo hi", LineTag::Echo, true);
    buf.append("", LineTag::Output, false);
    buf.append("supercalifragilistic", LineTag::Error, false);

    buf.rewrap_all(7.0);
    let once = buf.snapshot();
    buf.rewrap_all(7.0);
    assert_eq!(buf.snapshot(), once);
}

#[test]
fn rewrap_rescales_offset_when_scrolled_up() {
    let buf = buffer(10.0, 5.0);
    for _ in 0..20 {
        buf.append("aaaa bbbb", LineTag::Output, false);
    }
    buf.scroll_by(-5.0);
    assert!(!buf.is_following());
    let before = buf.scroll_offset();
    let old_height = buf.metrics().content_height;
    assert_eq!(before, 10.0);

    buf.rewrap_all(5.0);
    let new_height = buf.metrics().content_height;
    assert_eq!(new_height, 40.0);
    assert!((buf.scroll_offset() - before * new_height / old_height).abs() < 0.001);
    assert!(!buf.is_following());
}

/// Char-counting measure that re-wraps its buffer from inside the first
/// measurement it is asked for once armed.
struct ResizeDuringWrap {
    buffer: Mutex<Option<ScrollbackBuffer>>,
    armed: AtomicBool,
    resize_to: f32,
}

impl TextMeasure for ResizeDuringWrap {
    fn width(&self, text: &str) -> f32 {
        if self.armed.swap(false, Ordering::SeqCst) {
            let target = self.buffer.lock().unwrap().clone();
            if let Some(buffer) = target {
                buffer.rewrap_all(self.resize_to);
            }
        }
        text.chars().count() as f32
    }

    fn line_height(&self) -> f32 {
        1.0
    }
}

#[test]
fn append_rewraps_when_width_changes_mid_append() {
    let measure = Arc::new(ResizeDuringWrap {
        buffer: Mutex::new(None),
        armed: AtomicBool::new(false),
        resize_to: 5.0,
    });
    let buf = ScrollbackBuffer::new(Arc::clone(&measure) as Arc<dyn TextMeasure>);
    buf.set_viewport(100.0, 10.0, false);
    *measure.buffer.lock().unwrap() = Some(buf.clone());
    measure.armed.store(true, Ordering::SeqCst);

    buf.append("aaaa bbbb cccc", LineTag::Output, false);

    assert_eq!(buf.wrap_width(), 5.0);
    assert_eq!(texts(&buf), vec!["aaaa", "bbbb", "cccc"]);
}

#[test]
fn follows_new_output_until_user_scrolls_up() {
    let buf = buffer(80.0, 5.0);
    for i in 0..20 {
        buf.append(&format!("{}", i), LineTag::Output, false);
    }
    assert!(buf.is_following());
    assert_eq!(buf.scroll_offset(), 15.0);

    buf.scroll_by(-3.0);
    assert!(!buf.is_following());
    assert_eq!(buf.scroll_offset(), 12.0);

    buf.append("more", LineTag::Output, false);
    assert_eq!(buf.scroll_offset(), 12.0);

    buf.scroll_to_bottom();
    assert!(buf.is_following());
    assert_eq!(buf.scroll_offset(), 16.0);
}

#[test]
fn scrolling_back_to_the_end_resumes_following() {
    let buf = buffer(80.0, 5.0);
    for i in 0..20 {
        buf.append(&format!("{}", i), LineTag::Output, false);
    }
    buf.scroll_by(-5.0);
    buf.scroll_by(100.0);
    assert!(buf.is_following());
}

#[test]
fn scroll_offset_is_clamped() {
    let buf = buffer(80.0, 5.0);
    for i in 0..8 {
        buf.append(&format!("{}", i), LineTag::Output, false);
    }
    buf.scroll_by(-100.0);
    assert_eq!(buf.scroll_offset(), 0.0);
    buf.scroll_by(100.0);
    assert_eq!(buf.scroll_offset(), 3.0);
}

#[test]
fn visible_lines_cover_the_viewport() {
    let buf = buffer(80.0, 5.0);
    for i in 0..20 {
        buf.append(&format!("{}", i), LineTag::Output, false);
    }
    let visible = buf.visible_lines();
    assert_eq!(visible.first_index, 15);
    assert_eq!(visible.top, 0.0);
    let shown: Vec<&str> = visible.lines.iter().map(|l| l.text()).collect();
    assert_eq!(shown, vec!["15", "16", "17", "18", "19"]);
}

#[test]
fn visible_range_handles_partial_lines() {
    assert_eq!(visible_range(0.0, 48.0, 16.0, 10), (0, 3));
    assert_eq!(visible_range(8.0, 48.0, 16.0, 10), (0, 4));
    assert_eq!(visible_range(150.0, 48.0, 16.0, 10), (9, 10));
    assert_eq!(visible_range(0.0, 48.0, 16.0, 0), (0, 0));
    assert_eq!(visible_range(0.0, 48.0, 0.0, 10), (0, 0));
}

#[test]
fn clear_empties_and_resets_scrolling() {
    let buf = buffer(80.0, 5.0);
    for i in 0..20 {
        buf.append(&format!("{}", i), LineTag::Output, false);
    }
    buf.scroll_by(-4.0);
    let epoch = buf.layout_epoch();

    buf.clear();
    assert!(buf.is_empty());
    assert_eq!(buf.scroll_offset(), 0.0);
    assert!(buf.is_following());
    assert!(buf.layout_epoch() > epoch);
}

#[test]
fn metrics_report_content_and_viewport() {
    let buf = buffer(80.0, 5.0);
    for i in 0..8 {
        buf.append(&format!("{}", i), LineTag::Output, false);
    }
    let metrics = buf.metrics();
    assert_eq!(metrics.content_height, 8.0);
    assert_eq!(metrics.viewport_height, 5.0);
    assert_eq!(metrics.offset, 3.0);
    assert!(metrics.following);
}

#[test]
fn texts_clamps_out_of_range_requests() {
    let buf = buffer(80.0, 5.0);
    buf.append("a\nb", LineTag::Output, false);
    assert_eq!(buf.texts(1..10), vec!["b"]);
    assert!(buf.texts(5..9).is_empty());
    assert!(buf.line(9).is_none());
}

#[test]
fn concurrent_appends_are_all_kept() {
    let buf = ScrollbackBuffer::new(chars());
    buf.set_viewport(80.0, 10.0, false);
    let buf = Arc::new(buf);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let buf = Arc::clone(&buf);
            thread::spawn(move || {
                for i in 0..100 {
                    buf.append(&format!("t{} line {}", t, i), LineTag::Output, false);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(buf.len(), 400);
}

#[test]
fn clones_share_the_same_lines() {
    let buf = buffer(80.0, 5.0);
    let other = buf.clone();
    other.append("shared", LineTag::Output, false);
    assert_eq!(texts(&buf), vec!["shared"]);
}
