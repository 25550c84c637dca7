//! Terminal rendering tests
//!
//! Renders console views into a ratatui test backend and inspects the cells.

use std::sync::Arc;
use std::time::Duration;

use deskcon::console::host::Rect;
use deskcon::console::scrollback::ScrollMetrics;
use deskcon::console::view::{ConsoleView, InputView, ToastView, ViewLine};
use deskcon::console::{CellMeasure, ConsoleSession, LineTag, SessionSettings};
use deskcon::tui::host::TerminalHost;
use deskcon::tui::theme::Theme;
use deskcon::tui::ui::render_console;
use ratatui::{backend::TestBackend, Terminal};
use tempfile::TempDir;

use crate::helpers::MemoryClipboard;

/// Render `view` and return one string per terminal row.
fn render_rows(view: &ConsoleView, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| render_console(frame, view, &Theme::default()))
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol()).collect())
        .collect()
}

fn empty_view() -> ConsoleView {
    ConsoleView {
        scroll_area: Rect::new(1.0, 1.0, 38.0, 5.0),
        input_area: Rect::new(1.0, 6.0, 38.0, 1.0),
        lines: Vec::new(),
        input: InputView {
            prompt: "> ".to_string(),
            text: String::new(),
            cursor: 0,
            selection: None,
            focused: false,
        },
        toast: None,
        scroll: ScrollMetrics {
            offset: 0.0,
            content_height: 0.0,
            viewport_height: 5.0,
            following: true,
        },
    }
}

#[test]
fn session_view_renders_inside_the_border() {
    let temp = TempDir::new().unwrap();
    let settings = SessionSettings {
        root: temp.path().to_path_buf(),
        ..SessionSettings::default()
    };
    let mut session = ConsoleSession::new(
        settings,
        Arc::new(CellMeasure),
        Box::new(MemoryClipboard::default()),
    );
    let host = TerminalHost::new(40, 8);
    session.update(&host, Duration::from_millis(33));
    session
        .scrollback()
        .append("first output", LineTag::Output, false);
    session.scrollback().append("second", LineTag::Error, false);

    let rows = render_rows(&session.draw(), 40, 8);
    assert!(rows[0].contains("deskcon"));
    assert!(rows[1].starts_with("│first output"));
    assert!(rows[2].starts_with("│second"));
    assert!(rows[6].starts_with("│> "));
    assert!(rows[7].contains("Ctrl+Q"));
}

#[test]
fn typed_input_follows_the_prompt() {
    let mut view = empty_view();
    view.input.text = "ls -la".to_string();
    view.input.cursor = 6;

    let rows = render_rows(&view, 40, 8);
    assert!(rows[6].starts_with("│> ls -la"));
}

#[test]
fn toast_is_drawn_at_its_position() {
    let mut view = empty_view();
    view.lines.push(ViewLine {
        text: "some output here".to_string(),
        tag: LineTag::Output,
        y: 3.0,
        selection: Some(0..4),
    });
    view.toast = Some(ToastView {
        text: "Copied".to_string(),
        x: 20.0,
        y: 2.0,
        opacity: 1.0,
    });

    let rows = render_rows(&view, 40, 8);
    assert!(rows[2].contains(" Copied "));
    assert!(rows[3].starts_with("│some output here"));
}

#[test]
fn lines_outside_the_scroll_area_are_skipped() {
    let mut view = empty_view();
    view.lines.push(ViewLine {
        text: "hidden".to_string(),
        tag: LineTag::Output,
        y: 6.0,
        selection: None,
    });

    let rows = render_rows(&view, 40, 8);
    assert!(rows.iter().all(|row| !row.contains("hidden")));
}
