//! Integration tests for the clipboard module.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use deskcon::clipboard::tool::{ClipboardTool, ToolError};
use deskcon::clipboard::{Clipboard, ClipboardError, SystemClipboard};

/// Scripted tool recording whether it was asked to copy.
struct MockTool {
    name: &'static str,
    available: bool,
    copy_result: Result<(), ToolError>,
    paste_result: Result<String, ToolError>,
    copy_called: Arc<AtomicBool>,
}

impl MockTool {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            available: true,
            copy_result: Ok(()),
            paste_result: Ok(String::new()),
            copy_called: Arc::new(AtomicBool::new(false)),
        }
    }

    fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    fn copy_result(mut self, result: Result<(), ToolError>) -> Self {
        self.copy_result = result;
        self
    }

    fn paste_result(mut self, result: Result<String, ToolError>) -> Self {
        self.paste_result = result;
        self
    }

    fn copy_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.copy_called)
    }
}

impl ClipboardTool for MockTool {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn copy_text(&self, _text: &str) -> Result<(), ToolError> {
        self.copy_called.store(true, Ordering::SeqCst);
        self.copy_result.clone()
    }

    fn paste_text(&self) -> Result<String, ToolError> {
        self.paste_result.clone()
    }
}

fn clipboard(tools: Vec<MockTool>) -> SystemClipboard {
    SystemClipboard::with_tools(
        tools
            .into_iter()
            .map(|t| Box::new(t) as Box<dyn ClipboardTool>)
            .collect(),
    )
}

#[test]
fn with_tools_accepts_empty_vec() {
    let clipboard = SystemClipboard::with_tools(vec![]);
    assert!(clipboard.tools().is_empty());
}

#[test]
fn no_tools_means_no_tool_available() {
    let mut clipboard = SystemClipboard::with_tools(vec![]);
    assert!(matches!(
        clipboard.copy("x"),
        Err(ClipboardError::NoToolAvailable)
    ));
    assert!(matches!(
        clipboard.paste(),
        Err(ClipboardError::NoToolAvailable)
    ));
}

#[test]
fn first_available_tool_wins() {
    let first = MockTool::new("first");
    let second = MockTool::new("second");
    let (first_called, second_called) = (first.copy_flag(), second.copy_flag());

    let mut clipboard = clipboard(vec![first, second]);
    clipboard.copy("text").unwrap();

    assert!(first_called.load(Ordering::SeqCst));
    assert!(!second_called.load(Ordering::SeqCst));
}

#[test]
fn unavailable_tools_are_skipped() {
    let missing = MockTool::new("missing").available(false);
    let present = MockTool::new("present");
    let (missing_called, present_called) = (missing.copy_flag(), present.copy_flag());

    let mut clipboard = clipboard(vec![missing, present]);
    clipboard.copy("text").unwrap();

    assert!(!missing_called.load(Ordering::SeqCst));
    assert!(present_called.load(Ordering::SeqCst));
}

#[test]
fn failed_tool_falls_through_to_the_next() {
    let broken = MockTool::new("broken").copy_result(Err(ToolError::Failed("no display".into())));
    let working = MockTool::new("working");
    let working_called = working.copy_flag();

    let mut clipboard = clipboard(vec![broken, working]);
    assert!(clipboard.copy("text").is_ok());
    assert!(working_called.load(Ordering::SeqCst));
}

#[test]
fn last_failure_is_reported_when_every_tool_fails() {
    let a = MockTool::new("a").copy_result(Err(ToolError::Failed("first".into())));
    let b = MockTool::new("b").copy_result(Err(ToolError::Failed("second".into())));

    let mut clipboard = clipboard(vec![a, b]);
    let err = clipboard.copy("text").unwrap_err();
    assert!(matches!(err, ClipboardError::ToolFailed { tool: "b", .. }));
    assert_eq!(err.to_string(), "b failed: second");
}

#[test]
fn not_found_alone_reports_no_tool() {
    let gone = MockTool::new("gone").copy_result(Err(ToolError::NotFound));
    let mut clipboard = clipboard(vec![gone]);
    assert!(matches!(
        clipboard.copy("text"),
        Err(ClipboardError::NoToolAvailable)
    ));
}

#[test]
fn paste_skips_copy_only_tools() {
    let copy_only = MockTool::new("copy-only").paste_result(Err(ToolError::NotSupported));
    let reader = MockTool::new("reader").paste_result(Ok("from clipboard".into()));

    let mut clipboard = clipboard(vec![copy_only, reader]);
    assert_eq!(clipboard.paste().unwrap(), "from clipboard");
}

#[test]
fn paste_reports_invalid_utf8() {
    let garbled = MockTool::new("garbled").paste_result(Err(ToolError::InvalidUtf8));
    let mut clipboard = clipboard(vec![garbled]);
    assert!(matches!(
        clipboard.paste(),
        Err(ClipboardError::InvalidUtf8 { tool: "garbled" })
    ));
}

#[test]
fn platform_tools_are_not_empty() {
    let clipboard = SystemClipboard::new();
    assert!(!clipboard.tools().is_empty());
}
