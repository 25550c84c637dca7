//! Unit tests for command history

use deskcon::console::HistoryLog;

fn log_with(commands: &[&str]) -> HistoryLog {
    let mut log = HistoryLog::new(10);
    for command in commands {
        log.submit(command);
    }
    log
}

#[test]
fn navigation_walks_back_and_restores_the_draft() {
    let mut log = log_with(&["first", "second"]);

    assert_eq!(log.previous("half-typed").as_deref(), Some("second"));
    assert_eq!(log.previous("ignored").as_deref(), Some("first"));
    assert_eq!(log.next().as_deref(), Some("second"));
    assert_eq!(log.next().as_deref(), Some("half-typed"));
    assert_eq!(log.next(), None);
    assert!(log.is_at_draft());
}

#[test]
fn previous_stops_at_the_oldest_entry() {
    let mut log = log_with(&["only"]);
    assert_eq!(log.previous("").as_deref(), Some("only"));
    assert_eq!(log.previous("").as_deref(), Some("only"));
}

#[test]
fn empty_history_has_nothing_to_recall() {
    let mut log = HistoryLog::default();
    assert!(log.is_empty());
    assert_eq!(log.previous("draft"), None);
    assert_eq!(log.next(), None);
}

#[test]
fn consecutive_duplicates_are_stored_once() {
    let log = log_with(&["ls", "ls", "pwd", "ls"]);
    assert_eq!(log.entries().collect::<Vec<_>>(), vec!["ls", "pwd", "ls"]);
}

#[test]
fn oldest_entries_fall_off_at_capacity() {
    let mut log = HistoryLog::new(2);
    log.submit("a");
    log.submit("b");
    log.submit("c");
    assert_eq!(log.len(), 2);
    assert_eq!(log.entries().collect::<Vec<_>>(), vec!["b", "c"]);
}

#[test]
fn submitting_returns_to_the_draft_position() {
    let mut log = log_with(&["a", "b"]);
    log.previous("");
    log.previous("");
    log.submit("c");
    assert!(log.is_at_draft());
    assert_eq!(log.previous("").as_deref(), Some("c"));
}
