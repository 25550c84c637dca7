//! Command history with draft-preserving navigation.

use std::collections::VecDeque;

/// Default number of remembered commands.
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Capped list of submitted commands plus a navigation cursor.
///
/// The cursor ranges over `0..=len`; `len` means "editing a fresh command",
/// in which case the user's unsent text lives in `draft`.
#[derive(Debug, Clone)]
pub struct HistoryLog {
    entries: VecDeque<String>,
    capacity: usize,
    cursor: usize,
    draft: String,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
            cursor: 0,
            draft: String::new(),
        }
    }

    /// Record a submitted command and return to the draft position.
    ///
    /// Consecutive duplicates are stored once.
    pub fn submit(&mut self, command: &str) {
        if self.entries.back().map(String::as_str) != Some(command) {
            self.entries.push_back(command.to_string());
            while self.entries.len() > self.capacity {
                self.entries.pop_front();
            }
        }
        self.cursor = self.entries.len();
        self.draft.clear();
    }

    /// Step back to an older entry.
    ///
    /// `current_input` is saved as the draft when leaving the draft position.
    /// Returns `None` when there is no history at all.
    pub fn previous(&mut self, current_input: &str) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }
        if self.is_at_draft() {
            self.draft = current_input.to_string();
        }
        self.cursor = self.cursor.saturating_sub(1);
        self.entries.get(self.cursor).cloned()
    }

    /// Step forward to a newer entry, restoring the draft past the newest one.
    ///
    /// Returns `None` when already at the draft position.
    pub fn next(&mut self) -> Option<String> {
        if self.is_at_draft() {
            return None;
        }
        self.cursor += 1;
        if self.is_at_draft() {
            Some(self.draft.clone())
        } else {
            self.entries.get(self.cursor).cloned()
        }
    }

    pub fn is_at_draft(&self) -> bool {
        self.cursor >= self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
