//! Host-independent key events and time-based key repeat.

use std::time::Duration;

/// Default hold time before a key starts repeating.
pub const DEFAULT_REPEAT_DELAY: Duration = Duration::from_millis(500);

/// Default time between repeats once repeating.
pub const DEFAULT_REPEAT_INTERVAL: Duration = Duration::from_millis(50);

/// Keys the console reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    Escape,
}

/// Modifier state accompanying a key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        ctrl: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ctrl: false,
    };
    pub const CTRL: Modifiers = Modifiers {
        shift: false,
        ctrl: true,
    };
}

/// A key press with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyStroke {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyStroke {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Printable and navigation keys repeat while held; commands do not.
    pub fn repeats(&self) -> bool {
        if self.modifiers.ctrl {
            return false;
        }
        !matches!(self.key, Key::Enter | Key::Tab | Key::Escape)
    }
}

/// Tracks the held key and reports repeats from accumulated time.
///
/// Independent of how often the host ticks: a slow tick simply yields several
/// repeats at once.
#[derive(Debug, Clone)]
pub struct KeyRepeat {
    delay: Duration,
    interval: Duration,
    held: Option<KeyStroke>,
    elapsed: Duration,
    fired: u32,
}

impl Default for KeyRepeat {
    fn default() -> Self {
        Self::new(DEFAULT_REPEAT_DELAY, DEFAULT_REPEAT_INTERVAL)
    }
}

impl KeyRepeat {
    pub fn new(delay: Duration, interval: Duration) -> Self {
        Self {
            delay,
            interval: interval.max(Duration::from_millis(1)),
            held: None,
            elapsed: Duration::ZERO,
            fired: 0,
        }
    }

    /// Start tracking `stroke` if it is a repeating key.
    pub fn press(&mut self, stroke: KeyStroke) {
        if stroke.repeats() {
            self.held = Some(stroke);
        } else {
            self.held = None;
        }
        self.elapsed = Duration::ZERO;
        self.fired = 0;
    }

    /// Stop repeating if `key` is the held key.
    pub fn release(&mut self, key: Key) {
        if self.held.map(|s| s.key) == Some(key) {
            self.cancel();
        }
    }

    pub fn cancel(&mut self) {
        self.held = None;
        self.elapsed = Duration::ZERO;
        self.fired = 0;
    }

    pub fn held(&self) -> Option<KeyStroke> {
        self.held
    }

    /// Advance time and return the held key with the number of repeats due.
    pub fn tick(&mut self, dt: Duration) -> Option<(KeyStroke, u32)> {
        let stroke = self.held?;
        self.elapsed += dt;
        if self.elapsed < self.delay {
            return None;
        }
        let since_delay = self.elapsed - self.delay;
        let due = (since_delay.as_micros() / self.interval.as_micros()) as u32 + 1;
        let new = due.saturating_sub(self.fired);
        self.fired = due;
        (new > 0).then_some((stroke, new))
    }
}
